//! Static copy and asset locations for the landing page.

pub const AGENCY: &str = "SASEK Labs";
pub const CONTACT_EMAIL: &str = "saseklabs@gmail.com";

pub const LOGO_URL: &str = "https://s76r76lcog.ufs.sh/f/7TPlciUQ16Ae7SQzbPqUQ16AebCoRl0y5Tp3JtaPcrIjgBEw";
pub const FOOTER_LOGO_URL: &str = "https://s76r76lcog.ufs.sh/f/7TPlciUQ16AemJSJCcnurbY4oPp3qCvGKalestyZHizEnIBx";
pub const HERO_VISUAL_URL: &str = "https://s76r76lcog.ufs.sh/f/7TPlciUQ16AeaTMRnGLp2Rges5CdbK9F7yU3IvTNjLuZ1Soz";

pub const HERO_PHRASES: &[&str] = &["Stunning Websites", "Smart Automations"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "SERVICES", href: "#services" },
    NavLink { label: "OUR PORTFOLIO", href: "#portfolio" },
    NavLink { label: "ABOUT SASEK", href: "#about" },
    NavLink { label: "CONTACT US", href: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "WEBSITE DEVELOPMENT",
        description: "We create responsive, high-performance websites using cutting-edge technologies. Our sites are optimized for speed, SEO, and user experience to ensure your business stands out online.",
        badge: "WEB",
    },
    Service {
        title: "AI AND AUTOMATION",
        description: "Leverage the power of artificial intelligence to automate repetitive tasks, analyze data, and make smarter business decisions. Our AI solutions give you a competitive edge.",
        badge: "AI",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Browser { url: &'static str },
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub tech: &'static str,
    pub timeline: &'static str,
    pub results: &'static [&'static str],
    pub image: &'static str,
    pub device: Device,
    pub featured: bool,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "E-Commerce Platform Transformation",
        tags: &["RETAIL", "AFRICA"],
        tech: "React, Three.js, Node.js",
        timeline: "4 months",
        results: &[
            "+250% increase in online sales",
            "40% reduction in cart abandonment",
            "3x faster page load times",
        ],
        image: "https://picsum.photos/seed/ecommerce/1200/800",
        device: Device::Browser { url: "luxeafrica.com" },
        featured: true,
    },
    CaseStudy {
        title: "Restaurant Chain Automation System",
        tags: &["FOOD & BEVERAGE", "MULTI-LOCATION"],
        tech: "Python, AI/ML, Custom APIs",
        timeline: "5 months",
        results: &[
            "20 hours saved per week per location",
            "95% reduction in manual data entry",
            "Real-time inventory management across 12 locations",
        ],
        image: "https://picsum.photos/seed/restaurant-mobile/800/1600",
        device: Device::Phone,
        featured: false,
    },
    CaseStudy {
        title: "Professional Services Website Redesign",
        tags: &["CONSULTING", "GLOBAL"],
        tech: "Next.js, WebGL, TypeScript",
        timeline: "3 months",
        results: &[
            "+180% increase in lead generation",
            "Premium brand positioning achieved",
            "Featured in design awards",
        ],
        image: "https://picsum.photos/seed/consulting/1200/800",
        device: Device::Browser { url: "modernconsulting.io" },
        featured: true,
    },
];

pub fn featured_cases() -> impl Iterator<Item = &'static CaseStudy> {
    CASE_STUDIES.iter().filter(|case| case.featured)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Instagram", href: "https://www.instagram.com/saseklabs/" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/company/saseklabs/" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_match_section_ids() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(ids, vec!["#services", "#portfolio", "#about", "#contact"]);
    }

    #[test]
    fn restaurant_case_is_not_featured() {
        let titles: Vec<_> = featured_cases().map(|case| case.title).collect();
        assert_eq!(titles.len(), 2);
        assert!(!titles.contains(&"Restaurant Chain Automation System"));
    }
}
