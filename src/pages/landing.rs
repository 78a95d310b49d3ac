use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::lazy_section::LazySection;
use crate::perf::use_performance_monitor;
use crate::scroll::smooth::SmoothScroll;
use crate::sections::{
    case_studies::CaseStudies, contact::Contact, footer::Footer, header::Header, hero::Hero,
    services::Services, team::Team,
};

const SITE_CSS: &str = r#"
    html, body {
        margin: 0;
        background: #0a0a0a;
        color: #fff;
        font-family: 'Inter', system-ui, -apple-system, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    *, *::before, *::after {
        box-sizing: border-box;
    }
    .section {
        padding: 6rem 0;
    }
    .section.dark {
        background: #0a0a0a;
        color: #fff;
    }
    .section.light {
        background: #fff;
        color: #000;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .eyebrow {
        font-size: 0.875rem;
        font-weight: 600;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: #9ca3af;
    }
    .eyebrow.spaced, h3.spaced {
        margin-top: 2rem;
    }
    .section-title {
        margin-top: 0.5rem;
        font-size: clamp(2.25rem, 4vw, 3rem);
        font-weight: 800;
        letter-spacing: -0.02em;
    }
    .accent {
        color: #FF6B35;
    }
    .body-copy {
        margin-top: 1.5rem;
        line-height: 1.7;
        color: inherit;
        opacity: 0.8;
    }
    .body-copy.narrow {
        max-width: 48rem;
        font-size: 1.125rem;
    }
    .button-primary, .button-secondary {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        font-size: 0.875rem;
        font-weight: 700;
        text-decoration: none;
        transition: background 0.2s ease, transform 0.2s ease;
    }
    .button-primary {
        background: linear-gradient(90deg, #FF6B35, #F7931E);
        color: #fff;
    }
    .button-primary:hover {
        transform: translateY(-2px);
    }
    .button-secondary {
        background: rgba(55, 65, 81, 0.5);
        color: #fff;
    }
    .button-secondary:hover {
        background: rgba(75, 85, 99, 0.5);
    }
    .icon-inline {
        width: 1rem;
        height: 1rem;
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_performance_monitor();

    html! {
        <div class="landing">
            <style>{SITE_CSS}</style>
            <SmoothScroll>
                <Header />
                <main>
                    <section>
                        <Hero />
                    </section>
                    <LazySection root_margin="200px" anchor="services" class="section-shell dark">
                        <section><Services /></section>
                    </LazySection>
                    <LazySection root_margin="500px" anchor="about" class="section-shell light">
                        <section><Team /></section>
                    </LazySection>
                    <LazySection root_margin="600px" anchor="portfolio" class="section-shell light">
                        <section><CaseStudies /></section>
                    </LazySection>
                    <LazySection root_margin="800px" anchor="contact" class="section-shell dark">
                        <section><Contact /></section>
                    </LazySection>
                </main>
                <Footer />
                <BackToTop />
            </SmoothScroll>
        </div>
    }
}
