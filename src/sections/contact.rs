use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::components::confetti::Confetti;
use crate::content::{AGENCY, CONTACT_EMAIL, SOCIAL_LINKS};
use crate::motion::entrance::use_scroll_entrance;
use crate::motion::timeline::{Ease, Pose, Position, Timeline, Tween};

/// How long the thank-you state (and confetti) stays up after submitting.
pub const CELEBRATION_MS: u32 = 5_000;

const INSTAGRAM_PATH: &str = "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zM12 0C8.741 0 8.333.014 7.053.072 2.695.272.273 2.69.073 7.052.014 8.333 0 8.741 0 12c0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98C8.333 23.986 8.741 24 12 24c3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98C15.668.014 15.259 0 12 0zm0 5.838a6.162 6.162 0 1 0 0 12.324 6.162 6.162 0 0 0 0-12.324zM12 16a4 4 0 1 1 0-8 4 4 0 0 1 0 8zm6.406-11.845a1.44 1.44 0 1 0 0 2.881 1.44 1.44 0 0 0 0-2.881z";
const LINKEDIN_PATH: &str = "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z";

fn icon_path(label: &str) -> &'static str {
    match label {
        "Instagram" => INSTAGRAM_PATH,
        _ => LINKEDIN_PATH,
    }
}

fn reveal() -> Timeline {
    Timeline::new()
        .stagger(0..2, Pose::hidden().y(20.0), Pose::IDENTITY, 700.0, 100.0, Ease::Power2Out, Position::Sequential)
        .add(
            Tween { target: 2, from: Pose::hidden().x(-60.0), to: Pose::IDENTITY, duration: 800.0, ease: Ease::Power3Out },
            Position::Overlap(300.0),
        )
        .add(
            Tween { target: 3, from: Pose::hidden().x(60.0), to: Pose::IDENTITY, duration: 800.0, ease: Ease::Power3Out },
            Position::Overlap(800.0),
        )
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let submitted = use_state(|| false);
    let reset = use_mut_ref(|| None::<Timeout>);

    let section = use_node_ref();
    let title = use_node_ref();
    let lead = use_node_ref();
    let business = use_node_ref();
    let individual = use_node_ref();
    use_scroll_entrance(
        section.clone(),
        vec![title.clone(), lead.clone(), business.clone(), individual.clone()],
        reveal,
    );

    {
        let reset = reset.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Contact form submitted");
            submitted.set(true);
            let submitted = submitted.clone();
            // Replacing the slot cancels a countdown from an earlier submit.
            *reset.borrow_mut() = Some(Timeout::new(CELEBRATION_MS, move || submitted.set(false)));
        })
    };

    html! {
        <div ref={section} id="contact" class="section dark">
            <style>
                {r#"
                    .audience-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin: 3rem 0 4rem;
                    }
                    .audience-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(31, 41, 55, 0.5);
                        transition: transform 0.3s ease;
                    }
                    .audience-card:hover {
                        transform: translateY(-4px);
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 4rem;
                    }
                    @media (max-width: 1023px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .contact-form {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .contact-form .row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .contact-form label {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #9ca3af;
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        padding: 1rem;
                        border: 2px solid rgba(255, 107, 53, 0.4);
                        border-radius: 0.375rem;
                        background: rgba(17, 24, 39, 0.5);
                        color: #fff;
                        font-size: 0.875rem;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        outline: none;
                        border-color: #FF6B35;
                    }
                    .submit-button {
                        align-self: flex-start;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #FF6B35;
                        color: #fff;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .thanks {
                        color: #FF6B35;
                        font-weight: 600;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-links a {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: #1f2937;
                        color: #FF6B35;
                        transition: background 0.2s ease;
                    }
                    .social-links a:hover {
                        background: #374151;
                    }
                    .social-links svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                "#}
            </style>
            <div class="container">
                <h2 ref={title} class="section-title">
                    {"Ready to Transform "}<br />
                    <span class="accent">{"Your Business?"}</span>
                </h2>
                <p ref={lead} class="body-copy narrow">
                    {format!(
                        "Don't let outdated technology hold you back. Join successful businesses worldwide who have already transformed their operations with {}.",
                        AGENCY
                    )}
                </p>
                <div class="audience-cards">
                    <div ref={business} class="audience-card">
                        <h3>{"For Businesses"}</h3>
                        <p>{"Get a free consultation and discover how we can automate your processes and create a website that drives real results."}</p>
                    </div>
                    <div ref={individual} class="audience-card">
                        <h3>{"For Individuals"}</h3>
                        <p>{"Whether you're launching a startup or growing your personal brand, we have solutions tailored for your needs."}</p>
                    </div>
                </div>
                <div id="contact-form" class="contact-grid">
                    <form class="contact-form" {onsubmit}>
                        <div class="row">
                            <div>
                                <label for="name">{"YOUR NAME"}</label>
                                <input type="text" id="name" name="name" placeholder="ENTER YOUR NAME *" required=true />
                            </div>
                            <div>
                                <label for="email">{"YOUR EMAIL"}</label>
                                <input type="email" id="email" name="email" placeholder="ENTER YOUR EMAIL *" required=true />
                            </div>
                        </div>
                        <div>
                            <label for="message">{"MESSAGE"}</label>
                            <textarea id="message" name="message" rows="4" required=true />
                        </div>
                        <button type="submit" class="submit-button">{"SUBMIT"}</button>
                        if *submitted {
                            <p class="thanks" role="status">{"Thanks! We'll be in touch shortly."}</p>
                            <Confetti />
                        }
                    </form>
                    <div class="contact-details">
                        <h3>{"Business Inquiries"}</h3>
                        <a class="accent" href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                        <h3 class="spaced">{"Connect With Us"}</h3>
                        <div class="social-links">
                            {
                                for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a key={link.label} href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                                        <svg fill="currentColor" viewBox="0 0 24 24">
                                            <path d={icon_path(link.label)} />
                                        </svg>
                                    </a>
                                })
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_social_link_has_an_icon() {
        for link in SOCIAL_LINKS {
            assert!(!icon_path(link.label).is_empty());
        }
        assert_ne!(icon_path("Instagram"), icon_path("LinkedIn"));
    }

    #[test]
    fn cards_slide_in_from_both_sides() {
        let poses = reveal().initial_poses();
        assert_eq!(poses.len(), 4);
        assert!(poses[2].1.x < 0.0 && poses[3].1.x > 0.0);
    }
}
