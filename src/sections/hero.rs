use yew::prelude::*;

use crate::components::typewriter::TypingText;
use crate::content::{AGENCY, HERO_PHRASES, HERO_VISUAL_URL};
use crate::motion::entrance::{use_intro, use_scroll_entrance};
use crate::motion::timeline::{Ease, Pose, Position, Timeline, Tween};

fn banner() -> Timeline {
    Timeline::new()
        .stagger(
            0..2,
            Pose::hidden().y(30.0),
            Pose::IDENTITY,
            800.0,
            150.0,
            Ease::Power3Out,
            Position::At(0.0),
        )
        // Blur-fade stand-in: a short rise that starts 300ms in.
        .add(
            Tween { target: 2, from: Pose::hidden().y(8.0), to: Pose::IDENTITY, duration: 600.0, ease: Ease::Power2Out },
            Position::At(300.0),
        )
        .add(
            Tween { target: 3, from: Pose::hidden().y(20.0), to: Pose::IDENTITY, duration: 600.0, ease: Ease::Power2Out },
            Position::Overlap(300.0),
        )
}

fn partners() -> Timeline {
    Timeline::new()
        .add(
            Tween { target: 0, from: Pose::hidden().x(-60.0), to: Pose::IDENTITY, duration: 1_000.0, ease: Ease::Power3Out },
            Position::Sequential,
        )
        .add(
            Tween { target: 1, from: Pose::hidden().x(60.0), to: Pose::IDENTITY, duration: 1_000.0, ease: Ease::Power3Out },
            Position::Overlap(800.0),
        )
}

fn arrow_right() -> Html {
    html! {
        <svg class="icon-inline" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3" />
        </svg>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let eyebrow = use_node_ref();
    let title = use_node_ref();
    let lead = use_node_ref();
    let actions = use_node_ref();
    use_intro(vec![eyebrow.clone(), title.clone(), lead.clone(), actions.clone()], banner);

    let partners_section = use_node_ref();
    let visual = use_node_ref();
    let copy = use_node_ref();
    use_scroll_entrance(partners_section.clone(), vec![visual.clone(), copy.clone()], partners);

    html! {
        <>
            <style>
                {r#"
                    .hero-banner {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 10rem 1.5rem 4rem;
                        text-align: center;
                        overflow: hidden;
                        background: radial-gradient(circle at 50% 30%, rgba(255, 107, 53, 0.12), transparent 60%);
                    }
                    .hero-title {
                        margin-top: 1rem;
                        font-size: clamp(1.9rem, 5vw, 4.5rem);
                        font-weight: 800;
                        line-height: 1.15;
                        background: linear-gradient(90deg, #FF6B35, #FFFFFF);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-title .typing-text {
                        display: inline-block;
                        min-width: 200px;
                        text-align: left;
                    }
                    .typing-caret {
                        animation: caret-blink 1s steps(1) infinite;
                    }
                    @keyframes caret-blink {
                        50% { opacity: 0; }
                    }
                    .hero-lead {
                        margin: 1.5rem auto 0;
                        max-width: 56rem;
                        font-size: 1.2rem;
                        color: #d1d5db;
                    }
                    .hero-actions {
                        margin-top: 2.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .partners {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        align-items: center;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }
                    .partners-visual {
                        padding: 0.5rem;
                        border-radius: 1rem;
                        background: rgba(31, 41, 55, 0.2);
                    }
                    .partners-visual img {
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        object-fit: cover;
                        border-radius: 0.75rem;
                    }
                    .partners-proof {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        margin-top: 1.5rem;
                        font-weight: 700;
                        color: #d1d5db;
                    }
                "#}
            </style>
            <div class="hero-banner">
                <div class="hero-content">
                    <p ref={eyebrow} class="eyebrow">{"Web and Automation Agency"}</p>
                    <h1 ref={title} class="hero-title">
                        {"Transform Your Business with"}
                        <br />
                        <TypingText phrases={HERO_PHRASES} />
                    </h1>
                    <p ref={lead} class="hero-lead">
                        { format!(
                            "{} creates visually striking websites that captivate customers and intelligent automation systems that eliminate repetitive tasks. Focus on growth while we handle the tech.",
                            AGENCY
                        ) }
                    </p>
                    <div ref={actions} class="hero-actions">
                        <a href="#contact" class="button-primary">{"Get Your Free Consultation"}</a>
                        <a href="#portfolio" class="button-secondary">
                            {"View Our Portfolio"}
                            { arrow_right() }
                        </a>
                    </div>
                </div>
            </div>
            <div ref={partners_section} class="partners">
                <div ref={visual} class="partners-visual">
                    <img src={HERO_VISUAL_URL} alt="3D Animation" loading="lazy" />
                </div>
                <div ref={copy}>
                    <h2 class="section-title">
                        {"Your Digital Transformation "}<span class="accent">{"Partners"}</span>
                    </h2>
                    <p class="body-copy">
                        {"We're not just another web agency. We're digital transformation specialists who combine cutting-edge 3D website design with intelligent automation solutions."}
                    </p>
                    <p class="eyebrow spaced">{"Trusted by Businesses Worldwide"}</p>
                    <div class="partners-proof">
                        <span>{"Local Expertise"}</span>
                        <span>{"•"}</span>
                        <span>{"Global Standards"}</span>
                    </div>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_paragraph_waits_for_the_title() {
        let timeline = banner();
        let lead = timeline.entries().iter().find(|e| e.tween.target == 2).unwrap();
        assert_eq!(lead.start, 300.0);
    }

    #[test]
    fn partners_columns_slide_in_from_opposite_sides() {
        let poses = partners().initial_poses();
        assert!(poses[0].1.x < 0.0);
        assert!(poses[1].1.x > 0.0);
    }
}
