use yew::prelude::*;

use crate::content::{featured_cases, CaseStudy, Device};
use crate::motion::entrance::{use_scroll_entrance, FALLBACK_MS};
use crate::motion::timeline::{Ease, Pose, Position, Timeline, Tween};

const TITLE: &str = "Success Stories That ";
const TITLE_ACCENT: &str = "Speak Volumes";
const CHECK_PATH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Char { ch: char, accent: bool },
    Space,
}

/// Title split into individually animated characters. Spaces stay plain
/// text so the line can still wrap between words.
fn glyphs() -> Vec<Glyph> {
    let plain = TITLE.chars().map(|ch| (ch, false));
    let accent = TITLE_ACCENT.chars().map(|ch| (ch, true));
    plain
        .chain(accent)
        .map(|(ch, accent)| if ch.is_whitespace() { Glyph::Space } else { Glyph::Char { ch, accent } })
        .collect()
}

fn char_count() -> usize {
    glyphs().iter().filter(|g| matches!(g, Glyph::Char { .. })).count()
}

// Targets: subtitle, then one per title character, then one per case.
fn reveal() -> Timeline {
    let chars = char_count();
    let cases = featured_cases().count();
    let first_case = 1 + chars;
    Timeline::new()
        .add(
            Tween {
                target: 0,
                from: Pose::hidden().y(35.0).rotate_x(-18.0).perspective(1_000.0),
                to: Pose::IDENTITY.perspective(1_000.0),
                duration: 800.0,
                ease: Ease::Power3Out,
            },
            Position::At(0.0),
        )
        .stagger(
            1..first_case,
            Pose::hidden().y(90.0).rotate_x(50.0).scale(0.7).perspective(1_100.0),
            Pose::IDENTITY.perspective(1_100.0),
            600.0,
            20.0,
            Ease::BackOutSoft,
            Position::At(300.0),
        )
        .stagger(
            first_case..first_case + cases,
            Pose::hidden().y(80.0).scale(0.85).rotate_y(-20.0).perspective(1_000.0),
            Pose::IDENTITY.perspective(1_000.0),
            700.0,
            150.0,
            Ease::Power3Out,
            Position::Overlap(500.0),
        )
}

fn device_frame(case: &CaseStudy) -> Html {
    match case.device {
        Device::Browser { url } => html! {
            <div class="device-browser">
                <div class="browser-bar">
                    <span class="dot red"></span>
                    <span class="dot amber"></span>
                    <span class="dot green"></span>
                    <span class="browser-url">{url}</span>
                </div>
                <img src={case.image} alt={case.title} loading="lazy" />
            </div>
        },
        Device::Phone => html! {
            <div class="device-phone">
                <div class="phone-notch"></div>
                <img src={case.image} alt={case.title} loading="lazy" />
            </div>
        },
    }
}

fn case_card(case: &CaseStudy, node: NodeRef, flipped: bool) -> Html {
    html! {
        <div ref={node} class={classes!("case", flipped.then_some("flipped"))}>
            <div class="case-visual">
                { device_frame(case) }
            </div>
            <div class="case-copy">
                <p class="eyebrow">{"#3D WEBSITES #AI AUTOMATION #WEB DEVELOPMENT"}</p>
                <h3>{case.title}</h3>
                <div class="case-tags">
                    { for case.tags.iter().map(|tag| html! { <span key={*tag} class="tag">{*tag}</span> }) }
                </div>
                <div class="case-facts">
                    <div>
                        <p class="fact-label">{"TECH STACK"}</p>
                        <p class="fact-value">{case.tech}</p>
                    </div>
                    <div>
                        <p class="fact-label">{"TIMELINE"}</p>
                        <p class="fact-value">{case.timeline}</p>
                    </div>
                </div>
                <p class="fact-label">{"MEASURABLE RESULTS"}</p>
                <ul class="case-results">
                    {
                        for case.results.iter().map(|result| html! {
                            <li key={*result}>
                                <svg class="check" fill="currentColor" viewBox="0 0 20 20">
                                    <path fill-rule="evenodd" clip-rule="evenodd" d={CHECK_PATH} />
                                </svg>
                                {*result}
                            </li>
                        })
                    }
                </ul>
            </div>
        </div>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    let section = use_node_ref();
    let subtitle = use_node_ref();
    let glyph_refs = use_memo(|_| (0..char_count()).map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let case_refs = use_memo(|_| featured_cases().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    let mut targets = vec![subtitle.clone()];
    targets.extend(glyph_refs.iter().cloned());
    targets.extend(case_refs.iter().cloned());
    use_scroll_entrance(section.clone(), targets, reveal);

    let mut char_refs = glyph_refs.iter();
    let title: Html = glyphs()
        .into_iter()
        .map(|glyph| match glyph {
            Glyph::Space => html! { {" "} },
            Glyph::Char { ch, accent } => {
                let node = char_refs.next().cloned().unwrap_or_default();
                html! {
                    <span ref={node} class={classes!("glyph", accent.then_some("accent"))}>{ch.to_string()}</span>
                }
            }
        })
        .collect();

    html! {
        <div ref={section} id="portfolio" class="section light">
            <style>
                {r#"
                    .glyph {
                        display: inline-block;
                        transform-origin: center bottom;
                    }
                    .case {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: center;
                        margin-top: 6rem;
                    }
                    .case.flipped .case-visual {
                        order: 2;
                    }
                    .case-visual {
                        display: flex;
                        justify-content: center;
                        transition: transform 0.3s ease;
                    }
                    .case-visual:hover {
                        transform: scale(1.05);
                    }
                    .device-browser {
                        width: 100%;
                        max-width: 42rem;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: #f3f4f6;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .browser-bar {
                        display: flex;
                        align-items: center;
                        gap: 0.4rem;
                        padding: 0.6rem 0.8rem;
                        background: #e5e7eb;
                    }
                    .browser-bar .dot {
                        width: 0.7rem;
                        height: 0.7rem;
                        border-radius: 9999px;
                    }
                    .dot.red { background: #ef4444; }
                    .dot.amber { background: #f59e0b; }
                    .dot.green { background: #22c55e; }
                    .browser-url {
                        margin-left: 1rem;
                        font-size: 0.75rem;
                        color: #6b7280;
                    }
                    .device-browser img, .device-phone img {
                        display: block;
                        width: 100%;
                    }
                    .device-phone {
                        position: relative;
                        max-width: 20rem;
                        border: 10px solid #111;
                        border-radius: 2.5rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .phone-notch {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        width: 40%;
                        height: 1.4rem;
                        transform: translateX(-50%);
                        border-radius: 0 0 1rem 1rem;
                        background: #111;
                    }
                    .case-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 1rem;
                    }
                    .tag {
                        padding: 0.35rem 0.75rem;
                        border-radius: 9999px;
                        background: #1f2937;
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 700;
                    }
                    .case-facts {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        margin: 2rem 0;
                    }
                    .fact-label {
                        font-size: 0.8rem;
                        font-weight: 700;
                        color: #6b7280;
                    }
                    .case-results li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                        margin-top: 0.5rem;
                        font-weight: 600;
                    }
                    .case-results .check {
                        flex-shrink: 0;
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #FF6B35;
                    }
                "#}
            </style>
            <div class="container">
                <p ref={subtitle} class="eyebrow">{"Our Portfolio"}</p>
                <h2 class="section-title" aria-label={format!("{}{}", TITLE, TITLE_ACCENT)}>{title}</h2>
                {
                    featured_cases().zip(case_refs.iter()).enumerate().map(|(i, (case, node))| {
                        case_card(case, node.clone(), i % 2 == 1)
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_splits_into_characters_without_spaces() {
        assert_eq!(char_count(), "SuccessStoriesThatSpeakVolumes".len());
        assert_eq!(glyphs().iter().filter(|g| **g == Glyph::Space).count(), 4);
    }

    #[test]
    fn accent_covers_only_the_last_words() {
        let accented: String = glyphs()
            .into_iter()
            .filter_map(|g| match g {
                Glyph::Char { ch, accent: true } => Some(ch),
                _ => None,
            })
            .collect();
        assert_eq!(accented, "SpeakVolumes");
    }

    #[test]
    fn reveal_finishes_before_the_fallback() {
        assert!(reveal().total() < FALLBACK_MS as f64);
    }

    #[test]
    fn every_target_is_animated() {
        let expected = 1 + char_count() + featured_cases().count();
        assert_eq!(reveal().initial_poses().len(), expected);
    }
}
