use log::debug;
use web_sys::CustomEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::content::{AGENCY, LOGO_URL, NAV_LINKS};
use crate::motion::entrance::use_intro;
use crate::motion::timeline::{Ease, Pose, Position, Timeline, Tween};
use crate::scroll::progress::{progress_glows, scrub};
use crate::scroll::smooth::{scroll_to, ScrollHandle, ScrollTarget, ScrollUpdate, SCROLL_UPDATE_EVENT};

/// Scroll band (px) over which the header frosts and the progress bar fades in.
const SCRUB_START: f64 = 80.0;
const SCRUB_END: f64 = 200.0;
const BASE_BLUR_PX: f64 = 12.0;
const MAX_BLUR_PX: f64 = 20.0;
/// Share of the band it takes the bar to become fully opaque.
const BAR_FADE_SHARE: f64 = 0.3;

const HEADER: usize = 0;
const LOGO: usize = 1;
const FIRST_NAV: usize = 2;
const CTA: usize = FIRST_NAV + NAV_LINKS.len();

#[derive(Debug, Clone, Copy, PartialEq)]
struct Look {
    blur_px: f64,
    bar_opacity: f64,
}

fn look(scroll_y: f64) -> Look {
    let t = scrub(scroll_y, SCRUB_START, SCRUB_END);
    Look {
        blur_px: BASE_BLUR_PX + (MAX_BLUR_PX - BASE_BLUR_PX) * t,
        bar_opacity: (t / BAR_FADE_SHARE).min(1.0),
    }
}

/// Header intro. Runs from mount, so it has to land inside the entrance
/// fallback window or the tail gets cut off.
fn intro() -> Timeline {
    let pop = Pose::hidden().scale(0.0);
    Timeline::new()
        .add(
            Tween { target: HEADER, from: Pose::hidden().y(-100.0), to: Pose::IDENTITY, duration: 700.0, ease: Ease::Power3Out },
            Position::At(200.0),
        )
        .add(
            Tween { target: LOGO, from: pop, to: Pose::IDENTITY, duration: 600.0, ease: Ease::BackOut },
            Position::Overlap(400.0),
        )
        .stagger(
            FIRST_NAV..CTA,
            Pose::hidden().y(-30.0),
            Pose::IDENTITY,
            500.0,
            80.0,
            Ease::Power2Out,
            Position::Overlap(300.0),
        )
        .add(
            Tween { target: CTA, from: pop, to: Pose::IDENTITY, duration: 500.0, ease: Ease::BackOut },
            Position::Overlap(300.0),
        )
}

fn menu_icon(open: bool) -> Html {
    let path = if open { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" };
    html! {
        <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
        </svg>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let progress = use_state_eq(|| 0.0_f64);
    let look_state = use_state_eq(|| look(0.0));
    let scroll = use_context::<ScrollHandle>();

    let header_ref = use_node_ref();
    let logo_ref = use_node_ref();
    let cta_ref = use_node_ref();
    let nav_refs = use_memo(|_| NAV_LINKS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    let mut targets = vec![header_ref.clone(), logo_ref.clone()];
    targets.extend(nav_refs.iter().cloned());
    targets.push(cta_ref.clone());
    use_intro(targets, intro);

    {
        let progress = progress.clone();
        let look_state = look_state.clone();
        use_event_with_window(SCROLL_UPDATE_EVENT, move |event: CustomEvent| {
            match serde_wasm_bindgen::from_value::<ScrollUpdate>(event.detail()) {
                Ok(update) => {
                    progress.set(update.progress);
                    look_state.set(look(update.scroll_y));
                }
                Err(e) => debug!("Malformed scroll update: {}", e),
            }
        });
    }

    let navigate = {
        let menu_open = menu_open.clone();
        let scroll = scroll.clone();
        move |href: &'static str| {
            let menu_open = menu_open.clone();
            let scroll = scroll.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to(scroll.as_ref(), &ScrollTarget::anchor(href));
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let look_now = *look_state;
    let header_style = format!(
        "backdrop-filter: blur({blur:.1}px); -webkit-backdrop-filter: blur({blur:.1}px);",
        blur = look_now.blur_px
    );
    let glow = if progress_glows(*progress) { "0 0 8px rgba(249, 115, 22, 0.6)" } else { "none" };
    let bar_style = format!(
        "width: {:.2}%; opacity: {:.3}; box-shadow: {};",
        *progress, look_now.bar_opacity, glow
    );

    html! {
        <header ref={header_ref} class="site-header" style={header_style}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(10, 10, 10, 0.8);
                        border-bottom: 1px solid rgba(31, 41, 55, 0.5);
                    }
                    .scroll-progress {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 4px;
                        background: linear-gradient(to right, #FF6B35, #FF6B35, #fb923c);
                        transition: width 0.3s ease-out, box-shadow 0.2s ease-out;
                    }
                    .header-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 80px;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .header-logo img {
                        height: 2rem;
                        width: auto;
                    }
                    .header-nav {
                        display: flex;
                        gap: 2.5rem;
                    }
                    .header-nav a, .mobile-nav a {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        color: #fff;
                        text-decoration: none;
                        transition: color 0.3s ease, transform 0.3s ease;
                    }
                    .header-nav a:hover {
                        color: #FF6B35;
                        transform: translateY(-2px);
                    }
                    .header-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 12px;
                        background: #fff;
                        color: #000;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .menu-toggle {
                        display: none;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .menu-toggle .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .mobile-nav {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                        background: rgba(10, 10, 10, 0.95);
                        border-top: 1px solid rgba(31, 41, 55, 0.5);
                    }
                    @media (max-width: 1023px) {
                        .header-nav, .header-cta {
                            display: none;
                        }
                        .menu-toggle {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="scroll-progress" style={bar_style}></div>
            <div class="header-inner">
                <a href="/" class="header-logo">
                    <img ref={logo_ref} src={LOGO_URL} alt={format!("{} Logo", AGENCY)} />
                </a>
                <nav class="header-nav">
                    {
                        NAV_LINKS.iter().zip(nav_refs.iter()).map(|(link, node)| html! {
                            <a key={link.href} ref={node.clone()} href={link.href} onclick={navigate(link.href)}>
                                {link.label}
                            </a>
                        }).collect::<Html>()
                    }
                </nav>
                <button class="menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    { menu_icon(*menu_open) }
                </button>
                <button ref={cta_ref} class="header-cta" onclick={navigate("#contact")}>
                    {"GET IN TOUCH"}
                    <svg width="16" height="16" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                    </svg>
                </button>
            </div>
            if *menu_open {
                <nav class="mobile-nav">
                    {
                        NAV_LINKS.iter().map(|link| html! {
                            <a key={link.href} href={link.href} onclick={navigate(link.href)}>{link.label}</a>
                        }).collect::<Html>()
                    }
                </nav>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::entrance::FALLBACK_MS;

    #[test]
    fn header_is_plain_above_the_band() {
        assert_eq!(look(0.0), Look { blur_px: BASE_BLUR_PX, bar_opacity: 0.0 });
        assert_eq!(look(SCRUB_START), look(0.0));
    }

    #[test]
    fn bar_is_opaque_before_blur_peaks() {
        let partway = look(SCRUB_START + (SCRUB_END - SCRUB_START) * 0.5);
        assert_eq!(partway.bar_opacity, 1.0);
        assert!(partway.blur_px < MAX_BLUR_PX);
        assert_eq!(look(SCRUB_END * 3.0).blur_px, MAX_BLUR_PX);
    }

    #[test]
    fn intro_covers_every_target_once() {
        let mut targets: Vec<_> = intro().initial_poses().into_iter().map(|(target, _)| target).collect();
        targets.sort_unstable();
        assert_eq!(targets, (HEADER..=CTA).collect::<Vec<_>>());
    }

    #[test]
    fn intro_starts_shortly_after_mount() {
        let first = intro().entries()[0];
        assert_eq!(first.start, 200.0);
    }

    #[test]
    fn intro_lands_before_the_fallback() {
        let timeline = intro();
        let fallback = FALLBACK_MS as f64;
        assert!(timeline.total() < fallback);
        for entry in timeline.entries() {
            assert!(
                entry.start + entry.tween.duration < fallback,
                "target {} ends at {}ms",
                entry.tween.target,
                entry.start + entry.tween.duration
            );
        }
        let cta = timeline.entries().iter().find(|entry| entry.tween.target == CTA);
        assert!(cta.is_some_and(|entry| entry.start < fallback));
    }
}
