use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::error::window;
use crate::scroll::progress::{back_to_top_visible, ScrollMetrics};
use crate::scroll::smooth::{scroll_to, ScrollHandle, ScrollTarget};

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);
    let scroll = use_context::<ScrollHandle>();

    let check = {
        let visible = visible.clone();
        move || {
            if let Ok(metrics) = window().and_then(|w| ScrollMetrics::read(&w)) {
                visible.set(back_to_top_visible(metrics.progress()));
            }
        }
    };

    // Progress depends on the viewport too, so a resize alone can cross
    // the threshold.
    {
        let check = check.clone();
        use_event_with_window("scroll", move |_: Event| check());
    }
    {
        let check = check.clone();
        use_event_with_window("resize", move |_: Event| check());
    }

    // Initial position, e.g. after a reload halfway down the page.
    use_effect_with_deps(
        move |_| {
            check();
            || ()
        },
        (),
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        scroll_to(scroll.as_ref(), &ScrollTarget::Top);
    });

    html! {
        <div class="back-to-top-container">
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        bottom: 3rem;
                        right: 3rem;
                        z-index: 50;
                        padding: 0.75rem;
                        border-radius: 9999px;
                        border: 2px solid #FF6B35;
                        background: #FF6B35;
                        color: #fff;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                        transition: all 0.3s ease;
                    }
                    .back-to-top:hover {
                        background: #fff;
                        color: #FF6B35;
                        transform: scale(1.1);
                    }
                    .back-to-top svg {
                        display: block;
                        width: 1.25rem;
                        height: 1.25rem;
                    }
                "#}
            </style>
            if *visible {
                <button class="back-to-top" aria-label="Back to top" {onclick}>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M18 15l-6-6-6 6" />
                    </svg>
                </button>
            }
        </div>
    }
}
