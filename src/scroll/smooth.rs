//! Page-wide smooth scrolling.
//!
//! [`SmoothScroll`] is the only place a [`ScrollHandle`] is created or shut
//! down. Everything below it reaches the handle through context and must
//! cope with it being inactive (no live animation engine), in which case
//! requests fall back to the browser's native smooth scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use web_sys::{
    CustomEvent, CustomEventInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, WheelEvent, Window,
};
use yew::prelude::*;

use super::progress::ScrollMetrics;
use super::tween::{Inertia, FRAME_MS};
use crate::error::{document, window, DomError};
use crate::lifecycle::Disposer;
use crate::motion::engine::Motion;

/// Custom window event carrying [`ScrollUpdate`] as its detail.
pub const SCROLL_UPDATE_EVENT: &str = "scrollUpdate";
/// Height of the fixed header that anchored sections must clear.
pub const HEADER_OFFSET: f64 = 80.0;

const LINE_HEIGHT_PX: f64 = 16.0;

const ANCHOR_CSS: &str = r#"
    #services, #portfolio, #about, #contact {
        scroll-margin-top: 80px;
    }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollUpdate {
    pub progress: f64,
    pub scroll_y: f64,
}

impl From<&ScrollMetrics> for ScrollUpdate {
    fn from(metrics: &ScrollMetrics) -> Self {
        ScrollUpdate { progress: metrics.progress(), scroll_y: metrics.scroll_y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    Top,
    Offset(f64),
    Selector(String),
}

impl ScrollTarget {
    /// Target for an in-page link such as `#contact`.
    pub fn anchor(href: &str) -> Self {
        match href {
            "" | "#" | "/" | "#top" => ScrollTarget::Top,
            _ => ScrollTarget::Selector(href.to_string()),
        }
    }
}

struct Smoother {
    inertia: Inertia,
    ticker: Option<Interval>,
    active: bool,
}

#[derive(Clone)]
pub struct ScrollHandle {
    inner: Rc<RefCell<Smoother>>,
}

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollHandle {
    fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Smoother {
                inertia: Inertia::new(0.0, 0.0),
                ticker: None,
                active: false,
            })),
        }
    }

    /// Whether wheel input is being smoothed.
    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    fn activate(&self) {
        self.inner.borrow_mut().active = true;
    }

    fn shutdown(&self) {
        let mut smoother = self.inner.borrow_mut();
        smoother.active = false;
        smoother.ticker = None;
    }

    /// Scrolls to `target`, eased when `animated`.
    pub fn scroll_to(&self, target: &ScrollTarget, animated: bool) -> Result<(), DomError> {
        if !self.is_active() {
            return native_scroll_to(target, animated);
        }
        let window = window()?;
        let y = resolve(&window, target)?;
        let metrics = ScrollMetrics::read(&window)?;
        {
            let mut smoother = self.inner.borrow_mut();
            if smoother.ticker.is_none() {
                smoother.inertia.sync(metrics.scroll_y, metrics.max_scroll());
            } else {
                smoother.inertia.set_max(metrics.max_scroll());
            }
            if animated {
                smoother.inertia.aim(y);
            } else {
                smoother.inertia.jump(y);
                smoother.ticker = None;
                window.scroll_to_with_x_and_y(0.0, smoother.inertia.position());
            }
        }
        if animated {
            self.ensure_ticking();
        }
        Ok(())
    }

    /// Adopts scroll positions we did not cause while idle.
    fn observe(&self, metrics: &ScrollMetrics) {
        let mut smoother = self.inner.borrow_mut();
        if smoother.ticker.is_none() {
            smoother.inertia.sync(metrics.scroll_y, metrics.max_scroll());
        } else {
            smoother.inertia.set_max(metrics.max_scroll());
        }
    }

    fn wheel(&self, window: &Window, event: &WheelEvent) {
        if event.ctrl_key() {
            return; // pinch zoom
        }
        let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        let delta = match event.delta_mode() {
            WheelEvent::DOM_DELTA_LINE => event.delta_y() * LINE_HEIGHT_PX,
            WheelEvent::DOM_DELTA_PAGE => event.delta_y() * viewport,
            _ => event.delta_y(),
        };
        event.prevent_default();
        self.inner.borrow_mut().inertia.push(delta);
        self.ensure_ticking();
    }

    fn ensure_ticking(&self) {
        let mut smoother = self.inner.borrow_mut();
        if smoother.ticker.is_some() || !smoother.inertia.is_moving() {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        smoother.ticker = Some(Interval::new(FRAME_MS, move || {
            let Some(inner) = weak.upgrade() else { return };
            let mut smoother = inner.borrow_mut();
            let y = smoother.inertia.step();
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, y);
            }
            if !smoother.inertia.is_moving() {
                smoother.ticker = None;
            }
        }));
    }
}

fn resolve(window: &Window, target: &ScrollTarget) -> Result<f64, DomError> {
    match target {
        ScrollTarget::Top => Ok(0.0),
        ScrollTarget::Offset(y) => Ok(*y),
        ScrollTarget::Selector(selector) => {
            let el = document()?
                .query_selector(selector)?
                .ok_or_else(|| DomError::MissingElement(selector.clone()))?;
            Ok(el.get_bounding_client_rect().top() + window.scroll_y()? - HEADER_OFFSET)
        }
    }
}

fn behavior(animated: bool) -> ScrollBehavior {
    if animated {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    }
}

fn native_scroll_to(target: &ScrollTarget, animated: bool) -> Result<(), DomError> {
    let window = window()?;
    match target {
        ScrollTarget::Selector(selector) => {
            let el = document()?
                .query_selector(selector)?
                .ok_or_else(|| DomError::MissingElement(selector.clone()))?;
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(behavior(animated));
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
        _ => {
            let options = ScrollToOptions::new();
            options.set_top(resolve(&window, target)?);
            options.set_behavior(behavior(animated));
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    Ok(())
}

/// Scrolls through the page's handle when there is one, natively otherwise.
pub fn scroll_to(handle: Option<&ScrollHandle>, target: &ScrollTarget) {
    let result = match handle {
        Some(handle) => handle.scroll_to(target, true),
        None => native_scroll_to(target, true),
    };
    if let Err(e) = result {
        warn!("Scroll to {:?} failed: {}", target, e);
    }
}

fn broadcast(window: &Window, metrics: &ScrollMetrics) -> Result<(), DomError> {
    let init = CustomEventInit::new();
    init.set_detail(&serde_wasm_bindgen::to_value(&ScrollUpdate::from(metrics))?);
    let event = CustomEvent::new_with_event_init_dict(SCROLL_UPDATE_EVENT, &init)?;
    window.dispatch_event(&event)?;
    Ok(())
}

fn install(handle: &ScrollHandle, inertial: bool, disposer: &mut Disposer) -> Result<(), DomError> {
    let window = window()?;
    let metrics = ScrollMetrics::read(&window)?;
    handle.observe(&metrics);

    for event in ["scroll", "resize"] {
        let handle = handle.clone();
        let window_ref = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || match ScrollMetrics::read(&window_ref) {
            Ok(metrics) => {
                handle.observe(&metrics);
                if let Err(e) = broadcast(&window_ref, &metrics) {
                    debug!("Progress broadcast failed: {}", e);
                }
            }
            Err(e) => debug!("Could not read scroll metrics: {}", e),
        });
        disposer.listen(&window, event, callback, true)?;
    }

    if inertial {
        let wheel_handle = handle.clone();
        let window_ref = window.clone();
        let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            wheel_handle.wheel(&window_ref, &event);
        });
        // Must not be passive: the default scroll is replaced.
        disposer.listen(&window, "wheel", on_wheel, false)?;
        handle.activate();
    }

    let owned = handle.clone();
    disposer.defer(move || owned.shutdown());

    broadcast(&window, &metrics)
}

#[derive(Properties, PartialEq)]
pub struct SmoothScrollProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SmoothScroll)]
pub fn smooth_scroll(props: &SmoothScrollProps) -> Html {
    let motion = use_context::<Motion>();
    let handle = use_state(ScrollHandle::new);

    {
        let handle = (*handle).clone();
        use_effect_with_deps(
            move |_| {
                let mut disposer = Disposer::new();
                let inertial = motion.map(|m| m.is_live()).unwrap_or(false);
                match install(&handle, inertial, &mut disposer) {
                    Ok(()) => info!("Smooth scrolling initialised (inertial: {})", inertial),
                    Err(e) => {
                        warn!("Smooth scrolling unavailable, using native scrolling: {}", e);
                        disposer.dispose();
                    }
                }
                move || drop(disposer)
            },
            (),
        );
    }

    html! {
        <div id="smooth-wrapper">
            <style>{ANCHOR_CSS}</style>
            <ContextProvider<ScrollHandle> context={(*handle).clone()}>
                <div id="smooth-content">
                    { for props.children.iter() }
                </div>
            </ContextProvider<ScrollHandle>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_to_targets() {
        assert_eq!(ScrollTarget::anchor("#contact"), ScrollTarget::Selector("#contact".to_string()));
        assert_eq!(ScrollTarget::anchor("#"), ScrollTarget::Top);
        assert_eq!(ScrollTarget::anchor("/"), ScrollTarget::Top);
    }

    #[test]
    fn new_handle_is_inactive_until_installed() {
        let handle = ScrollHandle::new();
        assert!(!handle.is_active());
        handle.activate();
        assert!(handle.is_active());
        handle.shutdown();
        assert!(!handle.is_active());
    }

    #[test]
    fn handles_compare_by_identity() {
        let handle = ScrollHandle::new();
        assert!(handle == handle.clone());
        assert!(handle != ScrollHandle::new());
    }
}
