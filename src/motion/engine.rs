//! Animation capability provider.
//!
//! Components never ask "is animation available?" themselves. The [`Motion`]
//! handle is chosen once at the root and handed down through context; with
//! the [`Static`] engine every request is a no-op and content simply stays
//! visible.

use std::ops::Deref;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::{Animation, Element, HtmlElement};

use super::timeline::{Keyframe, Pose, Timing};
use crate::config;
use crate::error::{window, DomError};

const ANIMATE: &str = "animate";

/// Two-frame keyframe list in the order `Element.animate` plays it.
fn keyframes(from: &Pose, to: &Pose) -> [Keyframe; 2] {
    [from.keyframe(), to.keyframe()]
}

pub trait MotionEngine {
    fn name(&self) -> &'static str;

    /// Whether requests actually move anything.
    fn is_live(&self) -> bool;

    /// Pins `el` at `pose` with inline styles.
    fn hold(&self, el: &HtmlElement, pose: &Pose) -> Result<(), DomError>;

    /// Drops inline pose styles so the element renders as authored.
    fn release(&self, el: &HtmlElement) -> Result<(), DomError>;

    /// Starts a two-keyframe animation. `None` means nothing was started.
    fn animate(
        &self,
        el: &Element,
        from: &Pose,
        to: &Pose,
        timing: &Timing,
    ) -> Result<Option<Animation>, DomError>;
}

/// Browser Web Animations API.
pub struct WebAnimations;

impl MotionEngine for WebAnimations {
    fn name(&self) -> &'static str {
        "web-animations"
    }

    fn is_live(&self) -> bool {
        true
    }

    fn hold(&self, el: &HtmlElement, pose: &Pose) -> Result<(), DomError> {
        let style = el.style();
        style.set_property("opacity", &pose.opacity.to_string())?;
        style.set_property("transform", &pose.transform())?;
        Ok(())
    }

    fn release(&self, el: &HtmlElement) -> Result<(), DomError> {
        let style = el.style();
        style.remove_property("opacity")?;
        style.remove_property("transform")?;
        Ok(())
    }

    fn animate(
        &self,
        el: &Element,
        from: &Pose,
        to: &Pose,
        timing: &Timing,
    ) -> Result<Option<Animation>, DomError> {
        let keyframes = serde_wasm_bindgen::to_value(&keyframes(from, to))?;
        let timing = serde_wasm_bindgen::to_value(timing)?;
        // Called through the prototype; the typed web-sys binding is unstable.
        let animate = Reflect::get(el, &JsValue::from_str(ANIMATE))?;
        let Some(animate) = animate.dyn_ref::<Function>() else {
            return Ok(None);
        };
        let animation = animate.call2(el, &keyframes, &timing)?.dyn_into::<Animation>()?;
        Ok(Some(animation))
    }
}

/// Identity provider: renders everything in its final state.
pub struct Static;

impl MotionEngine for Static {
    fn name(&self) -> &'static str {
        "static"
    }

    fn is_live(&self) -> bool {
        false
    }

    fn hold(&self, _el: &HtmlElement, _pose: &Pose) -> Result<(), DomError> {
        Ok(())
    }

    fn release(&self, _el: &HtmlElement) -> Result<(), DomError> {
        Ok(())
    }

    fn animate(
        &self,
        _el: &Element,
        _from: &Pose,
        _to: &Pose,
        _timing: &Timing,
    ) -> Result<Option<Animation>, DomError> {
        Ok(None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Live,
    StaticForced,
    StaticReducedMotion,
    StaticUnsupported,
}

/// Picks a provider from the URL override, the user's motion preference
/// and what the browser supports, in that order.
pub fn choose(override_motion: Option<bool>, reduced_motion: bool, supported: bool) -> Choice {
    match override_motion {
        Some(false) => Choice::StaticForced,
        _ if !supported => Choice::StaticUnsupported,
        Some(true) => Choice::Live,
        None if reduced_motion => Choice::StaticReducedMotion,
        None => Choice::Live,
    }
}

fn supports_web_animations() -> Result<bool, DomError> {
    let global: JsValue = window()?.into();
    let element = Reflect::get(&global, &JsValue::from_str("Element"))?;
    if element.is_undefined() {
        return Ok(false);
    }
    let prototype = Reflect::get(&element, &JsValue::from_str("prototype"))?;
    Ok(Reflect::has(&prototype, &JsValue::from_str(ANIMATE))?)
}

/// Shared handle to the page's animation engine.
#[derive(Clone)]
pub struct Motion(Rc<dyn MotionEngine>);

impl Motion {
    pub fn live() -> Self {
        Motion(Rc::new(WebAnimations))
    }

    pub fn still() -> Self {
        Motion(Rc::new(Static))
    }

    pub fn detect() -> Self {
        let supported = supports_web_animations().unwrap_or_else(|e| {
            warn!("Could not probe animation support: {}", e);
            false
        });
        let choice = choose(config::motion_override(), config::prefers_reduced_motion(), supported);
        let motion = match choice {
            Choice::Live => Motion::live(),
            Choice::StaticUnsupported => {
                warn!("Animation engine unavailable, rendering sections statically");
                Motion::still()
            }
            Choice::StaticForced | Choice::StaticReducedMotion => Motion::still(),
        };
        info!("Motion provider: {} ({:?})", motion.name(), choice);
        motion
    }
}

impl PartialEq for Motion {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Motion {
    type Target = dyn MotionEngine;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_live_when_supported() {
        assert_eq!(choose(None, false, true), Choice::Live);
    }

    #[test]
    fn reduced_motion_selects_static_unless_overridden() {
        assert_eq!(choose(None, true, true), Choice::StaticReducedMotion);
        assert_eq!(choose(Some(true), true, true), Choice::Live);
    }

    #[test]
    fn missing_support_always_wins_over_opt_in() {
        assert_eq!(choose(Some(true), false, false), Choice::StaticUnsupported);
        assert_eq!(choose(None, false, false), Choice::StaticUnsupported);
    }

    #[test]
    fn opt_out_is_static() {
        assert_eq!(choose(Some(false), false, true), Choice::StaticForced);
    }

    #[test]
    fn keyframes_run_from_start_pose_to_end_pose() {
        let [first, last] = keyframes(&Pose::hidden().y(20.0), &Pose::IDENTITY);
        assert_eq!(first.opacity, 0.0);
        assert_eq!(first.transform, "translate3d(0px, 20px, 0px)");
        assert_eq!(last.opacity, 1.0);
        assert_eq!(last.transform, "none");
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = Motion::still();
        let b = a.clone();
        assert!(a == b);
        assert!(a != Motion::still());
        assert!(!a.is_live());
        assert!(Motion::live().is_live());
    }
}
