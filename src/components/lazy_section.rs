use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::{window, DomError};
use crate::lifecycle::Disposer;

/// One-shot switch: flips on the first positive observation and stays on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MountLatch {
    mounted: bool,
}

impl MountLatch {
    /// Returns `true` only for the observation that mounts.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.mounted {
            self.mounted = true;
            return true;
        }
        false
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

fn supports_intersection_observer() -> Result<bool, DomError> {
    let global: JsValue = window()?.into();
    Ok(Reflect::has(&global, &JsValue::from_str("IntersectionObserver"))?)
}

fn observe(
    target: &NodeRef,
    root_margin: &str,
    on_visible: Callback<()>,
    disposer: &mut Disposer,
) -> Result<(), DomError> {
    if !supports_intersection_observer()? {
        on_visible.emit(());
        return Ok(());
    }
    let el = target
        .cast::<Element>()
        .ok_or_else(|| DomError::MissingElement("lazy section placeholder".to_string()))?;

    let latch = Rc::new(RefCell::new(MountLatch::default()));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if latch.borrow_mut().observe(visible) {
                observer.disconnect();
                on_visible.emit(());
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&el);

    disposer.defer(move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct LazySectionProps {
    /// How far outside the viewport mounting starts, CSS margin syntax.
    #[prop_or(AttrValue::Static("200px"))]
    pub root_margin: AttrValue,
    /// Id given to the placeholder so in-page links can reach it early.
    #[prop_or_default]
    pub anchor: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Mounts its children once the placeholder approaches the viewport.
///
/// Without `IntersectionObserver` the children mount immediately.
#[function_component(LazySection)]
pub fn lazy_section(props: &LazySectionProps) -> Html {
    let mounted = use_state_eq(|| false);
    let placeholder = use_node_ref();

    {
        let mounted = mounted.clone();
        let placeholder = placeholder.clone();
        let root_margin = props.root_margin.clone();
        use_effect_with_deps(
            move |_| {
                let mut disposer = Disposer::new();
                let on_visible = {
                    let mounted = mounted.clone();
                    Callback::from(move |_| mounted.set(true))
                };
                if let Err(e) = observe(&placeholder, &root_margin, on_visible, &mut disposer) {
                    warn!("Lazy mounting unavailable, mounting now: {}", e);
                    mounted.set(true);
                }
                move || drop(disposer)
            },
            (),
        );
    }

    html! {
        <div class={props.class.clone()}>
            if *mounted {
                { for props.children.iter() }
            } else {
                <div
                    ref={placeholder}
                    id={props.anchor.clone()}
                    class="lazy-placeholder"
                    style="min-height: 60vh;"
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_exactly_once() {
        let mut latch = MountLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        for visible in [true, false, true, true] {
            assert!(!latch.observe(visible));
        }
        assert!(latch.is_mounted());
    }

    #[test]
    fn never_unmounts() {
        let mut latch = MountLatch::default();
        latch.observe(true);
        latch.observe(false);
        assert!(latch.is_mounted());
    }
}
