use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Performance, PerformanceTiming};
use yew::prelude::*;

use crate::error::{window, DomError};
use crate::lifecycle::Disposer;

/// Milliseconds between two navigation timestamps; `None` until both are
/// recorded.
pub fn span(start: f64, end: f64) -> Option<f64> {
    if start <= 0.0 || end <= 0.0 || end < start {
        return None;
    }
    Some(end - start)
}

/// `loadEventEnd` stays at zero until the load handlers have returned.
fn has_loaded(load_event_end: f64) -> bool {
    load_event_end > 0.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadTimings {
    pub dom_ready: Option<f64>,
    pub load: Option<f64>,
}

impl LoadTimings {
    fn read(timing: &PerformanceTiming) -> Self {
        let start = timing.navigation_start();
        Self {
            dom_ready: span(start, timing.dom_content_loaded_event_end()),
            load: span(start, timing.load_event_end()),
        }
    }
}

fn report(performance: &Performance) {
    let timings = LoadTimings::read(&performance.timing());
    let fmt = |ms: Option<f64>| ms.map(|ms| format!("{:.0}ms", ms)).unwrap_or_else(|| "n/a".to_string());
    gloo_console::log!(format!(
        "Page timings: DOM ready {}, load {}",
        fmt(timings.dom_ready),
        fmt(timings.load)
    ));
}

fn install(disposer: &mut Disposer) -> Result<(), DomError> {
    let window = window()?;
    let performance = window
        .performance()
        .ok_or_else(|| DomError::MissingElement("window.performance".to_string()))?;
    debug!("First render after {:.0}ms", performance.now());

    if has_loaded(performance.timing().load_event_end()) {
        spawn_local(async move { report(&performance) });
        return Ok(());
    }
    let onload = Closure::<dyn FnMut()>::new(move || {
        let performance = performance.clone();
        spawn_local(async move {
            // Yield so this handler has returned before loadEventEnd is read.
            gloo_timers::future::TimeoutFuture::new(0).await;
            report(&performance);
        });
    });
    disposer.listen(&window, "load", onload, true)
}

/// Logs time to first render and, once the page has loaded, navigation
/// timings.
#[hook]
pub fn use_performance_monitor() {
    use_effect_with_deps(
        |_| {
            let mut disposer = Disposer::new();
            if let Err(e) = install(&mut disposer) {
                warn!("Performance monitor unavailable: {}", e);
            }
            move || drop(disposer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_needs_both_marks() {
        assert_eq!(span(1_000.0, 1_450.0), Some(450.0));
        assert_eq!(span(1_000.0, 0.0), None);
        assert_eq!(span(0.0, 1_450.0), None);
    }

    #[test]
    fn span_rejects_inverted_marks() {
        assert_eq!(span(2_000.0, 1_000.0), None);
    }

    #[test]
    fn load_is_pending_until_the_mark_is_set() {
        assert!(!has_loaded(0.0));
        assert!(has_loaded(1_697_000_000_000.0));
    }
}
