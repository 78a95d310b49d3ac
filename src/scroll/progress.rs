use web_sys::Window;

use crate::error::DomError;

/// Back-to-top control shows past this much of the page (percent).
pub const BACK_TO_TOP_THRESHOLD: f64 = 10.0;
/// Header progress bar glows past this (percent).
pub const GLOW_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn read(window: &Window) -> Result<Self, DomError> {
        let document = window.document().ok_or(DomError::DocumentUnavailable)?;
        let root = document
            .document_element()
            .ok_or_else(|| DomError::MissingElement("html".to_string()))?;
        let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);

        Ok(Self {
            scroll_y: window.scroll_y()?,
            document_height: f64::from(root.scroll_height()),
            viewport_height,
        })
    }

    /// Largest reachable `scroll_y`.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Scroll progress in percent, always within `[0, 100]`.
    ///
    /// A page that fits in one viewport has nothing to scroll and reports 0.
    pub fn progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 || !self.scroll_y.is_finite() {
            return 0.0;
        }
        (self.scroll_y / max * 100.0).clamp(0.0, 100.0)
    }
}

pub fn back_to_top_visible(progress: f64) -> bool {
    progress > BACK_TO_TOP_THRESHOLD
}

pub fn progress_glows(progress: f64) -> bool {
    progress > GLOW_THRESHOLD
}

/// Position of `scroll_y` inside the `start..end` pixel band, as `0..=1`.
pub fn scrub(scroll_y: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if scroll_y >= end { 1.0 } else { 0.0 };
    }
    ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn metrics(scroll_y: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
        ScrollMetrics { scroll_y, document_height, viewport_height }
    }

    #[test]
    fn resizing_alone_can_cross_the_back_to_top_threshold() {
        let before = metrics(100.0, 2_000.0, 1_000.0);
        let taller_window = metrics(100.0, 2_000.0, 1_500.0);
        assert!(!back_to_top_visible(before.progress()));
        assert!(back_to_top_visible(taller_window.progress()));
    }

    #[test]
    fn progress_spans_the_scrollable_range() {
        assert_eq!(metrics(0.0, 3000.0, 1000.0).progress(), 0.0);
        assert_eq!(metrics(1000.0, 3000.0, 1000.0).progress(), 50.0);
        assert_eq!(metrics(2000.0, 3000.0, 1000.0).progress(), 100.0);
    }

    #[test]
    fn page_shorter_than_viewport_reports_zero() {
        assert_eq!(metrics(0.0, 800.0, 800.0).progress(), 0.0);
        assert_eq!(metrics(10.0, 600.0, 800.0).progress(), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(metrics(-40.0, 3000.0, 1000.0).progress(), 0.0);
        assert_eq!(metrics(2100.0, 3000.0, 1000.0).progress(), 100.0);
    }

    #[test]
    fn back_to_top_is_a_plain_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(10.0));
        assert!(back_to_top_visible(10.01));
        assert!(!back_to_top_visible(9.99));
    }

    #[test]
    fn glow_starts_after_five_percent() {
        assert!(!progress_glows(5.0));
        assert!(progress_glows(5.5));
    }

    #[test]
    fn scrub_band() {
        assert_eq!(scrub(0.0, 80.0, 200.0), 0.0);
        assert_eq!(scrub(140.0, 80.0, 200.0), 0.5);
        assert_eq!(scrub(500.0, 80.0, 200.0), 1.0);
        assert_eq!(scrub(90.0, 100.0, 100.0), 0.0);
    }

    proptest! {
        #[test]
        fn progress_stays_in_range(
            document_height in 0.0f64..50_000.0,
            viewport_height in 1.0f64..4_000.0,
            fraction in 0.0f64..=1.0,
        ) {
            let max = (document_height - viewport_height).max(0.0);
            let p = metrics(max * fraction, document_height, viewport_height).progress();
            prop_assert!(p.is_finite());
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn visibility_depends_only_on_progress(p in 0.0f64..=100.0) {
            prop_assert_eq!(back_to_top_visible(p), p > 10.0);
        }
    }
}
