/// Sections start their entrance once their top edge is above this
/// fraction of the viewport height.
pub const ENTRANCE_LINE: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Scrolling down moved the element's top above the line.
    Enter,
    /// Scrolling up moved it back below.
    LeaveBack,
}

/// Edge detector for one element against a horizontal line in the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerLine {
    fraction: f64,
    past: Option<bool>,
}

impl TriggerLine {
    pub fn new(fraction: f64) -> Self {
        Self { fraction, past: None }
    }

    pub fn entrance() -> Self {
        Self::new(ENTRANCE_LINE)
    }

    /// Feeds the element's current top (relative to the viewport).
    /// Returns a crossing only when the side of the line changes; the very
    /// first sample counts as coming from below.
    pub fn sample(&mut self, top: f64, viewport_height: f64) -> Option<Crossing> {
        let past = top <= viewport_height * self.fraction;
        let was_past = self.past.replace(past).unwrap_or(false);
        match (was_past, past) {
            (false, true) => Some(Crossing::Enter),
            (true, false) => Some(Crossing::LeaveBack),
            _ => None,
        }
    }
}
