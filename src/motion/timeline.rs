//! Keyframe poses and sequenced timelines.
//!
//! A [`Timeline`] only describes what should move and when. Playing it is
//! the job of [`super::player::TimelinePlayer`].

use serde::Serialize;

/// Visual state of one element: opacity plus a 3D transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub perspective: Option<f64>,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        perspective: None,
    };

    pub fn hidden() -> Self {
        Pose { opacity: 0.0, ..Self::IDENTITY }
    }

    pub fn x(self, x: f64) -> Self {
        Pose { x, ..self }
    }

    pub fn y(self, y: f64) -> Self {
        Pose { y, ..self }
    }

    pub fn rotate_x(self, deg: f64) -> Self {
        Pose { rotate_x: deg, ..self }
    }

    pub fn rotate_y(self, deg: f64) -> Self {
        Pose { rotate_y: deg, ..self }
    }

    pub fn scale(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub fn perspective(self, px: f64) -> Self {
        Pose { perspective: Some(px), ..self }
    }

    /// CSS `transform` value.
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if let Some(p) = self.perspective {
            parts.push(format!("perspective({}px)", p));
        }
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate3d({}px, {}px, 0px)", self.x, self.y));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", self.rotate_y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn keyframe(&self) -> Keyframe {
        Keyframe { opacity: self.opacity, transform: self.transform() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3Out,
    /// Overshoots then settles.
    BackOut,
    /// Milder overshoot, used for per-character reveals.
    BackOutSoft,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
            Ease::BackOutSoft => "cubic-bezier(0.3, 1.35, 0.6, 1)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    pub opacity: f64,
    pub transform: String,
}

/// Web Animations timing dictionary for one scheduled tween.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub delay: f64,
    pub duration: f64,
    pub end_delay: f64,
    pub easing: &'static str,
    pub fill: &'static str,
}

impl Timing {
    pub fn simple(duration: f64, ease: Ease) -> Self {
        Timing { delay: 0.0, duration, end_delay: 0.0, easing: ease.css(), fill: "both" }
    }
}

/// Where a tween goes relative to what is already on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// After everything else has finished.
    Sequential,
    /// This many ms before the current end.
    Overlap(f64),
    /// At an absolute offset in ms.
    At(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Index into the target list the timeline is played against.
    pub target: usize,
    pub from: Pose,
    pub to: Pose,
    pub duration: f64,
    pub ease: Ease,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheduled {
    pub tween: Tween,
    pub start: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<Scheduled>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::Sequential => self.end,
            Position::Overlap(ms) => (self.end - ms).max(0.0),
            Position::At(ms) => ms.max(0.0),
        }
    }

    pub fn add(mut self, tween: Tween, position: Position) -> Self {
        let start = self.resolve(position);
        self.end = self.end.max(start + tween.duration);
        self.entries.push(Scheduled { tween, start });
        self
    }

    /// Same tween on several targets, each starting `each` ms after the
    /// previous one.
    #[allow(clippy::too_many_arguments)]
    pub fn stagger(
        mut self,
        targets: impl IntoIterator<Item = usize>,
        from: Pose,
        to: Pose,
        duration: f64,
        each: f64,
        ease: Ease,
        position: Position,
    ) -> Self {
        let first = self.resolve(position);
        for (i, target) in targets.into_iter().enumerate() {
            let start = first + each * i as f64;
            self.end = self.end.max(start + duration);
            self.entries.push(Scheduled {
                tween: Tween { target, from, to, duration, ease },
                start,
            });
        }
        self
    }

    pub fn entries(&self) -> &[Scheduled] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total length in ms.
    pub fn total(&self) -> f64 {
        self.end
    }

    /// Timing for `entry`, padded so every tween ends together; reversing
    /// all of them at once then mirrors the timeline exactly.
    pub fn timing(&self, entry: &Scheduled) -> Timing {
        Timing {
            delay: entry.start,
            duration: entry.tween.duration,
            end_delay: (self.end - entry.start - entry.tween.duration).max(0.0),
            easing: entry.tween.ease.css(),
            fill: "both",
        }
    }

    /// Pose each target holds before the timeline starts.
    pub fn initial_poses(&self) -> Vec<(usize, Pose)> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.iter().any(|(target, _)| *target == entry.tween.target) {
                seen.push((entry.tween.target, entry.tween.from));
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade(target: usize, duration: f64) -> Tween {
        Tween { target, from: Pose::hidden(), to: Pose::IDENTITY, duration, ease: Ease::Power3Out }
    }

    #[test]
    fn identity_has_no_transform() {
        assert_eq!(Pose::IDENTITY.transform(), "none");
        assert_eq!(Pose::hidden().keyframe().opacity, 0.0);
    }

    #[test]
    fn transform_lists_only_what_moves() {
        let pose = Pose::hidden().y(35.0).rotate_x(-18.0).perspective(1000.0);
        assert_eq!(
            pose.transform(),
            "perspective(1000px) translate3d(0px, 35px, 0px) rotateX(-18deg)"
        );
        assert_eq!(Pose::IDENTITY.scale(0.5).transform(), "scale(0.5)");
    }

    #[test]
    fn overlap_is_measured_from_the_current_end() {
        let timeline = Timeline::new()
            .add(fade(0, 800.0), Position::Sequential)
            .add(fade(1, 700.0), Position::Overlap(400.0))
            .add(fade(2, 500.0), Position::Sequential);

        let starts: Vec<_> = timeline.entries().iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![0.0, 400.0, 1100.0]);
        assert_eq!(timeline.total(), 1600.0);
    }

    #[test]
    fn overlap_never_goes_negative() {
        let timeline = Timeline::new().add(fade(0, 300.0), Position::Overlap(500.0));
        assert_eq!(timeline.entries()[0].start, 0.0);
    }

    #[test]
    fn stagger_offsets_each_target() {
        let timeline = Timeline::new()
            .add(fade(0, 600.0), Position::Sequential)
            .stagger(1..4, Pose::hidden(), Pose::IDENTITY, 600.0, 100.0, Ease::Power2Out, Position::Overlap(300.0));

        let starts: Vec<_> = timeline.entries().iter().skip(1).map(|e| e.start).collect();
        assert_eq!(starts, vec![300.0, 400.0, 500.0]);
        assert_eq!(timeline.total(), 1100.0);
    }

    #[test]
    fn every_tween_spans_the_whole_timeline() {
        let timeline = Timeline::new()
            .add(fade(0, 800.0), Position::Sequential)
            .stagger(1..3, Pose::hidden(), Pose::IDENTITY, 700.0, 35.0, Ease::BackOutSoft, Position::Overlap(400.0))
            .add(fade(3, 900.0), Position::At(200.0));

        for entry in timeline.entries() {
            let t = timeline.timing(entry);
            assert!((t.delay + t.duration + t.end_delay - timeline.total()).abs() < 1e-9);
            assert_eq!(t.fill, "both");
        }
    }

    #[test]
    fn initial_pose_is_the_first_from_per_target() {
        let late = Tween { target: 0, from: Pose::IDENTITY.scale(2.0), ..fade(0, 100.0) };
        let timeline = Timeline::new()
            .add(fade(0, 100.0), Position::Sequential)
            .add(fade(1, 100.0), Position::Sequential)
            .add(late, Position::Sequential);

        let poses = timeline.initial_poses();
        assert_eq!(poses, vec![(0, Pose::hidden()), (1, Pose::hidden())]);
    }
}
