use log::debug;
use wasm_bindgen::JsValue;
use web_sys::js_sys::{Array, Promise};
use web_sys::{Animation, HtmlElement};
use yew::NodeRef;

use super::engine::Motion;
use super::timeline::Timeline;
use crate::error::DomError;

/// Plays a [`Timeline`] against a list of element refs.
///
/// Animations only exist while something is moving. At rest the pose is
/// carried by inline styles: the starting pose after [`reset`], nothing
/// at all after [`settle`].
///
/// [`reset`]: TimelinePlayer::reset
/// [`settle`]: TimelinePlayer::settle
pub struct TimelinePlayer {
    motion: Motion,
    timeline: Timeline,
    targets: Vec<NodeRef>,
    running: Vec<Animation>,
    reversed: bool,
    generation: u64,
}

impl TimelinePlayer {
    pub fn new(motion: Motion, timeline: Timeline, targets: Vec<NodeRef>) -> Self {
        Self {
            motion,
            timeline,
            targets,
            running: Vec::new(),
            reversed: false,
            generation: 0,
        }
    }

    fn element(&self, index: usize) -> Option<HtmlElement> {
        self.targets.get(index)?.cast::<HtmlElement>()
    }

    /// Bumped by every playback change; completions from older
    /// generations are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn hold_start(&self) -> Result<(), DomError> {
        for (index, pose) in self.timeline.initial_poses() {
            if let Some(el) = self.element(index) {
                self.motion.hold(&el, &pose)?;
            }
        }
        Ok(())
    }

    fn spawn(&mut self) -> Result<(), DomError> {
        for entry in self.timeline.entries() {
            let Some(el) = self.element(entry.tween.target) else {
                debug!("Timeline target {} is not mounted", entry.tween.target);
                continue;
            };
            let timing = self.timeline.timing(entry);
            if let Some(animation) = self.motion.animate(&el, &entry.tween.from, &entry.tween.to, &timing)? {
                self.running.push(animation);
            }
        }
        Ok(())
    }

    pub fn forward(&mut self) -> Result<u64, DomError> {
        self.generation += 1;
        if self.running.is_empty() {
            self.spawn()?;
        } else if self.reversed {
            for animation in &self.running {
                animation.reverse()?;
            }
        }
        self.reversed = false;
        Ok(self.generation)
    }

    pub fn reverse(&mut self) -> Result<u64, DomError> {
        self.generation += 1;
        if self.running.is_empty() {
            // Coming from rest at the end pose: start at the end and run back.
            self.spawn()?;
            for animation in &self.running {
                animation.finish()?;
                animation.reverse()?;
            }
        } else if !self.reversed {
            for animation in &self.running {
                animation.reverse()?;
            }
        }
        self.reversed = true;
        Ok(self.generation)
    }

    fn cancel_all(&mut self) {
        for animation in self.running.drain(..) {
            animation.cancel();
        }
        self.reversed = false;
        self.generation += 1;
    }

    /// Stops everything and leaves targets in their authored (visible) state.
    pub fn settle(&mut self) {
        self.cancel_all();
        for index in 0..self.targets.len() {
            if let Some(el) = self.element(index) {
                if let Err(e) = self.motion.release(&el) {
                    debug!("Could not release target {}: {}", index, e);
                }
            }
        }
    }

    /// Stops everything and pins targets back at the starting pose.
    pub fn reset(&mut self) -> Result<(), DomError> {
        self.cancel_all();
        self.hold_start()
    }

    /// Resolves once every running animation has finished; `None` when
    /// nothing is running.
    pub fn finished(&self) -> Result<Option<Promise>, DomError> {
        if self.running.is_empty() {
            return Ok(None);
        }
        let all = Array::new();
        for animation in &self.running {
            let finished: JsValue = animation.finished()?.into();
            all.push(&finished);
        }
        Ok(Some(Promise::all(&all)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timeline::{Ease, Pose, Position, Tween};

    fn player(targets: usize) -> TimelinePlayer {
        let timeline = Timeline::new().add(
            Tween { target: 0, from: Pose::hidden(), to: Pose::IDENTITY, duration: 500.0, ease: Ease::Power2Out },
            Position::Sequential,
        );
        TimelinePlayer::new(Motion::still(), timeline, (0..targets).map(|_| NodeRef::default()).collect())
    }

    #[test]
    fn nothing_to_wait_for_when_targets_are_unmounted() {
        let mut player = player(1);
        assert_eq!(player.forward(), Ok(1));
        assert!(matches!(player.finished(), Ok(None)));
    }

    #[test]
    fn every_playback_change_starts_a_new_generation() {
        let mut player = player(1);
        let forward = player.forward().unwrap();
        let reverse = player.reverse().unwrap();
        assert!(reverse > forward);
        player.settle();
        assert!(player.generation() > reverse);
        assert!(matches!(player.finished(), Ok(None)));
    }
}
