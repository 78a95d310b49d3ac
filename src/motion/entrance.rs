//! Entrance choreography shared by every section.
//!
//! Each section owns one timeline that plays forward when its top edge
//! crosses [`ENTRANCE_LINE`](crate::scroll::trigger::ENTRANCE_LINE) and
//! backward when the visitor scrolls back above it. A fallback timer,
//! armed on the first entrance, forces the content visible in case the
//! engine never reports completion.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Element;
use yew::prelude::*;

use super::engine::Motion;
use super::player::TimelinePlayer;
use super::timeline::Timeline;
use crate::error::{window, DomError};
use crate::lifecycle::Disposer;
use crate::scroll::trigger::{Crossing, TriggerLine};

/// Delay after the first entrance before content is forced visible.
pub const FALLBACK_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unanimated,
    Forward,
    Reverse,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Enter,
    LeaveBack,
    Complete,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    PlayForward,
    PlayReverse,
    Settle,
    Reset,
}

impl From<Crossing> for Cue {
    fn from(crossing: Crossing) -> Self {
        match crossing {
            Crossing::Enter => Cue::Enter,
            Crossing::LeaveBack => Cue::LeaveBack,
        }
    }
}

impl Phase {
    pub fn on(self, cue: Cue) -> (Phase, Action) {
        use Action as A;
        use Phase as P;

        match (self, cue) {
            (_, Cue::Fallback) if self != P::Settled => (P::Settled, A::Settle),
            (P::Unanimated, Cue::Enter) => (P::Forward, A::PlayForward),
            (P::Forward, Cue::LeaveBack) => (P::Reverse, A::PlayReverse),
            (P::Forward, Cue::Complete) => (P::Settled, A::Settle),
            (P::Reverse, Cue::Enter) => (P::Forward, A::PlayForward),
            (P::Reverse, Cue::Complete) => (P::Unanimated, A::Reset),
            (P::Settled, Cue::LeaveBack) => (P::Reverse, A::PlayReverse),
            (phase, _) => (phase, A::None),
        }
    }
}

struct Entrance {
    phase: Phase,
    line: TriggerLine,
    player: TimelinePlayer,
    fallback: Option<Timeout>,
    fallback_armed: bool,
}

fn dispatch(state: &Rc<RefCell<Entrance>>, cue: Cue) {
    let mut entrance = state.borrow_mut();
    let (phase, action) = entrance.phase.on(cue);
    entrance.phase = phase;

    let played = match action {
        Action::None => return,
        Action::PlayForward => entrance.player.forward().map(Some),
        Action::PlayReverse => entrance.player.reverse().map(Some),
        Action::Settle => {
            entrance.player.settle();
            Ok(None)
        }
        Action::Reset => entrance.player.reset().map(|_| None),
    };

    let generation = match played {
        Ok(generation) => generation,
        Err(e) => {
            warn!("Entrance animation failed, showing content: {}", e);
            entrance.player.settle();
            entrance.phase = Phase::Settled;
            return;
        }
    };

    if action == Action::PlayForward && !entrance.fallback_armed {
        entrance.fallback_armed = true;
        let weak = Rc::downgrade(state);
        entrance.fallback = Some(Timeout::new(FALLBACK_MS, move || {
            if let Some(state) = weak.upgrade() {
                dispatch(&state, Cue::Fallback);
            }
        }));
    }

    if let Some(generation) = generation {
        watch(Rc::downgrade(state), &entrance.player, generation);
    }
}

fn watch(state: Weak<RefCell<Entrance>>, player: &TimelinePlayer, generation: u64) {
    let promise = match player.finished() {
        Ok(Some(promise)) => promise,
        Ok(None) => return,
        Err(e) => {
            debug!("Cannot observe timeline completion: {}", e);
            return;
        }
    };

    spawn_local(async move {
        // Cancelled animations reject; a newer playback took over.
        if JsFuture::from(promise).await.is_err() {
            return;
        }
        let Some(state) = state.upgrade() else { return };
        let current = state.borrow().player.generation() == generation;
        if current {
            dispatch(&state, Cue::Complete);
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Start {
    OnScroll,
    OnMount,
}

fn start(
    motion: Motion,
    section: NodeRef,
    targets: Vec<NodeRef>,
    timeline: Timeline,
    when: Start,
    disposer: &mut Disposer,
) -> Result<(), DomError> {
    let window = window()?;
    let player = TimelinePlayer::new(motion, timeline, targets);
    player.hold_start()?;

    let state = Rc::new(RefCell::new(Entrance {
        phase: Phase::Unanimated,
        line: TriggerLine::entrance(),
        player,
        fallback: None,
        fallback_armed: false,
    }));

    if when == Start::OnScroll {
        let check: Rc<dyn Fn()> = {
            let state = Rc::downgrade(&state);
            let window = window.clone();
            Rc::new(move || {
                let Some(state) = state.upgrade() else { return };
                let Some(el) = section.cast::<Element>() else { return };
                let top = el.get_bounding_client_rect().top();
                let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                let crossing = state.borrow_mut().line.sample(top, viewport);
                if let Some(crossing) = crossing {
                    dispatch(&state, crossing.into());
                }
            })
        };

        for event in ["scroll", "resize"] {
            let check = check.clone();
            let callback = Closure::<dyn FnMut()>::new(move || check());
            disposer.listen(&window, event, callback, true)?;
        }
        check();
    } else {
        dispatch(&state, Cue::Enter);
    }

    disposer.defer(move || {
        let mut entrance = state.borrow_mut();
        entrance.fallback.take();
        entrance.player.settle();
    });
    Ok(())
}

fn run(
    motion: Option<Motion>,
    section: NodeRef,
    targets: Vec<NodeRef>,
    build: fn() -> Timeline,
    when: Start,
) -> Disposer {
    let mut disposer = Disposer::new();
    // Without a live engine the markup is already in its final state.
    if let Some(motion) = motion.filter(|m| m.is_live()) {
        if let Err(e) = start(motion, section, targets, build(), when, &mut disposer) {
            warn!("Entrance animation disabled: {}", e);
            disposer.dispose();
        }
    }
    disposer
}

/// Scroll-triggered entrance for `section`. `build` indexes into `targets`.
#[hook]
pub fn use_scroll_entrance(section: NodeRef, targets: Vec<NodeRef>, build: fn() -> Timeline) {
    let motion = use_context::<Motion>();
    use_effect_with_deps(
        move |_| {
            let disposer = run(motion, section, targets, build, Start::OnScroll);
            move || drop(disposer)
        },
        (),
    );
}

/// Entrance that plays once, right after the first paint.
#[hook]
pub fn use_intro(targets: Vec<NodeRef>, build: fn() -> Timeline) {
    let motion = use_context::<Motion>();
    use_effect_with_deps(
        move |_| {
            let disposer = run(motion, NodeRef::default(), targets, build, Start::OnMount);
            move || drop(disposer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(cues: &[Cue]) -> (Phase, Vec<Action>) {
        let mut phase = Phase::Unanimated;
        let mut actions = Vec::new();
        for cue in cues {
            let (next, action) = phase.on(*cue);
            phase = next;
            actions.push(action);
        }
        (phase, actions)
    }

    #[test]
    fn plays_forward_then_settles() {
        let (phase, actions) = replay(&[Cue::Enter, Cue::Complete]);
        assert_eq!(phase, Phase::Settled);
        assert_eq!(actions, vec![Action::PlayForward, Action::Settle]);
    }

    #[test]
    fn scrolling_back_reverses_and_rearms() {
        let (phase, actions) = replay(&[Cue::Enter, Cue::LeaveBack, Cue::Complete, Cue::Enter]);
        assert_eq!(phase, Phase::Forward);
        assert_eq!(
            actions,
            vec![Action::PlayForward, Action::PlayReverse, Action::Reset, Action::PlayForward]
        );
    }

    #[test]
    fn settled_section_reverses_when_left() {
        let (phase, actions) = replay(&[Cue::Enter, Cue::Complete, Cue::LeaveBack]);
        assert_eq!(phase, Phase::Reverse);
        assert_eq!(actions.last(), Some(&Action::PlayReverse));
    }

    #[test]
    fn direction_flips_mid_flight() {
        let (phase, _) = replay(&[Cue::Enter, Cue::LeaveBack, Cue::Enter]);
        assert_eq!(phase, Phase::Forward);
    }

    #[test]
    fn fallback_settles_from_any_moving_or_hidden_phase() {
        for phase in [Phase::Unanimated, Phase::Forward, Phase::Reverse] {
            assert_eq!(phase.on(Cue::Fallback), (Phase::Settled, Action::Settle));
        }
        assert_eq!(Phase::Settled.on(Cue::Fallback), (Phase::Settled, Action::None));
    }

    #[test]
    fn redundant_cues_do_nothing() {
        assert_eq!(Phase::Unanimated.on(Cue::LeaveBack), (Phase::Unanimated, Action::None));
        assert_eq!(Phase::Unanimated.on(Cue::Complete), (Phase::Unanimated, Action::None));
        assert_eq!(Phase::Forward.on(Cue::Enter), (Phase::Forward, Action::None));
        assert_eq!(Phase::Settled.on(Cue::Enter), (Phase::Settled, Action::None));
    }

    #[test]
    fn crossings_map_to_cues() {
        assert_eq!(Cue::from(Crossing::Enter), Cue::Enter);
        assert_eq!(Cue::from(Crossing::LeaveBack), Cue::LeaveBack);
    }
}
