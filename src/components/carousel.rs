use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::Promise;
use web_sys::{Animation, Element};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::error::DomError;
use crate::motion::engine::Motion;
use crate::motion::timeline::{Ease, Pose, Timing};

pub const AUTO_ADVANCE_MS: u32 = 4_000;
pub const SLIDE_MS: f64 = 600.0;
/// Horizontal travel of a slide as it leaves or enters.
pub const SLIDE_OFFSET_PX: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Next,
    Prev,
    GoTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Cyclic slide index with at most one transition in flight.
///
/// The index only moves on [`complete`](Carousel::complete). Requests made
/// while a transition runs are dropped rather than queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    in_flight: Option<Transition>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0, in_flight: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether slide `index` should be on screen right now.
    pub fn shows(&self, index: usize) -> bool {
        match self.in_flight {
            Some(t) => index == t.from || index == t.to,
            None => index == self.current,
        }
    }

    pub fn request(&mut self, request: Request) -> Option<Transition> {
        if self.len < 2 || self.in_flight.is_some() {
            return None;
        }
        let (to, direction) = match request {
            Request::Next => ((self.current + 1) % self.len, Direction::Forward),
            Request::Prev => ((self.current + self.len - 1) % self.len, Direction::Backward),
            Request::GoTo(index) if index >= self.len || index == self.current => return None,
            Request::GoTo(index) if index > self.current => (index, Direction::Forward),
            Request::GoTo(index) => (index, Direction::Backward),
        };
        let transition = Transition { from: self.current, to, direction };
        self.in_flight = Some(transition);
        Some(transition)
    }

    /// Commits the in-flight transition and returns the new index.
    pub fn complete(&mut self) -> Option<usize> {
        let transition = self.in_flight.take()?;
        self.current = transition.to;
        Some(self.current)
    }
}

/// Navigation handle passed to whatever renders the controls.
#[derive(Clone, PartialEq)]
pub struct CarouselControls {
    pub next: Callback<()>,
    pub prev: Callback<()>,
    pub go_to: Callback<usize>,
}

#[derive(Clone)]
struct Deck {
    carousel: Rc<RefCell<Carousel>>,
    running: Rc<RefCell<Vec<Animation>>>,
    refs: Rc<Vec<NodeRef>>,
    motion: Option<Motion>,
    redraw: UseForceUpdateHandle,
}

impl Deck {
    fn slide(&self, request: Request) {
        let Some(transition) = self.carousel.borrow_mut().request(request) else {
            debug!("Carousel ignored {:?}", request);
            return;
        };
        match self.animate(transition) {
            Ok(Some(done)) => {
                self.redraw.force_update();
                let deck = self.clone();
                spawn_local(async move {
                    // Cancelled animations reject; the deck is being torn down.
                    if JsFuture::from(done).await.is_ok() {
                        deck.finish();
                    }
                });
            }
            Ok(None) => self.finish(),
            Err(e) => {
                warn!("Carousel transition skipped: {}", e);
                self.finish();
            }
        }
    }

    fn animate(&self, transition: Transition) -> Result<Option<Promise>, DomError> {
        let Some(motion) = self.motion.as_ref().filter(|m| m.is_live()) else {
            return Ok(None);
        };
        let element = |index: usize| self.refs.get(index).and_then(|r| r.cast::<Element>());
        let (Some(outgoing), Some(incoming)) = (element(transition.from), element(transition.to)) else {
            return Ok(None);
        };

        let offset = SLIDE_OFFSET_PX * transition.direction.sign();
        let timing = Timing::simple(SLIDE_MS, Ease::Power2Out);
        let out = motion.animate(&outgoing, &Pose::IDENTITY, &Pose::hidden().x(-offset), &timing)?;
        let into = motion.animate(&incoming, &Pose::hidden().x(offset), &Pose::IDENTITY, &timing)?;

        let mut running = self.running.borrow_mut();
        running.extend(out);
        match into {
            Some(animation) => {
                let done = animation.finished()?;
                running.push(animation);
                Ok(Some(done))
            }
            None => Ok(None),
        }
    }

    fn finish(&self) {
        self.cancel();
        if let Some(index) = self.carousel.borrow_mut().complete() {
            debug!("Carousel at slide {}", index);
        }
        self.redraw.force_update();
    }

    fn cancel(&self) {
        for animation in self.running.borrow_mut().drain(..) {
            animation.cancel();
        }
    }

    fn controls(&self) -> CarouselControls {
        let next = {
            let deck = self.clone();
            Callback::from(move |_: ()| deck.slide(Request::Next))
        };
        let prev = {
            let deck = self.clone();
            Callback::from(move |_: ()| deck.slide(Request::Prev))
        };
        let go_to = {
            let deck = self.clone();
            Callback::from(move |index: usize| deck.slide(Request::GoTo(index)))
        };
        CarouselControls { next, prev, go_to }
    }
}

#[derive(Properties, PartialEq)]
pub struct SlideDeckProps {
    pub slides: Vec<Html>,
    #[prop_or(AUTO_ADVANCE_MS)]
    pub interval_ms: u32,
}

#[function_component(SlideDeck)]
pub fn slide_deck(props: &SlideDeckProps) -> Html {
    let len = props.slides.len();
    let carousel = use_mut_ref(|| Carousel::new(len));
    let running = use_mut_ref(Vec::<Animation>::new);
    let refs = use_memo(|len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(), len);
    let motion = use_context::<Motion>();
    let redraw = use_force_update();
    let hovered = use_state_eq(|| false);

    let deck = Deck { carousel, running, refs, motion, redraw };
    let controls = deck.controls();

    {
        let next = controls.next.clone();
        let millis = if *hovered { 0 } else { props.interval_ms };
        use_interval(move || next.emit(()), millis);
    }

    {
        let deck = deck.clone();
        use_effect_with_deps(move |_| move || deck.cancel(), ());
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| hovered.set(false));

    let (shown, current) = {
        let state = deck.carousel.borrow();
        let shown: Vec<bool> = (0..len).map(|index| state.shows(index)).collect();
        (shown, state.current())
    };
    html! {
        <div class="slide-deck" {onmouseenter} {onmouseleave}>
            <style>
                {r#"
                    .slide-stack {
                        display: grid;
                    }
                    .slide {
                        grid-area: 1 / 1;
                        visibility: hidden;
                    }
                    .slide.is-shown {
                        visibility: visible;
                    }
                "#}
            </style>
            <div class="slide-stack">
                {
                    props.slides.iter().zip(shown).enumerate().map(|(index, (slide, shown))| {
                        html! {
                            <div
                                key={index}
                                ref={deck.refs[index].clone()}
                                class={classes!("slide", shown.then_some("is-shown"))}
                                aria-hidden={(!shown).to_string()}
                            >
                                { slide.clone() }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <CarouselNav {controls} {len} {current} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselNavProps {
    pub controls: CarouselControls,
    pub len: usize,
    pub current: usize,
}

#[function_component(CarouselNav)]
pub fn carousel_nav(props: &CarouselNavProps) -> Html {
    if props.len < 2 {
        return html! {};
    }
    let prev = props.controls.prev.reform(|_: MouseEvent| ());
    let next = props.controls.next.reform(|_: MouseEvent| ());

    html! {
        <div class="carousel-nav">
            <button class="carousel-arrow" aria-label="Previous slide" onclick={prev}>{"‹"}</button>
            <div class="carousel-dots">
                {
                    (0..props.len).map(|index| {
                        let onclick = props.controls.go_to.reform(move |_: MouseEvent| index);
                        html! {
                            <button
                                key={index}
                                class={classes!("carousel-dot", (index == props.current).then_some("active"))}
                                aria-label={format!("Go to slide {}", index + 1)}
                                {onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <button class="carousel-arrow" aria-label="Next slide" onclick={next}>{"›"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn step(carousel: &mut Carousel, request: Request) -> usize {
        carousel.request(request).expect("transition should start");
        carousel.complete().unwrap()
    }

    #[test]
    fn next_cycles_two_slides() {
        let mut carousel = Carousel::new(2);
        let visited: Vec<_> = (0..3).map(|_| step(&mut carousel, Request::Next)).collect();
        assert_eq!(visited, vec![1, 0, 1]);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        assert_eq!(step(&mut carousel, Request::Prev), 2);
    }

    #[test]
    fn index_moves_only_on_completion() {
        let mut carousel = Carousel::new(3);
        let transition = carousel.request(Request::Next).unwrap();
        assert_eq!(transition, Transition { from: 0, to: 1, direction: Direction::Forward });
        assert_eq!(carousel.current(), 0);
        assert!(carousel.shows(0) && carousel.shows(1));
        assert_eq!(carousel.complete(), Some(1));
        assert!(!carousel.shows(0));
    }

    #[test]
    fn requests_during_a_transition_are_dropped() {
        let mut carousel = Carousel::new(3);
        carousel.request(Request::Next).unwrap();
        assert_eq!(carousel.request(Request::Next), None);
        assert_eq!(carousel.request(Request::GoTo(2)), None);
        assert_eq!(carousel.complete(), Some(1));
        assert_eq!(carousel.complete(), None);
    }

    #[test]
    fn go_to_picks_direction_and_ignores_noops() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.request(Request::GoTo(0)), None);
        assert_eq!(carousel.request(Request::GoTo(9)), None);
        assert_eq!(carousel.request(Request::GoTo(3)).map(|t| t.direction), Some(Direction::Forward));
        carousel.complete();
        assert_eq!(carousel.request(Request::GoTo(1)).map(|t| t.direction), Some(Direction::Backward));
    }

    #[test]
    fn single_slide_never_moves() {
        let mut carousel = Carousel::new(1);
        assert_eq!(carousel.request(Request::Next), None);
        assert!(!carousel.is_busy());
    }

    proptest! {
        #[test]
        fn index_stays_in_range(len in 1usize..8, moves in prop::collection::vec(0u8..3, 0..40)) {
            let mut carousel = Carousel::new(len);
            for (i, m) in moves.iter().enumerate() {
                let request = match m {
                    0 => Request::Next,
                    1 => Request::Prev,
                    _ => Request::GoTo(i % len),
                };
                carousel.request(request);
                if i % 2 == 0 {
                    carousel.complete();
                }
                prop_assert!(carousel.current() < len);
            }
        }
    }
}
