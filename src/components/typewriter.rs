use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const START_DELAY_MS: u32 = 1_000;
pub const TYPE_MS: u32 = 50;
pub const HOLD_MS: u32 = 1_500;
pub const ERASE_MS: u32 = TYPE_MS / 2;
pub const ADVANCE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Typing,
    Pausing,
    Erasing,
    Advancing,
}

/// Types and erases phrases one character at a time, forever.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    stage: Stage,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases, index: 0, shown: 0, stage: Stage::Idle }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    /// Currently visible prefix of the active phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Performs one step and returns the delay before the next, or `None`
    /// when there is nothing to type. Every step changes the text, so
    /// the delays returned are exactly the gaps between visible changes.
    pub fn tick(&mut self) -> Option<u32> {
        if self.phrases.is_empty() {
            return None;
        }
        let (stage, delay) = match self.stage {
            Stage::Idle | Stage::Typing => self.type_char(),
            Stage::Pausing | Stage::Erasing => self.erase_char(),
            Stage::Advancing => {
                self.index = (self.index + 1) % self.phrases.len();
                self.shown = 0;
                self.type_char()
            }
        };
        self.stage = stage;
        Some(delay)
    }

    fn type_char(&mut self) -> (Stage, u32) {
        let len = self.phrase().chars().count();
        self.shown = (self.shown + 1).min(len);
        if self.shown == len {
            (Stage::Pausing, HOLD_MS)
        } else {
            (Stage::Typing, TYPE_MS)
        }
    }

    fn erase_char(&mut self) -> (Stage, u32) {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            (Stage::Advancing, ADVANCE_MS)
        } else {
            (Stage::Erasing, ERASE_MS)
        }
    }
}

/// One-shot timer; dropping it cancels the callback.
pub trait Delay: Sized + 'static {
    fn after(ms: u32, callback: impl FnOnce() + 'static) -> Self;
}

impl Delay for Timeout {
    fn after(ms: u32, callback: impl FnOnce() + 'static) -> Self {
        Timeout::new(ms, callback)
    }
}

type Slot<T> = Rc<RefCell<Option<T>>>;

fn arm<T: Delay>(slot: Slot<T>, machine: Rc<RefCell<Typewriter>>, show: Callback<&'static str>, delay: u32) {
    let next_slot = slot.clone();
    let pending = T::after(delay, move || {
        let next = machine.borrow_mut().tick();
        show.emit(machine.borrow().text());
        if let Some(delay) = next {
            arm(next_slot, machine, show, delay);
        }
    });
    *slot.borrow_mut() = Some(pending);
}

/// Starts typing `phrases` into `show`. Only one step is ever pending and
/// it lives in the returned slot.
fn start<T: Delay>(phrases: &'static [&'static str], show: Callback<&'static str>) -> Slot<T> {
    let slot: Slot<T> = Rc::default();
    let machine = Rc::new(RefCell::new(Typewriter::new(phrases)));
    arm(slot.clone(), machine, show, START_DELAY_MS);
    slot
}

fn stop<T: Delay>(slot: &Slot<T>) {
    slot.borrow_mut().take();
}

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub phrases: &'static [&'static str],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let text = use_state_eq(|| "");

    {
        let text = text.clone();
        let phrases = props.phrases;
        use_effect_with_deps(
            move |_| {
                let slot = start::<Timeout>(phrases, Callback::from(move |value: &'static str| text.set(value)));
                move || stop(&slot)
            },
            (),
        );
    }

    html! {
        <span class={classes!("typing-text", props.class.clone())}>
            { *text }
            <span class="typing-caret" aria-hidden="true">{"|"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    type Queued = (u64, u32, Box<dyn FnOnce()>);

    thread_local! {
        static QUEUE: RefCell<Vec<Queued>> = RefCell::new(Vec::new());
        static NEXT_ID: Cell<u64> = Cell::new(0);
    }

    /// Timer that only fires when the test says so.
    struct FakeTimer(u64);

    impl Delay for FakeTimer {
        fn after(ms: u32, callback: impl FnOnce() + 'static) -> Self {
            let id = NEXT_ID.with(|next| {
                next.set(next.get() + 1);
                next.get()
            });
            QUEUE.with(|queue| queue.borrow_mut().push((id, ms, Box::new(callback))));
            FakeTimer(id)
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            let id = self.0;
            let _ = QUEUE.try_with(|queue| queue.borrow_mut().retain(|(queued, _, _)| *queued != id));
        }
    }

    fn scheduled() -> Vec<u32> {
        QUEUE.with(|queue| queue.borrow().iter().map(|(_, ms, _)| *ms).collect())
    }

    fn fire_next() {
        let (_, _, callback) = QUEUE.with(|queue| queue.borrow_mut().remove(0));
        callback();
    }

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, Callback<&'static str>) {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = shown.clone();
        (shown, Callback::from(move |text: &'static str| sink.borrow_mut().push(text)))
    }

    const PHRASES: &[&str] = &["Stunning Websites", "Smart Automations"];

    fn run_until(machine: &mut Typewriter, stage: Stage) -> Vec<u32> {
        let mut delays = Vec::new();
        loop {
            delays.push(machine.tick().unwrap());
            if machine.stage() == stage {
                return delays;
            }
            assert!(delays.len() < 1_000, "stage {:?} never reached", stage);
        }
    }

    #[test]
    fn types_the_first_phrase_then_pauses() {
        let mut machine = Typewriter::new(PHRASES);
        let delays = run_until(&mut machine, Stage::Pausing);
        assert_eq!(machine.text(), "Stunning Websites");
        assert_eq!(delays.len(), "Stunning Websites".len());
        assert_eq!(delays.last(), Some(&HOLD_MS));
        assert!(delays[..delays.len() - 1].iter().all(|d| *d == TYPE_MS));
    }

    #[test]
    fn first_step_shows_a_character() {
        let mut machine = Typewriter::new(PHRASES);
        assert_eq!(machine.tick(), Some(TYPE_MS));
        assert_eq!(machine.text(), "S");
    }

    #[test]
    fn erases_at_double_speed() {
        let mut machine = Typewriter::new(PHRASES);
        run_until(&mut machine, Stage::Pausing);
        assert_eq!(machine.tick(), Some(ERASE_MS));
        assert_eq!(machine.text(), "Stunning Website");
        assert_eq!(ERASE_MS * 2, TYPE_MS);
    }

    #[test]
    fn next_phrase_starts_from_empty() {
        let mut machine = Typewriter::new(PHRASES);
        let delays = run_until(&mut machine, Stage::Advancing);
        assert_eq!(delays.last(), Some(&ADVANCE_MS));
        assert_eq!(machine.text(), "");
        machine.tick();
        assert_eq!(machine.phrase(), "Smart Automations");
        assert_eq!(machine.text(), "S");
    }

    #[test]
    fn wraps_back_to_the_first_phrase() {
        let mut machine = Typewriter::new(PHRASES);
        run_until(&mut machine, Stage::Advancing);
        machine.tick();
        run_until(&mut machine, Stage::Advancing);
        machine.tick();
        assert_eq!(machine.phrase(), "Stunning Websites");
        assert_eq!(machine.text(), "S");
    }

    #[test]
    fn handles_multibyte_characters() {
        const ACCENTED: &[&str] = &["Café"];
        let mut machine = Typewriter::new(ACCENTED);
        run_until(&mut machine, Stage::Pausing);
        assert_eq!(machine.text(), "Café");
        machine.tick();
        assert_eq!(machine.text(), "Caf");
    }

    #[test]
    fn visible_changes_land_on_the_documented_beats() {
        let mut machine = Typewriter::new(PHRASES);
        let mut at = START_DELAY_MS;
        let mut frames = Vec::new();
        for _ in 0..80 {
            let delay = machine.tick().unwrap();
            frames.push((at, machine.text()));
            at += delay;
        }

        assert_eq!(frames[0], (START_DELAY_MS, "S"));

        let full = frames.iter().position(|(_, text)| *text == "Stunning Websites").unwrap();
        let typed_at = frames[full].0;
        assert_eq!(frames[full + 1], (typed_at + HOLD_MS, "Stunning Website"));

        let empty = frames.iter().position(|(_, text)| text.is_empty()).unwrap();
        let erased_at = frames[empty].0;
        assert_eq!(frames[empty + 1], (erased_at + ADVANCE_MS, "S"));
    }

    #[test]
    fn nothing_to_type_stops_scheduling() {
        let mut machine = Typewriter::new(&[]);
        assert_eq!(machine.tick(), None);
        assert_eq!(machine.text(), "");
    }

    #[test]
    fn steps_chain_one_timer_at_a_time() {
        let (shown, show) = recorder();
        let slot = start::<FakeTimer>(PHRASES, show);
        assert_eq!(scheduled(), vec![START_DELAY_MS]);
        fire_next();
        fire_next();
        fire_next();
        assert_eq!(*shown.borrow(), vec!["S", "St", "Stu"]);
        assert_eq!(scheduled(), vec![TYPE_MS]);
        stop(&slot);
    }

    #[test]
    fn stopping_leaves_nothing_scheduled() {
        let (shown, show) = recorder();
        let slot = start::<FakeTimer>(PHRASES, show);
        fire_next();
        fire_next();
        stop(&slot);
        assert!(scheduled().is_empty());
        assert!(slot.borrow().is_none());
        assert_eq!(shown.borrow().len(), 2);
    }

    #[test]
    fn stopping_before_the_first_step_shows_nothing() {
        let (shown, show) = recorder();
        let slot = start::<FakeTimer>(PHRASES, show);
        stop(&slot);
        stop(&slot);
        assert!(scheduled().is_empty());
        assert!(shown.borrow().is_empty());
    }

    proptest! {
        #[test]
        fn text_is_always_a_prefix_of_the_active_phrase(steps in 0usize..400) {
            let mut machine = Typewriter::new(PHRASES);
            for _ in 0..steps {
                machine.tick();
                prop_assert!(machine.phrase().starts_with(machine.text()));
            }
        }
    }
}
