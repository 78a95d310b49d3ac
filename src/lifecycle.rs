//! Teardown bookkeeping for effects.
//!
//! Every listener, timer or observer an effect registers goes through a
//! [`Disposer`]; the effect's destructor disposes it, so a component leaves
//! nothing scheduled behind once it unmounts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget};

use crate::error::DomError;

#[derive(Default)]
pub struct Disposer {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl Disposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `cleanup` on dispose.
    pub fn defer(&mut self, cleanup: impl FnOnce() + 'static) {
        self.cleanups.push(Box::new(cleanup));
    }

    /// Keeps `value` alive until dispose. Timers and closures cancel on drop.
    pub fn keep<T: 'static>(&mut self, value: T) {
        self.defer(move || drop(value));
    }

    /// Adds an event listener and registers its removal.
    pub fn listen<T>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        callback: Closure<T>,
        passive: bool,
    ) -> Result<(), DomError>
    where
        T: ?Sized + 'static,
    {
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        let target = target.clone();
        self.defer(move || {
            let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        });
        Ok(())
    }

    /// Number of registrations still waiting for teardown.
    pub fn pending(&self) -> usize {
        self.cleanups.len()
    }

    /// Releases everything, most recent registration first.
    pub fn dispose(&mut self) {
        while let Some(cleanup) = self.cleanups.pop() {
            cleanup();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeTimer(Rc<Cell<usize>>);

    impl FakeTimer {
        fn schedule(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            FakeTimer(live.clone())
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn dispose_leaves_nothing_scheduled() {
        let live = Rc::new(Cell::new(0));
        let mut disposer = Disposer::new();

        disposer.keep(FakeTimer::schedule(&live));
        disposer.keep(FakeTimer::schedule(&live));
        let listeners = live.clone();
        listeners.set(listeners.get() + 1);
        disposer.defer(move || listeners.set(listeners.get() - 1));

        assert_eq!(live.get(), 3);
        assert_eq!(disposer.pending(), 3);

        disposer.dispose();
        assert_eq!(live.get(), 0);
        assert_eq!(disposer.pending(), 0);
    }

    #[test]
    fn drop_disposes_in_reverse_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        {
            let mut disposer = Disposer::new();
            for i in 0..3 {
                let order = order.clone();
                disposer.defer(move || order.borrow_mut().push(i));
            }
        }
        assert_eq!(*order.borrow(), vec![2, 1, 0]);
    }

    #[test]
    fn dispose_twice_is_harmless() {
        let count = Rc::new(Cell::new(0));
        let mut disposer = Disposer::new();
        let c = count.clone();
        disposer.defer(move || c.set(c.get() + 1));
        disposer.dispose();
        disposer.dispose();
        assert_eq!(count.get(), 1);
    }
}
