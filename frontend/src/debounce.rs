use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;

/// Trailing-edge debounce: only the last call within `delay_ms` runs.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.delay_ms, f);

        // dropping the previous timeout cancels it
        self.pending.borrow_mut().replace(timeout);
    }
}
