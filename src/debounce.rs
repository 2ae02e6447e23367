use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

/// Trailing-edge debounce bookkeeping, independent of any timer.
///
/// Every call hands out a ticket. When the quiet period of a ticket ends,
/// `settle` yields the latest arguments only if no newer call happened in
/// the meantime, so a burst of calls collapses into one run.
#[derive(Debug)]
pub struct Debounce<A> {
    generation: u64,
    pending: Option<A>,
}

impl<A> Debounce<A> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    pub fn call(&mut self, args: A) -> u64 {
        self.generation += 1;
        self.pending = Some(args);
        self.generation
    }

    pub fn settle(&mut self, ticket: u64) -> Option<A> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }
}

impl<A> Default for Debounce<A> {
    fn default() -> Self {
        Self::new()
    }
}

struct Inner<A> {
    wait_ms: u32,
    state: RefCell<Debounce<A>>,
    timer: RefCell<Option<Timeout>>,
    func: RefCell<Box<dyn FnMut(A)>>,
}

/// A function wrapped so it only runs once calls stop for `wait_ms`.
pub struct Debounced<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn new(wait_ms: u32, func: impl FnMut(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                wait_ms,
                state: RefCell::new(Debounce::new()),
                timer: RefCell::new(None),
                func: RefCell::new(Box::new(func)),
            }),
        }
    }

    pub fn call(&self, args: A) {
        let ticket = self.inner.state.borrow_mut().call(args);
        let weak: Weak<Inner<A>> = Rc::downgrade(&self.inner);
        let timeout = Timeout::new(self.inner.wait_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let settled = inner.state.borrow_mut().settle(ticket);
            if let Some(args) = settled {
                let mut func = inner.func.borrow_mut();
                (*func)(args);
            }
        });
        // Dropping the previous Timeout clears it.
        *self.inner.timer.borrow_mut() = Some(timeout);
    }
}
