use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::usecase::ports::timer::Timer;

/// Converts a delay in milliseconds; zero and negative delays still defer to
/// the next scheduling turn.
pub fn delay_from_millis(delay_ms: i64) -> Duration {
    Duration::from_millis(delay_ms.max(0) as u64)
}

struct Pending<A, H> {
    generation: u64,
    args: A,
    handle: H,
}

struct Inner<A, T: Timer> {
    timer: T,
    delay: Cell<Duration>,
    callback: RefCell<Rc<dyn Fn(A)>>,
    pending: RefCell<Option<Pending<A, T::Handle>>>,
    generation: Cell<u64>,
}

impl<A, T: Timer> Inner<A, T> {
    fn fire(&self, generation: u64) {
        let is_current = self
            .pending
            .borrow()
            .as_ref()
            .is_some_and(|pending| pending.generation == generation);
        if !is_current {
            return;
        }
        let pending = self.pending.borrow_mut().take();
        if let Some(pending) = pending {
            self.invoke(pending.args);
        }
    }

    fn invoke(&self, args: A) {
        // Cloned out so the callback may replace itself or call back in.
        let callback = self.callback.borrow().clone();
        callback(args);
    }
}

/// Trailing-edge debounce.
///
/// Repeated calls within the delay collapse into one call of the latest
/// callback with the latest arguments. Clones share the same pending call.
pub struct Debouncer<A: 'static, T: Timer + 'static> {
    inner: Rc<Inner<A, T>>,
}

impl<A: 'static, T: Timer + 'static> Clone for Debouncer<A, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static, T: Timer + 'static> Debouncer<A, T> {
    pub fn new(timer: T, delay_ms: i64, callback: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                timer,
                delay: Cell::new(delay_from_millis(delay_ms)),
                callback: RefCell::new(Rc::new(callback)),
                pending: RefCell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    /// Replaces the callback a pending or future call will run.
    pub fn set_callback(&self, callback: impl Fn(A) + 'static) {
        *self.inner.callback.borrow_mut() = Rc::new(callback);
    }

    /// Applies to calls made after this one.
    pub fn set_delay(&self, delay_ms: i64) {
        self.inner.delay.set(delay_from_millis(delay_ms));
    }

    pub fn call(&self, args: A) {
        self.cancel();

        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);

        let weak: Weak<Inner<A, T>> = Rc::downgrade(&self.inner);
        let handle = self.inner.timer.schedule(
            self.inner.delay.get(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.fire(generation);
                }
            }),
        );
        *self.inner.pending.borrow_mut() = Some(Pending {
            generation,
            args,
            handle,
        });
    }

    /// Drops the pending call, if any, without running it.
    pub fn cancel(&self) {
        let pending = self.inner.pending.borrow_mut().take();
        if let Some(pending) = pending {
            self.inner.timer.cancel(pending.handle);
        }
    }

    /// Runs the pending call now instead of waiting for the delay.
    pub fn flush(&self) {
        let pending = self.inner.pending.borrow_mut().take();
        if let Some(pending) = pending {
            self.inner.timer.cancel(pending.handle);
            self.inner.invoke(pending.args);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}
