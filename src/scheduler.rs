//! Delayed Tasks
//!
//! One-shot timers behind a trait so toast auto-hide and redirects can be
//! driven by hand in tests.

use std::time::Duration;

pub trait Scheduler {
    /// Run `task` once after `delay`; not cancellable
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>);
}

/// `setTimeout`-backed scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Collects tasks; the test advances time explicitly
    #[derive(Default)]
    pub struct ManualScheduler {
        now: RefCell<Duration>,
        pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Move the clock forward, running every task that falls due
        pub fn advance(&self, by: Duration) {
            let now = *self.now.borrow() + by;
            *self.now.borrow_mut() = now;
            let due: Vec<_> = {
                let mut pending = self.pending.borrow_mut();
                let (due, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(at, _)| *at <= now);
                *pending = rest;
                due
            };
            for (_, task) in due {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
            let at = *self.now.borrow() + delay;
            self.pending.borrow_mut().push((at, task));
        }
    }
}
