//! Toast Notification

use std::time::Duration;

use super::StateCell;
use crate::scheduler::Scheduler;

/// Transient notification; a newer `show` supersedes any pending hide
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    /// Show `message`, returning the generation its hide timer must match
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.visible = true;
        self.generation
    }

    /// Hide if no newer `show` happened since `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

/// Show a toast and schedule its auto-hide
pub fn show_toast<C: StateCell<ToastState>>(
    cell: &C,
    scheduler: &dyn Scheduler,
    message: impl Into<String>,
    duration: Duration,
) {
    let message = message.into();
    tracing::debug!("toast: {}", message);
    let Some(generation) = cell.modify(|toast| toast.show(message)) else {
        return;
    };
    let cell = cell.clone();
    scheduler.schedule(
        duration,
        Box::new(move || {
            if cell.modify(|toast| toast.expire(generation)) == Some(true) {
                tracing::debug!("toast hidden");
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::testing::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    const THREE_SECONDS: Duration = Duration::from_secs(3);

    #[test]
    fn test_toast_hides_after_duration() {
        let cell = Rc::new(RefCell::new(ToastState::default()));
        let scheduler = ManualScheduler::new();

        show_toast(&cell, &scheduler, "hello", THREE_SECONDS);
        assert!(cell.borrow().visible);

        scheduler.advance(Duration::from_millis(2999));
        assert!(cell.borrow().visible);

        scheduler.advance(Duration::from_millis(1));
        assert!(!cell.borrow().visible);
    }

    #[test]
    fn test_second_show_restarts_timer_and_replaces_message() {
        let cell = Rc::new(RefCell::new(ToastState::default()));
        let scheduler = ManualScheduler::new();

        show_toast(&cell, &scheduler, "first", THREE_SECONDS);
        scheduler.advance(Duration::from_secs(2));
        show_toast(&cell, &scheduler, "second", THREE_SECONDS);
        assert_eq!(cell.borrow().message, "second");

        // First timer fires but is stale
        scheduler.advance(Duration::from_secs(1));
        assert!(cell.borrow().visible);

        scheduler.advance(Duration::from_secs(2));
        assert!(!cell.borrow().visible);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_expire_with_old_generation_is_ignored() {
        let mut toast = ToastState::default();
        let first = toast.show("a");
        let second = toast.show("b");
        assert!(!toast.expire(first));
        assert!(toast.expire(second));
        assert!(!toast.expire(second));
    }
}
