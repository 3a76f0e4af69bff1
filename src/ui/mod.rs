//! UI State Machines
//!
//! Visible/hidden surfaces (modals, toast, filters) as plain structs.
//! Components keep them in signals; tests keep them in `RefCell`s.

mod filter;
mod modal;
mod toast;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

pub use filter::*;
pub use modal::*;
pub use toast::*;

/// Shared, mutable home for a piece of UI state
pub trait StateCell<T>: Clone + 'static {
    /// Mutate the state; `None` if the cell is gone
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T: 'static> StateCell<T> for Rc<RefCell<T>> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
