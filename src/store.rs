//! Points Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Reward;
use crate::points::Balance;

/// Element id of the embedded reward catalogue
pub const REWARDS_DATA_ID: &str = "rewards-data";

/// Points page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PointsState {
    /// Balance display
    pub balance: Balance,
    /// Reward catalogue, read once on mount
    pub rewards: Vec<Reward>,
    /// A weekly calculation is in flight
    pub calculating: bool,
}

/// Type alias for the store
pub type PointsStore = Store<PointsState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_balance(store: &PointsStore, balance: Balance) {
    store.balance().set(balance);
}

pub fn store_set_rewards(store: &PointsStore, rewards: Vec<Reward>) {
    tracing::debug!(count = rewards.len(), "rewards loaded");
    store.rewards().set(rewards);
}

/// Mark a calculation as started; `false` if one is already running
pub fn store_begin_calculation(store: &PointsStore) -> bool {
    if store.calculating().get_untracked() {
        return false;
    }
    store.calculating().set(true);
    true
}

pub fn store_end_calculation(store: &PointsStore) {
    store.calculating().set(false);
}
