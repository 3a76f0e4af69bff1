//! Modal Dialogs
//!
//! The reward trade confirmation and the knowledge detail modals.

/// Ways a modal can be dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseIcon,
    Cancel,
    Overlay,
    Confirmed,
}

/// Trade confirmation: `hidden -> visible` on a trade click,
/// back to hidden on any close reason
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeModal {
    pub visible: bool,
    /// Item name shown in the dialog
    pub item: String,
    /// Cost shown in the dialog
    pub cost: String,
    /// Item the confirm button acts on
    pending_item: Option<String>,
}

impl TradeModal {
    pub fn open(&mut self, item: &str, cost: &str) {
        self.item = item.to_string();
        self.cost = cost.to_string();
        self.pending_item = Some(item.to_string());
        self.visible = true;
    }

    pub fn close(&mut self, reason: CloseReason) {
        if self.visible {
            tracing::debug!(?reason, "trade modal closed");
        }
        self.visible = false;
    }

    /// Item the confirm button is bound to
    #[cfg(test)]
    pub fn pending_item(&self) -> Option<&str> {
        self.pending_item.as_deref()
    }

    /// Confirm the pending trade and close; returns the traded item
    pub fn confirm(&mut self) -> Option<String> {
        if !self.visible {
            return None;
        }
        let item = self.pending_item.clone();
        self.close(CloseReason::Confirmed);
        item
    }
}

/// Knowledge detail modals keyed by `data-target`; at most one open
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailModals {
    open: Option<String>,
}

impl DetailModals {
    pub fn open(&mut self, target: &str) {
        self.open = Some(target.to_string());
    }

    pub fn close(&mut self, reason: CloseReason) {
        if let Some(target) = self.open.take() {
            tracing::debug!(%target, ?reason, "detail modal closed");
        }
    }

    pub fn is_open(&self, target: &str) -> bool {
        self.open.as_deref() == Some(target)
    }

    /// Whether the body should carry `modal-open`
    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_modal_open_populates_display() {
        let mut modal = TradeModal::default();
        modal.open("Sticker", "50");
        assert!(modal.visible);
        assert_eq!(modal.item, "Sticker");
        assert_eq!(modal.cost, "50");
        assert_eq!(modal.pending_item(), Some("Sticker"));
    }

    #[test]
    fn test_trade_modal_every_close_reason_hides() {
        for reason in [CloseReason::CloseIcon, CloseReason::Cancel, CloseReason::Overlay] {
            let mut modal = TradeModal::default();
            modal.open("Tote bag", "120");
            modal.close(reason);
            assert!(!modal.visible);
        }
    }

    #[test]
    fn test_trade_modal_confirm_returns_item_once() {
        let mut modal = TradeModal::default();
        modal.open("Sticker", "50");
        assert_eq!(modal.confirm().as_deref(), Some("Sticker"));
        assert!(!modal.visible);
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn test_reopen_rebinds_confirm_target() {
        let mut modal = TradeModal::default();
        modal.open("Sticker", "50");
        modal.close(CloseReason::Cancel);
        modal.open("Mug", "300");
        assert_eq!(modal.confirm().as_deref(), Some("Mug"));
    }

    #[test]
    fn test_detail_modals_single_open() {
        let mut modals = DetailModals::default();
        modals.open("modal-1");
        assert!(modals.is_open("modal-1"));
        modals.open("modal-2");
        assert!(!modals.is_open("modal-1"));
        assert!(modals.any_open());
        modals.close(CloseReason::Overlay);
        assert!(!modals.any_open());
    }
}
