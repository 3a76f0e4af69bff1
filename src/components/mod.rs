//! UI Components
//!
//! Page-level Leptos components and their pieces.

mod knowledge_page;
mod log_page;
mod loss_record_form;
mod message_area;
mod points_page;
mod register_form;
mod stats_panel;
mod toast;
mod trade_modal;
mod week_nav;

pub use knowledge_page::KnowledgePage;
pub use log_page::LogPage;
pub use loss_record_form::LossRecordForm;
pub use message_area::MessageArea;
pub use points_page::PointsPage;
pub use register_form::RegisterForm;
pub use stats_panel::StatsPanel;
pub use toast::Toast;
pub use trade_modal::TradeModalView;
pub use week_nav::WeekNavBar;
