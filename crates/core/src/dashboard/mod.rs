//! Dashboard module - the shared snapshot and the operations the UI calls.

mod dashboard_model;
mod dashboard_state;


pub use dashboard_model::DashboardSummary;
pub use dashboard_state::DashboardState;
