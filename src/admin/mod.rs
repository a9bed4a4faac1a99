//! Admin-session surfaces: live list views, per-table change
//! subscriptions, and the session gate.

pub mod list_view;
pub mod session;
pub mod subscription;

pub use list_view::{FetchTicket, ListView, LiveRecord};
pub use session::{GateDecision, SessionGate, SessionState};
pub use subscription::{ChangeHandlers, TableSubscription};
