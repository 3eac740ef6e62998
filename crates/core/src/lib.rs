//! Pure domain layer for the shop dashboard.
//!
//! Everything in this crate is a stateless computation over values handed in
//! by the caller: status classification, money formatting and the dashboard
//! snapshot projection. Fetching the underlying data is the job of the
//! `oficina-dash-source` crate.

pub mod dashboard;
pub mod money;
pub mod status;
pub mod types;

pub use dashboard::{build_snapshot, DashboardSnapshot, RecentOrder, RECENT_ORDERS_LIMIT};
pub use status::{classify, StatusBadge};
pub use types::{CustomerRef, OrderStatus, ServiceOrder, TenantStats, VehicleRef};
