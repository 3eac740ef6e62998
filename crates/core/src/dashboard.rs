use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::display_amount;
use crate::status::classify;
use crate::types::{ServiceOrder, TenantStats};

/// Maximum number of orders surfaced in the recent-orders feed.
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// Immutable point-in-time aggregation handed to the view layer.
///
/// `Default` doubles as the "no data yet" state rendered before the source
/// has responded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub customers: u64,
    pub vehicles: u64,
    pub service_orders: u64,
    pub pending_orders: u64,
    pub recent_orders: Vec<RecentOrder>,
}

/// One row of the recent-orders feed, classified and formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    pub number: u64,
    pub customer: String,
    /// Brand and model joined for display, e.g. `Honda Civic`.
    pub vehicle: String,
    pub plate: String,
    /// Raw status code as received from the source.
    pub status: String,
    pub status_label: String,
    pub status_class: String,
    /// Formatted total, or `-` for unpriced orders.
    pub total: String,
    pub created_at: DateTime<Utc>,
}

impl RecentOrder {
    fn from_order(order: &ServiceOrder) -> Self {
        let badge = classify(&order.status);
        Self {
            id: order.id.clone(),
            number: order.number,
            customer: order.customer.name.clone(),
            vehicle: format!("{} {}", order.vehicle.brand, order.vehicle.model),
            plate: order.vehicle.plate.clone(),
            status: order.status.clone(),
            status_label: badge.label.to_string(),
            status_class: badge.class.to_string(),
            total: display_amount(order.total_price),
            created_at: order.created_at,
        }
    }
}

/// Builds a dashboard snapshot from a stats response and the order feed.
///
/// `stats` is `None` while the source has not responded; counters then
/// default to zero. Recent orders are the first [`RECENT_ORDERS_LIMIT`]
/// elements of `orders` in the order supplied: the source sorts newest-first
/// and no re-sorting happens here. Records with an unrecognized status are
/// still included, classified through the draft fallback. Pure projection,
/// no state survives the call.
pub fn build_snapshot(stats: Option<&TenantStats>, orders: &[ServiceOrder]) -> DashboardSnapshot {
    let stats = stats.copied().unwrap_or_default();
    let recent_orders = orders
        .iter()
        .take(RECENT_ORDERS_LIMIT)
        .map(RecentOrder::from_order)
        .collect();

    DashboardSnapshot {
        customers: stats.customers,
        vehicles: stats.vehicles,
        service_orders: stats.service_orders,
        pending_orders: stats.pending_orders,
        recent_orders,
    }
}
