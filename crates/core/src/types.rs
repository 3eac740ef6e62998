use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One repair job tracked for a customer/vehicle pair.
///
/// Orders are created and advanced by the external order-management workflow;
/// this crate only reads point-in-time snapshots of them and never mutates
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: String,
    /// Sequential per-tenant number used for human display (`#1001`).
    pub number: u64,
    /// Raw status code as supplied by the source. Kept as a string so an
    /// order carrying an unknown code still deserializes and degrades to the
    /// draft badge instead of failing the whole feed.
    #[serde(default)]
    pub status: String,
    /// Total amount in BRL. Zero means the order has not been priced yet.
    #[serde(default)]
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub customer: CustomerRef,
    pub vehicle: VehicleRef,
}

impl ServiceOrder {
    /// Returns the parsed status, falling back to draft for unknown codes.
    pub fn status(&self) -> OrderStatus {
        OrderStatus::from_code(&self.status).unwrap_or(OrderStatus::Draft)
    }
}

/// Customer reference embedded in an order. The customer entity itself is
/// owned by the external system; only the name is needed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub name: String,
}

/// Vehicle reference embedded in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRef {
    pub plate: String,
    pub brand: String,
    pub model: String,
}

/// Tenant-level counts computed by the order source.
///
/// These are consumed as-is for the dashboard cards; nothing here is derived
/// locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantStats {
    #[serde(default)]
    pub customers: u64,
    #[serde(default)]
    pub vehicles: u64,
    /// Total open service orders.
    #[serde(default)]
    pub service_orders: u64,
    /// Subset of open orders still awaiting action.
    #[serde(default)]
    pub pending_orders: u64,
}

/// Closed set of workflow states for a service order.
///
/// The natural progression is Draft → Diagnosing → Quoting → WaitingApproval
/// → Approved → InProgress → QualityCheck → Completed → Delivered, with
/// Cancelled reachable from any non-terminal state. Transitions are enforced
/// by the order-management system, not here; this crate only classifies codes
/// for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Draft,
    Diagnosing,
    Quoting,
    WaitingApproval,
    Approved,
    InProgress,
    QualityCheck,
    Completed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Parses the canonical wire representation of a status code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DRAFT" => Some(Self::Draft),
            "DIAGNOSING" => Some(Self::Diagnosing),
            "QUOTING" => Some(Self::Quoting),
            "WAITING_APPROVAL" => Some(Self::WaitingApproval),
            "APPROVED" => Some(Self::Approved),
            "IN_PROGRESS" => Some(Self::InProgress),
            "QUALITY_CHECK" => Some(Self::QualityCheck),
            "COMPLETED" => Some(Self::Completed),
            "DELIVERED" => Some(Self::Delivered),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns the canonical wire representation for the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Diagnosing => "DIAGNOSING",
            Self::Quoting => "QUOTING",
            Self::WaitingApproval => "WAITING_APPROVAL",
            Self::Approved => "APPROVED",
            Self::InProgress => "IN_PROGRESS",
            Self::QualityCheck => "QUALITY_CHECK",
            Self::Completed => "COMPLETED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns `true` when no further workflow transition is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL_STATUSES: [OrderStatus; 10] = [
        OrderStatus::Draft,
        OrderStatus::Diagnosing,
        OrderStatus::Quoting,
        OrderStatus::WaitingApproval,
        OrderStatus::Approved,
        OrderStatus::InProgress,
        OrderStatus::QualityCheck,
        OrderStatus::Completed,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    #[test]
    fn status_codes_round_trip() {
        for status in ALL_STATUSES {
            assert_eq!(OrderStatus::from_code(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_code_does_not_parse() {
        assert_eq!(OrderStatus::from_code(""), None);
        assert_eq!(OrderStatus::from_code("draft"), None);
        assert_eq!(OrderStatus::from_code("ARCHIVED"), None);
    }

    #[test]
    fn only_delivered_and_cancelled_are_terminal() {
        for status in ALL_STATUSES {
            let expected = matches!(status, OrderStatus::Delivered | OrderStatus::Cancelled);
            assert_eq!(status.is_terminal(), expected, "{status:?}");
        }
    }

    #[test]
    fn order_deserializes_from_source_payload() {
        let order: ServiceOrder = serde_json::from_value(json!({
            "id": "os-1",
            "number": 1001,
            "status": "IN_PROGRESS",
            "totalPrice": "1850.00",
            "createdAt": "2026-02-05T12:00:00Z",
            "customer": { "name": "João Silva" },
            "vehicle": { "plate": "ABC1D23", "brand": "Honda", "model": "Civic" }
        }))
        .expect("order should deserialize");

        assert_eq!(order.number, 1001);
        assert_eq!(order.status(), OrderStatus::InProgress);
        assert_eq!(order.vehicle.plate, "ABC1D23");
    }

    #[test]
    fn order_with_unknown_status_falls_back_to_draft() {
        let order: ServiceOrder = serde_json::from_value(json!({
            "id": "os-2",
            "number": 1002,
            "status": "SOMETHING_NEW",
            "totalPrice": 0,
            "createdAt": "2026-02-05T12:00:00Z",
            "customer": { "name": "Maria Santos" },
            "vehicle": { "plate": "XYZ9A87", "brand": "Toyota", "model": "Corolla" }
        }))
        .expect("order should deserialize");

        assert_eq!(order.status, "SOMETHING_NEW");
        assert_eq!(order.status(), OrderStatus::Draft);
    }

    #[test]
    fn stats_default_to_zero() {
        let stats: TenantStats = serde_json::from_value(json!({})).expect("stats");
        assert_eq!(stats, TenantStats::default());
        assert_eq!(stats.customers, 0);
    }
}
