use std::time::Instant;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::warn;

use oficina_dash_core::{build_snapshot, DashboardSnapshot};
use oficina_dash_source::OrderSourceClient;

use crate::problem::ProblemResponse;
use crate::telemetry;

#[derive(Clone)]
pub struct AppState {
    metrics: PrometheusHandle,
    source: OrderSourceClient,
}

impl AppState {
    pub fn new(metrics: PrometheusHandle, source: OrderSourceClient) -> Self {
        Self { metrics, source }
    }

    pub fn metrics(&self) -> &PrometheusHandle {
        &self.metrics
    }

    pub fn source(&self) -> &OrderSourceClient {
        &self.source
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .route("/api/tenants/:tenant/dashboard", get(dashboard))
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = telemetry::render_metrics(state.metrics());
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; version=0.0.4")
        .body(Body::from(body))
        .unwrap()
}

/// Fetches tenant stats and the order feed concurrently and projects them
/// into a [`DashboardSnapshot`].
///
/// A single failed fetch degrades to the empty default for that side; the
/// request only fails when neither call succeeded.
async fn dashboard(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
) -> Result<Json<DashboardSnapshot>, ProblemResponse> {
    let started = Instant::now();

    let (stats, orders) = tokio::join!(
        state.source().fetch_stats(&tenant),
        state.source().fetch_orders(&tenant),
    );

    let stats = match stats {
        Ok(stats) => Some(stats),
        Err(err) => {
            warn!(stage = "dashboard", %tenant, error = %err, "stats fetch failed");
            counter!("order_source_errors_total", "call" => "stats").increment(1);
            None
        }
    };
    let orders = match orders {
        Ok(orders) => Some(orders),
        Err(err) => {
            warn!(stage = "dashboard", %tenant, error = %err, "orders fetch failed");
            counter!("order_source_errors_total", "call" => "orders").increment(1);
            None
        }
    };

    if stats.is_none() && orders.is_none() {
        counter!("dashboard_requests_total", "result" => "source_unavailable").increment(1);
        return Err(ProblemResponse::source_unavailable(
            "order source did not respond",
        ));
    }

    let result = if stats.is_some() && orders.is_some() {
        "ok"
    } else {
        "partial"
    };

    let snapshot = build_snapshot(stats.as_ref(), orders.as_deref().unwrap_or_default());

    counter!("dashboard_requests_total", "result" => result).increment(1);
    histogram!("dashboard_build_seconds").record(started.elapsed().as_secs_f64());

    Ok(Json(snapshot))
}
