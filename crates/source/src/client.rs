use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use oficina_dash_core::{ServiceOrder, TenantStats};

/// Client for the shop-management API endpoints consumed by the dashboard.
///
/// The API computes tenant-level counts and owns the order records; this
/// client only reads them. Timeouts and retries are configured on the
/// `reqwest::Client` handed in by the caller.
#[derive(Clone)]
pub struct OrderSourceClient {
    http: Client,
    base_url: Url,
    api_token: String,
}

impl OrderSourceClient {
    /// Creates a new client with the provided configuration.
    pub fn new(base_url: Url, api_token: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            base_url,
            api_token: api_token.into(),
        }
    }

    /// Fetches the aggregate counts for a tenant.
    pub async fn fetch_stats(&self, tenant_id: &str) -> Result<TenantStats, SourceError> {
        let url = self.base_url.join(&format!("tenants/{tenant_id}/stats"))?;
        let response = self
            .authorized_request(Method::GET, url)
            .send()
            .await
            .map_err(SourceError::Http)?;
        parse_json(response).await
    }

    /// Fetches the order collection for a tenant.
    ///
    /// The API returns orders sorted newest-first; callers selecting a recent
    /// window rely on that ordering.
    pub async fn fetch_orders(&self, tenant_id: &str) -> Result<Vec<ServiceOrder>, SourceError> {
        let url = self
            .base_url
            .join(&format!("tenants/{tenant_id}/service-orders"))?;
        let response = self
            .authorized_request(Method::GET, url)
            .send()
            .await
            .map_err(SourceError::Http)?;
        parse_json(response).await
    }

    fn authorized_request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.api_token))
    }
}

/// Errors produced by the order source client.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to build url: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

async fn parse_json<T>(response: Response) -> Result<T, SourceError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<unavailable>"));
        return Err(SourceError::Status { status, body });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn client(base_url: &Url) -> OrderSourceClient {
        OrderSourceClient::new(
            base_url.clone(),
            "api-token",
            Client::builder().build().expect("client"),
        )
    }

    #[tokio::test]
    async fn fetch_stats_parses_counts() {
        let server = MockServer::start_async().await;
        let base = Url::parse(&server.url("/api/")).expect("url");
        let client = client(&base);

        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/tenants/shop-1/stats")
                    .header("Authorization", "Bearer api-token");
                then.status(200).json_body(json!({
                    "customers": 12,
                    "vehicles": 18,
                    "serviceOrders": 7,
                    "pendingOrders": 3
                }));
            })
            .await;

        let stats = client.fetch_stats("shop-1").await.expect("fetch stats");
        mock.assert_async().await;

        assert_eq!(stats.customers, 12);
        assert_eq!(stats.vehicles, 18);
        assert_eq!(stats.service_orders, 7);
        assert_eq!(stats.pending_orders, 3);
    }

    #[tokio::test]
    async fn fetch_orders_parses_collection() {
        let server = MockServer::start_async().await;
        let base = Url::parse(&server.url("/api/")).expect("url");
        let client = client(&base);

        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/tenants/shop-1/service-orders")
                    .header("Authorization", "Bearer api-token");
                then.status(200).json_body(json!([
                    {
                        "id": "os-1",
                        "number": 1001,
                        "status": "IN_PROGRESS",
                        "totalPrice": "1850.00",
                        "createdAt": "2026-02-05T12:00:00Z",
                        "customer": { "name": "João Silva" },
                        "vehicle": { "plate": "ABC1D23", "brand": "Honda", "model": "Civic" }
                    },
                    {
                        "id": "os-2",
                        "number": 1002,
                        "status": "DIAGNOSING",
                        "totalPrice": 0,
                        "createdAt": "2026-02-04T09:30:00Z",
                        "customer": { "name": "Ana Costa" },
                        "vehicle": { "plate": "RTY7U89", "brand": "Chevrolet", "model": "Onix" }
                    }
                ]));
            })
            .await;

        let orders = client.fetch_orders("shop-1").await.expect("fetch orders");
        mock.assert_async().await;

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].number, 1001);
        assert_eq!(orders[0].total_price, Decimal::new(185000, 2));
        assert_eq!(orders[1].customer.name, "Ana Costa");
    }

    #[tokio::test]
    async fn error_status_returns_message() {
        let server = MockServer::start_async().await;
        let base = Url::parse(&server.url("/api/")).expect("url");
        let client = client(&base);

        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/tenants/shop-1/stats");
                then.status(401).body("unauthorized");
            })
            .await;

        let err = client
            .fetch_stats("shop-1")
            .await
            .expect_err("should error");
        match err {
            SourceError::Status { status, body } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
