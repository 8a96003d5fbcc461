//! GraphQL HTTP client
//!
//! Native data layer for the standings display.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::graphql::{
    decode_response, standings_request, GraphQlRequest, HistoryQuery, HouseTotalsData,
    PointsHistoryData,
};
use super::{QueryError, QueryResult};
use crate::standings::{HouseStanding, PointsHistoryEntry};

/// Source of the two read queries the display consumes
///
/// Calling an operation again is a refetch.
#[async_trait]
pub trait HousePointsSource: Send + Sync {
    /// Aggregate total points per house
    async fn house_standings(&self) -> QueryResult<Vec<HouseStanding>>;

    /// Recent point-change events
    async fn points_history(&self, query: &HistoryQuery) -> QueryResult<Vec<PointsHistoryEntry>>;
}

/// Configuration for the GraphQL client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint (e.g., "http://localhost:8000/graphql")
    pub endpoint: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/graphql".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// reqwest-backed GraphQL client
pub struct GraphQlClient {
    client: Client,
    config: ClientConfig,
}

impl GraphQlClient {
    pub fn new(config: ClientConfig) -> QueryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| QueryError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn execute<V, D>(&self, request: &GraphQlRequest<V>) -> QueryResult<D>
    where
        V: Serialize + Sync,
        D: DeserializeOwned,
    {
        tracing::debug!("POST {} ({})", self.config.endpoint, request.operation_name);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            tracing::warn!("{} failed with HTTP {}", request.operation_name, status);
            return Err(QueryError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        decode_response(&body)
    }
}

fn map_transport_error(e: reqwest::Error) -> QueryError {
    if e.is_timeout() {
        QueryError::Timeout
    } else {
        QueryError::Network(e.to_string())
    }
}

#[async_trait]
impl HousePointsSource for GraphQlClient {
    async fn house_standings(&self) -> QueryResult<Vec<HouseStanding>> {
        let data: HouseTotalsData = self.execute(&standings_request()).await?;
        Ok(data.house_totals)
    }

    async fn points_history(&self, query: &HistoryQuery) -> QueryResult<Vec<PointsHistoryEntry>> {
        let data: PointsHistoryData = self.execute(&query.request()).await?;
        Ok(query.apply_offset(data.points_history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::House;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    /// Serve `router` on a loopback port and return its GraphQL URL
    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/graphql", addr)
    }

    fn client_for(endpoint: String) -> GraphQlClient {
        GraphQlClient::new(ClientConfig {
            endpoint,
            request_timeout_ms: 2_000,
        })
        .unwrap()
    }

    async fn fake_graphql(Json(body): Json<Value>) -> Json<Value> {
        match body["operationName"].as_str() {
            Some("HouseStandings") => Json(json!({"data": {"houseTotals": [
                {"house": "GRYFFINDOR", "totalPoints": 120},
                {"house": "SLYTHERIN", "totalPoints": 95},
                {"house": "HUFFLEPUFF", "totalPoints": 95},
                {"house": "RAVENCLAW", "totalPoints": 40}
            ]}})),
            Some("PointsHistory") => {
                let limit = body["variables"]["limit"].as_u64().unwrap_or(0);
                let entries: Vec<Value> = (0..limit)
                    .map(|i| {
                        json!({
                            "house": "RAVENCLAW",
                            "points": i,
                            "isDeduction": false,
                            "reason": null,
                            "timestamp": "2024-03-01T09:30:00",
                            "teacher": {"name": "Flitwick"}
                        })
                    })
                    .collect();
                Json(json!({"data": {"pointsHistory": entries}}))
            }
            _ => Json(json!({"errors": [{"message": "unknown operation"}]})),
        }
    }

    #[tokio::test]
    async fn test_fetch_standings() {
        let url = spawn_backend(Router::new().route("/graphql", post(fake_graphql))).await;
        let client = client_for(url);

        let standings = client.house_standings().await.unwrap();
        assert_eq!(standings.len(), 4);
        assert_eq!(standings[0], HouseStanding::new(House::Gryffindor, 120));
    }

    #[tokio::test]
    async fn test_fetch_history_applies_offset() {
        let url = spawn_backend(Router::new().route("/graphql", post(fake_graphql))).await;
        let client = client_for(url);

        let query = HistoryQuery {
            house: None,
            limit: 3,
            offset: 2,
        };
        let history = client.points_history(&query).await.unwrap();
        assert_eq!(
            history.iter().map(|e| e.points).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
        assert_eq!(history[0].teacher.name, "Flitwick");
    }

    #[tokio::test]
    async fn test_graphql_errors_surface_message() {
        let router = Router::new().route(
            "/graphql",
            post(|| async { Json(json!({"data": null, "errors": [{"message": "no such table: house_points"}]})) }),
        );
        let client = client_for(spawn_backend(router).await);

        let err = client.house_standings().await.unwrap_err();
        assert_eq!(err.to_string(), "no such table: house_points");
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let router = Router::new().route(
            "/graphql",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "backend down") }),
        );
        let client = client_for(spawn_backend(router).await);

        let err = client.house_standings().await.unwrap_err();
        assert_eq!(
            err,
            QueryError::Http {
                status: 503,
                message: "backend down".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/graphql", addr));
        let err = client.house_standings().await.unwrap_err();
        assert!(matches!(err, QueryError::Network(_)));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/graphql");
        assert_eq!(config.request_timeout_ms, 30_000);
    }
}
