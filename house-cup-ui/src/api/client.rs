//! GraphQL API Client
//!
//! Browser transport for the house points queries. Request documents and
//! response decoding are shared with the native client.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use house_cup::query::graphql::{self, GraphQlRequest, HouseTotalsData, PointsHistoryData};
use house_cup::query::{HistoryQuery, QueryError, QueryResult};
use house_cup::standings::{HouseStanding, PointsHistoryEntry};

/// Default GraphQL endpoint
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8000/graphql";

/// Local storage key holding an endpoint override
pub const GRAPHQL_URL_KEY: &str = "house_cup_graphql_url";

/// Get the GraphQL endpoint from local storage or use default
pub fn get_graphql_url() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(GRAPHQL_URL_KEY).ok().flatten());
    normalize_url(stored.as_deref())
}

/// Blank overrides fall back to the default; trailing slashes are dropped.
fn normalize_url(stored: Option<&str>) -> String {
    match stored.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_GRAPHQL_URL.to_string(),
    }
}

/// GraphQL client provided to components through context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryClient {
    endpoint: String,
}

impl QueryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current totals for every house
    pub async fn house_standings(&self) -> QueryResult<Vec<HouseStanding>> {
        let data: HouseTotalsData = self.execute(&graphql::standings_request()).await?;
        Ok(data.house_totals)
    }

    /// Recent point changes, newest first, with the offset applied
    pub async fn points_history(&self, query: &HistoryQuery) -> QueryResult<Vec<PointsHistoryEntry>> {
        let data: PointsHistoryData = self.execute(&query.request()).await?;
        Ok(query.apply_offset(data.points_history))
    }

    async fn execute<V: Serialize, D: DeserializeOwned>(
        &self,
        request: &GraphQlRequest<V>,
    ) -> QueryResult<D> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| QueryError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(QueryError::Http {
                status: response.status(),
                message: body,
            });
        }

        graphql::decode_response(&body)
    }
}
