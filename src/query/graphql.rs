//! GraphQL documents and envelopes
//!
//! Transport-free pieces shared by the native client and the web page:
//! query documents, request bodies, and response decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{QueryError, QueryResult};
use crate::standings::{House, HouseStanding, PointsHistoryEntry};

/// Aggregate total per house
pub const HOUSE_STANDINGS_QUERY: &str = "\
query HouseStandings {
  houseTotals {
    house
    totalPoints
  }
}";

/// Most recent point changes, newest first
pub const POINTS_HISTORY_QUERY: &str = "\
query PointsHistory($house: HouseEnum, $limit: Int!) {
  pointsHistory(house: $house, limit: $limit) {
    house
    points
    isDeduction
    reason
    timestamp
    teacher {
      name
    }
  }
}";

/// POST body for a GraphQL operation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: V,
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorMessage {
    pub message: String,
}

impl<D> GraphQlResponse<D> {
    /// Any reported error fails the whole operation
    pub fn into_result(self) -> QueryResult<D> {
        if !self.errors.is_empty() {
            return Err(QueryError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(QueryError::MissingData)
    }
}

/// Decode a response body into its data payload
pub fn decode_response<D: DeserializeOwned>(body: &str) -> QueryResult<D> {
    let response: GraphQlResponse<D> = serde_json::from_str(body)?;
    response.into_result()
}

#[derive(Debug, Clone, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseTotalsData {
    pub house_totals: Vec<HouseStanding>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsHistoryData {
    pub points_history: Vec<PointsHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsHistoryVariables {
    pub house: Option<House>,
    pub limit: u32,
}

/// Build the standings request
pub fn standings_request() -> GraphQlRequest<NoVariables> {
    GraphQlRequest {
        query: HOUSE_STANDINGS_QUERY,
        operation_name: "HouseStandings",
        variables: NoVariables {},
    }
}

/// Parameters of the points history query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub house: Option<House>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            house: None,
            limit: 30,
            offset: 10,
        }
    }
}

impl HistoryQuery {
    /// The backend pages by limit only, so the offset rows are fetched too
    /// and dropped in [`HistoryQuery::apply_offset`].
    pub fn request(&self) -> GraphQlRequest<PointsHistoryVariables> {
        GraphQlRequest {
            query: POINTS_HISTORY_QUERY,
            operation_name: "PointsHistory",
            variables: PointsHistoryVariables {
                house: self.house,
                limit: self.limit.saturating_add(self.offset),
            },
        }
    }

    pub fn apply_offset(&self, entries: Vec<PointsHistoryEntry>) -> Vec<PointsHistoryEntry> {
        entries
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}
