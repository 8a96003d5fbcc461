//! Data Access
//!
//! The two read queries behind the standings display.
//!
//! ## Architecture
//!
//! - **graphql**: query documents, request bodies, response decoding
//! - **state**: tri-state `loading | failed | ready` observation
//! - **client**: `HousePointsSource` trait and its reqwest implementation
//!   (native builds only)

mod error;
pub mod graphql;
mod state;

#[cfg(feature = "client")]
mod client;

pub use error::{QueryError, QueryResult};
pub use graphql::HistoryQuery;
pub use state::QueryState;

#[cfg(feature = "client")]
pub use client::{ClientConfig, GraphQlClient, HousePointsSource};
