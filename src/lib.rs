//! # House Cup
//!
//! Animated house points standings fed by a GraphQL backend.
//!
//! ## Modules
//!
//! - [`standings`]: houses, backend records, and the derived sorted view
//! - [`query`]: GraphQL documents, tri-state query results, and the client
//! - [`display`]: loading/error/ready resolution, entrance animation, and
//!   terminal rendering
//! - [`config`]: TOML configuration with environment overrides
//!
//! The library builds without default features for the web page, which
//! reuses [`standings`], [`query`] and [`display`] and brings its own
//! transport and timer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use house_cup::display::{HousePoints, Screen, ENTRANCE_DELAY};
//! use house_cup::query::{ClientConfig, GraphQlClient, HistoryQuery};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(GraphQlClient::new(ClientConfig::default())?);
//!
//!     let mut display = HousePoints::mount(client, HistoryQuery::default(), ENTRANCE_DELAY);
//!     display.load().await;
//!     display.animation_started().await;
//!
//!     if let Screen::Standings(frame) = display.screen() {
//!         println!("{}", frame.footer());
//!     }
//!     Ok(())
//! }
//! ```

pub mod display;
pub mod query;
pub mod standings;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod logging;

pub use display::{DisplayError, Screen, StandingsFrame};
pub use query::{HistoryQuery, QueryError, QueryResult, QueryState};
pub use standings::{House, HouseStanding, PointsHistoryEntry, StandingsView, Teacher};

#[cfg(feature = "client")]
pub use display::{EntranceAnimation, HousePoints, Phase};
#[cfg(feature = "client")]
pub use query::{ClientConfig, GraphQlClient, HousePointsSource};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError};
