//! Standings
//!
//! Houses, the records served by the backend, and the derived view the
//! chart is drawn from.

pub mod color;
mod house;
mod model;
mod view;

pub use color::{accent_color, color_for, Rgb};
pub use house::{House, UnknownHouse};
pub use model::{HouseStanding, PointsHistoryEntry, Teacher};
pub use view::{Bar, StandingsView};
