//! UI Components
//!
//! Leptos components for the standings page.

pub mod house_points;
pub mod loading;

pub use house_points::HousePoints;
pub use loading::StatusMessage;
