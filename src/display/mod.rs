//! Standings Display
//!
//! Turns query states into something to draw.
//!
//! ## State machine (per mount)
//!
//! `Loading → Error` or `Loading → Ready(not animated) → Ready(animated)`.
//! The animated transition fires once, after a short delay, unless the
//! display is torn down first.

pub mod history;
mod screen;

#[cfg(feature = "client")]
mod animation;
#[cfg(feature = "client")]
mod component;
#[cfg(feature = "cli")]
pub mod terminal;

pub use screen::{DisplayError, Screen, StandingsFrame, ENTRANCE_DELAY_MS, LOADING_MESSAGE};

#[cfg(feature = "client")]
pub use animation::{EntranceAnimation, ENTRANCE_DELAY};
#[cfg(feature = "client")]
pub use component::{HousePoints, Phase};
