//! API Module
//!
//! GraphQL client for the house points backend.

pub mod client;

pub use client::*;
