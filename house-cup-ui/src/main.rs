//! House Cup page
//!
//! Hogwarts house points standings built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. Standings, colours and
//! loading/error resolution come from the `house-cup` library; this crate
//! adds the gloo-net GraphQL transport, the entrance timer and the markup.

use leptos::*;

mod api;
mod app;
mod components;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
