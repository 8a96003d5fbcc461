//! Status Component
//!
//! Loading and error placeholders shown in place of the chart.

use leptos::*;

const STATUS_CLASS: &str = "w-full max-w-7xl mx-auto text-center py-10";

/// One-line status message; errors render in red
#[component]
pub fn StatusMessage(
    #[prop(into)]
    message: String,
    #[prop(optional)]
    error: bool,
) -> impl IntoView {
    let class = if error {
        format!("{} text-red-500", STATUS_CLASS)
    } else {
        STATUS_CLASS.to_string()
    };

    view! { <p class=class>{message}</p> }
}
