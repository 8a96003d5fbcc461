//! App Root Component
//!
//! Routing and the GraphQL client context.

use leptos::*;
use leptos_router::*;

use crate::api::{self, QueryClient};
use crate::components::HousePoints;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(QueryClient::new(api::get_graphql_url()));

    view! {
        <Router>
            <div class="min-h-screen flex flex-col">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </div>
        </Router>
    }
}

/// Standings page
#[component]
fn Home() -> impl IntoView {
    view! {
        <header class="w-full pt-8">
            <HousePoints />
        </header>
        <main class="flex-1 container mx-auto px-4 py-8">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">"Hogwarts House Points"</h1>
                <p class="text-lg text-gray-600">"Current standings for the House Cup"</p>
            </div>
        </main>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-gray-600 mb-8">"Page not found"</p>
            <A href="/" class="underline">"Back to the standings"</A>
        </div>
    }
}
