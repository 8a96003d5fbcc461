//! House Points Component
//!
//! Standings chart fed by the two GraphQL queries. Bars mount at zero height
//! and grow to their share of the leader once the entrance timer fires; the
//! `.bar` CSS transition does the animating.

use gloo_timers::callback::Timeout;
use leptos::*;

use house_cup::display::{Screen, StandingsFrame, ENTRANCE_DELAY_MS, LOADING_MESSAGE};
use house_cup::query::{HistoryQuery, QueryState};
use house_cup::standings::Bar;

use crate::api::QueryClient;
use crate::components::StatusMessage;

/// Standings chart with loading and error states
#[component]
pub fn HousePoints() -> impl IntoView {
    let client = use_context::<QueryClient>().expect("QueryClient not provided");

    let standings_client = client.clone();
    let standings = create_local_resource(
        || (),
        move |_| {
            let client = standings_client.clone();
            async move { client.house_standings().await }
        },
    );

    // Fetched with the standings; gates the chart but is not drawn
    let history = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.points_history(&HistoryQuery::default()).await }
        },
    );

    // Chart content without the animation flag, so bars stay mounted while
    // `animated` flips and the height transition can run
    let screen = move || {
        Screen::resolve(
            &QueryState::from(standings.get()),
            &QueryState::from(history.get()),
            false,
        )
    };

    let (animated, set_animated) = create_signal(false);
    let timer = store_value(None::<Timeout>);

    // Arm once, the first time the chart is ready
    create_effect(move |armed: Option<bool>| {
        if armed == Some(true) {
            return true;
        }
        if !screen().is_ready() {
            return false;
        }
        let delay = ENTRANCE_DELAY_MS as u32;
        timer.set_value(Some(Timeout::new(delay, move || set_animated.set(true))));
        true
    });

    on_cleanup(move || {
        timer.try_update_value(|pending| {
            if let Some(timeout) = pending.take() {
                timeout.cancel();
            }
        });
    });

    view! {
        <div class="w-full max-w-7xl mx-auto">
            {move || match screen() {
                Screen::Loading => view! { <StatusMessage message=LOADING_MESSAGE /> }.into_view(),
                Screen::Error(e) => view! { <StatusMessage message=e.to_string() error=true /> }.into_view(),
                Screen::Standings(frame) => view! { <StandingsChart frame=frame animated=animated /> }.into_view(),
            }}
        </div>
    }
}

/// Bars plus the total footer
#[component]
fn StandingsChart(frame: StandingsFrame, animated: ReadSignal<bool>) -> impl IntoView {
    let footer = frame.footer();

    view! {
        <div class="w-full mb-10">
            <div class="h-92 w-full">
                <div class="flex h-full w-full items-end">
                    {frame
                        .bars()
                        .into_iter()
                        .map(|bar| view! { <HouseBar bar=bar animated=animated /> })
                        .collect_view()}
                </div>
            </div>
            <div class="mb-4 text-center mt-8 text-lg">{footer}</div>
        </div>
    }
}

/// One house column: crest, points, and a bar shaped like a pennant
#[component]
fn HouseBar(bar: Bar, animated: ReadSignal<bool>) -> impl IntoView {
    let name = bar.house.name();
    let image = bar.image_path();
    let points = points_label(&bar);
    let tooltip = bar_tooltip(&bar);
    let accent = bar.accent.to_string();
    let blason_style = format!("border-top-color: {};", bar.fill);

    let style = move || bar_style(&bar, animated.get());

    view! {
        <div class="flex-1 flex flex-col items-center justify-end h-full px-2" title=tooltip>
            <img src=image alt=name width="80" height="80" class="mx-auto mb-2" />
            <h2 class="text-xl font-bold">{name}</h2>
            <span class="font-bold mb-1" style=format!("color: {};", accent)>{points}</span>
            <div class="bar w-full max-w-[120px]" style=style />
            <div class="triangle-blason w-full max-w-[120px]" style=blason_style />
        </div>
    }
}

fn bar_style(bar: &Bar, animated: bool) -> String {
    format!(
        "height: {:.2}%; background-color: {}; border-color: {};",
        bar.height_percent(animated),
        bar.fill,
        bar.accent
    )
}

fn points_label(bar: &Bar) -> String {
    format!("{} pts", bar.total_points)
}

fn bar_tooltip(bar: &Bar) -> String {
    if bar.deficit > 0 {
        format!("{}: {} points behind the leader", bar.house, bar.deficit)
    } else {
        format!("{}: leading", bar.house)
    }
}
