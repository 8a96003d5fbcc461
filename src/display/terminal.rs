//! Terminal rendering
//!
//! Draws a [`Screen`] as an inline ratatui bar chart, a plain table, or JSON.

use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar as ChartBar, BarChart, BarGroup, Block, Borders, Paragraph},
    Terminal,
};
use serde::Serialize;
use std::io;
use std::time::Duration;

use super::screen::{Screen, StandingsFrame, LOADING_MESSAGE};
use crate::standings::{Bar, Rgb, StandingsView};

/// Bar values are drawn on a fixed scale so fractions survive integer bars
const CHART_SCALE: u64 = 1000;

/// Width of the bars in table output
const TABLE_BAR_WIDTH: usize = 30;

/// Chart geometry
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub bar_width: u16,
    pub bar_gap: u16,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_width: 12,
            bar_gap: 3,
        }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Eased grow progress in `[0, 1]` for the bar transition
pub fn grow_progress(elapsed: Duration, transition: Duration) -> f64 {
    if transition.is_zero() {
        return 1.0;
    }
    let t = (elapsed.as_secs_f64() / transition.as_secs_f64()).clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Bar chart for a ready frame. `progress` scales the bars during the grow
/// transition and is ignored until the frame is animated.
pub fn chart(frame: &StandingsFrame, progress: f64, style: ChartStyle) -> BarChart<'static> {
    let bars: Vec<ChartBar<'static>> = frame
        .bars()
        .into_iter()
        .map(|bar| {
            let shown = bar.height_percent(frame.animated) / 100.0 * progress.clamp(0.0, 1.0);
            ChartBar::default()
                .value((shown * CHART_SCALE as f64).round() as u64)
                .text_value(format!("{} pts", bar.total_points))
                .label(Line::from(bar.house.name()))
                .style(Style::default().fg(color(bar.fill)))
                .value_style(
                    Style::default()
                        .fg(color(bar.accent))
                        .bg(color(bar.fill))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .title(" House Cup ")
                .borders(Borders::ALL),
        )
        .bar_width(style.bar_width)
        .bar_gap(style.bar_gap)
        .max(CHART_SCALE)
        .data(BarGroup::default().bars(&bars))
}

/// Draw the screen into the whole terminal viewport
pub fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    screen: &Screen,
    progress: f64,
    style: ChartStyle,
) -> io::Result<()> {
    terminal.draw(|f| {
        let area = f.size();
        match screen {
            Screen::Loading => {
                f.render_widget(
                    Paragraph::new(LOADING_MESSAGE).alignment(Alignment::Center),
                    area,
                );
            }
            Screen::Error(e) => {
                f.render_widget(
                    Paragraph::new(e.to_string())
                        .style(Style::default().fg(Color::Red))
                        .alignment(Alignment::Center),
                    area,
                );
            }
            Screen::Standings(frame) => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(3), Constraint::Length(1)])
                    .split(area);

                f.render_widget(chart(frame, progress, style), chunks[0]);
                f.render_widget(
                    Paragraph::new(frame.footer()).alignment(Alignment::Center),
                    chunks[1],
                );
            }
        }
    })?;
    Ok(())
}

/// Plain-text rendering, one line per house
pub fn plain(screen: &Screen) -> String {
    match screen {
        Screen::Loading => LOADING_MESSAGE.to_string(),
        Screen::Error(e) => e.to_string(),
        Screen::Standings(frame) => {
            let mut out = String::new();
            for bar in frame.bars() {
                let filled =
                    (bar.height_percent(frame.animated) / 100.0 * TABLE_BAR_WIDTH as f64).round() as usize;
                let behind = if bar.deficit > 0 {
                    format!("  (-{})", bar.deficit)
                } else {
                    String::new()
                };
                out.push_str(&format!(
                    "{:<12} {:<width$} {:>6} pts{}\n",
                    bar.house.name(),
                    "█".repeat(filled),
                    bar.total_points,
                    behind,
                    width = TABLE_BAR_WIDTH,
                ));
            }
            out.push_str(&frame.footer());
            out
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StandingsReport<'a> {
    #[serde(flatten)]
    view: &'a StandingsView,
    bars: Vec<Bar>,
}

/// JSON rendering of the derived view
pub fn json(frame: &StandingsFrame) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StandingsReport {
        view: &frame.view,
        bars: frame.bars(),
    })
}

/// JSON rendering of any screen; errors become `{"error": "..."}`
pub fn json_screen(screen: &Screen) -> serde_json::Result<String> {
    match screen {
        Screen::Standings(frame) => json(frame),
        Screen::Error(e) => serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() })),
        Screen::Loading => serde_json::to_string_pretty(&serde_json::json!({ "loading": true })),
    }
}
