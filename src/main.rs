//! House Cup CLI
//!
//! Command-line interface for the house points standings:
//! - Animated standings chart
//! - Recent point changes
//! - Default config generation

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::tty::IsTty;
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use house_cup::config::{generate_default_config, Config};
use house_cup::display::{history, terminal, DisplayError, HousePoints, Screen};
use house_cup::query::{GraphQlClient, HistoryQuery, HousePointsSource};
use house_cup::standings::House;

/// Frame interval of the grow transition
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "house-cup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "House Cup standings from the house points GraphQL API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ~/.config/house-cup/config.toml, ./house-cup.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint, overrides the config file
    #[arg(long, global = true)]
    pub graphql_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Chart, global = true)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Chart,
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current standings (default)
    Standings {
        /// Draw the final chart without the entrance animation
        #[arg(long)]
        no_animation: bool,
    },

    /// List recent point changes
    History {
        /// Only show changes for one house
        #[arg(long)]
        house: Option<House>,
        /// Number of entries
        #[arg(short, long)]
        limit: Option<u32>,
        /// Entries to skip
        #[arg(short, long)]
        offset: Option<u32>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.graphql_url {
        config.api.graphql_url = url.clone();
    }

    house_cup::logging::init(&config.logging);
    tracing::debug!("House Cup v{}", env!("CARGO_PKG_VERSION"));

    let command = cli.command.unwrap_or(Commands::Standings {
        no_animation: false,
    });

    let failed = match command {
        Commands::Standings { no_animation } => {
            // Charts need a terminal; piped output gets the table
            let format = if cli.format == Format::Chart && !std::io::stdout().is_tty() {
                Format::Table
            } else {
                cli.format
            };
            let client = Arc::new(GraphQlClient::new(config.api.client_config())?);
            show_standings(client, &config, format, no_animation).await?
        }

        Commands::History {
            house,
            limit,
            offset,
        } => {
            let client = GraphQlClient::new(config.api.client_config())?;
            let defaults = config.display.history_query();
            let query = HistoryQuery {
                house,
                limit: limit.unwrap_or(defaults.limit),
                offset: offset.unwrap_or(defaults.offset),
            };
            show_history(&client, &query, cli.format).await?
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            false
        }
    };

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Render the standings display. Returns `true` when it ended in an error.
async fn show_standings<S: HousePointsSource + ?Sized>(
    client: Arc<S>,
    config: &Config,
    format: Format,
    no_animation: bool,
) -> anyhow::Result<bool> {
    let animate = format == Format::Chart && !no_animation;
    let (delay, transition) = if animate {
        (config.display.entrance_delay(), config.display.transition())
    } else {
        (Duration::ZERO, Duration::ZERO)
    };

    let mut display = HousePoints::mount(client, config.display.history_query(), delay);

    if format != Format::Chart {
        display.load().await;
        display.animation_started().await;

        let screen = display.screen();
        match format {
            Format::Json => println!("{}", terminal::json_screen(&screen)?),
            _ => println!("{}", terminal::plain(&screen)),
        }
        return Ok(matches!(screen, Screen::Error(_)));
    }

    let style = config.display.chart_style();
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut term = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(config.display.chart_height),
        },
    )?;

    terminal::draw(&mut term, &display.screen(), 0.0, style)?;
    display.load().await;
    terminal::draw(&mut term, &display.screen(), 0.0, style)?;

    if display.animation_started().await {
        let started = Instant::now();
        loop {
            let progress = terminal::grow_progress(started.elapsed(), transition);
            terminal::draw(&mut term, &display.screen(), progress, style)?;
            if progress >= 1.0 {
                break;
            }
            tokio::time::sleep(FRAME_INTERVAL).await;
        }
    }

    println!();
    let failed = matches!(display.screen(), Screen::Error(_));
    display.unmount();
    Ok(failed)
}

/// Print recent point changes. Returns `true` when the query failed.
async fn show_history<S: HousePointsSource + ?Sized>(
    client: &S,
    query: &HistoryQuery,
    format: Format,
) -> anyhow::Result<bool> {
    let entries = match client.points_history(query).await {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("{}", DisplayError::History(e.to_string()));
            return Ok(true);
        }
    };

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(false);
    }

    if entries.is_empty() {
        println!("No recent point changes");
    }
    for entry in &entries {
        for line in history::entry_lines(entry) {
            println!("{}", line);
        }
        println!();
    }
    Ok(false)
}
