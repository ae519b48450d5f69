//! CLI entry point for the Citi Bike dashboard.
//!
//! Provides subcommands for rendering the dashboard pages, exporting the
//! station ranking, and listing the available views.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use citibike_dashboard::config::DashboardConfig;
use citibike_dashboard::dashboard::{rank_stations, render};
use citibike_dashboard::output::{print_table, write_csv, write_json, write_views};
use citibike_dashboard::pages::View;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "citibike_dashboard")]
#[command(about = "Render the Citi Bike distribution dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input settings shared by every data-reading subcommand.
#[derive(Args)]
struct Inputs {
    /// JSON config file; flags and DASHBOARD_* variables override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Trip records CSV (needs a start_station_name column)
    #[arg(long, value_name = "FILE")]
    trips: Option<PathBuf>,

    /// Weekly CSV with date, bike_rides_weekly and avgTemp columns
    #[arg(long, value_name = "FILE")]
    weekly: Option<PathBuf>,

    /// Number of stations to rank
    #[arg(short = 'n', long)]
    top: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard pages into a directory
    Render {
        /// Render only this view (default: all five)
        #[arg(short, long, value_enum)]
        view: Option<View>,

        /// Directory to write pages and assets to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Directory holding the map screenshots
        #[arg(long)]
        assets_dir: Option<PathBuf>,

        /// Exported interactive map to embed on every page
        #[arg(long, conflicts_with = "no_map")]
        map: Option<PathBuf>,

        /// Do not embed the interactive map
        #[arg(long, default_value_t = false)]
        no_map: bool,

        #[command(flatten)]
        inputs: Inputs,
    },
    /// Rank start stations by trip count
    TopStations {
        #[command(flatten)]
        inputs: Inputs,

        /// Write the ranking to this CSV file
        #[arg(long, conflicts_with = "json")]
        csv: Option<PathBuf>,

        /// Print the ranking as JSON on stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print each view's slug and selector label on stdout
    Views,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/citibike_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("citibike_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            view,
            output_dir,
            assets_dir,
            map,
            no_map,
            inputs,
        } => {
            let mut config = resolve_config(&inputs)?;
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if let Some(dir) = assets_dir {
                config.assets_dir = dir;
            }
            if no_map {
                config.map_html = None;
            } else if let Some(map) = map {
                config.map_html = Some(map);
            }

            let views = match view {
                Some(v) => vec![v],
                None => View::ALL.to_vec(),
            };
            let summary = render(&config, &views)?;

            if let Some(index) = summary.pages.last() {
                info!(index = %index.display(), "Open the index page in a browser");
            }
        }
        Commands::TopStations { inputs, csv, json } => {
            let config = resolve_config(&inputs)?;
            let top = rank_stations(&config.trips_csv, config.top_n)?;

            if let Some(path) = csv {
                write_csv(&path, &top)?;
                info!(path = %path.display(), stations = top.len(), "Ranking written");
            } else if json {
                write_json(std::io::stdout().lock(), &top)?;
            } else {
                print_table(&top);
            }
        }
        Commands::Views => {
            write_views(std::io::stdout().lock(), &View::ALL)?;
        }
    }

    Ok(())
}

/// Builds the effective config: file (or defaults), then environment, then flags.
fn resolve_config(inputs: &Inputs) -> Result<DashboardConfig> {
    let mut config = match &inputs.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    config.apply_env();

    if let Some(path) = &inputs.trips {
        config.trips_csv = path.clone();
    }
    if let Some(path) = &inputs.weekly {
        config.weekly_csv = path.clone();
    }
    if let Some(n) = inputs.top {
        config.top_n = n;
    }

    config.validate()?;
    debug!(?config, "Config resolved");
    Ok(config)
}
