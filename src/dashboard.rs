//! Renders the dashboard pages into an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::charts::{self, svg};
use crate::config::DashboardConfig;
use crate::pages::gallery::SCREENSHOTS;
use crate::pages::{Figure, Page, View};
use crate::parser::{read_trips, read_weekly};
use crate::stats::{StationTally, TopStations};

/// Subdirectory of the output directory that receives copied assets.
pub const ASSET_DIR: &str = "assets";

/// Files written by one render pass.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub pages: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
}

/// Reads the trip file and returns its `n` busiest start stations.
///
/// Records without a station name are left out and reported as a warning.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn rank_stations(path: &Path, n: usize) -> Result<TopStations> {
    let trips = read_trips(path)?;
    let tally = StationTally::from_trips(&trips);

    if tally.dropped > 0 {
        warn!(
            dropped = tally.dropped,
            kept = tally.total_trips(),
            "Trip records without a start station were excluded"
        );
    }
    debug!(stations = tally.counts.len(), "Stations tallied");

    Ok(tally.top(n))
}

/// Writes one page per view in `views` plus `index.html`, a copy of the
/// first page. Any missing input or asset aborts the whole render.
#[tracing::instrument(skip(config), fields(output_dir = %config.output_dir.display()))]
pub fn render(config: &DashboardConfig, views: &[View]) -> Result<RenderSummary> {
    config.validate()?;
    if views.is_empty() {
        bail!("no views to render");
    }

    let out_dir = &config.output_dir;
    let asset_out = out_dir.join(ASSET_DIR);
    fs::create_dir_all(&asset_out)
        .with_context(|| format!("Failed to create {}", asset_out.display()))?;

    let mut summary = RenderSummary::default();

    let map_src = match &config.map_html {
        Some(map) => {
            let copied = copy_asset(map, &asset_out)?;
            let src = format!("{ASSET_DIR}/{}", file_name(&copied)?);
            summary.assets.push(copied);
            Some(src)
        }
        None => None,
    };

    if views.contains(&View::MapScreenshots) {
        for shot in &SCREENSHOTS {
            let copied = copy_asset(&config.assets_dir.join(shot.file_name), &asset_out)?;
            summary.assets.push(copied);
        }
    }

    let mut index = None;
    for &view in views {
        let page = Page {
            view,
            figure: build_figure(config, view)?,
            map_src: map_src.as_deref(),
        };
        let html = page.render()?;

        let path = out_dir.join(view.file_name());
        fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(view = view.slug(), path = %path.display(), "Page written");

        if index.is_none() {
            index = Some(html);
        }
        summary.pages.push(path);
    }

    if let Some(html) = index {
        let path = out_dir.join("index.html");
        fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        summary.pages.push(path);
    }

    info!(
        pages = summary.pages.len(),
        assets = summary.assets.len(),
        "Dashboard rendered"
    );
    Ok(summary)
}

/// Loads only the data `view` needs and renders its figure.
fn build_figure(config: &DashboardConfig, view: View) -> Result<Figure> {
    let figure = match view {
        View::TopStations => {
            let top = rank_stations(&config.trips_csv, config.top_n)?;
            let chart = charts::station_bar_chart(&top, config.chart);
            Figure::Svg(svg::render_bar_chart(&chart)?)
        }
        View::Weather => {
            let weekly = read_weekly(&config.weekly_csv)?;
            let chart = charts::weather_line_chart(&weekly, config.chart);
            Figure::Svg(svg::render_dual_axis_chart(&chart)?)
        }
        View::MapScreenshots => Figure::Gallery {
            asset_dir: ASSET_DIR.to_string(),
        },
        View::Intro | View::Conclusions => Figure::None,
    };
    Ok(figure)
}

/// Copies `src` into `dir` unchanged and returns the new path.
///
/// When `src` already is the destination file it is left alone, since
/// copying a file onto itself truncates it.
fn copy_asset(src: &Path, dir: &Path) -> Result<PathBuf> {
    let dest = dir.join(file_name(src)?);
    let source = fs::canonicalize(src)
        .with_context(|| format!("Failed to copy asset {}", src.display()))?;

    if dest.exists() && fs::canonicalize(&dest)? == source {
        debug!(path = %dest.display(), "Asset already in place");
        return Ok(dest);
    }

    fs::copy(&source, &dest)
        .with_context(|| format!("Failed to copy asset {}", src.display()))?;
    Ok(dest)
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))
}
