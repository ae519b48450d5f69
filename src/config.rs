//! Dashboard settings.
//!
//! Resolved in increasing priority from built-in defaults, an optional JSON
//! file, `DASHBOARD_*` environment variables and finally command-line flags.
//!
//! ```json
//! {
//!   "trips_csv": "data/newyork_data_sample.csv",
//!   "weekly_csv": "data/newyork_data_weekly.csv",
//!   "assets_dir": "assets",
//!   "map_html": "assets/keplergl_map22.html",
//!   "output_dir": "dashboard",
//!   "top_n": 20,
//!   "chart": { "width": 900, "height": 600 }
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::charts::ChartSize;
use crate::stats::TOP_N;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub trips_csv: PathBuf,
    pub weekly_csv: PathBuf,
    /// Directory holding the map screenshots.
    pub assets_dir: PathBuf,
    /// Exported interactive map embedded at the bottom of every page.
    pub map_html: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub top_n: usize,
    pub chart: ChartSize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            trips_csv: PathBuf::from("data/newyork_data_sample.csv"),
            weekly_csv: PathBuf::from("data/newyork_data_weekly.csv"),
            assets_dir: PathBuf::from("assets"),
            map_html: Some(PathBuf::from("assets/keplergl_map22.html")),
            output_dir: PathBuf::from("dashboard"),
            top_n: TOP_N,
            chart: ChartSize::default(),
        }
    }
}

impl DashboardConfig {
    /// Loads the config from a JSON file at `path`. Missing keys take their
    /// default values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Applies `DASHBOARD_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. An empty `DASHBOARD_MAP_HTML`
    /// disables the embedded map.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("DASHBOARD_TRIPS_CSV") {
            self.trips_csv = PathBuf::from(v);
        }
        if let Some(v) = lookup("DASHBOARD_WEEKLY_CSV") {
            self.weekly_csv = PathBuf::from(v);
        }
        if let Some(v) = lookup("DASHBOARD_ASSETS_DIR") {
            self.assets_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("DASHBOARD_MAP_HTML") {
            self.map_html = (!v.is_empty()).then(|| PathBuf::from(v));
        }
        if let Some(v) = lookup("DASHBOARD_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(v);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            bail!("top_n must be at least 1");
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            bail!(
                "chart size must be positive, got {}x{}",
                self.chart.width,
                self.chart.height
            );
        }
        Ok(())
    }
}
