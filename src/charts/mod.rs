//! Chart construction and rendering.
//!
//! Builders turn aggregated data into plain chart specifications
//! ([`BarChart`], [`DualAxisChart`]); the [`svg`] module draws them.

pub mod bar;
pub mod color;
pub mod line;
pub mod svg;
pub mod types;

pub use bar::station_bar_chart;
pub use line::weather_line_chart;
pub use types::{BarChart, ChartSize, DualAxisChart};
