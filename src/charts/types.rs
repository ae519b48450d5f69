//! Chart specifications, independent of how they are drawn.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Pixel size of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
        }
    }
}

/// One bar of a ranked bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

/// Vertical bar chart with categorical x axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: Option<String>,
    pub x_title: String,
    pub y_title: String,
    pub size: ChartSize,
    /// Rotation of the x tick labels in degrees; negative tilts them up.
    pub tick_angle: f64,
    pub bars: Vec<Bar>,
}

/// Which y axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    pub axis: Axis,
    pub points: Vec<Point>,
}

/// Line chart over a shared date axis with independent left and right y axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualAxisChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub y2_title: Option<String>,
    pub size: ChartSize,
    pub series: Vec<Series>,
}

impl DualAxisChart {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// Series plotted against `axis`.
    pub fn on(&self, axis: Axis) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.axis == axis)
    }
}
