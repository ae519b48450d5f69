use crate::charts::color;
use crate::charts::types::{Bar, BarChart, ChartSize};
use crate::stats::StationCount;
use crate::utility::min_max;

/// Builds the station ranking chart. Bar color scales linearly with the trip
/// count between the smallest and largest count shown.
pub fn station_bar_chart(top: &[StationCount], size: ChartSize) -> BarChart {
    let (lo, hi) = min_max(top.iter().map(|c| c.trip_count as f64)).unwrap_or((0.0, 0.0));

    let bars = top
        .iter()
        .map(|c| {
            let value = c.trip_count as f64;
            Bar {
                label: c.station_name.clone(),
                value,
                color: color::scale(value, lo, hi),
            }
        })
        .collect();

    BarChart {
        title: None,
        x_title: "Start Stations".to_string(),
        y_title: "Sum of Trips".to_string(),
        size,
        tick_angle: -25.0,
        bars,
    }
}
