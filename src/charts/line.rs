use crate::charts::color::{BLUE, RED};
use crate::charts::types::{Axis, ChartSize, DualAxisChart, Point, Series};
use crate::parser::WeeklyRow;

/// Builds the weekly rides vs. temperature chart. Rides go on the left axis,
/// temperature on the right; both keep the file's row order.
pub fn weather_line_chart(weekly: &[WeeklyRow], size: ChartSize) -> DualAxisChart {
    let rides = weekly
        .iter()
        .map(|r| Point {
            date: r.date,
            value: r.bike_rides_weekly as f64,
        })
        .collect();

    let temps = weekly
        .iter()
        .map(|r| Point {
            date: r.date,
            value: r.avg_temp,
        })
        .collect();

    DualAxisChart {
        title: "Weekly Bike Rides and Temperature Trends".to_string(),
        x_title: "Month".to_string(),
        y_title: "Average Bike Ride Count".to_string(),
        y2_title: None,
        size,
        series: vec![
            Series {
                name: "Weekly Bike Rides".to_string(),
                color: BLUE,
                axis: Axis::Primary,
                points: rides,
            },
            Series {
                name: "Weekly Temperature".to_string(),
                color: RED,
                axis: Axis::Secondary,
                points: temps,
            },
        ],
    }
}
