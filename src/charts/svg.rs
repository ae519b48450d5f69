//! SVG drawing of chart specifications.

use std::fmt::Write;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::charts::types::{Axis, BarChart, DualAxisChart, Series};
use crate::utility::{escape, format_tick, min_max, nice_ticks};

const TICKS: usize = 5;
const FONT: &str = "font-family=\"Open Sans, Helvetica, Arial, sans-serif\"";

/// Plot area inside the chart margins.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn new(width: f64, height: f64, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            width: (width - left - right).max(1.0),
            height: (height - top - bottom).max(1.0),
        }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Linear map from a tick range onto the vertical extent of a frame.
#[derive(Debug, Clone)]
struct YScale {
    ticks: Vec<f64>,
    lo: f64,
    hi: f64,
}

impl YScale {
    fn new(ticks: Vec<f64>) -> Self {
        let lo = ticks.first().copied().unwrap_or(0.0);
        let hi = ticks.last().copied().unwrap_or(1.0);
        Self { ticks, lo, hi }
    }

    fn y(&self, frame: &Frame, v: f64) -> f64 {
        if self.hi <= self.lo {
            return frame.bottom() - frame.height / 2.0;
        }
        frame.bottom() - (v - self.lo) / (self.hi - self.lo) * frame.height
    }
}

/// Renders a bar chart. An empty chart still gets its axes and titles.
pub fn render_bar_chart(chart: &BarChart) -> Result<String> {
    let (w, h) = (chart.size.width as f64, chart.size.height as f64);
    let frame = Frame::new(w, h, 80.0, 30.0, 60.0, 180.0);
    let mut out = String::new();

    write_header(&mut out, w, h, "bar-chart")?;
    if let Some(title) = &chart.title {
        write_title(&mut out, w, title)?;
    }

    let max = chart.bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let scale = YScale::new(nice_ticks(0.0, max.max(1.0), TICKS));
    write_y_axis(&mut out, &frame, &scale, frame.left, "end")?;
    write_frame_lines(&mut out, &frame)?;

    if !chart.bars.is_empty() {
        let band = frame.width / chart.bars.len() as f64;
        let bar_w = band * 0.8;

        for (i, bar) in chart.bars.iter().enumerate() {
            let x = frame.left + band * i as f64 + (band - bar_w) / 2.0;
            let y = scale.y(&frame, bar.value);
            let label = escape(&bar.label);
            writeln!(
                out,
                r#"<rect class="bar" x="{x:.2}" y="{y:.2}" width="{bar_w:.2}" height="{bh:.2}" fill="{fill}"><title>{label}: {value}</title></rect>"#,
                bh = (frame.bottom() - y).max(0.0),
                fill = bar.color,
                value = format_tick(bar.value),
            )?;

            let cx = frame.left + band * (i as f64 + 0.5);
            writeln!(
                out,
                r#"<text class="tick" transform="translate({cx:.2},{ty:.2}) rotate({angle})" text-anchor="end">{label}</text>"#,
                ty = frame.bottom() + 14.0,
                angle = chart.tick_angle,
            )?;
        }
    }

    write_x_title(&mut out, &frame, h, &chart.x_title)?;
    write_y_title(&mut out, &frame, frame.left - 60.0, &chart.y_title)?;
    write_footer(&mut out)?;
    Ok(out)
}

/// Renders a dual-axis line chart with a legend. The x axis is a calendar
/// axis with a tick at the start of each month.
pub fn render_dual_axis_chart(chart: &DualAxisChart) -> Result<String> {
    let (w, h) = (chart.size.width as f64, chart.size.height as f64);
    let frame = Frame::new(w, h, 90.0, 90.0, 70.0, 70.0);
    let mut out = String::new();

    write_header(&mut out, w, h, "line-chart")?;
    write_title(&mut out, w, &chart.title)?;

    let primary = axis_scale(chart, Axis::Primary);
    let secondary = axis_scale(chart, Axis::Secondary);
    write_y_axis(&mut out, &frame, &primary, frame.left, "end")?;
    write_y_axis_labels(&mut out, &frame, &secondary, frame.right() + 8.0, "start")?;
    write_frame_lines(&mut out, &frame)?;

    let days = min_max(
        chart
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.date.num_days_from_ce() as f64),
    );

    if let Some((d0, d1)) = days {
        let x = |date: NaiveDate| {
            if d1 <= d0 {
                frame.left + frame.width / 2.0
            } else {
                frame.left + (date.num_days_from_ce() as f64 - d0) / (d1 - d0) * frame.width
            }
        };

        let first = NaiveDate::from_num_days_from_ce_opt(d0 as i32);
        let last = NaiveDate::from_num_days_from_ce_opt(d1 as i32);
        if let (Some(first), Some(last)) = (first, last) {
            for month in month_ticks(first, last) {
                writeln!(
                    out,
                    r#"<text class="tick" x="{mx:.2}" y="{my:.2}" text-anchor="middle">{label}</text>"#,
                    mx = x(month),
                    my = frame.bottom() + 18.0,
                    label = month.format("%b %Y"),
                )?;
            }
        }

        for series in &chart.series {
            let scale = match series.axis {
                Axis::Primary => &primary,
                Axis::Secondary => &secondary,
            };
            write_series(&mut out, &frame, scale, series, &x)?;
        }
    }

    write_legend(&mut out, &frame, &chart.series)?;
    write_x_title(&mut out, &frame, h, &chart.x_title)?;
    write_y_title(&mut out, &frame, frame.left - 70.0, &chart.y_title)?;
    if let Some(title) = &chart.y2_title {
        write_y_title(&mut out, &frame, frame.right() + 75.0, title)?;
    }
    write_footer(&mut out)?;
    Ok(out)
}

fn axis_scale(chart: &DualAxisChart, axis: Axis) -> YScale {
    let range = min_max(chart.on(axis).flat_map(|s| s.points.iter()).map(|p| p.value));
    let (lo, hi) = range.unwrap_or((0.0, 1.0));
    YScale::new(nice_ticks(lo, hi, TICKS))
}

/// First day of every month in `[first, last]`, thinned to at most twelve.
fn month_ticks(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let (mut year, mut month) = (first.year(), first.month());
    if first.day() != 1 {
        (year, month) = next_month(year, month);
    }

    while let Some(d) = NaiveDate::from_ymd_opt(year, month, 1) {
        if d > last {
            break;
        }
        months.push(d);
        (year, month) = next_month(year, month);
    }

    let stride = months.len().div_ceil(12).max(1);
    months.into_iter().step_by(stride).collect()
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn write_series<F: Fn(NaiveDate) -> f64>(
    out: &mut String,
    frame: &Frame,
    scale: &YScale,
    series: &Series,
    x: &F,
) -> Result<()> {
    // A non-finite value leaves a gap: the line is split into runs around it.
    for run in series.points.split(|p| !p.value.is_finite()) {
        if run.len() < 2 {
            continue;
        }
        let coords: Vec<String> = run
            .iter()
            .map(|p| format!("{:.2},{:.2}", x(p.date), scale.y(frame, p.value)))
            .collect();

        writeln!(
            out,
            r#"<polyline class="series" points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            coords.join(" "),
            series.color,
        )?;
    }

    let name = escape(&series.name);
    for p in series.points.iter().filter(|p| p.value.is_finite()) {
        writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{}"><title>{name} {}: {}</title></circle>"#,
            x(p.date),
            scale.y(frame, p.value),
            series.color,
            p.date.format("%Y-%m-%d"),
            format_tick((p.value * 10.0).round() / 10.0),
        )?;
    }
    Ok(())
}

fn write_header(out: &mut String, width: f64, height: f64, class: &str) -> Result<()> {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" width="{width}" height="{height}" viewBox="0 0 {width} {height}" {FONT}>"#
    )?;
    writeln!(out, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    writeln!(
        out,
        r##"<style>
    .tick {{ font-size: 12px; fill: #444444; }}
    .axis-title {{ font-size: 14px; fill: #2a3f5f; }}
    .chart-title {{ font-size: 17px; fill: #2a3f5f; }}
    .grid {{ stroke: #e5ecf6; stroke-width: 1; }}
    .axis {{ stroke: #2a3f5f; stroke-width: 1; }}
</style>"##
    )?;
    Ok(())
}

fn write_title(out: &mut String, width: f64, title: &str) -> Result<()> {
    writeln!(
        out,
        r#"<text class="chart-title" x="{:.2}" y="32" text-anchor="middle">{}</text>"#,
        width / 2.0,
        escape(title),
    )?;
    Ok(())
}

fn write_y_axis(out: &mut String, frame: &Frame, scale: &YScale, x: f64, anchor: &str) -> Result<()> {
    for &t in &scale.ticks {
        let y = scale.y(frame, t);
        writeln!(
            out,
            r#"<line class="grid" x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}"/>"#,
            frame.left,
            frame.right(),
        )?;
    }
    write_y_axis_labels(out, frame, scale, x - 8.0, anchor)
}

fn write_y_axis_labels(out: &mut String, frame: &Frame, scale: &YScale, x: f64, anchor: &str) -> Result<()> {
    for &t in &scale.ticks {
        writeln!(
            out,
            r#"<text class="tick" x="{x:.2}" y="{:.2}" text-anchor="{anchor}">{}</text>"#,
            scale.y(frame, t) + 4.0,
            format_tick(t),
        )?;
    }
    Ok(())
}

fn write_frame_lines(out: &mut String, frame: &Frame) -> Result<()> {
    writeln!(
        out,
        r#"<line class="axis" x1="{l:.2}" y1="{b:.2}" x2="{r:.2}" y2="{b:.2}"/>"#,
        l = frame.left,
        r = frame.right(),
        b = frame.bottom(),
    )?;
    writeln!(
        out,
        r#"<line class="axis" x1="{l:.2}" y1="{t:.2}" x2="{l:.2}" y2="{b:.2}"/>"#,
        l = frame.left,
        t = frame.top,
        b = frame.bottom(),
    )?;
    Ok(())
}

fn write_x_title(out: &mut String, frame: &Frame, height: f64, title: &str) -> Result<()> {
    writeln!(
        out,
        r#"<text class="axis-title" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
        frame.left + frame.width / 2.0,
        height - 12.0,
        escape(title),
    )?;
    Ok(())
}

fn write_y_title(out: &mut String, frame: &Frame, x: f64, title: &str) -> Result<()> {
    let y = frame.top + frame.height / 2.0;
    writeln!(
        out,
        r#"<text class="axis-title" transform="translate({x:.2},{y:.2}) rotate(-90)" text-anchor="middle">{}</text>"#,
        escape(title),
    )?;
    Ok(())
}

fn write_legend(out: &mut String, frame: &Frame, series: &[Series]) -> Result<()> {
    for (i, s) in series.iter().enumerate() {
        let y = frame.top - 40.0 + 18.0 * i as f64;
        let x = frame.right() - 170.0;
        writeln!(
            out,
            r#"<line x1="{x:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="2"/>"#,
            x + 24.0,
            s.color,
        )?;
        writeln!(
            out,
            r#"<text class="tick" x="{:.2}" y="{:.2}">{}</text>"#,
            x + 30.0,
            y + 4.0,
            escape(&s.name),
        )?;
    }
    Ok(())
}

fn write_footer(out: &mut String) -> Result<()> {
    writeln!(out, "</svg>")?;
    Ok(())
}
