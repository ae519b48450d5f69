//! CSV readers for the trip sample and the weekly weather series.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// One bicycle trip. Every other column of the trip file is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TripRecord {
    #[serde(default)]
    pub start_station_name: Option<String>,
}

impl TripRecord {
    pub fn new(station: &str) -> Self {
        Self {
            start_station_name: Some(station.to_string()),
        }
    }

    /// Station name as written, or `None` when the field is empty or blank.
    pub fn station(&self) -> Option<&str> {
        self.start_station_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

/// One row of the weekly rides/temperature file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyRow {
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
    #[serde(deserialize_with = "de_count")]
    pub bike_rides_weekly: u64,
    #[serde(rename = "avgTemp")]
    pub avg_temp: f64,
}

pub type WeeklySeries = Vec<WeeklyRow>;

/// Reads every trip record from `path`.
///
/// # Errors
///
/// Fails if the file is missing, has no `start_station_name` column, or a
/// row cannot be decoded.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_trips(path: &Path) -> Result<Vec<TripRecord>> {
    let mut rdr = open(path)?;

    let headers = rdr
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?;
    if !headers.iter().any(|h| h == "start_station_name") {
        bail!(
            "{} has no start_station_name column",
            path.display()
        );
    }

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let record: TripRecord =
            result.with_context(|| format!("Bad trip record {} in {}", i + 1, path.display()))?;
        rows.push(record);
    }

    debug!(rows = rows.len(), "Trip records loaded");
    Ok(rows)
}

/// Reads the weekly series from `path`, preserving file order.
///
/// # Errors
///
/// Fails if the file is missing or any row has a bad date or number.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_weekly(path: &Path) -> Result<WeeklySeries> {
    let mut rdr = open(path)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let row: WeeklyRow =
            result.with_context(|| format!("Bad weekly row {} in {}", i + 1, path.display()))?;
        rows.push(row);
    }

    debug!(rows = rows.len(), "Weekly rows loaded");
    Ok(rows)
}

fn open(path: &Path) -> Result<csv::Reader<File>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(csv::ReaderBuilder::new().from_reader(file))
}

fn de_date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
    let s = String::deserialize(d)?;
    parse_date(&s).map_err(serde::de::Error::custom)
}

fn de_count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    let s = String::deserialize(d)?;
    parse_count(&s).map_err(serde::de::Error::custom)
}

/// Accepts `YYYY-MM-DD` or a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    bail!("invalid date '{s}'")
}

/// Accepts integers and integral floats such as `1234.0`.
pub fn parse_count(s: &str) -> Result<u64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u64>() {
        return Ok(n);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => Ok(f as u64),
        _ => bail!("invalid ride count '{s}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_trips_ignores_other_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "trips.csv",
            ",ride_id,start_station_name,end_station_name\n\
             0,r1,W 21 St & 6 Ave,Broadway\n\
             1,r2,,Broadway\n\
             2,r3,9 Ave & W 22 St,\n",
        );

        let trips = read_trips(&path).unwrap();

        assert_eq!(trips.len(), 3);
        assert_eq!(trips[0].station(), Some("W 21 St & 6 Ave"));
        assert_eq!(trips[1].station(), None);
        assert_eq!(trips[2].station(), Some("9 Ave & W 22 St"));
    }

    #[test]
    fn test_read_trips_requires_station_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "trips.csv", "ride_id,end_station_name\nr1,Broadway\n");

        let err = read_trips(&path).unwrap_err();
        assert!(err.to_string().contains("start_station_name"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_trips(Path::new("/nonexistent/trips.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/trips.csv"));
    }

    #[test]
    fn test_blank_station_is_null() {
        let record = TripRecord {
            start_station_name: Some("   ".to_string()),
        };
        assert_eq!(record.station(), None);
    }

    #[test]
    fn test_station_keeps_surrounding_whitespace() {
        assert_eq!(TripRecord::new(" A").station(), Some(" A"));
        assert_eq!(TripRecord::new("A ").station(), Some("A "));
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "trips.csv",
            ",start_station_name,end_station_name\n\
             0,W 21 St & 6 Ave,Broadway\n\
             1,9 Ave & W 22 St\n",
        );

        let err = read_trips(&path).unwrap_err();
        assert!(err.to_string().contains("Bad trip record 2"));
    }

    #[test]
    fn test_read_weekly() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "weekly.csv",
            "date,bike_rides_weekly,avgTemp\n\
             2022-01-02,1200,3.5\n\
             2022-01-09 00:00:00,1350.0,-1.25\n",
        );

        let weekly = read_weekly(&path).unwrap();

        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].date, NaiveDate::from_ymd_opt(2022, 1, 2).unwrap());
        assert_eq!(weekly[1].date, NaiveDate::from_ymd_opt(2022, 1, 9).unwrap());
        assert_eq!(weekly[1].bike_rides_weekly, 1350);
        assert_eq!(weekly[1].avg_temp, -1.25);
    }

    #[test]
    fn test_read_weekly_rejects_bad_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "weekly.csv",
            "date,bike_rides_weekly,avgTemp\nlast week,1200,3.5\n",
        );

        let err = read_weekly(&path).unwrap_err();
        assert!(err.to_string().contains("Bad weekly row 1"));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42").unwrap(), 42);
        assert_eq!(parse_count("42.0").unwrap(), 42);
        assert!(parse_count("42.5").is_err());
        assert!(parse_count("-1").is_err());
    }
}
