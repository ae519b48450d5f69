use std::collections::HashMap;

use serde::Serialize;

use crate::parser::TripRecord;

/// Number of stations shown on the ranking chart.
pub const TOP_N: usize = 20;

/// Trips started at one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationCount {
    pub station_name: String,
    pub trip_count: usize,
}

/// Per-station trip counts in order of first appearance, plus the number of
/// records dropped for having no station name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StationTally {
    pub counts: Vec<StationCount>,
    pub dropped: usize,
}

/// Busiest stations, descending by trip count.
pub type TopStations = Vec<StationCount>;

impl StationTally {
    pub fn from_trips(trips: &[TripRecord]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut s = StationTally::default();

        for trip in trips {
            let Some(name) = trip.station() else {
                s.dropped += 1;
                continue;
            };

            match index.get(name) {
                Some(&i) => s.counts[i].trip_count += 1,
                None => {
                    index.insert(name, s.counts.len());
                    s.counts.push(StationCount {
                        station_name: name.to_string(),
                        trip_count: 1,
                    });
                }
            }
        }

        s
    }

    /// Sum of all station counts, i.e. the number of trips that were kept.
    pub fn total_trips(&self) -> usize {
        self.counts.iter().map(|c| c.trip_count).sum()
    }

    /// The `n` busiest stations. `sort_by` is stable, so equal counts keep
    /// first-appearance order.
    pub fn top(&self, n: usize) -> TopStations {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.trip_count.cmp(&a.trip_count));
        ranked.truncate(n);
        ranked
    }
}

/// Groups `trips` by start station and returns the [`TOP_N`] busiest.
pub fn top_stations(trips: &[TripRecord]) -> TopStations {
    StationTally::from_trips(trips).top(TOP_N)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trips(names: &[&str]) -> Vec<TripRecord> {
        names.iter().map(|n| TripRecord::new(n)).collect()
    }

    fn count(name: &str, n: usize) -> StationCount {
        StationCount {
            station_name: name.to_string(),
            trip_count: n,
        }
    }

    #[test]
    fn test_group_and_rank() {
        let input = trips(&["A", "A", "B", "C", "C", "C"]);
        let tally = StationTally::from_trips(&input);

        assert_eq!(tally.counts, vec![count("A", 2), count("B", 1), count("C", 3)]);
        assert_eq!(
            top_stations(&input),
            vec![count("C", 3), count("A", 2), count("B", 1)]
        );
    }

    #[test]
    fn test_empty_input() {
        let tally = StationTally::from_trips(&[]);
        assert!(tally.counts.is_empty());
        assert_eq!(tally.dropped, 0);
        assert!(top_stations(&[]).is_empty());
    }

    #[test]
    fn test_null_stations_dropped() {
        let mut input = trips(&["A", "B", "A"]);
        input.push(TripRecord::default());
        input.push(TripRecord {
            start_station_name: Some(String::new()),
        });

        let tally = StationTally::from_trips(&input);

        assert_eq!(tally.dropped, 2);
        assert_eq!(tally.total_trips(), 3);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let input = trips(&["Z", "Y", "X", "Y", "Z", "X", "W"]);
        let top = top_stations(&input);

        let names: Vec<_> = top.iter().map(|c| c.station_name.as_str()).collect();
        assert_eq!(names, vec!["Z", "Y", "X", "W"]);
    }

    #[test]
    fn test_whitespace_variants_are_distinct_stations() {
        let tally = StationTally::from_trips(&trips(&["A", " A", "A ", "A"]));

        assert_eq!(
            tally.counts,
            vec![count("A", 2), count(" A", 1), count("A ", 1)]
        );
        assert_eq!(tally.dropped, 0);
    }

    #[test]
    fn test_truncates_to_twenty() {
        let mut names = Vec::new();
        for i in 0..30 {
            for _ in 0..=i {
                names.push(format!("station {i}"));
            }
        }
        let input: Vec<_> = names.iter().map(|n| TripRecord::new(n)).collect();

        let top = top_stations(&input);

        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0], count("station 29", 30));
        assert_eq!(top[19], count("station 10", 11));
        assert!(top.windows(2).all(|w| w[0].trip_count >= w[1].trip_count));
    }

    #[test]
    fn test_counts_sum_to_kept_records() {
        let mut input = trips(&["A", "B", "C", "A", "D", "B", "A"]);
        input.push(TripRecord::default());

        let tally = StationTally::from_trips(&input);
        let kept = input.iter().filter(|t| t.station().is_some()).count();

        assert_eq!(tally.total_trips(), kept);
        assert!(tally.counts.iter().all(|c| c.trip_count >= 1));
    }

    #[test]
    fn test_idempotent() {
        let input = trips(&["B", "A", "C", "A", "B", "C", "D"]);
        assert_eq!(top_stations(&input), top_stations(&input));
    }
}
