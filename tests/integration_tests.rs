use std::fs;
use std::path::{Path, PathBuf};

use citibike_dashboard::config::DashboardConfig;
use citibike_dashboard::dashboard::{rank_stations, render};
use citibike_dashboard::pages::View;
use citibike_dashboard::pages::gallery::SCREENSHOTS;
use citibike_dashboard::parser::read_trips;
use citibike_dashboard::stats::{StationTally, TOP_N};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_ranking_from_sample() {
    let trips = read_trips(&fixture("trips_sample.csv")).expect("Failed to read trips");
    let tally = StationTally::from_trips(&trips);

    assert_eq!(tally.dropped, 2);
    assert_eq!(tally.total_trips(), trips.len() - 2);
    assert_eq!(tally.counts.len(), 22);

    let top = rank_stations(&fixture("trips_sample.csv"), TOP_N).unwrap();

    assert_eq!(top.len(), TOP_N);
    assert_eq!(top[0].station_name, "W 21 St & 6 Ave");
    assert_eq!(top[0].trip_count, 12);
    // equal counts keep the order stations first appear in
    assert_eq!(top[3].station_name, "6 Ave & W 33 St");
    assert_eq!(top[4].station_name, "1 Ave & E 68 St");
    assert_eq!(top[3].trip_count, top[4].trip_count);
    assert_eq!(top[19].station_name, "9 Ave & W 22 St");
    assert!(top.windows(2).all(|w| w[0].trip_count >= w[1].trip_count));
    assert!(!top.iter().any(|c| c.station_name == "Wythe Ave & Metropolitan Ave"));
}

#[test]
fn test_full_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let assets = dir.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    for (i, shot) in SCREENSHOTS.iter().enumerate() {
        fs::write(assets.join(shot.file_name), [0x89, b'P', b'N', b'G', i as u8]).unwrap();
    }
    let map = assets.join("keplergl_map22.html");
    fs::write(&map, "<html><body>map</body></html>").unwrap();

    let config = DashboardConfig {
        trips_csv: fixture("trips_sample.csv"),
        weekly_csv: fixture("weekly.csv"),
        assets_dir: assets,
        map_html: Some(map),
        output_dir: dir.path().join("site"),
        ..Default::default()
    };

    let summary = render(&config, &View::ALL).expect("Failed to render dashboard");

    assert_eq!(summary.pages.len(), 6);
    assert_eq!(summary.assets.len(), 6);

    let site = &config.output_dir;
    let intro = fs::read_to_string(site.join("intro.html")).unwrap();
    assert_eq!(fs::read_to_string(site.join("index.html")).unwrap(), intro);

    let stations = fs::read_to_string(site.join("top-stations.html")).unwrap();
    assert_eq!(stations.matches(r#"class="bar""#).count(), TOP_N);
    assert!(stations.contains("W 21 St &amp; 6 Ave: 12"));

    let weather = fs::read_to_string(site.join("weather.html")).unwrap();
    assert_eq!(weather.matches("<polyline").count(), 2);

    for view in View::ALL {
        let page = fs::read_to_string(site.join(view.file_name())).unwrap();
        assert!(page.contains("Bike Trip Map of NYC"));
        assert_eq!(page.matches(" selected>").count(), 1);
    }

    let copied = fs::read(site.join("assets").join(SCREENSHOTS[4].file_name)).unwrap();
    assert_eq!(copied, vec![0x89, b'P', b'N', b'G', 4]);
}

#[test]
fn test_render_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig {
        trips_csv: fixture("trips_sample.csv"),
        weekly_csv: fixture("weekly.csv"),
        map_html: None,
        output_dir: dir.path().join("site"),
        ..Default::default()
    };

    render(&config, &[View::TopStations, View::Weather]).unwrap();
    let first = fs::read_to_string(config.output_dir.join("top-stations.html")).unwrap();
    render(&config, &[View::TopStations, View::Weather]).unwrap();
    let second = fs::read_to_string(config.output_dir.join("top-stations.html")).unwrap();

    assert_eq!(first, second);
}
