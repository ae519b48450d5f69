use std::fmt;

use clap::ValueEnum;

/// The five dashboard views reachable from the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum View {
    Intro,
    Weather,
    TopStations,
    MapScreenshots,
    Conclusions,
}

impl View {
    /// Selector order.
    pub const ALL: [View; 5] = [
        View::Intro,
        View::Weather,
        View::TopStations,
        View::MapScreenshots,
        View::Conclusions,
    ];

    /// Text shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            View::Intro => "Intro",
            View::Weather => "Exploring Weekly Bike Rides and Temperature Trends in New York City",
            View::TopStations => "Top 20 Bike Stations in NYC (2022)",
            View::MapScreenshots => "Exploring Geographic Insights Through Interactive Map Screenshots",
            View::Conclusions => "Conclusions",
        }
    }

    /// Heading at the top of the page.
    pub fn title(self) -> &'static str {
        match self {
            View::Intro => {
                "2022 Citi Bike Data Analysis: Enhancing New York City Distribution Strategy"
            }
            View::Weather => "Exploring Weekly Bike Rides and Temperature Trends in New York City",
            View::TopStations => "Top 20 Bike Stations in New York City (2022)",
            View::MapScreenshots => "Exploring Geographic Insights Through Interactive Map Screenshots",
            View::Conclusions => "Key Insights from the Visualizations",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            View::Intro => "intro",
            View::Weather => "weather",
            View::TopStations => "top-stations",
            View::MapScreenshots => "map-screenshots",
            View::Conclusions => "conclusions",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.html", self.slug())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
