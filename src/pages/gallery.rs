/// A screenshot of the interactive trip map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapScreenshot {
    pub file_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SCREENSHOTS: [MapScreenshot; 5] = [
    MapScreenshot {
        file_name: "kepler.gl.startpoint.png",
        title: "Starting Point",
        description: "Displays starting positions of various routes.",
    },
    MapScreenshot {
        file_name: "kepler.gl.startend.arc.png",
        title: "Start to End | Arc",
        description: "Illustrates routes with arcs connecting start and end points.",
    },
    MapScreenshot {
        file_name: "kepler.gl.endpoint.png",
        title: "Ending Point",
        description: "Shows ending positions of different routes.",
    },
    MapScreenshot {
        file_name: "kepler.gl.startend.line.png",
        title: "Start to End | Line",
        description: "Represents routes with lines connecting start and end points.",
    },
    MapScreenshot {
        file_name: "kepler.gl.tripsfilter.png",
        title: "Trips",
        description: "Highlights popular routes filtered through the Trips feature.",
    },
];

/// Number of screenshots in the left column.
const LEFT_COLUMN: usize = 2;

/// Splits the screenshots into the left and right gallery columns.
pub fn columns() -> (&'static [MapScreenshot], &'static [MapScreenshot]) {
    SCREENSHOTS.split_at(LEFT_COLUMN)
}
