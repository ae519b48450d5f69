//! Narrative text for each view.

use super::view::View;

/// One piece of page content, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Subheading(&'static str),
    Paragraph(&'static str),
    /// Bold lead-in line such as "Insights:".
    Label(&'static str),
    Bullets(&'static [&'static str]),
    /// Where the view's chart or gallery goes.
    Figure,
}

use Block::*;

const INTRO: &[Block] = &[
    Paragraph(
        "Welcome to the Citi Bike Distribution Analysis Dashboard. As lead analyst for New York \
         City's premier bike-sharing service, our aim is to analyze Citi Bike facility data to \
         uncover actionable insights. Our goal: address distribution challenges to ensure a \
         seamless user experience and bolster our reputation as eco-friendly transportation \
         leaders.",
    ),
    Paragraph(
        "Context: Citi Bike's popularity surged post-Covid-19, posing distribution challenges. \
         This dashboard aids in diagnosing issues and providing logistics recommendations.",
    ),
    Paragraph("Let's delve into the data and optimize our bike distribution strategy."),
];

const WEATHER: &[Block] = &[
    Paragraph(
        "This section examines the relationship between weekly bike rides and temperature trends \
         in New York City. By visualizing these factors together, we aim to understand how \
         weather impacts bike usage patterns and distribution strategies.",
    ),
    Paragraph("Key Factors:"),
    Paragraph("Bike Rides: Reflects user demand and usage patterns."),
    Paragraph("Temperature: Influences user preferences and biking activity."),
    Figure,
    Label("Insights:"),
    Bullets(&[
        "Bike rides and temperature rise in tandem from March to May, suggesting warmer weather \
         drives business growth.",
        "Business remains strong throughout the summer months, even as temperatures begin to \
         drop. However, this trend shifts in the fall.",
    ]),
    Label("Recommendation:"),
    Bullets(&[
        "Consider scaling back bike availability between November and April to align with \
         reduced demand during colder months.",
    ]),
];

const TOP_STATIONS: &[Block] = &[
    Paragraph(
        "This bar chart showcases the most popular bike stations in New York City based on trip \
         counts recorded in 2022. Understanding station popularity is crucial for optimizing our \
         logistics model.",
    ),
    Figure,
    Subheading("Insights"),
    Bullets(&[
        "Color intensity corresponds to trip counts, with darker colors indicating higher usage.",
        "For instance, West 21st Street and 6th Avenue recorded over 3000 trips, represented by \
         deep red.",
        "In contrast, 9th Avenue and West 22nd Street show lighter shades, indicating lower trip \
         numbers just over 2000.",
        "Majority of stations fall within the range of 2000 to 2500 trips, reflecting consistent \
         usage patterns. While the top 25% exhibit exceptional trip numbers, they are not \
         representative of typical trip volumes across most locations.",
    ]),
    Label("Recommendation:"),
    Bullets(&[
        "Consider implementing strategies to ensure bikes are always stocked at the most popular \
         stations to meet user demand effectively.",
    ]),
];

const MAP_SCREENSHOTS: &[Block] = &[
    Paragraph(
        "This page presents five screenshots from our interactive map for detailed analysis. \
         Leveraging geographical data allows us to establish direct correlations with locations, \
         enhancing our understanding and insights.",
    ),
    Figure,
    Subheading("Insights"),
    Bullets(&[
        "The 'Trips' image reveals top routes, aiding geographical analysis for understanding \
         popularity.",
        "'Starting Point' brightness indicates areas with higher rider density, suggesting \
         increased demand and sales opportunities.",
        "'Start to End | Arc' demonstrates routes leaving the downtown core, informing decisions \
         on station placement for optimal coverage and sales potential.",
    ]),
    Label("Recommendation:"),
    Bullets(&[
        "Consider utilizing similar visualizations to determine the optimal number of stations to \
         add along the waterfront.",
    ]),
];

const CONCLUSIONS: &[Block] = &[
    Label("Seasonal Demand Trends:"),
    Paragraph(
        "Bike trips peak in spring and summer, emphasizing seasonal demand patterns. Optimizing \
         distribution strategies is crucial for meeting fluctuating demand effectively.",
    ),
    Label("Station Usage Patterns:"),
    Paragraph(
        "Most stations exhibit consistent usage, with some outliers like West 21st Street and 6th \
         Avenue showing potential for increased bike availability.",
    ),
    Label("Geographical Analysis for Expansion:"),
    Paragraph(
        "Identifying popular routes and areas with high rider density informs expansion \
         opportunities. Brighter map areas indicate higher demand, guiding bike allocation and \
         potential sales growth.",
    ),
    Label("Strategic Insights for Business Development:"),
    Paragraph(
        "Leverage visualizations like 'Start to End | Arc' to identify high-demand locations and \
         plan distribution strategies accordingly.",
    ),
    Subheading("Recommendations"),
    Label("Optimize Bike Distribution:"),
    Bullets(&[
        "Implement dynamic redistribution strategies based on real-time data analytics to ensure \
         availability and prevent station overcrowding.",
        "Consider user incentives for returning bikes to less congested stations.",
    ]),
    Label("Expand Service Coverage:"),
    Bullets(&[
        "Focus on expanding service coverage in high-density areas and popular routes.",
        "Conduct market research for targeted expansion efforts to capture new user segments and \
         increase ridership.",
    ]),
];

/// Content blocks of `view`, in display order.
pub fn blocks(view: View) -> &'static [Block] {
    match view {
        View::Intro => INTRO,
        View::Weather => WEATHER,
        View::TopStations => TOP_STATIONS,
        View::MapScreenshots => MAP_SCREENSHOTS,
        View::Conclusions => CONCLUSIONS,
    }
}
