//! HTML pages, rendered from the askama templates under `templates/`.

use anyhow::Result;
use askama::Template;

use super::content::{Block, blocks};
use super::gallery::{self, MapScreenshot};
use super::view::View;

pub const SITE_TITLE: &str = "Citi Bike Dashboard";
const SELECTOR_PROMPT: &str = "Select an aspect of the analysis:";
const MAP_HEADING: &str = "Bike Trip Map of NYC";
const MAP_HEIGHT: u32 = 1000;

/// What fills the [`Block::Figure`] slot of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    None,
    /// Inline SVG markup.
    Svg(String),
    /// The two-column screenshot gallery, with images under `asset_dir`.
    Gallery { asset_dir: String },
}

/// Everything needed to write one page.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub view: View,
    pub figure: Figure,
    /// Relative URL of the embedded interactive map, if any.
    pub map_src: Option<&'a str>,
}

struct SelectorOption {
    href: String,
    label: &'static str,
    selected: bool,
}

struct MapEmbed<'a> {
    src: &'a str,
    heading: &'static str,
    height: u32,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    site_title: &'static str,
    selector_prompt: &'static str,
    label: &'static str,
    title: &'static str,
    options: Vec<SelectorOption>,
    blocks: &'static [Block],
    /// Trusted SVG from the chart writer, inserted unescaped.
    chart: Option<&'a str>,
    gallery_dir: Option<&'a str>,
    columns: [&'static [MapScreenshot]; 2],
    map: Option<MapEmbed<'a>>,
}

impl Page<'_> {
    pub fn render(&self) -> Result<String> {
        let options = View::ALL
            .into_iter()
            .map(|view| SelectorOption {
                href: view.file_name(),
                label: view.label(),
                selected: view == self.view,
            })
            .collect();

        let (chart, gallery_dir) = match &self.figure {
            Figure::None => (None, None),
            Figure::Svg(svg) => (Some(svg.as_str()), None),
            Figure::Gallery { asset_dir } => (None, Some(asset_dir.as_str())),
        };
        let (left, right) = gallery::columns();

        let template = PageTemplate {
            site_title: SITE_TITLE,
            selector_prompt: SELECTOR_PROMPT,
            label: self.view.label(),
            title: self.view.title(),
            options,
            blocks: blocks(self.view),
            chart,
            gallery_dir,
            columns: [left, right],
            map: self.map_src.map(|src| MapEmbed {
                src,
                heading: MAP_HEADING,
                height: MAP_HEIGHT,
            }),
        };
        Ok(template.render()?)
    }
}
