//! Dashboard views: their text, the map screenshot gallery, and HTML output.

pub mod content;
pub mod gallery;
pub mod html;
pub mod view;

pub use html::{Figure, Page};
pub use view::View;
