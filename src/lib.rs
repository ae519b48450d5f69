pub mod charts;
pub mod config;
pub mod dashboard;
pub mod output;
pub mod pages;
pub mod parser;
pub mod stats;
pub mod utility;
