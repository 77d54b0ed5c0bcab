//! Chartify Motion - Animated data-bound charts
//!
//! Bar, line and pie charts that reconcile their drawn elements against each
//! new data set and animate the difference.

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod gui;
pub mod layout;
