//! Data module - Random sample generation

mod source;

pub use source::{BarSource, DataSource, LineSource, PieSource, XY};
