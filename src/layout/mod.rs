//! Layout module - Scales and data-derived geometry

mod histogram;
mod pie;
mod scale;

pub use histogram::{Bin, Histogram, BIN_COUNT};
pub use pie::{ArcSlice, PieLayout};
pub use scale::{extent, LinearScale};
