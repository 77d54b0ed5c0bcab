//! Sample Data Sources
//! Random data sets for each chart type. Every call produces a fresh set;
//! nothing is carried over from the previous one.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// A line chart sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

/// Produces a fresh data set on demand.
pub trait DataSource {
    type Sample;

    fn generate(&self, rng: &mut dyn RngCore) -> Vec<Self::Sample>;
}

/// Fixed-size set of Bates-distributed values in [0, 1).
#[derive(Debug, Clone, Copy)]
pub struct BarSource {
    pub count: usize,
    /// Number of uniforms averaged per sample.
    pub order: usize,
}

impl Default for BarSource {
    fn default() -> Self {
        Self {
            count: 100,
            order: 10,
        }
    }
}

impl BarSource {
    fn bates(&self, rng: &mut dyn RngCore) -> f64 {
        let order = self.order.max(1);
        let sum: f64 = (0..order).map(|_| rng.gen::<f64>()).sum();
        sum / order as f64
    }
}

impl DataSource for BarSource {
    type Sample = f64;

    fn generate(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        (0..self.count).map(|_| self.bates(rng)).collect()
    }
}

/// Random-length series where sample `i` has `x = i` and `y` uniform in [0, i].
#[derive(Debug, Clone, Copy)]
pub struct LineSource {
    pub min_len: usize,
    /// Exclusive.
    pub max_len: usize,
}

impl Default for LineSource {
    fn default() -> Self {
        Self {
            min_len: 30,
            max_len: 50,
        }
    }
}

impl DataSource for LineSource {
    type Sample = XY;

    fn generate(&self, rng: &mut dyn RngCore) -> Vec<XY> {
        let len = random_len(rng, self.min_len, self.max_len);
        (0..len)
            .map(|i| {
                let x = i as f64;
                XY {
                    x,
                    y: rng.gen::<f64>() * x,
                }
            })
            .collect()
    }
}

/// Random-length set of uniform magnitudes.
#[derive(Debug, Clone, Copy)]
pub struct PieSource {
    pub min_len: usize,
    /// Exclusive.
    pub max_len: usize,
    /// Exclusive.
    pub max_value: f64,
}

impl Default for PieSource {
    fn default() -> Self {
        Self {
            min_len: 5,
            max_len: 10,
            max_value: 10.0,
        }
    }
}

impl DataSource for PieSource {
    type Sample = f64;

    fn generate(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let len = random_len(rng, self.min_len, self.max_len);
        (0..len)
            .map(|_| rng.gen::<f64>() * self.max_value)
            .collect()
    }
}

fn random_len(rng: &mut dyn RngCore, min: usize, max: usize) -> usize {
    if max <= min {
        min
    } else {
        rng.gen_range(min..max)
    }
}
