//! Fixed-count histogram binning for the bar chart.

use super::scale::extent;
use statrs::statistics::Statistics;

/// Number of bins the bar chart always uses.
pub const BIN_COUNT: usize = 10;

/// One equal-width interval and the number of samples inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Lower bound (inclusive).
    pub x0: f64,
    /// Upper bound (exclusive, except for the last bin).
    pub x1: f64,
    pub count: usize,
}

impl Bin {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// Partitions the value extent into `bins` equal-width intervals.
#[derive(Debug, Clone, Copy)]
pub struct Histogram {
    pub bins: usize,
}

impl Default for Histogram {
    fn default() -> Self {
        Self { bins: BIN_COUNT }
    }
}

impl Histogram {
    /// Count finite values into bins. A flat extent is widened to one unit;
    /// an empty input is binned over [0, 1].
    pub fn layout(&self, values: &[f64]) -> Vec<Bin> {
        let n = self.bins.max(1);
        let (mut lo, mut hi) = extent(values.iter().copied().filter(|v| v.is_finite()));
        if !lo.is_finite() || !hi.is_finite() {
            lo = 0.0;
            hi = 1.0;
        }
        if hi <= lo {
            hi = lo + 1.0;
        }

        let width = (hi - lo) / n as f64;
        let mut bins: Vec<Bin> = (0..n)
            .map(|i| Bin {
                x0: lo + i as f64 * width,
                x1: if i + 1 == n {
                    hi
                } else {
                    lo + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        for &v in values.iter().filter(|v| v.is_finite()) {
            let idx = (((v - lo) / width).floor() as usize).min(n - 1);
            bins[idx].count += 1;
        }
        bins
    }

    /// Largest bin count, used as the top of the vertical domain.
    pub fn max_count(bins: &[Bin]) -> f64 {
        let max = Statistics::max(bins.iter().map(|b| b.count as f64));
        if max.is_nan() {
            0.0
        } else {
            max
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BarSource, DataSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn counts_sum_to_dataset_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let histogram = Histogram::default();
        for _ in 0..50 {
            let data = BarSource::default().generate(&mut rng);
            let bins = histogram.layout(&data);
            assert_eq!(bins.len(), BIN_COUNT);
            assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), data.len());
        }
    }

    #[test]
    fn all_zeros_land_in_first_bin() {
        let bins = Histogram::default().layout(&[0.0; 100]);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].x0, 0.0);
        assert!((bins[0].x1 - 0.1).abs() < 1e-12);
        assert_eq!(bins[0].count, 100);
        assert!(bins[1..].iter().all(|b| b.count == 0));
        assert_eq!(Histogram::max_count(&bins), 100.0);
    }

    #[test]
    fn maximum_value_goes_into_last_bin() {
        let bins = Histogram::default().layout(&[0.0, 0.5, 1.0]);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[5].count, 1);
        assert_eq!(bins[9].count, 1);
        assert_eq!(bins[9].x1, 1.0);
    }

    #[test]
    fn bins_are_equal_width_and_contiguous() {
        let bins = Histogram::default().layout(&[2.0, 7.0, 4.5]);
        for pair in bins.windows(2) {
            assert_eq!(pair[0].x1, pair[1].x0);
            assert!((pair[0].width() - 0.5).abs() < 1e-12);
        }
        assert_eq!(bins[0].x0, 2.0);
        assert_eq!(bins[9].x1, 7.0);
    }

    #[test]
    fn empty_input_still_yields_fixed_bins() {
        let bins = Histogram::default().layout(&[]);
        assert_eq!(bins.len(), BIN_COUNT);
        assert!(bins.iter().all(|b| b.count == 0));
        assert_eq!(Histogram::max_count(&bins), 0.0);
    }
}
