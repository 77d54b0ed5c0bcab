//! Linear Scale
//! Maps a numeric domain onto a pixel range and produces "nice" axis ticks.

use statrs::statistics::Statistics;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Minimum and maximum of a sequence. Both are NaN when it is empty.
pub fn extent<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    (Statistics::min(iter.clone()), Statistics::max(iter))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new((0.0, 1.0), (0.0, 1.0))
    }
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Map a domain value into the range. A zero-width domain maps
    /// everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || span.is_nan() {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if !start.is_finite() || !stop.is_finite() || count == 0 {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let inc = tick_increment(start, stop, count);
        if inc == 0.0 || !inc.is_finite() {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = if inc > 0.0 {
            let lo = (start / inc).ceil() as i64;
            let hi = (stop / inc).floor() as i64;
            (lo..=hi).map(|i| i as f64 * inc).collect()
        } else {
            // Negative increments encode 1/step to keep fractional ticks exact.
            let inv = -inc;
            let lo = (start * inv).ceil() as i64;
            let hi = (stop * inv).floor() as i64;
            (lo..=hi).map(|i| i as f64 / inv).collect()
        };

        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Label formatter with the precision implied by the tick step.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let (d0, d1) = self.domain;
        let step = tick_step(d0, d1, count).abs();
        let decimals = if step > 0.0 && step.is_finite() {
            (-step.log10().floor()).max(0.0) as usize
        } else {
            0
        };
        move |value| format!("{:.*}", decimals, value)
    }
}

/// Step between ticks, as a positive power-of-ten multiple of 1, 2 or 5,
/// or as a negative reciprocal for steps below one.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start {
        (stop, start)
    } else {
        (start, stop)
    };
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 {
        1.0 / -inc
    } else {
        inc
    }
}
