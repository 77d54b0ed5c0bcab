//! Angular partition for the pie chart.

use std::f64::consts::TAU;

/// A sample's share of the full turn. Angles are radians, clockwise from
/// twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcSlice {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Lays slices out in data order, each proportional to its magnitude.
pub struct PieLayout;

impl PieLayout {
    /// Non-positive and NaN values get a zero span. If nothing is positive,
    /// every slice is empty.
    pub fn compute(values: &[f64]) -> Vec<ArcSlice> {
        let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
        let k = if total > 0.0 { TAU / total } else { 0.0 };

        let mut angle = 0.0;
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let span = if value > 0.0 { value * k } else { 0.0 };
                let slice = ArcSlice {
                    index,
                    value,
                    start_angle: angle,
                    end_angle: angle + span,
                };
                angle += span;
                slice
            })
            .collect()
    }
}
