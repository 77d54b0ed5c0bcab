//! Charts module - Data-bound animated charts

mod axis;
mod bar;
mod curve;
mod geometry;
mod line;
mod palette;
mod pie;
mod renderer;
mod scene;
mod selection;
mod transition;

pub use bar::BarChart;
pub use geometry::{PointGeom, RectGeom, WedgeGeom};
pub use line::LineChart;
pub use pie::PieChart;
pub use renderer::{RenderError, SvgRenderer};
pub use scene::{Anchor, Primitive, Scene, Shape};
pub use selection::ReconcileReport;
pub use transition::RenderMode;

use crate::config::ChartConfig;
use rand::RngCore;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("{0} chart has not been initialized")]
    NotInitialized(&'static str),
    #[error("{0} chart is already initialized")]
    AlreadyInitialized(&'static str),
}

/// Lifecycle of a chart. `Ready` loops on itself for every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartState {
    #[default]
    Uninitialized,
    Ready,
}

impl ChartState {
    fn begin(&mut self, chart: &'static str) -> Result<(), ChartError> {
        if *self == ChartState::Ready {
            return Err(ChartError::AlreadyInitialized(chart));
        }
        *self = ChartState::Ready;
        Ok(())
    }

    fn ensure_ready(&self, chart: &'static str) -> Result<(), ChartError> {
        match self {
            ChartState::Ready => Ok(()),
            ChartState::Uninitialized => Err(ChartError::NotInitialized(chart)),
        }
    }
}

/// A self-contained chart: its own data source, data, elements and axes.
///
/// Times are milliseconds on the caller's frame clock.
pub trait Chart {
    fn title(&self) -> &'static str;

    fn config(&self) -> &ChartConfig;

    fn state(&self) -> ChartState;

    /// Draw a first data set without animation.
    fn initialize(&mut self, rng: &mut dyn RngCore, now: f64)
        -> Result<ReconcileReport, ChartError>;

    /// Replace the data set and animate towards it.
    fn on_activate(&mut self, rng: &mut dyn RngCore, now: f64)
        -> Result<ReconcileReport, ChartError>;

    /// Snapshot of everything visible at `now`.
    fn scene(&self, now: f64) -> Scene;

    /// Pointer is over `element` (or nothing).
    fn set_hover(&mut self, element: Option<usize>);

    fn is_animating(&self, now: f64) -> bool;

    /// Number of data-bound elements currently drawn.
    fn element_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_charts() -> Vec<Box<dyn Chart>> {
        vec![
            Box::new(BarChart::new(ChartConfig::sized(500.0, 300.0))),
            Box::new(LineChart::new(ChartConfig::sized(500.0, 300.0))),
            Box::new(PieChart::new(ChartConfig::sized(300.0, 300.0))),
        ]
    }

    #[test]
    fn activation_requires_initialization() {
        let mut rng = StdRng::seed_from_u64(1);
        for mut chart in all_charts() {
            assert_eq!(chart.state(), ChartState::Uninitialized);
            let err = chart.on_activate(&mut rng, 0.0).unwrap_err();
            assert_eq!(err, ChartError::NotInitialized(chart.title()));
        }
    }

    #[test]
    fn initialize_once_then_update_repeatedly() {
        let mut rng = StdRng::seed_from_u64(2);
        for mut chart in all_charts() {
            chart.initialize(&mut rng, 0.0).unwrap();
            assert_eq!(chart.state(), ChartState::Ready);
            assert!(!chart.is_animating(0.0));
            assert_eq!(
                chart.initialize(&mut rng, 1.0).unwrap_err(),
                ChartError::AlreadyInitialized(chart.title())
            );

            for step in 1..5 {
                let now = step as f64 * 100.0;
                chart.on_activate(&mut rng, now).unwrap();
                assert_eq!(chart.state(), ChartState::Ready);
                assert!(chart.is_animating(now + 1.0));
            }
            assert!(!chart.is_animating(400.0 + 750.0));
        }
    }

    #[test]
    fn scene_holds_one_primitive_per_element() {
        let mut rng = StdRng::seed_from_u64(3);
        for mut chart in all_charts() {
            chart.initialize(&mut rng, 0.0).unwrap();
            let scene = chart.scene(0.0);
            assert_eq!(scene.elements().count(), chart.element_count());
            assert_eq!(scene.width, chart.config().width);
        }
    }
}
