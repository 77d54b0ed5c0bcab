//! Pie chart.

use super::geometry::{PointGeom, WedgeGeom};
use super::palette::{category_color, highlight, ARC_STROKE};
use super::scene::{Primitive, Scene, Shape};
use super::selection::{ElementSet, ReconcileReport};
use super::transition::RenderMode;
use super::{Chart, ChartError, ChartState};
use crate::config::ChartConfig;
use crate::data::{DataSource, PieSource};
use crate::layout::PieLayout;
use egui::Color32;
use rand::RngCore;

const TITLE: &str = "pie";

/// Gap between the wedges and the edge of the plotting area.
const ARC_INSET: f64 = 10.0;

pub struct PieChart {
    config: ChartConfig,
    source: PieSource,
    state: ChartState,
    data: Vec<f64>,
    wedges: ElementSet<WedgeGeom>,
    /// Fill per wedge, index-aligned with `wedges`.
    fills: Vec<Color32>,
}

impl PieChart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            source: PieSource::default(),
            state: ChartState::Uninitialized,
            data: Vec::new(),
            wedges: ElementSet::new(true),
            fills: Vec::new(),
        }
    }

    pub fn initialize_with(
        &mut self,
        data: Vec<f64>,
        now: f64,
    ) -> Result<ReconcileReport, ChartError> {
        self.state.begin(TITLE)?;
        tracing::info!(samples = data.len(), "initializing pie chart");
        Ok(self.reconcile(data, RenderMode::Init, now))
    }

    pub fn update_with(
        &mut self,
        data: Vec<f64>,
        now: f64,
    ) -> Result<ReconcileReport, ChartError> {
        self.state.ensure_ready(TITLE)?;
        tracing::info!(samples = data.len(), "updating pie chart");
        Ok(self.reconcile(data, RenderMode::Update, now))
    }

    /// Outer radius of the wedges.
    pub fn radius(&self) -> f64 {
        let (w, h) = (self.config.inner_width(), self.config.inner_height());
        ((w.min(h) / 2.0).floor() - ARC_INSET).max(0.0)
    }

    /// Centre of the pie on the surface.
    pub fn center(&self) -> PointGeom {
        let m = self.config.margins;
        PointGeom::new(
            m.left + self.config.inner_width() / 2.0,
            m.top + self.config.inner_height() / 2.0,
        )
    }

    pub fn reconcile(&mut self, data: Vec<f64>, mode: RenderMode, now: f64) -> ReconcileReport {
        let duration = mode.duration(self.config.transition_ms);
        let radius = self.radius();

        let slices = PieLayout::compute(&data);
        let targets: Vec<WedgeGeom> = slices
            .iter()
            .map(|slice| WedgeGeom {
                start_angle: slice.start_angle,
                end_angle: slice.end_angle,
                inner_radius: 0.0,
                outer_radius: radius,
            })
            .collect();

        // New wedges open from their own start angle.
        let report = self.wedges.reconcile(targets, now, duration, |target| WedgeGeom {
            end_angle: target.start_angle,
            ..*target
        });

        self.fills = (0..data.len()).map(category_color).collect();

        tracing::debug!(
            entered = report.entered,
            updated = report.updated,
            exited = report.exited,
            ?mode,
            "reconciled pie wedges"
        );

        self.data = data;
        report
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn wedge_targets(&self) -> Vec<WedgeGeom> {
        self.wedges.targets()
    }
}

impl Chart for PieChart {
    fn title(&self) -> &'static str {
        TITLE
    }

    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn state(&self) -> ChartState {
        self.state
    }

    fn initialize(
        &mut self,
        rng: &mut dyn RngCore,
        now: f64,
    ) -> Result<ReconcileReport, ChartError> {
        let data = self.source.generate(rng);
        self.initialize_with(data, now)
    }

    fn on_activate(
        &mut self,
        rng: &mut dyn RngCore,
        now: f64,
    ) -> Result<ReconcileReport, ChartError> {
        self.state.ensure_ready(TITLE)?;
        let data = self.source.generate(rng);
        self.update_with(data, now)
    }

    fn scene(&self, now: f64) -> Scene {
        let mut scene = Scene::new(self.config.width, self.config.height);
        let center = self.center();

        for (i, wedge) in self.wedges.iter().enumerate() {
            let base = self.fills.get(i).copied().unwrap_or(Color32::GRAY);
            let fill = if wedge.is_active() {
                highlight(base)
            } else {
                base
            };
            let shape = Shape::Wedge {
                center,
                wedge: wedge.geometry_at(now),
            };
            scene.push(
                Primitive::filled(shape, fill)
                    .with_stroke(1.0, ARC_STROKE)
                    .for_element(i),
            );
        }
        scene
    }

    fn set_hover(&mut self, element: Option<usize>) {
        self.wedges.set_hover(element);
    }

    fn is_animating(&self, now: f64) -> bool {
        self.wedges.is_animating(now)
    }

    fn element_count(&self) -> usize {
        self.wedges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::SvgRenderer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{PI, TAU};

    fn chart() -> PieChart {
        PieChart::new(ChartConfig::sized(300.0, 300.0))
    }

    #[test]
    fn spans_are_proportional() {
        let mut chart = chart();
        chart.initialize_with(vec![1.0, 1.0, 2.0], 0.0).unwrap();
        let spans: Vec<f64> = chart.wedge_targets().iter().map(WedgeGeom::span).collect();
        let expected = [PI / 2.0, PI / 2.0, PI];
        for (span, want) in spans.iter().zip(expected) {
            assert!((span - want).abs() < 1e-9);
        }
    }

    #[test]
    fn radius_and_centre_from_inner_area() {
        let chart = chart();
        assert_eq!(chart.radius(), 110.0);
        assert_eq!(chart.center(), PointGeom::new(150.0, 150.0));
        assert!(chart.wedge_targets().is_empty());
    }

    #[test]
    fn generated_pies_cover_a_full_turn() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut chart = chart();
        chart.initialize(&mut rng, 0.0).unwrap();
        for i in 0..30 {
            chart.on_activate(&mut rng, i as f64 * 10.0).unwrap();
            assert!((5..10).contains(&chart.data().len()));
            assert_eq!(chart.element_count(), chart.data().len());
            let total: f64 = chart.wedge_targets().iter().map(WedgeGeom::span).sum();
            assert!((total - TAU).abs() < 1e-9);
        }
    }

    #[test]
    fn shrink_then_grow() {
        let mut chart = chart();
        chart.initialize_with(vec![1.0; 10], 0.0).unwrap();
        let report = chart.update_with(vec![1.0; 4], 1.0).unwrap();
        assert_eq!(report.exited, 6);
        assert_eq!(report.updated, 4);
        let report = chart.update_with(vec![1.0; 10], 2.0).unwrap();
        assert_eq!(report.entered, 6);
        assert_eq!(chart.element_count(), 10);
    }

    #[test]
    fn entering_wedges_open_from_start_angle() {
        let mut chart = chart();
        chart.initialize_with(vec![1.0], 0.0).unwrap();
        chart.update_with(vec![1.0, 1.0], 100.0).unwrap();
        let scene = chart.scene(100.0);
        match &scene.primitives[1].shape {
            Shape::Wedge { wedge, .. } => {
                assert!((wedge.start_angle - PI).abs() < 1e-9);
                assert_eq!(wedge.span(), 0.0);
            }
            other => panic!("expected a wedge, got {other:?}"),
        }
    }

    #[test]
    fn hover_lightens_wedge() {
        let mut chart = chart();
        chart.initialize_with(vec![1.0, 3.0], 0.0).unwrap();
        let before = chart.scene(0.0);
        // Left half of the pie belongs to the larger, second slice.
        let hit = before.hit_test(PointGeom::new(100.0, 150.0));
        assert_eq!(hit, Some(1));

        chart.set_hover(hit);
        let after = chart.scene(0.0);
        assert_eq!(after.primitives[1].fill, before.primitives[1].fill.map(highlight));
        assert_eq!(after.primitives[0].fill, before.primitives[0].fill);
    }

    #[test]
    fn fills_follow_wedge_position() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut chart = chart();
        chart.initialize(&mut rng, 0.0).unwrap();
        for i in 0..1000 {
            chart.on_activate(&mut rng, i as f64).unwrap();
        }
        assert_eq!(chart.fills.len(), chart.data().len());
        for (i, fill) in chart.fills.iter().enumerate() {
            assert_eq!(*fill, category_color(i));
        }
    }

    #[test]
    fn empty_pie_renders_and_grows() {
        let mut chart = chart();
        let report = chart.initialize_with(vec![], 0.0).unwrap();
        assert_eq!(report.entered, 0);
        let scene = chart.scene(0.0);
        assert!(scene.primitives.is_empty());
        assert!(SvgRenderer::render(&scene).is_ok());

        let report = chart.update_with(vec![4.0], 10.0).unwrap();
        assert_eq!(report.entered, 1);
        assert_eq!(chart.element_count(), 1);
        let span = chart.wedge_targets()[0].span();
        assert!((span - TAU).abs() < 1e-9);
        assert!(SvgRenderer::render(&chart.scene(10.0 + 750.0)).is_ok());
    }
}
