//! Line chart: a monotone curve through the samples with a marker on each.

use super::axis::{Axis, AxisOrient};
use super::curve::{flatten, monotone_x};
use super::geometry::{Domain, PathGeom, PointGeom};
use super::palette::{LINE_COLOR, POINT_COLOR};
use super::scene::{Primitive, Scene, Shape};
use super::selection::{ElementSet, ReconcileReport};
use super::transition::RenderMode;
use super::{Chart, ChartError, ChartState};
use crate::config::ChartConfig;
use crate::data::{DataSource, LineSource, XY};
use crate::layout::{extent, LinearScale};
use rand::RngCore;

const TITLE: &str = "line";
const POINT_RADIUS: f64 = 3.5;
const LINE_WIDTH: f64 = 1.5;
/// Largest distance between the drawn polyline and the true curve.
const CURVE_TOLERANCE: f64 = 0.25;

pub struct LineChart {
    config: ChartConfig,
    source: LineSource,
    state: ChartState,
    data: Vec<XY>,
    x_domain: Domain,
    y_domain: Domain,
    /// Always holds exactly one path once data is bound.
    path: ElementSet<PathGeom>,
    points: ElementSet<PointGeom>,
    x_axis: Option<Axis>,
    y_axis: Option<Axis>,
}

impl LineChart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            source: LineSource::default(),
            state: ChartState::Uninitialized,
            data: Vec::new(),
            x_domain: Domain::new(0.0, 1.0),
            y_domain: Domain::new(0.0, 1.0),
            path: ElementSet::new(false),
            points: ElementSet::new(false),
            x_axis: None,
            y_axis: None,
        }
    }

    /// Create the axes (the vertical one doubling as a grid) and bind `data`
    /// without animation.
    pub fn initialize_with(
        &mut self,
        data: Vec<XY>,
        now: f64,
    ) -> Result<ReconcileReport, ChartError> {
        self.state.begin(TITLE)?;
        let (w, h) = (self.config.inner_width(), self.config.inner_height());
        let m = self.config.margins;
        self.x_axis = Some(Axis::new(
            AxisOrient::Bottom,
            PointGeom::new(m.left, m.top + h),
            (0.0, w),
            self.x_domain,
        ));
        self.y_axis = Some(
            Axis::new(
                AxisOrient::Left,
                PointGeom::new(m.left, m.top),
                (h, 0.0),
                self.y_domain,
            )
            .with_tick_size(-w),
        );
        tracing::info!(samples = data.len(), "initializing line chart");
        Ok(self.reconcile(data, RenderMode::Init, now))
    }

    pub fn update_with(
        &mut self,
        data: Vec<XY>,
        now: f64,
    ) -> Result<ReconcileReport, ChartError> {
        self.state.ensure_ready(TITLE)?;
        tracing::info!(samples = data.len(), "updating line chart");
        Ok(self.reconcile(data, RenderMode::Update, now))
    }

    /// Reports enter/update/exit counts for the point markers.
    pub fn reconcile(&mut self, data: Vec<XY>, mode: RenderMode, now: f64) -> ReconcileReport {
        let (w, h) = (self.config.inner_width(), self.config.inner_height());
        let duration = mode.duration(self.config.transition_ms);

        let (x0, x1) = extent(data.iter().map(|d| d.x));
        let (y0, y1) = extent(data.iter().map(|d| d.y));
        let x_domain = Domain::new(x0, x1);
        let y_domain = Domain::new(y0, y1);
        let x = LinearScale::new(x_domain.as_tuple(), (0.0, w));
        let y = LinearScale::new(y_domain.as_tuple(), (h, 0.0));

        let targets: Vec<PointGeom> = data
            .iter()
            .map(|d| PointGeom::new(x.apply(d.x), y.apply(d.y)))
            .collect();

        let path = PathGeom {
            points: targets.clone(),
        };
        self.path
            .reconcile(vec![path], now, duration, |target| target.clone());

        // New markers rise from the baseline at their own x.
        let report = self.points.reconcile(targets, now, duration, |target| {
            PointGeom::new(target.x, h)
        });

        if let Some(axis) = self.x_axis.as_mut() {
            axis.retarget(x_domain, now, duration);
        }
        if let Some(axis) = self.y_axis.as_mut() {
            axis.retarget(y_domain, now, duration);
        }

        tracing::debug!(
            entered = report.entered,
            updated = report.updated,
            exited = report.exited,
            ?mode,
            "reconciled line points"
        );

        self.data = data;
        self.x_domain = x_domain;
        self.y_domain = y_domain;
        report
    }

    pub fn data(&self) -> &[XY] {
        &self.data
    }

    pub fn x_domain(&self) -> (f64, f64) {
        self.x_domain.as_tuple()
    }

    pub fn y_domain(&self) -> (f64, f64) {
        self.y_domain.as_tuple()
    }

    pub fn point_targets(&self) -> Vec<PointGeom> {
        self.points.targets()
    }
}

impl Chart for LineChart {
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
        let origin = PointGeom::new(self.config.margins.left, self.config.margins.top);

        // Axes first so the grid sits behind the data.
        for axis in self.x_axis.iter().chain(self.y_axis.iter()) {
            axis.draw(now, &mut scene);
        }

        for path in self.path.iter() {
            let vertices = path.geometry_at(now).points;
            let line: Vec<PointGeom> = flatten(&monotone_x(&vertices), CURVE_TOLERANCE)
                .into_iter()
                .map(|p| p.offset(origin))
                .collect();
            scene.push(Primitive::stroked(Shape::Path(line), LINE_WIDTH, LINE_COLOR));
        }

        for (i, point) in self.points.iter().enumerate() {
            let center = point.geometry_at(now).offset(origin);
            scene.push(
                Primitive::filled(
                    Shape::Circle {
                        center,
                        radius: POINT_RADIUS,
                    },
                    POINT_COLOR,
                )
                .for_element(i),
            );
        }
        scene
    }

    fn set_hover(&mut self, element: Option<usize>) {
        self.points.set_hover(element);
    }

    fn is_animating(&self, now: f64) -> bool {
        self.path.is_animating(now)
            || self.points.is_animating(now)
            || self
                .x_axis
                .iter()
                .chain(self.y_axis.iter())
                .any(|axis| axis.is_animating(now))
    }

    fn element_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::SvgRenderer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn series(ys: &[f64]) -> Vec<XY> {
        ys.iter()
            .enumerate()
            .map(|(i, &y)| XY { x: i as f64, y })
            .collect()
    }

    fn chart() -> LineChart {
        LineChart::new(ChartConfig::sized(500.0, 300.0))
    }

    #[test]
    fn domains_follow_data_extent() {
        let mut chart = chart();
        chart
            .initialize_with(series(&[0.0, 4.0, 2.0, 8.0]), 0.0)
            .unwrap();
        assert_eq!(chart.x_domain(), (0.0, 3.0));
        assert_eq!(chart.y_domain(), (0.0, 8.0));

        let points = chart.point_targets();
        assert_eq!(points[0], PointGeom::new(0.0, 240.0));
        assert_eq!(points[3], PointGeom::new(440.0, 0.0));
    }

    #[test]
    fn shrinking_and_growing_counts() {
        let mut chart = chart();
        chart.initialize_with(series(&[1.0; 10]), 0.0).unwrap();

        let report = chart.update_with(series(&[1.0; 4]), 10.0).unwrap();
        assert_eq!(report.exited, 6);
        assert_eq!(chart.element_count(), 4);

        let report = chart.update_with(series(&[1.0; 10]), 20.0).unwrap();
        assert_eq!(report.entered, 6);
        assert_eq!(chart.element_count(), 10);
    }

    #[test]
    fn single_path_regardless_of_length() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut chart = chart();
        chart.initialize(&mut rng, 0.0).unwrap();
        for i in 1..4 {
            chart.on_activate(&mut rng, i as f64 * 1000.0).unwrap();
            let scene = chart.scene(i as f64 * 1000.0 + 750.0);
            let paths = scene
                .primitives
                .iter()
                .filter(|p| matches!(p.shape, Shape::Path(_)))
                .count();
            assert_eq!(paths, 1);
            assert_eq!(scene.elements().count(), chart.data().len());
        }
    }

    #[test]
    fn generated_samples_stay_under_diagonal() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut chart = chart();
        chart.initialize(&mut rng, 0.0).unwrap();
        for i in 0..20 {
            chart.on_activate(&mut rng, i as f64).unwrap();
            let len = chart.data().len();
            assert!((30..50).contains(&len));
            assert!(chart.data().iter().all(|d| d.y >= 0.0 && d.y <= d.x));
        }
    }

    #[test]
    fn entering_markers_rise_from_baseline() {
        let mut chart = chart();
        chart.initialize_with(series(&[0.0, 1.0]), 0.0).unwrap();
        chart.update_with(series(&[0.0, 1.0, 1.0]), 100.0).unwrap();
        let scene = chart.scene(100.0);
        let last = scene.elements().last().map(|p| p.shape.clone());
        match last {
            Some(Shape::Circle { center, .. }) => {
                assert_eq!(center, PointGeom::new(30.0 + 440.0, 30.0 + 240.0));
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn reconcile_twice_is_stable() {
        let data = series(&[3.0, 1.0, 4.0, 1.0, 5.0]);
        let mut once = chart();
        once.initialize_with(series(&[0.0; 3]), 0.0).unwrap();
        once.update_with(data.clone(), 5.0).unwrap();

        let mut twice = chart();
        twice.initialize_with(series(&[0.0; 3]), 0.0).unwrap();
        twice.update_with(data.clone(), 5.0).unwrap();
        twice.update_with(data, 5.0).unwrap();

        assert_eq!(once.scene(5000.0), twice.scene(5000.0));
    }

    #[test]
    fn empty_series_renders_and_grows() {
        let mut chart = chart();
        let report = chart.initialize_with(vec![], 0.0).unwrap();
        assert_eq!(report.entered, 0);
        assert_eq!(chart.element_count(), 0);
        assert!(SvgRenderer::render(&chart.scene(0.0)).is_ok());

        let report = chart.update_with(series(&[5.0]), 10.0).unwrap();
        assert_eq!(report.entered, 1);
        assert_eq!(chart.element_count(), 1);
        // A single sample has a zero-width extent and sits mid-plot.
        assert_eq!(chart.point_targets(), vec![PointGeom::new(220.0, 120.0)]);
        assert!(SvgRenderer::render(&chart.scene(10.0 + 750.0)).is_ok());
    }
}
