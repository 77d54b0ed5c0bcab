//! Histogram bar chart.

use super::axis::{Axis, AxisOrient};
use super::geometry::{Domain, PointGeom, RectGeom};
use super::palette::{BAR_ACTIVE_COLOR, BAR_COLOR};
use super::scene::{Primitive, Scene, Shape};
use super::selection::{ElementSet, ReconcileReport};
use super::transition::RenderMode;
use super::{Chart, ChartError, ChartState};
use crate::config::ChartConfig;
use crate::data::{BarSource, DataSource};
use crate::layout::{Bin, Histogram, LinearScale};
use rand::RngCore;

const TITLE: &str = "bar";

/// Horizontal domain of the samples.
const X_DOMAIN: Domain = Domain::new(0.0, 1.0);

/// Bars are drawn one pixel right of their bin edge so neighbours don't touch.
const BAR_INSET: f64 = 1.0;

pub struct BarChart {
    config: ChartConfig,
    source: BarSource,
    histogram: Histogram,
    state: ChartState,
    data: Vec<f64>,
    bins: Vec<Bin>,
    y_domain: Domain,
    bars: ElementSet<RectGeom>,
    x_axis: Option<Axis>,
    y_axis: Option<Axis>,
}

impl BarChart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            source: BarSource::default(),
            histogram: Histogram::default(),
            state: ChartState::Uninitialized,
            data: Vec::new(),
            bins: Vec::new(),
            y_domain: Domain::new(0.0, 1.0),
            bars: ElementSet::new(true),
            x_axis: None,
            y_axis: None,
        }
    }

    /// Create the axes and bind `data` without animation.
    pub fn initialize_with(
        &mut self,
        data: Vec<f64>,
        now: f64,
    ) -> Result<ReconcileReport, ChartError> {
        self.state.begin(TITLE)?;
        let (w, h) = (self.config.inner_width(), self.config.inner_height());
        let m = self.config.margins;
        self.x_axis = Some(Axis::new(
            AxisOrient::Bottom,
            PointGeom::new(m.left, m.top + h),
            (0.0, w),
            X_DOMAIN,
        ));
        self.y_axis = Some(Axis::new(
            AxisOrient::Left,
            PointGeom::new(m.left, m.top),
            (h, 0.0),
            self.y_domain,
        ));
        tracing::info!(samples = data.len(), "initializing bar chart");
        Ok(self.reconcile(data, RenderMode::Init, now))
    }

    /// Bind a new data set and animate towards it.
    pub fn update_with(
        &mut self,
        data: Vec<f64>,
        now: f64,
    ) -> Result<ReconcileReport, ChartError> {
        self.state.ensure_ready(TITLE)?;
        tracing::info!(samples = data.len(), "updating bar chart");
        Ok(self.reconcile(data, RenderMode::Update, now))
    }

    pub fn reconcile(&mut self, data: Vec<f64>, mode: RenderMode, now: f64) -> ReconcileReport {
        let (w, h) = (self.config.inner_width(), self.config.inner_height());
        let duration = mode.duration(self.config.transition_ms);

        let bins = self.histogram.layout(&data);
        let y_domain = Domain::new(0.0, Histogram::max_count(&bins));
        let x = LinearScale::new(X_DOMAIN.as_tuple(), (0.0, w));
        let y = LinearScale::new(y_domain.as_tuple(), (h, 0.0));

        let targets: Vec<RectGeom> = bins
            .iter()
            .map(|bin| {
                let top = y.apply(bin.count as f64);
                RectGeom {
                    x: x.apply(bin.x0),
                    y: top,
                    width: (x.apply(bin.x1) - x.apply(bin.x0) - 1.0).max(1.0),
                    height: h - top,
                }
            })
            .collect();

        // New bars grow up from the baseline.
        let report = self.bars.reconcile(targets, now, duration, |target| RectGeom {
            y: h,
            height: 0.0,
            ..*target
        });

        if let Some(axis) = self.x_axis.as_mut() {
            axis.retarget(X_DOMAIN, now, duration);
        }
        if let Some(axis) = self.y_axis.as_mut() {
            axis.retarget(y_domain, now, duration);
        }

        tracing::debug!(
            entered = report.entered,
            updated = report.updated,
            exited = report.exited,
            ?mode,
            "reconciled bars"
        );

        self.data = data;
        self.bins = bins;
        self.y_domain = y_domain;
        report
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Vertical domain the chart is heading for.
    pub fn y_domain(&self) -> (f64, f64) {
        self.y_domain.as_tuple()
    }

    pub fn bar_targets(&self) -> Vec<RectGeom> {
        self.bars.targets()
    }
}

impl Chart for BarChart {
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
        let origin = PointGeom::new(self.config.margins.left + BAR_INSET, self.config.margins.top);

        for (i, bar) in self.bars.iter().enumerate() {
            let color = if bar.is_active() {
                BAR_ACTIVE_COLOR
            } else {
                BAR_COLOR
            };
            let rect = bar.geometry_at(now).offset(origin);
            scene.push(Primitive::filled(Shape::Rect(rect), color).for_element(i));
        }

        for axis in self.x_axis.iter().chain(self.y_axis.iter()) {
            axis.draw(now, &mut scene);
        }
        scene
    }

    fn set_hover(&mut self, element: Option<usize>) {
        self.bars.set_hover(element);
    }

    fn is_animating(&self, now: f64) -> bool {
        self.bars.is_animating(now)
            || self
                .x_axis
                .iter()
                .chain(self.y_axis.iter())
                .any(|axis| axis.is_animating(now))
    }

    fn element_count(&self) -> usize {
        self.bars.len()
    }
}
