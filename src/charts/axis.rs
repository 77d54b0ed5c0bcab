//! Axis and grid overlays.
//! An axis animates its scale domain; ticks are recomputed from the
//! interpolated domain every frame.

use super::geometry::{Domain, PointGeom};
use super::palette::{AXIS_COLOR, GRID_COLOR};
use super::scene::{Anchor, Primitive, Scene, Shape};
use super::transition::Transition;
use crate::layout::LinearScale;

/// Ticks requested per axis.
pub const TICK_COUNT: usize = 4;
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const LABEL_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone)]
pub struct Axis {
    orient: AxisOrient,
    origin: PointGeom,
    range: (f64, f64),
    /// Negative sizes draw ticks across the plot as grid lines.
    tick_size: f64,
    domain: Transition<Domain>,
}

impl Axis {
    /// `origin` is the axis position on the surface; `range` is in pixels
    /// relative to it.
    pub fn new(orient: AxisOrient, origin: PointGeom, range: (f64, f64), domain: Domain) -> Self {
        Self {
            orient,
            origin,
            range,
            tick_size: TICK_SIZE,
            domain: Transition::settled(domain),
        }
    }

    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    pub fn retarget(&mut self, domain: Domain, now: f64, duration: f64) {
        self.domain.retarget(domain, now, duration);
    }

    #[cfg(test)]
    pub fn target_domain(&self) -> Domain {
        *self.domain.target()
    }

    pub fn scale_at(&self, now: f64) -> LinearScale {
        LinearScale::new(self.domain.value_at(now).as_tuple(), self.range)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.domain.is_running(now)
    }

    pub fn draw(&self, now: f64, scene: &mut Scene) {
        let scale = self.scale_at(now);
        let format = scale.tick_format(TICK_COUNT);
        let at = |x: f64, y: f64| PointGeom::new(x, y).offset(self.origin);
        let (r0, r1) = self.range;
        let grid = self.tick_size < 0.0;
        let tick_color = if grid { GRID_COLOR } else { AXIS_COLOR };
        let label_offset = self.tick_size.max(0.0) + TICK_PADDING;

        let domain_line = match self.orient {
            AxisOrient::Bottom => Shape::Segment {
                from: at(r0, 0.0),
                to: at(r1, 0.0),
            },
            AxisOrient::Left => Shape::Segment {
                from: at(0.0, r0),
                to: at(0.0, r1),
            },
        };
        scene.push(Primitive::stroked(domain_line, 1.0, AXIS_COLOR));

        for value in scale.ticks(TICK_COUNT) {
            let pos = scale.apply(value);
            let (tick, label) = match self.orient {
                AxisOrient::Bottom => (
                    Shape::Segment {
                        from: at(pos, 0.0),
                        to: at(pos, self.tick_size),
                    },
                    Shape::Text {
                        pos: at(pos, label_offset + LABEL_SIZE * 0.6),
                        text: format(value),
                        anchor: Anchor::Middle,
                        size: LABEL_SIZE,
                    },
                ),
                AxisOrient::Left => (
                    Shape::Segment {
                        from: at(0.0, pos),
                        to: at(-self.tick_size, pos),
                    },
                    Shape::Text {
                        pos: at(-label_offset, pos),
                        text: format(value),
                        anchor: Anchor::End,
                        size: LABEL_SIZE,
                    },
                ),
            };
            scene.push(Primitive::stroked(tick, 1.0, tick_color));
            scene.push(Primitive::filled(label, AXIS_COLOR));
        }
    }
}
