//! Geometry of the animated visual elements.
//! Coordinates are pixels; y grows downward.

use super::transition::Interpolate;
use lyon::geom::{point, vector, Angle, Arc};
use lyon::path::Path;
use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointGeom {
    pub x: f64,
    pub y: f64,
}

impl PointGeom {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: PointGeom) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

impl Interpolate for PointGeom {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self::new(self.x.interpolate(&to.x, t), self.y.interpolate(&to.y, t))
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectGeom {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectGeom {
    pub fn contains(&self, p: PointGeom) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn offset(self, by: PointGeom) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
            ..self
        }
    }
}

impl Interpolate for RectGeom {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            x: self.x.interpolate(&to.x, t),
            y: self.y.interpolate(&to.y, t),
            width: self.width.interpolate(&to.width, t),
            height: self.height.interpolate(&to.height, t),
        }
    }
}

/// Annular sector around an implicit centre. Angles are radians, clockwise
/// from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WedgeGeom {
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl WedgeGeom {
    /// Position at `angle` and `radius` relative to the centre.
    pub fn polar(angle: f64, radius: f64) -> PointGeom {
        PointGeom::new(radius * angle.sin(), -radius * angle.cos())
    }

    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// `p` is relative to the centre.
    pub fn contains(&self, p: PointGeom) -> bool {
        let r = p.x.hypot(p.y);
        if r < self.inner_radius || r > self.outer_radius || self.span() <= 0.0 {
            return false;
        }
        let angle = p.x.atan2(-p.y).rem_euclid(TAU);
        angle >= self.start_angle && angle < self.end_angle
    }

    /// The arc of this wedge at `radius`. Wedge angles run clockwise from
    /// twelve o'clock; lyon measures from three o'clock in y-down space.
    fn arc(&self, radius: f64) -> Arc<f64> {
        Arc {
            center: point(0.0, 0.0),
            radii: vector(radius, radius),
            start_angle: Angle::radians(self.start_angle - FRAC_PI_2),
            sweep_angle: Angle::radians(self.span()),
            x_rotation: Angle::radians(0.0),
        }
    }

    fn arc_points(&self, radius: f64, tolerance: f64) -> Vec<PointGeom> {
        let arc = self.arc(radius);
        std::iter::once(arc.from())
            .chain(arc.flattened(tolerance))
            .map(|p| PointGeom::new(p.x, p.y))
            .collect()
    }

    /// Closed outline relative to the centre. Arcs are flattened so no chord
    /// strays more than `tolerance` pixels from the true curve.
    pub fn outline(&self, tolerance: f64) -> Vec<PointGeom> {
        let mut points = self.arc_points(self.outer_radius, tolerance);
        if self.inner_radius > 0.0 {
            let mut inner = self.arc_points(self.inner_radius, tolerance);
            inner.reverse();
            points.extend(inner);
        } else {
            points.push(PointGeom::default());
        }
        points
    }

    /// Fill triangles relative to the centre. Empty for zero-span wedges.
    pub fn tessellate(&self, tolerance: f64) -> Triangles {
        if self.span() <= 0.0 || self.outer_radius <= 0.0 {
            return Triangles::default();
        }

        let to_lyon = |p: &PointGeom| lyon::math::point(p.x as f32, p.y as f32);
        let outline = self.outline(tolerance);
        let mut builder = Path::builder();
        builder.begin(to_lyon(&outline[0]));
        for p in &outline[1..] {
            builder.line_to(to_lyon(p));
        }
        builder.end(true);
        let path = builder.build();

        let mut buffers: VertexBuffers<PointGeom, u32> = VertexBuffers::new();
        let result = FillTessellator::new().tessellate_path(
            &path,
            &FillOptions::tolerance(tolerance as f32),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                let p = vertex.position();
                PointGeom::new(p.x as f64, p.y as f64)
            }),
        );
        if let Err(e) = result {
            tracing::warn!(error = ?e, "wedge tessellation failed");
            return Triangles::default();
        }

        Triangles {
            vertices: buffers.vertices,
            indices: buffers.indices,
        }
    }
}

/// Indexed triangle list, three indices per triangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangles {
    pub vertices: Vec<PointGeom>,
    pub indices: Vec<u32>,
}

impl Triangles {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Interpolate for WedgeGeom {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            start_angle: self.start_angle.interpolate(&to.start_angle, t),
            end_angle: self.end_angle.interpolate(&to.end_angle, t),
            inner_radius: self.inner_radius.interpolate(&to.inner_radius, t),
            outer_radius: self.outer_radius.interpolate(&to.outer_radius, t),
        }
    }
}

/// Vertices of a path. Blends position by position; vertices the source
/// lacks come straight from the target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeom {
    pub points: Vec<PointGeom>,
}

impl Interpolate for PathGeom {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        let points = to
            .points
            .iter()
            .enumerate()
            .map(|(i, target)| match self.points.get(i) {
                Some(current) => current.interpolate(target, t),
                None => *target,
            })
            .collect();
        Self { points }
    }
}

/// Scale domain, animated by the axis overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl Interpolate for Domain {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self::new(self.min.interpolate(&to.min, t), self.max.interpolate(&to.max, t))
    }
}
