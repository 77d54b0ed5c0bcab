//! Drawing surface model.
//! A chart renders into a [`Scene`]: a flat, ordered list of primitives in
//! surface pixels. Backends paint scenes; hit testing runs against them.

use super::geometry::{PointGeom, RectGeom, WedgeGeom};
use egui::Color32;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectGeom),
    /// Open polyline.
    Path(Vec<PointGeom>),
    Circle {
        center: PointGeom,
        radius: f64,
    },
    Wedge {
        center: PointGeom,
        wedge: WedgeGeom,
    },
    Segment {
        from: PointGeom,
        to: PointGeom,
    },
    /// Vertically centred on `pos`.
    Text {
        pos: PointGeom,
        text: String,
        anchor: Anchor,
        size: f64,
    },
}

impl Shape {
    pub fn contains(&self, p: PointGeom) -> bool {
        match self {
            Shape::Rect(rect) => rect.contains(p),
            Shape::Circle { center, radius } => {
                (p.x - center.x).hypot(p.y - center.y) <= *radius
            }
            Shape::Wedge { center, wedge } => {
                wedge.contains(PointGeom::new(p.x - center.x, p.y - center.y))
            }
            Shape::Path(_) | Shape::Segment { .. } | Shape::Text { .. } => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub fill: Option<Color32>,
    pub stroke: Option<Stroke>,
    /// Index of the data-bound element this primitive draws, if any.
    pub element: Option<usize>,
}

impl Primitive {
    pub fn filled(shape: Shape, color: Color32) -> Self {
        Self {
            shape,
            fill: Some(color),
            stroke: None,
            element: None,
        }
    }

    pub fn stroked(shape: Shape, width: f64, color: Color32) -> Self {
        Self {
            shape,
            fill: None,
            stroke: Some(Stroke { width, color }),
            element: None,
        }
    }

    pub fn with_stroke(mut self, width: f64, color: Color32) -> Self {
        self.stroke = Some(Stroke { width, color });
        self
    }

    pub fn for_element(mut self, index: usize) -> Self {
        self.element = Some(index);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Topmost data-bound element under `p`.
    pub fn hit_test(&self, p: PointGeom) -> Option<usize> {
        self.primitives
            .iter()
            .rev()
            .filter(|prim| prim.element.is_some())
            .find(|prim| prim.shape.contains(p))
            .and_then(|prim| prim.element)
    }

    /// Primitives bound to data elements, in element order.
    pub fn elements(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| p.element.is_some())
    }
}
