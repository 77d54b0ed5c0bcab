//! Chart Viewer Widget
//! Paints a chart's scene with the egui painter and feeds pointer hover back
//! into the chart.

use crate::charts::{Anchor, Chart, PointGeom, Primitive, Scene, Shape};
use egui::{pos2, vec2, Align2, Color32, FontId, Mesh, Painter, Pos2, Sense, Stroke, Vec2};

/// Largest distance in pixels between a wedge outline and its true arc.
const ARC_TOLERANCE: f64 = 0.25;

/// Canvas that draws one chart at a time.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    /// Allocate the chart's surface, update hover from the pointer and paint
    /// the scene as of `now`.
    pub fn show(&self, ui: &mut egui::Ui, chart: &mut dyn Chart, now: f64) {
        let size = vec2(chart.config().width as f32, chart.config().height as f32);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        // Hover is resolved against the current frame before painting so the
        // highlight shows up without lag.
        let hovered = response.hover_pos().and_then(|pos| {
            let local = pos - rect.min;
            chart
                .scene(now)
                .hit_test(PointGeom::new(local.x as f64, local.y as f64))
        });
        chart.set_hover(hovered);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        Self::paint(&painter, &chart.scene(now), rect.min.to_vec2());
    }

    fn paint(painter: &Painter, scene: &Scene, origin: Vec2) {
        for primitive in &scene.primitives {
            Self::paint_primitive(painter, primitive, origin);
        }
    }

    fn paint_primitive(painter: &Painter, primitive: &Primitive, origin: Vec2) {
        let at = |p: PointGeom| pos2(p.x as f32, p.y as f32) + origin;
        let stroke = primitive
            .stroke
            .map(|s| Stroke::new(s.width as f32, s.color))
            .unwrap_or(Stroke::NONE);

        match &primitive.shape {
            Shape::Rect(r) => {
                let rect = egui::Rect::from_min_size(
                    at(PointGeom::new(r.x, r.y)),
                    vec2(r.width as f32, r.height as f32),
                );
                if let Some(fill) = primitive.fill {
                    painter.rect_filled(rect, 0.0, fill);
                }
                if primitive.stroke.is_some() {
                    painter.rect_stroke(rect, 0.0, stroke);
                }
            }
            Shape::Path(points) => {
                let points: Vec<Pos2> = points.iter().copied().map(at).collect();
                painter.add(egui::Shape::line(points, stroke));
            }
            Shape::Circle { center, radius } => {
                let center = at(*center);
                if let Some(fill) = primitive.fill {
                    painter.circle_filled(center, *radius as f32, fill);
                }
                if primitive.stroke.is_some() {
                    painter.circle_stroke(center, *radius as f32, stroke);
                }
            }
            Shape::Wedge { center, wedge } => {
                let to_screen = |p: PointGeom| at(p.offset(*center));
                if let Some(fill) = primitive.fill {
                    let triangles = wedge.tessellate(ARC_TOLERANCE);
                    if !triangles.is_empty() {
                        let mut mesh = Mesh::default();
                        for vertex in triangles.vertices {
                            mesh.colored_vertex(to_screen(vertex), fill);
                        }
                        mesh.indices = triangles.indices;
                        painter.add(egui::Shape::mesh(mesh));
                    }
                }
                if primitive.stroke.is_some() && wedge.span() > 0.0 {
                    let points: Vec<Pos2> = wedge
                        .outline(ARC_TOLERANCE)
                        .into_iter()
                        .map(to_screen)
                        .collect();
                    painter.add(egui::Shape::closed_line(points, stroke));
                }
            }
            Shape::Segment { from, to } => {
                painter.line_segment([at(*from), at(*to)], stroke);
            }
            Shape::Text {
                pos,
                text,
                anchor,
                size,
            } => {
                let align = match anchor {
                    Anchor::Middle => Align2::CENTER_CENTER,
                    Anchor::End => Align2::RIGHT_CENTER,
                };
                painter.text(
                    at(*pos),
                    align,
                    text,
                    FontId::proportional(*size as f32),
                    primitive.fill.unwrap_or(Color32::BLACK),
                );
            }
        }
    }
}
