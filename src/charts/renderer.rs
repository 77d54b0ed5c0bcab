//! Static Chart Renderer
//! Renders a chart scene to an SVG document with plotters.
//!
//! The scene is already laid out in surface pixels, so every primitive is
//! drawn straight onto the root drawing area without a coordinate system.

use super::geometry::PointGeom;
use super::scene::{Anchor, Primitive, Scene, Shape};
use egui::Color32;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

/// Largest distance in pixels between a wedge outline and its true arc.
const ARC_TOLERANCE: f64 = 0.25;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Draw(err.to_string())
}

fn rgba(color: Color32) -> RGBAColor {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    RGBAColor(r, g, b, a as f64 / 255.0)
}

fn px(p: PointGeom) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

pub struct SvgRenderer;

impl SvgRenderer {
    /// Render the scene as a standalone SVG document.
    pub fn render(scene: &Scene) -> Result<String, RenderError> {
        let size = (
            scene.width.max(1.0).round() as u32,
            scene.height.max(1.0).round() as u32,
        );
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;
            for primitive in &scene.primitives {
                Self::draw_primitive(&root, primitive)?;
            }
            root.present().map_err(draw_err)?;
        }
        Ok(svg)
    }

    fn draw_primitive<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        primitive: &Primitive,
    ) -> Result<(), RenderError> {
        let fill = primitive.fill.map(|c| rgba(c).filled());
        let stroke = primitive
            .stroke
            .map(|s| rgba(s.color).stroke_width(s.width.round().max(1.0) as u32));

        match &primitive.shape {
            Shape::Rect(rect) => {
                let corners = [
                    px(PointGeom::new(rect.x, rect.y)),
                    px(PointGeom::new(rect.x + rect.width, rect.y + rect.height)),
                ];
                if let Some(style) = fill {
                    area.draw(&Rectangle::new(corners, style)).map_err(draw_err)?;
                }
                if let Some(style) = stroke {
                    area.draw(&Rectangle::new(corners, style)).map_err(draw_err)?;
                }
            }
            Shape::Path(points) => {
                if let Some(style) = stroke {
                    let points: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
                    area.draw(&PathElement::new(points, style)).map_err(draw_err)?;
                }
            }
            Shape::Circle { center, radius } => {
                let radius = radius.round().max(1.0) as i32;
                if let Some(style) = fill {
                    area.draw(&Circle::new(px(*center), radius, style))
                        .map_err(draw_err)?;
                }
                if let Some(style) = stroke {
                    area.draw(&Circle::new(px(*center), radius, style))
                        .map_err(draw_err)?;
                }
            }
            Shape::Wedge { center, wedge } => {
                if wedge.span() <= 0.0 {
                    return Ok(());
                }
                let outline: Vec<(i32, i32)> = wedge
                    .outline(ARC_TOLERANCE)
                    .into_iter()
                    .map(|p| px(p.offset(*center)))
                    .collect();
                if let Some(style) = fill {
                    area.draw(&Polygon::new(outline.clone(), style))
                        .map_err(draw_err)?;
                }
                if let Some(style) = stroke {
                    let mut closed = outline;
                    if let Some(first) = closed.first().copied() {
                        closed.push(first);
                    }
                    area.draw(&PathElement::new(closed, style))
                        .map_err(draw_err)?;
                }
            }
            Shape::Segment { from, to } => {
                if let Some(style) = stroke {
                    area.draw(&PathElement::new(vec![px(*from), px(*to)], style))
                        .map_err(draw_err)?;
                }
            }
            Shape::Text {
                pos,
                text,
                anchor,
                size,
            } => {
                let h_pos = match anchor {
                    Anchor::Middle => HPos::Center,
                    Anchor::End => HPos::Right,
                };
                let color = primitive.fill.map(rgba).unwrap_or(BLACK.to_rgba());
                let style = ("sans-serif", *size)
                    .into_font()
                    .color(&color)
                    .pos(Pos::new(h_pos, VPos::Center));
                area.draw(&Text::new(text.clone(), px(*pos), style))
                    .map_err(draw_err)?;
            }
        }
        Ok(())
    }
}
