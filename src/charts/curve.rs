//! Monotone cubic interpolation along x.
//!
//! Produces a smooth path through the vertices that never overshoots
//! between two neighbouring samples (Steffen's method, one-sided tangents
//! at the ends).

use super::geometry::PointGeom;
use lyon::geom::{point, CubicBezierSegment};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(PointGeom),
    LineTo(PointGeom),
    CubicTo {
        c1: PointGeom,
        c2: PointGeom,
        end: PointGeom,
    },
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn slope(a: PointGeom, b: PointGeom) -> f64 {
    let h = b.x - a.x;
    if h == 0.0 {
        0.0
    } else {
        (b.y - a.y) / h
    }
}

/// Tangent at `p1` from its two neighbours.
fn interior_tangent(p0: PointGeom, p1: PointGeom, p2: PointGeom) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = slope(p0, p1);
    let s1 = slope(p1, p2);
    let p = if h0 + h1 == 0.0 {
        0.0
    } else {
        (s0 * h1 + s1 * h0) / (h0 + h1)
    };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_nan() {
        0.0
    } else {
        t
    }
}

/// One-sided tangent at an end, given the tangent at its neighbour.
fn end_tangent(p0: PointGeom, p1: PointGeom, neighbour: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (p1.y - p0.y) / h - neighbour) / 2.0
    }
}

fn cubic(p0: PointGeom, p1: PointGeom, t0: f64, t1: f64) -> PathSegment {
    let dx = (p1.x - p0.x) / 3.0;
    PathSegment::CubicTo {
        c1: PointGeom::new(p0.x + dx, p0.y + dx * t0),
        c2: PointGeom::new(p1.x - dx, p1.y - dx * t1),
        end: p1,
    }
}

/// Path commands through `points`. Repeated vertices are skipped.
pub fn monotone_x(points: &[PointGeom]) -> Vec<PathSegment> {
    let mut pts: Vec<PointGeom> = Vec::with_capacity(points.len());
    for &p in points {
        if pts.last() != Some(&p) {
            pts.push(p);
        }
    }

    match pts.len() {
        0 => Vec::new(),
        1 => vec![PathSegment::MoveTo(pts[0])],
        2 => vec![PathSegment::MoveTo(pts[0]), PathSegment::LineTo(pts[1])],
        n => {
            let mut tangents = vec![0.0; n];
            for i in 1..n - 1 {
                tangents[i] = interior_tangent(pts[i - 1], pts[i], pts[i + 1]);
            }
            tangents[0] = end_tangent(pts[0], pts[1], tangents[1]);
            tangents[n - 1] = end_tangent(pts[n - 2], pts[n - 1], tangents[n - 2]);

            let mut segments = Vec::with_capacity(n);
            segments.push(PathSegment::MoveTo(pts[0]));
            for i in 0..n - 1 {
                segments.push(cubic(pts[i], pts[i + 1], tangents[i], tangents[i + 1]));
            }
            segments
        }
    }
}

/// Approximate the path with a polyline whose chords stay within
/// `tolerance` pixels of the curve.
pub fn flatten(segments: &[PathSegment], tolerance: f64) -> Vec<PointGeom> {
    let mut out = Vec::new();
    let mut cursor = PointGeom::default();
    for segment in segments {
        match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                out.push(p);
                cursor = p;
            }
            PathSegment::CubicTo { c1, c2, end } => {
                let curve = CubicBezierSegment {
                    from: point(cursor.x, cursor.y),
                    ctrl1: point(c1.x, c1.y),
                    ctrl2: point(c2.x, c2.y),
                    to: point(end.x, end.y),
                };
                let mut chords: Vec<PointGeom> = curve
                    .flattened(tolerance)
                    .map(|p| PointGeom::new(p.x, p.y))
                    .collect();
                // Land exactly on the vertex.
                chords.pop();
                out.extend(chords);
                out.push(end);
                cursor = end;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[(f64, f64)]) -> Vec<PointGeom> {
        values.iter().map(|&(x, y)| PointGeom::new(x, y)).collect()
    }

    #[test]
    fn short_inputs() {
        assert!(monotone_x(&[]).is_empty());
        let one = pts(&[(1.0, 2.0)]);
        assert_eq!(monotone_x(&one), vec![PathSegment::MoveTo(one[0])]);
        let two = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(
            monotone_x(&two),
            vec![PathSegment::MoveTo(two[0]), PathSegment::LineTo(two[1])]
        );
    }

    #[test]
    fn passes_through_every_vertex() {
        let input = pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, 1.0), (3.0, 4.0)]);
        let segments = monotone_x(&input);
        assert_eq!(segments.len(), 4);
        let ends: Vec<PointGeom> = segments
            .iter()
            .map(|s| match *s {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
                PathSegment::CubicTo { end, .. } => end,
            })
            .collect();
        assert_eq!(ends, input);
    }

    #[test]
    fn does_not_overshoot_monotone_data() {
        let input = pts(&[(0.0, 0.0), (1.0, 0.1), (2.0, 5.0), (3.0, 5.1), (4.0, 9.0)]);
        let line = flatten(&monotone_x(&input), 0.01);
        for pair in line.windows(2) {
            assert!(pair[1].y >= pair[0].y - 1e-9, "{:?}", pair);
        }
    }

    #[test]
    fn flattened_curve_hits_every_vertex() {
        let input = pts(&[(0.0, 240.0), (110.0, 37.5), (220.0, 180.0), (330.0, 0.0)]);
        let line = flatten(&monotone_x(&input), 0.25);
        assert!(line.len() > input.len());
        for vertex in &input {
            assert!(line.contains(vertex), "{vertex:?} missing");
        }
        assert_eq!(line.first(), input.first());
        assert_eq!(line.last(), input.last());
        assert!(line.windows(2).all(|pair| pair[1].x >= pair[0].x));
    }

    #[test]
    fn flat_local_extremum_has_zero_tangent() {
        let t = interior_tangent(
            PointGeom::new(0.0, 0.0),
            PointGeom::new(1.0, 2.0),
            PointGeom::new(2.0, 0.0),
        );
        assert_eq!(t, 0.0);
    }

    #[test]
    fn repeated_vertices_are_dropped() {
        let input = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(monotone_x(&input).len(), 2);
    }
}
