//! Icon-space geometry shared by the SVG writer and the rasterizer.
//!
//! The icon is a 120x120 box. Shape anchors come from the layout engine;
//! each form offsets and scales them its own way.

use glam::DVec2;

use crate::generate::{LogoShape, ShapeForm};

pub const ICON_SIZE: f64 = 120.0;
pub const ICON_CENTER: DVec2 = DVec2::new(60.0, 60.0);

/// Four-point star drawn in a 100-unit frame, then scaled by `size / 100`.
pub const SPARK_OUTLINE: [DVec2; 8] = [
    DVec2::new(60.0, 10.0),
    DVec2::new(68.0, 40.0),
    DVec2::new(98.0, 48.0),
    DVec2::new(68.0, 56.0),
    DVec2::new(60.0, 86.0),
    DVec2::new(52.0, 56.0),
    DVec2::new(22.0, 48.0),
    DVec2::new(52.0, 40.0),
];
pub const SPARK_PIVOT: DVec2 = DVec2::new(60.0, 50.0);

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Disc { center: DVec2, radius: f64, blur: f64 },
    Ring { center: DVec2, radius: f64, width: f64 },
    /// Axis-aligned rounded rect rotated about `pivot`.
    Bar { origin: DVec2, extent: DVec2, corner: f64, pivot: DVec2, rotation_deg: f64 },
    /// Polygon rotated about `pivot`, then uniformly scaled about the origin.
    Polygon { points: Vec<DVec2>, pivot: DVec2, rotation_deg: f64, scale: f64 },
}

pub fn primitive(shape: &LogoShape) -> Primitive {
    let p = shape.position;
    let s = shape.size;
    match shape.form {
        ShapeForm::Orb => Primitive::Disc {
            center: p + DVec2::splat(30.0),
            radius: s / 3.0,
            blur: shape.blur.unwrap_or(0.0),
        },
        ShapeForm::Beam => Primitive::Bar {
            origin: p,
            extent: DVec2::new(s * 1.6, s / 6.0),
            corner: s / 12.0,
            pivot: p + DVec2::new(s * 0.8, s / 12.0),
            rotation_deg: shape.rotation_deg,
        },
        ShapeForm::Ring => Primitive::Ring {
            center: p + DVec2::splat(40.0),
            radius: s / 2.2,
            width: (s / 12.0).max(2.0),
        },
        ShapeForm::Triangle => Primitive::Polygon {
            points: vec![p + DVec2::new(0.0, s), p + DVec2::new(s / 2.0, 0.0), p + DVec2::new(s, s)],
            pivot: p + DVec2::splat(s / 2.0),
            rotation_deg: shape.rotation_deg,
            scale: 1.0,
        },
        ShapeForm::Spark => Primitive::Polygon {
            points: SPARK_OUTLINE.to_vec(),
            pivot: SPARK_PIVOT,
            rotation_deg: shape.rotation_deg,
            scale: s / 100.0,
        },
    }
}

/// SVG `rotate(deg)` in a y-down frame.
pub fn rotate_about(point: DVec2, pivot: DVec2, rotation_deg: f64) -> DVec2 {
    pivot + DVec2::from_angle(rotation_deg.to_radians()).rotate(point - pivot)
}

/// Start and end of a CSS `linear-gradient(<angle>deg, ...)` line over a box
/// of `size` anchored at the origin. 0deg points up, angles turn clockwise.
pub fn gradient_axis(angle_deg: f64, size: DVec2) -> (DVec2, DVec2) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let dir = DVec2::new(sin, -cos);
    let half = ((size.x * sin).abs() + (size.y * cos).abs()) / 2.0;
    let center = size / 2.0;
    (center - dir * half, center + dir * half)
}

/// Position of `q` along the gradient line, 0 at `start`, 1 at `end`.
pub fn gradient_t(q: DVec2, start: DVec2, end: DVec2) -> f64 {
    let axis = end - start;
    let len2 = axis.length_squared();
    if len2 == 0.0 {
        return 0.0;
    }
    (q - start).dot(axis) / len2
}

impl Primitive {
    /// Coverage in [0, 1] of icon-space point `q`. Hard edges except blurred
    /// discs, which fade linearly over twice the blur radius.
    pub fn coverage(&self, q: DVec2) -> f64 {
        match self {
            Primitive::Disc { center, radius, blur } => {
                let d = q.distance(*center);
                if *blur <= 0.0 {
                    return if d <= *radius { 1.0 } else { 0.0 };
                }
                (0.5 - (d - radius) / (2.0 * blur)).clamp(0.0, 1.0)
            }
            Primitive::Ring { center, radius, width } => {
                if (q.distance(*center) - radius).abs() <= width / 2.0 { 1.0 } else { 0.0 }
            }
            Primitive::Bar { origin, extent, corner, pivot, rotation_deg } => {
                let local = rotate_about(q, *pivot, -rotation_deg);
                let half = *extent / 2.0;
                let r = corner.min(half.x).min(half.y);
                let d = (local - (*origin + half)).abs() - (half - DVec2::splat(r));
                let outside = d.max(DVec2::ZERO).length() + d.x.max(d.y).min(0.0) - r;
                if outside <= 0.0 { 1.0 } else { 0.0 }
            }
            Primitive::Polygon { points, pivot, rotation_deg, scale } => {
                if *scale <= 0.0 {
                    return 0.0;
                }
                let local = rotate_about(q / *scale, *pivot, -rotation_deg);
                if point_in_polygon(local, points) { 1.0 } else { 0.0 }
            }
        }
    }
}

/// Even-odd rule.
pub fn point_in_polygon(q: DVec2, points: &[DVec2]) -> bool {
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > q.y) != (b.y > q.y) && q.x < (b.x - a.x) * (q.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
