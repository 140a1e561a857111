//! Shape primitives and their rasterization onto a `tiny_skia::Pixmap`.
//!
//! Coordinates are given in the layout's reference space and multiplied by
//! a uniform scale at draw time. Bounding boxes are inclusive, so
//! `[0, 0, 9, 9]` covers a 10x10 pixel block at scale 1.

use tiny_skia::{FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Straight-alpha RGBA color.
pub type Color = [u8; 4];

/// Opaque color from its channels.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r, g, b, 255]
}

/// Cubic bezier handle length for approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Inclusive pixel box `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Bounds {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of a circle of radius `r` around `(cx, cy)`.
    pub const fn around(cx: f32, cy: f32, r: f32) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    /// Half-open pixel-space rectangle after scaling.
    fn to_rect(self, scale: f32) -> Option<Rect> {
        Rect::from_ltrb(
            self.x0 * scale,
            self.y0 * scale,
            (self.x1 + 1.0) * scale,
            (self.y1 + 1.0) * scale,
        )
    }
}

/// One fixed drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapePrimitive {
    RoundedRect {
        bounds: Bounds,
        radius: f32,
        fill: Color,
    },
    Rect {
        bounds: Bounds,
        fill: Color,
    },
    Ellipse {
        bounds: Bounds,
        fill: Color,
    },
    /// Stroked elliptical arc. Angles are degrees clockwise from 3 o'clock;
    /// the stroke stays inside `bounds`.
    Arc {
        bounds: Bounds,
        start_deg: f32,
        end_deg: f32,
        width: f32,
        stroke: Color,
    },
}

impl ShapePrimitive {
    pub const fn circle(cx: f32, cy: f32, r: f32, fill: Color) -> Self {
        ShapePrimitive::Ellipse {
            bounds: Bounds::around(cx, cy, r),
            fill,
        }
    }

    /// Composites the primitive over `pixmap` (source-over). Degenerate or
    /// fully off-canvas shapes draw nothing.
    pub fn draw(&self, pixmap: &mut Pixmap, scale: f32) {
        match *self {
            ShapePrimitive::RoundedRect { bounds, radius, fill } => {
                let Some(rect) = bounds.to_rect(scale) else { return };
                if let Some(path) = rounded_rect_path(rect, radius * scale) {
                    fill_path(pixmap, &path, fill);
                }
            }
            ShapePrimitive::Rect { bounds, fill } => {
                let Some(rect) = bounds.to_rect(scale) else { return };
                fill_path(pixmap, &PathBuilder::from_rect(rect), fill);
            }
            ShapePrimitive::Ellipse { bounds, fill } => {
                let Some(rect) = bounds.to_rect(scale) else { return };
                if let Some(path) = PathBuilder::from_oval(rect) {
                    fill_path(pixmap, &path, fill);
                }
            }
            ShapePrimitive::Arc {
                bounds,
                start_deg,
                end_deg,
                width,
                stroke,
            } => {
                let Some(rect) = bounds.to_rect(scale) else { return };
                let width = width * scale;
                let Some(path) = arc_path(rect, start_deg, end_deg, width) else { return };
                let stroke_style = Stroke {
                    width,
                    line_cap: LineCap::Butt,
                    ..Stroke::default()
                };
                pixmap.stroke_path(
                    &path,
                    &paint(stroke),
                    &stroke_style,
                    Transform::identity(),
                    None,
                );
            }
        }
    }
}

fn paint(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn fill_path(pixmap: &mut Pixmap, path: &Path, color: Color) {
    pixmap.fill_path(
        path,
        &paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }
    let k = r * KAPPA;
    let (l, t, rr, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rr - r, t);
    pb.cubic_to(rr - r + k, t, rr, t + r - k, rr, t + r);
    pb.line_to(rr, b - r);
    pb.cubic_to(rr, b - r + k, rr - r + k, b, rr - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}

/// Polyline along the centre of the stroke, inset by half the width so the
/// stroke's outer edge touches `rect`.
fn arc_path(rect: Rect, start_deg: f32, end_deg: f32, width: f32) -> Option<Path> {
    let half = width / 2.0;
    let rx = rect.width() / 2.0 - half;
    let ry = rect.height() / 2.0 - half;
    if rx <= 0.0 || ry <= 0.0 {
        return None;
    }
    let cx = rect.left() + rect.width() / 2.0;
    let cy = rect.top() + rect.height() / 2.0;

    let mut end = end_deg;
    while end < start_deg {
        end += 360.0;
    }
    let sweep = end - start_deg;
    let steps = ((sweep / 2.0).ceil() as usize).max(8);

    let mut pb = PathBuilder::new();
    for i in 0..=steps {
        let theta = (start_deg + sweep * i as f32 / steps as f32).to_radians();
        let (x, y) = (cx + rx * theta.cos(), cy + ry * theta.sin());
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    pb.finish()
}
