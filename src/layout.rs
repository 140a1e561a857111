//! Fixed robot-face compositions.
//!
//! Each design lists its primitives in paint order at its reference canvas
//! size. Composing at any other size scales the whole layout uniformly.

use crate::shape::{Bounds, Color, ShapePrimitive, rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Design {
    /// Blue head with three antennas, drawn at 1024 px.
    Robot,
    /// Steel-blue head with two antennas, drawn at 512 px.
    Simple,
}

impl Design {
    pub fn name(self) -> &'static str {
        match self {
            Design::Robot => "robot",
            Design::Simple => "simple",
        }
    }

    /// Canvas edge at which the layout's literal coordinates apply.
    pub fn reference_size(self) -> u32 {
        match self {
            Design::Robot => 1024,
            Design::Simple => 512,
        }
    }

    pub fn primitives(self) -> Vec<ShapePrimitive> {
        match self {
            Design::Robot => robot(),
            Design::Simple => simple(),
        }
    }
}

/// Stem plus round tip, stem drawn first.
fn antenna(stem: Bounds, tip: Bounds, color: Color) -> [ShapePrimitive; 2] {
    [
        ShapePrimitive::Rect { bounds: stem, fill: color },
        ShapePrimitive::Ellipse { bounds: tip, fill: color },
    ]
}

/// Eye whites for both eyes, then both pupils.
fn eyes(
    centers: [(f32, f32); 2],
    eye_radius: f32,
    pupil_radius: f32,
    pupil: Color,
) -> [ShapePrimitive; 4] {
    let white = rgb(255, 255, 255);
    let [(lx, ly), (rx, ry)] = centers;
    [
        ShapePrimitive::circle(lx, ly, eye_radius, white),
        ShapePrimitive::circle(rx, ry, eye_radius, white),
        ShapePrimitive::circle(lx, ly, pupil_radius, pupil),
        ShapePrimitive::circle(rx, ry, pupil_radius, pupil),
    ]
}

fn smile(bounds: Bounds, width: f32) -> ShapePrimitive {
    ShapePrimitive::Arc {
        bounds,
        start_deg: 0.0,
        end_deg: 180.0,
        width,
        stroke: rgb(255, 255, 255),
    }
}

fn robot() -> Vec<ShapePrimitive> {
    let head = rgb(66, 133, 244);
    let pupil = rgb(33, 66, 133);
    let antenna_color = rgb(52, 168, 83);
    let c = 512.0;

    let mut shapes = vec![ShapePrimitive::RoundedRect {
        bounds: Bounds::new(200.0, 200.0, 824.0, 700.0),
        radius: 80.0,
        fill: head,
    }];
    shapes.extend(antenna(
        Bounds::new(c - 100.0, 140.0, c - 80.0, 200.0),
        Bounds::new(c - 115.0, 110.0, c - 65.0, 160.0),
        antenna_color,
    ));
    shapes.extend(antenna(
        Bounds::new(c + 80.0, 140.0, c + 100.0, 200.0),
        Bounds::new(c + 65.0, 110.0, c + 115.0, 160.0),
        antenna_color,
    ));
    shapes.extend(antenna(
        Bounds::new(c - 10.0, 150.0, c + 10.0, 200.0),
        Bounds::new(c - 25.0, 115.0, c + 25.0, 165.0),
        antenna_color,
    ));
    shapes.extend(eyes([(350.0, 350.0), (674.0, 350.0)], 70.0, 30.0, pupil));
    shapes.push(smile(Bounds::new(350.0, 460.0, 674.0, 560.0), 10.0));
    shapes
}

fn simple() -> Vec<ShapePrimitive> {
    let head = rgb(70, 130, 180);
    let pupil = rgb(25, 25, 112);
    let antenna_color = rgb(50, 205, 50);
    let c = 256.0;
    let margin = 80.0;

    let mut shapes = vec![ShapePrimitive::RoundedRect {
        bounds: Bounds::new(margin, margin, 512.0 - margin, 512.0 - margin),
        radius: 60.0,
        fill: head,
    }];
    shapes.extend(antenna(
        Bounds::new(c - 60.0, 40.0, c - 40.0, margin),
        Bounds::new(c - 75.0, 10.0, c - 25.0, 60.0),
        antenna_color,
    ));
    shapes.extend(antenna(
        Bounds::new(c + 40.0, 40.0, c + 60.0, margin),
        Bounds::new(c + 25.0, 10.0, c + 75.0, 60.0),
        antenna_color,
    ));
    let eye_y = c - 30.0;
    shapes.extend(eyes([(c - 80.0, eye_y), (c + 80.0, eye_y)], 50.0, 20.0, pupil));
    let mouth_y = c + 80.0;
    shapes.push(smile(
        Bounds::new(c - 100.0, mouth_y - 50.0, c + 100.0, mouth_y + 50.0),
        8.0,
    ));
    shapes
}
