use image::{Rgba, RgbaImage};
use tiny_skia::Pixmap;
use tracing::debug;

use crate::error::IconError;
use crate::layout::Design;
use crate::shape::ShapePrimitive;

/// Composited raster, straight alpha.
pub type Canvas = RgbaImage;

/// Draws a design at `size` x `size`, scaled from its reference size.
pub fn compose(design: Design, size: u32) -> Result<Canvas, IconError> {
    debug!(design = design.name(), size, "composing icon");
    compose_primitives(&design.primitives(), design.reference_size(), size)
}

/// Paints `shapes` in order onto a fresh transparent canvas.
pub fn compose_primitives(
    shapes: &[ShapePrimitive],
    reference_size: u32,
    size: u32,
) -> Result<Canvas, IconError> {
    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::CanvasAllocation(size))?;
    let scale = size as f32 / reference_size.max(1) as f32;
    for shape in shapes {
        shape.draw(&mut pixmap, scale);
    }
    Ok(to_canvas(&pixmap))
}

fn to_canvas(pixmap: &Pixmap) -> Canvas {
    let mut canvas = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in canvas.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    canvas
}
