use crate::canvas::Canvas;
use crate::error::{IconError, Result};
use crate::recipe::Shape;

/// Render one icon to an encoded PNG byte buffer.
///
/// Allocates a fresh transparent canvas, paints `shapes` in order and encodes
/// the result as RGBA PNG. Pure and stateless: identical inputs produce
/// byte-identical output, and writing the buffer anywhere is the caller's
/// business. An empty shape list is legal and yields a fully transparent
/// image.
///
/// Geometry is validated strictly: any coordinate outside `[0, size)` is an
/// `OutOfBounds` error rather than being clipped.
pub fn render(size: u32, shapes: &[Shape]) -> Result<Vec<u8>> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }
    validate_bounds(size, shapes)?;

    let mut canvas = Canvas::new(size);
    for shape in shapes {
        match shape {
            Shape::Ellipse { bbox, fill } => canvas.fill_ellipse(*bbox, *fill),
            Shape::Polygon { points, fill } => canvas.fill_polygon(points, *fill),
        }
    }
    Ok(canvas.into_png()?)
}

fn validate_bounds(size: u32, shapes: &[Shape]) -> Result<()> {
    for shape in shapes {
        match shape {
            Shape::Ellipse {
                bbox: (x0, y0, x1, y1),
                ..
            } => {
                check_point(size, *x0, *y0)?;
                check_point(size, *x1, *y1)?;
            }
            Shape::Polygon { points, .. } => {
                for &(x, y) in points {
                    check_point(size, x, y)?;
                }
            }
        }
    }
    Ok(())
}

fn check_point(size: u32, x: i64, y: i64) -> Result<()> {
    let limit = size as i64;
    if x < 0 || y < 0 || x >= limit || y >= limit {
        return Err(IconError::OutOfBounds { x, y, size });
    }
    Ok(())
}
