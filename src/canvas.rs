use image::{Rgba, RgbaImage};
use std::io::Cursor;

/// Square RGBA pixel grid that shapes are painted onto.
///
/// Fills overwrite the pixels they cover (painter's algorithm, no blending),
/// so later instructions paint over earlier ones. Every primitive clips per
/// pixel against the canvas bounds.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas of `size x size` pixels.
    pub fn new(size: u32) -> Self {
        Canvas {
            img: RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0])),
        }
    }

    pub fn size(&self) -> u32 {
        self.img.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    /// Fill the ellipse inscribed in the inclusive bounding box
    /// `(x0, y0, x1, y1)`.
    pub fn fill_ellipse(&mut self, bbox: (i64, i64, i64, i64), color: Rgba<u8>) {
        let (x0, y0, x1, y1) = bbox;
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));

        let cx = (x0 + x1) as f64 / 2.0;
        let cy = (y0 + y1) as f64 / 2.0;
        let rx = (x1 - x0) as f64 / 2.0;
        let ry = (y1 - y0) as f64 / 2.0;

        // Division-free form of (dx/rx)^2 + (dy/ry)^2 <= 1 so a degenerate
        // zero-radius box collapses to a line or point instead of NaN.
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx * ry2 + dy * dy * rx2 <= rx2 * ry2 {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Fill the polygon described by `points` (ordered vertices, implicitly
    /// closed). Scanline fill: each row takes the edge crossings with a
    /// half-open rule so shared vertices count once and horizontal edges
    /// contribute nothing.
    pub fn fill_polygon(&mut self, points: &[(i64, i64)], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }

        let mut y_min = i64::MAX;
        let mut y_max = i64::MIN;
        for &(_, y) in points {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        for y in y_min..=y_max {
            let yf = y as f64;
            let mut crossings: Vec<f64> = Vec::new();
            for i in 0..points.len() {
                let (ax, ay) = points[i];
                let (bx, by) = points[(i + 1) % points.len()];
                if (ay <= y && by > y) || (by <= y && ay > y) {
                    let t = (yf - ay as f64) / (by as f64 - ay as f64);
                    crossings.push(ax as f64 + t * (bx as f64 - ax as f64));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                let start = span[0].ceil() as i64;
                let end = span[1].floor() as i64;
                for x in start..=end {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Encode the canvas as a PNG byte buffer, alpha channel preserved.
    pub fn into_png(self) -> Result<Vec<u8>, image::ImageError> {
        let mut buf = Cursor::new(Vec::new());
        self.img.write_to(&mut buf, image::ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    fn put_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }
}
