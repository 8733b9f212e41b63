use image::Rgba;

/// One draw instruction. Instructions are applied in order, so later fills
/// paint over earlier ones where they overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Filled ellipse inscribed in an inclusive bounding box `(x0, y0, x1, y1)`
    Ellipse {
        bbox: (i64, i64, i64, i64),
        fill: Rgba<u8>,
    },
    /// Filled polygon over an ordered, implicitly closed vertex list
    Polygon {
        points: Vec<(i64, i64)>,
        fill: Rgba<u8>,
    },
}

/// A named icon design.
///
/// Recipes are data, not drawing code: each one expands to the ordered shape
/// list for a given pixel size. Margins are derived as integer fractions of
/// the size (truncating division), so the artwork scales with the canvas.
/// Sizes below 8 derive a zero outer margin whose bounding box touches the
/// canvas edge and is rejected by the renderer's bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Record button: red circle with a darker center
    Record,
    /// Playback button: light blue disc with a white play triangle
    Playback,
}

impl Recipe {
    /// Configuration names of all known recipes.
    pub const NAMES: &'static [&'static str] = &["record", "playback"];

    /// Look up a recipe by its configuration name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Recipe> {
        match name.to_ascii_lowercase().as_str() {
            "record" => Some(Recipe::Record),
            "playback" => Some(Recipe::Playback),
            _ => None,
        }
    }

    /// Expand the design into draw instructions for a `size x size` canvas.
    pub fn shapes(&self, size: u32) -> Vec<Shape> {
        let size = size as i64;
        match self {
            Recipe::Record => {
                let margin = size / 8;
                let inner_margin = size / 4;
                vec![
                    Shape::Ellipse {
                        bbox: (margin, margin, size - margin, size - margin),
                        fill: Rgba([244, 67, 54, 255]), // #f44336
                    },
                    Shape::Ellipse {
                        bbox: (
                            inner_margin,
                            inner_margin,
                            size - inner_margin,
                            size - inner_margin,
                        ),
                        fill: Rgba([183, 28, 28, 255]), // #b71c1c
                    },
                ]
            }
            Recipe::Playback => {
                let margin = size / 8;
                let cx = size / 2;
                let cy = size / 2;
                let tri = size / 4;
                vec![
                    Shape::Ellipse {
                        bbox: (margin, margin, size - margin, size - margin),
                        fill: Rgba([79, 195, 247, 255]), // #4fc3f7
                    },
                    Shape::Polygon {
                        points: vec![
                            (cx - tri / 2, cy - tri),
                            (cx - tri / 2, cy + tri),
                            (cx + tri, cy),
                        ],
                        fill: Rgba([255, 255, 255, 255]),
                    },
                ]
            }
        }
    }
}
