// src/canvas.rs
use crate::utils::{meshgrid, offsets, squared_distance};
use image::{ImageFormat, ImageResult, Rgb, RgbImage};
use ndarray::Zip;
use std::io::{Seek, Write};

/// Outline painted along the inside edge of a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb<u8>,
    pub thickness: u32,
}

/// A filled circle in pixel space, optionally outlined.
///
/// Covers the inclusive box `center ± radius`; a pixel at offset `(dx, dy)`
/// belongs to it when `dx² + dy² <= (radius + 0.5)²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: (i64, i64),
    pub radius: u32,
    pub fill: Rgb<u8>,
    pub stroke: Option<Stroke>,
}

impl Circle {
    pub fn filled(center: (i64, i64), radius: u32, fill: Rgb<u8>) -> Self {
        Self {
            center,
            radius,
            fill,
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, color: Rgb<u8>, thickness: u32) -> Self {
        self.stroke = Some(Stroke { color, thickness });
        self
    }
}

/// The drawing surface the icon renderer paints on.
pub trait Canvas {
    fn fill_background(&mut self, color: Rgb<u8>);

    fn draw_circle(&mut self, circle: &Circle);

    fn encode_png<W: Write + Seek>(&self, writer: &mut W) -> ImageResult<()>;
}

impl Canvas for RgbImage {
    fn fill_background(&mut self, color: Rgb<u8>) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }

    fn draw_circle(&mut self, circle: &Circle) {
        let (cx, cy) = circle.center;
        let r = i64::from(circle.radius);

        // Clip the bounding box to the canvas
        let x0 = (cx - r).max(0);
        let y0 = (cy - r).max(0);
        let x1 = (cx + r).min(i64::from(self.width()) - 1);
        let y1 = (cy + r).min(i64::from(self.height()) - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let (dx, dy) = meshgrid(&offsets(x0, x1, cx), &offsets(y0, y1, cy));
        let d2 = squared_distance(&dx, &dy);

        let outer = f64::from(circle.radius) + 0.5;
        let outer_sq = outer * outer;
        // Squared radius up to which pixels take the fill colour; negative
        // once the stroke swallows the whole disk
        let inner_sq = match circle.stroke {
            Some(stroke) if stroke.thickness > 0 => {
                let inner = outer - f64::from(stroke.thickness);
                if inner <= 0.0 {
                    -1.0
                } else {
                    inner * inner
                }
            }
            _ => outer_sq,
        };

        Zip::indexed(&d2).for_each(|(row, col), &dist| {
            if dist > outer_sq {
                return;
            }
            let color = match circle.stroke {
                Some(stroke) if dist > inner_sq => stroke.color,
                _ => circle.fill,
            };
            let x = (x0 + col as i64) as u32;
            let y = (y0 + row as i64) as u32;
            self.put_pixel(x, y, color);
        });
    }

    fn encode_png<W: Write + Seek>(&self, writer: &mut W) -> ImageResult<()> {
        self.write_to(writer, ImageFormat::Png)
    }
}
