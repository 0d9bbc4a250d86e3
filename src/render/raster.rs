//! The render target: an owned premultiplied RGBA8 buffer.
//!
//! Vector primitives go through `vello_cpu` into a transparent layer that is then
//! composited source-over onto the buffer. Rectangle fills and outlines write pixels
//! directly so their bounds are exact.
//!
//! Pixel convention: integer coordinate `x` names the pixel covering `[x, x+1)`.
//! Primitives are shifted half a pixel so a 1px line at `x` lights column `x`, and a
//! circle of radius `r` at `(x, y)` spans pixels `x-r ..= x+r`.

use vello_cpu::kurbo::{Cap, Circle, Shape as _, Stroke};

use crate::foundation::{
    core::{PixelRect, Point, Rgba8},
    error::{MeshError, MeshResult},
};

const CIRCLE_TOLERANCE: f64 = 0.05;

pub struct Raster {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl Raster {
    /// A raster filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba8) -> MeshResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| MeshError::render(format!("canvas width {width} exceeds u16")))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| MeshError::render(format!("canvas height {height} exceeds u16")))?;

        let px = background.to_premul();
        let data = px.repeat(usize::from(width) * usize::from(height));
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Premultiplied RGBA8, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Packed RGB8, dropping alpha. Every pipeline stage keeps the canvas opaque.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }

    /// Overwrite every pixel of `rect` (inclusive) with `color`. Clipped to the raster.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgba8) {
        let Some(rect) = self.clip(rect) else {
            return;
        };
        let px = color.to_premul();
        for y in rect.top..=rect.bottom {
            let row_start = self.offset(rect.left, y);
            let row_end = self.offset(rect.right, y) + 4;
            for dst in self.data[row_start..row_end].chunks_exact_mut(4) {
                dst.copy_from_slice(&px);
            }
        }
    }

    /// Paint a border `width` pixels thick just inside `rect`.
    pub fn stroke_rect_inset(&mut self, rect: PixelRect, color: Rgba8, width: u32) {
        if width == 0 {
            return;
        }
        let band = width - 1;
        let bands = [
            PixelRect {
                bottom: rect.top.saturating_add(band).min(rect.bottom),
                ..rect
            },
            PixelRect {
                top: rect.bottom.saturating_sub(band).max(rect.top),
                ..rect
            },
            PixelRect {
                right: rect.left.saturating_add(band).min(rect.right),
                ..rect
            },
            PixelRect {
                left: rect.right.saturating_sub(band).max(rect.left),
                ..rect
            },
        ];
        for b in bands {
            self.fill_rect(b, color);
        }
    }

    /// Rasterize a batch of primitives in one layer and composite it over the buffer.
    pub fn paint_layer(&mut self, draw: impl FnOnce(&mut Layer)) -> MeshResult<()> {
        let mut layer = Layer {
            ctx: vello_cpu::RenderContext::new(self.width, self.height),
            width: f64::from(self.width),
            height: f64::from(self.height),
            ops: 0,
        };
        draw(&mut layer);
        if layer.ops == 0 {
            return Ok(());
        }

        layer.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        layer.ctx.render_to_pixmap(&mut pixmap);
        over_in_place(&mut self.data, pixmap.data_as_u8_slice())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * usize::from(self.width) + x as usize) * 4
    }

    fn clip(&self, rect: PixelRect) -> Option<PixelRect> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let max_x = self.width() - 1;
        let max_y = self.height() - 1;
        if rect.left > max_x || rect.top > max_y || rect.left > rect.right || rect.top > rect.bottom
        {
            return None;
        }
        Some(PixelRect {
            left: rect.left,
            top: rect.top,
            right: rect.right.min(max_x),
            bottom: rect.bottom.min(max_y),
        })
    }
}

/// One batch of vector primitives, rasterized together.
pub struct Layer {
    ctx: vello_cpu::RenderContext,
    width: f64,
    height: f64,
    ops: usize,
}

impl Layer {
    /// Straight line between two pixel positions. Parts outside the layer are
    /// clipped before rasterization; a line entirely outside draws nothing.
    pub fn line(&mut self, from: Point, to: Point, width: f64, cap: Cap, color: Rgba8) {
        let margin = width + 2.0;
        let Some((from, to)) = clip_segment(
            from,
            to,
            (-margin, -margin),
            (self.width + margin, self.height + margin),
        ) else {
            return;
        };

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(pixel_center(from));
        path.line_to(pixel_center(to));

        self.ctx.set_paint(paint(color));
        self.ctx.set_stroke(Stroke::new(width).with_caps(cap));
        self.ctx.stroke_path(&path);
        self.ops += 1;
    }

    /// Filled circle spanning `center ± radius` pixels inclusive.
    pub fn dot(&mut self, center: Point, radius: f64, color: Rgba8) {
        let circle = Circle::new(pixel_center(center), radius + 0.5);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&circle.to_path(CIRCLE_TOLERANCE));
        self.ops += 1;
    }
}

/// Liang-Barsky clip of segment `a -> b` to the box `min ..= max`.
fn clip_segment(a: Point, b: Point, min: (f64, f64), max: (f64, f64)) -> Option<(Point, Point)> {
    if ![a.x, a.y, b.x, b.y].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    let edges = [
        (-dx, a.x - min.0),
        (dx, max.0 - a.x),
        (-dy, a.y - min.1),
        (dy, max.1 - a.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((
        Point::new(a.x + t0 * dx, a.y + t0 * dy),
        Point::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}

fn pixel_center(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x + 0.5, p.y + 0.5)
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn over_in_place(dst: &mut [u8], src: &[u8]) -> MeshResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MeshError::render(
            "layer composite expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
