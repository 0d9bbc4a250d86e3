//! Skip regions: cells carved out of the pattern.
//!
//! All skip groups of a configuration are merged into one bounding box and erased in a
//! single pass; the box is measured on cell boundaries, not centers.

use crate::{
    foundation::core::{PixelRect, Rgba8},
    layout::canvas::CanvasSpec,
    render::raster::Raster,
    threads::model::ThreadGroup,
};

/// Outline stroke width of the skip debug overlay.
pub const SKIP_OUTLINE_WIDTH: u32 = 2;

/// Union of every skip coordinate, in grid cells (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SkipBBox {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

/// Merge every erase region into one box. `None` when no skip coordinate survived
/// normalization.
pub fn resolve_skip_bbox(groups: &[ThreadGroup]) -> Option<SkipBBox> {
    groups
        .iter()
        .filter_map(|g| match g {
            ThreadGroup::EraseRegion { points } => Some(points),
            ThreadGroup::Drawable { .. } => None,
        })
        .flatten()
        .fold(None, |acc: Option<SkipBBox>, p| {
            Some(match acc {
                None => SkipBBox {
                    min_x: p.x,
                    min_y: p.y,
                    max_x: p.x,
                    max_y: p.y,
                },
                Some(b) => SkipBBox {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            })
        })
}

impl SkipBBox {
    /// Pixel rectangle from the leading boundary of the first cell to the leading
    /// boundary of the cell after the last, clamped into the image.
    pub fn to_pixel_rect(&self, canvas: &CanvasSpec) -> PixelRect {
        let clamp = |v: i64, dim: u32| -> u32 {
            v.clamp(0, i64::from(dim.saturating_sub(1))) as u32
        };
        let (w, h) = (canvas.image_width(), canvas.image_height());
        PixelRect {
            left: clamp(canvas.cell_boundary(self.min_x), w),
            top: clamp(canvas.cell_boundary(self.min_y), h),
            right: clamp(canvas.cell_boundary(self.max_x.saturating_add(1)), w),
            bottom: clamp(canvas.cell_boundary(self.max_y.saturating_add(1)), h),
        }
    }
}

/// Erase the merged skip region to background. Returns the erased rectangle so the
/// pipeline can outline it later.
pub fn erase_skip_region(
    raster: &mut Raster,
    canvas: &CanvasSpec,
    groups: &[ThreadGroup],
) -> Option<PixelRect> {
    let bbox = resolve_skip_bbox(groups)?;
    let rect = bbox.to_pixel_rect(canvas);
    tracing::debug!(?bbox, ?rect, "erasing skip region");
    raster.fill_rect(rect, Rgba8::WHITE);
    Some(rect)
}

/// Stroke the erased rectangle's border in red.
pub fn outline_skip_region(raster: &mut Raster, rect: PixelRect) {
    raster.stroke_rect_inset(rect, Rgba8::RED, SKIP_OUTLINE_WIDTH);
}

#[cfg(test)]
#[path = "../../tests/unit/render/skip.rs"]
mod tests;
