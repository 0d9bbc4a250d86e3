//! Tiled checkerboard pattern generator.
//!
//! Each tile is a `unit`-cell square filled with diagonal stitches fanning out from its
//! upper-left corner. Tiles are mirrored by row/column parity so neighbours meet edge to
//! edge, and colored in a two-color checkerboard.

use serde::Serialize;

use crate::{
    foundation::{
        core::GridPoint,
        error::{MeshError, MeshResult},
    },
    threads::model::{PathSegment, ThreadGroup},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileLayout {
    pub columns: u32,
    pub rows: u32,
    /// Tile edge in cells.
    pub unit: u32,
    /// Checkerboard colors: `[even, odd]` by `row + col` parity.
    pub colors: [String; 2],
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            columns: 6,
            rows: 8,
            unit: 5,
            colors: ["red".to_owned(), "blue".to_owned()],
        }
    }
}

/// Stitches of one untransformed tile.
pub fn base_unit(unit: u32) -> Vec<PathSegment> {
    let u = i64::from(unit);
    let fan = (1..=u).map(|k| PathSegment::new((0, k), (k, 0)));
    let closing = (1..u).map(|k| PathSegment::new((k, u), (u, k)));
    fan.chain(closing).collect()
}

/// Mirror a tile-local segment for the tile at (`row`, `col`).
///
/// (even, even) and (odd, odd) tiles keep the base orientation; (even, odd) mirrors
/// horizontally and (odd, even) mirrors vertically.
pub fn orient(seg: PathSegment, row: u32, col: u32, unit: u32) -> PathSegment {
    let u = i64::from(unit);
    let flip = |p: GridPoint| match (row % 2, col % 2) {
        (0, 1) => GridPoint::new(u - p.x, p.y),
        (1, 0) => GridPoint::new(p.x, u - p.y),
        _ => p,
    };
    PathSegment {
        start: flip(seg.start),
        end: flip(seg.end),
    }
}

/// One thread group per tile, in row-major order.
pub fn generate_tiles(layout: &TileLayout) -> Vec<ThreadGroup> {
    let base = base_unit(layout.unit);
    let u = i64::from(layout.unit);

    let mut groups = Vec::with_capacity((layout.rows * layout.columns) as usize);
    for row in 0..layout.rows {
        for col in 0..layout.columns {
            let dx = i64::from(col) * u;
            let dy = i64::from(row) * u;
            let paths = base
                .iter()
                .map(|seg| {
                    let s = orient(*seg, row, col, layout.unit);
                    PathSegment::new(
                        (s.start.x + dx, s.start.y + dy),
                        (s.end.x + dx, s.end.y + dy),
                    )
                })
                .collect();
            let color = &layout.colors[((row + col) % 2) as usize];
            groups.push(ThreadGroup::drawable(color.clone(), paths));
        }
    }
    groups
}

#[derive(Serialize)]
struct PatternDoc<'a> {
    threads: Vec<ThreadDoc<'a>>,
}

#[derive(Serialize)]
struct ThreadDoc<'a> {
    color: &'a str,
    paths: Vec<PathDoc>,
}

#[derive(Serialize)]
struct PathDoc {
    start: [i64; 2],
    end: [i64; 2],
}

/// Serialize thread groups as a `paths`-schema YAML configuration. Erase regions are
/// not representable as segments and are left out.
pub fn to_yaml(groups: &[ThreadGroup]) -> MeshResult<String> {
    let threads = groups
        .iter()
        .filter_map(|g| match g {
            ThreadGroup::Drawable { color, paths } => Some(ThreadDoc {
                color,
                paths: paths
                    .iter()
                    .map(|p| PathDoc {
                        start: [p.start.x, p.start.y],
                        end: [p.end.x, p.end.y],
                    })
                    .collect(),
            }),
            ThreadGroup::EraseRegion { .. } => None,
        })
        .collect();
    serde_yaml::to_string(&PatternDoc { threads })
        .map_err(|e| MeshError::Other(anyhow::Error::new(e).context("serialize pattern YAML")))
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/generate.rs"]
mod tests;
