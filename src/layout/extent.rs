use crate::{foundation::core::EMPTY_GRID_CELLS, threads::model::ThreadGroup};

/// Number of cells per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Pick the grid for a render.
///
/// An explicit size always gives a square grid, even when threads reach past it.
/// Otherwise the grid is the smallest one holding every referenced cell (skip regions
/// included), `40x40` when there are no threads at all.
pub fn grid_extent(groups: &[ThreadGroup], explicit_size: Option<u32>) -> GridSpec {
    if let Some(size) = explicit_size {
        return GridSpec::square(size);
    }
    if groups.is_empty() {
        return GridSpec::square(EMPTY_GRID_CELLS);
    }

    let (max_x, max_y) = groups
        .iter()
        .flat_map(|g| g.grid_points())
        .fold((0i64, 0i64), |(mx, my), p| (mx.max(p.x), my.max(p.y)));

    GridSpec {
        width: axis_cells(max_x),
        height: axis_cells(max_y),
    }
}

fn axis_cells(max_coord: i64) -> u32 {
    max_coord
        .saturating_add(1)
        .clamp(1, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/extent.rs"]
mod tests;
