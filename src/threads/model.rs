use crate::foundation::core::GridPoint;

/// Color a thread gets when its entry names none.
pub const DEFAULT_THREAD_COLOR: &str = "black";

/// One straight stitch between two grid cells. Undirected for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl PathSegment {
    pub fn new(start: impl Into<GridPoint>, end: impl Into<GridPoint>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn endpoints(&self) -> [GridPoint; 2] {
        [self.start, self.end]
    }
}

/// A normalized thread entry.
///
/// The reserved `skip` color is resolved once during normalization; renderers match on
/// the variant instead of comparing color strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThreadGroup {
    /// A colored thread made of one or more straight segments.
    Drawable {
        color: String,
        paths: Vec<PathSegment>,
    },
    /// Cells to erase back to background. Holds every endpoint that coerced to a
    /// grid coordinate; endpoints that did not are already dropped.
    EraseRegion { points: Vec<GridPoint> },
}

impl ThreadGroup {
    pub fn drawable(color: impl Into<String>, paths: Vec<PathSegment>) -> Self {
        Self::Drawable {
            color: color.into(),
            paths,
        }
    }

    pub fn is_erase_region(&self) -> bool {
        matches!(self, Self::EraseRegion { .. })
    }

    /// Every grid coordinate the group references, skip regions included.
    pub fn grid_points(&self) -> Box<dyn Iterator<Item = GridPoint> + '_> {
        match self {
            Self::Drawable { paths, .. } => Box::new(paths.iter().flat_map(|p| p.endpoints())),
            Self::EraseRegion { points } => Box::new(points.iter().copied()),
        }
    }
}

/// Whether a color string is the reserved erase directive (case-insensitive, trimmed).
pub fn is_skip_color(color: &str) -> bool {
    color.trim().eq_ignore_ascii_case("skip")
}

#[cfg(test)]
#[path = "../../tests/unit/threads/model.rs"]
mod tests;
