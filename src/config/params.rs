/// Knobs accepted by the render pipeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Force a square grid of this many cells per side.
    pub size: Option<u32>,
    /// Cell edge in pixels.
    pub cell_size: u32,
    /// Grid line width in pixels.
    pub line_width: u32,
    /// Thread stroke width in pixels.
    pub thread_width: u32,
    /// Enables the knot overlay when set.
    pub knot_color: Option<String>,
    /// Knot lattice spacing in cells. Values below 1 mean 1.
    pub knot_spacing: i64,
    /// Outline the erased skip rectangle in red.
    pub debug_skip: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            size: None,
            cell_size: 20,
            line_width: 1,
            thread_width: 3,
            knot_color: None,
            knot_spacing: 1,
            debug_skip: false,
        }
    }
}

impl RenderParams {
    /// Clamp every numeric knob into its valid range. Never fails.
    pub fn sanitized(&self) -> Self {
        Self {
            size: self.size.map(|s| s.max(1)),
            cell_size: self.cell_size.max(1),
            line_width: self.line_width.max(1),
            thread_width: self.thread_width.max(1),
            knot_color: self
                .knot_color
                .as_ref()
                .map(|c| c.trim().to_owned())
                .filter(|c| !c.is_empty()),
            knot_spacing: self.knot_spacing.max(1),
            debug_skip: self.debug_skip,
        }
    }

    /// Knot spacing as a usable cell count.
    pub fn knot_spacing(&self) -> u32 {
        self.knot_spacing.clamp(1, i64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/params.rs"]
mod tests;
