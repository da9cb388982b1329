//! Board configuration.

use crate::{CoreError, CoreResult, GridDims};

/// What `resize_grid` does with walls that reference cells outside the new
/// dimensions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StaleWallPolicy {
    /// Leave them in the store.  The transition-matrix generator ignores any
    /// wall with an out-of-range endpoint, and they become live again if the
    /// grid grows back.
    #[default]
    Keep,
    /// Delete them as part of the resize.
    Prune,
}

/// Top-level board configuration.
///
/// Typically loaded from a JSON file by the shell and passed to
/// `BoardBuilder`.  Every field has a default, so a partial file is fine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Number of columns.  Default: 1.
    pub width: u32,

    /// Number of rows.  Default: 1.
    pub height: u32,

    /// Drawing-surface width in canvas units, used by the locator.
    pub canvas_width: f64,

    /// Drawing-surface height in canvas units.
    pub canvas_height: f64,

    /// Stale-wall handling on resize.
    pub stale_walls: StaleWallPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width:         1,
            height:        1,
            canvas_width:  800.0,
            canvas_height: 600.0,
            stale_walls:   StaleWallPolicy::Keep,
        }
    }
}

impl BoardConfig {
    /// Check the configuration and return the grid dimensions it describes.
    ///
    /// # Errors
    ///
    /// - [`CoreError::DegenerateGrid`] for a zero width or height.
    /// - [`CoreError::GridTooLarge`] above [`GridDims::MAX_CELLS`] cells.
    /// - [`CoreError::InvalidCanvas`] for a non-finite or non-positive canvas
    ///   extent.
    pub fn validate(&self) -> CoreResult<GridDims> {
        check_canvas(self.canvas_width, self.canvas_height)?;
        GridDims::new(self.width, self.height)
    }
}

/// Reject canvas extents the locator cannot divide by.
pub fn check_canvas(width: f64, height: f64) -> CoreResult<()> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(CoreError::InvalidCanvas { width, height })
    }
}
