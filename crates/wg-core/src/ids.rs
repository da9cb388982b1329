//! Strongly typed wall identifier.
//!
//! `WallId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  Ids come from a per-store counter, increase
//! monotonically, and are never reused after a wall is deleted.

use std::fmt;

/// Identity of one wall record for the lifetime of its store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallId(pub u64);

impl WallId {
    pub const FIRST: WallId = WallId(0);

    /// The id handed out after `self`.
    #[inline(always)]
    pub fn next(self) -> WallId {
        WallId(self.0 + 1)
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WallId({})", self.0)
    }
}
