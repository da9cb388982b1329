//! The `WallStore` — boundary-keyed wall records plus the id counter.

use tracing::trace;

use wg_core::{Cell, GridDims, WallId};

use crate::{BoundaryKey, BoundaryState, Wall, WallKind, WallResult};

#[cfg(feature = "fx-hash")]
type WallMap = rustc_hash::FxHashMap<BoundaryKey, Wall>;
#[cfg(not(feature = "fx-hash"))]
type WallMap = std::collections::HashMap<BoundaryKey, Wall>;

/// What a single [`WallStore::toggle`] did to its boundary.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ToggleOutcome {
    /// Closed → OneWay; a new wall with this id was created.
    Created(WallId),
    /// OneWay reversed in place.
    Reversed(WallId),
    /// OneWay promoted to Open in place.
    Opened(WallId),
    /// Open → Closed; the wall with this id was deleted.
    Removed(WallId),
    /// Nothing changed (used by callers that reject a toggle before it
    /// reaches the store).
    Unchanged,
}

impl ToggleOutcome {
    #[inline]
    pub fn changed(self) -> bool {
        !matches!(self, ToggleOutcome::Unchanged)
    }
}

/// Holds every wall, at most one per boundary.
///
/// Walls are indexed by their canonical [`BoundaryKey`], so boundary lookup
/// is O(1) and endpoint lookup checks the four boundaries around a cell.
/// The store knows nothing about grid dimensions; callers reject
/// out-of-range cells before mutating it.
#[derive(Clone, Debug, Default)]
pub struct WallStore {
    walls:    WallMap,
    next_id:  WallId,
    revision: u64,
}

impl WallStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Bumped by every mutation.  Lets a shell cheaply detect that its
    /// cached matrix is out of date.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All walls whose `from` or `to` is `cell`, ascending by id.
    pub fn find_by_endpoint(&self, cell: Cell) -> Vec<&Wall> {
        let mut found: Vec<&Wall> = cell
            .neighbours()
            .into_iter()
            .filter_map(|n| self.find_boundary(cell, n))
            .collect();
        found.sort_unstable_by_key(|w| w.id);
        found
    }

    /// The wall on the boundary between `a` and `b`, in either direction.
    ///
    /// Returns `None` for a closed boundary and for non-adjacent cells.
    pub fn find_boundary(&self, a: Cell, b: Cell) -> Option<&Wall> {
        let key = BoundaryKey::new(a, b).ok()?;
        self.walls.get(&key)
    }

    /// Look a wall up by id.  Linear; ids are for diagnostics, not hot paths.
    pub fn get(&self, id: WallId) -> Option<&Wall> {
        self.walls.values().find(|w| w.id == id)
    }

    /// Current automaton state of the `a`/`b` boundary.
    ///
    /// # Errors
    ///
    /// [`WallError::NotAdjacent`](crate::WallError::NotAdjacent) for cells
    /// that do not share an edge.
    pub fn state(&self, a: Cell, b: Cell) -> WallResult<BoundaryState> {
        let key = BoundaryKey::new(a, b)?;
        Ok(BoundaryState::of(key, self.walls.get(&key)))
    }

    /// All walls, ascending by id (creation order).
    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        let mut all: Vec<&Wall> = self.walls.values().collect();
        all.sort_unstable_by_key(|w| w.id);
        all.into_iter()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Advance the `side`/`across` boundary one step through its cycle,
    /// treating `side` as the cell the toggle was triggered from.
    ///
    /// ```text
    /// Closed      → OneWay side→across  (new id)
    /// OneWay x→side → OneWay side→x     (same id)
    /// OneWay side→x → Open              (same id)
    /// Open        → Closed              (wall deleted)
    /// ```
    ///
    /// # Errors
    ///
    /// [`WallError::NotAdjacent`](crate::WallError::NotAdjacent) if the cells
    /// do not share an edge.
    pub fn toggle(&mut self, side: Cell, across: Cell) -> WallResult<ToggleOutcome> {
        let (key, toggling) = BoundaryKey::from_side(side, across)?;

        let current = self.walls.get(&key).copied();
        let before = BoundaryState::of(key, current.as_ref());
        let after = before.toggled(toggling);

        let outcome = match after.wall_shape(key, current.map(|w| w.from)) {
            Some((from, to, kind)) => {
                let (id, outcome) = match current {
                    None => {
                        let id = self.allocate_id();
                        (id, ToggleOutcome::Created(id))
                    }
                    Some(old) if kind == WallKind::Open => (old.id, ToggleOutcome::Opened(old.id)),
                    Some(old) => (old.id, ToggleOutcome::Reversed(old.id)),
                };
                self.walls.insert(key, Wall { from, to, kind, id });
                outcome
            }
            None => match self.walls.remove(&key) {
                Some(old) => ToggleOutcome::Removed(old.id),
                None => ToggleOutcome::Unchanged,
            },
        };

        self.revision += 1;
        trace!(boundary = %key, from_side = %side, %before, %after, "wall toggled");
        Ok(outcome)
    }

    /// Put a wall on the `from`/`to` boundary directly, replacing whatever
    /// was there.  A replaced wall keeps its id.
    ///
    /// # Errors
    ///
    /// [`WallError::NotAdjacent`](crate::WallError::NotAdjacent) if the cells
    /// do not share an edge.
    pub fn insert(&mut self, from: Cell, to: Cell, kind: WallKind) -> WallResult<WallId> {
        let key = BoundaryKey::new(from, to)?;
        let id = match self.walls.get(&key) {
            Some(old) => old.id,
            None => self.allocate_id(),
        };
        self.walls.insert(key, Wall { from, to, kind, id });
        self.revision += 1;
        Ok(id)
    }

    /// Close the `a`/`b` boundary, returning the wall that was there.
    pub fn remove(&mut self, a: Cell, b: Cell) -> Option<Wall> {
        let key = BoundaryKey::new(a, b).ok()?;
        let removed = self.walls.remove(&key);
        if removed.is_some() {
            self.revision += 1;
        }
        removed
    }

    /// Drop every wall with an endpoint outside `dims`.  Returns how many
    /// were removed.
    pub fn prune_outside(&mut self, dims: GridDims) -> usize {
        let before = self.walls.len();
        self.walls
            .retain(|_, w| dims.contains(w.from) && dims.contains(w.to));
        let pruned = before - self.walls.len();
        if pruned > 0 {
            self.revision += 1;
        }
        pruned
    }

    /// Remove all walls.  The id counter keeps running.
    pub fn clear(&mut self) {
        if !self.walls.is_empty() {
            self.walls.clear();
            self.revision += 1;
        }
    }

    fn allocate_id(&mut self) -> WallId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}
