//! Wall records and the per-boundary state machine.

use std::fmt;

use wg_core::{Cell, WallId};

use crate::{WallError, WallResult};

// ── WallKind ──────────────────────────────────────────────────────────────────

/// How mass may cross a wall.  A missing wall is a closed boundary.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WallKind {
    /// Traversable in both directions.
    Open,
    /// Traversable only `from → to`.
    OneWay,
}

impl WallKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WallKind::Open   => "open",
            WallKind::OneWay => "oneway",
        }
    }
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Wall ──────────────────────────────────────────────────────────────────────

/// One wall record.  `from`/`to` carry the direction for `OneWay`; for
/// `Open` they only record which side created it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub from: Cell,
    pub to:   Cell,
    pub kind: WallKind,
    pub id:   WallId,
}

impl Wall {
    /// Where mass leaving `cell` through this wall ends up, or `None` if the
    /// wall cannot be crossed from `cell`.
    ///
    /// `OneWay` walls are crossable only from `from`; `Open` walls from
    /// either end.
    #[inline]
    pub fn exit_from(&self, cell: Cell) -> Option<Cell> {
        if self.from == cell {
            Some(self.to)
        } else if self.to == cell && self.kind == WallKind::Open {
            Some(self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.kind {
            WallKind::Open   => "<->",
            WallKind::OneWay => "->",
        };
        write!(f, "{} {} {} [{}]", self.from, arrow, self.to, self.id)
    }
}

// ── BoundaryKey ───────────────────────────────────────────────────────────────

/// Canonical identifier of the boundary between two adjacent cells.
///
/// The pair is stored with the smaller cell (column-then-row order) first,
/// so `(a, b)` and `(b, a)` produce the same key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct BoundaryKey {
    a: Cell,
    b: Cell,
}

impl BoundaryKey {
    /// # Errors
    ///
    /// [`WallError::NotAdjacent`] unless `x` and `y` share an edge.
    pub fn new(x: Cell, y: Cell) -> WallResult<Self> {
        if !x.is_adjacent(y) {
            return Err(WallError::NotAdjacent(x, y));
        }
        Ok(Self::ordered(x, y))
    }

    /// Key for the `side`/`across` boundary together with the side `side`
    /// sits on.
    ///
    /// # Errors
    ///
    /// [`WallError::NotAdjacent`] unless the cells share an edge.
    pub fn from_side(side: Cell, across: Cell) -> WallResult<(Self, Side)> {
        let key = Self::new(side, across)?;
        let s = if side == key.a { Side::A } else { Side::B };
        Ok((key, s))
    }

    /// Caller guarantees adjacency.
    #[inline]
    fn ordered(x: Cell, y: Cell) -> Self {
        if x <= y { Self { a: x, b: y } } else { Self { a: y, b: x } }
    }

    /// The canonical first cell.
    #[inline]
    pub fn a(self) -> Cell {
        self.a
    }

    /// The canonical second cell.
    #[inline]
    pub fn b(self) -> Cell {
        self.b
    }
}

impl fmt::Display for BoundaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.a, self.b)
    }
}

/// One side of a [`BoundaryKey`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    A,
    B,
}

// ── BoundaryState ─────────────────────────────────────────────────────────────

/// State of a single boundary, relative to its [`BoundaryKey`] orientation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BoundaryState {
    /// No wall record; nothing crosses.
    Closed,
    /// `OneWay` from the key's `a` to its `b`.
    OneWayAB,
    /// `OneWay` from the key's `b` to its `a`.
    OneWayBA,
    /// Crossable both ways.
    Open,
}

impl BoundaryState {
    /// State implied by an (optional) wall on `key`.
    pub fn of(key: BoundaryKey, wall: Option<&Wall>) -> BoundaryState {
        match wall {
            None => BoundaryState::Closed,
            Some(w) if w.kind == WallKind::Open => BoundaryState::Open,
            Some(w) if w.from == key.a() => BoundaryState::OneWayAB,
            Some(_) => BoundaryState::OneWayBA,
        }
    }

    /// `OneWay` state whose source is `side`.
    #[inline]
    fn one_way_from(side: Side) -> BoundaryState {
        match side {
            Side::A => BoundaryState::OneWayAB,
            Side::B => BoundaryState::OneWayBA,
        }
    }

    /// Transition table, keyed on the current state and the side the toggle
    /// was triggered from.
    ///
    /// | state        | toggled from `S`  | toggled from `T` |
    /// |--------------|-------------------|------------------|
    /// | `Closed`     | `OneWay S→T`      | `OneWay T→S`     |
    /// | `OneWay S→T` | `Open`            | `OneWay T→S`     |
    /// | `Open`       | `Closed`          | `Closed`         |
    pub fn toggled(self, side: Side) -> BoundaryState {
        use BoundaryState::*;
        match (self, side) {
            (Closed, s)        => Self::one_way_from(s),
            (OneWayAB, Side::A) => Open,
            (OneWayAB, Side::B) => OneWayBA,
            (OneWayBA, Side::B) => Open,
            (OneWayBA, Side::A) => OneWayAB,
            (Open, _)          => Closed,
        }
    }

    /// `(from, to, kind)` of the wall record that represents this state, or
    /// `None` for `Closed`.  An `Open` wall keeps `prev_from` as its `from`
    /// so promotion never rewrites endpoints.
    pub fn wall_shape(
        self,
        key:       BoundaryKey,
        prev_from: Option<Cell>,
    ) -> Option<(Cell, Cell, WallKind)> {
        match self {
            BoundaryState::Closed   => None,
            BoundaryState::OneWayAB => Some((key.a(), key.b(), WallKind::OneWay)),
            BoundaryState::OneWayBA => Some((key.b(), key.a(), WallKind::OneWay)),
            BoundaryState::Open => {
                let from = prev_from.unwrap_or(key.a());
                let to = if from == key.a() { key.b() } else { key.a() };
                Some((from, to, WallKind::Open))
            }
        }
    }
}

impl fmt::Display for BoundaryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoundaryState::Closed   => "closed",
            BoundaryState::OneWayAB => "oneway(a->b)",
            BoundaryState::OneWayBA => "oneway(b->a)",
            BoundaryState::Open     => "open",
        };
        f.write_str(s)
    }
}
