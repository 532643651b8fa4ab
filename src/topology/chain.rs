use std::fmt;

use super::cell::CellId;

/// One of the two independent link directions between fault cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkAxis {
    /// Dip-parallel links (`above`/`below`). Expected to be acyclic.
    AboveBelow,
    /// Strike-parallel links (`left`/`right`). May form closed loops.
    LeftRight,
}

impl fmt::Display for LinkAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AboveBelow => f.write_str("above/below"),
            Self::LeftRight => f.write_str("left/right"),
        }
    }
}

/// A maximal simple path of cells along one link axis.
///
/// Above/below chains run top to bottom. Left/right chains run from their
/// anchor (leftmost cell, or the cell where a loop was entered) to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// The axis this chain follows.
    pub axis: LinkAxis,
    /// The ordered cells of the chain.
    pub cells: Vec<CellId>,
    /// Whether the last cell links back to the first.
    pub is_closed: bool,
}

impl Chain {
    /// Returns the number of cells in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the chain has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the first cell: the top cell or the left anchor.
    #[must_use]
    pub fn first(&self) -> Option<CellId> {
        self.cells.first().copied()
    }
}

/// Lazily computed chain decomposition of one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChainCache {
    /// Not computed since the last change to the skin.
    #[default]
    NotComputed,
    /// The current decomposition.
    Computed(Vec<Chain>),
}

impl ChainCache {
    /// Returns the cached chains, if computed.
    #[must_use]
    pub fn get(&self) -> Option<&[Chain]> {
        match self {
            Self::NotComputed => None,
            Self::Computed(chains) => Some(chains),
        }
    }

    /// Returns `true` if the decomposition is current.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}
