use crate::error::Result;
use crate::topology::{CellStore, Chain};

use super::LinkPolyline;

/// Tessellates cell chains into packed polylines.
pub struct TessellateLinks<'a> {
    chains_ab: &'a [Chain],
    chains_lr: &'a [Chain],
}

impl<'a> TessellateLinks<'a> {
    /// Creates a new `TessellateLinks` operation.
    #[must_use]
    pub fn new(chains_ab: &'a [Chain], chains_lr: &'a [Chain]) -> Self {
        Self {
            chains_ab,
            chains_lr,
        }
    }

    /// Executes the tessellation, returning one polyline per chain.
    ///
    /// Above/below chains come first, then left/right chains. Points are
    /// packed as `(x3, x2, x1)` triples. A closed chain repeats its first
    /// cell at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell handle is not in `store`.
    pub fn execute(&self, store: &CellStore) -> Result<Vec<LinkPolyline>> {
        self.chains_ab
            .iter()
            .chain(self.chains_lr)
            .map(|chain| pack_chain(chain, store))
            .collect()
    }
}

fn pack_chain(chain: &Chain, store: &CellStore) -> Result<LinkPolyline> {
    let closing = if chain.is_closed { chain.first() } else { None };
    let mut xyz = Vec::with_capacity(3 * (chain.len() + 1));
    for &id in chain.cells.iter().chain(closing.iter()) {
        let cell = store.get(id)?;
        xyz.extend_from_slice(&[cell.x3(), cell.x2(), cell.x1()]);
    }
    Ok(LinkPolyline {
        axis: chain.axis,
        xyz,
    })
}
