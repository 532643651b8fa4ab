use tracing::trace;

use crate::error::{Result, TopologyError};
use crate::operations::{
    cell_nearest_centroid, check_disjoint, decompose_above_below, decompose_left_right,
};
use crate::tessellation::{
    CellQuads, ColorMap, LinkPolyline, QuadStyle, TessellateCells, TessellateLinks,
};

use super::cell::{CellId, CellStore};
use super::chain::{Chain, ChainCache};

slotmap::new_key_type! {
    /// Unique identifier for a skin in the fault store.
    pub struct SkinId;
}

/// A connected group of linked fault cells.
///
/// Cells keep insertion order. The first cell added is the seed; growers
/// conventionally add the cell with highest likelihood first, but the skin
/// does not check this.
///
/// Chain decompositions of both link axes are cached and reset by [`add`].
/// Call [`update_chains_ab`] or [`update_chains_lr`] to compute them, then
/// read them through [`chains_ab`] and [`chains_lr`] with shared borrows.
///
/// [`add`]: FaultSkin::add
/// [`update_chains_ab`]: FaultSkin::update_chains_ab
/// [`update_chains_lr`]: FaultSkin::update_chains_lr
/// [`chains_ab`]: FaultSkin::chains_ab
/// [`chains_lr`]: FaultSkin::chains_lr
#[derive(Debug, Clone)]
pub struct FaultSkin {
    id: SkinId,
    seed: Option<CellId>,
    cells: Vec<CellId>,
    chains_ab: ChainCache,
    chains_lr: ChainCache,
}

impl FaultSkin {
    /// Creates an empty skin stored under `id`.
    #[must_use]
    pub(crate) fn new(id: SkinId) -> Self {
        Self {
            id,
            seed: None,
            cells: Vec::new(),
            chains_ab: ChainCache::NotComputed,
            chains_lr: ChainCache::NotComputed,
        }
    }

    /// Returns the ID this skin is stored under.
    #[must_use]
    pub fn id(&self) -> SkinId {
        self.id
    }

    /// Adds a skinless cell to this skin.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::AlreadyInSkin`] if the cell already belongs
    /// to a skin, or an error if the cell is not in `store`. The skin and
    /// the cell are unchanged on error.
    pub fn add(&mut self, cell: CellId, store: &mut CellStore) -> Result<()> {
        let data = store.get_mut(cell)?;
        if data.skin().is_some() {
            return Err(TopologyError::AlreadyInSkin(cell).into());
        }
        data.set_skin(self.id);
        if self.seed.is_none() {
            self.seed = Some(cell);
        }
        self.cells.push(cell);
        self.invalidate_chains();
        trace!(id = ?self.id, ?cell, size = self.cells.len(), "added cell to skin");
        Ok(())
    }

    /// Returns the number of cells in this skin.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if this skin has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cells in insertion order.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Iterates over the cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }

    /// Returns `true` if `cell` is a member of this skin.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns the first cell added, or `None` if empty.
    #[must_use]
    pub fn seed(&self) -> Option<CellId> {
        self.seed
    }

    /// Discards both cached chain decompositions.
    pub fn invalidate_chains(&mut self) {
        self.chains_ab = ChainCache::NotComputed;
        self.chains_lr = ChainCache::NotComputed;
    }

    /// Returns the cached above/below chains, if computed.
    #[must_use]
    pub fn chains_ab(&self) -> Option<&[Chain]> {
        self.chains_ab.get()
    }

    /// Returns the cached left/right chains, if computed.
    #[must_use]
    pub fn chains_lr(&self) -> Option<&[Chain]> {
        self.chains_lr.get()
    }

    /// Computes the above/below chains if they are not cached, and returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the links are inconsistent; see
    /// [`decompose_above_below`]. The cache stays empty on error.
    pub fn update_chains_ab(&mut self, store: &CellStore) -> Result<&[Chain]> {
        if !self.chains_ab.is_computed() {
            self.chains_ab = ChainCache::Computed(decompose_above_below(&self.cells, store)?);
        }
        Ok(self.chains_ab.get().unwrap_or_default())
    }

    /// Computes the left/right chains if they are not cached, and returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the links are inconsistent; see
    /// [`decompose_left_right`]. The cache stays empty on error.
    pub fn update_chains_lr(&mut self, store: &CellStore) -> Result<&[Chain]> {
        if !self.chains_lr.is_computed() {
            self.chains_lr = ChainCache::Computed(decompose_left_right(&self.cells, store)?);
        }
        Ok(self.chains_lr.get().unwrap_or_default())
    }

    /// Checks that no cell appears twice within either cached decomposition.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DuplicateChainCell`] on the first repeat.
    pub fn check_chains(&self) -> Result<()> {
        for chains in [self.chains_ab(), self.chains_lr()].into_iter().flatten() {
            check_disjoint(chains)?;
        }
        Ok(())
    }

    /// Returns the cell nearest the likelihood-weighted centroid of this skin.
    ///
    /// # Errors
    ///
    /// Returns an error if the skin is empty or its total likelihood is not
    /// positive.
    pub fn cell_nearest_centroid(&self, store: &CellStore) -> Result<CellId> {
        cell_nearest_centroid(&self.cells, store)
    }

    /// Packs the cells of this skin as colored quads.
    ///
    /// # Errors
    ///
    /// Returns an error if a member is not in `store`.
    pub fn cell_quads<C>(
        &self,
        store: &CellStore,
        style: QuadStyle,
        cmap: &C,
    ) -> Result<CellQuads>
    where
        C: ColorMap + ?Sized,
    {
        TessellateCells::new(&self.cells, style).execute(store, cmap)
    }

    /// Packs every above/below chain, then every left/right chain, as a polyline.
    ///
    /// Computes the chain decompositions first if they are not cached.
    ///
    /// # Errors
    ///
    /// Returns an error if either decomposition fails.
    pub fn link_polylines(&mut self, store: &CellStore) -> Result<Vec<LinkPolyline>> {
        self.update_chains_ab(store)?;
        self.update_chains_lr(store)?;
        let ab = self.chains_ab().unwrap_or_default();
        let lr = self.chains_lr().unwrap_or_default();
        TessellateLinks::new(ab, lr).execute(store)
    }
}
