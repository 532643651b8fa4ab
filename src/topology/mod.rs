pub mod cell;
pub mod chain;
pub mod skin;

pub use cell::{CellId, CellStore, FaultCell};
pub use chain::{Chain, ChainCache, LinkAxis};
pub use skin::{FaultSkin, SkinId};

use slotmap::SlotMap;

use crate::error::{Result, TopologyError};
use crate::tessellation::{CellQuads, ColorMap, LinkPolyline, QuadStyle};

/// Central arena that owns all fault cells and skins.
///
/// Cells link to each other and to their skin via typed IDs (generational
/// indices), so cyclic links never form ownership cycles.
#[derive(Debug, Default)]
pub struct FaultStore {
    cells: CellStore,
    skins: SlotMap<SkinId, FaultSkin>,
}

impl FaultStore {
    /// Creates a new, empty fault store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Cell operations ---

    /// Inserts a cell and returns its ID.
    pub fn add_cell(&mut self, cell: FaultCell) -> CellId {
        self.cells.insert(cell)
    }

    /// Returns a reference to the cell, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn cell(&self, id: CellId) -> Result<&FaultCell> {
        self.cells.get(id)
    }

    /// Returns a mutable reference to the cell, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn cell_mut(&mut self, id: CellId) -> Result<&mut FaultCell> {
        self.cells.get_mut(id)
    }

    /// Returns the cell arena.
    #[must_use]
    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    /// Links `above` and `below` to each other along dip.
    ///
    /// # Errors
    ///
    /// Returns an error if either cell is not found; no link is set then.
    pub fn link_above_below(&mut self, above: CellId, below: CellId) -> Result<()> {
        self.cells.get(below)?;
        self.cells.get_mut(above)?.below = Some(below);
        self.cells.get_mut(below)?.above = Some(above);
        Ok(())
    }

    /// Links `left` and `right` to each other along strike.
    ///
    /// # Errors
    ///
    /// Returns an error if either cell is not found; no link is set then.
    pub fn link_left_right(&mut self, left: CellId, right: CellId) -> Result<()> {
        self.cells.get(right)?;
        self.cells.get_mut(left)?.right = Some(right);
        self.cells.get_mut(right)?.left = Some(left);
        Ok(())
    }

    // --- Skin operations ---

    /// Inserts an empty skin and returns its ID.
    pub fn add_skin(&mut self) -> SkinId {
        self.skins.insert_with_key(FaultSkin::new)
    }

    /// Returns a reference to the skin, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn skin(&self, id: SkinId) -> Result<&FaultSkin> {
        self.skins
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("skin").into())
    }

    /// Returns a mutable reference to the skin, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn skin_mut(&mut self, id: SkinId) -> Result<&mut FaultSkin> {
        self.skins
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("skin").into())
    }

    /// Iterates over all skins in the store.
    pub fn skins(&self) -> impl Iterator<Item = (SkinId, &FaultSkin)> {
        self.skins.iter()
    }

    /// Adds a skinless cell to a skin.
    ///
    /// # Errors
    ///
    /// Returns an error if either entity is not found, or if the cell
    /// already belongs to a skin.
    pub fn add_to_skin(&mut self, skin: SkinId, cell: CellId) -> Result<()> {
        let Self { cells, skins } = self;
        skins
            .get_mut(skin)
            .ok_or(TopologyError::EntityNotFound("skin"))?
            .add(cell, cells)
    }

    /// Returns the above/below chains of a skin, computing them if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the skin is not found or its links are inconsistent.
    pub fn chains_ab(&mut self, skin: SkinId) -> Result<&[Chain]> {
        let Self { cells, skins } = self;
        skins
            .get_mut(skin)
            .ok_or(TopologyError::EntityNotFound("skin"))?
            .update_chains_ab(cells)
    }

    /// Returns the left/right chains of a skin, computing them if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the skin is not found or its links are inconsistent.
    pub fn chains_lr(&mut self, skin: SkinId) -> Result<&[Chain]> {
        let Self { cells, skins } = self;
        skins
            .get_mut(skin)
            .ok_or(TopologyError::EntityNotFound("skin"))?
            .update_chains_lr(cells)
    }

    /// Returns the cell nearest the likelihood-weighted centroid of a skin.
    ///
    /// # Errors
    ///
    /// Returns an error if the skin is not found, is empty, or has no
    /// positive likelihood.
    pub fn cell_nearest_centroid(&self, skin: SkinId) -> Result<CellId> {
        self.skin(skin)?.cell_nearest_centroid(&self.cells)
    }

    /// Packs the cells of a skin as colored quads.
    ///
    /// # Errors
    ///
    /// Returns an error if the skin is not found.
    pub fn cell_quads<C>(&self, skin: SkinId, style: QuadStyle, cmap: &C) -> Result<CellQuads>
    where
        C: ColorMap + ?Sized,
    {
        self.skin(skin)?.cell_quads(&self.cells, style, cmap)
    }

    /// Packs the chains of a skin as polylines, computing them if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the skin is not found or its links are inconsistent.
    pub fn link_polylines(&mut self, skin: SkinId) -> Result<Vec<LinkPolyline>> {
        let Self { cells, skins } = self;
        skins
            .get_mut(skin)
            .ok_or(TopologyError::EntityNotFound("skin"))?
            .link_polylines(cells)
    }
}
