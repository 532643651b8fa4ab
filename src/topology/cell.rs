use slotmap::SlotMap;

use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::FaultOrientation;
use crate::math::{Point3, Vector3};

use super::skin::SkinId;

slotmap::new_key_type! {
    /// Unique identifier for a fault cell in the cell store.
    pub struct CellId;
}

/// A single fault sample: position, likelihood, orientation and links.
///
/// Links to neighboring cells are handles into the owning [`CellStore`],
/// so cyclic neighborhoods carry no ownership cycles.
#[derive(Debug, Clone)]
pub struct FaultCell {
    /// Position `(x1, x2, x3)`, with `x1` the depth axis.
    pub point: Point3,
    /// Fault likelihood, `>= 0`.
    pub fl: f32,
    /// Minus-plus fault shift.
    pub smp: f32,
    /// Plus-minus fault shift.
    pub spm: f32,
    /// Strike/dip frame of the cell.
    pub orientation: FaultOrientation,
    /// Neighbor above, along dip.
    pub above: Option<CellId>,
    /// Neighbor below, along dip.
    pub below: Option<CellId>,
    /// Neighbor to the left, along strike.
    pub left: Option<CellId>,
    /// Neighbor to the right, along strike.
    pub right: Option<CellId>,
    skin: Option<SkinId>,
}

impl FaultCell {
    /// Creates an unlinked, skinless cell.
    ///
    /// # Errors
    ///
    /// Returns an error if `fl` is negative or NaN, or if the strike or dip
    /// angle is not finite.
    pub fn new(point: Point3, fl: f32, fp: f32, ft: f32) -> Result<Self> {
        if fl.is_nan() || fl < 0.0 {
            return Err(GeometryError::InvalidLikelihood(fl).into());
        }
        Ok(Self {
            point,
            fl,
            smp: 0.0,
            spm: 0.0,
            orientation: FaultOrientation::from_strike_dip(fp, ft)?,
            above: None,
            below: None,
            left: None,
            right: None,
            skin: None,
        })
    }

    /// Sets the minus-plus and plus-minus shifts.
    #[must_use]
    pub fn with_shifts(mut self, smp: f32, spm: f32) -> Self {
        self.smp = smp;
        self.spm = spm;
        self
    }

    /// Returns the depth coordinate.
    #[must_use]
    pub fn x1(&self) -> f32 {
        self.point.x
    }

    /// Returns the second coordinate.
    #[must_use]
    pub fn x2(&self) -> f32 {
        self.point.y
    }

    /// Returns the third coordinate.
    #[must_use]
    pub fn x3(&self) -> f32 {
        self.point.z
    }

    /// Returns the cell normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        self.orientation.normal()
    }

    /// Returns the skin this cell belongs to, if any.
    #[must_use]
    pub fn skin(&self) -> Option<SkinId> {
        self.skin
    }

    pub(super) fn set_skin(&mut self, skin: SkinId) {
        self.skin = Some(skin);
    }

    /// Returns the squared distance from this cell to `p`.
    #[must_use]
    pub fn distance_squared_to(&self, p: &Point3) -> f32 {
        nalgebra::distance_squared(&self.point, p)
    }

    /// Returns the four corners of a square patch centered on this cell.
    ///
    /// The patch spans `half_size` along both the dip and strike vectors.
    /// Corners wind `(-u,-v)`, `(+u,-v)`, `(+u,+v)`, `(-u,+v)`.
    #[must_use]
    pub fn quad_corners(&self, half_size: f32) -> [Point3; 4] {
        let u = self.orientation.dip_vector() * half_size;
        let v = self.orientation.strike_vector() * half_size;
        let x = self.point;
        [x - u - v, x + u - v, x + u + v, x - u + v]
    }
}

/// Arena that owns all fault cells.
#[derive(Debug, Default)]
pub struct CellStore {
    cells: SlotMap<CellId, FaultCell>,
}

impl CellStore {
    /// Creates a new, empty cell store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a cell and returns its ID.
    pub fn insert(&mut self, cell: FaultCell) -> CellId {
        self.cells.insert(cell)
    }

    /// Returns the number of stored cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the store holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns a reference to the cell, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the store.
    pub fn get(&self, id: CellId) -> Result<&FaultCell> {
        self.cells
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("cell").into())
    }

    /// Returns a mutable reference to the cell, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the store.
    pub fn get_mut(&mut self, id: CellId) -> Result<&mut FaultCell> {
        self.cells
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("cell").into())
    }

    /// Iterates over all cells in the store.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &FaultCell)> {
        self.cells.iter()
    }
}
