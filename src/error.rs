use thiserror::Error;

use crate::topology::{CellId, LinkAxis};

/// Top-level error type for fault skin analysis.
#[derive(Debug, Error)]
pub enum FaultError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("skin is empty or has zero total fault likelihood")]
    DegenerateSkin,

    #[error("non-finite {0}")]
    NonFinite(&'static str),

    #[error("fault likelihood {0} is not a non-negative number")]
    InvalidLikelihood(f32),
}

/// Errors related to cells, skins and their links.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("cell {0:?} already belongs to a skin")]
    AlreadyInSkin(CellId),

    #[error("{axis} chains visit {visited} cells but the skin has {members}")]
    InconsistentChains {
        axis: LinkAxis,
        visited: usize,
        members: usize,
    },

    #[error("cell {cell:?} appears in more than one {axis} chain")]
    DuplicateChainCell { axis: LinkAxis, cell: CellId },

    #[error("unterminated {axis} walk starting at cell {start:?}")]
    LinkCycle { axis: LinkAxis, start: CellId },
}

/// Errors related to packing render geometry.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`FaultError`].
pub type Result<T> = std::result::Result<T, FaultError>;
