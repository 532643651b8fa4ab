mod colormap;
mod quad_style;
mod tessellate_cells;
mod tessellate_links;

pub use colormap::{ColorMap, LinearColorMap};
pub use quad_style::{QuadStyle, ShiftDisplay};
pub use tessellate_cells::TessellateCells;
pub use tessellate_links::TessellateLinks;

use crate::topology::LinkAxis;

/// Packed quads for a group of cells, ready for a quad renderer.
///
/// Each array holds 4 vertices per cell, 3 floats per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellQuads {
    /// Corner coordinates as `(x3, x2, x1)` triples.
    pub xyz: Vec<f32>,
    /// Cell normals as `(w3, w2, w1)` triples, repeated per corner.
    pub uvw: Vec<f32>,
    /// RGB colors, repeated per corner.
    pub rgb: Vec<f32>,
}

impl CellQuads {
    /// Returns the number of quads.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.xyz.len() / 12
    }
}

/// A polyline through one chain of linked cells.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkPolyline {
    /// The link axis of the source chain.
    pub axis: LinkAxis,
    /// Point coordinates as `(x3, x2, x1)` triples.
    pub xyz: Vec<f32>,
}

impl LinkPolyline {
    /// Returns the number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.xyz.len() / 3
    }
}
