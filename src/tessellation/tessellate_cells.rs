use crate::error::Result;
use crate::topology::{CellId, CellStore};

use super::{CellQuads, ColorMap, QuadStyle};

/// Tessellates cells into colored, oriented quads.
pub struct TessellateCells<'a> {
    cells: &'a [CellId],
    style: QuadStyle,
}

impl<'a> TessellateCells<'a> {
    /// Creates a new `TessellateCells` operation over `cells`, in order.
    #[must_use]
    pub fn new(cells: &'a [CellId], style: QuadStyle) -> Self {
        Self { cells, style }
    }

    /// Executes the tessellation.
    ///
    /// Each cell yields four corners spanning the quad size along its dip
    /// and strike vectors. Corners and normals are packed as `(x3, x2, x1)`;
    /// all four corners of a cell share the color of the cell's display
    /// value.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell handle is not in `store`.
    pub fn execute<C>(&self, store: &CellStore, cmap: &C) -> Result<CellQuads>
    where
        C: ColorMap + ?Sized,
    {
        let n = self.cells.len() * 4 * 3;
        let mut quads = CellQuads {
            xyz: Vec::with_capacity(n),
            uvw: Vec::with_capacity(n),
            rgb: Vec::with_capacity(n),
        };

        for &id in self.cells {
            let cell = store.get(id)?;
            let w = cell.normal();
            let color = cmap.rgb(self.style.display().value(cell));
            for corner in cell.quad_corners(self.style.size()) {
                quads.xyz.extend_from_slice(&[corner.z, corner.y, corner.x]);
                quads.uvw.extend_from_slice(&[w.z, w.y, w.x]);
                quads.rgb.extend_from_slice(&color);
            }
        }

        Ok(quads)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::tessellation::{LinearColorMap, ShiftDisplay};
    use crate::topology::FaultCell;
    use approx::assert_relative_eq;

    fn store_with(cells: &[(f32, f32, f32)]) -> (CellStore, Vec<CellId>) {
        let mut store = CellStore::new();
        let ids = cells
            .iter()
            .enumerate()
            .map(|(i, &(fl, smp, spm))| {
                let x = f32::from(u8::try_from(i).unwrap());
                let cell = FaultCell::new(Point3::new(x, 2.0, 3.0), fl, 0.0, 90.0)
                    .unwrap()
                    .with_shifts(smp, spm);
                store.insert(cell)
            })
            .collect();
        (store, ids)
    }

    #[test]
    fn four_corners_per_cell() {
        let (store, ids) = store_with(&[(0.5, 0.0, 0.0), (0.9, 0.0, 0.0)]);
        let cmap = LinearColorMap::gray(0.0, 1.0).unwrap();
        let quads = TessellateCells::new(&ids, QuadStyle::default())
            .execute(&store, &cmap)
            .unwrap();
        assert_eq!(quads.quad_count(), 2);
        assert_eq!(quads.xyz.len(), 24);
        assert_eq!(quads.uvw.len(), 24);
        assert_eq!(quads.rgb.len(), 24);
    }

    #[test]
    fn corners_and_normals_are_reversed_axes() {
        let (store, ids) = store_with(&[(0.5, 0.0, 0.0)]);
        let cmap = LinearColorMap::gray(0.0, 1.0).unwrap();
        let quads = TessellateCells::new(&ids, QuadStyle::default())
            .execute(&store, &cmap)
            .unwrap();
        // First corner is x - u/2 - v/2 with u = e1, v = e3.
        assert_relative_eq!(quads.xyz[0], 2.5, epsilon = 1e-5);
        assert_relative_eq!(quads.xyz[1], 2.0, epsilon = 1e-5);
        assert_relative_eq!(quads.xyz[2], -0.5, epsilon = 1e-5);
        // Normal e2 packed as (w3, w2, w1).
        assert_relative_eq!(quads.uvw[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(quads.uvw[1], 1.0, epsilon = 1e-6);
        assert!(quads.uvw[2].abs() < 1e-6);
    }

    #[test]
    fn likelihood_colors_are_capped_at_one() {
        let (store, ids) = store_with(&[(0.25, 0.0, 0.0), (3.0, 0.0, 0.0)]);
        let cmap = LinearColorMap::jet(0.0, 2.0).unwrap();
        let quads = TessellateCells::new(&ids, QuadStyle::default())
            .execute(&store, &cmap)
            .unwrap();
        assert_eq!(quads.rgb[0..3], cmap.rgb(0.25));
        assert_eq!(quads.rgb[12..15], cmap.rgb(1.0));
        assert_eq!(quads.rgb[21..24], cmap.rgb(1.0));
    }

    #[test]
    fn display_mode_changes_only_colors() {
        let (store, ids) = store_with(&[(0.3, 5.0, -5.0), (0.8, 1.0, -1.0)]);
        let cmap = LinearColorMap::jet(-4.0, 4.0).unwrap();
        let run = |display| {
            TessellateCells::new(&ids, QuadStyle::new(1.0, display).unwrap())
                .execute(&store, &cmap)
                .unwrap()
        };
        let fl = run(ShiftDisplay::Likelihood);
        let mp = run(ShiftDisplay::MinusPlus { max: 4.0 });
        let pm = run(ShiftDisplay::PlusMinus { min: -4.0 });

        assert_eq!(fl.xyz, mp.xyz);
        assert_eq!(fl.xyz, pm.xyz);
        assert_eq!(fl.uvw, mp.uvw);
        assert_eq!(fl.uvw, pm.uvw);
        assert_ne!(fl.rgb, mp.rgb);
        assert_ne!(mp.rgb, pm.rgb);

        assert_eq!(mp.rgb[0..3], cmap.rgb(4.0));
        assert_eq!(pm.rgb[0..3], cmap.rgb(-4.0));
        assert_eq!(mp.rgb[12..15], cmap.rgb(1.0));
        assert_eq!(pm.rgb[12..15], cmap.rgb(-1.0));
    }

    #[test]
    fn closure_colormap() {
        let (store, ids) = store_with(&[(0.7, 0.0, 0.0)]);
        let quads = TessellateCells::new(&ids, QuadStyle::default())
            .execute(&store, &|v: f32| [v, v, v])
            .unwrap();
        assert_relative_eq!(quads.rgb[0], 0.7);
    }

    #[test]
    fn stale_cell_fails() {
        let (_, ids) = store_with(&[(0.7, 0.0, 0.0)]);
        let store = CellStore::new();
        let result = TessellateCells::new(&ids, QuadStyle::default())
            .execute(&store, &|v: f32| [v, v, v]);
        assert!(result.is_err());
    }
}
