use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};
use crate::topology::{CellId, CellStore};

/// Returns the likelihood-weighted centroid of `members`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateSkin`] if `members` is empty or the
/// summed likelihood is not positive.
pub fn weighted_centroid(members: &[CellId], cells: &CellStore) -> Result<Point3> {
    let mut sum = Vector3::zeros();
    let mut weight = 0.0_f32;
    for &id in members {
        let cell = cells.get(id)?;
        sum += cell.point.coords * cell.fl;
        weight += cell.fl;
    }
    if weight.is_nan() || weight <= 0.0 {
        return Err(GeometryError::DegenerateSkin.into());
    }
    Ok(Point3::from(sum / weight))
}

/// Returns the member nearest to `target`. Ties go to the earliest member.
///
/// # Errors
///
/// Returns an error if `members` is empty or holds a stale handle.
pub fn nearest_to(members: &[CellId], cells: &CellStore, target: &Point3) -> Result<CellId> {
    let mut nearest: Option<(CellId, f32)> = None;
    for &id in members {
        let d = cells.get(id)?.distance_squared_to(target);
        if nearest.is_none_or(|(_, dmin)| d < dmin) {
            nearest = Some((id, d));
        }
    }
    nearest
        .map(|(id, _)| id)
        .ok_or_else(|| GeometryError::DegenerateSkin.into())
}

/// Returns the member nearest to the likelihood-weighted centroid.
///
/// # Errors
///
/// Returns an error under the same conditions as [`weighted_centroid`].
pub fn cell_nearest_centroid(members: &[CellId], cells: &CellStore) -> Result<CellId> {
    let centroid = weighted_centroid(members, cells)?;
    nearest_to(members, cells, &centroid)
}
