use crate::error::{GeometryError, Result};
use crate::math::Vector3;

/// Orthonormal frame of a planar fault patch.
///
/// Built from a strike angle `fp` and dip angle `ft`, both in degrees.
/// Axis 1 points down (depth), so a vertical fault (`ft = 90`) has a dip
/// vector of `(1, 0, 0)` and a horizontal normal.
///
/// - `u`: unit dip vector, pointing down the fault.
/// - `v`: unit strike vector, horizontal.
/// - `w`: unit normal, `w = v × u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultOrientation {
    fp: f32,
    ft: f32,
    u: Vector3,
    v: Vector3,
    w: Vector3,
}

impl FaultOrientation {
    /// Creates the frame for the given strike and dip angles in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if either angle is not finite.
    pub fn from_strike_dip(fp: f32, ft: f32) -> Result<Self> {
        if !fp.is_finite() {
            return Err(GeometryError::NonFinite("strike angle").into());
        }
        if !ft.is_finite() {
            return Err(GeometryError::NonFinite("dip angle").into());
        }

        let (sp, cp) = fp.to_radians().sin_cos();
        let (st, ct) = ft.to_radians().sin_cos();

        let u = Vector3::new(st, ct * cp, -ct * sp);
        let v = Vector3::new(0.0, sp, cp);
        let w = Vector3::new(-ct, st * cp, -st * sp);

        Ok(Self { fp, ft, u, v, w })
    }

    /// Returns the strike angle in degrees.
    #[must_use]
    pub fn strike(&self) -> f32 {
        self.fp
    }

    /// Returns the dip angle in degrees.
    #[must_use]
    pub fn dip(&self) -> f32 {
        self.ft
    }

    /// Returns the unit dip vector.
    #[must_use]
    pub fn dip_vector(&self) -> &Vector3 {
        &self.u
    }

    /// Returns the unit strike vector.
    #[must_use]
    pub fn strike_vector(&self) -> &Vector3 {
        &self.v
    }

    /// Returns the unit normal vector.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.w
    }
}

impl Default for FaultOrientation {
    /// A vertical fault striking along axis 3.
    fn default() -> Self {
        Self {
            fp: 0.0,
            ft: 90.0,
            u: Vector3::x(),
            v: Vector3::z(),
            w: Vector3::y(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-6;

    #[test]
    fn frame_is_orthonormal() {
        for &(fp, ft) in &[(0.0, 90.0), (30.0, 60.0), (135.0, 75.0), (270.0, 45.0)] {
            let o = FaultOrientation::from_strike_dip(fp, ft).unwrap();
            assert_relative_eq!(o.dip_vector().norm(), 1.0, epsilon = EPS);
            assert_relative_eq!(o.strike_vector().norm(), 1.0, epsilon = EPS);
            assert_relative_eq!(o.normal().norm(), 1.0, epsilon = EPS);
            assert!(o.dip_vector().dot(o.strike_vector()).abs() < EPS);
            assert!(o.dip_vector().dot(o.normal()).abs() < EPS);
            assert!(o.strike_vector().dot(o.normal()).abs() < EPS);
        }
    }

    #[test]
    fn normal_is_strike_cross_dip() {
        let o = FaultOrientation::from_strike_dip(40.0, 70.0).unwrap();
        assert_relative_eq!(o.strike(), 40.0);
        assert_relative_eq!(o.dip(), 70.0);
        let w = o.strike_vector().cross(o.dip_vector());
        assert!((w - o.normal()).norm() < EPS);
    }

    #[test]
    fn vertical_fault_dips_straight_down() {
        let o = FaultOrientation::from_strike_dip(0.0, 90.0).unwrap();
        assert!((o.dip_vector() - Vector3::x()).norm() < EPS);
        assert!((o.strike_vector() - Vector3::z()).norm() < EPS);
        assert!(o.normal().x.abs() < EPS);
    }

    #[test]
    fn default_matches_vertical_fault() {
        let o = FaultOrientation::from_strike_dip(0.0, 90.0).unwrap();
        let d = FaultOrientation::default();
        assert!((o.normal() - d.normal()).norm() < EPS);
        assert!((o.dip_vector() - d.dip_vector()).norm() < EPS);
        assert!((o.strike_vector() - d.strike_vector()).norm() < EPS);
    }

    #[test]
    fn non_finite_angles_fail() {
        assert!(FaultOrientation::from_strike_dip(f32::NAN, 90.0).is_err());
        assert!(FaultOrientation::from_strike_dip(0.0, f32::INFINITY).is_err());
    }
}
