use crate::error::{Result, TessellationError};
use crate::math::TOLERANCE;

/// Maps a scalar value to an RGB color with components in `[0, 1]`.
pub trait ColorMap {
    /// Returns the color for `value`.
    fn rgb(&self, value: f32) -> [f32; 3];
}

impl<F> ColorMap for F
where
    F: Fn(f32) -> [f32; 3],
{
    fn rgb(&self, value: f32) -> [f32; 3] {
        self(value)
    }
}

/// Piecewise-linear colormap over `[vmin, vmax]`.
///
/// Values outside the range are clamped to it; NaN maps to the first stop.
/// Color stops are spaced evenly across the range.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearColorMap {
    vmin: f32,
    vmax: f32,
    stops: Vec<[f32; 3]>,
}

impl LinearColorMap {
    /// Creates a colormap from evenly spaced color stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or not finite, or if fewer
    /// than two stops are given.
    pub fn new(vmin: f32, vmax: f32, stops: Vec<[f32; 3]>) -> Result<Self> {
        if !vmin.is_finite() || !vmax.is_finite() || vmax - vmin < TOLERANCE {
            return Err(TessellationError::InvalidParameters(format!(
                "colormap range [{vmin}, {vmax}] is empty"
            ))
            .into());
        }
        if stops.len() < 2 {
            return Err(TessellationError::InvalidParameters(
                "colormap needs at least two color stops".to_owned(),
            )
            .into());
        }
        Ok(Self { vmin, vmax, stops })
    }

    /// Black to white.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid.
    pub fn gray(vmin: f32, vmax: f32) -> Result<Self> {
        Self::new(vmin, vmax, vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]])
    }

    /// Blue through cyan, yellow and red.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid.
    pub fn jet(vmin: f32, vmax: f32) -> Result<Self> {
        Self::new(
            vmin,
            vmax,
            vec![
                [0.0, 0.0, 0.5],
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [1.0, 1.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.5, 0.0, 0.0],
            ],
        )
    }

    /// Returns the lower end of the value range.
    #[must_use]
    pub fn vmin(&self) -> f32 {
        self.vmin
    }

    /// Returns the upper end of the value range.
    #[must_use]
    pub fn vmax(&self) -> f32 {
        self.vmax
    }
}

impl ColorMap for LinearColorMap {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn rgb(&self, value: f32) -> [f32; 3] {
        let t = if value.is_nan() {
            0.0
        } else {
            ((value - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
        };
        let segments = self.stops.len() - 1;
        let s = t * segments as f32;
        let i = (s.floor() as usize).min(segments - 1);
        let f = s - i as f32;
        let (a, b) = (self.stops[i], self.stops[i + 1]);
        [
            a[0] + (b[0] - a[0]) * f,
            a[1] + (b[1] - a[1]) * f,
            a[2] + (b[2] - a[2]) * f,
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gray_ends_and_middle() {
        let cmap = LinearColorMap::gray(0.0, 1.0).unwrap();
        assert_eq!(cmap.rgb(0.0), [0.0, 0.0, 0.0]);
        assert_eq!(cmap.rgb(1.0), [1.0, 1.0, 1.0]);
        let mid = cmap.rgb(0.25);
        assert_relative_eq!(mid[0], 0.25);
        assert_relative_eq!(mid[2], 0.25);
    }

    #[test]
    fn values_outside_range_are_clamped() {
        let cmap = LinearColorMap::gray(-2.0, 2.0).unwrap();
        assert_relative_eq!(cmap.vmin(), -2.0);
        assert_relative_eq!(cmap.vmax(), 2.0);
        assert_eq!(cmap.rgb(-10.0), cmap.rgb(-2.0));
        assert_eq!(cmap.rgb(10.0), cmap.rgb(2.0));
        assert_eq!(cmap.rgb(f32::NAN), cmap.rgb(-2.0));
    }

    #[test]
    fn jet_hits_its_stops() {
        let cmap = LinearColorMap::jet(0.0, 5.0).unwrap();
        assert_eq!(cmap.rgb(0.0), [0.0, 0.0, 0.5]);
        let cyan = cmap.rgb(2.0);
        assert_relative_eq!(cyan[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(cyan[1], 1.0, epsilon = 1e-6);
        assert_relative_eq!(cyan[2], 1.0, epsilon = 1e-6);
        assert_eq!(cmap.rgb(5.0), [0.5, 0.0, 0.0]);
    }

    #[test]
    fn empty_range_fails() {
        assert!(LinearColorMap::gray(1.0, 1.0).is_err());
        assert!(LinearColorMap::gray(2.0, 1.0).is_err());
        assert!(LinearColorMap::gray(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn single_stop_fails() {
        assert!(LinearColorMap::new(0.0, 1.0, vec![[1.0, 0.0, 0.0]]).is_err());
    }

    #[test]
    fn closures_are_colormaps() {
        let red = |v: f32| [v, 0.0, 0.0];
        assert_eq!(red.rgb(0.5), [0.5, 0.0, 0.0]);
    }
}
