use crate::error::{Result, TessellationError};
use crate::topology::FaultCell;

/// Which cell scalar drives the quad colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShiftDisplay {
    /// Fault likelihood, capped at 1.
    Likelihood,
    /// Minus-plus shift, capped at `max`.
    MinusPlus { max: f32 },
    /// Plus-minus shift, floored at `min`.
    PlusMinus { min: f32 },
}

impl ShiftDisplay {
    /// Selects the display from a signed shift limit.
    ///
    /// Zero selects likelihoods, a positive value minus-plus shifts with that
    /// maximum, and a negative value plus-minus shifts with that minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if `smax` is NaN.
    pub fn from_shift_limit(smax: f32) -> Result<Self> {
        if smax.is_nan() {
            return Err(
                TessellationError::InvalidParameters("shift limit is NaN".to_owned()).into(),
            );
        }
        Ok(if smax > 0.0 {
            Self::MinusPlus { max: smax }
        } else if smax < 0.0 {
            Self::PlusMinus { min: smax }
        } else {
            Self::Likelihood
        })
    }

    /// Returns the scalar of `cell` this display colors by.
    #[must_use]
    pub fn value(&self, cell: &FaultCell) -> f32 {
        match *self {
            Self::Likelihood => cell.fl.min(1.0),
            Self::MinusPlus { max } => cell.smp.min(max),
            Self::PlusMinus { min } => cell.spm.max(min),
        }
    }
}

/// Style parameters for per-cell quad tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadStyle {
    size: f32,
    display: ShiftDisplay,
}

impl QuadStyle {
    /// Creates a new quad style.
    ///
    /// `size` is the half-width of each quad, in samples.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not a positive finite number.
    pub fn new(size: f32, display: ShiftDisplay) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "quad size must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self { size, display })
    }

    /// Creates a quad style from a size and a signed shift limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is invalid or `smax` is NaN.
    pub fn with_shift_limit(size: f32, smax: f32) -> Result<Self> {
        Self::new(size, ShiftDisplay::from_shift_limit(smax)?)
    }

    /// Returns the quad half-width.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the color display mode.
    #[must_use]
    pub fn display(&self) -> ShiftDisplay {
        self.display
    }
}

impl Default for QuadStyle {
    fn default() -> Self {
        Self {
            size: 0.5,
            display: ShiftDisplay::Likelihood,
        }
    }
}
