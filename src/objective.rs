//! Objective functions, search bounds, and evaluated candidates.

use crate::error::ConfigError;
use rand::Rng;

/// A scalar function to minimize.
///
/// Any `Fn(f64) -> f64` is an objective, so closures and plain functions
/// can be passed directly:
///
/// ```
/// use u_scalarmin::Objective;
///
/// let f = |x: f64| x * x - 2.0;
/// assert_eq!(f.evaluate(2.0), 2.0);
/// ```
///
/// Objectives are assumed cheap, pure, and side-effect free. Solvers call
/// them any number of times per iteration and never concurrently.
pub trait Objective {
    /// Evaluates the objective at `x`. Lower is better.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Closed search interval `[min, max]`.
///
/// Every candidate produced by a bounded solver lies inside these bounds;
/// proposals that step outside are clamped to the nearest edge, never
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Creates bounds, requiring finite `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks the `min < max` invariant.
    ///
    /// Only needed for bounds that bypassed [`Bounds::new`], such as
    /// deserialized ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds {
                min: self.min,
                max: self.max,
            })
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Length of the interval, `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Clamps `x` into `[min, max]`.
    ///
    /// NaN is mapped to `min` so a diverging step cannot leak out of the
    /// domain.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            self.min
        } else {
            x.clamp(self.min, self.max)
        }
    }

    /// Returns `true` if `min <= x <= max`.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Draws a uniform sample from `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        // Clamp guards the rounding of `min + width * u` at the upper edge.
        self.clamp(self.min + self.width() * rng.random::<f64>())
    }
}

impl Default for Bounds {
    /// The `[-10, 10]` interval used throughout the solver defaults.
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
        }
    }
}

/// A position paired with its objective value.
///
/// Solvers build candidates only through [`Candidate::evaluate`], so
/// `value` is always the image of `position` under the objective that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    /// Location in the search domain.
    pub position: f64,

    /// Objective value at `position`.
    pub value: f64,
}

impl Candidate {
    /// Evaluates `objective` at `position`.
    pub fn evaluate<F: Objective + ?Sized>(objective: &F, position: f64) -> Self {
        Self {
            position,
            value: objective.evaluate(position),
        }
    }

    /// Strict improvement: `self.value < other.value`.
    ///
    /// NaN never counts as an improvement.
    pub fn is_better_than(&self, other: &Candidate) -> bool {
        self.value < other.value
    }
}
