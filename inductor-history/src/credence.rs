use std::fmt;
use std::ops::Deref;

use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// An exact rational credence in `[0, 1]`.
///
/// Credences flow through the market maker's tolerance comparisons, so they are kept as
/// exact [`BigRational`] values rather than floats end to end; float conversion, if a caller
/// wants one for display, happens only at the API boundary via [`Credence::to_f64`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Credence(BigRational);

impl Credence {
    /// Wraps an exact rational as a credence.
    ///
    /// The caller is trusted to supply a value in `[0, 1]`; every producer in this workspace
    /// (the market maker's candidate search, the budget factor's `SafeReciprocal`) already
    /// guarantees this by construction, so no range check is performed here.
    pub fn new(value: BigRational) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    pub fn as_rational(&self) -> &BigRational {
        &self.0
    }

    pub fn into_rational(self) -> BigRational {
        self.0
    }

    /// An approximate `f64` rendering, for diagnostics and display only.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl Default for Credence {
    fn default() -> Self {
        Self::zero()
    }
}

impl Deref for Credence {
    type Target = BigRational;

    fn deref(&self) -> &BigRational {
        &self.0
    }
}

impl From<BigRational> for Credence {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl fmt::Display for Credence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}
