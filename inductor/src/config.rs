use num_bigint::BigInt;
use num_rational::BigRational;

/// The default tolerance schedule: `2^(-len(observations))`, tightening as more updates
/// accumulate (spec §4.9 step 6).
pub fn default_tolerance(update_count: usize) -> BigRational {
    BigRational::new(BigInt::from(1), BigInt::from(2).pow(update_count as u32))
}

/// Configuration for an [`crate::Inductor`]: presently just the tolerance schedule, plain
/// fields rather than a builder, matching the teacher's config structs.
#[derive(Debug, Clone, Copy)]
pub struct InductorConfig {
    /// Maps the number of observations made so far to the tolerance `find_credences` must
    /// satisfy for the next belief state.
    pub tolerance: fn(usize) -> BigRational,
}

impl Default for InductorConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance,
        }
    }
}
