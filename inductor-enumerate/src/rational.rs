//! Enumerators over exact rationals.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::integers::integers;

/// Enumerates `a + (b - a) * p/q` for `q = 1, 2, ...` and `0 <= p <= q`, so every rational in
/// `[a, b]` eventually appears.
pub struct RationalsBetween {
    a: BigRational,
    span: BigRational,
    denom: BigInt,
    numer: BigInt,
}

impl Iterator for RationalsBetween {
    type Item = BigRational;

    fn next(&mut self) -> Option<BigRational> {
        if self.numer > self.denom {
            self.denom += 1;
            self.numer = BigInt::zero();
        }
        let fraction = BigRational::new(self.numer.clone(), self.denom.clone());
        let value = &self.a + &self.span * fraction;
        self.numer += 1;
        Some(value)
    }
}

/// Enumerates rationals between `a` and `b` inclusive. Each call returns a fresh iterator.
pub fn rationals_between(a: BigRational, b: BigRational) -> RationalsBetween {
    let span = &b - &a;
    RationalsBetween {
        a,
        span,
        denom: BigInt::from(1),
        numer: BigInt::zero(),
    }
}

/// Enumerates every nonnegative rational, starting with zero.
///
/// Mirrors the diagonal sweep `for n in 0, 1, 2, ...: for denom in 1..n: yield (n -
/// denom)/denom` used by the reference implementation: it revisits some values but is
/// guaranteed to eventually produce every nonnegative rational.
pub fn nonnegative_rationals() -> Box<dyn Iterator<Item = BigRational>> {
    let rest = integers(0, 1).flat_map(|n| {
        (1..n).map(move |denom| BigRational::new(BigInt::from(n - denom), BigInt::from(denom)))
    });
    Box::new(std::iter::once(BigRational::zero()).chain(rest))
}
