//! The group capability the ElGamal engine is generic over
//!
//! A group is an immutable context value (prime, reduction polynomial or
//! curve constants) that knows how to combine, invert and scale its
//! elements. Elements themselves carry no parameters.

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::modular::{self, mod_pow};
use std::fmt;

/// A finite group written multiplicatively: `combine` is the group law,
/// `scale(a, k)` is `a` combined with itself `k` times.
pub trait Group {
    type Element: Clone + fmt::Debug;

    /// Neutral element
    fn identity(&self) -> Self::Element;

    fn is_identity(&self, element: &Self::Element) -> bool;

    /// The group law
    fn combine(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Inverse under the group law
    fn invert(&self, element: &Self::Element) -> Result<Self::Element>;

    /// Size of the exponent space ephemeral keys are drawn from
    fn order(&self) -> BigInt;

    /// `element` combined with itself `k` times, `k >= 0`
    ///
    /// Double-and-add over the bits of `k` from the most significant end:
    /// the same operations as `r(k) = r(k/2)^2 · element^(k mod 2)`.
    fn scale(&self, element: &Self::Element, k: &BigInt) -> Self::Element {
        debug_assert!(!k.is_negative(), "scalar must be non-negative");
        let mut result = self.identity();
        for bit in k.bits_le().into_iter().rev() {
            result = self.combine(&result, &result);
            if bit {
                result = self.combine(&result, element);
            }
        }
        result
    }
}

/// The multiplicative group of integers modulo a prime p
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeGroup {
    p: BigInt,
}

impl PrimeGroup {
    /// `p` must be a prime greater than 2; primality is not checked
    pub fn new(p: BigInt) -> Result<Self> {
        if p <= BigInt::from_u64(2) {
            return Err(Error::InvalidModulus(format!(
                "{} is too small for a prime group",
                p
            )));
        }
        Ok(PrimeGroup { p })
    }

    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    /// Reduce an arbitrary integer into `[0, p)`
    pub fn element(&self, value: &BigInt) -> BigInt {
        modular::reduce(value, &self.p)
    }
}

impl Group for PrimeGroup {
    type Element = BigInt;

    fn identity(&self) -> BigInt {
        BigInt::one()
    }

    fn is_identity(&self, element: &BigInt) -> bool {
        self.element(element).is_one()
    }

    fn combine(&self, a: &BigInt, b: &BigInt) -> BigInt {
        modular::reduce(&(a * b), &self.p)
    }

    /// Fermat inverse `a^(p-2)`; the group order here is `p - 1`
    fn invert(&self, element: &BigInt) -> Result<BigInt> {
        let reduced = self.element(element);
        if reduced.is_zero() {
            return Err(Error::NotInvertible {
                value: element.clone(),
                modulus: self.p.clone(),
            });
        }
        let exponent = &self.p - &BigInt::from_u64(2);
        mod_pow(&reduced, &exponent, &self.p)
    }

    fn order(&self) -> BigInt {
        &self.p - &BigInt::one()
    }

    fn scale(&self, element: &BigInt, k: &BigInt) -> BigInt {
        debug_assert!(!k.is_negative(), "scalar must be non-negative");
        modular::pow_unchecked(element, k, &self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: i64) -> BigInt {
        BigInt::from_i64(v)
    }

    #[test]
    fn test_prime_group_law() {
        let g = PrimeGroup::new(n(23)).unwrap();
        assert_eq!(g.combine(&n(5), &n(10)), n(4));
        assert!(g.is_identity(&g.identity()));
        assert!(g.is_identity(&n(24)));
        assert_eq!(g.order(), n(22));
    }

    #[test]
    fn test_prime_group_inverse() {
        let g = PrimeGroup::new(n(23)).unwrap();
        for v in 1..23 {
            let inv = g.invert(&n(v)).unwrap();
            assert!(g.is_identity(&g.combine(&n(v), &inv)));
        }
        assert!(matches!(g.invert(&n(46)), Err(Error::NotInvertible { .. })));
    }

    #[test]
    fn test_scale_matches_generic_double_and_add() {
        struct Plain(PrimeGroup);
        impl Group for Plain {
            type Element = BigInt;
            fn identity(&self) -> BigInt {
                self.0.identity()
            }
            fn is_identity(&self, e: &BigInt) -> bool {
                self.0.is_identity(e)
            }
            fn combine(&self, a: &BigInt, b: &BigInt) -> BigInt {
                self.0.combine(a, b)
            }
            fn invert(&self, e: &BigInt) -> Result<BigInt> {
                self.0.invert(e)
            }
            fn order(&self) -> BigInt {
                self.0.order()
            }
        }

        let group = PrimeGroup::new(n(1_000_000_007)).unwrap();
        let plain = Plain(group.clone());
        for k in [0, 1, 2, 3, 17, 1_000_000, 999_999_999_999] {
            assert_eq!(group.scale(&n(5), &n(k)), plain.scale(&n(5), &n(k)));
        }
    }

    #[test]
    fn test_rejects_tiny_modulus() {
        assert!(PrimeGroup::new(n(2)).is_err());
        assert!(PrimeGroup::new(n(-7)).is_err());
    }
}
