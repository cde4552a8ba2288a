//! Modular arithmetic on top of [`BigInt`]
//!
//! All functions are pure and take the modulus explicitly. Results are
//! always reduced into `[0, modulus)`.

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Reduce `value` into `[0, modulus)`; `modulus` must be positive
pub fn reduce(value: &BigInt, modulus: &BigInt) -> BigInt {
    let r = value % modulus;
    if r.is_negative() { &r + modulus } else { r }
}

/// Modular exponentiation by square-and-multiply
///
/// Bits of the exponent are consumed from the most significant end, which
/// gives the same sequence of squarings and multiplications as the
/// recursive `x^e = (x^(e/2))^2 * x^(e mod 2)` formulation without the
/// call depth.
pub fn mod_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    if !modulus.is_positive() {
        return Err(Error::InvalidModulus(format!("{} is not positive", modulus)));
    }
    if exponent.is_negative() {
        return Err(Error::NegativeExponent);
    }
    if modulus.is_one() {
        return Ok(BigInt::zero());
    }

    Ok(pow_unchecked(base, exponent, modulus))
}

/// [`mod_pow`] without argument validation; `modulus > 1`, magnitude of `exponent`
pub(crate) fn pow_unchecked(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
    let base = reduce(base, modulus);
    let mut result = BigInt::one();
    for bit in exponent.bits_le().into_iter().rev() {
        result = reduce(&(&result * &result), modulus);
        if bit {
            result = reduce(&(&result * &base), modulus);
        }
    }
    result
}

/// Iterative extended Euclid: returns `(g, x, y)` with `a*x + b*y = g`
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (quotient, remainder) = old_r.div_rem(&r);
        old_r = std::mem::replace(&mut r, remainder);

        let next_s = &old_s - &(&quotient * &s);
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &(&quotient * &t);
        old_t = std::mem::replace(&mut t, next_t);
    }

    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Modular inverse via the Bezout coefficients of `(value, modulus)`
///
/// Fails with [`Error::NotInvertible`] when `gcd(value, modulus) != 1`.
pub fn mod_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    if !modulus.is_positive() {
        return Err(Error::InvalidModulus(format!("{} is not positive", modulus)));
    }
    let reduced = reduce(value, modulus);
    let (gcd, x, _) = extended_gcd(&reduced, modulus);
    if !gcd.is_one() {
        return Err(Error::NotInvertible {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }
    Ok(reduce(&(&x + modulus), modulus))
}

/// Square root modulo a prime `p` with `p ≡ 3 (mod 4)`: `v^((p+1)/4) mod p`
///
/// Neither the shape of `p` nor the residuosity of `v` is checked here. For
/// other primes, or when `v` is a non-residue, the value returned is not a
/// square root; callers square the result to confirm it.
pub fn sqrt_3_mod_4(value: &BigInt, p: &BigInt) -> Result<BigInt> {
    let (exponent, _) = (p + &BigInt::one()).div_rem_small(4);
    mod_pow(value, &exponent, p)
}
