//! Conversion between digit sequences and single big values
//!
//! Digits are always least significant first. The same two functions pack
//! text symbol codes (radix 64) into one value and spread that value over
//! digits of the working prime, and back again on decryption.

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// `Σ digit_i · radix^i`, accumulated from the least significant end
pub fn to_value(digits: &[BigInt], radix: &BigInt) -> BigInt {
    let mut result = BigInt::zero();
    let mut weight = BigInt::one();
    for digit in digits {
        result += digit * &weight;
        weight = &weight * radix;
    }
    result
}

/// Digits of a non-negative `value` in base `radix`, least significant first
///
/// Zero yields the single digit `0`.
pub fn from_value(value: &BigInt, radix: &BigInt) -> Result<Vec<BigInt>> {
    if value.is_negative() {
        return Err(Error::NegativeValue);
    }
    if *radix <= BigInt::one() {
        return Err(Error::InvalidRadix(format!("{} is not greater than 1", radix)));
    }
    if value.is_zero() {
        return Ok(vec![BigInt::zero()]);
    }

    // Machine-sized radices take the single-pass division path
    if let Some(small) = radix.to_u64().and_then(|r| u32::try_from(r).ok()) {
        return Ok(from_value_small(value, small)?
            .into_iter()
            .map(|d| BigInt::from_u64(d as u64))
            .collect());
    }

    let mut digits = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(radix);
        digits.push(remainder);
        rest = quotient;
    }
    Ok(digits)
}

/// [`to_value`] for machine-sized digits and radix
pub fn to_value_small(digits: &[u32], radix: u32) -> BigInt {
    let mut result = BigInt::zero();
    for &digit in digits.iter().rev() {
        result = result.mul_small(radix as u64) + BigInt::from_u64(digit as u64);
    }
    result
}

/// [`from_value`] for a machine-sized radix
pub fn from_value_small(value: &BigInt, radix: u32) -> Result<Vec<u32>> {
    if value.is_negative() {
        return Err(Error::NegativeValue);
    }
    if radix < 2 {
        return Err(Error::InvalidRadix(format!("{} is not greater than 1", radix)));
    }
    if value.is_zero() {
        return Ok(vec![0]);
    }

    let mut digits = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        let digit = rest.div_small_assign(radix);
        digits.push(digit as u32);
    }
    Ok(digits)
}
