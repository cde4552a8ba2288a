//! Arbitrary precision signed integers
//!
//! Values are stored as a sign plus a magnitude in radix 10^9, least
//! significant digit first. The decimal radix keeps parsing and printing
//! linear, and every digit product still fits comfortably in a `u64`.
//!
//! Canonical form is restored after every operation: no trailing zero
//! digits, and zero is the empty digit vector with a positive sign.

use crate::error::{Error, Result};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

/// Sign of a [`BigInt`]; zero is always `Plus`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    fn times(self, other: Sign) -> Sign {
        if self == other { Sign::Plus } else { Sign::Minus }
    }
}

/// Arbitrary precision signed integer
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BigInt {
    sign: Sign,
    // Little-endian digits in radix BASE
    digits: Vec<u32>,
}

impl BigInt {
    /// Radix of a single stored digit
    pub const BASE: u32 = 1_000_000_000;
    const BASE_DIGITS: usize = 9;

    /// Create zero
    pub fn zero() -> Self {
        BigInt {
            sign: Sign::Plus,
            digits: Vec::new(),
        }
    }

    /// Create one
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Create from a u64 value
    pub fn from_u64(mut value: u64) -> Self {
        let mut digits = Vec::new();
        while value > 0 {
            digits.push((value % Self::BASE as u64) as u32);
            value /= Self::BASE as u64;
        }
        BigInt {
            sign: Sign::Plus,
            digits,
        }
    }

    /// Create from an i64 value
    pub fn from_i64(value: i64) -> Self {
        let magnitude = Self::from_u64(value.unsigned_abs());
        if value < 0 { -magnitude } else { magnitude }
    }

    /// Build a canonical value from a sign and little-endian digits
    fn from_parts(sign: Sign, digits: Vec<u32>) -> Self {
        let mut result = BigInt { sign, digits };
        result.trim();
        result
    }

    /// Drop high zero digits and canonicalize the sign of zero
    fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.sign = Sign::Plus;
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Little-endian digits of the magnitude in radix [`BigInt::BASE`]
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.digits == [1]
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    /// Parity of the magnitude (the radix is even, so the lowest digit decides)
    pub fn is_odd(&self) -> bool {
        self.digits.first().is_some_and(|d| d % 2 == 1)
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    pub fn abs(&self) -> Self {
        BigInt {
            sign: Sign::Plus,
            digits: self.digits.clone(),
        }
    }

    /// Convert to u64 if the value is non-negative and fits
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        let mut result: u64 = 0;
        for &digit in self.digits.iter().rev() {
            result = result
                .checked_mul(Self::BASE as u64)?
                .checked_add(digit as u64)?;
        }
        Some(result)
    }

    /// Bits of the magnitude, least significant first (empty for zero)
    pub fn bits_le(&self) -> Vec<bool> {
        let mut bits = Vec::new();
        let mut rest = self.abs();
        while !rest.is_zero() {
            let bit = rest.div_small_assign(2);
            bits.push(bit != 0);
        }
        bits
    }

    /// Raise to a machine-sized power by repeated squaring
    pub fn pow(&self, exp: u32) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Multiply by a machine-sized factor in a single pass
    pub fn mul_small(&self, factor: u64) -> BigInt {
        if factor == 0 || self.is_zero() {
            return BigInt::zero();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 3);
        let mut carry: u128 = 0;
        for &digit in &self.digits {
            let cur = digit as u128 * factor as u128 + carry;
            digits.push((cur % Self::BASE as u128) as u32);
            carry = cur / Self::BASE as u128;
        }
        while carry > 0 {
            digits.push((carry % Self::BASE as u128) as u32);
            carry /= Self::BASE as u128;
        }
        BigInt::from_parts(self.sign, digits)
    }

    /// Divide in place by a machine-sized divisor, returning the remainder.
    ///
    /// Division truncates toward zero; the remainder carries the sign of
    /// the dividend. Runs in one pass over the digits.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn div_small_assign(&mut self, divisor: u32) -> i64 {
        if divisor == 0 {
            panic!("Division by zero");
        }
        let mut rem: u64 = 0;
        for digit in self.digits.iter_mut().rev() {
            let cur = *digit as u64 + rem * Self::BASE as u64;
            *digit = (cur / divisor as u64) as u32;
            rem = cur % divisor as u64;
        }
        let sign = self.sign;
        self.trim();
        match sign {
            Sign::Plus => rem as i64,
            Sign::Minus => -(rem as i64),
        }
    }

    /// Quotient and remainder by a machine-sized divisor
    pub fn div_rem_small(&self, divisor: u32) -> (BigInt, i64) {
        let mut quotient = self.clone();
        let rem = quotient.div_small_assign(divisor);
        (quotient, rem)
    }

    /// Quotient and remainder, truncating toward zero
    ///
    /// The remainder has the sign of the dividend, so
    /// `q * divisor + r == self` always holds.
    ///
    /// # Panics
    /// Panics if `divisor` is zero; see [`BigInt::checked_div_rem`].
    pub fn div_rem(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        match self.checked_div_rem(divisor) {
            Ok(pair) => pair,
            Err(_) => panic!("Division by zero"),
        }
    }

    pub fn checked_div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = div_rem_magnitude(&self.digits, &divisor.digits);
        Ok((
            BigInt::from_parts(self.sign.times(divisor.sign), q),
            BigInt::from_parts(self.sign, r),
        ))
    }

    /// Uniform sample from `[0, bound)` by rejection sampling.
    ///
    /// `bound` must be positive.
    pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigInt) -> BigInt {
        debug_assert!(bound.is_positive(), "random_below needs a positive bound");
        let Some(&top) = bound.digits.last() else {
            return BigInt::zero();
        };
        let low_len = bound.digits.len() - 1;
        loop {
            let mut digits: Vec<u32> = (0..low_len)
                .map(|_| rng.random_range(0..Self::BASE))
                .collect();
            digits.push(rng.random_range(0..=top));
            let candidate = BigInt::from_parts(Sign::Plus, digits);
            if candidate < *bound {
                return candidate;
            }
        }
    }
}

fn cmp_magnitude(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

fn add_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let max_len = a.len().max(b.len());
    let mut result = Vec::with_capacity(max_len + 1);
    let mut carry = 0u32;
    for i in 0..max_len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        let mut sum = x + y + carry;
        carry = 0;
        if sum >= BigInt::BASE {
            sum -= BigInt::BASE;
            carry = 1;
        }
        result.push(sum);
    }
    if carry > 0 {
        result.push(carry);
    }
    result
}

/// `a - b` for magnitudes with `a >= b`
fn sub_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0) as i64;
        let mut diff = x as i64 - y - borrow;
        borrow = 0;
        if diff < 0 {
            diff += BigInt::BASE as i64;
            borrow = 1;
        }
        result.push(diff as u32);
    }
    result
}

fn mul_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let base = BigInt::BASE as u64;
    let mut result = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let cur = result[i + j] as u64 + x as u64 * y as u64 + carry;
            result[i + j] = (cur % base) as u32;
            carry = cur / base;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let cur = result[k] as u64 + carry;
            result[k] = (cur % base) as u32;
            carry = cur / base;
            k += 1;
        }
    }
    result
}

/// Long division of magnitudes; `b` must be non-empty.
///
/// Both operands are scaled so the divisor's leading digit is at least
/// about half the radix. Each quotient digit is then estimated from the
/// top two remainder digits, which can only overshoot, and corrected by
/// adding the divisor back a small number of times.
fn div_rem_magnitude(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    if cmp_magnitude(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let mut quotient = BigInt::from_parts(Sign::Plus, a.to_vec());
        let rem = quotient.div_small_assign(b[0]);
        return (quotient.digits, BigInt::from_u64(rem as u64).digits);
    }

    let base = BigInt::BASE as u64;
    let norm = base / (*b.last().unwrap_or(&1) as u64 + 1);
    let a = BigInt::from_parts(Sign::Plus, a.to_vec()).mul_small(norm);
    let b = BigInt::from_parts(Sign::Plus, b.to_vec()).mul_small(norm);
    let n = b.digits.len();
    let b_top = b.digits[n - 1] as u64;

    let mut quotient = vec![0u32; a.digits.len()];
    let mut rem = BigInt::zero();
    for i in (0..a.digits.len()).rev() {
        // rem = rem * BASE + a[i]
        rem.digits.insert(0, a.digits[i]);
        rem.trim();

        let s1 = rem.digits.get(n).copied().unwrap_or(0) as u64;
        let s2 = rem.digits.get(n - 1).copied().unwrap_or(0) as u64;
        let mut digit = (s1 * base + s2) / b_top;
        rem -= b.mul_small(digit);
        while rem.is_negative() {
            rem += &b;
            digit -= 1;
        }
        quotient[i] = digit as u32;
    }

    rem.div_small_assign(norm as u32);
    (quotient, rem.digits)
}

/// Signed addition dispatch: `a + (sign, b)`
fn add_signed(a: &BigInt, b_sign: Sign, b: &[u32]) -> BigInt {
    if a.is_zero() {
        return BigInt::from_parts(b_sign, b.to_vec());
    }
    if a.sign == b_sign {
        return BigInt::from_parts(a.sign, add_magnitudes(&a.digits, b));
    }
    match cmp_magnitude(&a.digits, b) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_parts(a.sign, sub_magnitudes(&a.digits, b)),
        Ordering::Less => BigInt::from_parts(b_sign, sub_magnitudes(b, &a.digits)),
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::from_u64(value)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        BigInt::from_u64(value as u64)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt::from_i64(value)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => cmp_magnitude(&self.digits, &other.digits),
            (Sign::Minus, Sign::Minus) => cmp_magnitude(&other.digits, &self.digits),
        }
    }
}

// Negation
impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(self.sign.flip(), self.digits.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = self.sign.flip();
        self.trim();
        self
    }
}

// Addition
impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        add_signed(self, other.sign, &other.digits)
    }
}

// Subtraction routes through addition of the negated operand
impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        add_signed(self, other.sign.flip(), &other.digits)
    }
}

// Multiplication
impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        BigInt::from_parts(
            self.sign.times(other.sign),
            mul_magnitudes(&self.digits, &other.digits),
        )
    }
}

// Division and Remainder
impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, other: &BigInt) -> BigInt {
        self.div_rem(other).0
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, other: &BigInt) -> BigInt {
        self.div_rem(other).1
    }
}

/// Owned and mixed-reference forms forward to the `&BigInt op &BigInt` impls
macro_rules! forward_binop {
    ($($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident;)*) => {$(
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                (&self).$method(&other)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: &BigInt) -> BigInt {
                (&self).$method(other)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                self.$method(&other)
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, other: &BigInt) {
                *self = (&*self).$method(other);
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, other: BigInt) {
                *self = (&*self).$method(&other);
            }
        }
    )*};
}

forward_binop! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse decimal text with an optional leading `+` or `-`
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, text.strip_prefix('+').unwrap_or(text)),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::ParseBigInt(s.to_string()));
        }

        let bytes = body.as_bytes();
        let mut digits = Vec::with_capacity(bytes.len() / Self::BASE_DIGITS + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(Self::BASE_DIGITS);
            let chunk = bytes[start..end]
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32);
            digits.push(chunk);
            end = start;
        }
        Ok(BigInt::from_parts(sign, digits))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut text = String::with_capacity(self.digits.len() * Self::BASE_DIGITS + 1);
        match self.digits.last() {
            None => text.push('0'),
            Some(top) => {
                text.push_str(&top.to_string());
                for digit in self.digits.iter().rev().skip(1) {
                    text.push_str(&format!("{:09}", digit));
                }
            }
        }
        f.pad_integral(!self.is_negative(), "", &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn samples() -> Vec<BigInt> {
        vec![
            big("0"),
            big("1"),
            big("-1"),
            big("999999999"),
            big("1000000000"),
            big("-1000000000000000000"),
            big("123456789012345678901234567890"),
            big("-98765432109876543210987654321098765432109876543210"),
            big("115792089210356248762697446949407573530086143415290314195533631308867097853951"),
            big("340282366920938463463374607431768211456"),
        ]
    }

    #[test]
    fn test_basic_operations() {
        let a = BigInt::from_u64(100);
        let b = BigInt::from_u64(50);

        assert_eq!(&a + &b, BigInt::from_u64(150));
        assert_eq!(&a - &b, BigInt::from_u64(50));
        assert_eq!(&b - &a, BigInt::from_i64(-50));
        assert_eq!(&a * &b, BigInt::from_u64(5000));
        assert_eq!(&a / &b, BigInt::from_u64(2));
        assert_eq!(&a % &b, BigInt::zero());
    }

    #[test]
    fn test_parse_and_format() {
        for text in ["0", "7", "-7", "1000000000", "-000000000001000000007", "+42"] {
            let value = big(text);
            let canonical = value.to_string().parse::<BigInt>().unwrap();
            assert_eq!(value, canonical);
        }
        assert_eq!(big("-000000000001000000007").to_string(), "-1000000007");
        assert_eq!(big("+42").to_string(), "42");
        assert_eq!(big("-0").to_string(), "0");
        assert_eq!(big("-0").sign(), Sign::Plus);
        assert!("".parse::<BigInt>().is_err());
        assert!("-".parse::<BigInt>().is_err());
        assert!("12a".parse::<BigInt>().is_err());
    }

    #[test]
    fn test_carry_across_digit_groups() {
        let a = big("999999999999999999");
        assert_eq!((&a + &BigInt::one()).to_string(), "1000000000000000000");
        assert_eq!(
            (&big("1000000000000000000") - &BigInt::one()).to_string(),
            "999999999999999999"
        );
        assert_eq!(
            (&a * &a).to_string(),
            "999999999999999998000000000000000001"
        );
    }

    #[test]
    fn test_known_power() {
        // 2^128
        assert_eq!(
            BigInt::from_u64(2).pow(128).to_string(),
            "340282366920938463463374607431768211456"
        );
        let p256 = BigInt::from_u64(2).pow(256) - BigInt::from_u64(2).pow(224)
            + BigInt::from_u64(2).pow(192)
            + BigInt::from_u64(2).pow(96)
            - BigInt::one();
        assert_eq!(
            p256.to_string(),
            "115792089210356248762697446949407573530086143415290314195533631308867097853951"
        );
    }

    #[test]
    fn test_additive_inverse_and_self_subtraction() {
        for a in samples() {
            assert!((&a - &a).is_zero());
            assert!((&a + &(-&a)).is_zero());
            assert_eq!((&a - &a).sign(), Sign::Plus);
        }
    }

    #[test]
    fn test_multiplication_laws() {
        let values = samples();
        for a in &values {
            for b in &values {
                assert_eq!(a * b, b * a);
                for c in values.iter().take(5) {
                    assert_eq!(&(a * b) * c, a * &(b * c));
                }
            }
        }
    }

    #[test]
    fn test_division_identity() {
        let values = samples();
        for a in &values {
            for d in values.iter().filter(|d| !d.is_zero()) {
                let (q, r) = a.div_rem(d);
                assert_eq!(&(&q * d) + &r, *a, "{} / {}", a, d);
                assert!(r.abs() < d.abs());
                assert!(r.is_zero() || r.sign() == a.sign());
            }
        }
    }

    #[test]
    fn test_division_edge_cases() {
        let a = big("123456789123456789123456789");
        assert_eq!(a.div_rem(&a), (BigInt::one(), BigInt::zero()));
        assert_eq!(a.div_rem(&BigInt::one()), (a.clone(), BigInt::zero()));
        let larger = &a * &BigInt::from_u64(3);
        assert_eq!(a.div_rem(&larger), (BigInt::zero(), a.clone()));
        assert_eq!(
            BigInt::from_i64(-7).div_rem(&BigInt::from_u64(2)),
            (BigInt::from_i64(-3), BigInt::from_i64(-1))
        );
        assert_eq!(
            BigInt::from_i64(7).div_rem(&BigInt::from_i64(-2)),
            (BigInt::from_i64(-3), BigInt::from_i64(1))
        );
        assert_eq!(
            BigInt::one().checked_div_rem(&BigInt::zero()),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_division_random_operands() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = BigInt::from_u64(10).pow(120);
        for _ in 0..200 {
            let a = BigInt::random_below(&mut rng, &bound);
            let small_bound = BigInt::from_u64(10).pow(rng.random_range(1..80));
            let d = &BigInt::random_below(&mut rng, &small_bound) + &BigInt::one();
            let (q, r) = a.div_rem(&d);
            assert_eq!(&(&q * &d) + &r, a);
            assert!(r < d);
        }
    }

    #[test]
    fn test_small_division() {
        let mut a = big("1000000000000000000000");
        let rem = a.div_small_assign(64);
        assert_eq!(a.to_string(), "15625000000000000000");
        assert_eq!(rem, 0);

        let (q, r) = big("-1000000001").div_rem_small(10);
        assert_eq!(q, big("-100000000"));
        assert_eq!(r, -1);

        let (q, r) = big("12345678901234567890").div_rem_small(4_000_000_000);
        assert_eq!(q.to_u64(), Some(3_086_419_725));
        assert_eq!(r, 1_234_567_890);
    }

    #[test]
    fn test_comparison() {
        let mut sorted = samples();
        sorted.sort();
        for pair in sorted.windows(2) {
            assert!(pair[0] <= pair[1]);
            assert!((&pair[1] - &pair[0]).sign() == Sign::Plus);
        }
        assert!(BigInt::from_i64(-5) < BigInt::from_i64(-4));
        assert!(BigInt::from_i64(-1_000_000_000) < BigInt::from_i64(-1));
    }

    #[test]
    fn test_bits_and_parity() {
        assert!(BigInt::zero().bits_le().is_empty());
        assert_eq!(
            BigInt::from_u64(6).bits_le(),
            vec![false, true, true]
        );
        assert!(big("1000000001").is_odd());
        assert!(big("-1000000000").is_even());
        assert_eq!(BigInt::from_u64(2).pow(200).bits_le().len(), 201);
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(BigInt::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!((BigInt::from_u64(u64::MAX) + BigInt::one()).to_u64(), None);
        assert_eq!(BigInt::from_i64(-3).to_u64(), None);
    }

    #[test]
    fn test_random_below_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let bound = big("1000000000000000000001");
        for _ in 0..500 {
            let x = BigInt::random_below(&mut rng, &bound);
            assert!(!x.is_negative());
            assert!(x < bound);
        }
        let one = BigInt::one();
        assert!(BigInt::random_below(&mut rng, &one).is_zero());
    }
}
