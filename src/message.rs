//! Splitting text into group elements and joining it back
//!
//! Text is packed into one radix-64 value, which is then written in base p.
//! Z_p takes one base-p digit per block, F_{p^d} takes d digits per block as
//! polynomial coefficients, and a curve block is one token whose value is
//! lifted to the point with that x-coordinate.

use crate::bigint::BigInt;
use crate::elliptic_curve::{AffinePoint, Curve, Point};
use crate::error::{Error, Result};
use crate::extension_field::{ExtensionField, ExtensionFieldElement};
use crate::radix;
use crate::text::Alphabet;
use log::debug;

/// Base-p digits of the text, least significant first
pub fn encode_prime(text: &str, alphabet: Alphabet, p: &BigInt) -> Result<Vec<BigInt>> {
    let value = alphabet.to_value(text)?;
    let digits = radix::from_value(&value, p)?;
    debug!("{} symbol(s) -> {} block(s) mod {}", text.chars().count(), digits.len(), p);
    Ok(digits)
}

pub fn decode_prime(digits: &[BigInt], alphabet: Alphabet, p: &BigInt) -> Result<String> {
    alphabet.from_value(&radix::to_value(digits, p))
}

/// Base-p digits grouped d at a time; the last group may be shorter
pub fn encode_extension(
    text: &str,
    alphabet: Alphabet,
    field: &ExtensionField,
) -> Result<Vec<ExtensionFieldElement>> {
    let digits = encode_prime(text, alphabet, field.modulus())?;
    Ok(digits
        .chunks(field.degree())
        .map(|chunk| field.element(chunk))
        .collect())
}

/// Every element contributes exactly d digits, missing high coefficients
/// counting as zero
pub fn decode_extension(
    elements: &[ExtensionFieldElement],
    alphabet: Alphabet,
    field: &ExtensionField,
) -> Result<String> {
    let digits: Vec<BigInt> = elements
        .iter()
        .flat_map(|e| e.padded_coefficients(field.degree()))
        .collect();
    decode_prime(&digits, alphabet, field.modulus())
}

/// One token becomes the curve point whose x-coordinate is its packed value
pub fn encode_curve_token(token: &str, alphabet: Alphabet, curve: &Curve) -> Result<Point> {
    let value = alphabet.to_value(token)?;
    if value >= *curve.modulus() {
        return Err(Error::ChunkTooLarge {
            value,
            modulus: curve.modulus().clone(),
        });
    }
    curve.lift_x(&value)
}

/// Text carried by a decrypted point: its affine x-coordinate
pub fn decode_curve_point(point: &Point, alphabet: Alphabet, curve: &Curve) -> Result<String> {
    match curve.to_affine(point)? {
        AffinePoint::Infinity => Ok(String::new()),
        AffinePoint::Affine { x, .. } => alphabet.from_value(&x),
    }
}
