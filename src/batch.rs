//! The six stdin-to-stdout programs as pure string transforms
//!
//! Each function takes the whole input text and returns the whole output
//! text. Encryption draws ephemeral exponents from the caller's RNG.

use crate::bigint::BigInt;
use crate::elgamal::{Ciphertext, ElGamal, PrivateKey, PublicKey};
use crate::elliptic_curve::{Curve, Point};
use crate::error::{Error, Result};
use crate::extension_field::ExtensionField;
use crate::group::{Group, PrimeGroup};
use crate::input::{InputReader, parse_coefficients};
use crate::message;
use crate::text::Alphabet;
use log::{info, warn};
use rand::Rng;
use std::fmt::Write;

/// Input: `p g k` then one line of plaintext.
/// Output: one `c1 c2` line per block.
pub fn zp_encrypt<R: Rng + ?Sized>(input: &str, rng: &mut R) -> Result<String> {
    let mut reader = InputReader::new(input);
    let group = PrimeGroup::new(reader.next_bigint("p")?)?;
    let generator = group.element(&reader.next_bigint("g")?);
    let key = group.element(&reader.next_bigint("k")?);
    reader.finish_line();
    let plaintext = reader.next_line().unwrap_or_default();

    let blocks = message::encode_prime(plaintext, Alphabet::Spaced, group.modulus())?;
    let scheme = ElGamal::new(&group);
    let public = PublicKey { generator, key };
    let ciphertexts = scheme.encrypt_all(&public, &blocks, rng)?;
    info!("Z_p: encrypted {} block(s) modulo {}", ciphertexts.len(), group.modulus());

    let mut out = String::new();
    for ct in &ciphertexts {
        let _ = writeln!(out, "{} {}", ct.c1, ct.c2);
    }
    Ok(out)
}

/// Input: `p a` then `r m` pairs up to end of input.
/// Output: the recovered text, no trailing newline.
pub fn zp_decrypt(input: &str) -> Result<String> {
    let mut reader = InputReader::new(input);
    let group = PrimeGroup::new(reader.next_bigint("p")?)?;
    let private = PrivateKey::new(reader.next_bigint("a")?)?;

    let mut ciphertexts = Vec::new();
    while !reader.is_exhausted() {
        let c1 = group.element(&reader.next_bigint("r")?);
        let c2 = group.element(&reader.next_bigint("m")?);
        ciphertexts.push(Ciphertext { c1, c2 });
    }

    let decryption = ElGamal::new(&group).decrypt_all(&private, &ciphertexts)?;
    info!("Z_p: decrypted {} block(s)", decryption.messages.len());
    message::decode_prime(&decryption.messages, Alphabet::Spaced, group.modulus())
}

/// Reads the `p` line and the `h` line shared by both F_{p^d} programs
fn read_extension_field(reader: &mut InputReader) -> Result<ExtensionField> {
    let p = reader.next_bigint("p")?;
    reader.finish_line();
    let h = reader.next_coefficients("h")?;
    let field = ExtensionField::new(p, &h)?;
    if let Err(e) = field.probe_irreducible() {
        warn!("{}", e);
    }
    Ok(field)
}

/// Input: `p`, then lines for h, g and k (coefficients lowest degree
/// first), then one line of plaintext.
/// Output: two coefficient lines, c1 then c2, per block.
pub fn fq_encrypt<R: Rng + ?Sized>(input: &str, rng: &mut R) -> Result<String> {
    let mut reader = InputReader::new(input);
    let field = read_extension_field(&mut reader)?;
    let generator = field.element(&reader.next_coefficients("g")?);
    let key = field.element(&reader.next_coefficients("k")?);
    let plaintext = reader.next_line().unwrap_or_default();

    let blocks = message::encode_extension(plaintext, Alphabet::Spaced, &field)?;
    let scheme = ElGamal::new(&field);
    let public = PublicKey { generator, key };
    let ciphertexts = scheme.encrypt_all(&public, &blocks, rng)?;
    info!(
        "F_{{p^{}}}: encrypted {} block(s) modulo {}",
        field.degree(),
        ciphertexts.len(),
        field.modulus()
    );

    let mut out = String::new();
    for ct in &ciphertexts {
        let _ = writeln!(out, "{}", ct.c1);
        let _ = writeln!(out, "{}", ct.c2);
    }
    Ok(out)
}

/// Input: `p`, the h line, `a`, then pairs of coefficient lines until a
/// blank line or end of input.
/// Output: a `Yes` line for every block whose shared secret failed to
/// invert, then the recovered text.
pub fn fq_decrypt(input: &str) -> Result<String> {
    let mut reader = InputReader::new(input);
    let field = read_extension_field(&mut reader)?;
    let private = PrivateKey::new(reader.next_bigint("a")?)?;
    reader.finish_line();

    let mut ciphertexts = Vec::new();
    while let Some(line) = reader.next_line().filter(|l| !l.trim().is_empty()) {
        let c1 = field.element(&parse_coefficients(line, "c1")?);
        let c2 = field.element(&reader.next_coefficients("c2")?);
        ciphertexts.push(Ciphertext { c1, c2 });
    }

    let decryption = ElGamal::new(&field).decrypt_all(&private, &ciphertexts)?;
    info!(
        "F_{{p^{}}}: decrypted {} block(s), {} inconsistent",
        field.degree(),
        decryption.messages.len(),
        decryption.inconsistent_blocks.len()
    );

    let mut out = "Yes\n".repeat(decryption.inconsistent_blocks.len());
    out.push_str(&message::decode_extension(
        &decryption.messages,
        Alphabet::Spaced,
        &field,
    )?);
    Ok(out)
}

fn format_point(curve: &Curve, point: &Point) -> Result<String> {
    Ok(curve.to_affine(point)?.to_string())
}

/// Input: public key `x y`, a count n, then n tokens.
/// Output: two point lines, c1 then c2, per token.
pub fn curve_encrypt<R: Rng + ?Sized>(input: &str, rng: &mut R) -> Result<String> {
    let curve = Curve::p256();
    let mut reader = InputReader::new(input);
    let x = reader.next_bigint("x")?;
    let y = reader.next_bigint("y")?;
    let key = Point::affine(x, y);
    if !curve.is_on_curve(&key) {
        return Err(Error::PointNotOnCurve { x: key.x().clone() });
    }

    let count = reader.next_count("n")?;
    let blocks = (0..count)
        .map(|_| {
            let token = reader.next_token().ok_or_else(|| Error::input("message"))?;
            message::encode_curve_token(token, Alphabet::Underscored, &curve)
        })
        .collect::<Result<Vec<_>>>()?;

    let scheme = ElGamal::new(&curve);
    let public = PublicKey {
        generator: curve.generator().clone(),
        key,
    };
    let ciphertexts = scheme.encrypt_all(&public, &blocks, rng)?;
    info!("P-256: encrypted {} block(s)", ciphertexts.len());

    let mut out = String::new();
    for ct in &ciphertexts {
        out.push_str(&format_point(&curve, &ct.c1)?);
        out.push('\n');
        out.push_str(&format_point(&curve, &ct.c2)?);
        out.push('\n');
    }
    Ok(out)
}

/// Input: private exponent `a`, then point pairs (`x y` or `Z`) up to end of
/// input.
/// Output: one recovered token per line.
pub fn curve_decrypt(input: &str) -> Result<String> {
    let curve = Curve::p256();
    let mut reader = InputReader::new(input);
    let private = PrivateKey::new(reader.next_bigint("a")?)?;

    let mut ciphertexts = Vec::new();
    while let Some(c1) = reader.next_point("c1")? {
        let c2 = reader
            .next_point("c2")?
            .ok_or_else(|| Error::input("c2"))?;
        for point in [&c1, &c2] {
            if !curve.is_on_curve(point) {
                return Err(Error::PointNotOnCurve {
                    x: point.x().clone(),
                });
            }
        }
        ciphertexts.push(Ciphertext { c1, c2 });
    }

    let decryption = ElGamal::new(&curve).decrypt_all(&private, &ciphertexts)?;
    info!("P-256: decrypted {} block(s)", decryption.messages.len());

    let mut out = String::new();
    for point in &decryption.messages {
        if curve.is_identity(point) {
            warn!("decrypted block is the point at infinity");
        }
        out.push_str(&message::decode_curve_point(point, Alphabet::Underscored, &curve)?);
        out.push('\n');
    }
    Ok(out)
}

/// Public key for a private exponent, `x y` on one line
pub fn curve_public_key(private: &BigInt) -> Result<String> {
    let curve = Curve::p256();
    let private = PrivateKey::new(private.clone())?;
    let public = ElGamal::new(&curve).public_key(curve.generator().clone(), &private);
    Ok(format!("{}\n", format_point(&curve, &public.key)?))
}
