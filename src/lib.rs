//! # L4 - ElGamal over Three Groups
//!
//! ElGamal encryption of short texts over the multiplicative group of a
//! prime field, the multiplicative group of an extension field, and the
//! NIST P-256 curve, all on a hand-rolled arbitrary precision integer.
//!
//! ## Features
//!
//! - **Big Integer Arithmetic**: Signed integers in radix 10^9 with long division
//! - **Prime Group (ℤ_p\*)**: Multiplication modulo p, Fermat inverses
//! - **Extension Fields (𝔽_p^d)**: Polynomials modulo a reduction polynomial h
//! - **Elliptic Curves**: NIST P-256 in projective coordinates
//! - **Text Codec**: 64-symbol alphabet packed into base-p blocks
//!
//! ## Quick Start
//!
//! ```rust
//! use l4::{BigInt, ElGamal, Group, PrimeGroup, PrivateKey};
//!
//! let group = PrimeGroup::new(BigInt::from_u64(23)).unwrap();
//! let scheme = ElGamal::new(&group);
//! let private = PrivateKey::new(BigInt::from_u64(6)).unwrap();
//! let public = scheme.public_key(BigInt::from_u64(5), &private);
//!
//! let ct = scheme.encrypt_with_ephemeral(&public, &BigInt::from_u64(10), &BigInt::from_u64(3));
//! assert_eq!(scheme.decrypt(&private, &ct).unwrap(), BigInt::from_u64(10));
//! assert!(group.is_identity(&BigInt::from_u64(24)));
//! ```
//!
//! ## Module Overview
//!
//! - [`bigint`] - Signed arbitrary precision integers
//! - [`modular`] - Reduction, exponentiation, inverses, square roots mod p
//! - [`radix`] - Digit sequences in an arbitrary base
//! - [`text`] - The 64-symbol alphabet
//! - [`group`] - The group abstraction and ℤ_p\*
//! - [`extension_field`] - Extension field arithmetic (𝔽_p^d)
//! - [`elliptic_curve`] - Projective points on short Weierstrass curves
//! - [`elgamal`] - The encryption scheme, generic over [`Group`]
//! - [`message`] - Text to group elements and back
//! - [`input`] - Token and line reader for the batch formats
//! - [`batch`] - The stdin/stdout programs as string transforms

pub mod batch;
pub mod bigint;
pub mod elgamal;
pub mod elliptic_curve;
pub mod error;
pub mod extension_field;
pub mod group;
pub mod input;
pub mod message;
pub mod modular;
pub mod radix;
pub mod text;

pub use bigint::{BigInt, Sign};
pub use elgamal::{Ciphertext, Decryption, ElGamal, PrivateKey, PublicKey};
pub use elliptic_curve::{AffinePoint, Curve, Point};
pub use error::{Error, Result};
pub use extension_field::{ExtensionField, ExtensionFieldElement};
pub use group::{Group, PrimeGroup};
pub use text::Alphabet;
