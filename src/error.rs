//! Error types shared by every layer of the crate

use crate::bigint::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed input: missing or truncated field `{field}`")]
    InputFormat { field: String },

    #[error("malformed input: field `{field}` is not a valid number: {token:?}")]
    InvalidNumber { field: String, token: String },

    #[error("cannot parse big integer: {0:?}")]
    ParseBigInt(String),

    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: BigInt, modulus: BigInt },

    #[error("no curve point has x = {x}")]
    PointNotOnCurve { x: BigInt },

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid radix: {0}")]
    InvalidRadix(String),

    #[error("value must be non-negative")]
    NegativeValue,

    #[error("exponent must be non-negative")]
    NegativeExponent,

    #[error("character {0:?} is not in the supported alphabet")]
    UnsupportedCharacter(char),

    #[error("text ends with the symbol '0', which cannot survive radix packing")]
    TrailingZeroSymbol,

    #[error("chunk value {value} does not fit below modulus {modulus}")]
    ChunkTooLarge { value: BigInt, modulus: BigInt },

    #[error("invalid modulus: {0}")]
    InvalidModulus(String),
}

impl Error {
    pub(crate) fn input(field: &str) -> Self {
        Error::InputFormat {
            field: field.to_string(),
        }
    }
}
