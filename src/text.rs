//! Printable text <-> radix-64 symbol codes
//!
//! Codes: `0-9` -> 0..=9, `A-Z` -> 10..=35, `a-z` -> 36..=61, the word
//! separator -> 62, `.` -> 63. The Z_p and F_p^k programs separate words
//! with a space; the curve program reads whitespace-delimited tokens and
//! uses `_` instead.

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::radix;

/// Number of distinct symbol codes
pub const RADIX: u32 = 64;

/// Which character plays the role of code 62
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alphabet {
    /// Separator is `' '`
    Spaced,
    /// Separator is `'_'`
    Underscored,
}

impl Alphabet {
    fn separator(self) -> char {
        match self {
            Alphabet::Spaced => ' ',
            Alphabet::Underscored => '_',
        }
    }

    pub fn code(self, symbol: char) -> Result<u32> {
        match symbol {
            '0'..='9' => Ok(symbol as u32 - '0' as u32),
            'A'..='Z' => Ok(symbol as u32 - 'A' as u32 + 10),
            'a'..='z' => Ok(symbol as u32 - 'a' as u32 + 36),
            '.' => Ok(63),
            c if c == self.separator() => Ok(62),
            c => Err(Error::UnsupportedCharacter(c)),
        }
    }

    /// Inverse of [`Alphabet::code`]; codes wrap modulo 64
    pub fn symbol(self, code: u32) -> char {
        match code % RADIX {
            c @ 0..=9 => char::from(b'0' + c as u8),
            c @ 10..=35 => char::from(b'A' + (c - 10) as u8),
            c @ 36..=61 => char::from(b'a' + (c - 36) as u8),
            62 => self.separator(),
            _ => '.',
        }
    }

    /// Pack text into one value, first character least significant
    pub fn to_value(self, text: &str) -> Result<BigInt> {
        let codes = text
            .chars()
            .map(|c| self.code(c))
            .collect::<Result<Vec<u32>>>()?;
        if codes.last() == Some(&0) {
            return Err(Error::TrailingZeroSymbol);
        }
        Ok(radix::to_value_small(&codes, RADIX))
    }

    /// Unpack a value produced by [`Alphabet::to_value`]; zero is the empty text
    pub fn from_value(self, value: &BigInt) -> Result<String> {
        if value.is_zero() {
            return Ok(String::new());
        }
        Ok(radix::from_value_small(value, RADIX)?
            .into_iter()
            .map(|code| self.symbol(code))
            .collect())
    }
}
