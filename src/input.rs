//! Cursor over the text read from stdin
//!
//! The input formats mix whitespace-separated numbers with whole lines
//! (plaintext, polynomial coefficients), so the reader can hand out either
//! the next token or the rest of the current line.

use crate::bigint::BigInt;
use crate::elliptic_curve::Point;
use crate::error::{Error, Result};

pub struct InputReader<'a> {
    rest: &'a str,
}

impl<'a> InputReader<'a> {
    pub fn new(input: &'a str) -> Self {
        InputReader { rest: input }
    }

    /// Next whitespace-delimited token, crossing line breaks
    pub fn next_token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    pub fn next_bigint(&mut self, field: &str) -> Result<BigInt> {
        let token = self.next_token().ok_or_else(|| Error::input(field))?;
        parse_number(token, field)
    }

    pub fn next_count(&mut self, field: &str) -> Result<usize> {
        let token = self.next_token().ok_or_else(|| Error::input(field))?;
        token.parse().map_err(|_| Error::InvalidNumber {
            field: field.to_string(),
            token: token.to_string(),
        })
    }

    /// Rest of the current line without its terminator; `None` once the
    /// input is used up
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let (line, rest) = match self.rest.find('\n') {
            Some(end) => (&self.rest[..end], &self.rest[end + 1..]),
            None => (self.rest, ""),
        };
        self.rest = rest;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Drop whatever is left on the current line
    pub fn finish_line(&mut self) {
        self.next_line();
    }

    /// Next non-blank line parsed as polynomial coefficients
    pub fn next_coefficients(&mut self, field: &str) -> Result<Vec<BigInt>> {
        let line = self.next_line().ok_or_else(|| Error::input(field))?;
        parse_coefficients(line, field)
    }

    /// A point written as `x y`, or `Z` for infinity; `None` at end of input
    pub fn next_point(&mut self, field: &str) -> Result<Option<Point>> {
        let Some(token) = self.next_token() else {
            return Ok(None);
        };
        if token == "Z" {
            return Ok(Some(Point::identity()));
        }
        let x = parse_number(token, field)?;
        let y = self.next_bigint(field)?;
        Ok(Some(Point::affine(x, y)))
    }

    /// Only whitespace remains
    pub fn is_exhausted(&self) -> bool {
        self.rest.trim().is_empty()
    }
}

pub fn parse_number(token: &str, field: &str) -> Result<BigInt> {
    token.parse().map_err(|_| Error::InvalidNumber {
        field: field.to_string(),
        token: token.to_string(),
    })
}

/// Whitespace-separated integers, lowest degree first; a blank line is an error
pub fn parse_coefficients(line: &str, field: &str) -> Result<Vec<BigInt>> {
    let coeffs = line
        .split_whitespace()
        .map(|token| parse_number(token, field))
        .collect::<Result<Vec<_>>>()?;
    if coeffs.is_empty() {
        return Err(Error::input(field));
    }
    Ok(coeffs)
}
