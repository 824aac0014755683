#[cfg(test)]
#[path = "input_parsing_tests.rs"]
mod input_parsing_tests;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::codec_error::InputError;

lazy_static! {
    static ref BYTE_TOKEN_RE: Regex = Regex::new(r"^(0[xX])?([0-9a-fA-F]+)$").unwrap();
    static ref INTEGER_LITERAL_RE: Regex =
        Regex::new(r"^(-)?(?:0[xX]([0-9a-fA-F]+)|([0-9]+))$").unwrap();
}

/// Parse byte tokens such as `0x80 0x01`, `80,01` or `8001` into bytes.
///
/// A `0x`-prefixed token is a single byte. A bare token of one or two digits is
/// a single byte, longer bare tokens are split into pairs of hex digits.
pub fn parse_byte_tokens(tokens: &[String]) -> Result<Vec<u8>, InputError> {
    let mut bytes = Vec::new();

    for token in tokens
        .iter()
        .flat_map(|t| t.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        let captures = BYTE_TOKEN_RE
            .captures(token)
            .ok_or_else(|| InputError::InvalidByteToken(token.to_owned()))?;
        let prefixed = captures.get(1).is_some();
        let digits = &captures[2];

        if digits.len() <= 2 {
            bytes.push(parse_hex_byte(digits, token)?);
        } else if !prefixed && digits.len() % 2 == 0 {
            for i in (0..digits.len()).step_by(2) {
                bytes.push(parse_hex_byte(&digits[i..i + 2], token)?);
            }
        } else {
            return Err(InputError::InvalidByteToken(token.to_owned()));
        }
    }

    trace!("parsed input bytes: {:02x?}", bytes);
    Ok(bytes)
}

fn parse_hex_byte(digits: &str, token: &str) -> Result<u8, InputError> {
    u8::from_str_radix(digits, 16).map_err(|_| InputError::InvalidByteToken(token.to_owned()))
}

/// Parse a decimal or `0x` hex literal into an unsigned 32-bit value.
pub fn parse_unsigned_literal(literal: &str) -> Result<u32, InputError> {
    let (negative, magnitude) = parse_literal(literal)?;
    if negative && magnitude != 0 {
        return Err(InputError::IntegerOutOfRange(literal.to_owned()));
    }
    u32::try_from(magnitude).map_err(|_| InputError::IntegerOutOfRange(literal.to_owned()))
}

/// Parse a decimal or `0x` hex literal, optionally negative, into a signed 32-bit value.
pub fn parse_signed_literal(literal: &str) -> Result<i32, InputError> {
    let (negative, magnitude) = parse_literal(literal)?;
    let value = if negative {
        -(magnitude as i64)
    } else {
        magnitude as i64
    };
    i32::try_from(value).map_err(|_| InputError::IntegerOutOfRange(literal.to_owned()))
}

/// Split a literal into its sign and magnitude.
/// Magnitudes that don't fit in 33 bits are reported as out of range.
fn parse_literal(literal: &str) -> Result<(bool, u64), InputError> {
    let trimmed = literal.trim();
    let captures = INTEGER_LITERAL_RE
        .captures(trimmed)
        .ok_or_else(|| InputError::InvalidIntegerLiteral(literal.to_owned()))?;

    let negative = captures.get(1).is_some();
    let magnitude = match (captures.get(2), captures.get(3)) {
        (Some(hex), _) => u64::from_str_radix(hex.as_str(), 16),
        (None, Some(decimal)) => decimal.as_str().parse::<u64>(),
        (None, None) => return Err(InputError::InvalidIntegerLiteral(literal.to_owned())),
    }
    .map_err(|_| InputError::IntegerOutOfRange(literal.to_owned()))?;

    if magnitude > 1 << 32 {
        return Err(InputError::IntegerOutOfRange(literal.to_owned()));
    }

    Ok((negative, magnitude))
}
