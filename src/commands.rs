//! The operations behind the `encode` and `decode` subcommands.

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;

use std::error::Error;

use log::info;

use crate::byte_stream::SliceByteSource;
use crate::codec_error::InputError;
use crate::input_parsing::{parse_byte_tokens, parse_signed_literal, parse_unsigned_literal};
use crate::integer_encoding::{
    encode_signed_int, encode_unsigned_int, read_signed_int, read_unsigned_int,
};
use crate::program_config::output_format::OutputOptions;

/// Encode each literal, producing one `<value>: <bytes>` line per value.
pub fn encode_values(
    literals: &[String],
    signed: bool,
    output_options: &OutputOptions,
) -> Result<Vec<String>, Box<dyn Error>> {
    info!("Encoding {} value(s), signed: {}", literals.len(), signed);

    let mut lines = Vec::new();
    for literal in literals {
        let line = if signed {
            let value = parse_signed_literal(literal)?;
            format!(
                "{}: {}",
                value,
                output_options.format_bytes(&encode_signed_int(value))
            )
        } else {
            let value = parse_unsigned_literal(literal)?;
            format!(
                "{}: {}",
                value,
                output_options.format_bytes(&encode_unsigned_int(value))
            )
        };
        lines.push(line);
    }

    Ok(lines)
}

/// Decode every value packed back to back in the given bytes, one line per value.
pub fn decode_values(tokens: &[String], signed: bool) -> Result<Vec<String>, Box<dyn Error>> {
    let bytes = parse_byte_tokens(tokens)?;
    if bytes.is_empty() {
        return Err(Box::new(InputError::NoInput));
    }
    info!("Decoding {} byte(s), signed: {}", bytes.len(), signed);

    let mut source = SliceByteSource::new(&bytes);
    let mut lines = Vec::new();
    while !source.is_exhausted() {
        let line = if signed {
            read_signed_int(&mut source)?.to_string()
        } else {
            read_unsigned_int(&mut source)?.to_string()
        };
        lines.push(line);
    }

    Ok(lines)
}
