//! LEB128-style variable-length encoding of 32-bit integers.
//!
//! Each byte carries 7 payload bits, least-significant group first, with the
//! high bit set on every byte except the last. Signed values go through a
//! zig-zag transform and then use the unsigned encoding.

#[cfg(test)]
#[path = "integer_encoding_tests.rs"]
mod integer_encoding_tests;

use log::{debug, trace};

use crate::byte_stream::{ByteSink, ByteSource, SliceByteSource};
use crate::codec_error::{IntegerDecodingError, OverflowError};
use crate::program_config::codec_constants::{
    CONTINUATION_BIT, FINAL_GROUP_INDEX, FINAL_GROUP_OVERFLOW_MASK, PAYLOAD_BITS, PAYLOAD_MASK,
};

/// Read one unsigned integer, consuming exactly as many bytes as it was encoded with.
///
/// Fails with [`OverflowError`] (converted into the source's error type) if the
/// 5th byte has any bit above bit 3 set. At most 5 bytes are ever read.
/// Errors from the source itself are returned unchanged.
pub fn read_unsigned_int<S>(source: &mut S) -> Result<u32, S::Error>
where
    S: ByteSource + ?Sized,
    S::Error: From<OverflowError>,
{
    let mut result: u32 = 0;
    let mut group_index: u32 = 0;

    loop {
        let byte = source.next_byte()?;
        result |= u32::from(byte & PAYLOAD_MASK) << (group_index * PAYLOAD_BITS);

        // the first 4 groups always fit (4 * 7 = 28 bits),
        // so the final group may only carry the 4 low-order bits
        if group_index == FINAL_GROUP_INDEX && byte & FINAL_GROUP_OVERFLOW_MASK != 0 {
            debug!("overflow in final group: {:#04x}", byte);
            return Err(OverflowError.into());
        }

        if byte & CONTINUATION_BIT == 0 {
            trace!("read unsigned int {} ({} bytes)", result, group_index + 1);
            return Ok(result);
        }
        group_index += 1;
    }
}

/// Write the minimal encoding of `value` (1 to 5 bytes).
/// The only possible errors are the sink's own.
pub fn write_unsigned_int<S>(sink: &mut S, mut value: u32) -> Result<(), S::Error>
where
    S: ByteSink + ?Sized,
{
    trace!("writing unsigned int {}", value);

    loop {
        // take lowest 7 bits
        let mut byte = (value & u32::from(PAYLOAD_MASK)) as u8;
        value >>= PAYLOAD_BITS;
        if value != 0 {
            byte |= CONTINUATION_BIT;
        }
        sink.write_byte(byte)?;
        if value == 0 {
            return Ok(());
        }
    }
}

pub fn read_signed_int<S>(source: &mut S) -> Result<i32, S::Error>
where
    S: ByteSource + ?Sized,
    S::Error: From<OverflowError>,
{
    read_unsigned_int(source).map(zig_zag_decode)
}

pub fn write_signed_int<S>(sink: &mut S, value: i32) -> Result<(), S::Error>
where
    S: ByteSink + ?Sized,
{
    write_unsigned_int(sink, zig_zag_encode(value))
}

/// Interleave signed values into unsigned ones: 0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...
pub fn zig_zag_encode(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zig_zag_encode`].
pub fn zig_zag_decode(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Number of bytes [`write_unsigned_int`] emits for `value`.
pub fn encoded_len(value: u32) -> usize {
    let bit_length = (u32::BITS - value.leading_zeros()) as usize;
    std::cmp::max(1, (bit_length + PAYLOAD_BITS as usize - 1) / PAYLOAD_BITS as usize)
}

pub fn encode_unsigned_int(value: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(encoded_len(value));
    write_unsigned_int(&mut bytes, value).unwrap_or_else(|never| match never {});
    bytes
}

pub fn encode_signed_int(value: i32) -> Vec<u8> {
    encode_unsigned_int(zig_zag_encode(value))
}

/// Decode one unsigned integer from the front of `bytes`,
/// returning it with the number of bytes consumed.
pub fn decode_unsigned_int(bytes: &[u8]) -> Result<(u32, usize), IntegerDecodingError> {
    let mut source = SliceByteSource::new(bytes);
    let value = read_unsigned_int(&mut source)?;
    Ok((value, source.position()))
}

pub fn decode_signed_int(bytes: &[u8]) -> Result<(i32, usize), IntegerDecodingError> {
    let (value, consumed) = decode_unsigned_int(bytes)?;
    Ok((zig_zag_decode(value), consumed))
}
