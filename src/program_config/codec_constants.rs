/// Number of payload bits carried by each encoded byte.
pub const PAYLOAD_BITS: u32 = 7;
/// Mask selecting the payload bits of an encoded byte.
pub const PAYLOAD_MASK: u8 = 0b0111_1111;
/// High bit of an encoded byte; set when another byte follows.
pub const CONTINUATION_BIT: u8 = 0b1000_0000;

/// A 32-bit value never needs more than 5 groups of 7 bits.
pub const MAX_ENCODED_LEN: usize = 5;
/// Index of the last group that may be read for a 32-bit value.
pub const FINAL_GROUP_INDEX: u32 = 4;
/// The first 4 groups cover 28 bits, leaving only 4 payload bits for the final group.
/// Any bit in this mask (including the continuation bit) means the value doesn't fit.
pub const FINAL_GROUP_OVERFLOW_MASK: u8 = 0b1111_0000;
