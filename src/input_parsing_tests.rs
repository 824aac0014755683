#[cfg(test)]
mod input_parsing_tests {
    use super::super::{parse_byte_tokens, parse_signed_literal, parse_unsigned_literal};
    use crate::codec_error::InputError;

    fn tokens(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prefixed_bytes() {
        assert_eq!(
            parse_byte_tokens(&tokens(&["0x80", "0X01"])),
            Ok(vec![0x80, 0x01])
        );
    }

    #[test]
    fn bare_hex_run_is_split_into_pairs() {
        assert_eq!(
            parse_byte_tokens(&tokens(&["ffffffff0f"])),
            Ok(vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F])
        );
    }

    #[test]
    fn comma_separated_bytes() {
        assert_eq!(
            parse_byte_tokens(&tokens(&["80,1", "7f"])),
            Ok(vec![0x80, 0x01, 0x7F])
        );
    }

    #[test]
    fn odd_length_run_is_rejected() {
        assert_eq!(
            parse_byte_tokens(&tokens(&["fff"])),
            Err(InputError::InvalidByteToken("fff".into()))
        );
    }

    #[test]
    fn prefixed_token_longer_than_a_byte_is_rejected() {
        assert_eq!(
            parse_byte_tokens(&tokens(&["0x100"])),
            Err(InputError::InvalidByteToken("0x100".into()))
        );
    }

    #[test]
    fn non_hex_token_is_rejected() {
        assert_eq!(
            parse_byte_tokens(&tokens(&["0xzz"])),
            Err(InputError::InvalidByteToken("0xzz".into()))
        );
    }

    #[test]
    fn unsigned_literals() {
        assert_eq!(parse_unsigned_literal("0"), Ok(0));
        assert_eq!(parse_unsigned_literal("128"), Ok(128));
        assert_eq!(parse_unsigned_literal("0xFFFFFFFF"), Ok(u32::MAX));
        assert_eq!(parse_unsigned_literal("-0"), Ok(0));
    }

    #[test]
    fn unsigned_literal_out_of_range() {
        assert_eq!(
            parse_unsigned_literal("4294967296"),
            Err(InputError::IntegerOutOfRange("4294967296".into()))
        );
        assert_eq!(
            parse_unsigned_literal("-1"),
            Err(InputError::IntegerOutOfRange("-1".into()))
        );
    }

    #[test]
    fn signed_literals() {
        assert_eq!(parse_signed_literal("-1"), Ok(-1));
        assert_eq!(parse_signed_literal("-2147483648"), Ok(i32::MIN));
        assert_eq!(parse_signed_literal("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_signed_literal("-0x10"), Ok(-16));
    }

    #[test]
    fn signed_literal_out_of_range() {
        assert_eq!(
            parse_signed_literal("2147483648"),
            Err(InputError::IntegerOutOfRange("2147483648".into()))
        );
    }

    #[test]
    fn malformed_literal() {
        assert_eq!(
            parse_signed_literal("12abc"),
            Err(InputError::InvalidIntegerLiteral("12abc".into()))
        );
        assert_eq!(
            parse_unsigned_literal("99999999999999999999999"),
            Err(InputError::IntegerOutOfRange("99999999999999999999999".into()))
        );
    }
}
