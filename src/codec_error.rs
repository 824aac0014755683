use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use std::io;

/// Raised while decoding when the encoded value needs more than 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowError;

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value is larger than 32-bits")
    }
}

impl Error for OverflowError {}

/// Error type of the byte sources that ship with this crate.
#[derive(Debug)]
pub enum IntegerDecodingError {
    Overflow,
    /// The input ran out in the middle of a value.
    UnexpectedEndOfInput {
        position: usize,
    },
    Io(io::Error),
}

impl fmt::Display for IntegerDecodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IntegerDecodingError::Overflow => write!(f, "{}", OverflowError),
            IntegerDecodingError::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at byte {}", position)
            }
            IntegerDecodingError::Io(e) => write!(f, "I/O error while reading bytes: {}", e),
        }
    }
}

impl Error for IntegerDecodingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IntegerDecodingError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<OverflowError> for IntegerDecodingError {
    fn from(_: OverflowError) -> Self {
        IntegerDecodingError::Overflow
    }
}

impl From<io::Error> for IntegerDecodingError {
    fn from(e: io::Error) -> Self {
        IntegerDecodingError::Io(e)
    }
}

/// Errors from parsing command line literals.
#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    InvalidByteToken(String),
    InvalidIntegerLiteral(String),
    IntegerOutOfRange(String),
    NoInput,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidByteToken(token) => {
                write!(f, "Invalid byte token: \"{}\"", token)
            }
            InputError::InvalidIntegerLiteral(literal) => {
                write!(f, "Invalid integer literal: \"{}\"", literal)
            }
            InputError::IntegerOutOfRange(literal) => {
                write!(f, "Integer literal out of 32-bit range: \"{}\"", literal)
            }
            InputError::NoInput => write!(f, "No input bytes given"),
        }
    }
}

impl Error for InputError {}
