//! The byte-level capabilities the integer codec reads from and writes to.
//!
//! The codec only ever asks for one byte at a time and never holds on to a
//! source or sink after a call returns, so anything that can hand out or accept
//! single bytes can be plugged in.

#[cfg(test)]
#[path = "byte_stream_tests.rs"]
mod byte_stream_tests;

use std::convert::Infallible;
use std::io;
use std::io::{Read, Write};

use crate::codec_error::IntegerDecodingError;

/// Yields successive bytes of an input stream.
/// End-of-stream handling is up to the implementation.
pub trait ByteSource {
    type Error;

    fn next_byte(&mut self) -> Result<u8, Self::Error>;
}

/// Appends bytes to an output stream.
pub trait ByteSink {
    type Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn next_byte(&mut self) -> Result<u8, Self::Error> {
        (**self).next_byte()
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    type Error = S::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }
}

/// Reads bytes from a slice, keeping track of how many have been consumed.
#[derive(Debug)]
pub struct SliceByteSource<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> SliceByteSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceByteSource { bytes, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.bytes.len()
    }
}

impl<'a> ByteSource for SliceByteSource<'a> {
    type Error = IntegerDecodingError;

    fn next_byte(&mut self) -> Result<u8, Self::Error> {
        match self.bytes.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(IntegerDecodingError::UnexpectedEndOfInput {
                position: self.position,
            }),
        }
    }
}

/// Pulls bytes one at a time out of any `io::Read`.
/// Wrap the reader in a `BufReader` if single-byte reads are expensive.
#[derive(Debug)]
pub struct ReadByteSource<R: Read> {
    reader: R,
}

impl<R: Read> ReadByteSource<R> {
    pub fn new(reader: R) -> Self {
        ReadByteSource { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReadByteSource<R> {
    type Error = IntegerDecodingError;

    fn next_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

/// Adapts a closure into a byte source. The closure's error type is passed through as is.
pub struct FnByteSource<F>(pub F);

impl<F, E> ByteSource for FnByteSource<F>
where
    F: FnMut() -> Result<u8, E>,
{
    type Error = E;

    fn next_byte(&mut self) -> Result<u8, E> {
        (self.0)()
    }
}

/// Adapts a closure into a byte sink.
pub struct FnByteSink<F>(pub F);

impl<F, E> ByteSink for FnByteSink<F>
where
    F: FnMut(u8) -> Result<(), E>,
{
    type Error = E;

    fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        (self.0)(byte)
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

/// Writes each byte straight through to an `io::Write`.
#[derive(Debug)]
pub struct WriteByteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteByteSink<W> {
    pub fn new(writer: W) -> Self {
        WriteByteSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ByteSink for WriteByteSink<W> {
    type Error = io::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.writer.write_all(&[byte])
    }
}
