//! Sequential reader over an encoded data file

use crate::codecs::decode_number;
use bytes::{Buf, Bytes};
use eodata_core::{DataError, Result};
use std::fs;
use std::path::Path;
use tracing::trace;

/// Terminator for break strings
pub const BREAK_BYTE: u8 = 0xFF;

/// Forward-only cursor over a fixed byte source
///
/// # Purpose
/// Every read advances the position; nothing seeks backwards. A read that
/// needs more bytes than remain fails with [`DataError::TruncatedSource`]
/// and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct ByteCursor {
    buf: Bytes,
    len: usize,
}

impl ByteCursor {
    /// Create a cursor over in-memory data
    pub fn new(data: impl Into<Bytes>) -> Self {
        let buf = data.into();
        let len = buf.len();
        Self { buf, len }
    }

    /// Read a whole file into a new cursor
    ///
    /// The file handle is closed before this returns.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| DataError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        trace!("Read {} bytes from {:?}", data.len(), path);
        Ok(Self::new(data))
    }

    /// Current byte position
    pub fn position(&self) -> usize {
        self.len - self.buf.remaining()
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Whether every byte has been consumed
    pub fn is_empty(&self) -> bool {
        !self.buf.has_remaining()
    }

    fn ensure(&self, need: usize) -> Result<()> {
        if self.buf.remaining() < need {
            return Err(DataError::TruncatedSource {
                offset: self.position(),
                need,
                have: self.buf.remaining(),
            });
        }
        Ok(())
    }

    /// Read one raw byte
    pub fn read_byte(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// Read `n` raw bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        Ok(self.buf.copy_to_bytes(n))
    }

    /// Discard `n` bytes
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.buf.advance(n);
        Ok(())
    }

    fn read_number(&mut self, width: usize) -> Result<u32> {
        self.ensure(width)?;
        let value = decode_number(&self.buf.chunk()[..width]);
        self.buf.advance(width);
        Ok(value)
    }

    /// Read a 1-byte encoded number
    pub fn read_char(&mut self) -> Result<u32> {
        self.read_number(1)
    }

    /// Read a 2-byte encoded number
    pub fn read_short(&mut self) -> Result<u32> {
        self.read_number(2)
    }

    /// Read a 3-byte encoded number
    pub fn read_three(&mut self) -> Result<u32> {
        self.read_number(3)
    }

    /// Read a 4-byte encoded number
    pub fn read_int(&mut self) -> Result<u32> {
        self.read_number(4)
    }

    /// Read exactly `n` bytes as ASCII text
    pub fn read_fixed_string(&mut self, n: usize) -> Result<String> {
        let offset = self.position();
        let bytes = self.read_bytes(n)?;
        ascii_string(&bytes, offset)
    }

    /// Read a 1-byte encoded length followed by that many bytes of text
    pub fn read_prefixed_string(&mut self) -> Result<String> {
        let len = self.read_char()? as usize;
        self.read_fixed_string(len)
    }

    /// Read ASCII text up to a 0xFF terminator
    ///
    /// The terminator is consumed but not returned.
    pub fn read_break_string(&mut self) -> Result<String> {
        let offset = self.position();
        let end = self
            .buf
            .chunk()
            .iter()
            .position(|&b| b == BREAK_BYTE)
            .ok_or(DataError::TruncatedSource {
                offset,
                need: self.buf.remaining() + 1,
                have: self.buf.remaining(),
            })?;

        let bytes = self.buf.copy_to_bytes(end);
        self.buf.advance(1);
        ascii_string(&bytes, offset)
    }
}

fn ascii_string(bytes: &[u8], offset: usize) -> Result<String> {
    if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(DataError::InvalidText { offset: offset + pos });
    }
    Ok(bytes.iter().map(|&b| b as char).collect())
}
