//! Positioned reads over an in-memory file image.

use byteorder::{BigEndian, ByteOrder};

use super::types::error::{MontageError, Result};
use super::types::models::BlockId;

/// A sequential, seekable reader over an immutable byte buffer.
///
/// Every read either returns exactly the requested bytes and advances, or
/// fails and leaves the position unchanged. All integers are big-endian.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Moves to an absolute offset. Seeking to the very end is allowed.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        match usize::try_from(offset) {
            Ok(target) if target <= self.data.len() => {
                self.pos = target;
                Ok(())
            }
            _ => Err(MontageError::InvalidOffset {
                offset,
                len: self.data.len(),
            }),
        }
    }

    /// Returns the next `n` bytes and advances past them.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(MontageError::TruncatedData {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        let data: &'a [u8] = self.data;
        let bytes = &data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read(1)?[0])
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.read(4)?))
    }

    pub fn read_block_id(&mut self) -> Result<BlockId> {
        let bytes = self.read(4)?;
        Ok(BlockId([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads an `n`-byte NUL-padded ASCII field, keeping the first NUL-terminated segment.
    pub fn read_fixed_ascii(&mut self, n: usize) -> Result<String> {
        let offset = self.pos;
        let bytes = self.read(n)?;
        ascii_until_nul(bytes, offset)
    }
}

/// Decodes `bytes` up to the first NUL as ASCII.
///
/// `offset` is only used for error reporting.
pub(crate) fn ascii_until_nul(bytes: &[u8], offset: usize) -> Result<String> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let text = &bytes[..end];
    if !text.is_ascii() {
        return Err(MontageError::InvalidText { offset });
    }
    // The slice is ASCII, so every byte maps to one char.
    Ok(text.iter().map(|&b| b as char).collect())
}
