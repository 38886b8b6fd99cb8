//! Fixed-width little-endian field encoding shared by every record kind.
//!
//! All multi-byte integers are little-endian with explicit widths. Text
//! fields occupy a fixed zero-padded byte buffer; content runs up to the
//! first NUL byte.

use crate::errors::StoreError;

pub fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn put_i64(buf: &mut Vec<u8>, value: i64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn put_f64(buf: &mut Vec<u8>, value: f64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Writes `text` into a zero-padded buffer of exactly `width` bytes.
///
/// Callers bound their text below `width` at construction time, but the
/// truncation here is kept as a hard stop so an oversized value can never
/// desync the record layout.
pub fn put_text(buf: &mut Vec<u8>, text: &str, width: usize) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(width.saturating_sub(1));
    buf.extend_from_slice(&bytes[..len]);
    buf.resize(buf.len() + (width - len), 0);
}

/// Cursor over one encoded record, validating widths as fields are read.
pub struct FieldReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], StoreError> {
        let end = self.pos.checked_add(len).filter(|end| *end <= self.bytes.len());
        match end {
            Some(end) => {
                let slice = &self.bytes[self.pos..end];
                self.pos = end;
                Ok(slice)
            }
            None => Err(StoreError::CorruptData(format!(
                "record truncated at byte {}",
                self.pos
            ))),
        }
    }

    pub fn read_u32(&mut self) -> Result<u32, StoreError> {
        let slice = self.take(4)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(slice);
        Ok(u32::from_le_bytes(raw))
    }

    pub fn read_i64(&mut self) -> Result<i64, StoreError> {
        let slice = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(slice);
        Ok(i64::from_le_bytes(raw))
    }

    pub fn read_f64(&mut self) -> Result<f64, StoreError> {
        let slice = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(slice);
        Ok(f64::from_le_bytes(raw))
    }

    /// Reads a zero-padded text buffer of `width` bytes.
    pub fn read_text(&mut self, width: usize) -> Result<String, StoreError> {
        let slice = self.take(width)?;
        let end = slice.iter().position(|byte| *byte == 0).unwrap_or(width);
        let text = std::str::from_utf8(&slice[..end])
            .map_err(|_| StoreError::CorruptData("text field is not valid UTF-8".into()))?;
        Ok(text.to_string())
    }

    /// Fails unless every byte of the record has been consumed.
    pub fn finish(self) -> Result<(), StoreError> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(StoreError::CorruptData(format!(
                "record has {} unread trailing bytes",
                self.bytes.len() - self.pos
            )))
        }
    }
}
