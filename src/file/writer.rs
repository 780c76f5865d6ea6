//! Cursor-based writer over a mutable byte slice.
//!
//! [`Writer`] is the write-side counterpart of [`crate::file::parser::Parser`]. Table writers
//! allocate the full table buffer up front (row count times row size) and then hand a
//! `Writer` positioned on a row or column to the column codecs.

use crate::{
    file::{
        io::{write_le_at, CilIO},
        stream::ByteSink,
    },
    Error::OutOfBounds,
    Result,
};

/// A cursor-based writer over a preallocated byte slice.
///
/// # Examples
///
/// ```rust
/// use cilcolumn::file::{stream::ByteSink, writer::Writer};
///
/// let mut buffer = [0u8; 3];
/// let mut writer = Writer::new(&mut buffer);
///
/// writer.write_u8(0x7F)?;
/// writer.write_u16_le(0x1234)?;
/// assert_eq!(writer.pos(), 3);
/// assert_eq!(buffer, [0x7F, 0x34, 0x12]);
/// # Ok::<(), cilcolumn::Error>(())
/// ```
#[derive(Debug)]
pub struct Writer<'a> {
    data: &'a mut [u8],
    position: usize,
}

impl<'a> Writer<'a> {
    /// Create a new [`Writer`] starting at the beginning of `data`.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        Writer { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the underlying data buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the current position of the writer within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes that can still be written.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Move to a specific position within the data buffer.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the position is not inside the buffer.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos >= self.data.len() {
            return Err(OutOfBounds);
        }

        self.position = pos;
        Ok(())
    }

    /// Write a value of type `T` in little-endian byte order and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if there is not enough space left.
    pub fn write_le<T: CilIO>(&mut self, value: T) -> Result<()> {
        write_le_at(self.data, &mut self.position, value)
    }
}

impl ByteSink for Writer<'_> {
    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_le(value)
    }

    fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.write_le(value)
    }

    fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.write_le(value)
    }
}
