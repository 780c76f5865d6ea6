//! Low-level byte stream parser for metadata table rows.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor over a borrowed
//! byte slice. It is the default [`crate::file::stream::ByteSource`] handed to column
//! codecs: the table reader positions it on a column (or on the first column of a row) and
//! each column consumes exactly its own width.
//!
//! # Examples
//!
//! ```rust
//! use cilcolumn::file::parser::Parser;
//!
//! // Flags (u16) followed by a 2-byte #Strings index
//! let row = [0x06, 0x00, 0x2A, 0x01];
//! let mut parser = Parser::new(&row);
//!
//! assert_eq!(parser.peek_le::<u16>()?, 0x0006);
//! parser.advance_by(2)?;
//! assert_eq!(parser.read_le::<u16>()?, 0x012A);
//! assert!(!parser.has_more_data());
//! # Ok::<(), cilcolumn::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All reading and navigation methods are bounds-checked and return
//! [`crate::Error::OutOfBounds`] instead of reading past the end of the buffer. A failed
//! read leaves the position unchanged.

use crate::{
    file::{
        io::{read_le_at, CilIO},
        stream::ByteSource,
    },
    Error::OutOfBounds,
    Result,
};

/// A cursor-based reader over a byte slice.
///
/// `Parser` borrows its data and never copies it. Cloning a parser is cheap and yields an
/// independent cursor over the same bytes.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of `data`.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
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

    /// Returns true if there are bytes left to read.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Move to a specific position within the data buffer.
    ///
    /// # Arguments
    /// * `pos` - The position to seek to
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the position is not inside the buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cilcolumn::file::parser::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// parser.seek(2)?;
    /// assert_eq!(parser.read_le::<u8>()?, 0x03);
    /// # Ok::<(), cilcolumn::Error>(())
    /// ```
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos >= self.data.len() {
            return Err(OutOfBounds);
        }

        self.position = pos;
        Ok(())
    }

    /// Skips `step` bytes.
    ///
    /// # Arguments
    /// * `step` - Amount of bytes to advance
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        if step > self.remaining() {
            return Err(OutOfBounds);
        }

        self.position += step;
        Ok(())
    }

    /// Returns the current position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the whole underlying buffer, independent of the position.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the number of bytes between the current position and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Read a value of type `T` in little-endian byte order and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
    pub fn read_le<T: CilIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read a value of type `T` in little-endian byte order without advancing.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
    pub fn peek_le<T: CilIO>(&self) -> Result<T> {
        let mut temp_position = self.position;
        read_le_at::<T>(self.data, &mut temp_position)
    }
}

impl ByteSource for Parser<'_> {
    fn read_u8(&mut self) -> Result<u8> {
        self.read_le::<u8>()
    }

    fn read_u16_le(&mut self) -> Result<u16> {
        self.read_le::<u16>()
    }

    fn read_u32_le(&mut self) -> Result<u32> {
        self.read_le::<u32>()
    }
}
