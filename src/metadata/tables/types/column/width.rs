//! Resolved storage width of a metadata table column.

use std::fmt;

use crate::{
    file::stream::{ByteSink, ByteSource},
    Error, Result,
};

/// The number of bytes a column occupies inside a table row.
///
/// ECMA-335 stores every table column as a 1, 2 or 4 byte little-endian unsigned integer.
/// Which one applies is decided by the table layout (from heap sizes and row counts) and is
/// then fixed for every row of the table. The codec dispatch in [`ColumnWidth::decode`] and
/// [`ColumnWidth::encode`] is exhaustive over the three variants.
///
/// # Examples
///
/// ```rust
/// use cilcolumn::metadata::tables::ColumnWidth;
///
/// let width = ColumnWidth::try_from(2u8)?;
/// assert_eq!(width, ColumnWidth::Word);
/// assert_eq!(width.max_value(), 0xFFFF);
/// assert_eq!(width.narrow(0x1_0001), 1);
/// assert!(ColumnWidth::try_from(3u8).is_err());
/// # Ok::<(), cilcolumn::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ColumnWidth {
    /// One byte
    Byte = 1,
    /// Two bytes, little-endian
    Word = 2,
    /// Four bytes, little-endian
    DWord = 4,
}

impl ColumnWidth {
    /// Maps the ECMA-335 "large index" flag of a heap or table to a width.
    ///
    /// Heap and table indexes are 4 bytes wide if the target is large, 2 bytes otherwise.
    #[must_use]
    pub const fn from_large(is_large: bool) -> Self {
        if is_large {
            ColumnWidth::DWord
        } else {
            ColumnWidth::Word
        }
    }

    /// Returns the width in bytes.
    #[must_use]
    pub const fn bytes(self) -> u8 {
        self as u8
    }

    /// Returns the largest value that can be stored without truncation.
    #[must_use]
    pub const fn max_value(self) -> u32 {
        match self {
            ColumnWidth::Byte => 0xFF,
            ColumnWidth::Word => 0xFFFF,
            ColumnWidth::DWord => u32::MAX,
        }
    }

    /// Returns true if `value` can be stored without truncation.
    #[must_use]
    pub const fn fits(self, value: u32) -> bool {
        value <= self.max_value()
    }

    /// Keeps the low `bytes()` bytes of `value`.
    ///
    /// This is the narrowing that [`ColumnWidth::encode`] applies; decoding the encoded
    /// bytes yields exactly this value.
    #[must_use]
    pub const fn narrow(self, value: u32) -> u32 {
        value & self.max_value()
    }

    /// Reads one value of this width from `source` and widens it to `u32`.
    ///
    /// Consumes exactly [`ColumnWidth::bytes`] bytes.
    ///
    /// # Errors
    /// Propagates the error of the source unchanged.
    pub fn decode<S: ByteSource + ?Sized>(self, source: &mut S) -> Result<u32> {
        match self {
            ColumnWidth::Byte => Ok(u32::from(source.read_u8()?)),
            ColumnWidth::Word => Ok(u32::from(source.read_u16_le()?)),
            ColumnWidth::DWord => source.read_u32_le(),
        }
    }

    /// Writes the low bytes of `value` to `sink`.
    ///
    /// Values that do not fit are truncated to [`ColumnWidth::narrow`] without notice.
    /// Produces exactly [`ColumnWidth::bytes`] bytes.
    ///
    /// # Errors
    /// Propagates the error of the sink unchanged.
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode<S: ByteSink + ?Sized>(self, sink: &mut S, value: u32) -> Result<()> {
        match self {
            ColumnWidth::Byte => sink.write_u8(value as u8),
            ColumnWidth::Word => sink.write_u16_le(value as u16),
            ColumnWidth::DWord => sink.write_u32_le(value),
        }
    }
}

impl TryFrom<u8> for ColumnWidth {
    type Error = Error;

    /// Accepts 1, 2 and 4.
    ///
    /// Any other byte yields [`Error::InvalidColumnSize`] with an empty column name; callers
    /// that know the column replace it.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(ColumnWidth::Byte),
            2 => Ok(ColumnWidth::Word),
            4 => Ok(ColumnWidth::DWord),
            size => Err(Error::InvalidColumnSize { name: "", size }),
        }
    }
}

impl From<ColumnWidth> for u8 {
    fn from(width: ColumnWidth) -> Self {
        width.bytes()
    }
}

impl From<ColumnWidth> for usize {
    fn from(width: ColumnWidth) -> Self {
        usize::from(width.bytes())
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}
