//! The column descriptor.
//!
//! [`ColumnInfo`] describes one column of a metadata table row: a diagnostic name, the
//! logical size class declared by the schema, and the byte offset and storage width assigned
//! by the table layout. It reads and writes the column value through a
//! [`crate::file::stream::ByteSource`] / [`crate::file::stream::ByteSink`] positioned on it.
//!
//! # Lifecycle
//!
//! 1. The schema declares its columns with [`ColumnInfo::new`] (usable in `const` context).
//! 2. The layout assigns offset and width once, either in place through
//!    [`ColumnInfo::set_offset`] / [`ColumnInfo::set_width`] or by building a resolved copy
//!    with [`ColumnInfo::resolved`].
//! 3. The resolved descriptor is read-only from then on and can be shared freely between
//!    threads decoding different rows.
//!
//! A descriptor without a valid width is *unresolved*; every read or write on it fails with
//! [`crate::Error::InvalidColumnSize`].
//!
//! # Examples
//!
//! ```rust
//! use cilcolumn::metadata::tables::{ColumnInfo, ColumnSize, ColumnWidth};
//! use cilcolumn::file::{parser::Parser, writer::Writer};
//!
//! const NAME: ColumnInfo = ColumnInfo::new("Name", ColumnSize::Strings);
//!
//! let name = NAME.resolved(2, ColumnWidth::Word);
//!
//! let mut row = [0u8; 4];
//! name.write_row(&mut row, 0x1234)?;
//! assert_eq!(row, [0x00, 0x00, 0x34, 0x12]);
//!
//! let mut parser = Parser::new(&row);
//! parser.advance_by(2)?;
//! assert_eq!(name.read(&mut parser)?, 0x1234);
//! assert_eq!(parser.pos(), 4);
//! # Ok::<(), cilcolumn::Error>(())
//! ```

use std::fmt;

use crate::{
    file::{
        parser::Parser,
        stream::{ByteSink, ByteSource},
        writer::Writer,
    },
    metadata::tables::{ColumnSize, ColumnWidth, Narrowing},
    Error::{self, OutOfBounds},
    Result,
};

/// Info about one column in a metadata table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnInfo {
    name: &'static str,
    size: ColumnSize,
    offset: u32,
    width: Option<ColumnWidth>,
}

impl ColumnInfo {
    /// Creates an unresolved column with offset 0.
    ///
    /// ## Arguments
    /// * `name` - Diagnostic name of the column, never interpreted
    /// * `size` - The logical size class declared by the schema
    #[must_use]
    pub const fn new(name: &'static str, size: ColumnSize) -> Self {
        ColumnInfo {
            name,
            size,
            offset: 0,
            width: None,
        }
    }

    /// Returns a copy of this column with offset and width assigned.
    ///
    /// Preferred over the setters when the layout builds a fresh row schema: the original
    /// declaration stays untouched and the result can be published as-is.
    #[must_use]
    pub const fn resolved(self, offset: u32, width: ColumnWidth) -> Self {
        ColumnInfo {
            offset,
            width: Some(width),
            ..self
        }
    }

    /// Returns the column name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the logical size class of the column.
    #[must_use]
    pub const fn column_size(&self) -> ColumnSize {
        self.size
    }

    /// Returns the byte offset of the column within the table row.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the resolved storage width, or `None` while the column is unresolved.
    #[must_use]
    pub const fn width(&self) -> Option<ColumnWidth> {
        self.width
    }

    /// Returns the resolved storage width in bytes, 0 while the column is unresolved.
    #[must_use]
    pub const fn width_bytes(&self) -> u8 {
        match self.width {
            Some(width) => width.bytes(),
            None => 0,
        }
    }

    /// Returns true once a valid width has been assigned.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.width.is_some()
    }

    /// Assigns the byte offset of the column within the table row.
    ///
    /// Overwrites any earlier offset. Ordering against [`ColumnInfo::set_width`] is the
    /// caller's concern.
    pub fn set_offset(&mut self, offset: u32) {
        self.offset = offset;
    }

    /// Assigns the storage width of the column in bytes.
    ///
    /// Only 1, 2 and 4 resolve the column. Any other width leaves it unresolved, so that
    /// later reads and writes fail instead of desynchronizing the row cursor.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidColumnSize`] if `width` is not 1, 2 or 4.
    pub fn set_width(&mut self, width: u8) -> Result<()> {
        match ColumnWidth::try_from(width) {
            Ok(resolved) => {
                log::debug!(
                    "column {} ({}) resolved to {} bytes",
                    self.name,
                    self.size,
                    resolved
                );
                self.width = Some(resolved);
                Ok(())
            }
            Err(_) => {
                log::warn!("column {} ({}): rejected width {}", self.name, self.size, width);
                self.width = None;
                Err(Error::InvalidColumnSize {
                    name: self.name,
                    size: width,
                })
            }
        }
    }

    /// Reads the column value from a source positioned on this column.
    ///
    /// The stored value is zero-extended to `u32`. Exactly [`ColumnInfo::width_bytes`]
    /// bytes are consumed.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidColumnSize`] if the column is unresolved, and
    /// propagates errors of the source unchanged.
    pub fn read<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<u32> {
        self.resolved_width()?.decode(source)
    }

    /// Writes the column value to a sink positioned on this column.
    ///
    /// Values wider than the column are truncated to their low bytes, see
    /// [`Narrowing::Truncate`]. Exactly [`ColumnInfo::width_bytes`] bytes are produced.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidColumnSize`] if the column is unresolved, and
    /// propagates errors of the sink unchanged.
    pub fn write<S: ByteSink + ?Sized>(&self, sink: &mut S, value: u32) -> Result<()> {
        self.write_with(sink, value, Narrowing::Truncate)
    }

    /// Writes the column value, treating out-of-range values according to `narrowing`.
    ///
    /// Under [`Narrowing::Strict`] nothing is written if the value does not fit.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidColumnSize`] if the column is unresolved,
    /// [`crate::Error::ValueOverflow`] if a strict write does not fit, and propagates errors
    /// of the sink unchanged.
    pub fn write_with<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        value: u32,
        narrowing: Narrowing,
    ) -> Result<()> {
        let width = self.resolved_width()?;
        if !width.fits(value) {
            if narrowing.is_strict() {
                return Err(Error::ValueOverflow {
                    name: self.name,
                    value,
                    width,
                });
            }

            log::trace!(
                "column {}: truncating {:#x} to {:#x}",
                self.name,
                value,
                width.narrow(value)
            );
        }

        width.encode(sink, value)
    }

    /// Reads the column value out of a complete table row.
    ///
    /// Only the bytes in `[offset, offset + width)` of `row` are accessed.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidColumnSize`] if the column is unresolved and
    /// [`crate::Error::OutOfBounds`] if the row is too short for this column.
    pub fn read_row(&self, row: &[u8]) -> Result<u32> {
        let width = self.resolved_width()?;

        let mut parser = Parser::new(row);
        parser.seek(self.row_offset()?)?;
        width.decode(&mut parser)
    }

    /// Writes the column value into a complete table row.
    ///
    /// Only the bytes in `[offset, offset + width)` of `row` are modified. Out-of-range
    /// values are truncated as in [`ColumnInfo::write`].
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidColumnSize`] if the column is unresolved and
    /// [`crate::Error::OutOfBounds`] if the row is too short for this column.
    pub fn write_row(&self, row: &mut [u8], value: u32) -> Result<()> {
        self.resolved_width()?;

        let mut writer = Writer::new(row);
        writer.seek(self.row_offset()?)?;
        self.write(&mut writer, value)
    }

    fn resolved_width(&self) -> Result<ColumnWidth> {
        self.width.ok_or(Error::InvalidColumnSize {
            name: self.name,
            size: 0,
        })
    }

    fn row_offset(&self) -> Result<usize> {
        usize::try_from(self.offset).map_err(|_| OutOfBounds)
    }
}

impl fmt::Display for ColumnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.offset,
            self.width_bytes(),
            self.name,
            self.size
        )
    }
}
