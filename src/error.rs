use thiserror::Error;

use crate::metadata::tables::ColumnWidth;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Column codecs fail for two distinct reasons, and the variants keep them apart:
///
/// ## Contract Violations
/// - [`Error::InvalidColumnSize`] - A column was used (or resolved) without a valid storage width
/// - [`Error::ValueOverflow`] - A strict write was asked to encode a value that does not fit
///
/// ## I/O Errors
/// - [`Error::OutOfBounds`] - A slice-backed source or sink ran out of bytes
/// - [`Error::FileError`] - A `std::io` reader or writer failed
///
/// Contract violations indicate a defect in the row schema that owns the column. Once one is
/// raised, the cursor position of every later column in the row is unknown, so the enclosing
/// table operation should be abandoned instead of retried.
///
/// # Examples
///
/// ```rust
/// use cilcolumn::{Error, metadata::tables::{ColumnInfo, ColumnSize}, file::parser::Parser};
///
/// let column = ColumnInfo::new("Flags", ColumnSize::UInt16);
/// let mut parser = Parser::new(&[0x01, 0x00]);
///
/// match column.read(&mut parser) {
///     Err(Error::InvalidColumnSize { name, size }) => {
///         assert_eq!(name, "Flags");
///         assert_eq!(size, 0);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted while reading or writing a column.
    ///
    /// Slice-backed sources and sinks return this when fewer bytes remain than the
    /// column width requires. Nothing is consumed or produced in that case.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// The column has no valid storage width.
    ///
    /// Raised by [`crate::metadata::tables::ColumnInfo::read`] and friends while the column
    /// is unresolved, and by [`crate::metadata::tables::ColumnInfo::set_width`] when offered
    /// a width other than 1, 2 or 4.
    ///
    /// # Fields
    ///
    /// * `name` - The diagnostic name of the column
    /// * `size` - The offending width in bytes (0 for a column that was never resolved)
    #[error("Invalid column size - {name}: {size}")]
    InvalidColumnSize {
        /// The name of the affected column
        name: &'static str,
        /// The width that was found or offered
        size: u8,
    },

    /// A value does not fit into the storage width of a column.
    ///
    /// Only produced under [`crate::metadata::tables::Narrowing::Strict`]; the default
    /// policy truncates instead.
    #[error("Value {value:#x} does not fit into column {name} ({width} bytes)")]
    ValueOverflow {
        /// The name of the affected column
        name: &'static str,
        /// The rejected value
        value: u32,
        /// The resolved width of the column
        width: ColumnWidth,
    },

    /// File I/O error.
    ///
    /// Wraps errors of the underlying `std::io` reader or writer unchanged.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
