//! Logical size class of a metadata table column.

use std::fmt;

use crate::metadata::tables::{CodedIndexType, ColumnWidth, TableId};

/// What a column stores, as declared by the table schema.
///
/// The size class expresses intent, not storage width. Only the plain integer classes have
/// an intrinsic width; heap, table and coded indexes are 2 or 4 bytes wide depending on the
/// size of whatever they point into, which is decided by the table layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnSize {
    /// Unsigned 8-bit value
    Byte,
    /// Signed 16-bit value, stored as its two's complement bit pattern
    Int16,
    /// Unsigned 16-bit value
    UInt16,
    /// Signed 32-bit value, stored as its two's complement bit pattern
    Int32,
    /// Unsigned 32-bit value
    UInt32,
    /// Index into the `#Strings` heap
    Strings,
    /// Index into the `#GUID` heap
    Guid,
    /// Index into the `#Blob` heap
    Blob,
    /// Row index into a single table
    Table(TableId),
    /// Coded index into one of several tables
    Coded(CodedIndexType),
}

impl ColumnSize {
    /// Returns the width of the fixed-size classes.
    ///
    /// `None` for heap, table and coded indexes, whose width is resolved externally.
    #[must_use]
    pub const fn fixed_width(self) -> Option<ColumnWidth> {
        match self {
            ColumnSize::Byte => Some(ColumnWidth::Byte),
            ColumnSize::Int16 | ColumnSize::UInt16 => Some(ColumnWidth::Word),
            ColumnSize::Int32 | ColumnSize::UInt32 => Some(ColumnWidth::DWord),
            ColumnSize::Strings
            | ColumnSize::Guid
            | ColumnSize::Blob
            | ColumnSize::Table(_)
            | ColumnSize::Coded(_) => None,
        }
    }

    /// Returns true for indexes into the `#Strings`, `#GUID` or `#Blob` heap.
    #[must_use]
    pub const fn is_heap_index(self) -> bool {
        matches!(self, ColumnSize::Strings | ColumnSize::Guid | ColumnSize::Blob)
    }

    /// Returns true for a row index into a single table.
    #[must_use]
    pub const fn is_table_index(self) -> bool {
        matches!(self, ColumnSize::Table(_))
    }

    /// Returns true for a coded index.
    #[must_use]
    pub const fn is_coded_index(self) -> bool {
        matches!(self, ColumnSize::Coded(_))
    }
}

impl fmt::Display for ColumnSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSize::Byte => write!(f, "Byte"),
            ColumnSize::Int16 => write!(f, "Int16"),
            ColumnSize::UInt16 => write!(f, "UInt16"),
            ColumnSize::Int32 => write!(f, "Int32"),
            ColumnSize::UInt32 => write!(f, "UInt32"),
            ColumnSize::Strings => write!(f, "#Strings"),
            ColumnSize::Guid => write!(f, "#GUID"),
            ColumnSize::Blob => write!(f, "#Blob"),
            ColumnSize::Table(table) => write!(f, "{table}"),
            ColumnSize::Coded(coded) => write!(f, "{coded}"),
        }
    }
}
