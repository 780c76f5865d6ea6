//! # cilcolumn Prelude
//!
//! Convenient re-exports of the most commonly used types and traits.
//!
//! ```rust
//! use cilcolumn::prelude::*;
//!
//! let column = ColumnInfo::new("Flags", ColumnSize::UInt16).resolved(0, ColumnWidth::Word);
//! assert_eq!(column.read(&mut Parser::new(&[0x01, 0x80]))?, 0x8001);
//! # Ok::<(), cilcolumn::Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all cilcolumn operations
pub use crate::Error;

/// The result type used throughout cilcolumn
pub use crate::Result;

// ================================================================================================
// Column Descriptors
// ================================================================================================

/// Column descriptor, logical size class, storage width and overflow policy
pub use crate::metadata::tables::{ColumnInfo, ColumnSize, ColumnWidth, Narrowing};

/// Targets of table and coded index columns
pub use crate::metadata::tables::{CodedIndexType, TableId};

// ================================================================================================
// Byte Access
// ================================================================================================

/// Cursor traits consumed by the column codecs
pub use crate::file::stream::{ByteSink, ByteSource};

/// Slice-backed cursors
pub use crate::{Parser, Writer};

/// `std::io` adapters
pub use crate::file::stream::{IoSink, IoSource};
