//! # Metadata Table Types Module
//!
//! This module provides the building blocks a metadata table reader or writer composes to
//! describe its rows.
//!
//! ## Key Components
//!
//! - [`ColumnInfo`]: Descriptor and codec of one row column
//! - [`ColumnSize`]: Logical size class of a column (what it stores)
//! - [`ColumnWidth`]: Resolved storage width of a column (how many bytes)
//! - [`Narrowing`]: Overflow policy applied when writing column values
//! - [`TableId`]: Enumeration of all metadata tables, the targets of table indexes
//! - [`CodedIndexType`]: Enumeration of all coded index kinds
//!
//! ## References
//!
//! - [ECMA-335 Standard](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Partition II, Sections 22 and 24.2.6

mod codedindex;
mod column;
mod tableid;

pub use codedindex::CodedIndexType;
pub use column::{ColumnInfo, ColumnSize, ColumnWidth, Narrowing};
pub use tableid::TableId;
