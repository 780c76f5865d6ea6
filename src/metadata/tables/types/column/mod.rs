//! Column descriptors and their width-aware codecs.
//!
//! A metadata table row is a fixed sequence of little-endian unsigned integers. Each of them
//! is described by a [`ColumnInfo`]: the schema supplies its name and [`ColumnSize`], the
//! table layout supplies its byte offset and [`ColumnWidth`]. Once resolved, the descriptor
//! marshals the column value between a `u32` and its 1, 2 or 4 stored bytes.
//!
//! # Key Components
//!
//! - [`ColumnInfo`] - The column descriptor and codec
//! - [`ColumnSize`] - Logical size class declared by the schema
//! - [`ColumnWidth`] - Resolved storage width (1, 2 or 4 bytes)
//! - [`Narrowing`] - Overflow policy for writes
//!
//! # Thread Safety
//!
//! All types in this module are `Copy + Send + Sync`. Resolution takes `&mut self` or builds a
//! new value, so a published row schema cannot change underneath concurrent readers.

mod info;
mod narrowing;
mod size;
mod width;

pub use info::ColumnInfo;
pub use narrowing::Narrowing;
pub use size::ColumnSize;
pub use width::ColumnWidth;
