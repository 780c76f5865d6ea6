//! Metadata table row building blocks.
//!
//! ECMA-335 metadata tables are arrays of fixed-size rows. Each row is a sequence of
//! columns whose widths depend on the sizes of the heaps and tables they reference. This
//! module provides the per-column descriptor ([`ColumnInfo`]) that a table layout assigns
//! offsets and widths to, and that then decodes and encodes the column values.
//!
//! Computing the widths themselves (from heap size flags and row counts) is the job of the
//! table layout and not part of this module.

mod types;

pub use types::*;
