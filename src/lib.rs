// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # cilcolumn
//!
//! Column descriptors and width-aware codecs for ECMA-335 metadata table rows.
//!
//! Every row of a .NET metadata table is a fixed sequence of little-endian unsigned
//! integers. How wide each of them is (1, 2 or 4 bytes) is not fixed by the format: heap and
//! table indexes grow to 4 bytes once the heap or table they point into gets large. A table
//! reader therefore has to resolve the width of every column before the first row can be
//! decoded, and a single wrong width shifts every column that follows it.
//!
//! `cilcolumn` provides the per-column piece of that machinery:
//!
//! - [`metadata::tables::ColumnInfo`] - Name, logical size class, offset and resolved width
//!   of one column, plus the codec that reads and writes its value
//! - [`metadata::tables::ColumnWidth`] - The three storage widths, with exhaustive dispatch
//! - [`metadata::tables::ColumnSize`] - What the schema declares the column to hold
//! - [`file::stream::ByteSource`] / [`file::stream::ByteSink`] - The cursors a column
//!   reads from and writes to
//!
//! Resolving widths from heap and table sizes, composing rows and iterating tables is left
//! to the table layout that owns the columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use cilcolumn::prelude::*;
//!
//! // Declared by the schema
//! const FLAGS: ColumnInfo = ColumnInfo::new("Flags", ColumnSize::UInt16);
//! const NAME: ColumnInfo = ColumnInfo::new("Name", ColumnSize::Strings);
//!
//! // Resolved by the layout (small #Strings heap)
//! let flags = FLAGS.resolved(0, ColumnWidth::Word);
//! let name = NAME.resolved(2, ColumnWidth::from_large(false));
//!
//! let mut row = [0u8; 4];
//! let mut writer = Writer::new(&mut row);
//! flags.write(&mut writer, 0x0006)?;
//! name.write(&mut writer, 0x0123)?;
//! assert_eq!(row, [0x06, 0x00, 0x23, 0x01]);
//!
//! let mut parser = Parser::new(&row);
//! assert_eq!(flags.read(&mut parser)?, 0x0006);
//! assert_eq!(name.read(&mut parser)?, 0x0123);
//! # Ok::<(), cilcolumn::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result`]. Using a column that has no valid width yields
//! [`Error::InvalidColumnSize`]; this is a defect of the row schema and should abort the
//! enclosing table operation. Errors of the underlying byte source or sink are passed
//! through unchanged.
//!
//! ## Logging
//!
//! The crate emits diagnostics through the [`log`](https://docs.rs/log) facade: width
//! resolution at `debug`, rejected widths at `warn`, truncating writes at `trace`. No logger
//! is installed by the library.

pub(crate) mod error;
pub mod file;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use cilcolumn::prelude::*;
///
/// let column = ColumnInfo::new("Generation", ColumnSize::UInt16);
/// assert!(!column.is_resolved());
/// ```
pub mod prelude;

/// ECMA-335 metadata structures
///
/// Contains the table-level types: column descriptors and their codecs, table identifiers
/// and coded index kinds.
pub mod metadata;

/// `cilcolumn` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `cilcolumn` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the individual
/// variants.
pub use error::Error;

/// Slice-backed cursors for reading and writing rows
pub use file::{parser::Parser, writer::Writer};
