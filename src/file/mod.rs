//! Byte-level access for metadata table rows.
//!
//! This module contains everything the column codecs need to move bytes in and out of a
//! table buffer. It deliberately knows nothing about table layout; callers position a cursor
//! and the column consumes exactly its own width from it.
//!
//! # Key Components
//!
//! - [`crate::file::io`] - Bounds-checked little-endian reads and writes on byte slices
//! - [`crate::file::stream`] - The [`ByteSource`] / [`ByteSink`] cursor traits and `std::io` adapters
//! - [`crate::file::parser::Parser`] - Slice-backed [`ByteSource`]
//! - [`crate::file::writer::Writer`] - Slice-backed [`ByteSink`]

pub mod io;
pub mod parser;
pub mod stream;
pub mod writer;

pub use stream::{ByteSink, ByteSource, IoSink, IoSource};
