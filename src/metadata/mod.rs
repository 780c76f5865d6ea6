//! ECMA-335 metadata structures.
//!
//! # Key Components
//!
//! - [`tables`] - Column descriptors, table identifiers and coded index kinds

pub mod tables;
