//! Adler-32 checksum algorithm implementation
//!
//! This module provides Adler-32 checksum calculation and combination
//! utilities. Adler-32 is a non-cryptographic checksum used for fast
//! integrity verification of byte streams, for example firmware images
//! transferred chunk by chunk.
//!
//! ## Submodules
//!
//! - [`combine`]: Functions for combining two Adler-32 checksums
//! - [`core`]: Core implementation details (crate-internal)

pub mod combine;
pub(crate) mod core;

pub use self::core::{compute, Adler32, BASE, NMAX};
