//! adler32-rs: a resumable Adler-32 checksum implementation
//!
//! This crate provides the Adler-32 checksum (RFC 1950) over byte streams,
//! including incremental computation over chunked data via a resume value,
//! checksum combination, and FFI bindings for C interoperability.
//!
//! ## Modules
//!
//! - [`adler32`]: Adler-32 checksum algorithm implementation
//! - [`ffi`]: Foreign Function Interface for C compatibility

pub mod adler32;
pub mod ffi;

pub use crate::adler32::{compute, Adler32};
