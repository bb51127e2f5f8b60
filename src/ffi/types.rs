//! C type aliases used by the FFI signatures, matching zlib's naming.

#![allow(non_camel_case_types)]

/// zlib's `z_size_t`: the platform size type.
pub(crate) type z_size_t = usize;

/// zlib's `z_off64_t`: a 64-bit signed byte offset or length.
pub(crate) type z_off64_t = i64;

/// zlib's `uInt`: a 32-bit unsigned length.
pub(crate) type uInt = u32;
