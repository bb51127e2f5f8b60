//! C-compatible FFI surface.
//!
//! Exposes the checksum with zlib's `adler32()` family of signatures so C
//! callers (and tooling linked against the zlib ABI) can use this crate as a
//! drop-in for the checksum entry points.

pub(crate) mod types;

use crate::adler32::combine::combine;
use crate::adler32::Adler32;
use types::{uInt, z_off64_t, z_size_t};

/// Compute an Adler-32 checksum, zlib `adler32()` semantics.
///
/// Supports incremental computation: pass a previously returned checksum as
/// `adler` to continue over the next chunk of the stream.
///
/// # Arguments
/// - `adler`: prior checksum, or 0 or 1 to start a new one
/// - `buf`: data pointer, may be null
/// - `len`: data length in bytes
///
/// # Returns
/// The updated checksum; the initial value 1 when `buf` is null.
///
/// # Safety
/// When `buf` is non-null the caller must guarantee `len` readable bytes
/// behind it.
#[no_mangle]
pub unsafe extern "C" fn adler32(adler: u32, buf: *const u8, len: uInt) -> u32 {
    unsafe { adler32_z(adler, buf, len as z_size_t) }
}

/// Compute an Adler-32 checksum with a `size_t` length, zlib `adler32_z()`
/// semantics. See [`adler32`].
///
/// # Safety
/// When `buf` is non-null the caller must guarantee `len` readable bytes
/// behind it.
#[no_mangle]
pub unsafe extern "C" fn adler32_z(adler: u32, buf: *const u8, len: z_size_t) -> u32 {
    // zlib returns the initial value for a null buffer.
    if buf.is_null() {
        return 1;
    }
    if len == 0 {
        return adler;
    }

    let slice = unsafe { std::slice::from_raw_parts(buf, len) };

    // zlib treats a zero seed as the initial value 1.
    let initial = if adler == 0 { 1 } else { adler };

    let mut state = Adler32::resume(initial);
    state.write(slice);
    state.checksum()
}

/// Merge two Adler-32 checksums, zlib `adler32_combine()` semantics.
///
/// # Arguments
/// - `adler1`: checksum of the first range
/// - `adler2`: checksum of the second range
/// - `len2`: length of the second range in bytes
///
/// # Returns
/// The checksum of the concatenated ranges; `0xFFFFFFFF` when `len2` is
/// negative.
#[no_mangle]
pub extern "C" fn adler32_combine(adler1: u32, adler2: u32, len2: z_off64_t) -> u32 {
    combine(adler1, adler2, len2)
}

/// 64-bit length variant, zlib `adler32_combine64()` semantics. See
/// [`adler32_combine`].
#[no_mangle]
pub extern "C" fn adler32_combine64(adler1: u32, adler2: u32, len2: z_off64_t) -> u32 {
    combine(adler1, adler2, len2)
}
