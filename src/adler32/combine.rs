//! Combination of two Adler-32 checksums.
//!
//! Given the checksums of two adjacent byte ranges and the length of the
//! second range, the checksum of the concatenation can be derived without
//! rescanning either range. This complements resumable computation: resuming
//! re-walks the second range, combining does not.

use super::core::BASE;

/// Combine the checksums of two adjacent byte ranges.
///
/// `adler1` covers the first range, `adler2` the second, and `len2` is the
/// length of the second range in bytes. Returns the checksum of the
/// concatenated range, equal to what a single pass over both ranges would
/// produce.
///
/// A negative `len2` returns `0xFFFFFFFF` as a debugging clue, matching
/// zlib's `adler32_combine`.
pub fn combine(adler1: u32, adler2: u32, len2: i64) -> u32 {
    if len2 < 0 {
        return 0xffffffff;
    }

    // The second range shifts the first range's byte sum into `b` once per
    // byte, so only `len2 mod BASE` matters.
    let rem = (len2 as u64 % u64::from(BASE)) as u32;

    let mut sum1 = adler1 & 0xffff;
    let mut sum2 = ((u64::from(rem) * u64::from(sum1)) % u64::from(BASE)) as u32;

    // The initial 1 in `adler2`'s low half is counted twice; BASE - 1
    // cancels one of them. Likewise BASE - rem cancels the rem copies of
    // that 1 folded into the high half.
    sum1 += (adler2 & 0xffff) + BASE - 1;
    sum2 += ((adler1 >> 16) & 0xffff) + ((adler2 >> 16) & 0xffff) + BASE - rem;

    if sum1 >= BASE {
        sum1 -= BASE;
    }
    if sum1 >= BASE {
        sum1 -= BASE;
    }
    if sum2 >= BASE << 1 {
        sum2 -= BASE << 1;
    }
    if sum2 >= BASE {
        sum2 -= BASE;
    }

    sum1 | (sum2 << 16)
}
