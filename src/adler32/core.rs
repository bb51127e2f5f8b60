//! Core Adler-32 accumulator and block loop.
//!
//! The checksum maintains two running sums: `a` is one plus the sum of all
//! input bytes, `b` is the sum of the successive values of `a`. Both are
//! reduced modulo [`BASE`] and packed as `(b << 16) | a`.

/// The Adler-32 modulus: the largest prime below 65536.
pub const BASE: u32 = 65521;

/// Block length bound for the unreduced accumulation loop.
///
/// Processing a block of `n` bytes of value 255 from reduced accumulators
/// (`< BASE`) grows `b` to at most `(BASE-1)*(n+1) + 255*n*(n+1)/2`, which
/// for `n = 3850` stays inside the signed 32-bit range; the fold after each
/// block brings both counters back under 17 bits, so a following block
/// cannot overflow `u32` either. The bound is derived from the modulus and
/// the accumulator width, not tuned; an implementation with a different
/// accumulator width must recompute it.
pub const NMAX: usize = 3850;

/// Streaming Adler-32 accumulator state.
///
/// Created fresh for a new checksum, or seeded from a previously returned
/// checksum to continue over the next chunk of a logically contiguous
/// stream. The state is two `u32` counters; between [`write`](Self::write)
/// calls both are held below 2^17 so further writes cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Adler32 {
    /// Fresh accumulator: `a = 1`, `b = 0` (RFC 1950 initial value).
    pub const fn new() -> Self {
        Self { a: 1, b: 0 }
    }

    /// Seed the accumulator from a previously computed checksum.
    ///
    /// `a` is taken from the low 16 bits and `b` from the high 16 bits of
    /// `checksum`. Any `u32` is structurally acceptable; chaining only
    /// produces the checksum of the concatenated stream when `checksum` was
    /// itself produced by this algorithm (or is the initial value `1`).
    pub const fn resume(checksum: u32) -> Self {
        Self {
            a: checksum & 0xffff,
            b: checksum >> 16,
        }
    }

    /// Feed `buf` into the checksum.
    ///
    /// Bytes are processed in blocks of at most [`NMAX`]; within a block
    /// each byte updates `a` before `b` (`b` accumulates a running sum of
    /// running sums, so the order matters). After each block both counters
    /// are folded with `15*(v >> 16) + (v & 0xFFFF)`, which is congruent to
    /// `v` modulo [`BASE`] because `2^16 mod 65521 == 15`. The fold leaves
    /// at most 17-bit values, deferring the full reduction to
    /// [`checksum`](Self::checksum).
    pub fn write(&mut self, buf: &[u8]) {
        for block in buf.chunks(NMAX) {
            for &byte in block {
                self.a += u32::from(byte);
                self.b += self.a;
            }
            self.a = 15 * (self.a >> 16) + (self.a & 0xffff);
            self.b = 15 * (self.b >> 16) + (self.b & 0xffff);
        }
    }

    /// Final checksum: both counters reduced modulo [`BASE`], packed with
    /// `b` in the high 16 bits and `a` in the low 16 bits.
    ///
    /// The accumulator is unchanged; more data may still be written.
    pub const fn checksum(&self) -> u32 {
        ((self.b % BASE) << 16) | (self.a % BASE)
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the Adler-32 checksum of `buf`.
///
/// With `resume` set to a checksum previously returned by this function, the
/// result is the checksum of the conceptual concatenation of the earlier
/// data and `buf`: for any buffer `B` and split point `k`,
/// `compute(&B[k..], Some(compute(&B[..k], None)))` equals
/// `compute(B, None)`.
///
/// The empty buffer (with no resume value) yields the constant `1`. The
/// operation is pure and deterministic; there are no failure modes for
/// byte-slice input.
pub fn compute(buf: &[u8], resume: Option<u32>) -> u32 {
    let mut state = match resume {
        Some(checksum) => Adler32::resume(checksum),
        None => Adler32::new(),
    };
    state.write(buf);
    state.checksum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adler::adler32_slice;

    #[test]
    fn empty_input_is_one() {
        assert_eq!(compute(&[], None), 1);
        assert_eq!(Adler32::new().checksum(), 1);
    }

    #[test]
    fn wikipedia_reference_value() {
        // Worked example from https://en.wikipedia.org/wiki/Adler-32.
        assert_eq!(compute(b"Wikipedia", None), 0x11E60398);
    }

    #[test]
    fn short_inputs() {
        // 'a' (97): a = 1 + 97 = 98, b = 0 + 98 = 98
        assert_eq!(compute(b"a", None), 0x0062_0062);
        // "abc": a = 295, b = 98 + 196 + 295 = 589
        assert_eq!(compute(b"abc", None), 0x024D_0127);
        assert_eq!(compute(b"hello", None), 0x062C_0215);
    }

    #[test]
    fn all_zero_bytes() {
        // Zero bytes leave `a` at 1; `b` counts the length.
        assert_eq!(compute(&[0u8; 10], None), 0x000A_0001);
        assert_eq!(compute(&[0u8; 100], None), 0x0064_0001);
        let big = vec![0u8; 100_000];
        assert_eq!(compute(&big, None), adler32_slice(&big));
    }

    #[test]
    fn all_ff_bytes() {
        assert_eq!(compute(&[0xFF; 1024], None), 0x79A6_FC2E);
        let big = vec![0xFFu8; 100_000];
        assert_eq!(compute(&big, None), adler32_slice(&big));
    }

    #[test]
    fn block_boundary_matches_reference() {
        // Lengths straddling the block size catch errors in the per-block
        // reduction. The `adler` crate serves as the reference.
        for len in [NMAX - 1, NMAX, NMAX + 1, 3 * NMAX, 3 * NMAX + 7] {
            let buf: Vec<u8> = (0..len).map(|i| (i * 31 % 256) as u8).collect();
            assert_eq!(compute(&buf, None), adler32_slice(&buf), "len {len}");
        }
    }

    #[test]
    fn deterministic() {
        let buf: Vec<u8> = (0..10_000).map(|i| (i % 251) as u8).collect();
        assert_eq!(compute(&buf, None), compute(&buf, None));
    }

    #[test]
    fn chunking_transparency() {
        let buf: Vec<u8> = (0..9001).map(|i| (i * 7 % 256) as u8).collect();
        let whole = compute(&buf, None);
        for k in [0, 1, 100, NMAX - 1, NMAX, NMAX + 1, buf.len() - 1, buf.len()] {
            let first = compute(&buf[..k], None);
            assert_eq!(compute(&buf[k..], Some(first)), whole, "split {k}");
        }
    }

    #[test]
    fn resume_seeds_high_half() {
        // The resumed `b` counter comes from the high 16 bits of the resume
        // value; a seed with a non-zero high half must not be flattened.
        let first = compute(b"Wikip", None);
        assert_ne!(first >> 16, 0);
        assert_eq!(compute(b"edia", Some(first)), 0x11E60398);
    }

    #[test]
    fn resume_with_initial_value_is_identity() {
        assert_eq!(compute(b"firmware", Some(1)), compute(b"firmware", None));
        // Both halves of 0xDEADBEEF are below the modulus, so an empty
        // write hands the resume value straight back.
        assert_eq!(compute(&[], Some(0xDEAD_BEEF)), 0xDEAD_BEEF);
    }

    #[test]
    fn streaming_writes_match_one_shot() {
        let buf: Vec<u8> = (0..20_000).map(|i| (i * 13 % 256) as u8).collect();
        let mut state = Adler32::new();
        for chunk in buf.chunks(997) {
            state.write(chunk);
        }
        assert_eq!(state.checksum(), compute(&buf, None));
        assert_eq!(state.checksum(), adler32_slice(&buf));
    }
}
