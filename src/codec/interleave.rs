//! Morton (Z-order) bit interleaving of two 32-bit offsets into one 64-bit code.
//!
//! Latitude bits land on even positions, longitude bits on odd positions.

/// Every odd bit. Longitude bits of an interleaved code.
pub const ODD_BITS: u64 = 0xaaaa_aaaa_aaaa_aaaa;

/// Every even bit. Latitude bits of an interleaved code.
pub const EVEN_BITS: u64 = 0x5555_5555_5555_5555;

const B: [u64; 6] = [
    0x5555_5555_5555_5555,
    0x3333_3333_3333_3333,
    0x0f0f_0f0f_0f0f_0f0f,
    0x00ff_00ff_00ff_00ff,
    0x0000_ffff_0000_ffff,
    0x0000_0000_ffff_ffff,
];

const S: [u32; 6] = [0, 1, 2, 4, 8, 16];

/// Spread the 32 bits of `v` onto the even bit positions of a `u64`.
#[inline]
fn spread(v: u32) -> u64 {
    let mut x = v as u64;
    x = (x | (x << S[5])) & B[4];
    x = (x | (x << S[4])) & B[3];
    x = (x | (x << S[3])) & B[2];
    x = (x | (x << S[2])) & B[1];
    x = (x | (x << S[1])) & B[0];
    x
}

/// Inverse of [`spread`]: gather the even bits of `x` into the low 32 bits.
#[inline]
fn squash(mut x: u64) -> u64 {
    x &= B[0];
    x = (x | (x >> S[1])) & B[1];
    x = (x | (x >> S[2])) & B[2];
    x = (x | (x >> S[3])) & B[3];
    x = (x | (x >> S[4])) & B[4];
    x = (x | (x >> S[5])) & B[5];
    x
}

/// Interleave a latitude offset (even bits) with a longitude offset (odd bits).
#[inline]
pub fn interleave64(lat_offset: u32, lon_offset: u32) -> u64 {
    spread(lat_offset) | (spread(lon_offset) << 1)
}

/// Split an interleaved code back into its two offsets.
///
/// The latitude offset is returned in the low 32 bits and the longitude offset in the high 32
/// bits.
#[inline]
pub fn deinterleave64(interleaved: u64) -> u64 {
    let lat = squash(interleaved);
    let lon = squash(interleaved >> 1);
    lat | (lon << 32)
}
