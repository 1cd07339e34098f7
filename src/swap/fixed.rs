// src/swap/fixed.rs
//! Masked shift-and-combine byte swaps for 32- and 64-bit patterns.
//!
//! Each stage exchanges neighbouring lanes of doubling width (bytes, then
//! 16-bit halves, then 32-bit halves), so the whole reversal takes
//! `log2(width)` stages instead of one step per byte. Masking is done on
//! unsigned patterns only; the signed entry points reinterpret around it.

const BYTE_HI_32: u32 = 0xFF00_FF00;
const BYTE_LO_32: u32 = 0x00FF_00FF;

const BYTE_HI_64: u64 = 0xFF00_FF00_FF00_FF00;
const BYTE_LO_64: u64 = 0x00FF_00FF_00FF_00FF;
const HALF_HI_64: u64 = 0xFFFF_0000_FFFF_0000;
const HALF_LO_64: u64 = 0x0000_FFFF_0000_FFFF;

/// Reverse the byte order of a 32-bit pattern.
///
/// ```
/// use endian_swap::swap_fixed32;
///
/// assert_eq!(swap_fixed32(0x0001_B5A6), 0xA6B5_0100);
/// ```
#[inline]
pub const fn swap_fixed32(value: u32) -> u32 {
    // { a b c d } -> { b a d c }
    let value = ((value << 8) & BYTE_HI_32) | ((value >> 8) & BYTE_LO_32);
    // { b a d c } -> { d c b a }
    (value << 16) | ((value >> 16) & 0xFFFF)
}

/// Reverse the byte order of a 64-bit pattern.
#[inline]
pub const fn swap_fixed64(value: u64) -> u64 {
    // { a b c d e f g h } -> { b a d c f e h g }
    let value = ((value << 8) & BYTE_HI_64) | ((value >> 8) & BYTE_LO_64);
    // -> { d c b a h g f e }
    let value = ((value << 16) & HALF_HI_64) | ((value >> 16) & HALF_LO_64);
    // -> { h g f e d c b a }
    (value << 32) | ((value >> 32) & 0xFFFF_FFFF)
}

/// Signed variant of [`swap_fixed32`]; the shuffle runs on the unsigned pattern.
#[inline]
pub const fn swap_i32(value: i32) -> i32 {
    swap_fixed32(value as u32) as i32
}

/// Signed variant of [`swap_fixed64`]; the shuffle runs on the unsigned pattern.
#[inline]
pub const fn swap_i64(value: i64) -> i64 {
    swap_fixed64(value as u64) as i64
}
