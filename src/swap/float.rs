// src/swap/float.rs
//! Byte-wise reversal of floating-point values.
//!
//! The value is viewed as its in-memory byte image via `bytemuck::cast`, a new
//! image is built with byte `i` taken from byte `N - 1 - i`, and the result is
//! cast back. Nothing is interpreted numerically, so NaN payloads, infinities
//! and subnormals survive a double reversal unchanged.

/// Return a copy of `value` with its four bytes in reverse order.
///
/// ```
/// use endian_swap::reverse_f32;
///
/// let flipped = reverse_f32(1.0);
/// assert_eq!(flipped.to_bits(), 0x0000_803F);
/// assert_eq!(reverse_f32(flipped), 1.0);
/// ```
#[inline]
pub fn reverse_f32(value: f32) -> f32 {
    let input: [u8; 4] = bytemuck::cast(value);
    let mut output = [0u8; 4];
    for (i, byte) in output.iter_mut().enumerate() {
        *byte = input[3 - i];
    }
    bytemuck::cast(output)
}

/// Return a copy of `value` with its eight bytes in reverse order.
#[inline]
pub fn reverse_f64(value: f64) -> f64 {
    let input: [u8; 8] = bytemuck::cast(value);
    let mut output = [0u8; 8];
    for (i, byte) in output.iter_mut().enumerate() {
        *byte = input[7 - i];
    }
    bytemuck::cast(output)
}
