// src/types.rs
use bytemuck::Pod;

use crate::swap::{reverse_f32, reverse_f64, swap_fixed32, swap_fixed64, swap_i32, swap_i64};

/// Fixed widths handled by the specialised swap routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ByteWidth {
    Four = 4,
    Eight = 8,
}

impl ByteWidth {
    /// Width in bytes
    pub const fn bytes(&self) -> usize {
        *self as usize
    }

    /// Width in bits
    pub const fn bits(&self) -> u32 {
        (*self as u32) * 8
    }

    pub fn from_bytes(value: usize) -> Option<Self> {
        match value {
            4 => Some(ByteWidth::Four),
            8 => Some(ByteWidth::Eight),
            _ => None,
        }
    }

    /// Get the name of the width as a string
    pub fn name(&self) -> &'static str {
        match self {
            ByteWidth::Four => "32-bit",
            ByteWidth::Eight => "64-bit",
        }
    }
}

/// Values whose byte order can be reversed by one of the fixed-width routines.
///
/// Integers go through the masked bit-shuffle, floats through the byte-wise
/// reversal of their in-memory image. Both are involutions: calling
/// `reverse_bytes` twice returns the original bit pattern.
///
/// ```
/// use endian_swap::ReverseBytes;
///
/// assert_eq!(0x1122_3344u32.reverse_bytes(), 0x4433_2211);
/// assert_eq!(1.0f64.reverse_bytes().reverse_bytes(), 1.0);
/// ```
pub trait ReverseBytes: Pod {
    const WIDTH: ByteWidth;

    fn reverse_bytes(self) -> Self;
}

macro_rules! impl_reverse_bytes {
    ($($t:ty => $width:expr, $f:path;)*) => {
        $(
            impl ReverseBytes for $t {
                const WIDTH: ByteWidth = $width;

                #[inline]
                fn reverse_bytes(self) -> Self {
                    $f(self)
                }
            }
        )*
    };
}

impl_reverse_bytes! {
    u32 => ByteWidth::Four, swap_fixed32;
    i32 => ByteWidth::Four, swap_i32;
    f32 => ByteWidth::Four, reverse_f32;
    u64 => ByteWidth::Eight, swap_fixed64;
    i64 => ByteWidth::Eight, swap_i64;
    f64 => ByteWidth::Eight, reverse_f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_sizes() {
        assert_eq!(ByteWidth::Four.bytes(), 4);
        assert_eq!(ByteWidth::Eight.bytes(), 8);
        assert_eq!(ByteWidth::Four.bits(), 32);
        assert_eq!(ByteWidth::Eight.bits(), 64);
    }

    #[test]
    fn test_width_from_bytes() {
        assert_eq!(ByteWidth::from_bytes(4), Some(ByteWidth::Four));
        assert_eq!(ByteWidth::from_bytes(8), Some(ByteWidth::Eight));
        assert_eq!(ByteWidth::from_bytes(2), None);
        assert_eq!(ByteWidth::from_bytes(0), None);
    }

    #[test]
    fn test_width_matches_type_size() {
        fn check<T: ReverseBytes>() {
            assert_eq!(T::WIDTH.bytes(), std::mem::size_of::<T>());
        }
        check::<u32>();
        check::<i32>();
        check::<f32>();
        check::<u64>();
        check::<i64>();
        check::<f64>();
    }

    #[test]
    fn test_trait_dispatch() {
        assert_eq!(0x0102_0304u32.reverse_bytes(), 0x0403_0201);
        assert_eq!((-2i32).reverse_bytes(), 0xFEFF_FFFFu32 as i32);
        assert_eq!(
            0x0102_0304_0506_0708u64.reverse_bytes(),
            0x0807_0605_0403_0201
        );
        assert_eq!(1.0f32.reverse_bytes().to_bits(), 0x0000_803F);
    }
}
