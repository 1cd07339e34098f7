// src/swap/mod.rs
//! Byte-order reversal routines
//!
//! Three families of functions live here:
//!
//! - [`swap_fixed32`] / [`swap_fixed64`] - masked bit-shuffle for integer patterns
//! - [`reverse_f32`] / [`reverse_f64`] - byte-wise reversal of float images
//! - [`reverse_in_place`] / [`reverse_to_output`] - reversal of byte slices of any length
//!
//! All of them are pure or only touch the slices they are handed, so calls on
//! distinct buffers can run concurrently without coordination.
//!
//! # Examples
//!
//! ```
//! use endian_swap::swap::{swap_fixed32, reverse_in_place};
//!
//! let value = 112038u32;
//! let mut bytes = value.to_ne_bytes();
//! reverse_in_place(&mut bytes);
//!
//! assert_eq!(swap_fixed32(value).to_ne_bytes(), bytes);
//! ```

mod fixed;
mod float;
mod generic;

pub use fixed::{swap_fixed32, swap_fixed64, swap_i32, swap_i64};
pub use float::{reverse_f32, reverse_f64};
pub use generic::{
    put_reversed, reverse_in_place, reverse_in_place_opt, reverse_to_output,
    reverse_to_output_opt, reverse_value, swap_elements,
};
