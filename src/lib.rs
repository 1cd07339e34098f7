// src/lib.rs
//! # endian-swap
//!
//! Byte-order reversal for fixed-width numeric values and raw byte buffers.
//!
//! ## Features
//!
//! - **Bit-shuffle swaps**: 32- and 64-bit patterns reversed with masked shifts, no per-byte loop
//! - **Float reversal**: `f32`/`f64` byte images reversed without touching the input, NaN payloads kept
//! - **Generic reversal**: in-place and copying reversal of byte slices of any length
//! - **Involutive**: every routine applied twice returns the original bit pattern
//!
//! ## Quick Start
//!
//! ### Fixed-width values
//!
//! ```rust
//! use endian_swap::*;
//!
//! assert_eq!(swap_fixed32(0x1122_3344), 0x4433_2211);
//! assert_eq!(swap_i64(swap_i64(-42)), -42);
//!
//! let flipped = reverse_f64(1.5);
//! assert_eq!(reverse_f64(flipped).to_bits(), 1.5f64.to_bits());
//! ```
//!
//! ### Byte buffers
//!
//! ```rust
//! use endian_swap::*;
//!
//! fn main() -> Result<()> {
//!     let mut buffer = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
//!     reverse_in_place(&mut buffer);
//!     assert_eq!(buffer, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
//!
//!     // Keep the input, write the reversal elsewhere
//!     let mut output = [0u8; 8];
//!     reverse_to_output(&buffer, &mut output)?;
//!     assert_eq!(output, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Absent and short buffers
//!
//! Reversing nothing is vacuously done. [`reverse_in_place_opt`] and
//! [`reverse_to_output_opt`] accept `None` and return without effect, and
//! [`reverse_in_place`] ignores slices shorter than two bytes. These are part
//! of the contract, not error paths. The only reported failures are length
//! disagreements between an input and the buffer it is copied into.

// Modules
pub mod error;
pub mod types;
pub mod swap;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{SwapError, Result};

pub use types::{ByteWidth, ReverseBytes};

pub use swap::{
    swap_fixed32,
    swap_fixed64,
    swap_i32,
    swap_i64,
    reverse_f32,
    reverse_f64,
    reverse_in_place,
    reverse_in_place_opt,
    reverse_to_output,
    reverse_to_output_opt,
    put_reversed,
    reverse_value,
    swap_elements,
};

pub use utils::{hex_dump, hex_dump_value, HexDump};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use endian_swap::prelude::*;
    //! ```

    pub use crate::error::{SwapError, Result};
    pub use crate::types::ReverseBytes;
    pub use crate::swap::{reverse_in_place, reverse_to_output};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
