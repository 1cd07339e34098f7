// src/utils/mod.rs
mod hex;
mod trace;

pub use hex::{hex_dump, hex_dump_value, HexDump};
pub(crate) use trace::{swap_debug, swap_trace};
