// src/swap/generic.rs
use bytemuck::Pod;
use bytes::BufMut;

use crate::error::{Result, SwapError};
use crate::utils::{swap_debug, swap_trace};

/// Reverse the bytes of `buffer` in place.
///
/// Buffers shorter than two bytes have no byte order to reverse and are left
/// as they are. For odd lengths the middle byte maps to itself and is not
/// touched.
///
/// # Example
///
/// ```
/// use endian_swap::reverse_in_place;
///
/// let mut buffer = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// reverse_in_place(&mut buffer);
/// assert_eq!(buffer, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
/// ```
pub fn reverse_in_place(buffer: &mut [u8]) {
    let len = buffer.len();
    if len < 2 {
        swap_trace!(len, "buffer shorter than two bytes, nothing to reverse");
        return;
    }

    for i in 0..len / 2 {
        buffer.swap(i, len - 1 - i);
    }
}

/// Like [`reverse_in_place`], but an absent buffer is accepted and ignored.
pub fn reverse_in_place_opt(buffer: Option<&mut [u8]>) {
    match buffer {
        Some(buffer) => reverse_in_place(buffer),
        None => swap_trace!("no buffer given, nothing to reverse"),
    }
}

/// Write the bytes of `input` into `output` in reverse order, leaving `input`
/// unmodified.
///
/// Both slices must have the same length. Unlike [`reverse_in_place`] there
/// is no short-buffer guard: an empty input writes nothing and a single byte
/// is copied across as is.
///
/// # Errors
///
/// Returns [`SwapError::LengthMismatch`] without touching `output` when the
/// lengths differ.
///
/// # Example
///
/// ```
/// use endian_swap::reverse_to_output;
///
/// let input = [0x01, 0x02, 0x03, 0x04];
/// let mut output = [0u8; 4];
/// reverse_to_output(&input, &mut output).unwrap();
/// assert_eq!(output, [0x04, 0x03, 0x02, 0x01]);
/// assert_eq!(input, [0x01, 0x02, 0x03, 0x04]);
/// ```
pub fn reverse_to_output(input: &[u8], output: &mut [u8]) -> Result<()> {
    if input.len() != output.len() {
        swap_debug!(
            input = input.len(),
            output = output.len(),
            "rejecting reversal into buffer of different length"
        );
        return Err(SwapError::LengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }

    for (out, &byte) in output.iter_mut().zip(input.iter().rev()) {
        *out = byte;
    }
    Ok(())
}

/// Like [`reverse_to_output`], but an absent input is accepted and leaves
/// `output` untouched.
pub fn reverse_to_output_opt(input: Option<&[u8]>, output: &mut [u8]) -> Result<()> {
    match input {
        Some(input) => reverse_to_output(input, output),
        None => {
            swap_trace!("no input given, output left untouched");
            Ok(())
        }
    }
}

/// Append the bytes of `input` to `sink` in reverse order.
///
/// Works with any [`BufMut`]: `BytesMut` and `Vec<u8>` grow as needed, while a
/// fixed `&mut [u8]` sink must have room for the whole input.
///
/// # Errors
///
/// Returns [`SwapError::BufferOverflow`] if the sink cannot take
/// `input.len()` more bytes. Nothing is written in that case.
pub fn put_reversed<B: BufMut>(input: &[u8], sink: &mut B) -> Result<()> {
    let capacity = sink.remaining_mut();
    if capacity < input.len() {
        swap_debug!(attempted = input.len(), capacity, "reversal sink too small");
        return Err(SwapError::BufferOverflow {
            attempted: input.len(),
            capacity,
        });
    }

    for &byte in input.iter().rev() {
        sink.put_u8(byte);
    }
    Ok(())
}

/// Reverse the in-memory byte image of any plain-old-data value.
///
/// This is the size-parametric counterpart of the fixed-width routines; for
/// `u32`, `u64`, `f32` and `f64` it agrees with them bit for bit.
///
/// ```
/// use endian_swap::reverse_value;
///
/// assert_eq!(reverse_value(0x1234u16), 0x3412);
/// assert_eq!(reverse_value([1u8, 2, 3]), [3, 2, 1]);
/// ```
pub fn reverse_value<T: Pod>(value: T) -> T {
    let mut value = value;
    reverse_in_place(bytemuck::bytes_of_mut(&mut value));
    value
}

/// Reverse the byte order of every element of `data` in place.
///
/// Element order is kept; only the bytes inside each element move. Types of
/// one byte or less are left unchanged.
pub fn swap_elements<T: Pod>(data: &mut [T]) {
    let size = std::mem::size_of::<T>();
    if size <= 1 {
        return;
    }

    let bytes: &mut [u8] = bytemuck::cast_slice_mut(data);
    for chunk in bytes.chunks_exact_mut(size) {
        reverse_in_place(chunk);
    }
}
