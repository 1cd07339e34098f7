// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("Length mismatch: input is {input} bytes, output is {output} bytes")]
    LengthMismatch { input: usize, output: usize },

    #[error("Buffer overflow: tried to write {attempted} bytes to buffer with {capacity} bytes remaining")]
    BufferOverflow { attempted: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, SwapError>;
