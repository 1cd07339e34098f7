// src/utils/trace.rs
// Logging shims that compile away when the `tracing` feature is off.

macro_rules! swap_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

macro_rules! swap_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    }};
}

pub(crate) use swap_debug;
pub(crate) use swap_trace;
