use std::io;

use thiserror::Error;

/// Errors raised while encoding or decoding a stream. All of them are
/// terminal for the call that returned them.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid dimensions {width}x{height}: width and height must be positive and even")]
    Dimension { width: u32, height: u32 },

    #[error("frame buffer is {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
