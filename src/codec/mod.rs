//! Stream layout
//!
//! The compressed stream is a single raw DEFLATE stream with no header. It
//! inflates to fixed size yuv420p chunks of `width * height * 3 / 2` bytes:
//!
//! ```text
//! keyframe  | luma plane | u plane | v plane |   absolute samples
//! frame 1   | luma plane | u plane | v plane |   frame 1 - keyframe
//! frame n   | luma plane | u plane | v plane |   frame n - frame n-1
//! ```
//!
//! Differences are byte-wise modulo 256. Width and height are not stored,
//! so the decoder has to be given the ones used to encode.

pub mod config;
pub mod decode;
pub mod deflate;
pub mod delta;
pub mod encode;
mod error;
mod stats;

pub use config::{CodecConfig, CompressionLevel, PartialCodecConfig};
pub use decode::{decode, Decoder};
pub use encode::{encode, encode_source, encode_with_config, Encoder};
pub use error::CodecError;
pub use stats::EncodeStats;
