//! A minimal lossy video codec for fixed-size raw rgb24 frames.
//!
//! Frames are converted to planar yuv420p, every frame after the first is
//! replaced by its byte-wise difference from its predecessor, and the
//! concatenation is DEFLATE compressed. [`codec::decode`] mirrors
//! [`codec::encode`].

pub mod algebra;
pub mod codec;
pub mod colors;
pub mod demuxers;
pub mod image;
pub mod muxers;
pub mod pixel_formats;
pub mod stream;

pub use codec::{decode, encode, CodecError};
