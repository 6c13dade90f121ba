//! Frame layouts handled by the codec and the transcoding between them.
//!
//! Raw frames are interleaved `rgb24`: three bytes per pixel in row-major
//! order. Coded frames are planar `yuv420p`: a full resolution luma plane
//! followed by the U and V planes at half width and half height.

pub mod rgb24;
mod utils;
pub mod yuv420p;

pub use utils::ensure_frame_size;
pub use yuv420p::{rgb24_to_yuv420p, yuv420p_to_rgb24, Yuv420pPlanes};
