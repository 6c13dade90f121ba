use crate::{codec::CodecError, image::Resolution};

/// A finite, ordered supply of rgb24 frames.
pub trait FrameSource {
    /// The next frame, or `None` once the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>, CodecError>;
    fn resolution(&self) -> Resolution;
}
