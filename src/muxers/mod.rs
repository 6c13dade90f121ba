use crate::codec::CodecError;

mod raw_frame_muxer;

pub use raw_frame_muxer::RawFrameMuxer;

/// Destination for decoded rgb24 frames.
pub trait Muxer {
    fn write_frame(&mut self, rgb: &[u8]) -> Result<(), CodecError>;

    /// Writes every frame in order and returns how many were written. Stops
    /// at the first error.
    fn consume_frames<I>(&mut self, frames: I) -> Result<usize, CodecError>
    where
        I: IntoIterator<Item = Result<Vec<u8>, CodecError>>,
    {
        let mut written = 0;

        for frame in frames {
            self.write_frame(&frame?)?;
            written += 1;
        }

        Ok(written)
    }
}
