use std::io::Write;

use crate::{codec::CodecError, image::Resolution, pixel_formats::ensure_frame_size};

use super::Muxer;

/// Writes rgb24 frames back-to-back with no framing.
pub struct RawFrameMuxer<W: Write> {
    writer: W,
    resolution: Resolution,
}

impl<W: Write> RawFrameMuxer<W> {
    pub fn new(writer: W, resolution: Resolution) -> Self {
        Self { writer, resolution }
    }

    pub fn into_inner(mut self) -> Result<W, CodecError> {
        self.writer.flush()?;

        Ok(self.writer)
    }
}

impl<W: Write> Muxer for RawFrameMuxer<W> {
    fn write_frame(&mut self, rgb: &[u8]) -> Result<(), CodecError> {
        ensure_frame_size(rgb, self.resolution.rgb_frame_size())?;
        self.writer.write_all(rgb)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_frames() {
        let resolution = Resolution::new(2, 2).unwrap();
        let mut muxer = RawFrameMuxer::new(Vec::new(), resolution);

        let written = muxer
            .consume_frames(vec![Ok(vec![1; 12]), Ok(vec![2; 12])])
            .unwrap();
        let bytes = muxer.into_inner().unwrap();

        assert_eq!(written, 2);
        assert_eq!(&bytes[..12], &[1; 12]);
        assert_eq!(&bytes[12..], &[2; 12]);
    }

    #[test]
    fn stops_at_the_first_error() {
        let resolution = Resolution::new(2, 2).unwrap();
        let mut muxer = RawFrameMuxer::new(Vec::new(), resolution);

        let result = muxer.consume_frames(vec![
            Ok(vec![1; 12]),
            Err(CodecError::CorruptStream("bad".to_string())),
            Ok(vec![2; 12]),
        ]);

        assert!(matches!(result, Err(CodecError::CorruptStream(_))));
        assert_eq!(muxer.into_inner().unwrap(), vec![1; 12]);
    }

    #[test]
    fn rejects_frames_of_the_wrong_size() {
        let resolution = Resolution::new(2, 2).unwrap();
        let mut muxer = RawFrameMuxer::new(Vec::new(), resolution);

        assert!(matches!(
            muxer.write_frame(&[0; 11]),
            Err(CodecError::SizeMismatch { .. })
        ));
    }
}
