use std::io::{self, Read};

use tracing::debug;

use crate::{codec::CodecError, image::Resolution, stream::FrameSource};

/// Reads back-to-back rgb24 frames, as written by
/// `ffmpeg -f rawvideo -pix_fmt rgb24`.
///
/// End of input on a frame boundary ends the stream. End of input in the
/// middle of a frame is a `SizeMismatch`.
pub struct RawFrameDemuxer<R: Read> {
    reader: R,
    resolution: Resolution,
    frames_read: usize,
}

impl<R: Read> RawFrameDemuxer<R> {
    pub fn new(reader: R, resolution: Resolution) -> Self {
        Self {
            reader,
            resolution,
            frames_read: 0,
        }
    }

    pub fn frames_read(&self) -> usize {
        self.frames_read
    }
}

impl<R: Read> FrameSource for RawFrameDemuxer<R> {
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>, CodecError> {
        let mut frame = vec![0u8; self.resolution.rgb_frame_size()];
        let mut filled = 0;

        while filled < frame.len() {
            match self.reader.read(&mut frame[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if filled == 0 {
            return Ok(None);
        }

        if filled < frame.len() {
            return Err(CodecError::SizeMismatch {
                expected: frame.len(),
                actual: filled,
            });
        }

        debug!(frame = self.frames_read, bytes = filled, "read raw frame");
        self.frames_read += 1;

        Ok(Some(frame))
    }

    fn resolution(&self) -> Resolution {
        self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_input_into_frames() {
        let resolution = Resolution::new(2, 2).unwrap();
        let bytes: Vec<u8> = (0..24).collect();
        let mut demuxer = RawFrameDemuxer::new(bytes.as_slice(), resolution);

        assert_eq!(demuxer.next_frame().unwrap(), Some((0..12).collect::<Vec<u8>>()));
        assert_eq!(demuxer.next_frame().unwrap(), Some((12..24).collect::<Vec<u8>>()));
        assert_eq!(demuxer.next_frame().unwrap(), None);
        assert_eq!(demuxer.frames_read(), 2);
    }

    #[test]
    fn trailing_partial_frame_is_a_size_mismatch() {
        let resolution = Resolution::new(2, 2).unwrap();
        let bytes = vec![0u8; 12 + 5];
        let mut demuxer = RawFrameDemuxer::new(bytes.as_slice(), resolution);

        assert!(demuxer.next_frame().unwrap().is_some());
        assert!(matches!(
            demuxer.next_frame(),
            Err(CodecError::SizeMismatch {
                expected: 12,
                actual: 5
            })
        ));
    }

    #[test]
    fn empty_input_has_no_frames() {
        let resolution = Resolution::new(2, 2).unwrap();
        let mut demuxer = RawFrameDemuxer::new(io::empty(), resolution);

        assert_eq!(demuxer.next_frame().unwrap(), None);
    }
}
