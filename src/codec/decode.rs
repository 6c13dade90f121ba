use std::io::{self, Read};

use tracing::{debug, info};

use crate::{image::Resolution, pixel_formats::yuv420p_to_rgb24};

use super::{
    deflate::{inflate_error, InflateReader},
    delta::accumulate_delta,
    CodecError,
};

/// Yields the rgb24 frames of a stream in order, inflating lazily.
///
/// Only the previous planar frame is kept. The first error is yielded once
/// and ends the iteration.
pub struct Decoder<R: Read> {
    resolution: Resolution,
    reader: InflateReader<R>,
    previous: Option<Vec<u8>>,
    frames: usize,
    done: bool,
}

impl<R: Read> Decoder<R> {
    /// `resolution` must be the one the stream was encoded with; the stream
    /// itself does not record it.
    pub fn new(reader: R, resolution: Resolution) -> Self {
        Self {
            resolution,
            reader: InflateReader::new(reader),
            previous: None,
            frames: 0,
            done: false,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn next_frame(&mut self) -> Result<Option<Vec<u8>>, CodecError> {
        let mut planar = vec![0u8; self.resolution.yuv_frame_size()];
        let filled = read_chunk(&mut self.reader, &mut planar).map_err(inflate_error)?;

        if filled == 0 {
            info!(
                frames = self.frames,
                compressed_bytes = self.reader.total_in(),
                inflated_bytes = self.reader.total_out(),
                "decode finished"
            );
            return Ok(None);
        }

        if filled < planar.len() {
            return Err(CodecError::CorruptStream(format!(
                "stream ends with a partial frame of {filled} bytes, frames are {} bytes",
                planar.len()
            )));
        }

        match &self.previous {
            None => debug!(frame = self.frames, "read keyframe"),
            Some(previous) => {
                accumulate_delta(previous, &mut planar)?;
                debug!(frame = self.frames, "applied delta frame");
            }
        }

        let rgb = yuv420p_to_rgb24(&planar, self.resolution)?;
        self.previous = Some(planar);
        self.frames += 1;

        Ok(Some(rgb))
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = Result<Vec<u8>, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Fills as much of `chunk` as the reader can provide.
fn read_chunk(reader: &mut impl Read, chunk: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < chunk.len() {
        match reader.read(&mut chunk[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

/// Decodes a complete stream. Any error discards every frame decoded so far.
pub fn decode(stream: &[u8], width: u32, height: u32) -> Result<Vec<Vec<u8>>, CodecError> {
    let resolution = Resolution::new(width, height)?;

    Decoder::new(stream, resolution).collect()
}
