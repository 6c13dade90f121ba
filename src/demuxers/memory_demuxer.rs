use std::collections::VecDeque;

use crate::{codec::CodecError, image::Resolution, stream::FrameSource};

/// Serves frames that are already in memory, in order.
pub struct MemoryDemuxer {
    frames: VecDeque<Vec<u8>>,
    resolution: Resolution,
}

impl MemoryDemuxer {
    pub fn new(resolution: Resolution, frames: Vec<Vec<u8>>) -> Self {
        Self {
            frames: frames.into(),
            resolution,
        }
    }
}

impl FrameSource for MemoryDemuxer {
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>, CodecError> {
        Ok(self.frames.pop_front())
    }

    fn resolution(&self) -> Resolution {
        self.resolution
    }
}
