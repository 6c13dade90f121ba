mod memory_demuxer;
mod raw_frame_demuxer;

pub use memory_demuxer::MemoryDemuxer;
pub use raw_frame_demuxer::RawFrameDemuxer;
