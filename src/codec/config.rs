use flate2::Compression;

use crate::{colors::SampleOverflow, image::Resolution};

use super::CodecError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    None,
    Fast,
    Default,
    #[default]
    Best,
}

impl CompressionLevel {
    pub fn to_flate2(self) -> Compression {
        match self {
            CompressionLevel::None => Compression::none(),
            CompressionLevel::Fast => Compression::fast(),
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::Best => Compression::best(),
        }
    }
}

/// Everything the encoder needs besides the frames. The decoder only reads
/// `resolution`, which has to match the one used to encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    pub resolution: Resolution,
    pub compression_level: CompressionLevel,
    pub sample_overflow: SampleOverflow,
}

impl CodecConfig {
    pub fn new(width: u32, height: u32) -> Result<Self, CodecError> {
        PartialCodecConfig::new().build(width, height)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PartialCodecConfig {
    compression_level: Option<CompressionLevel>,
    sample_overflow: Option<SampleOverflow>,
}

impl PartialCodecConfig {
    pub fn new() -> Self {
        Self {
            compression_level: None,
            sample_overflow: None,
        }
    }

    pub fn compression_level(mut self, compression_level: CompressionLevel) -> Self {
        self.compression_level = Some(compression_level);
        self
    }

    pub fn sample_overflow(mut self, sample_overflow: SampleOverflow) -> Self {
        self.sample_overflow = Some(sample_overflow);
        self
    }

    pub fn build(self, width: u32, height: u32) -> Result<CodecConfig, CodecError> {
        Ok(CodecConfig {
            resolution: Resolution::new(width, height)?,
            compression_level: self.compression_level.unwrap_or_default(),
            sample_overflow: self.sample_overflow.unwrap_or_default(),
        })
    }
}
