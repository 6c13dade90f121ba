use clap::ValueEnum;
use yuvdelta::{codec::CompressionLevel, colors::SampleOverflow};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompressionArg {
    /// Stored blocks only
    None,
    Fast,
    Default,
    /// Maximum effort
    Best,
}

impl From<CompressionArg> for CompressionLevel {
    fn from(value: CompressionArg) -> Self {
        match value {
            CompressionArg::None => CompressionLevel::None,
            CompressionArg::Fast => CompressionLevel::Fast,
            CompressionArg::Default => CompressionLevel::Default,
            CompressionArg::Best => CompressionLevel::Best,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    /// Keep the low eight bits of out-of-range samples
    Wrap,
    /// Clamp out-of-range samples to 0..=255
    Saturate,
}

impl From<OverflowArg> for SampleOverflow {
    fn from(value: OverflowArg) -> Self {
        match value {
            OverflowArg::Wrap => SampleOverflow::Wrap,
            OverflowArg::Saturate => SampleOverflow::Saturate,
        }
    }
}
