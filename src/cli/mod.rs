use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use yuvdelta::{
    codec::{encode_source, CodecConfig, Decoder, PartialCodecConfig},
    demuxers::RawFrameDemuxer,
    image::Resolution,
    muxers::{Muxer, RawFrameMuxer},
};

mod options;

use options::{CompressionArg, OverflowArg};

/// Keyframe plus delta yuv420p codec for raw rgb24 video
#[derive(Parser, Debug)]
#[command(name = "yuvdelta", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a raw rgb24 file
    Encode {
        #[command(flatten)]
        dimensions: Dimensions,

        #[arg(long, value_enum, default_value_t = CompressionArg::Best)]
        compression: CompressionArg,

        #[arg(long, value_enum, default_value_t = OverflowArg::Wrap)]
        overflow: OverflowArg,

        input: PathBuf,
        output: PathBuf,
    },
    /// Expand a compressed stream back into a raw rgb24 file
    Decode {
        #[command(flatten)]
        dimensions: Dimensions,

        input: PathBuf,
        output: PathBuf,
    },
}

/// The stream does not record its dimensions, so both directions need them.
#[derive(Args, Debug, Clone, Copy)]
pub struct Dimensions {
    /// Frame width in pixels, must be even
    #[arg(short = 'W', long)]
    pub width: u32,

    /// Frame height in pixels, must be even
    #[arg(short = 'H', long)]
    pub height: u32,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Encode {
                dimensions,
                compression,
                overflow,
                input,
                output,
            } => {
                let config = PartialCodecConfig::new()
                    .compression_level(compression.into())
                    .sample_overflow(overflow.into())
                    .build(dimensions.width, dimensions.height)?;

                encode_file(&input, &output, config)
            }
            Command::Decode {
                dimensions,
                input,
                output,
            } => {
                let resolution = Resolution::new(dimensions.width, dimensions.height)?;

                decode_file(&input, &output, resolution)
            }
        }
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    Ok(BufReader::new(file))
}

/// Creates `path` and hands it to `produce`. The file is removed again if
/// anything fails, so a failed run leaves no partial output behind.
fn write_output<T>(
    path: &Path,
    produce: impl FnOnce(BufWriter<File>) -> Result<(BufWriter<File>, T)>,
) -> Result<T> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;

    let result = produce(BufWriter::new(file)).and_then(|(mut writer, value)| {
        writer.flush()?;
        Ok(value)
    });

    if result.is_err() {
        let _ = fs::remove_file(path);
    }

    result.with_context(|| format!("failed to write {}", path.display()))
}

fn encode_file(input: &Path, output: &Path, config: CodecConfig) -> Result<()> {
    let mut source = RawFrameDemuxer::new(open_input(input)?, config.resolution);

    let stats = write_output(output, |writer| Ok(encode_source(&mut source, writer, config)?))?;

    info!("Raw size: {} bytes", stats.raw_bytes);
    info!(
        "YUV420P size: {} bytes ({:.2}% original size)",
        stats.yuv_bytes,
        stats.yuv_percent()
    );
    info!(
        "DEFLATE size: {} bytes ({:.2}% original size)",
        stats.compressed_bytes,
        stats.compressed_percent()
    );
    info!(frames = stats.frames, "wrote {}", output.display());

    Ok(())
}

fn decode_file(input: &Path, output: &Path, resolution: Resolution) -> Result<()> {
    let decoder = Decoder::new(open_input(input)?, resolution);

    let frames = write_output(output, |writer| {
        let mut muxer = RawFrameMuxer::new(writer, resolution);
        let frames = muxer.consume_frames(decoder)?;

        Ok((muxer.into_inner()?, frames))
    })?;

    info!(frames, "wrote {}", output.display());

    Ok(())
}
