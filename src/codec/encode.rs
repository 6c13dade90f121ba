use std::io::Write;

use flate2::write::DeflateEncoder;
use tracing::{debug, info};

use crate::{
    pixel_formats::{ensure_frame_size, rgb24_to_yuv420p},
    stream::FrameSource,
};

use super::{delta::forward_delta, CodecConfig, CodecError, EncodeStats};

/// Encodes rgb24 frames one at a time into a DEFLATE stream written to `W`.
///
/// Only the previous planar frame is kept between calls. The first frame is
/// written as is, every later one as its delta against the frame before it.
/// An error from [`Encoder::add_frame`] leaves nothing of that frame in the
/// stream, but the stream as a whole should be abandoned.
pub struct Encoder<W: Write> {
    config: CodecConfig,
    deflater: DeflateEncoder<W>,
    previous: Option<Vec<u8>>,
    stats: EncodeStats,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W, config: CodecConfig) -> Self {
        Self {
            deflater: DeflateEncoder::new(writer, config.compression_level.to_flate2()),
            config,
            previous: None,
            stats: EncodeStats::default(),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn add_frame(&mut self, rgb: &[u8]) -> Result<(), CodecError> {
        let index = self.stats.frames;
        let yuv = rgb24_to_yuv420p(rgb, self.config.resolution, self.config.sample_overflow)?;

        match &self.previous {
            None => {
                debug!(frame = index, bytes = yuv.len(), "writing keyframe");
                self.deflater.write_all(&yuv)?;
            }
            Some(previous) => {
                let delta = forward_delta(previous, &yuv)?;
                debug!(frame = index, bytes = delta.len(), "writing delta frame");
                self.deflater.write_all(&delta)?;
            }
        }

        self.stats.frames += 1;
        self.stats.raw_bytes += rgb.len();
        self.stats.yuv_bytes += yuv.len();
        self.previous = Some(yuv);

        Ok(())
    }

    /// Flushes the final DEFLATE block and hands back the writer.
    pub fn finish(mut self) -> Result<(W, EncodeStats), CodecError> {
        self.deflater.try_finish()?;
        self.stats.compressed_bytes = self.deflater.total_out() as usize;

        let stats = self.stats;
        let writer = self.deflater.finish()?;

        info!(
            frames = stats.frames,
            raw_bytes = stats.raw_bytes,
            yuv_bytes = stats.yuv_bytes,
            compressed_bytes = stats.compressed_bytes,
            "encode finished"
        );

        Ok((writer, stats))
    }
}

/// Drains `source` into an [`Encoder`] over `writer`.
pub fn encode_source<S, W>(
    source: &mut S,
    writer: W,
    config: CodecConfig,
) -> Result<(W, EncodeStats), CodecError>
where
    S: FrameSource + ?Sized,
    W: Write,
{
    if source.resolution() != config.resolution {
        return Err(CodecError::SizeMismatch {
            expected: config.resolution.rgb_frame_size(),
            actual: source.resolution().rgb_frame_size(),
        });
    }

    let mut encoder = Encoder::new(writer, config);

    while let Some(frame) = source.next_frame()? {
        encoder.add_frame(&frame)?;
    }

    encoder.finish()
}

/// Encodes a complete in-memory sequence with the default configuration.
pub fn encode<F: AsRef<[u8]>>(
    frames: &[F],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, CodecError> {
    let (stream, _) = encode_with_config(frames, CodecConfig::new(width, height)?)?;

    Ok(stream)
}

/// Checks every frame's length before encoding any of them.
pub fn encode_with_config<F: AsRef<[u8]>>(
    frames: &[F],
    config: CodecConfig,
) -> Result<(Vec<u8>, EncodeStats), CodecError> {
    let expected = config.resolution.rgb_frame_size();

    for frame in frames {
        ensure_frame_size(frame.as_ref(), expected)?;
    }

    let mut encoder = Encoder::new(Vec::new(), config);

    for frame in frames {
        encoder.add_frame(frame.as_ref())?;
    }

    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{deflate::decompress, PartialCodecConfig},
        colors::Rgb,
        demuxers::MemoryDemuxer,
        image::Resolution,
        pixel_formats::rgb24::solid_frame,
    };

    fn config() -> CodecConfig {
        CodecConfig::new(4, 2).unwrap()
    }

    #[test]
    fn first_frame_is_stored_absolute_and_repeats_as_zero_deltas() {
        let resolution = config().resolution;
        let frame = solid_frame(resolution, Rgb::new(0, 0, 0));

        let stream = encode(&[&frame, &frame, &frame], 4, 2).unwrap();
        let inflated = decompress(&stream).unwrap();

        assert_eq!(inflated.len(), 3 * resolution.yuv_frame_size());
        assert_eq!(&inflated[..8], &[0; 8]);
        assert_eq!(&inflated[8..12], &[128; 4]);
        assert!(inflated[12..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn delta_is_taken_in_yuv_space() {
        let resolution = config().resolution;
        let black = solid_frame(resolution, Rgb::new(0, 0, 0));
        let red = solid_frame(resolution, Rgb::new(255, 0, 0));

        let stream = encode(&[&black, &red], 4, 2).unwrap();
        let inflated = decompress(&stream).unwrap();
        let delta = &inflated[resolution.yuv_frame_size()..];

        // luma 0 -> 76, u 128 -> 84, v 128 -> 255
        assert!(delta[..8].iter().all(|&byte| byte == 76));
        assert!(delta[8..10].iter().all(|&byte| byte == 84u8.wrapping_sub(128)));
        assert!(delta[10..].iter().all(|&byte| byte == 127));
    }

    #[test]
    fn size_mismatch_anywhere_rejects_the_whole_sequence() {
        let good = vec![0u8; 24];
        let bad = vec![0u8; 25];

        assert!(matches!(
            encode(&[&good, &good, &bad], 4, 2),
            Err(CodecError::SizeMismatch {
                expected: 24,
                actual: 25
            })
        ));
    }

    #[test]
    fn odd_dimensions_are_rejected_before_frames_are_looked_at() {
        let frame = vec![0u8; 18];

        assert!(matches!(
            encode(&[&frame], 3, 2),
            Err(CodecError::Dimension {
                width: 3,
                height: 2
            })
        ));
    }

    #[test]
    fn stats_track_each_stage() {
        let frame = solid_frame(config().resolution, Rgb::new(10, 20, 30));

        let (stream, stats) = encode_with_config(&[&frame, &frame], config()).unwrap();

        assert_eq!(stats.frames, 2);
        assert_eq!(stats.raw_bytes, 48);
        assert_eq!(stats.yuv_bytes, 24);
        assert_eq!(stats.compressed_bytes, stream.len());
    }

    #[test]
    fn streaming_matches_one_shot() {
        let resolution = config().resolution;
        let frames = vec![
            solid_frame(resolution, Rgb::new(1, 2, 3)),
            solid_frame(resolution, Rgb::new(200, 100, 50)),
        ];

        let (one_shot, _) = encode_with_config(&frames, config()).unwrap();
        let mut source = MemoryDemuxer::new(resolution, frames);
        let (streamed, _) = encode_source(&mut source, Vec::new(), config()).unwrap();

        assert_eq!(one_shot, streamed);
    }

    #[test]
    fn source_resolution_must_match_config() {
        let mut source = MemoryDemuxer::new(Resolution::new(2, 2).unwrap(), vec![vec![0; 12]]);

        assert!(matches!(
            encode_source(&mut source, Vec::new(), config()),
            Err(CodecError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn compression_level_changes_only_the_deflate_stage() {
        let resolution = config().resolution;
        let frame = solid_frame(resolution, Rgb::new(90, 60, 30));
        let stored = PartialCodecConfig::new()
            .compression_level(crate::codec::CompressionLevel::None)
            .build(4, 2)
            .unwrap();

        let (best, _) = encode_with_config(&[&frame], config()).unwrap();
        let (none, _) = encode_with_config(&[&frame], stored).unwrap();

        assert_eq!(decompress(&best).unwrap(), decompress(&none).unwrap());
    }
}
