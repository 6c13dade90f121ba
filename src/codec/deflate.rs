//! Lossless compression of the concatenated frame stream.
//!
//! The stream is raw DEFLATE (RFC 1951) with no zlib or gzip wrapper.

use std::io::{self, Read, Write};

use flate2::{write::DeflateEncoder, Decompress, FlushDecompress, Status};

use super::{CodecError, CompressionLevel};

const INPUT_BUFFER_SIZE: usize = 32 * 1024;

pub fn compress(bytes: &[u8], level: CompressionLevel) -> Result<Vec<u8>, CodecError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), level.to_flate2());
    encoder.write_all(bytes)?;

    Ok(encoder.finish()?)
}

pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut inflated = Vec::new();
    InflateReader::new(bytes)
        .read_to_end(&mut inflated)
        .map_err(inflate_error)?;

    Ok(inflated)
}

/// Maps errors coming out of an [`InflateReader`]: malformed or truncated
/// data becomes `CorruptStream`, anything else is the underlying reader's.
pub fn inflate_error(err: io::Error) -> CodecError {
    match err.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            CodecError::CorruptStream(err.to_string())
        }
        _ => CodecError::Io(err),
    }
}

/// Inflates a raw DEFLATE stream from `inner`.
///
/// Reaching the end of `inner` before the final block is complete is an
/// `UnexpectedEof` error rather than a short read.
pub struct InflateReader<R> {
    inner: R,
    inflater: Decompress,
    input: Box<[u8]>,
    pos: usize,
    end: usize,
    finished: bool,
}

impl<R: Read> InflateReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            inflater: Decompress::new(false),
            input: vec![0; INPUT_BUFFER_SIZE].into_boxed_slice(),
            pos: 0,
            end: 0,
            finished: false,
        }
    }

    pub fn total_in(&self) -> u64 {
        self.inflater.total_in()
    }

    pub fn total_out(&self) -> u64 {
        self.inflater.total_out()
    }
}

impl<R: Read> Read for InflateReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.finished || out.is_empty() {
            return Ok(0);
        }

        loop {
            if self.pos == self.end {
                self.end = self.inner.read(&mut self.input[..])?;
                self.pos = 0;
            }

            let eof = self.pos == self.end;
            let before_in = self.inflater.total_in();
            let before_out = self.inflater.total_out();
            let status = self
                .inflater
                .decompress(&self.input[self.pos..self.end], out, FlushDecompress::None)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
            let consumed = (self.inflater.total_in() - before_in) as usize;
            let written = (self.inflater.total_out() - before_out) as usize;
            self.pos += consumed;

            match status {
                Status::StreamEnd => {
                    self.finished = true;
                    return Ok(written);
                }
                _ if written > 0 => return Ok(written),
                _ if eof => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "deflate stream ended before its final block",
                    ))
                }
                _ if consumed == 0 && self.pos < self.end => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "deflate stream made no progress",
                    ))
                }
                _ => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_payload() -> Vec<u8> {
        (0..20_000u32).map(|i| (i % 251) as u8 ^ (i / 97) as u8).collect()
    }

    #[test]
    fn roundtrip_at_every_level() {
        let payload = sample_payload();

        for level in [
            CompressionLevel::None,
            CompressionLevel::Fast,
            CompressionLevel::Default,
            CompressionLevel::Best,
        ] {
            let compressed = compress(&payload, level).unwrap();
            assert_eq!(decompress(&compressed).unwrap(), payload, "{level:?}");
        }
    }

    #[test]
    fn empty_input_roundtrips() {
        let compressed = compress(&[], CompressionLevel::Best).unwrap();

        assert!(!compressed.is_empty());
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn zeros_compress_well() {
        let compressed = compress(&[0; 65_536], CompressionLevel::Best).unwrap();

        assert!(compressed.len() < 1024);
    }

    #[test]
    fn truncated_stream_is_corrupt() {
        let compressed = compress(&sample_payload(), CompressionLevel::Best).unwrap();

        for cut in [0, 1, compressed.len() / 2, compressed.len() - 1] {
            assert!(
                matches!(
                    decompress(&compressed[..cut]),
                    Err(CodecError::CorruptStream(_))
                ),
                "cut at {cut} of {}",
                compressed.len()
            );
        }
    }

    #[test]
    fn garbage_is_corrupt() {
        assert!(matches!(
            decompress(&[0xff; 16]),
            Err(CodecError::CorruptStream(_))
        ));
    }

    #[test]
    fn reader_serves_small_reads() {
        let payload = sample_payload();
        let compressed = compress(&payload, CompressionLevel::Best).unwrap();
        let mut reader = InflateReader::new(compressed.as_slice());
        let mut inflated = Vec::new();
        let mut chunk = [0u8; 7];

        loop {
            let n = reader.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            inflated.extend_from_slice(&chunk[..n]);
        }

        assert_eq!(inflated, payload);
        assert_eq!(reader.total_in(), compressed.len() as u64);
        assert_eq!(reader.total_out(), payload.len() as u64);
    }

    proptest! {
        #[test]
        fn decompress_inverts_compress(bytes in prop::collection::vec(any::<u8>(), 0..4096)) {
            let compressed = compress(&bytes, CompressionLevel::Fast).unwrap();
            prop_assert_eq!(decompress(&compressed).unwrap(), bytes);
        }
    }
}
