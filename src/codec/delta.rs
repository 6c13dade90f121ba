//! Byte-wise temporal differencing between consecutive yuv420p frames.

use crate::{codec::CodecError, pixel_formats::ensure_frame_size};

/// `delta[i] = current[i] - previous[i]` modulo 256.
pub fn forward_delta(previous: &[u8], current: &[u8]) -> Result<Vec<u8>, CodecError> {
    ensure_frame_size(current, previous.len())?;

    Ok(current
        .iter()
        .zip(previous)
        .map(|(current, previous)| current.wrapping_sub(*previous))
        .collect())
}

/// `current[i] = previous[i] + delta[i]` modulo 256.
pub fn inverse_delta(previous: &[u8], delta: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut current = delta.to_vec();
    accumulate_delta(previous, &mut current)?;

    Ok(current)
}

/// Turns `delta` into the reconstructed frame without a second buffer.
pub fn accumulate_delta(previous: &[u8], delta: &mut [u8]) -> Result<(), CodecError> {
    ensure_frame_size(delta, previous.len())?;

    delta
        .iter_mut()
        .zip(previous)
        .for_each(|(sample, previous)| *sample = sample.wrapping_add(*previous));

    Ok(())
}
