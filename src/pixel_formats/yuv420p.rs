use crate::{
    codec::CodecError,
    colors::{Rgb, SampleOverflow, Yuv, YuvSample},
    image::Resolution,
};

use super::{rgb24, utils::ensure_frame_size};

/// The four pixels sharing one chroma sample, in the order they are summed.
const CHROMA_BLOCK: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Borrowed view of the three planes of a yuv420p frame.
pub struct Yuv420pPlanes<'a> {
    pub luma: &'a [u8],
    pub cb: &'a [u8],
    pub cr: &'a [u8],
    resolution: Resolution,
}

impl<'a> Yuv420pPlanes<'a> {
    pub fn split(bytes: &'a [u8], resolution: Resolution) -> Result<Self, CodecError> {
        ensure_frame_size(bytes, resolution.yuv_frame_size())?;

        let (luma, chroma) = bytes.split_at(resolution.luma_size());
        let (cb, cr) = chroma.split_at(resolution.chroma_size());

        Ok(Self {
            luma,
            cb,
            cr,
            resolution,
        })
    }

    /// Luma of the pixel itself, chroma of the 2x2 block it belongs to.
    pub fn sample(&self, row: usize, col: usize) -> YuvSample {
        let chroma_index = (row / 2) * self.resolution.chroma_width() + col / 2;

        YuvSample::new(
            self.luma[row * self.resolution.width() + col],
            self.cb[chroma_index],
            self.cr[chroma_index],
        )
    }
}

/// Converts an rgb24 frame to planar yuv420p.
///
/// Luma is stored per pixel. U and V are the mean of the four unquantized
/// values of each 2x2 block, quantized once after averaging.
pub fn rgb24_to_yuv420p(
    rgb: &[u8],
    resolution: Resolution,
    overflow: SampleOverflow,
) -> Result<Vec<u8>, CodecError> {
    ensure_frame_size(rgb, resolution.rgb_frame_size())?;

    let width = resolution.width();
    let mut yuv = vec![0u8; resolution.yuv_frame_size()];
    let (luma, chroma) = yuv.split_at_mut(resolution.luma_size());
    let (cb, cr) = chroma.split_at_mut(resolution.chroma_size());

    for row in (0..resolution.height()).step_by(2) {
        for col in (0..width).step_by(2) {
            let mut u_sum = 0.;
            let mut v_sum = 0.;

            for (drow, dcol) in CHROMA_BLOCK {
                let index = (row + drow) * width + col + dcol;
                let pixel = Yuv::from(rgb24::pixel_at(rgb, index));

                luma[index] = overflow.quantize(pixel.y);
                u_sum += pixel.u;
                v_sum += pixel.v;
            }

            let chroma_index = (row / 2) * resolution.chroma_width() + col / 2;
            cb[chroma_index] = overflow.quantize(u_sum / 4.);
            cr[chroma_index] = overflow.quantize(v_sum / 4.);
        }
    }

    Ok(yuv)
}

/// Converts a planar yuv420p frame back to rgb24, upsampling chroma by
/// nearest neighbour.
pub fn yuv420p_to_rgb24(yuv: &[u8], resolution: Resolution) -> Result<Vec<u8>, CodecError> {
    let planes = Yuv420pPlanes::split(yuv, resolution)?;
    let mut rgb = Vec::with_capacity(resolution.rgb_frame_size());

    for row in 0..resolution.height() {
        for col in 0..resolution.width() {
            let pixel: [u8; 3] = Rgb::from(planes.sample(row, col)).into();
            rgb.extend_from_slice(&pixel);
        }
    }

    Ok(rgb)
}
