use crate::algebra::{Matrix3, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Reads one interleaved triplet. `bytes` must hold at least three values.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Rgb> for Vec3 {
    fn from(val: Rgb) -> Self {
        Vec3([val.r as f64, val.g as f64, val.b as f64])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// Luma and chroma as produced by the forward transform, before they are
/// stored as 8-bit samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yuv {
    pub y: f64,
    pub u: f64,
    pub v: f64,
}

impl Yuv {
    pub fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }

    pub fn quantize(&self, overflow: SampleOverflow) -> YuvSample {
        YuvSample::new(
            overflow.quantize(self.y),
            overflow.quantize(self.u),
            overflow.quantize(self.v),
        )
    }
}

impl From<Vec3> for Yuv {
    fn from(value: Vec3) -> Self {
        Self::new(value.0[0], value.0[1], value.0[2])
    }
}

/// One stored luma/chroma triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YuvSample {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl YuvSample {
    pub fn new(y: u8, u: u8, v: u8) -> Self {
        Self { y, u, v }
    }
}

impl From<YuvSample> for Vec3 {
    fn from(val: YuvSample) -> Self {
        Vec3([val.y as f64, val.u as f64, val.v as f64])
    }
}

/// How a float sample outside `[0, 256)` is turned into a byte on the
/// forward path.
///
/// `Wrap` truncates toward zero and keeps the low eight bits, the behaviour
/// existing streams were encoded with. `Saturate` clamps to `0..=255`
/// instead and changes the bitstream for inputs that overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleOverflow {
    #[default]
    Wrap,
    Saturate,
}

impl SampleOverflow {
    pub fn quantize(self, value: f64) -> u8 {
        match self {
            SampleOverflow::Wrap => value as i64 as u8,
            SampleOverflow::Saturate => value as u8,
        }
    }
}

const RGB_TO_YUV_CONVERSION_TABLE: Matrix3 = Matrix3::new(
    [0.299, -0.169, 0.499],
    [0.587, -0.331, -0.418],
    [0.114, 0.449, -0.0813],
);
const RGB_TO_YUV_CONVERSION_OFFSET: Vec3 = Vec3::new(0., 128., 128.);

const YUV_TO_RGB_CONVERSION_TABLE: Matrix3 = Matrix3::new(
    [1., 1., 1.],
    [0., -0.344, 1.772],
    [1.402, -0.714, 0.],
);

impl From<Rgb> for Yuv {
    fn from(rgb: Rgb) -> Self {
        let rgb_vec: Vec3 = rgb.into();

        Self::from(RGB_TO_YUV_CONVERSION_OFFSET + rgb_vec * &RGB_TO_YUV_CONVERSION_TABLE)
    }
}

/// Inverse transform. Unlike the forward direction every channel is clamped
/// to `0..=255` before truncation.
impl From<YuvSample> for Rgb {
    fn from(sample: YuvSample) -> Self {
        let vec: Vec3 = sample.into();
        let rgb = (vec - RGB_TO_YUV_CONVERSION_OFFSET) * &YUV_TO_RGB_CONVERSION_TABLE;

        Rgb {
            r: rgb.0[0].clamp(0., 255.) as u8,
            g: rgb.0[1].clamp(0., 255.) as u8,
            b: rgb.0[2].clamp(0., 255.) as u8,
        }
    }
}
