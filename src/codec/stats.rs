/// Byte counts at each stage of an encode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    pub frames: usize,
    pub raw_bytes: usize,
    pub yuv_bytes: usize,
    pub compressed_bytes: usize,
}

impl EncodeStats {
    pub fn yuv_percent(&self) -> f64 {
        percent_of(self.yuv_bytes, self.raw_bytes)
    }

    pub fn compressed_percent(&self) -> f64 {
        percent_of(self.compressed_bytes, self.raw_bytes)
    }
}

fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.;
    }

    100. * part as f64 / whole as f64
}
