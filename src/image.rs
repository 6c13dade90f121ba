use crate::codec::CodecError;

/// Frame dimensions shared by every frame of a stream.
///
/// Both sides must be positive and even so that every pixel belongs to a
/// whole 2x2 chroma block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, CodecError> {
        let invalid = CodecError::Dimension { width, height };

        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(invalid);
        }

        // Every size accessor below is derived from this product.
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or(invalid)?;

        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Bytes in one interleaved rgb24 frame.
    pub fn rgb_frame_size(&self) -> usize {
        self.pixel_count() * 3
    }

    pub fn luma_size(&self) -> usize {
        self.pixel_count()
    }

    /// Bytes in one subsampled chroma plane.
    pub fn chroma_size(&self) -> usize {
        self.pixel_count() / 4
    }

    /// Bytes in one planar yuv420p frame, and therefore in one delta frame.
    pub fn yuv_frame_size(&self) -> usize {
        self.luma_size() + self.chroma_size() * 2
    }

    pub fn chroma_width(&self) -> usize {
        self.width() / 2
    }
}
