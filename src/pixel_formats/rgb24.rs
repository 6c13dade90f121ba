use crate::{colors::Rgb, image::Resolution};

/// Pixel `index` (`row * width + col`) of an interleaved rgb24 frame.
pub fn pixel_at(bytes: &[u8], index: usize) -> Rgb {
    Rgb::from_bytes(&bytes[index * 3..index * 3 + 3])
}

pub fn pixels(bytes: &[u8]) -> impl Iterator<Item = Rgb> + '_ {
    bytes.chunks_exact(3).map(Rgb::from_bytes)
}

/// A frame where every pixel has the same color.
pub fn solid_frame(resolution: Resolution, color: Rgb) -> Vec<u8> {
    let triplet: [u8; 3] = color.into();

    triplet
        .iter()
        .copied()
        .cycle()
        .take(resolution.rgb_frame_size())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_are_row_major() {
        let resolution = Resolution::new(2, 2).unwrap();
        let bytes: Vec<u8> = (0..resolution.rgb_frame_size() as u8).collect();

        assert_eq!(pixel_at(&bytes, 0), Rgb::new(0, 1, 2));
        assert_eq!(pixel_at(&bytes, 3), Rgb::new(9, 10, 11));
        assert_eq!(pixels(&bytes).count(), 4);
    }

    #[test]
    fn solid_frame_repeats_the_color() {
        let resolution = Resolution::new(4, 2).unwrap();
        let frame = solid_frame(resolution, Rgb::new(255, 0, 0));

        assert_eq!(frame.len(), 24);
        assert!(pixels(&frame).all(|px| px == Rgb::new(255, 0, 0)));
    }
}
