//! RGBA8 pixel buffers used for drag proxies and surface captures.

/// An owned RGBA8 pixel buffer.
///
/// This is the currency of the snapshot layer: a captured row becomes a
/// `Bitmap` that floats with the pointer, and a captured list surface
/// becomes a `Bitmap` that tests can assert against. There is no display
/// machinery here, only pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Creates a transparent bitmap of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Wraps an existing RGBA8 buffer. The buffer length must be
    /// `width * height * 4`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGBA value at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Fills the pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Fills a rectangular region, clipped to the bitmap bounds.
    pub fn fill_region(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let x_end = (x + width).min(self.width);
        let y_end = (y + height).min(self.height);
        for py in y..y_end {
            for px in x..x_end {
                self.set_pixel(px, py, rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bitmap_is_transparent() {
        let bitmap = Bitmap::new(2, 2);
        assert_eq!(bitmap.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(bitmap.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(bitmap.pixel(2, 0), None);
    }

    #[test]
    fn from_pixels_validates_length() {
        assert!(Bitmap::from_pixels(2, 2, vec![0; 16]).is_some());
        assert!(Bitmap::from_pixels(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn fill_region_clips_to_bounds() {
        let mut bitmap = Bitmap::new(4, 4);
        bitmap.fill_region(2, 2, 10, 10, [1, 2, 3, 255]);
        assert_eq!(bitmap.pixel(2, 2), Some([1, 2, 3, 255]));
        assert_eq!(bitmap.pixel(3, 3), Some([1, 2, 3, 255]));
        assert_eq!(bitmap.pixel(1, 1), Some([0, 0, 0, 0]));
    }
}
