use super::Color;
use crate::coords::Size;

/// Owned RGBA8 pixel buffer with dimensions.
///
/// This is the decoded form the rendering layer consumes; where pixels came
/// from (file, procedural generation, ...) is not its concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// A fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    /// Takes ownership of an existing pixel buffer.
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer does not match image dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The buffer as tightly packed RGBA8 bytes, ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Copies `source` into this image with its top-left corner at `(x, y)`.
    ///
    /// Panics if `source` does not fit; callers are expected to have placed
    /// it within bounds.
    pub fn insert_image(&mut self, x: u32, y: u32, source: &Image) {
        assert!(x + source.width <= self.width && y + source.height <= self.height);

        for row in 0..source.height {
            let dst_start = ((y + row) * self.width + x) as usize;
            let src_start = (row * source.width) as usize;
            let len = source.width as usize;
            self.pixels[dst_start..dst_start + len]
                .copy_from_slice(&source.pixels[src_start..src_start + len]);
        }
    }
}
