//! Rendering buffer

use crate::error::Error;
use crate::error::Result;

/// Rendering Buffer
///
/// Floating point pixel data stored in row-major order (C-format),
///   `channels` values per pixel
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<f32>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Number of color components per pixel
    pub channels: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and channels
    ///
    /// Data for the Image is allocated and set to 0.0
    ///
    ///     use trirast::RenderingBuffer;
    ///
    ///     let buf = RenderingBuffer::new(8, 4, 4).unwrap();
    ///     assert_eq!(buf.len(), 8 * 4 * 4);
    ///     assert!(RenderingBuffer::new(0, 4, 4).is_err());
    ///
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        let n = Self::size(width, height, channels)?;
        Ok(RenderingBuffer {
            width, height, channels, data: vec![0.0; n]
        })
    }
    /// Wrap existing pixel data
    ///
    /// `data` must hold exactly `width * height * channels` values
    pub fn from_vec(width: usize, height: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        let expected = Self::size(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSize { width, height, channels,
                                           expected, actual: data.len() });
        }
        Ok(RenderingBuffer { width, height, channels, data })
    }
    /// Number of values for width, height, and channels
    fn size(width: usize, height: usize, channels: usize) -> Result<usize> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(Error::EmptyBuffer { width, height, channels });
        }
        width.checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(Error::BufferTooLarge { width, height, channels })
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Buffer holds no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Values of the pixel at (`x`,`y`)
    pub fn pixel(&self, x: usize, y: usize) -> &[f32] {
        &self[(x,y)]
    }
    /// Overwrite the pixel at (`x`,`y`)
    pub fn set_pixel(&mut self, x: usize, y: usize, values: &[f32]) {
        self[(x,y)].copy_from_slice(values);
    }
    /// Set every value in the buffer
    pub fn fill(&mut self, value: f32) {
        self.data.iter_mut().for_each(|v| *v = value);
    }
    /// Clear an image, all values set to 0.0
    pub fn clear(&mut self) {
        self.fill(0.0);
    }
    fn offset(&self, x: usize, y: usize) -> usize {
        ((y * self.width) + x) * self.channels
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [f32];
    fn index(&self, index: (usize, usize)) -> &[f32] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + self.channels]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [f32] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index.0, index.1);
        let n = self.channels;
        &mut self.data[i .. i + n]
    }
}
