//! Colors and Pixels

use std::ops::{AddAssign, Div, Mul, Sub};

use crate::math::Vector;

/// Convert an f64 [0,1] component to a u8 [0,255] component
///
/// Values outside of [0,1] are clamped
pub fn cu8(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

/// Output of a fragment shader
///
/// A Pixel knows how many channels it occupies in a
///   [RenderingBuffer](../buffer/struct.RenderingBuffer.html) and how to
///   write itself into them
///
///     use trirast::{Pixel,Rgba};
///
///     let mut dst = [0.0f32; 4];
///     Rgba::new(1.0, 0.5, 0.25, 1.0).write(&mut dst);
///     assert_eq!(dst, [1.0, 0.5, 0.25, 1.0]);
///     assert_eq!(Rgba::CHANNELS, 4);
///
pub trait Pixel {
    /// Number of channels written
    const CHANNELS: usize;
    /// Write channels into `dst`, `dst` is exactly `CHANNELS` long
    fn write(&self, dst: &mut [f32]);
}

impl Pixel for f32 {
    const CHANNELS: usize = 1;
    fn write(&self, dst: &mut [f32]) {
        dst[0] = *self;
    }
}
impl Pixel for f64 {
    const CHANNELS: usize = 1;
    fn write(&self, dst: &mut [f32]) {
        dst[0] = *self as f32;
    }
}
impl<const N: usize> Pixel for [f32; N] {
    const CHANNELS: usize = N;
    fn write(&self, dst: &mut [f32]) {
        dst.copy_from_slice(self);
    }
}
impl<const N: usize> Pixel for Vector<N> {
    const CHANNELS: usize = N;
    fn write(&self, dst: &mut [f32]) {
        for (d, v) in dst.iter_mut().zip(self.0.iter()) {
            *d = *v as f32;
        }
    }
}

/// Color as Red, Green, Blue, and Alpha, components in [0,1]
///
/// Interpolable, so it may be used as the data passed from the vertex
///   to the fragment shader, and a [Pixel], so a fragment shader may
///   return it directly
///
/// [Pixel]: trait.Pixel.html
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Rgba {
    /// White Color (1,1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0,1)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
    /// Create new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
}

impl Pixel for Rgba {
    const CHANNELS: usize = 4;
    fn write(&self, dst: &mut [f32]) {
        dst[0] = self.r as f32;
        dst[1] = self.g as f32;
        dst[2] = self.b as f32;
        dst[3] = self.a as f32;
    }
}

impl AddAssign for Rgba {
    fn add_assign(&mut self, c: Rgba) {
        self.r += c.r;
        self.g += c.g;
        self.b += c.b;
        self.a += c.a;
    }
}
impl Sub for Rgba {
    type Output = Rgba;
    fn sub(self, c: Rgba) -> Rgba {
        Rgba::new(self.r - c.r, self.g - c.g, self.b - c.b, self.a - c.a)
    }
}
impl Mul<f64> for Rgba {
    type Output = Rgba;
    fn mul(self, s: f64) -> Rgba {
        Rgba::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}
impl Div<f64> for Rgba {
    type Output = Rgba;
    fn div(self, s: f64) -> Rgba {
        Rgba::new(self.r / s, self.g / s, self.b / s, self.a / s)
    }
}
