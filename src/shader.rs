//! Vertex and Fragment Shaders
//!
//! The rasterizer follows a (very limited) graphics pipeline. A
//!   [VertexShader] places each corner of a triangle in the destination
//!   buffer and attaches data to it, the rasterizer interpolates that data
//!   across the triangle and a [FragmentShader] turns the interpolated data
//!   into the pixel stored in the buffer.
//!
//! [VertexShader]: trait.VertexShader.html
//! [FragmentShader]: trait.FragmentShader.html

use std::ops::{AddAssign, Div, Mul, Sub};

use crate::color::Pixel;
use crate::math::Interpolate;
use crate::math::Point;

/// Output of the vertex stage, input of the fragment stage
///
/// `coord` is the location inside the destination buffer,
///   (0..width, 0..height), `data` is carried to the fragment shader.
///   All arithmetic applies to both members.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct VertexOut<T> {
    /// Location in pixel space
    pub coord: Point,
    /// Data interpolated between the corners
    pub data: T,
}

impl<T> VertexOut<T> {
    pub fn new(coord: Point, data: T) -> Self {
        Self { coord, data }
    }
}

impl<T: Interpolate> AddAssign for VertexOut<T> {
    fn add_assign(&mut self, other: Self) {
        self.coord += other.coord;
        self.data += other.data;
    }
}
impl<T: Interpolate> Sub for VertexOut<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.coord - other.coord, self.data - other.data)
    }
}
impl<T: Interpolate> Mul<f64> for VertexOut<T> {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self::new(self.coord * s, self.data * s)
    }
}
impl<T: Interpolate> Div<f64> for VertexOut<T> {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        Self::new(self.coord / s, self.data / s)
    }
}

/// Vertex Shader
///
/// Transfers a caller defined vertex into the destination buffer
///
///     use trirast::{Point,VertexOut,VertexShader};
///
///     struct Scale(f64);
///     impl VertexShader for Scale {
///         type Input = [f64; 2];
///         type Output = f64;
///         fn vertex(&self, uv: &[f64; 2]) -> VertexOut<f64> {
///             VertexOut::new(Point::new(uv[0] * self.0, uv[1] * self.0), 1.0)
///         }
///     }
///     let out = Scale(10.0).vertex(&[0.5, 0.25]);
///     assert_eq!(out.coord, Point::new(5.0, 2.5));
///
pub trait VertexShader {
    /// Data supplied per corner by the caller
    type Input;
    /// Data interpolated across the triangle
    type Output: Interpolate;
    /// Place a single corner in the destination buffer
    fn vertex(&self, input: &Self::Input) -> VertexOut<Self::Output>;
}

/// Fragment Shader
///
/// Computes the value of a single pixel from interpolated data
pub trait FragmentShader {
    /// Data produced by the vertex shader
    type Input: Interpolate;
    /// Pixel stored in the destination buffer
    type Output: Pixel;
    /// Compute one pixel
    fn fragment(&self, input: &Self::Input) -> Self::Output;
}
