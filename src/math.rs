//! Points, vectors and interpolation

use std::ops::{AddAssign, Div, Mul, Sub};

/// Values that can be linearly interpolated across a triangle
///
/// Anything that behaves as a vector space under `+=`, `-`, `* f64` and
/// `/ f64` can be carried from the vertex shader to the fragment shader.
/// The trait is implemented automatically, scalars (`f64`) and the small
/// vectors in this crate ([Point], [Vector], [Rgba]) all qualify.
///
///     use trirast::Interpolate;
///
///     fn midpoint<T: Interpolate>(a: T, b: T) -> T {
///         let mut m = a;
///         m += (b - a) / 2.0;
///         m
///     }
///     assert_eq!(midpoint(1.0, 3.0), 2.0);
///
/// [Point]: struct.Point.html
/// [Vector]: struct.Vector.html
/// [Rgba]: ../color/struct.Rgba.html
pub trait Interpolate:
    Copy
    + AddAssign
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
}

impl<T> Interpolate for T where
    T: Copy
        + AddAssign
        + Sub<Output = T>
        + Mul<f64, Output = T>
        + Div<f64, Output = T>
{
}

/// Linear interpolation between `a` and `b`, `t` in [0,1]
pub fn lerp<T: Interpolate>(a: T, b: T, t: f64) -> T {
    let mut v = a;
    v += (b - a) * t;
    v
}

/// Location in destination buffer pixel space
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    /// Column direction, 0 .. width
    pub x: f64,
    /// Row direction, 0 .. height
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}
impl Div<f64> for Point {
    type Output = Point;
    fn div(self, s: f64) -> Point {
        Point::new(self.x / s, self.y / s)
    }
}

/// Small fixed size vector
///
/// Useful for carrying several values (uv coordinates, normals, ...) from
///   the vertex shader to the fragment shader
///
///     use trirast::Vector;
///
///     let a = Vector([1.0, 2.0, 3.0]);
///     let b = Vector([3.0, 2.0, 1.0]);
///     assert_eq!((b - a) / 2.0, Vector([1.0, 0.0, -1.0]));
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Vector<const N: usize>(pub [f64; N]);

impl<const N: usize> Vector<N> {
    /// Vector with every component set to `v`
    pub fn splat(v: f64) -> Self {
        Vector([v; N])
    }
}
impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::splat(0.0)
    }
}
impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a += b;
        }
    }
}
impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    fn sub(mut self, other: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a -= b;
        }
        self
    }
}
impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;
    fn mul(mut self, s: f64) -> Self {
        self.0.iter_mut().for_each(|v| *v *= s);
        self
    }
}
impl<const N: usize> Div<f64> for Vector<N> {
    type Output = Self;
    fn div(mut self, s: f64) -> Self {
        self.0.iter_mut().for_each(|v| *v /= s);
        self
    }
}
