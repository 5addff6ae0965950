//! Transformations
//!
//! Vertex shaders commonly map normalized coordinates (uv) into the
//!   destination buffer; a Transform holds that mapping.

use std::ops::Mul;

use crate::math::Point;

/// Transformation
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates a new identity Transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Maps [0,1] x [0,1] onto a buffer of `width` x `height` pixels
    ///
    ///     use trirast::{Point,Transform};
    ///
    ///     let t = Transform::uv_to_pixels(200, 100);
    ///     assert_eq!(t.transform(Point::new(0.5, 1.0)), Point::new(100.0, 100.0));
    ///
    pub fn uv_to_pixels(width: usize, height: usize) -> Self {
        let mut t = Self::new();
        t.scale(width as f64, height as f64);
        t
    }
    /// Add a translation to the transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }
    /// Add a scaling to the transform
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.sx  *= sx;
        self.shx *= sx;
        self.tx  *= sx;
        self.sy  *= sy;
        self.shy *= sy;
        self.ty  *= sy;
    }
    /// Add a rotation to the transform
    ///
    /// angle is in radians
    pub fn rotate(&mut self, angle: f64) {
        let ca = angle.cos();
        let sa = angle.sin();
        let t0   = self.sx  * ca - self.shy * sa;
        let t2   = self.shx * ca - self.sy  * sa;
        let t4   = self.tx  * ca - self.ty  * sa;
        self.shy = self.sx  * sa + self.shy * ca;
        self.sy  = self.shx * sa + self.sy  * ca;
        self.ty  = self.tx  * sa + self.ty  * ca;
        self.sx  = t0;
        self.shx = t2;
        self.tx  = t4;
    }
    /// Perform the transform
    pub fn transform(&self, p: Point) -> Point {
        Point::new(p.x * self.sx  + p.y * self.shx + self.tx,
                   p.x * self.shy + p.y * self.sy  + self.ty)
    }
    /// Apply `self` first, then `m`
    pub fn mul_transform(&self, m: &Transform) -> Self {
        let t0  = self.sx  * m.sx + self.shy * m.shx;
        let t2  = self.shx * m.sx + self.sy  * m.shx;
        let t4  = self.tx  * m.sx + self.ty  * m.shx + m.tx;
        let shy = self.sx  * m.shy + self.shy * m.sy;
        let sy  = self.shx * m.shy + self.sy  * m.sy;
        let ty  = self.tx  * m.shy + self.ty  * m.sy + m.ty;
        Self { sx: t0, shx: t2, tx: t4, shy, sy, ty }
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.mul_transform(&rhs)
    }
}
