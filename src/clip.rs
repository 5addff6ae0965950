//! Clamping of continuous coordinates to rows and columns
//!
//! Every row and column has an anchor point, the location inside the pixel
//!   where interpolated values are sampled. A [Clamping] method maps a
//!   continuous coordinate to the first row or column whose anchor follows
//!   it, and reports how far that anchor is away. Each method decides
//!   whether an anchor exactly on the coordinate follows it. The rasterizer
//!   uses the distance to shift interpolated data onto the anchor.
//!
//! Index and distance must agree, `index(v)` anchor == `v + distance(v)`,
//!   and both must be monotonic in `v`.
//!
//! [Clamping]: trait.Clamping.html

/// Clamping Method
pub trait Clamping {
    /// Row of the first scanline anchor following `y`
    fn scanline_for(&self, y: f64) -> i64;
    /// Column of the first column anchor following `x`
    fn column_for(&self, x: f64) -> i64;
    /// Distance from `y` to the anchor of `scanline_for(y)`
    fn distance_to_scanline_anchor(&self, y: f64) -> f64;
    /// Distance from `x` to the anchor of `column_for(x)`
    fn distance_to_column_anchor(&self, x: f64) -> f64;
}

/// Sample at the center of each pixel
///
/// Row (column) `i` is sampled at `i + 0.5`. A coordinate exactly on an
///   anchor belongs to the next row (column), so a pixel is covered when
///   its center lies in `(start, end]`.
///
///     use trirast::{Clamping,CenterPixelClamping};
///
///     let c = CenterPixelClamping;
///     assert_eq!(c.column_for(0.0), 0);
///     assert_eq!(c.distance_to_column_anchor(0.0), 0.5);
///     assert_eq!(c.column_for(0.5), 1);
///     assert_eq!(c.distance_to_column_anchor(0.5), 1.0);
///     assert_eq!(c.column_for(-1.2), -1);
///
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct CenterPixelClamping;

impl CenterPixelClamping {
    // Rounds halves up; f64::round rounds away from 0.
    fn round(v: f64) -> i64 {
        (v + 0.5).floor() as i64
    }
    fn distance_to_anchor(v: f64) -> f64 {
        (v + 0.5).floor() + 0.5 - v
    }
}

impl Clamping for CenterPixelClamping {
    fn scanline_for(&self, y: f64) -> i64 {
        Self::round(y)
    }
    fn column_for(&self, x: f64) -> i64 {
        Self::round(x)
    }
    fn distance_to_scanline_anchor(&self, y: f64) -> f64 {
        Self::distance_to_anchor(y)
    }
    fn distance_to_column_anchor(&self, x: f64) -> f64 {
        Self::distance_to_anchor(x)
    }
}

/// Sample at the top-left corner of each pixel
///
/// Row (column) `i` is sampled at `i`. A pixel is covered when its
///   corner lies in `[start, end)`.
///
///     use trirast::{Clamping,CornerPixelClamping};
///
///     let c = CornerPixelClamping;
///     assert_eq!(c.column_for(2.0), 2);
///     assert_eq!(c.distance_to_column_anchor(2.0), 0.0);
///     assert_eq!(c.column_for(2.25), 3);
///     assert_eq!(c.distance_to_column_anchor(2.25), 0.75);
///
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct CornerPixelClamping;

impl Clamping for CornerPixelClamping {
    fn scanline_for(&self, y: f64) -> i64 {
        y.ceil() as i64
    }
    fn column_for(&self, x: f64) -> i64 {
        x.ceil() as i64
    }
    fn distance_to_scanline_anchor(&self, y: f64) -> f64 {
        y.ceil() - y
    }
    fn distance_to_column_anchor(&self, x: f64) -> f64 {
        x.ceil() - x
    }
}
