//! Rasterlines
//!
//! A triangle is converted into horizontal runs of pixels, one per row,
//!   which are collected in [Rasterlines] before being rendered.
//!
//! [Rasterlines]: struct.Rasterlines.html

/// Default number of rasterlines collected before rendering
pub const DEFAULT_RASTERLINES_CAPACITY: usize = 4096;

/// Single horizontal run of pixels to render
///
/// Covers columns `start_x .. end_x` (end exclusive) of row `y`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Rasterline<T> {
    /// Row to render into
    pub y: usize,
    /// First column
    pub start_x: usize,
    /// Column after the last one
    pub end_x: usize,
    /// Fragment shader input at (`start_x`, `y`)
    pub start_data: T,
    /// Added to the input to get to the next column
    pub delta_step: T,
}

impl<T> Rasterline<T> {
    pub fn new(y: usize, start_x: usize, end_x: usize, start_data: T, delta_step: T) -> Self {
        debug_assert!(start_x < end_x, "empty rasterline {} .. {}", start_x, end_x);
        Self { y, start_x, end_x, start_data, delta_step }
    }
}

/// Bounded collection of rasterlines waiting to be rendered
///
/// Rendering happens in batches; the owner renders and clears the
///   collection once it [is_full](#method.is_full)
///
///     use trirast::{Rasterline,Rasterlines};
///
///     let mut lines = Rasterlines::new(2);
///     lines.append(Rasterline::new(0, 0, 4, 1.0, 0.0));
///     assert!(! lines.is_full());
///     lines.append(Rasterline::new(1, 0, 4, 1.0, 0.0));
///     assert!(lines.is_full());
///     lines.clear();
///     assert!(lines.is_empty());
///
#[derive(Debug,Clone)]
pub struct Rasterlines<T> {
    lines: Vec<Rasterline<T>>,
    capacity: usize,
}

impl<T> Rasterlines<T> {
    /// Create an empty collection holding up to `capacity` rasterlines
    pub fn new(capacity: usize) -> Self {
        Self { lines: Vec::with_capacity(capacity), capacity }
    }
    /// Add a rasterline
    pub fn append(&mut self, line: Rasterline<T>) {
        debug_assert!(self.lines.len() < self.capacity);
        self.lines.push(line);
    }
    /// Number of pending rasterlines
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    /// Maximum number of pending rasterlines
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    /// Capacity has been reached
    pub fn is_full(&self) -> bool {
        self.lines.len() >= self.capacity
    }
    /// Pending rasterlines in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Rasterline<T>> {
        self.lines.iter()
    }
    /// Remove all rasterlines, keeps the allocation
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
