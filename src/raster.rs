//! Rasterizer
//!
//! Converts triangles into [Rasterlines](../scan/struct.Rasterlines.html)
//!   and renders them into a [RenderingBuffer](../buffer/struct.RenderingBuffer.html)

use log::{debug, trace};

use crate::buffer::RenderingBuffer;
use crate::clip::CenterPixelClamping;
use crate::clip::Clamping;
use crate::color::Pixel;
use crate::error::Error;
use crate::error::Result;
use crate::math::Interpolate;
use crate::math::Point;
use crate::render::render_rasterline;
use crate::scan::Rasterline;
use crate::scan::Rasterlines;
use crate::scan::DEFAULT_RASTERLINES_CAPACITY;
use crate::shader::FragmentShader;
use crate::shader::VertexOut;
use crate::shader::VertexShader;
use crate::stats::NullStats;
use crate::stats::Stats;
use crate::stats::Statistics;

/// Rasterizer settings
///
///     use trirast::{Config,CornerPixelClamping};
///
///     let config = Config::new()
///         .with_capacity(64)
///         .with_clamping(CornerPixelClamping);
///     assert_eq!(config.capacity, 64);
///
#[derive(Debug,Copy,Clone)]
pub struct Config<C> {
    /// Number of rasterlines collected before they are rendered
    pub capacity: usize,
    /// Mapping of coordinates to rows and columns
    pub clamping: C,
}

impl Config<CenterPixelClamping> {
    /// Default capacity, sampling at pixel centers
    pub fn new() -> Self {
        Self::default()
    }
}
impl<C: Default> Default for Config<C> {
    fn default() -> Self {
        Config { capacity: DEFAULT_RASTERLINES_CAPACITY, clamping: C::default() }
    }
}
impl<C> Config<C> {
    /// Set the rasterline capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
    /// Replace the clamping method
    pub fn with_clamping<D: Clamping>(self, clamping: D) -> Config<D> {
        Config { capacity: self.capacity, clamping }
    }
}

/// One side of a triangle being walked down row by row
#[derive(Debug,Copy,Clone)]
struct Edge<T> {
    origin: Point,
    target: Point,
    /// Values at the anchor of the current row
    value: VertexOut<T>,
    /// Change per row
    step: VertexOut<T>,
}

impl<T: Interpolate> Edge<T> {
    fn new(from: &VertexOut<T>, to: &VertexOut<T>) -> Self {
        Self { origin: from.coord, target: to.coord,
               value: *from, step: edge_step(from, to) }
    }
    fn advance(&mut self) {
        self.value += self.step;
    }
    fn advance_by(&mut self, rows: f64) {
        self.value += self.step * rows;
    }
    /// Horizontal distance between `p` and the edge, measured at `p.y`
    ///
    /// A horizontal edge covers its whole x range
    fn distance_to(&self, p: Point) -> f64 {
        let (a, b) = (self.origin, self.target);
        let dy = b.y - a.y;
        if dy == 0.0 {
            let (lo, hi) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
            if p.x < lo {
                lo - p.x
            } else if p.x > hi {
                p.x - hi
            } else {
                0.0
            }
        } else {
            let t = (p.y - a.y) / dy;
            (a.x + (b.x - a.x) * t - p.x).abs()
        }
    }
}

/// Change per row from `from` to `to`
///
/// Edges without height change by the full difference in a single row
fn edge_step<T: Interpolate>(from: &VertexOut<T>, to: &VertexOut<T>) -> VertexOut<T> {
    let num_rasterlines = to.coord.y - from.coord.y;
    if num_rasterlines == 0.0 {
        *to - *from
    } else {
        (*to - *from) / num_rasterlines
    }
}

/// Sort vertices top to bottom (increasing y)
///
/// If all vertices share the same y the input order is kept
fn order_triangle_vertices<T: Copy>(v: &[VertexOut<T>; 3]) -> [VertexOut<T>; 3] {
    let mut min = 0;
    let mut max = 0;
    for i in 1 .. 3 {
        if v[i].coord.y < v[min].coord.y {
            min = i;
        }
        if v[i].coord.y > v[max].coord.y {
            max = i;
        }
    }
    if min == max || v[min].coord.y == v[max].coord.y {
        return *v;
    }
    let mid = 3 - min - max;
    debug_assert!(v[min].coord.y <= v[mid].coord.y && v[mid].coord.y <= v[max].coord.y);
    [v[min], v[mid], v[max]]
}

/// Triangle Rasterizer
///
/// Draws triangles into a [RenderingBuffer] using a [VertexShader] to
///   place the corners and a [FragmentShader] to compute the pixels.
///   Data produced by the vertex shader is interpolated linearly across
///   the triangle.
///
/// Rows of the triangle are collected as [Rasterlines] and rendered in
///   batches, when the batch is full, on [flush], or when the rasterizer
///   is dropped. Read the buffer after one of those.
///
///     use trirast::*;
///
///     struct Pass;
///     impl VertexShader for Pass {
///         type Input = (f64, f64);
///         type Output = f64;
///         fn vertex(&self, p: &(f64, f64)) -> VertexOut<f64> {
///             VertexOut::new(Point::new(p.0, p.1), 1.0)
///         }
///     }
///     struct Fill;
///     impl FragmentShader for Fill {
///         type Input = f64;
///         type Output = f64;
///         fn fragment(&self, v: &f64) -> f64 { *v }
///     }
///
///     let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
///     {
///         let mut ras = Rasterizer::new(&mut buf, Pass, Fill).unwrap();
///         ras.draw_triangle(&(0.0, 0.0), &(4.0, 0.0), &(0.0, 4.0));
///     } // Dropping the rasterizer flushes pending rasterlines
///     assert_eq!(buf.pixel(3,0), &[1.0f32]);
///     assert_eq!(buf.pixel(4,0), &[0.0f32]);
///
/// [RenderingBuffer]: ../buffer/struct.RenderingBuffer.html
/// [VertexShader]: ../shader/trait.VertexShader.html
/// [FragmentShader]: ../shader/trait.FragmentShader.html
/// [Rasterlines]: ../scan/struct.Rasterlines.html
/// [flush]: #method.flush
pub struct Rasterizer<'a, VS, FS, C = CenterPixelClamping, S = NullStats>
    where VS: VertexShader,
          FS: FragmentShader<Input = VS::Output>,
          C: Clamping,
          S: Statistics
{
    vertex_shader: VS,
    fragment_shader: FS,
    rasterlines: Rasterlines<VS::Output>,
    buffer: &'a mut RenderingBuffer,
    clamping: C,
    stats: S,
}

impl<'a, VS, FS> Rasterizer<'a, VS, FS>
    where VS: VertexShader,
          FS: FragmentShader<Input = VS::Output>
{
    /// Create a Rasterizer with the default configuration
    pub fn new(buffer: &'a mut RenderingBuffer, vertex_shader: VS, fragment_shader: FS) -> Result<Self> {
        Self::with_config(buffer, vertex_shader, fragment_shader, Config::new())
    }
}

impl<'a, VS, FS> Rasterizer<'a, VS, FS, CenterPixelClamping, Stats>
    where VS: VertexShader,
          FS: FragmentShader<Input = VS::Output>
{
    /// Create a Rasterizer with the default configuration that counts
    ///   what it does, see [stats](#method.stats)
    pub fn with_stats(buffer: &'a mut RenderingBuffer, vertex_shader: VS, fragment_shader: FS) -> Result<Self> {
        Self::with_config(buffer, vertex_shader, fragment_shader, Config::new())
    }
}

impl<'a, VS, FS, C, S> Rasterizer<'a, VS, FS, C, S>
    where VS: VertexShader,
          FS: FragmentShader<Input = VS::Output>,
          C: Clamping,
          S: Statistics
{
    /// Create a Rasterizer
    ///
    /// Fails if the capacity is 0 or the fragment shader output does not
    ///   have the same number of channels as the buffer
    pub fn with_config(buffer: &'a mut RenderingBuffer,
                       vertex_shader: VS,
                       fragment_shader: FS,
                       config: Config<C>) -> Result<Self>
        where S: Default
    {
        if config.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let channels = <FS::Output as Pixel>::CHANNELS;
        if channels != buffer.channels {
            return Err(Error::ChannelMismatch { shader: channels, buffer: buffer.channels });
        }
        Ok(Self { vertex_shader, fragment_shader,
                  rasterlines: Rasterlines::new(config.capacity),
                  buffer,
                  clamping: config.clamping,
                  stats: S::default(),
        })
    }
    pub fn vertex_shader(&self) -> &VS {
        &self.vertex_shader
    }
    /// Vertex shader, e.g. to change its transform between triangles
    pub fn vertex_shader_mut(&mut self) -> &mut VS {
        &mut self.vertex_shader
    }
    pub fn fragment_shader(&self) -> &FS {
        &self.fragment_shader
    }
    pub fn fragment_shader_mut(&mut self) -> &mut FS {
        &mut self.fragment_shader
    }
    pub fn clamping(&self) -> &C {
        &self.clamping
    }
    /// Collected statistics
    pub fn stats(&self) -> &S {
        &self.stats
    }
    /// Destination buffer
    ///
    /// Pending rasterlines are not yet visible
    pub fn buffer(&self) -> &RenderingBuffer {
        &*self.buffer
    }
    /// Number of rasterlines waiting to be rendered
    pub fn pending(&self) -> usize {
        self.rasterlines.len()
    }
    /// Number of rasterlines collected before rendering
    pub fn capacity(&self) -> usize {
        self.rasterlines.capacity()
    }

    /// Draw a triangle
    ///
    /// Each corner is passed through the vertex shader. Triangles with all
    ///   corners on the outside of a single side of the buffer are dropped
    ///   immediately. This is a cheap test, other triangles outside of the
    ///   buffer produce no rasterlines later on.
    pub fn draw_triangle(&mut self, p1: &VS::Input, p2: &VS::Input, p3: &VS::Input) {
        self.stats.increase_triangles();

        let vertex_out = [self.vertex_shader.vertex(p1),
                          self.vertex_shader.vertex(p2),
                          self.vertex_shader.vertex(p3)];

        if self.triangle_not_visible(&vertex_out) {
            debug!("DISCARD TRIANGLE: {:?} {:?} {:?}",
                   vertex_out[0].coord, vertex_out[1].coord, vertex_out[2].coord);
            self.stats.increase_discarded_triangles();
            return;
        }
        self.rasterize_triangle(&vertex_out);
    }

    /// Draw a list of triangles
    pub fn draw_triangles(&mut self, triangles: &[[VS::Input; 3]]) {
        for [p1, p2, p3] in triangles.iter() {
            self.draw_triangle(p1, p2, p3);
        }
    }

    /// Draw triangles referencing shared vertices
    ///
    /// Indices are checked before anything is drawn
    pub fn draw_indexed(&mut self, vertices: &[VS::Input], indices: &[[usize; 3]]) -> Result<()> {
        let len = vertices.len();
        if let Some(&index) = indices.iter().flatten().find(|&&i| i >= len) {
            return Err(Error::IndexOutOfRange { index, len });
        }
        for &[a, b, c] in indices.iter() {
            self.draw_triangle(&vertices[a], &vertices[b], &vertices[c]);
        }
        Ok(())
    }

    /// Add a rasterline, rendering all pending rasterlines if the
    ///   capacity is reached
    pub fn append(&mut self, rasterline: Rasterline<VS::Output>) {
        debug_assert!(rasterline.y < self.buffer.height);
        debug_assert!(rasterline.start_x < rasterline.end_x && rasterline.end_x <= self.buffer.width);
        self.rasterlines.append(rasterline);
        if self.rasterlines.is_full() {
            self.flush();
        }
    }

    /// Render all pending rasterlines into the buffer
    pub fn flush(&mut self) {
        if self.rasterlines.is_empty() {
            return;
        }
        debug!("FLUSH: {} rasterlines", self.rasterlines.len());
        self.stats.increase_flushes();
        for line in self.rasterlines.iter() {
            render_rasterline(&self.fragment_shader, self.buffer, line);
        }
        self.rasterlines.clear();
    }

    fn triangle_not_visible(&self, v: &[VertexOut<VS::Output>; 3]) -> bool {
        let w = self.buffer.width as f64;
        let h = self.buffer.height as f64;
        v.iter().all(|p| p.coord.x < 0.0) ||
            v.iter().all(|p| p.coord.y < 0.0) ||
            v.iter().all(|p| p.coord.x >= w) ||
            v.iter().all(|p| p.coord.y >= h)
    }

    fn rasterize_triangle(&mut self, vertex_out: &[VertexOut<VS::Output>; 3]) {
        trace!("RASTERIZE TRIANGLE: 1: ({:.4},{:.4}) 2: ({:.4},{:.4}) 3: ({:.4},{:.4})",
               vertex_out[0].coord.x, vertex_out[0].coord.y,
               vertex_out[1].coord.x, vertex_out[1].coord.y,
               vertex_out[2].coord.x, vertex_out[2].coord.y);
        let [top, mid, bottom] = order_triangle_vertices(vertex_out);

        let min_v = self.clamping.scanline_for(top.coord.y);
        let mid_v = self.clamping.scanline_for(mid.coord.y);
        let max_v = self.clamping.scanline_for(bottom.coord.y);

        // Left and right branch
        let (mut left, mut right) = if mid.coord.x < bottom.coord.x {
            (Edge::new(&top, &mid), Edge::new(&top, &bottom))
        } else {
            (Edge::new(&top, &bottom), Edge::new(&top, &mid))
        };
        // Winding order follows the steepness of the edges
        if right.step.coord.x < left.step.coord.x {
            std::mem::swap(&mut left, &mut right);
        }

        // Move both branches from the vertex onto the anchor of the first row
        let anchor = self.clamping.distance_to_scanline_anchor(top.coord.y);
        left.advance_by(anchor);
        right.advance_by(anchor);

        self.add_rasterlines(min_v, mid_v, &mut left, &mut right);

        // The branch ending in the middle vertex continues towards the bottom
        let mut lower = Edge::new(&mid, &bottom);
        lower.advance_by(self.clamping.distance_to_scanline_anchor(mid.coord.y));
        if left.distance_to(mid.coord) < right.distance_to(mid.coord) {
            left = lower;
        } else {
            right = lower;
        }
        // Both branches meet in the bottom vertex, the left one arrives
        //   from further left. Only a flat top can leave them crossed.
        if left.step.coord.x < right.step.coord.x {
            std::mem::swap(&mut left, &mut right);
        }

        self.add_rasterlines(mid_v, max_v, &mut left, &mut right);
    }

    /// Add rasterlines for rows `from .. to`
    ///
    /// Both branches are left on the anchor of row `to`
    fn add_rasterlines(&mut self, from: i64, to: i64,
                       left: &mut Edge<VS::Output>,
                       right: &mut Edge<VS::Output>) {
        if to <= from {
            return;
        }
        let height = self.buffer.height as i64;
        let first = from.max(0).min(to);
        let last = to.min(height).max(first);

        // Rows above the buffer
        if first > from {
            let anchor = self.scanline_anchor(first);
            left.advance_by(anchor - left.value.coord.y);
            right.advance_by(anchor - right.value.coord.y);
        }
        for y in first .. last {
            let line = self.clamped_rasterline(y as usize,
                                               left.value.coord.x, right.value.coord.x,
                                               left.value.data, right.value.data);
            if let Some(line) = line {
                self.append(line);
            }
            left.advance();
            right.advance();
        }
        // Rows below the buffer
        if to > last {
            let anchor = self.scanline_anchor(to);
            left.advance_by(anchor - left.value.coord.y);
            right.advance_by(anchor - right.value.coord.y);
        }
    }

    /// Location of the anchor of row `row`
    ///
    /// Row indices saturate for huge coordinates, edges are moved by the
    ///   distance between anchors rather than by a row count
    fn scanline_anchor(&self, row: i64) -> f64 {
        let y = row as f64;
        y + self.clamping.distance_to_scanline_anchor(y)
    }

    /// Create the rasterline from `start_x` to `end_x` on row `y`, cut
    ///   back to the width of the buffer
    fn clamped_rasterline(&mut self, y: usize,
                          start_x: f64, end_x: f64,
                          start_data: VS::Output, end_data: VS::Output)
                          -> Option<Rasterline<VS::Output>> {
        debug_assert!(y < self.buffer.height);
        self.stats.increase_rasterlines();

        let width = self.buffer.width as i64;
        // Negated to also drop NaN
        if !(start_x < end_x) || end_x < 0.0 || start_x >= width as f64 {
            self.stats.increase_discarded_rasterlines();
            return None;
        }

        let add_x = (end_data - start_data) / (end_x - start_x);
        let mut is_clamped = false;

        // Clamp the start to the first visible column anchor
        let mut start_xi = self.clamping.column_for(start_x);
        let mut delta_to_anchor = self.clamping.distance_to_column_anchor(start_x);
        if start_xi < 0 {
            delta_to_anchor = self.clamping.distance_to_column_anchor(0.0) - start_x;
            start_xi = 0;
            is_clamped = true;
        }

        let mut end_xi = self.clamping.column_for(end_x);
        if end_xi > width {
            end_xi = width;
            is_clamped = true;
        }

        // Run between two anchors
        if start_xi >= end_xi {
            self.stats.increase_discarded_rasterlines();
            return None;
        }
        if is_clamped {
            self.stats.increase_clamped_rasterlines();
        }

        let mut data = start_data;
        data += add_x * delta_to_anchor;

        trace!("RASTERLINE: y({}) x({}-{})", y, start_xi, end_xi);
        Some(Rasterline::new(y, start_xi as usize, end_xi as usize, data, add_x))
    }
}

impl<'a, VS, FS, C, S> Drop for Rasterizer<'a, VS, FS, C, S>
    where VS: VertexShader,
          FS: FragmentShader<Input = VS::Output>,
          C: Clamping,
          S: Statistics
{
    fn drop(&mut self) {
        self.flush();
    }
}
