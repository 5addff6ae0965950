//! Triangle Rasterizer
//!
//! Renders triangles onto a floating point image buffer following a
//!   (very limited) graphics pipeline. A vertex shader places the corners
//!   of a triangle in the buffer and attaches data to them, the data is
//!   interpolated across the triangle and a fragment shader turns it into
//!   the pixels stored in the buffer.
//!
//! # How does this work
//!
//! ```text
//!    ras = Rasterizer( RenderingBuffer, VertexShader, FragmentShader )
//!  Triangle
//!    draw_triangle(a, b, c)
//!      vertex()              -- each corner, coordinates in pixel space
//!      triangle_not_visible  -- all corners beyond one side: dropped
//!      rasterize_triangle()
//!        order_triangle_vertices -- top, middle, bottom
//!        add_rasterlines()   -- top .. middle, then middle .. bottom
//!          clamped_rasterline()  -- row cut back to the buffer width
//!          append()          -- 'FLUSH' when the capacity is reached
//!  Render to Image
//!    flush()                 -- also when the rasterizer is dropped
//!      render_rasterline()
//!        fragment()          -- each column of the row
//! ```
//!
//! # Example
//!
//! ```
//! use trirast::*;
//!
//! // Corners given as uv coordinates with a color each
//! struct UvShader { transform: Transform }
//! impl VertexShader for UvShader {
//!     type Input = (Point, Rgba);
//!     type Output = Rgba;
//!     fn vertex(&self, input: &(Point, Rgba)) -> VertexOut<Rgba> {
//!         VertexOut::new(self.transform.transform(input.0), input.1)
//!     }
//! }
//! struct ColorShader;
//! impl FragmentShader for ColorShader {
//!     type Input = Rgba;
//!     type Output = Rgba;
//!     fn fragment(&self, c: &Rgba) -> Rgba { *c }
//! }
//!
//! let mut buf = RenderingBuffer::new(64, 64, 4)?;
//! {
//!     let vs = UvShader { transform: Transform::uv_to_pixels(64, 64) };
//!     let mut ras = Rasterizer::new(&mut buf, vs, ColorShader)?;
//!     ras.draw_triangle(&(Point::new(0.0, 1.0), Rgba::new(1.0, 0.0, 0.0, 1.0)),
//!                       &(Point::new(1.0, 1.0), Rgba::new(0.0, 1.0, 0.0, 1.0)),
//!                       &(Point::new(1.0, 0.0), Rgba::new(0.0, 0.0, 1.0, 1.0)));
//!     ras.flush();
//! }
//! assert_eq!(buf[(63, 63)][3], 1.0);
//! assert_eq!(buf[(0, 0)][3], 0.0);
//! # Ok::<(), trirast::Error>(())
//! ```

pub mod math;
pub mod color;
pub mod shader;
pub mod buffer;
pub mod clip;
pub mod scan;
pub mod stats;
pub mod render;
pub mod raster;
pub mod transform;
pub mod image_file;
pub mod error;

pub use math::*;
pub use color::*;
pub use shader::*;
pub use buffer::*;
pub use clip::*;
pub use scan::*;
pub use stats::*;
pub use render::*;
pub use raster::*;
pub use transform::*;
pub use image_file::*;
pub use error::*;
