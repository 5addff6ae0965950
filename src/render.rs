//! Renderer

use crate::buffer::RenderingBuffer;
use crate::color::Pixel;
use crate::scan::Rasterline;
use crate::shader::FragmentShader;

/// Render a single Rasterline into the buffer
///
/// The fragment shader is called once per column, starting with the
///   rasterline's `start_data` and adding `delta_step` after each column
///
///     use trirast::{FragmentShader,Rasterline,RenderingBuffer,render_rasterline};
///
///     struct Gray;
///     impl FragmentShader for Gray {
///         type Input = f64;
///         type Output = f64;
///         fn fragment(&self, v: &f64) -> f64 { *v }
///     }
///
///     let mut buf = RenderingBuffer::new(4, 1, 1).unwrap();
///     render_rasterline(&Gray, &mut buf, &Rasterline::new(0, 1, 3, 0.5, 0.25));
///     assert_eq!(buf.data, vec![0.0, 0.5, 0.75, 0.0]);
///
pub fn render_rasterline<FS>(shader: &FS,
                             buffer: &mut RenderingBuffer,
                             line: &Rasterline<FS::Input>)
    where FS: FragmentShader
{
    debug_assert_eq!(buffer.channels, <FS::Output as Pixel>::CHANNELS);
    debug_assert!(line.y < buffer.height && line.end_x <= buffer.width);

    let mut data = line.start_data;
    for x in line.start_x .. line.end_x {
        let pix = shader.fragment(&data);
        pix.write(&mut buffer[(x, line.y)]);
        data += line.delta_step;
    }
}
