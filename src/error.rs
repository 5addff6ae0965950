//! Errors

use thiserror::Error;

/// Errors reported at the edges of the rasterizer
///
/// Triangles and rasterlines that cannot be drawn are never errors, they
/// are dropped and counted in the [Statistics](../stats/trait.Statistics.html).
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot create a buffer of {width}x{height} pixels with {channels} channels")]
    EmptyBuffer { width: usize, height: usize, channels: usize },
    #[error("buffer of {width}x{height} pixels with {channels} channels does not fit in memory")]
    BufferTooLarge { width: usize, height: usize, channels: usize },
    #[error("buffer of {width}x{height} pixels with {channels} channels needs {expected} values, got {actual}")]
    BufferSize {
        width: usize,
        height: usize,
        channels: usize,
        expected: usize,
        actual: usize,
    },
    #[error("rasterline capacity must be at least 1")]
    ZeroCapacity,
    #[error("fragment shader writes {shader} channels, buffer has {buffer}")]
    ChannelMismatch { shader: usize, buffer: usize },
    #[error("vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot write an image with {0} channels")]
    UnsupportedChannels(usize),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
