//! Reading and Writing of image files
//!
//! Buffers are converted to 8 bit images, values are clamped to [0,1].
//!   The file format follows the file extension, see the
//!   [image](https://docs.rs/image) crate.

use std::path::Path;

use log::debug;

use crate::buffer::RenderingBuffer;
use crate::color::cu8;
use crate::error::Error;
use crate::error::Result;

impl RenderingBuffer {
    /// Convert to 8 bit components
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.iter().map(|&v| cu8(f64::from(v))).collect()
    }
    /// Write the buffer to an image file
    ///
    /// 1, 2, 3 and 4 channels are written as Gray, Gray+Alpha, RGB and RGBA
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let color = match self.channels {
            1 => image::ExtendedColorType::L8,
            2 => image::ExtendedColorType::La8,
            3 => image::ExtendedColorType::Rgb8,
            4 => image::ExtendedColorType::Rgba8,
            n => return Err(Error::UnsupportedChannels(n)),
        };
        debug!("WRITE IMAGE: {} {}x{} {:?}", filename.as_ref().display(), self.width, self.height, color);
        image::save_buffer(filename, &self.to_bytes(),
                           self.width as u32, self.height as u32, color)?;
        Ok(())
    }
}

/// Read an image file as RGBA, 8 bits per component
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Compare two image files pixel by pixel
///
/// Differences are logged
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("IMG DIFF: size {}x{} != {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("IMG DIFF: {} [{},{},{}]: {} {}", i, (i/4)%w1, (i/4)/w1, i%4, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
