//! Writing rendered buffers to image files
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::pixel::read_pixel;

/// Decode a buffer through its pixel format into packed RGB bytes
pub fn to_rgb_bytes(buf: &PixelBuffer) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(buf.width() * buf.height() * 3);
    for y in 0..buf.height() as i32 {
        for x in 0..buf.width() as i32 {
            let c = buf.format().decode(read_pixel(buf, x, y));
            rgb.push(c.r);
            rgb.push(c.g);
            rgb.push(c.b);
        }
    }
    rgb
}

/// Save a buffer to an image file; the format follows the file extension
pub fn write_file<P: AsRef<Path>>(buf: &PixelBuffer, filename: P) -> Result<(), std::io::Error> {
    let rgb = to_rgb_bytes(buf);
    image::save_buffer(
        filename,
        &rgb,
        buf.width() as u32,
        buf.height() as u32,
        image::RGB(8),
    )
}
