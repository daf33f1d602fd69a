//! Colors

/// Color as Red, Green, Blue, and Alpha
///
/// Decoded form of a packed pixel value; used while blending antialiased
/// pixels against the destination. Packed values at the drawing API stay
/// opaque `u32` bit patterns in the buffer's own format.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
    /// Gray color with all channels at `v`
    pub fn gray(v: u8) -> Self {
        Self::new(v, v, v, 255)
    }
}

/// Blend `fg` over `bg` by `brightness` in [0,1], per channel
pub fn blend(fg: Rgba8, bg: Rgba8, brightness: f32) -> Rgba8 {
    Rgba8::new(
        blend_channel(fg.r, bg.r, brightness),
        blend_channel(fg.g, bg.g, brightness),
        blend_channel(fg.b, bg.b, brightness),
        blend_channel(fg.a, bg.a, brightness),
    )
}

fn blend_channel(fg: u8, bg: u8, t: f32) -> u8 {
    (t * f32::from(fg) + (1.0 - t) * f32::from(bg)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let fg = Rgba8::new(200, 100, 50, 255);
        let bg = Rgba8::black();
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
    }

    #[test]
    fn blend_halfway() {
        let c = blend(Rgba8::white(), Rgba8::black(), 0.5);
        assert_eq!(c.r, 127);
        assert_eq!(c.g, 127);
        assert_eq!(c.b, 127);
    }
}
