//! Linear RGBA colours and the preset palette used for materials and lights.

/// A floating point RGBA colour, each channel nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Colour = Colour::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Colour = Colour::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Colour = Colour::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Colour = Colour::new(1.0, 1.0, 0.0, 1.0);
    pub const CYAN: Colour = Colour::new(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Colour = Colour::new(1.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Decode a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Colour> for wgpu::Color {
    fn from(c: Colour) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

impl From<Colour> for [f32; 4] {
    fn from(c: Colour) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_white_decodes_to_opaque_white() {
        assert_eq!(Colour::from_argb(0xffff_ffff), Colour::WHITE);
    }

    #[test]
    fn argb_channels_are_read_in_order() {
        let c = Colour::from_argb(0x80ff_0000);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn converts_into_a_wgpu_clear_colour() {
        let c: wgpu::Color = Colour::YELLOW.into();
        assert_eq!(c, wgpu::Color { r: 1.0, g: 1.0, b: 0.0, a: 1.0 });
    }
}
