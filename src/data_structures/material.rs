//! Surface materials for the lit pipeline.
//!
//! A [`Material`] holds the classic fixed-function lighting coefficients. They are
//! multiplied channel-wise with the matching light terms in `basic.wgsl`.

use crate::data_structures::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Colour,
    pub diffuse: Colour,
    pub specular: Colour,
    pub emissive: Colour,
    /// Sharpness of the specular highlight.
    pub power: f32,
}

impl Material {
    pub const WHITE: Material = Material::new(
        Colour::WHITE,
        Colour::WHITE,
        Colour::WHITE,
        Colour::BLACK,
        2.0,
    );
    pub const RED: Material =
        Material::new(Colour::RED, Colour::RED, Colour::RED, Colour::BLACK, 2.0);
    pub const GREEN: Material = Material::new(
        Colour::GREEN,
        Colour::GREEN,
        Colour::GREEN,
        Colour::BLACK,
        2.0,
    );
    pub const BLUE: Material =
        Material::new(Colour::BLUE, Colour::BLUE, Colour::BLUE, Colour::BLACK, 2.0);
    pub const YELLOW: Material = Material::new(
        Colour::YELLOW,
        Colour::YELLOW,
        Colour::YELLOW,
        Colour::BLACK,
        2.0,
    );

    pub const fn new(
        ambient: Colour,
        diffuse: Colour,
        specular: Colour,
        emissive: Colour,
        power: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            emissive,
            power,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::WHITE
    }
}
