//! Demo configuration.
//!
//! The demo has no config files; [`DemoConfig::default`] carries the constants the
//! window, camera and renderer start from. Embedders (and the GPU tests) can tweak
//! individual fields before handing the config to [`crate::flow::run`].

use cgmath::Rad;

use crate::data_structures::colour::Colour;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Window title.
    pub title: String,
    /// Client area width in physical pixels. The window is not resizable.
    pub width: u32,
    /// Client area height in physical pixels.
    pub height: u32,
    /// Colour the back buffer is cleared to every frame.
    pub clear_colour: Colour,
    /// Start angle of the orbit camera around the Y axis.
    pub camera_angle: Rad<f32>,
    pub camera_height: f32,
    /// Distance of the camera from the Y axis.
    pub camera_radius: f32,
    /// Radians per second while Left/Right is held.
    pub orbit_speed: f32,
    /// Units per second while Up/Down is held.
    pub climb_speed: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub present_mode: wgpu::PresentMode,
    /// Render into an sRGB swapchain when the surface offers one.
    pub prefer_srgb: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "orbit-demo".to_string(),
            width: 800,
            height: 600,
            clear_colour: Colour::from_argb(0xffff_ffff),
            camera_angle: Rad(3.0 * std::f32::consts::PI / 2.0),
            camera_height: 5.0,
            camera_radius: 7.0,
            orbit_speed: 0.5,
            climb_speed: 5.0,
            fovy: Rad(std::f32::consts::FRAC_PI_4),
            znear: 1.0,
            zfar: 1000.0,
            present_mode: wgpu::PresentMode::Fifo,
            // the scene's colours were authored for a gamma-space back buffer
            prefer_srgb: false,
        }
    }
}

impl DemoConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
