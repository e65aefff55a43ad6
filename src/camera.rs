//! Orbit camera, keyboard controller and the camera uniform.
//!
//! The camera circles the Y axis at a fixed radius looking at the origin. Left/Right
//! change the orbit angle and Up/Down the height. All matrices are left-handed with
//! a `[0, 1]` depth range, which is the clip space wgpu expects, so no correction
//! matrix is needed between projection and rasterizer.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Vector3};
use instant::Duration;
use wgpu::util::DeviceExt;
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::config::DemoConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub angle: Rad<f32>,
    pub height: f32,
    pub radius: f32,
}

impl OrbitCamera {
    pub fn new<A: Into<Rad<f32>>>(angle: A, height: f32, radius: f32) -> Self {
        Self {
            angle: angle.into(),
            height,
            radius,
        }
    }

    pub fn eye(&self) -> Point3<f32> {
        let (sin, cos) = self.angle.0.sin_cos();
        Point3::new(cos * self.radius, self.height, sin * self.radius)
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        look_at_lh(self.eye(), Point3::origin(), Vector3::unit_y())
    }
}

/// Left-handed view matrix looking from `eye` towards `target`.
///
/// View space has +X to the right, +Y up and +Z pointing from the eye to the target.
pub fn look_at_lh(eye: Point3<f32>, target: Point3<f32>, up: Vector3<f32>) -> Matrix4<f32> {
    let z_axis = (target - eye).normalize();
    let x_axis = up.cross(z_axis).normalize();
    let y_axis = z_axis.cross(x_axis);
    let eye = eye.to_vec();

    #[rustfmt::skip]
    let view = Matrix4::new(
        x_axis.x, y_axis.x, z_axis.x, 0.0,
        x_axis.y, y_axis.y, z_axis.y, 0.0,
        x_axis.z, y_axis.z, z_axis.z, 0.0,
        -x_axis.dot(eye), -y_axis.dot(eye), -z_axis.dot(eye), 1.0,
    );
    view
}

/// Left-handed perspective projection mapping `znear..zfar` onto depth `0..1`.
pub fn perspective_fov_lh(fovy: Rad<f32>, aspect: f32, znear: f32, zfar: f32) -> Matrix4<f32> {
    let y_scale = 1.0 / (fovy.0 / 2.0).tan();
    let x_scale = y_scale / aspect;
    let q = zfar / (zfar - znear);

    #[rustfmt::skip]
    let projection = Matrix4::new(
        x_scale, 0.0, 0.0, 0.0,
        0.0, y_scale, 0.0, 0.0,
        0.0, 0.0, q, 1.0,
        0.0, 0.0, -znear * q, 0.0,
    );
    projection
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        perspective_fov_lh(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Tracks which arrow keys are held and moves an [`OrbitCamera`] accordingly.
#[derive(Debug, Clone)]
pub struct CameraController {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    /// Radians per second.
    pub orbit_speed: f32,
    /// Units per second.
    pub climb_speed: f32,
}

impl CameraController {
    pub fn new(orbit_speed: f32, climb_speed: f32) -> Self {
        Self {
            left: false,
            right: false,
            up: false,
            down: false,
            orbit_speed,
            climb_speed,
        }
    }

    /// Returns true if the key is one of the camera keys.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        match key {
            KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::ArrowRight => self.right = pressed,
            KeyCode::ArrowUp => self.up = pressed,
            KeyCode::ArrowDown => self.down = pressed,
            _ => return false,
        }
        true
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => self.process_keyboard(*key, *state),
            // keys released while unfocused never report their release
            WindowEvent::Focused(false) => {
                self.release_all();
                false
            }
            _ => false,
        }
    }

    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
        self.up = false;
        self.down = false;
    }

    pub fn update(&self, camera: &mut OrbitCamera, dt: Duration) {
        let dt = dt.as_secs_f32();
        if self.left {
            camera.angle.0 -= self.orbit_speed * dt;
        }
        if self.right {
            camera.angle.0 += self.orbit_speed * dt;
        }
        if self.up {
            camera.height += self.climb_speed * dt;
        }
        if self.down {
            camera.height -= self.climb_speed * dt;
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
    // w is unused, vec3 would need the same padding
    eye: [f32; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_proj: Matrix4::identity().into(),
            eye: [0.0; 4],
        }
    }

    pub fn update_view_proj(&mut self, camera: &OrbitCamera, projection: &Projection) {
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
        self.eye = camera.eye().to_homogeneous().into();
    }

    pub fn view_proj(&self) -> Matrix4<f32> {
        self.view_proj.into()
    }

    pub fn eye(&self) -> [f32; 4] {
        self.eye
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera state plus the GPU buffer and bind group it is uploaded to.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: OrbitCamera,
    pub controller: CameraController,
    pub projection: Projection,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, size: [u32; 2], config: &DemoConfig) -> Self {
        let camera = OrbitCamera::new(config.camera_angle, config.camera_height, config.camera_radius);
        let projection = Projection::new(size[0], size[1], config.fovy, config.znear, config.zfar);
        let controller = CameraController::new(config.orbit_speed, config.climb_speed);

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, &projection);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("camera_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            camera,
            controller,
            projection,
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Advance the camera by `dt` and upload the new view-projection matrix.
    pub fn update(&mut self, queue: &wgpu::Queue, dt: Duration) {
        self.controller.update(&mut self.camera, dt);
        self.uniform.update_view_proj(&self.camera, &self.projection);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn look_at_puts_the_target_on_the_positive_z_axis() {
        let view = look_at_lh(Point3::new(0.0, 5.0, -7.0), Point3::origin(), Vector3::unit_y());
        let target = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let distance = (25.0f32 + 49.0).sqrt();
        assert!(approx(target.x, 0.0));
        assert!(approx(target.y, 0.0));
        assert!(approx(target.z, distance));
    }

    #[test]
    fn look_at_is_left_handed() {
        let view = look_at_lh(Point3::new(0.0, 0.0, -7.0), Point3::origin(), Vector3::unit_y());
        let right = view * Vector4::new(1.0, 0.0, 0.0, 1.0);
        let up = view * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert!(approx(right.x, 1.0));
        assert!(approx(up.y, 1.0));
        assert!(approx(right.z, 7.0));
    }

    #[test]
    fn projection_maps_near_and_far_planes_to_zero_and_one() {
        let proj = perspective_fov_lh(Rad(std::f32::consts::FRAC_PI_4), 4.0 / 3.0, 1.0, 1000.0);
        let near = proj * Vector4::new(0.0, 0.0, 1.0, 1.0);
        let far = proj * Vector4::new(0.0, 0.0, 1000.0, 1.0);
        assert!(approx(near.z / near.w, 0.0));
        assert!(approx(far.z / far.w, 1.0));
    }

    #[test]
    fn projection_applies_aspect_to_x_only() {
        let proj = perspective_fov_lh(Rad(std::f32::consts::FRAC_PI_2), 2.0, 1.0, 10.0);
        // fovy of 90 degrees gives a y scale of one
        let p = proj * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert!(approx(p.x / p.w, 0.5));
        assert!(approx(p.y / p.w, 1.0));
    }

    #[test]
    fn projection_survives_a_zero_height() {
        let projection = Projection::new(800, 0, Rad(1.0), 1.0, 10.0);
        assert!(projection.aspect().is_finite());
    }

    #[test]
    fn camera_uniform_tracks_the_eye() {
        let camera = OrbitCamera::new(Rad(0.0), 2.0, 7.0);
        let projection = Projection::new(800, 600, Rad(1.0), 1.0, 100.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, &projection);
        assert_eq!(uniform.eye(), [7.0, 2.0, 0.0, 1.0]);
    }
}
