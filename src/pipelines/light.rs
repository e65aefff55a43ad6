use wgpu::util::DeviceExt;

use crate::data_structures::colour::Colour;

/// The scene light together with the GPU buffer and bind group it lives in.
#[derive(Debug)]
pub struct LightResources {
    pub uniform: LightUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LightResources {
    pub fn new(uniform: LightUniform, device: &wgpu::Device) -> Self {
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }
}

/// A single directional light plus the render states that affect lighting.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Direction the light travels in; w is unused.
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    specular_enabled: u32,
    normalize_normals: u32,
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    _padding: [u32; 2],
}

impl LightUniform {
    pub fn specular_enabled(&self) -> bool {
        self.specular_enabled != 0
    }

    pub fn set_specular_enabled(&mut self, enabled: bool) {
        self.specular_enabled = enabled as u32;
    }

    pub fn normalize_normals(&self) -> bool {
        self.normalize_normals != 0
    }

    pub fn set_normalize_normals(&mut self, enabled: bool) {
        self.normalize_normals = enabled as u32;
    }
}

/// A directional light of colour `colour`: ambient at 40%, full diffuse and
/// specular at 60%. Specular highlights and normal renormalisation start off.
pub fn directional_light(direction: cgmath::Vector3<f32>, colour: Colour) -> LightUniform {
    let rgb = |scale: f32| [colour.r * scale, colour.g * scale, colour.b * scale, colour.a];
    LightUniform {
        direction: [direction.x, direction.y, direction.z, 0.0],
        ambient: rgb(0.4),
        diffuse: rgb(1.0),
        specular: rgb(0.6),
        specular_enabled: 0,
        normalize_normals: 0,
        _padding: [0; 2],
    }
}

pub fn mk_buffer(device: &wgpu::Device, light_uniform: LightUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Uniform Buffer"),
        contents: bytemuck::cast_slice(&[light_uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
        label: Some("light_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: Some("light_bind_group"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_directional_light_splits_into_its_terms() {
        let light = directional_light(cgmath::Vector3::new(1.0, 0.0, 0.25), Colour::WHITE);
        assert_eq!(light.direction, [1.0, 0.0, 0.25, 0.0]);
        assert_eq!(light.ambient, [0.4, 0.4, 0.4, 1.0]);
        assert_eq!(light.diffuse, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(light.specular, [0.6, 0.6, 0.6, 1.0]);
        assert!(!light.specular_enabled());
        assert!(!light.normalize_normals());
    }

    #[test]
    fn uniform_size_is_a_multiple_of_sixteen() {
        assert_eq!(std::mem::size_of::<LightUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<LightUniform>(), 80);
    }

    #[test]
    fn render_state_flags_toggle() {
        let mut light = directional_light(cgmath::Vector3::unit_x(), Colour::WHITE);
        light.set_specular_enabled(true);
        light.set_normalize_normals(true);
        assert!(light.specular_enabled());
        assert!(light.normalize_normals());
    }
}
