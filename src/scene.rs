//! The demo scene: two lit spheres either side of the origin and a wireframe
//! line list around it, seen through the orbit camera.
//!
//! [`Scene::setup`] creates every GPU resource once. They stay read-only while
//! the loop runs, except for the camera uniform which [`Scene::update`] rewrites
//! each frame, and are released when the scene is dropped.

use anyhow::Context as _;
use instant::Duration;
use wgpu::util::DeviceExt;
use winit::event::WindowEvent;

use crate::{
    camera::CameraResources,
    config::DemoConfig,
    data_structures::{
        colour::Colour,
        instance::Instance,
        material::Material,
        model::{DrawModel, Mesh},
    },
    pipelines::{
        basic::mk_basic_pipeline,
        light::{LightResources, directional_light},
        line::mk_line_pipeline,
    },
    resources::{mesh::create_sphere, wireframe::create_wireframe},
};

pub const SPHERE_RADIUS: f32 = 0.25;
pub const SPHERE_SLICES: u32 = 20;
pub const SPHERE_STACKS: u32 = 20;

/// A mesh paired with its world transform and material.
#[derive(Debug)]
pub struct SceneObject {
    pub mesh: Mesh,
    pub instance: Instance,
    pub instance_buffer: wgpu::Buffer,
}

impl SceneObject {
    fn new(device: &wgpu::Device, mesh: Mesh, instance: Instance) -> Self {
        let instance_buffer = mk_instance_buffer(device, &mesh.name, &instance);
        Self {
            mesh,
            instance,
            instance_buffer,
        }
    }
}

#[derive(Debug)]
pub struct Scene {
    pub camera: CameraResources,
    pub light: LightResources,
    pub objects: [SceneObject; 2],
    pub wireframe: SceneObject,
    basic_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
}

impl Scene {
    /// Build every buffer, pipeline and uniform the scene draws with.
    ///
    /// `color_format` is the format of the target the scene is rendered into and
    /// `size` its dimensions in pixels, used for the projection's aspect ratio.
    pub fn setup(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        size: [u32; 2],
        config: &DemoConfig,
    ) -> anyhow::Result<Self> {
        let sphere = |name: &str| {
            create_sphere(device, name, SPHERE_RADIUS, SPHERE_SLICES, SPHERE_STACKS)
                .with_context(|| format!("failed to build {}", name))
        };

        let objects = [
            SceneObject::new(
                device,
                sphere("sphere 0")?,
                Instance::from(cgmath::Vector3::new(1.0, 0.0, 0.0)).with_material(Material::YELLOW),
            ),
            SceneObject::new(
                device,
                sphere("sphere 1")?,
                Instance::from(cgmath::Vector3::new(-1.0, 0.0, 0.0))
                    .with_material(Material::YELLOW),
            ),
        ];

        // the lines have no material of their own and reuse the last sphere's
        let wireframe = SceneObject::new(
            device,
            create_wireframe(device),
            Instance::new().with_material(objects[1].instance.material),
        );

        let mut light = directional_light(cgmath::Vector3::new(1.0, -0.0, 0.25), Colour::WHITE);
        light.set_normalize_normals(true);
        light.set_specular_enabled(true);
        let light = LightResources::new(light, device);

        let camera = CameraResources::new(device, size, config);

        let basic_pipeline = mk_basic_pipeline(
            device,
            color_format,
            &camera.bind_group_layout,
            &light.bind_group_layout,
        );
        let line_pipeline = mk_line_pipeline(
            device,
            color_format,
            &camera.bind_group_layout,
            &light.bind_group_layout,
        );

        log::info!(
            "scene ready: {} spheres, {} line segments",
            objects.len(),
            wireframe.mesh.num_elements / 2
        );

        Ok(Self {
            camera,
            light,
            objects,
            wireframe,
            basic_pipeline,
            line_pipeline,
        })
    }

    /// Forward input to the camera controller. Returns true if it was consumed.
    pub fn handle_window_events(&mut self, event: &WindowEvent) -> bool {
        self.camera.controller.handle_window_events(event)
    }

    pub fn update(&mut self, queue: &wgpu::Queue, dt: Duration) {
        self.camera.update(queue, dt);
    }

    /// Record a full frame: clear colour and depth, then draw the scene.
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
        clear_colour: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_colour),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
            multiview_mask: None,
        });
        self.draw(&mut render_pass);
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.basic_pipeline);
        for object in &self.objects {
            render_pass.set_vertex_buffer(1, object.instance_buffer.slice(..));
            render_pass.draw_mesh_instanced(
                &object.mesh,
                0..1,
                &self.camera.bind_group,
                &self.light.bind_group,
            );
        }

        render_pass.set_pipeline(&self.line_pipeline);
        render_pass.set_vertex_buffer(1, self.wireframe.instance_buffer.slice(..));
        render_pass.draw_mesh_instanced(
            &self.wireframe.mesh,
            0..1,
            &self.camera.bind_group,
            &self.light.bind_group,
        );
    }
}

fn mk_instance_buffer(device: &wgpu::Device, name: &str, instance: &Instance) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Instance Buffer", name)),
        contents: bytemuck::cast_slice(&[instance.to_raw()]),
        usage: wgpu::BufferUsages::VERTEX,
    })
}
