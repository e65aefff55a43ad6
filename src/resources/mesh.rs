use anyhow::{bail, ensure};
use wgpu::util::DeviceExt;

use crate::data_structures::model::{self, ModelVertex};

/// CPU side sphere data before it is uploaded.
#[derive(Debug, Clone)]
pub struct SphereGeometry {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u16>,
}

/**
 * Builds a UV sphere centred on the origin with its poles on the Y axis.
 *
 * `slices` are the subdivisions around the Y axis, `stacks` the subdivisions from
 * pole to pole. Triangles are wound so that `(v1 - v0) x (v2 - v0)` points away
 * from the centre.
 */
pub fn sphere(radius: f32, slices: u32, stacks: u32) -> anyhow::Result<SphereGeometry> {
    ensure!(radius > 0.0, "sphere radius must be positive, got {}", radius);
    ensure!(slices >= 3, "a sphere needs at least 3 slices, got {}", slices);
    ensure!(stacks >= 2, "a sphere needs at least 2 stacks, got {}", stacks);

    let vertex_count = 2 + (stacks as u64 - 1) * slices as u64;
    if vertex_count > u16::MAX as u64 {
        bail!(
            "sphere with {} slices and {} stacks needs {} vertices which overflows 16 bit indices",
            slices,
            stacks,
            vertex_count
        );
    }

    let mut vertices = Vec::with_capacity(vertex_count as usize);
    let point = |normal: [f32; 3]| ModelVertex {
        position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
        normal,
    };

    vertices.push(point([0.0, 1.0, 0.0]));
    for stack in 1..stacks {
        let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for slice in 0..slices {
            let theta = std::f32::consts::TAU * slice as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            vertices.push(point([sin_phi * cos_theta, cos_phi, sin_phi * sin_theta]));
        }
    }
    vertices.push(point([0.0, -1.0, 0.0]));

    let top = 0u16;
    let bottom = (vertex_count - 1) as u16;
    // index of the vertex on ring `stack` (1..stacks) at `slice`, wrapping around
    let ring = |stack: u32, slice: u32| (1 + (stack - 1) * slices + slice % slices) as u16;

    let mut indices = Vec::with_capacity(6 * slices as usize * (stacks as usize - 1));
    for slice in 0..slices {
        indices.extend_from_slice(&[top, ring(1, slice + 1), ring(1, slice)]);
    }
    for stack in 1..stacks - 1 {
        for slice in 0..slices {
            let upper_a = ring(stack, slice);
            let upper_b = ring(stack, slice + 1);
            let lower_a = ring(stack + 1, slice);
            let lower_b = ring(stack + 1, slice + 1);
            indices.extend_from_slice(&[upper_a, upper_b, lower_a]);
            indices.extend_from_slice(&[upper_b, lower_b, lower_a]);
        }
    }
    for slice in 0..slices {
        indices.extend_from_slice(&[ring(stacks - 1, slice), ring(stacks - 1, slice + 1), bottom]);
    }

    Ok(SphereGeometry { vertices, indices })
}

/// Builds a sphere and uploads it as a write-once mesh.
pub fn create_sphere(
    device: &wgpu::Device,
    name: &str,
    radius: f32,
    slices: u32,
    stacks: u32,
) -> anyhow::Result<model::Mesh> {
    let geometry = sphere(radius, slices, stacks)?;
    log::debug!(
        "{}: {} vertices, {} triangles",
        name,
        geometry.vertices.len(),
        geometry.indices.len() / 3
    );
    Ok(upload_mesh(device, name, &geometry.vertices, &geometry.indices))
}

pub(crate) fn upload_mesh<V: bytemuck::Pod>(
    device: &wgpu::Device,
    name: &str,
    vertices: &[V],
    indices: &[u16],
) -> model::Mesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Vertex Buffer", name)),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Index Buffer", name)),
        contents: bytemuck::cast_slice(indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    model::Mesh {
        name: name.to_string(),
        vertex_buffer,
        index_buffer,
        num_elements: indices.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(sphere(0.0, 20, 20).is_err());
        assert!(sphere(1.0, 2, 20).is_err());
        assert!(sphere(1.0, 20, 1).is_err());
    }

    #[test]
    fn rejects_spheres_that_overflow_u16_indices() {
        assert!(sphere(1.0, 1000, 1000).is_err());
    }

    #[test]
    fn smallest_sphere_is_a_closed_double_pyramid() {
        let geometry = sphere(1.0, 3, 2).unwrap();
        assert_eq!(geometry.vertices.len(), 5);
        assert_eq!(geometry.indices.len(), 18);
    }
}
