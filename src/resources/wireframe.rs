//! The static line-list shape drawn around the origin: two diamond outlines
//! at `z = 0.5` and `z = -0.5` joined at their corners.

use crate::{
    data_structures::model::{LineVertex, Mesh},
    resources::mesh::upload_mesh,
};

/// Pairs of vertex indices, one pair per line segment.
pub const WIREFRAME_INDICES: [u16; 24] = [
    0, 1, //
    0, 2, //
    0, 6, //
    1, 3, //
    1, 7, //
    2, 3, //
    2, 4, //
    3, 5, //
    4, 5, //
    4, 6, //
    5, 7, //
    6, 7, //
];

pub fn wireframe_vertices() -> [LineVertex; 8] {
    let h = 3.0f32.sqrt();
    [
        LineVertex::new(3.0, 0.0, 0.5),
        LineVertex::new(3.0, 0.0, -0.5),
        LineVertex::new(0.0, -h, 0.5),
        LineVertex::new(0.0, -h, -0.5),
        LineVertex::new(-3.0, 0.0, 0.5),
        LineVertex::new(-3.0, 0.0, -0.5),
        LineVertex::new(0.0, h, 0.5),
        LineVertex::new(0.0, h, -0.5),
    ]
}

/// Number of line segments in [`WIREFRAME_INDICES`].
pub const fn line_count() -> usize {
    WIREFRAME_INDICES.len() / 2
}

pub fn create_wireframe(device: &wgpu::Device) -> Mesh {
    upload_mesh(device, "wireframe", &wireframe_vertices(), &WIREFRAME_INDICES)
}
