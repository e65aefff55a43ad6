use std::collections::HashSet;

use orbit_demo::{
    resources::{
        mesh::sphere,
        wireframe::{WIREFRAME_INDICES, line_count, wireframe_vertices},
    },
    scene::{SPHERE_RADIUS, SPHERE_SLICES, SPHERE_STACKS},
};

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[test]
fn scene_sphere_has_the_expected_tessellation() {
    let geometry = sphere(SPHERE_RADIUS, SPHERE_SLICES, SPHERE_STACKS).unwrap();
    // two poles plus one ring of `slices` vertices between each pair of stacks
    assert_eq!(geometry.vertices.len(), 2 + 19 * 20);
    // two caps of `slices` triangles, two triangles per quad in between
    assert_eq!(geometry.indices.len(), 3 * (2 * 20 + 2 * 20 * 18));
}

#[test]
fn sphere_vertices_sit_on_the_radius_with_unit_normals() {
    let geometry = sphere(SPHERE_RADIUS, SPHERE_SLICES, SPHERE_STACKS).unwrap();
    for vertex in &geometry.vertices {
        let length = dot(vertex.position, vertex.position).sqrt();
        assert!((length - SPHERE_RADIUS).abs() < 1e-5, "{:?}", vertex);
        let normal_length = dot(vertex.normal, vertex.normal).sqrt();
        assert!((normal_length - 1.0).abs() < 1e-5, "{:?}", vertex);
        // normals point away from the centre
        assert!(dot(vertex.normal, vertex.position) > 0.0);
    }
}

#[test]
fn sphere_indices_are_in_range_and_wound_outwards() {
    let geometry = sphere(SPHERE_RADIUS, SPHERE_SLICES, SPHERE_STACKS).unwrap();
    let count = geometry.vertices.len();
    for triangle in geometry.indices.chunks(3) {
        assert!(triangle.iter().all(|&i| (i as usize) < count));
        let [a, b, c] = [0, 1, 2].map(|k| geometry.vertices[triangle[k] as usize].position);
        let normal = cross(sub(b, a), sub(c, a));
        let centroid = [
            (a[0] + b[0] + c[0]) / 3.0,
            (a[1] + b[1] + c[1]) / 3.0,
            (a[2] + b[2] + c[2]) / 3.0,
        ];
        assert!(dot(normal, centroid) > 0.0, "triangle {:?} faces inwards", triangle);
    }
}

#[test]
fn every_sphere_vertex_is_used() {
    let geometry = sphere(1.0, 8, 6).unwrap();
    let used: HashSet<u16> = geometry.indices.iter().copied().collect();
    assert_eq!(used.len(), geometry.vertices.len());
}

#[test]
fn wireframe_has_eight_points_and_twelve_lines() {
    assert_eq!(wireframe_vertices().len(), 8);
    assert_eq!(WIREFRAME_INDICES.len(), 24);
    assert_eq!(line_count(), 12);
    assert!(WIREFRAME_INDICES.iter().all(|&i| i < 8));
}

#[test]
fn wireframe_lines_are_unique_and_every_corner_has_three() {
    let mut edges = HashSet::new();
    let mut degree = [0; 8];
    for line in WIREFRAME_INDICES.chunks(2) {
        let (a, b) = (line[0].min(line[1]), line[0].max(line[1]));
        assert_ne!(a, b);
        assert!(edges.insert((a, b)), "duplicate line {}-{}", a, b);
        degree[a as usize] += 1;
        degree[b as usize] += 1;
    }
    assert_eq!(degree, [3; 8]);
}

#[test]
fn wireframe_points_form_two_mirrored_diamonds() {
    let vertices = wireframe_vertices();
    let h = 3.0f32.sqrt();
    assert_eq!(vertices[0].position, [3.0, 0.0, 0.5]);
    assert_eq!(vertices[3].position, [0.0, -h, -0.5]);
    assert_eq!(vertices[4].position, [-3.0, 0.0, 0.5]);
    assert_eq!(vertices[7].position, [0.0, h, -0.5]);
    // even indices are the front face, odd ones its mirror behind it
    for pair in vertices.chunks(2) {
        let (front, back) = (pair[0].position, pair[1].position);
        assert_eq!(front[..2], back[..2]);
        assert_eq!((front[2], back[2]), (0.5, -0.5));
    }
}
