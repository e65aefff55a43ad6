//! orbit-demo
//!
//! A minimal wgpu demonstration: it opens an 800×600 window, builds two lit
//! spheres and a wireframe line list once, and renders them every frame while the
//! arrow keys orbit and raise the camera. Escape closes the window.
//!
//! High-level modules
//! - `camera`: orbit camera, arrow-key controller and the camera uniform
//! - `config`: the constants the demo starts from
//! - `context`: window surface, device and queue
//! - `data_structures`: colours, materials, meshes, instances and the depth texture
//! - `flow`: the winit event loop
//! - `pipelines`: the lit mesh pipeline, the line pipeline and the light
//! - `resources`: sphere and wireframe geometry
//! - `scene`: everything the demo draws, built once and drawn each frame
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
#[cfg(feature = "integration-tests")]
pub mod offscreen;
pub mod pipelines;
pub mod resources;
pub mod scene;
