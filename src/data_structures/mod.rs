//! Engine data structures: colours, materials, meshes, instances and textures.
//!
//! - `colour` holds RGBA colours and the preset palette
//! - `material` holds fixed-function lighting coefficients and their presets
//! - `model` contains vertex formats, GPU meshes and draw helpers
//! - `instance` holds per-object transformation and material data
//! - `texture` wraps the depth buffer

pub mod colour;
pub mod instance;
pub mod material;
pub mod model;
pub mod texture;
