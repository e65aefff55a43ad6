//! Render pipelines and the light shared by them.
//!
//! - `basic` lit triangle meshes
//! - `line` unlit line lists
//! - `light` the directional light uniform and its bind group

pub mod basic;
pub mod light;
pub mod line;
