/**
 * This module contains all logic for building the scene's static geometry and
 * uploading it to GPU buffers.
 */
pub mod mesh;
pub mod wireframe;
