pub mod gltf;

pub use gltf::{load_gltf_scene, load_gltf_slice, load_scene_or_none};
