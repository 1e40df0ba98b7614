use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;

use crate::geometry::Geometry;
use crate::scene::SceneNode;

/// Loads a glTF/GLB file into a scene graph
pub fn load_gltf_scene(path: impl AsRef<Path>) -> Result<SceneNode> {
    let path = path.as_ref();
    info!("Loading glTF file: {:?}", path);

    let (document, buffers, _images) = gltf::import(path)
        .with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    build_scene(&document, &buffers)
}

/// Loads a glTF document held in memory (embedded or data-URI buffers only)
pub fn load_gltf_slice(bytes: &[u8]) -> Result<SceneNode> {
    let (document, buffers, _images) =
        gltf::import_slice(bytes).context("Failed to parse glTF data")?;

    build_scene(&document, &buffers)
}

/// Loads a scene, logging and swallowing failures. `None` is what the
/// validator receives for a failed load.
pub fn load_scene_or_none(path: impl AsRef<Path>) -> Option<SceneNode> {
    match load_gltf_scene(path.as_ref()) {
        Ok(scene) => Some(scene),
        Err(e) => {
            warn!("{:#}", e);
            None
        }
    }
}

fn build_scene(document: &gltf::Document, buffers: &[gltf::buffer::Data]) -> Result<SceneNode> {
    debug!(
        "glTF: {} scenes, {} nodes, {} meshes",
        document.scenes().count(),
        document.nodes().count(),
        document.meshes().count()
    );

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .context("glTF file contains no scene")?;

    let mut root = SceneNode {
        name: Some(scene.name().unwrap_or("scene").to_string()),
        ..SceneNode::default()
    };

    for node in scene.nodes() {
        root.children.push(process_node(&node, buffers));
    }

    info!(
        "Extracted {} meshes ({} vertices) from glTF",
        root.mesh_count(),
        root.vertex_count()
    );
    Ok(root)
}

/// Recursively converts glTF nodes
fn process_node(node: &gltf::Node, buffers: &[gltf::buffer::Data]) -> SceneNode {
    let mut scene_node = SceneNode {
        name: node.name().map(str::to_string),
        ..SceneNode::default()
    };

    if let Some(mesh) = node.mesh() {
        let mut geometries: Vec<Geometry> = mesh
            .primitives()
            .map(|primitive| read_primitive(&primitive, buffers))
            .collect();

        // One primitive maps onto the node itself, several become children
        if geometries.len() == 1 {
            scene_node.geometry = geometries.pop();
        } else {
            let mesh_name = mesh
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("mesh{}", mesh.index()));
            for (i, geometry) in geometries.into_iter().enumerate() {
                scene_node
                    .children
                    .push(SceneNode::mesh(format!("{}#{}", mesh_name, i), geometry));
            }
        }
    }

    for child in node.children() {
        scene_node.children.push(process_node(&child, buffers));
    }

    scene_node
}

/// Reads positions, normals and the first UV set of a primitive
fn read_primitive(primitive: &gltf::Primitive, buffers: &[gltf::buffer::Data]) -> Geometry {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| &data[..]));

    let position: Vec<f32> = reader
        .read_positions()
        .map(|positions| positions.flatten().collect())
        .unwrap_or_default();
    if position.is_empty() {
        warn!("Mesh primitive {} has no positions", primitive.index());
    }

    Geometry {
        position,
        normal: reader.read_normals().map(|normals| normals.flatten().collect()),
        uv: reader
            .read_tex_coords(0)
            .map(|uvs| uvs.into_f32().flatten().collect()),
    }
}
