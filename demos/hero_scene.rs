use scene_guard::fallback::{cube, uv_sphere};
use scene_guard::{AssetSlot, RenderTarget, SceneNode, ScenePolicy, ValidatorConfig};

fn describe(slot: &AssetSlot) {
    match slot.render_target() {
        RenderTarget::Pending => println!("  -> still loading"),
        RenderTarget::Scene(scene) => println!(
            "  -> rendering {:?} ({} meshes, {} vertices)",
            scene.name.as_deref().unwrap_or("scene"),
            scene.mesh_count(),
            scene.vertex_count()
        ),
        RenderTarget::Placeholder(placeholder) => println!(
            "  -> rendering {} placeholder (wireframe: {}, color: {:?})",
            placeholder.kind, placeholder.wireframe, placeholder.color
        ),
    }
}

fn main() {
    env_logger::init();

    let earth = SceneNode::group("earth").with_child(SceneNode::mesh("globe", uv_sphere(2.5, 64, 32)));

    let mut monitor = cube(1.0);
    if let Some(normals) = monitor.normal.as_mut() {
        normals[7] = f32::NAN;
    }
    let computer = SceneNode::group("desktop_pc")
        .with_child(SceneNode::mesh("case", cube(0.8)))
        .with_child(SceneNode::mesh("monitor", monitor));

    let mut slot = AssetSlot::new(&ValidatorConfig::default());

    for (label, scene) in [
        ("earth", Some(earth)),
        ("desktop_pc", Some(computer.clone())),
        ("missing", None),
    ] {
        println!("Loading {}", label);
        let ticket = slot.begin_load();
        slot.complete(ticket, scene);
        describe(&slot);
    }

    println!("Loading desktop_pc with pruning");
    let mut pruning = AssetSlot::new(&ValidatorConfig {
        policy: ScenePolicy::Prune,
        ..ValidatorConfig::default()
    });
    let ticket = pruning.begin_load();
    pruning.complete(ticket, Some(computer));
    for removed in pruning.pruned() {
        println!("  pruned {}", removed);
    }
    describe(&pruning);
}
