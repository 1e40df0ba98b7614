use scene_guard::geometry::Geometry;
use scene_guard::{AssetSlot, AssetState, FallbackKind, RenderTarget, SceneNode, ValidatorConfig};

fn earth() -> SceneNode {
    SceneNode::group("earth").with_child(SceneNode::mesh("globe", Geometry::new(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0])))
}

fn corrupt() -> SceneNode {
    SceneNode::mesh("desktop_pc", Geometry::new(vec![0.0, 0.0, 0.0, f32::NAN, 0.0, 0.0]))
}

#[cfg(test)]
mod asset_slot_tests {
    use super::*;

    #[test]
    fn test_valid_load_renders_scene() {
        let mut slot = AssetSlot::new(&ValidatorConfig::default());
        let ticket = slot.begin_load();

        assert!(slot.complete(ticket, Some(earth())));
        match slot.render_target() {
            RenderTarget::Scene(scene) => assert_eq!(scene.name.as_deref(), Some("earth")),
            other => panic!("expected scene, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_load_renders_placeholder() {
        let config = ValidatorConfig {
            fallback: FallbackKind::Cube,
            ..ValidatorConfig::default()
        };
        let mut slot = AssetSlot::new(&config);
        let ticket = slot.begin_load();
        slot.complete(ticket, Some(corrupt()));

        match slot.render_target() {
            RenderTarget::Placeholder(placeholder) => assert_eq!(placeholder.kind, FallbackKind::Cube),
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_load_renders_placeholder() {
        let mut slot = AssetSlot::new(&ValidatorConfig::default());
        let ticket = slot.begin_load();
        slot.complete(ticket, None);

        assert!(matches!(slot.state(), AssetState::Invalid(_)));
        assert!(matches!(slot.render_target(), RenderTarget::Placeholder(_)));
    }

    #[test]
    fn test_terminal_state_ignores_second_completion() {
        let mut slot = AssetSlot::new(&ValidatorConfig::default());
        let ticket = slot.begin_load();

        assert!(slot.complete(ticket, Some(corrupt())));
        assert!(!slot.complete(ticket, Some(earth())), "Already resolved");
        assert!(matches!(slot.state(), AssetState::Invalid(_)));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut slot = AssetSlot::new(&ValidatorConfig::default());
        let old = slot.begin_load();
        let current = slot.begin_load();

        assert!(!slot.complete(old, Some(earth())));
        assert_eq!(slot.state(), &AssetState::Loading);

        assert!(slot.complete(current, Some(corrupt())));
        assert!(matches!(slot.state(), AssetState::Invalid(_)));
    }

    #[test]
    fn test_new_load_restarts_machine() {
        let mut slot = AssetSlot::new(&ValidatorConfig::default());
        let first = slot.begin_load();
        slot.complete(first, Some(corrupt()));

        let second = slot.begin_load();
        assert!(matches!(slot.render_target(), RenderTarget::Pending));

        slot.complete(second, Some(earth()));
        assert!(matches!(slot.state(), AssetState::Valid(_)));
    }

    #[test]
    fn test_validates_once_per_load() {
        let mut slot = AssetSlot::new(&ValidatorConfig::default());
        let ticket = slot.begin_load();
        slot.complete(ticket, Some(earth()));
        slot.complete(ticket, Some(earth()));

        assert_eq!(slot.validator().scratch_copies(), 1);
        assert_eq!(slot.validator().outstanding_scratch(), 0);
    }
}
