//! Per-asset lifecycle: `Loading -> {Valid, Invalid}`.
//!
//! A slot validates each freshly loaded scene exactly once and then answers
//! what the renderer should draw until the next load starts.

use log::{info, warn};

use crate::config::{ScenePolicy, ValidatorConfig};
use crate::core::validator::{Rejection, Validation, Validator};
use crate::fallback::Placeholder;
use crate::scene::SceneNode;

#[derive(Clone, Debug, PartialEq)]
pub enum AssetState {
    Loading,
    Valid(SceneNode),
    Invalid(Rejection),
}

impl AssetState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AssetState::Loading)
    }
}

/// Identifies one load; completions carrying an older ticket are ignored
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What the render layer should draw this frame
#[derive(Debug)]
pub enum RenderTarget<'a> {
    Pending,
    Scene(&'a SceneNode),
    Placeholder(&'a Placeholder),
}

pub struct AssetSlot {
    validator: Validator,
    policy: ScenePolicy,
    placeholder: Placeholder,
    generation: u64,
    state: AssetState,
    /// Meshes dropped by the prune policy on the last load
    pruned: Vec<Rejection>,
}

impl AssetSlot {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            validator: Validator::new(config),
            policy: config.policy,
            placeholder: Placeholder::new(config.fallback),
            generation: 0,
            state: AssetState::Loading,
            pruned: Vec::new(),
        }
    }

    /// Starts a new load, discarding whatever the slot held
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = AssetState::Loading;
        self.pruned.clear();
        LoadTicket(self.generation)
    }

    /// Resolves the load identified by `ticket`. Returns `false` when the
    /// ticket is stale or the load already resolved.
    pub fn complete(&mut self, ticket: LoadTicket, scene: Option<SceneNode>) -> bool {
        if ticket.0 != self.generation {
            warn!("Ignoring stale load {} (current {})", ticket.0, self.generation);
            return false;
        }
        if self.state.is_terminal() {
            warn!("Load {} already resolved", ticket.0);
            return false;
        }

        self.state = match self.policy {
            ScenePolicy::Reject => self.resolve_rejecting(scene),
            ScenePolicy::Prune => self.resolve_pruned(scene),
        };

        match &self.state {
            AssetState::Valid(scene) => info!("Load {} valid ({} meshes)", ticket.0, scene.mesh_count()),
            AssetState::Invalid(rejection) => info!("Load {} invalid: {}", ticket.0, rejection),
            AssetState::Loading => {}
        }
        true
    }

    fn resolve_rejecting(&self, scene: Option<SceneNode>) -> AssetState {
        let verdict = self.validator.validate(scene.as_ref()).map(|_| ());
        match (verdict, scene) {
            (Validation::Valid(()), Some(scene)) => AssetState::Valid(scene),
            (Validation::Invalid(rejection), _) => AssetState::Invalid(rejection),
            (Validation::Valid(()), None) => AssetState::Invalid(Rejection::missing_scene()),
        }
    }

    fn resolve_pruned(&mut self, scene: Option<SceneNode>) -> AssetState {
        let Some(scene) = scene else {
            return AssetState::Invalid(Rejection::missing_scene());
        };

        let pruned = self.validator.prune(&scene);
        self.pruned = pruned.removed;

        // Nothing left to draw once every mesh was removed
        match self.pruned.first() {
            Some(first) if pruned.scene.mesh_count() == 0 => AssetState::Invalid(first.clone()),
            _ => AssetState::Valid(pruned.scene),
        }
    }

    pub fn state(&self) -> &AssetState {
        &self.state
    }

    pub fn pruned(&self) -> &[Rejection] {
        &self.pruned
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn render_target(&self) -> RenderTarget<'_> {
        match &self.state {
            AssetState::Loading => RenderTarget::Pending,
            AssetState::Valid(scene) => RenderTarget::Scene(scene),
            AssetState::Invalid(_) => RenderTarget::Placeholder(&self.placeholder),
        }
    }
}
