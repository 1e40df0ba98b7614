pub mod asset;
pub mod cli;
pub mod config;
pub mod contact;
pub mod core;
pub mod fallback;
pub mod geometry;
pub mod loaders;
pub mod math;
pub mod report;
pub mod scene;
pub mod traits;

pub use asset::{AssetSlot, AssetState, LoadTicket, RenderTarget};
pub use config::{FallbackKind, ScenePolicy, ValidatorConfig};
pub use crate::core::{validate, RejectReason, Rejection, Validation, Validator};
pub use fallback::Placeholder;
pub use geometry::{AttributeKind, Geometry};
pub use scene::SceneNode;
