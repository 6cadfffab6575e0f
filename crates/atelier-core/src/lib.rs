//! Atelier Core - Gallery state, avatar motion and camera framing
//!
//! This crate holds everything about the gallery that does not depend on a
//! renderer:
//! - Artwork catalog loading and ray picking
//! - Selection and previous/next navigation
//! - Keyboard-driven and automatic avatar locomotion with procedural pose
//! - Camera rig easing between follow and inspect framings
//! - Delayed reveal of the detail panel

pub mod avatar;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod gallery;
pub mod input;
pub mod math;
pub mod pose;
pub mod reveal;
pub mod selection;

pub use avatar::{standing_spot, AvatarController, AvatarTransform, Gait, StandingSpot};
pub use camera::{CameraMode, CameraRig, CameraTransform};
pub use catalog::{Artwork, Catalog, CatalogError, FRAME_BORDER, PLAQUE_DROP};
pub use config::{load_config, save_default_config, ConfigError, GalleryConfig};
pub use gallery::{FrameSnapshot, Gallery};
pub use input::HeldKeys;
pub use pose::{Pose, PoseAnimator};
pub use reveal::PanelReveal;
pub use selection::{Selection, SelectionError, SelectionState};
