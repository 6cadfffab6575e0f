//! Frame driver tying catalog, selection, input, avatar and camera together
//!
//! [`Gallery`] is the single state object the presentation layer holds. User
//! actions go through its selection and key methods at any time; [`Gallery::tick`]
//! runs exactly once per rendered frame and returns what the renderer needs.

use glam::Vec3;
use tracing::warn;

use crate::avatar::{AvatarController, AvatarTransform, Gait};
use crate::camera::{CameraMode, CameraRig, CameraTransform};
use crate::catalog::{Artwork, Catalog};
use crate::config::GalleryConfig;
use crate::input::HeldKeys;
use crate::pose::{Pose, PoseAnimator};
use crate::reveal::PanelReveal;
use crate::selection::{Selection, SelectionError, SelectionState};

/// Everything the renderer reads after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub avatar: AvatarTransform,
    pub gait: Gait,
    pub pose: Pose,
    pub camera: CameraTransform,
    pub camera_mode: CameraMode,
    pub selection: Selection,
    pub panel_visible: bool,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    config: GalleryConfig,
    catalog: Catalog,
    selection: SelectionState,
    keys: HeldKeys,
    avatar: AvatarController,
    pose: PoseAnimator,
    camera: CameraRig,
    reveal: PanelReveal,
    /// Total simulated seconds, drives the procedural pose
    clock: f32,
}

impl Gallery {
    pub fn new(catalog: Catalog, config: GalleryConfig) -> Self {
        if let Err(err) = catalog.check_standing_spots(&config.avatar) {
            warn!("{err}");
        }

        Self {
            selection: SelectionState::new(),
            keys: HeldKeys::new(),
            avatar: AvatarController::new(config.avatar.clone()),
            pose: PoseAnimator::new(config.pose.clone()),
            camera: CameraRig::new(config.camera.clone()),
            reveal: PanelReveal::new(config.panel.reveal_delay_secs),
            clock: 0.0,
            catalog,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn selection(&self) -> Selection {
        self.selection.current()
    }

    pub fn selected_artwork(&self) -> Option<&Artwork> {
        self.selection.current().resolve(&self.catalog)
    }

    pub fn panel_visible(&self) -> bool {
        self.reveal.is_visible()
    }

    pub fn select(&mut self, id: &str) -> Result<(), SelectionError> {
        let before = self.selection.current();
        let after = self.selection.select(&self.catalog, id)?;
        self.selection_changed(before, after);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        let before = self.selection.current();
        let after = self.selection.clear();
        self.selection_changed(before, after);
    }

    pub fn select_next(&mut self) -> Result<(), SelectionError> {
        let before = self.selection.current();
        let after = self.selection.next(&self.catalog)?;
        self.selection_changed(before, after);
        Ok(())
    }

    pub fn select_previous(&mut self) -> Result<(), SelectionError> {
        let before = self.selection.current();
        let after = self.selection.previous(&self.catalog)?;
        self.selection_changed(before, after);
        Ok(())
    }

    /// Select whatever artwork a pointer ray hits. Returns the hit id.
    pub fn select_at_ray(&mut self, origin: Vec3, direction: Vec3) -> Option<String> {
        let index = self.catalog.pick(origin, direction)?;
        let id = self.catalog.get(index)?.id.clone();
        self.select(&id).ok()?;
        Some(id)
    }

    /// Artwork under a pointer ray that would respond to a click, i.e. any
    /// hit except the one already selected
    pub fn hover_at_ray(&self, origin: Vec3, direction: Vec3) -> Option<usize> {
        self.catalog
            .pick(origin, direction)
            .filter(|&index| self.selection.current().index() != Some(index))
    }

    fn selection_changed(&mut self, before: Selection, after: Selection) {
        if before != after {
            self.reveal.restart(after);
        }
    }

    pub fn key_down(&mut self, code: &str) {
        self.keys.press(code);
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys.release(code);
    }

    pub fn release_all_keys(&mut self) {
        self.keys.release_all();
    }

    /// Run one frame of `dt` seconds
    pub fn tick(&mut self, dt: f32) -> FrameSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.clock += dt;

        // Sample held keys once so the whole frame sees the same intent
        let intent = self.keys.intent(&self.config.input);
        let target = self.selection.current().resolve(&self.catalog);

        let gait = self.avatar.update(target, intent, dt);
        self.pose.update(gait, target.is_some(), self.clock, dt);
        self.camera
            .update(self.avatar.transform().position, target, dt);
        self.reveal.advance(dt);

        self.snapshot()
    }

    /// State as of the last tick
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            avatar: self.avatar.transform(),
            gait: self.avatar.gait(),
            pose: self.pose.pose(),
            camera: self.camera.transform(),
            camera_mode: self.camera.mode(),
            selection: self.selection.current(),
            panel_visible: self.reveal.is_visible(),
        }
    }
}
