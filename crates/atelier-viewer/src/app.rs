//! Bevy application setup and gallery loading

use anyhow::{Context, Result};
use atelier_core::{load_config, Catalog, Gallery, GalleryConfig};
use atelier_scene::{AtelierScenePlugin, GalleryState};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_picking::DefaultPickingPlugins;
use std::path::Path;
use tracing::{error, info};

use crate::ui::UiPlugin;

/// Build the gallery from optional catalog and config files.
///
/// A file that fails to load is reported once and replaced by the bundled
/// catalog or the default configuration. Only a broken bundled catalog is
/// fatal.
pub fn load_gallery(config_path: Option<&Path>, catalog_path: Option<&Path>) -> Result<Gallery> {
    let config = match config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
            .unwrap_or_else(|err| {
                error!("{err:#}; using defaults");
                GalleryConfig::default()
            }),
        None => GalleryConfig::default(),
    };

    let catalog = match catalog_path {
        Some(path) => match Catalog::from_file(path)
            .and_then(|catalog| catalog.check_standing_spots(&config.avatar).map(|()| catalog))
            .with_context(|| format!("Failed to load catalog from {}", path.display()))
        {
            Ok(catalog) => catalog,
            Err(err) => {
                error!("{err:#}; using bundled catalog");
                Catalog::bundled().context("Failed to load bundled catalog")?
            }
        },
        None => Catalog::bundled().context("Failed to load bundled catalog")?,
    };

    info!(artworks = catalog.len(), "Gallery ready");
    Ok(Gallery::new(catalog, config))
}

/// Run the Bevy application
pub fn run(gallery: Gallery) {
    App::new()
        .insert_resource(GalleryState(gallery))
        // Bevy 0.17+ has built-in https:// asset loading via the "https" feature
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Neo-Atelier".to_string(),
                        canvas: Some("#atelier-canvas".to_string()),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    // Remote image hosts don't serve .meta files
                    meta_check: bevy::asset::AssetMetaCheck::Never,
                    ..default()
                })
                // The entry point installs its own subscriber
                .disable::<LogPlugin>(),
        )
        // Must be added BEFORE EguiPlugin so it can detect PickingPlugin
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(EguiPlugin::default())
        .add_plugins(AtelierScenePlugin)
        .add_plugins(UiPlugin)
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::Selection;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_files() {
        let gallery = load_gallery(None, None).unwrap();
        assert_eq!(gallery.catalog().len(), 5);
        assert_eq!(gallery.config(), &GalleryConfig::default());
        assert_eq!(gallery.selection(), Selection::None);
    }

    #[test]
    fn test_bad_catalog_falls_back_to_bundled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("artworks.toml");
        fs::write(&path, "[[artwork]]\nid = \"broken\"\n").unwrap();

        let gallery = load_gallery(None, Some(&path)).unwrap();
        assert_eq!(gallery.catalog(), &Catalog::bundled().unwrap());
    }

    #[test]
    fn test_bad_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atelier.toml");
        fs::write(&path, "[avatar]\nwalk_speed = \"fast\"\n").unwrap();

        let gallery = load_gallery(Some(&path), None).unwrap();
        assert_eq!(gallery.config(), &GalleryConfig::default());
    }

    #[test]
    fn test_catalog_with_unreachable_artwork_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("artworks.toml");
        let edge = r#"
[[artwork]]
id = "edge"
title = "Edge"
artist = "Someone"
year = "2020"
medium = "Ink"
description = "Hung where nobody can stand."
image_url = "https://example.com/edge.jpg"
position = [0.0, 2.0, 9.5]
rotation = [0.0, 0.0, 0.0]
dimensions = [1.0, 1.0]
"#;
        fs::write(&path, edge).unwrap();

        let gallery = load_gallery(None, Some(&path)).unwrap();
        assert_eq!(gallery.catalog(), &Catalog::bundled().unwrap());
    }

    #[test]
    fn test_custom_files_are_used() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("atelier.toml");
        fs::write(&config_path, "[panel]\nreveal_delay_secs = 0.5\n").unwrap();

        let catalog_path = dir.path().join("artworks.toml");
        let one = r#"
[[artwork]]
id = "solo"
title = "Solo"
artist = "Someone"
year = "2020"
medium = "Ink"
description = "Alone on the wall."
image_url = "https://example.com/solo.jpg"
position = [0.0, 2.0, -6.0]
rotation = [0.0, 0.0, 0.0]
dimensions = [1.0, 1.0]
"#;
        fs::write(&catalog_path, one).unwrap();

        let gallery = load_gallery(Some(&config_path), Some(&catalog_path)).unwrap();
        assert_eq!(gallery.catalog().len(), 1);
        assert_eq!(gallery.config().panel.reveal_delay_secs, 0.5);
    }
}
