//! Artwork catalog - the ordered, read-only list of wall-mounted pieces
//!
//! Catalogs are loaded from TOML (`[[artwork]]` tables). Entry order is the
//! order used by previous/next navigation.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::avatar::standing_spot;
use crate::config::AvatarConfig;
use crate::math::{facing_normal, right_vector};

/// Catalog shipped with the crate
const BUNDLED_CATALOG: &str = include_str!("../assets/artworks.toml");

/// Width of the frame border around each image, per side
pub const FRAME_BORDER: f32 = 0.1;

/// Drop from the bottom edge of the image to the title plaque
pub const PLAQUE_DROP: f32 = 0.3;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Catalog contains no artworks")]
    Empty,
    #[error("Duplicate artwork id: {0}")]
    DuplicateId(String),
    #[error("Invalid artwork {id}: {reason}")]
    InvalidArtwork { id: String, reason: String },
    #[error("Artwork {id} has its standing spot at ({x:.2}, {z:.2}), off the floor")]
    UnreachableArtwork { id: String, x: f32, z: f32 },
}

/// A single artwork hanging in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Free text, e.g. "2023" or "Circa 1950"
    pub year: String,
    pub medium: String,
    pub description: String,
    pub image_url: String,
    /// Center of the image in world space
    pub position: [f32; 3],
    /// Euler angles (x, y, z) in radians; only yaw (y) is used
    pub rotation: [f32; 3],
    /// Image width and height in world units
    pub dimensions: [f32; 2],
}

impl Artwork {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn yaw(&self) -> f32 {
        self.rotation[1]
    }

    pub fn width(&self) -> f32 {
        self.dimensions[0]
    }

    pub fn height(&self) -> f32 {
        self.dimensions[1]
    }

    /// Direction the painted surface faces
    pub fn normal(&self) -> Vec3 {
        facing_normal(self.yaw())
    }

    /// Horizontal axis of the painted surface, pointing to the viewer's right
    pub fn right(&self) -> Vec3 {
        right_vector(self.yaw())
    }

    /// Center of the title plaque hung under the frame
    pub fn plaque_position(&self) -> Vec3 {
        self.position() - Vec3::Y * (self.height() / 2.0 + PLAQUE_DROP)
    }

    /// Whether `point` is on the painted side of the wall
    pub fn faces(&self, point: Vec3) -> bool {
        (point - self.position()).dot(self.normal()) > 0.0
    }

    /// Distance along a ray to the framed rectangle, if it is hit from either side
    pub fn ray_intersection(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let normal = self.normal();
        let denom = direction.dot(normal);
        if denom.abs() < 1e-6 {
            return None;
        }

        let center = self.position();
        let t = (center - origin).dot(normal) / denom;
        if t < 0.0 {
            return None;
        }

        let local = origin + direction * t - center;
        let half_w = self.width() / 2.0 + FRAME_BORDER;
        let half_h = self.height() / 2.0 + FRAME_BORDER;
        if local.dot(self.right()).abs() <= half_w && local.y.abs() <= half_h {
            Some(t)
        } else {
            None
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidArtwork {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id is empty"));
        }
        let numbers = self
            .position
            .iter()
            .chain(self.rotation.iter())
            .chain(self.dimensions.iter());
        for value in numbers {
            if !value.is_finite() {
                return Err(invalid("position, rotation and dimensions must be finite"));
            }
        }
        if self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(invalid("dimensions must be positive"));
        }
        Ok(())
    }
}

/// On-disk catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    artwork: Vec<Artwork>,
}

/// Validated, ordered artwork list
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Build a catalog, checking ids and geometry
    pub fn new(artworks: Vec<Artwork>) -> Result<Self, CatalogError> {
        if artworks.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for artwork in &artworks {
            artwork.validate()?;
            if !seen.insert(artwork.id.as_str()) {
                return Err(CatalogError::DuplicateId(artwork.id.clone()));
            }
        }

        Ok(Self { artworks })
    }

    /// Check that the avatar can stand in front of every artwork.
    ///
    /// A spot off the floor would strand the avatar there once the
    /// selection is cleared, since every manual step is then rejected.
    pub fn check_standing_spots(&self, config: &AvatarConfig) -> Result<(), CatalogError> {
        for artwork in &self.artworks {
            let spot = standing_spot(artwork, config).position;
            if !config.floor.contains(spot.x, spot.z) {
                return Err(CatalogError::UnreachableArtwork {
                    id: artwork.id.clone(),
                    x: spot.x,
                    z: spot.z,
                });
            }
        }
        Ok(())
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.artwork)
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&content)?;
        info!(path = %path.display(), count = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The five-piece catalog shipped with the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml(BUNDLED_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.artworks.iter().position(|a| a.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Artwork> {
        self.index_of(id).and_then(|i| self.get(i))
    }

    /// Index after `index`, wrapping to the first entry
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping to the last entry
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }

    /// One-based "n / N" label for the panel
    pub fn position_label(&self, index: usize) -> String {
        format!("{} / {}", index + 1, self.len())
    }

    /// Nearest artwork hit by a ray
    pub fn pick(&self, origin: Vec3, direction: Vec3) -> Option<usize> {
        self.artworks
            .iter()
            .enumerate()
            .filter_map(|(i, a)| a.ray_intersection(origin, direction).map(|t| (i, t)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}
