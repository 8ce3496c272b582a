//! Domain Models
//!
//! Catalog games and the buckets they are sorted into.

use serde::{Deserialize, Serialize};

/// A game from the bundled catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Thumbnail reference (path or URL, passed through to the img tag)
    pub image: String,
}

/// Capacity role of a bucket, fixed at creation.
///
/// The capacity check reads this flag, never the label, so renaming the
/// capacity-limited bucket does not move the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketRole {
    #[default]
    Standard,
    /// Occupancy cannot exceed the configured maximum
    Capped,
}

/// A named, colored, ordered container for games
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bucket {
    /// Unique identifier
    pub id: String,
    /// User-editable label (non-empty once committed)
    pub label: String,
    /// CSS color token, derived from bucket position
    pub color: String,
    /// Capacity role
    pub role: BucketRole,
    /// Member games in display order
    pub game_ids: Vec<String>,
}

impl Bucket {
    pub fn new(id: &str, label: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            color: color.to_string(),
            role: BucketRole::Standard,
            game_ids: Vec::new(),
        }
    }

    pub fn capped(id: &str, label: &str, color: &str) -> Self {
        Self {
            role: BucketRole::Capped,
            ..Self::new(id, label, color)
        }
    }
}

/// Find a game in the catalog by id
pub fn game_by_id<'a>(games: &'a [Game], id: &str) -> Option<&'a Game> {
    games.iter().find(|g| g.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_creation() {
        let bucket = Bucket::new("tier-s", "S", "#eab308");
        assert_eq!(bucket.id, "tier-s");
        assert_eq!(bucket.role, BucketRole::Standard);
        assert!(bucket.game_ids.is_empty());
    }

    #[test]
    fn test_capped_bucket() {
        let bucket = Bucket::capped("tier-keep", "Keep", "#22c55e");
        assert_eq!(bucket.role, BucketRole::Capped);
        assert_eq!(bucket.label, "Keep");
    }
}
