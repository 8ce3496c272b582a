//! Game Catalog
//!
//! Static, read-only catalog bundled at build time and parsed once at
//! startup. Games are never created or destroyed at runtime.

use crate::models::Game;

const GAMES_JSON: &str = include_str!("../assets/games.json");

pub fn load_catalog() -> Vec<Game> {
    serde_json::from_str(GAMES_JSON).expect("bundled games.json should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses() {
        let games = load_catalog();
        assert!(!games.is_empty());
    }

    #[test]
    fn test_catalog_ids_unique() {
        let games = load_catalog();
        for g in &games {
            assert_eq!(games.iter().filter(|other| other.id == g.id).count(), 1);
            assert!(!g.name.is_empty());
            assert!(!g.image.is_empty());
        }
    }
}
