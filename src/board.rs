//! Assignment Board
//!
//! The authoritative game -> bucket partition plus bucket lifecycle
//! operations. Every catalog game id lives in exactly one member sequence
//! (some bucket or the pool) at all times. The board is a plain value type;
//! the UI layer wraps it in a reactive store and re-reads after each
//! mutation.

use crate::models::{Bucket, Game};

/// Reserved id for the unassigned pool
pub const POOL_ID: &str = "pool";

/// Colors assigned by bucket position (first bucket = first color, etc.)
pub const RANK_COLORS: [&str; 7] = [
    "#eab308", // S - gold
    "#22c55e", // A - green
    "#3b82f6", // B - blue
    "#f97316", // C - orange
    "#ef4444", // D - red
    "#a855f7", // E - purple
    "#64748b", // F - slate
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    buckets: Vec<Bucket>,
    pool: Vec<String>,
}

impl Board {
    fn seeded(buckets: Vec<Bucket>, catalog: &[Game]) -> Self {
        Self {
            buckets,
            pool: catalog.iter().map(|g| g.id.clone()).collect(),
        }
    }

    /// Culling workflow: top tier, capacity-limited Keep, Sell
    pub fn culling(catalog: &[Game]) -> Self {
        Self::seeded(
            vec![
                Bucket::new("tier-s", "S-Tier", "#eab308"),
                Bucket::capped("tier-keep", "Keep", "#22c55e"),
                Bucket::new("tier-sell", "Sell", "#ef4444"),
            ],
            catalog,
        )
    }

    /// Tier-list workflow: seven rank buckets colored by position
    pub fn ranking(catalog: &[Game]) -> Self {
        let labels = ["S", "A", "B", "C", "D", "E", "F"];
        let buckets = labels
            .iter()
            .zip(RANK_COLORS.iter())
            .map(|(label, color)| {
                Bucket::new(&format!("tier-{}", label.to_lowercase()), label, color)
            })
            .collect();
        Self::seeded(buckets, catalog)
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn bucket(&self, bucket_id: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.id == bucket_id)
    }

    fn members_mut(&mut self, container_id: &str) -> Option<&mut Vec<String>> {
        if container_id == POOL_ID {
            Some(&mut self.pool)
        } else {
            self.buckets
                .iter_mut()
                .find(|b| b.id == container_id)
                .map(|b| &mut b.game_ids)
        }
    }

    /// Containing bucket id for a game (`POOL_ID` when unassigned)
    pub fn location_of(&self, game_id: &str) -> Option<&str> {
        if self.pool.iter().any(|g| g == game_id) {
            return Some(POOL_ID);
        }
        self.buckets
            .iter()
            .find(|b| b.game_ids.iter().any(|g| g == game_id))
            .map(|b| b.id.as_str())
    }

    /// Move a game between member sequences, appending at the target end.
    ///
    /// No-op when source and target are the same container. The caller reads
    /// the source from [`Board::location_of`], so the game is a member of it
    /// by construction; a stale source or target leaves the board untouched.
    pub fn move_game(&mut self, game_id: &str, from_id: &str, to_id: &str) {
        if from_id == to_id {
            return;
        }
        if self.members_mut(to_id).is_none() {
            return;
        }
        let Some(from) = self.members_mut(from_id) else {
            return;
        };
        let Some(pos) = from.iter().position(|g| g == game_id) else {
            return;
        };
        from.remove(pos);
        if let Some(to) = self.members_mut(to_id) {
            to.push(game_id.to_string());
        }
    }

    /// Replace a bucket's label with the trimmed input; blank input is
    /// ignored and the prior label is retained.
    pub fn rename_bucket(&mut self, bucket_id: &str, new_label: &str) {
        let trimmed = new_label.trim();
        if trimmed.is_empty() {
            return;
        }
        if let Some(bucket) = self.buckets.iter_mut().find(|b| b.id == bucket_id) {
            bucket.label = trimmed.to_string();
        }
    }

    /// Delete a bucket, migrating its members to the pool.
    ///
    /// No-op for unknown ids or when only one bucket remains. The pool never
    /// counts toward that minimum and is never deletable. Remaining buckets
    /// are recolored by their new position.
    pub fn delete_bucket(&mut self, bucket_id: &str) {
        if self.buckets.len() <= 1 {
            return;
        }
        let Some(pos) = self.buckets.iter().position(|b| b.id == bucket_id) else {
            return;
        };
        let bucket = self.buckets.remove(pos);
        self.pool.extend(bucket.game_ids);
        self.recolor();
    }

    /// Re-derive every bucket color from the fixed palette by position.
    /// Positions past the palette end repeat the last entry.
    fn recolor(&mut self) {
        for (i, bucket) in self.buckets.iter_mut().enumerate() {
            bucket.color = RANK_COLORS[i.min(RANK_COLORS.len() - 1)].to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BucketRole;

    fn game(id: &str) -> Game {
        Game {
            id: id.to_string(),
            name: format!("Game {id}"),
            image: format!("/games/{id}.jpg"),
        }
    }

    fn catalog(n: usize) -> Vec<Game> {
        (1..=n).map(|i| game(&format!("g{i}"))).collect()
    }

    /// Every catalog id appears in exactly one member sequence
    fn assert_partition(board: &Board, catalog: &[Game]) {
        let mut seen: Vec<&str> = board.pool().iter().map(String::as_str).collect();
        for bucket in board.buckets() {
            seen.extend(bucket.game_ids.iter().map(String::as_str));
        }
        assert_eq!(seen.len(), catalog.len(), "member count mismatch");
        for g in catalog {
            assert_eq!(
                seen.iter().filter(|id| **id == g.id).count(),
                1,
                "game {} should appear exactly once",
                g.id
            );
        }
    }

    #[test]
    fn test_culling_template() {
        let games = catalog(3);
        let board = Board::culling(&games);
        assert_eq!(board.buckets().len(), 3);
        assert_eq!(board.pool().len(), 3);
        assert_eq!(board.bucket("tier-keep").unwrap().role, BucketRole::Capped);
        assert_eq!(board.bucket("tier-s").unwrap().role, BucketRole::Standard);
        assert_partition(&board, &games);
    }

    #[test]
    fn test_ranking_template() {
        let games = catalog(2);
        let board = Board::ranking(&games);
        assert_eq!(board.buckets().len(), 7);
        let labels: Vec<&str> = board.buckets().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["S", "A", "B", "C", "D", "E", "F"]);
        for (bucket, color) in board.buckets().iter().zip(RANK_COLORS.iter()) {
            assert_eq!(bucket.color, *color);
        }
    }

    #[test]
    fn test_move_from_pool_to_bucket() {
        let games = catalog(3);
        let mut board = Board::ranking(&games);
        board.move_game("g2", POOL_ID, "tier-a");

        assert_eq!(board.pool(), ["g1", "g3"]);
        assert_eq!(board.bucket("tier-a").unwrap().game_ids, ["g2"]);
        assert_eq!(board.location_of("g2"), Some("tier-a"));
        assert_partition(&board, &games);
    }

    #[test]
    fn test_move_between_buckets_appends() {
        let games = catalog(3);
        let mut board = Board::ranking(&games);
        board.move_game("g1", POOL_ID, "tier-b");
        board.move_game("g2", POOL_ID, "tier-b");
        board.move_game("g3", POOL_ID, "tier-s");
        board.move_game("g3", "tier-s", "tier-b");

        assert_eq!(board.bucket("tier-b").unwrap().game_ids, ["g1", "g2", "g3"]);
        assert!(board.bucket("tier-s").unwrap().game_ids.is_empty());
        assert_partition(&board, &games);
    }

    #[test]
    fn test_move_to_same_container_is_noop() {
        let games = catalog(3);
        let mut board = Board::ranking(&games);
        board.move_game("g1", POOL_ID, "tier-c");
        let before = board.clone();

        board.move_game("g1", "tier-c", "tier-c");
        assert_eq!(board, before);

        board.move_game("g2", POOL_ID, POOL_ID);
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_to_unknown_target_is_noop() {
        let games = catalog(2);
        let mut board = Board::ranking(&games);
        let before = board.clone();

        board.move_game("g1", POOL_ID, "tier-x");
        assert_eq!(board, before);
    }

    #[test]
    fn test_rename_commits_trimmed_label() {
        let games = catalog(1);
        let mut board = Board::ranking(&games);
        board.rename_bucket("tier-s", "  Top Picks  ");
        assert_eq!(board.bucket("tier-s").unwrap().label, "Top Picks");
    }

    #[test]
    fn test_rename_ignores_blank_label() {
        let games = catalog(1);
        let mut board = Board::ranking(&games);
        board.rename_bucket("tier-s", "   ");
        assert_eq!(board.bucket("tier-s").unwrap().label, "S");
        board.rename_bucket("tier-s", "");
        assert_eq!(board.bucket("tier-s").unwrap().label, "S");
    }

    #[test]
    fn test_delete_migrates_members_and_recolors() {
        let games = catalog(4);
        let mut board = Board::seeded(
            vec![
                Bucket::new("a", "A", RANK_COLORS[0]),
                Bucket::new("b", "B", RANK_COLORS[1]),
                Bucket::new("c", "C", RANK_COLORS[2]),
            ],
            &games,
        );
        board.move_game("g1", POOL_ID, "b");
        board.move_game("g2", POOL_ID, "b");

        board.delete_bucket("b");

        assert!(board.bucket("b").is_none());
        assert_eq!(board.buckets().len(), 2);
        // Members appended to the pool in order
        assert_eq!(board.pool(), ["g3", "g4", "g1", "g2"]);
        // Remaining buckets recolored by new position
        assert_eq!(board.buckets()[0].color, RANK_COLORS[0]);
        assert_eq!(board.buckets()[1].color, RANK_COLORS[1]);
        assert_partition(&board, &games);
    }

    #[test]
    fn test_delete_last_bucket_is_noop() {
        let games = catalog(1);
        let mut board = Board::seeded(vec![Bucket::new("only", "Only", "#fff")], &games);
        board.delete_bucket("only");
        assert_eq!(board.buckets().len(), 1);
        assert!(board.bucket("only").is_some());
    }

    #[test]
    fn test_delete_unknown_bucket_is_noop() {
        let games = catalog(1);
        let mut board = Board::ranking(&games);
        let before = board.clone();
        board.delete_bucket("tier-x");
        assert_eq!(board, before);
    }

    #[test]
    fn test_recolor_overflow_repeats_last_entry() {
        let games = catalog(0);
        let buckets = (0..9)
            .map(|i| Bucket::new(&format!("b{i}"), &format!("B{i}"), "#000"))
            .collect();
        let mut board = Board::seeded(buckets, &games);
        board.delete_bucket("b0");

        let colors: Vec<&str> = board.buckets().iter().map(|b| b.color.as_str()).collect();
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[..7], RANK_COLORS);
        assert_eq!(colors[7], RANK_COLORS[6]);
    }

    #[test]
    fn test_delete_keeps_capped_role_on_survivors() {
        let games = catalog(2);
        let mut board = Board::culling(&games);
        board.delete_bucket("tier-sell");
        assert_eq!(board.bucket("tier-keep").unwrap().role, BucketRole::Capped);
    }
}
