//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. Both workflow
//! boards live here so switching tabs never loses assignments.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::models::Game;

/// The two workflow variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keep/Sell triage with a capacity-limited Keep bucket
    #[default]
    Culling,
    /// Open-ended S..F tier ranking
    Ranking,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Immutable game catalog, loaded once at startup
    pub games: Vec<Game>,
    /// Culling workflow board
    pub culling: Board,
    /// Tier-list workflow board
    pub ranking: Board,
}

impl AppState {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            culling: Board::culling(&games),
            ranking: Board::ranking(&games),
            games,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Rename a bucket on the given workflow's board
pub fn store_rename_bucket(store: &AppStore, mode: Mode, bucket_id: &str, label: &str) {
    match mode {
        Mode::Culling => store.culling().write().rename_bucket(bucket_id, label),
        Mode::Ranking => store.ranking().write().rename_bucket(bucket_id, label),
    }
}

/// Delete a bucket on the given workflow's board, migrating members to the pool
pub fn store_delete_bucket(store: &AppStore, mode: Mode, bucket_id: &str) {
    match mode {
        Mode::Culling => store.culling().write().delete_bucket(bucket_id),
        Mode::Ranking => store.ranking().write().delete_bucket(bucket_id),
    }
}
