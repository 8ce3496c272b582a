//! UI Components
//!
//! Reusable Leptos components.

mod bucket_row;
mod culling_page;
mod delete_confirm_button;
mod drag_overlay;
mod game_chip;
mod mode_tab_bar;
mod notice;
mod pool;
mod tier_list_page;

pub use bucket_row::BucketRow;
pub use culling_page::CullingPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drag_overlay::DragOverlay;
pub use game_chip::GameChip;
pub use mode_tab_bar::ModeTabBar;
pub use notice::NoticeToast;
pub use pool::Pool;
pub use tier_list_page::TierListPage;
