//! Drag Protocol Controller
//!
//! Interprets pick-up/drop gestures into board mutations. A gesture runs
//! Idle -> Dragging -> Idle to completion on the UI thread before the next
//! one is dispatched, so the controller never sees overlapping gestures.

use crate::board::Board;
use crate::models::BucketRole;

/// Default maximum occupancy for the capacity-limited bucket
pub const DEFAULT_KEEP_MAX: usize = 25;
/// User-adjustable bounds for the capacity limit
pub const KEEP_MAX_MIN: usize = 1;
pub const KEEP_MAX_MAX: usize = 200;

/// Outcome of a completed drop gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Assignment committed from one container to another
    Committed { from: String, to: String },
    /// Released outside every droppable region, or no gesture was active
    Cancelled,
    /// Target equals the game's current container
    SamePlace,
    /// Target is capacity-limited and already at its maximum
    Rejected { label: String, max: usize },
}

/// Gesture state machine: Idle (no active game) or Dragging (active game id
/// recorded on pick-up, cleared on every drop path).
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<String>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter Dragging, recording the picked-up game. No board effect.
    pub fn pick_up(&mut self, game_id: String) {
        self.active = Some(game_id);
    }

    /// The game currently held, if any
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Complete the gesture against `target` and return to Idle.
    ///
    /// The source container is the game's last known location. A drop into a
    /// capacity-limited bucket already holding `keep_max` members is rejected
    /// with the board untouched; the outcome carries the bucket label and the
    /// configured maximum for the notice channel.
    pub fn drop_on(
        &mut self,
        board: &mut Board,
        target: Option<&str>,
        keep_max: usize,
    ) -> DropOutcome {
        let Some(game_id) = self.active.take() else {
            return DropOutcome::Cancelled;
        };
        let Some(target_id) = target else {
            return DropOutcome::Cancelled;
        };
        let Some(source_id) = board.location_of(&game_id).map(str::to_string) else {
            // Stale gesture: the game is not on this board
            return DropOutcome::Cancelled;
        };
        if source_id == target_id {
            return DropOutcome::SamePlace;
        }
        if let Some(bucket) = board.bucket(target_id) {
            // Occupancy before the prospective move: at max already rejects
            if bucket.role == BucketRole::Capped && bucket.game_ids.len() >= keep_max {
                return DropOutcome::Rejected {
                    label: bucket.label.clone(),
                    max: keep_max,
                };
            }
        } else if target_id != crate::board::POOL_ID {
            // Target bucket disappeared mid-gesture
            return DropOutcome::Cancelled;
        }
        board.move_game(&game_id, &source_id, target_id);
        DropOutcome::Committed {
            from: source_id,
            to: target_id.to_string(),
        }
    }
}
