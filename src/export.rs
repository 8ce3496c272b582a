//! Export Snapshot
//!
//! Serializable view of the current partition. The core contract ends at
//! producing this structure; the caller picks the sink (the app writes the
//! JSON to the browser console).

use serde::Serialize;

use crate::board::Board;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSnapshot {
    pub id: String,
    pub label: String,
    pub color: String,
    pub member_ids: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSnapshot {
    pub count: usize,
    pub member_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub buckets: Vec<BucketSnapshot>,
    pub unassigned: PoolSnapshot,
}

pub fn snapshot(board: &Board) -> BoardSnapshot {
    BoardSnapshot {
        buckets: board
            .buckets()
            .iter()
            .map(|b| BucketSnapshot {
                id: b.id.clone(),
                label: b.label.clone(),
                color: b.color.clone(),
                member_ids: b.game_ids.clone(),
                count: b.game_ids.len(),
            })
            .collect(),
        unassigned: PoolSnapshot {
            count: board.pool().len(),
            member_ids: board.pool().to_vec(),
        },
    }
}
