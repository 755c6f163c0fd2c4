//! In-memory per-session generation history.
//!
//! A bounded append-only list per session: capacity 10, oldest evicted
//! first.  Owned by the transport layer; the generation pipeline never sees
//! it.  Entries live only as long as the process.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Most recent entries kept per session.
pub const HISTORY_CAPACITY: usize = 10;

/// One completed generation, as shown in `GET /history`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub platform: String,
    pub tone: String,
    /// Topic truncated for display.
    pub topic: String,
    pub length: String,
    pub tokens_used: u32,
}

/// Session-keyed rolling history.
#[derive(Debug, Default)]
pub struct HistoryStore {
    sessions: Mutex<HashMap<String, VecDeque<HistoryEntry>>>,
}

impl HistoryStore {
    /// Append an entry, evicting the oldest beyond capacity.
    pub fn record(&self, session_id: &str, entry: HistoryEntry) {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        let list = sessions.entry(session_id.to_owned()).or_default();
        if list.len() == HISTORY_CAPACITY {
            list.pop_front();
        }
        list.push_back(entry);
    }

    /// Snapshot of a session's history, oldest first.  Unknown session →
    /// empty list.
    pub fn list(&self, session_id: &str) -> Vec<HistoryEntry> {
        let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions
            .get(session_id)
            .map(|list| list.iter().cloned().collect())
            .unwrap_or_default()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
