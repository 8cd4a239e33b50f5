use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::approach::Approach;

/// Maximum characters of case text kept in a generated session summary.
pub const CASE_SUMMARY_LIMIT: usize = 100;

/// Maximum characters of case text kept in a crisis session summary.
pub const CRISIS_SUMMARY_LIMIT: usize = 50;

/// Approach label recorded for crisis-halted sessions.
pub const CRISIS_APPROACH_LABEL: &str = "CRISIS INTERVENTION";

/// One completed request/response cycle, kept in the in-memory session log
/// for the lifetime of the process. Not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    /// Display label of the approach, or [`CRISIS_APPROACH_LABEL`] for
    /// crisis-halted sessions.
    pub approach: String,
    pub case_summary: String,
    pub recommendations: String,
    pub outcome: SessionOutcome,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    Generated,
    CrisisHalted,
}

impl SessionRecord {
    /// Record a session whose suggestions were generated by the model.
    pub fn generated(approach: Approach, case_text: &str, recommendations: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: jiff::Timestamp::now(),
            approach: approach.label().to_string(),
            case_summary: summarize(case_text, CASE_SUMMARY_LIMIT),
            recommendations,
            outcome: SessionOutcome::Generated,
        }
    }

    /// Record a session halted by crisis screening. No model output exists;
    /// the recommendations field carries a fixed halt notice.
    pub fn crisis(case_text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: jiff::Timestamp::now(),
            approach: CRISIS_APPROACH_LABEL.to_string(),
            case_summary: format!(
                "CRISIS DETECTED - {}",
                summarize(case_text, CRISIS_SUMMARY_LIMIT)
            ),
            recommendations: "Session halted - emergency protocols activated".to_string(),
            outcome: SessionOutcome::CrisisHalted,
        }
    }
}

/// Truncate `text` to at most `limit` characters, appending `...` when
/// anything was cut. Operates on characters, not bytes, so multi-byte
/// input never splits a code point.
pub fn summarize(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

/// Append-only in-memory session history. The UI shows the most recent
/// entries; older ones stay addressable by id until the process exits.
#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<SessionRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: SessionRecord) {
        self.entries.push(record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `n` records, newest first.
    pub fn recent(&self, n: usize) -> Vec<&SessionRecord> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn get(&self, id: Uuid) -> Option<&SessionRecord> {
        self.entries.iter().find(|r| r.id == id)
    }
}
