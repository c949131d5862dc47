use super::catalog::{CatalogEntry, EntryId};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::Arc;

pub const MAX_RECENT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    pub entry: Arc<CatalogEntry>,
    pub selected_at: DateTime<Local>,
}

/// Most-recent-first list of selected entries, unique by id and capped at
/// [`MAX_RECENT`]. Lives for the session only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecencyList {
    entries: VecDeque<RecentEntry>,
}

impl RecencyList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `entry` to the front, dropping any older occurrence and
    /// whatever falls past the cap.
    pub fn record(&mut self, entry: Arc<CatalogEntry>, selected_at: DateTime<Local>) {
        self.entries.retain(|r| r.entry.id != entry.id);
        self.entries.push_front(RecentEntry { entry, selected_at });
        self.entries.truncate(MAX_RECENT);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecentEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&EntryId> {
        self.entries.iter().map(|r| &r.entry.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Short relative label such as "just now" or "5m ago".
#[must_use]
pub fn relative_label(selected_at: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = now.signed_duration_since(selected_at).num_seconds().max(0);
    match secs {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m ago", secs / 60),
        3600..=86_399 => format!("{}h ago", secs / 3600),
        _ => format!("{}d ago", secs / 86_400),
    }
}
