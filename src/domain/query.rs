use super::catalog::{matches_normalized, normalize_query, Catalog, CatalogEntry, EntryKind};
use super::recency::RecencyList;
use chrono::{DateTime, Local};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupId {
    Recent,
    Navigation,
    Actions,
}

impl GroupId {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GroupId::Recent => "Recent",
            GroupId::Navigation => "Navigation",
            GroupId::Actions => "Actions",
        }
    }
}

/// One displayed row. `selected_at` is set only for rows in the Recent group.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    pub entry: Arc<CatalogEntry>,
    pub selected_at: Option<DateTime<Local>>,
}

impl ResultItem {
    #[must_use]
    pub fn is_recent(&self) -> bool {
        self.selected_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup {
    pub id: GroupId,
    pub label: &'static str,
    pub entries: Vec<ResultItem>,
}

impl ResultGroup {
    fn new(id: GroupId, entries: Vec<ResultItem>) -> Self {
        Self {
            id,
            label: id.label(),
            entries,
        }
    }
}

/// Builds the groups shown for `query`, in Recent → Navigation → Actions
/// order. Empty groups are left out; an empty result means "no results".
#[must_use]
pub fn compute_groups(query: &str, recency: &RecencyList, catalog: &Catalog) -> Vec<ResultGroup> {
    let q = normalize_query(query);
    let mut groups = Vec::with_capacity(3);

    // Recent only appears on the unfiltered view.
    if q.is_empty() && !recency.is_empty() {
        let recent = recency
            .iter()
            .map(|r| ResultItem {
                entry: Arc::clone(&r.entry),
                selected_at: Some(r.selected_at),
            })
            .collect();
        groups.push(ResultGroup::new(GroupId::Recent, recent));
    }

    let mut navigation = Vec::new();
    let mut actions = Vec::new();
    for entry in catalog.entries() {
        if !matches_normalized(entry, &q) {
            continue;
        }
        let item = ResultItem {
            entry: Arc::clone(entry),
            selected_at: None,
        };
        match entry.kind {
            EntryKind::Navigation { .. } => navigation.push(item),
            EntryKind::Action { .. } => actions.push(item),
        }
    }

    if !navigation.is_empty() {
        groups.push(ResultGroup::new(GroupId::Navigation, navigation));
    }
    if !actions.is_empty() {
        groups.push(ResultGroup::new(GroupId::Actions, actions));
    }

    groups
}

/// Concatenates the groups in display order; the index space for keyboard
/// selection.
#[must_use]
pub fn flatten(groups: &[ResultGroup]) -> Vec<&ResultItem> {
    groups.iter().flat_map(|g| g.entries.iter()).collect()
}

#[must_use]
pub fn flat_len(groups: &[ResultGroup]) -> usize {
    groups.iter().map(|g| g.entries.len()).sum()
}

#[must_use]
pub fn item_at(groups: &[ResultGroup], index: usize) -> Option<&ResultItem> {
    groups.iter().flat_map(|g| g.entries.iter()).nth(index)
}
