use crate::app::command::Command;
use crate::domain::catalog::EntryKind;
use crate::domain::query::ResultItem;
use crate::domain::recency::RecencyList;
use chrono::{DateTime, Local};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    Up,
    Down,
    Home,
    End,
    Enter,
    Escape,
}

/// Owns the highlighted position and the recency list.
///
/// Every method that depends on the result count takes `len`, the length of
/// the currently flattened results, so a stale index can never be used.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionController {
    active_index: usize,
    recency: RecencyList,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn recency(&self) -> &RecencyList {
        &self.recency
    }

    pub fn reset(&mut self) {
        self.active_index = 0;
    }

    pub fn move_next(&mut self, len: usize) {
        self.active_index = (self.active_index + 1) % len.max(1);
    }

    pub fn move_prev(&mut self, len: usize) {
        let len = len.max(1);
        self.active_index = (self.active_index % len + len - 1) % len;
    }

    pub fn move_first(&mut self) {
        self.active_index = 0;
    }

    pub fn move_last(&mut self, len: usize) {
        self.active_index = len.saturating_sub(1);
    }

    /// Pointer hover; positions outside the results are ignored.
    pub fn hover(&mut self, index: usize, len: usize) {
        if index < len {
            self.active_index = index;
        }
    }

    /// Pulls the index back into `[0, len)`. `None` when nothing is
    /// selectable.
    pub fn clamp(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.active_index = self.active_index.min(len - 1);
        Some(self.active_index)
    }

    /// Records `item` as most recent and returns the effect to dispatch.
    pub fn select(&mut self, item: &ResultItem, now: DateTime<Local>) -> Command {
        self.recency.record(Arc::clone(&item.entry), now);
        match &item.entry.kind {
            EntryKind::Navigation { destination } => Command::Navigate(destination.clone()),
            EntryKind::Action { handler } => Command::Invoke(handler.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CatalogEntry, HandlerRef};
    use proptest::prelude::*;

    fn item(entry: CatalogEntry) -> ResultItem {
        ResultItem {
            entry: Arc::new(entry),
            selected_at: None,
        }
    }

    #[test]
    fn test_move_next_wraps() {
        let mut sel = SelectionController::new();
        sel.move_last(3);
        assert_eq!(sel.active_index(), 2);
        sel.move_next(3);
        assert_eq!(sel.active_index(), 0);
    }

    #[test]
    fn test_move_prev_wraps() {
        let mut sel = SelectionController::new();
        sel.move_prev(3);
        assert_eq!(sel.active_index(), 2);
        sel.move_prev(3);
        assert_eq!(sel.active_index(), 1);
    }

    #[test]
    fn test_moves_on_empty_results_stay_at_zero() {
        let mut sel = SelectionController::new();
        sel.move_next(0);
        assert_eq!(sel.active_index(), 0);
        sel.move_prev(0);
        assert_eq!(sel.active_index(), 0);
        sel.move_last(0);
        assert_eq!(sel.active_index(), 0);
        assert_eq!(sel.clamp(0), None);
    }

    #[test]
    fn test_hover_ignores_out_of_range() {
        let mut sel = SelectionController::new();
        sel.hover(2, 3);
        assert_eq!(sel.active_index(), 2);
        sel.hover(7, 3);
        assert_eq!(sel.active_index(), 2);
    }

    #[test]
    fn test_clamp_pulls_stale_index_back() {
        let mut sel = SelectionController::new();
        sel.move_last(10);
        assert_eq!(sel.clamp(4), Some(3));
        assert_eq!(sel.active_index(), 3);
    }

    #[test]
    fn test_select_dispatches_by_kind() {
        let mut sel = SelectionController::new();
        let now = Local::now();

        let nav = item(CatalogEntry::navigation("jobs", "Jobs", "/jobs"));
        assert_eq!(sel.select(&nav, now), Command::Navigate("/jobs".to_string()));

        let act = item(CatalogEntry::action("quit", "Quit", "app.quit"));
        assert_eq!(
            sel.select(&act, now),
            Command::Invoke(HandlerRef("app.quit".to_string()))
        );

        let recent: Vec<_> = sel.recency().ids().into_iter().map(|i| i.0.clone()).collect();
        assert_eq!(recent, vec!["quit", "jobs"]);
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_range(len in 1usize..20, moves in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut sel = SelectionController::new();
            for down in moves {
                if down {
                    sel.move_next(len);
                } else {
                    sel.move_prev(len);
                }
                prop_assert!(sel.active_index() < len);
            }
        }
    }
}
