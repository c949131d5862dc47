pub mod selection;

pub use selection::{PaletteKey, SelectionController};

use crate::app::command::Command;
use crate::domain::catalog::Catalog;
use crate::domain::query::{self, ResultGroup, ResultItem};
use crate::domain::recency::RecencyList;
use chrono::{DateTime, Local};
use std::sync::Arc;

/// One palette session: visibility, the raw query and the groups derived
/// from it. Groups are recomputed whenever the query or recency changes.
#[derive(Debug, Clone)]
pub struct PaletteState {
    catalog: Arc<Catalog>,
    open: bool,
    query: String,
    groups: Vec<ResultGroup>,
    selection: SelectionController,
    // First visible results line; only moves when the active entry leaves the view
    scroll_offset: usize,
}

impl PaletteState {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut state = Self {
            catalog,
            open: false,
            query: String::new(),
            groups: Vec::new(),
            selection: SelectionController::new(),
            scroll_offset: 0,
        };
        state.refresh();
        state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn groups(&self) -> &[ResultGroup] {
        &self.groups
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.selection.active_index()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    #[must_use]
    pub fn recency(&self) -> &RecencyList {
        self.selection.recency()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        query::flat_len(&self.groups)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&ResultItem> {
        if self.is_empty() {
            return None;
        }
        let index = self.selection.active_index().min(self.len() - 1);
        query::item_at(&self.groups, index)
    }

    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.refresh();
    }

    /// Hides the palette and clears the query. Recency is left alone.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.refresh();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.refresh();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    pub fn handle_key(&mut self, key: PaletteKey) -> Option<Command> {
        let len = self.len();
        match key {
            PaletteKey::Down => self.selection.move_next(len),
            PaletteKey::Up => self.selection.move_prev(len),
            PaletteKey::Home => self.selection.move_first(),
            PaletteKey::End => self.selection.move_last(len),
            PaletteKey::Enter => return self.select_active(Local::now()),
            PaletteKey::Escape => self.close(),
        }
        None
    }

    pub fn hover(&mut self, index: usize) {
        let len = self.len();
        self.selection.hover(index, len);
    }

    pub fn click(&mut self, index: usize) -> Option<Command> {
        let len = self.len();
        if index >= len {
            return None;
        }
        self.selection.hover(index, len);
        self.select_active(Local::now())
    }

    /// Selects the highlighted entry, records it as recent and closes the
    /// session. Returns the effect for the host to dispatch.
    pub fn select_active(&mut self, now: DateTime<Local>) -> Option<Command> {
        let index = self.selection.clamp(self.len())?;
        let item = query::item_at(&self.groups, index)?.clone();
        let command = self.selection.select(&item, now);
        self.close();
        Some(command)
    }

    fn refresh(&mut self) {
        self.groups = query::compute_groups(&self.query, self.selection.recency(), &self.catalog);
        self.selection.reset();
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CatalogEntry, HandlerRef};
    use crate::domain::query::GroupId;

    fn palette() -> PaletteState {
        let catalog = Catalog::new([
            CatalogEntry::navigation("jobs", "Jobs", "/jobs").keywords(["positions"]),
            CatalogEntry::navigation("accounts", "Accounts", "/accounts"),
            CatalogEntry::action("quit", "Quit", "app.quit"),
        ])
        .unwrap();
        PaletteState::new(Arc::new(catalog))
    }

    fn recent_ids(p: &PaletteState) -> Vec<String> {
        p.recency().ids().into_iter().map(|i| i.0.clone()).collect()
    }

    fn select_by_id(p: &mut PaletteState, id: &str) -> Option<Command> {
        p.open();
        let index = query::flatten(p.groups())
            .iter()
            .position(|i| i.entry.id.as_str() == id)
            .unwrap();
        p.click(index)
    }

    #[test]
    fn test_typing_resets_active_index() {
        let mut p = palette();
        p.open();
        p.handle_key(PaletteKey::Down);
        assert_eq!(p.active_index(), 1);

        p.push_char('a');
        assert_eq!(p.active_index(), 0);
        assert_eq!(p.query(), "a");
    }

    #[test]
    fn test_arrow_down_wraps_from_last() {
        let mut p = palette();
        p.open();
        assert_eq!(p.len(), 3);
        p.handle_key(PaletteKey::End);
        assert_eq!(p.active_index(), 2);
        p.handle_key(PaletteKey::Down);
        assert_eq!(p.active_index(), 0);
        p.handle_key(PaletteKey::Up);
        assert_eq!(p.active_index(), 2);
        p.handle_key(PaletteKey::Home);
        assert_eq!(p.active_index(), 0);
    }

    #[test]
    fn test_enter_with_no_results_is_noop() {
        let mut p = palette();
        p.open();
        p.set_query("zzz");
        assert!(p.groups().is_empty());
        assert_eq!(p.handle_key(PaletteKey::Enter), None);
        assert!(p.is_open());
        assert!(p.recency().is_empty());
    }

    #[test]
    fn test_enter_selects_and_closes() {
        let mut p = palette();
        p.open();
        p.set_query("posi");
        let cmd = p.handle_key(PaletteKey::Enter);
        assert_eq!(cmd, Some(Command::Navigate("/jobs".to_string())));
        assert!(!p.is_open());
        assert_eq!(p.query(), "");
        assert_eq!(p.active_index(), 0);
        assert_eq!(recent_ids(&p), vec!["jobs"]);
    }

    #[test]
    fn test_escape_closes_without_touching_recency() {
        let mut p = palette();
        select_by_id(&mut p, "quit");
        p.open();
        p.set_query("acc");
        p.handle_key(PaletteKey::Escape);
        assert!(!p.is_open());
        assert_eq!(p.query(), "");
        assert_eq!(recent_ids(&p), vec!["quit"]);
    }

    #[test]
    fn test_toggle_while_open_matches_escape() {
        let mut p = palette();
        p.open();
        p.set_query("jo");
        p.toggle();
        assert!(!p.is_open());
        assert_eq!(p.query(), "");
        assert!(p.recency().is_empty());
    }

    #[test]
    fn test_selecting_recent_entry_promotes_it() {
        let mut p = palette();
        select_by_id(&mut p, "accounts");
        select_by_id(&mut p, "jobs");
        assert_eq!(recent_ids(&p), vec!["jobs", "accounts"]);

        // The Recent group leads the empty-query view.
        p.open();
        assert_eq!(p.groups()[0].id, GroupId::Recent);
        let cmd = p.click(1);
        assert_eq!(cmd, Some(Command::Navigate("/accounts".to_string())));
        assert_eq!(recent_ids(&p), vec!["accounts", "jobs"]);
    }

    #[test]
    fn test_action_entry_invokes_handler() {
        let mut p = palette();
        let cmd = select_by_id(&mut p, "quit");
        assert_eq!(
            cmd,
            Some(Command::Invoke(HandlerRef("app.quit".to_string())))
        );
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut p = palette();
        p.open();
        assert_eq!(p.click(99), None);
        assert!(p.is_open());
    }

    #[test]
    fn test_backspace_widens_results() {
        let mut p = palette();
        p.open();
        p.set_query("jobsx");
        assert!(p.is_empty());
        p.backspace();
        assert_eq!(p.len(), 1);
        assert_eq!(p.active_item().unwrap().entry.id.as_str(), "jobs");
    }

    #[test]
    fn test_query_edit_resets_scroll() {
        let mut p = palette();
        p.open();
        p.set_scroll_offset(2);
        p.push_char('j');
        assert_eq!(p.scroll_offset(), 0);
    }
}
