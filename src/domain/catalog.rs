use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(pub String);

impl EntryId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of a side-effecting operation the host knows how to run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerRef(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Navigation { destination: String },
    Action { handler: HandlerRef },
}

impl EntryKind {
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(self, EntryKind::Navigation { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    pub subtitle: Option<String>,
    pub keywords: Vec<String>,
    pub icon: Option<String>,
    pub kind: EntryKind,
}

impl CatalogEntry {
    pub fn navigation(
        id: impl Into<String>,
        title: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            id,
            title,
            EntryKind::Navigation {
                destination: destination.into(),
            },
        )
    }

    pub fn action(
        id: impl Into<String>,
        title: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            id,
            title,
            EntryKind::Action {
                handler: HandlerRef(handler.into()),
            },
        )
    }

    fn with_kind(id: impl Into<String>, title: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            id: EntryId(id.into()),
            title: title.into(),
            subtitle: None,
            keywords: Vec::new(),
            icon: None,
            kind,
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog entry id `{0}`")]
    DuplicateId(String),
    #[error("catalog entry `{0}` has an empty id")]
    EmptyId(String),
}

/// The read-only set of destinations and actions the palette can reach.
///
/// Entries keep their declaration order; that order is the display order
/// within each result group.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Arc<CatalogEntry>>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut stored = Vec::new();

        for entry in entries {
            if entry.id.0.trim().is_empty() {
                return Err(CatalogError::EmptyId(entry.title));
            }
            if !seen.insert(entry.id.clone()) {
                return Err(CatalogError::DuplicateId(entry.id.0));
            }
            stored.push(Arc::new(entry));
        }

        Ok(Self { entries: stored })
    }

    #[must_use]
    pub fn entries(&self) -> &[Arc<CatalogEntry>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<CatalogEntry>> {
        self.entries.iter().find(|e| e.id.0 == id)
    }

    /// First navigation entry that targets `destination`.
    #[must_use]
    pub fn find_destination(&self, destination: &str) -> Option<&Arc<CatalogEntry>> {
        self.entries.iter().find(|e| match &e.kind {
            EntryKind::Navigation { destination: d } => d == destination,
            EntryKind::Action { .. } => false,
        })
    }
}

#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring match against title, subtitle and keywords.
/// An empty (or all-whitespace) query matches everything.
#[must_use]
pub fn matches(entry: &CatalogEntry, query: &str) -> bool {
    matches_normalized(entry, &normalize_query(query))
}

pub(crate) fn matches_normalized(entry: &CatalogEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    if entry.title.to_lowercase().contains(query) {
        return true;
    }

    if let Some(subtitle) = &entry.subtitle {
        if subtitle.to_lowercase().contains(query) {
            return true;
        }
    }

    entry
        .keywords
        .iter()
        .any(|k| k.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> CatalogEntry {
        CatalogEntry::navigation("jobs", "Jobs", "/employee/workspace/jobs")
            .subtitle("Open requisitions")
            .keywords(["positions", "reqs"])
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches(&jobs(), ""));
        assert!(matches(&jobs(), "   "));
    }

    #[test]
    fn test_matches_title_subtitle_and_keywords() {
        let entry = jobs();
        assert!(matches(&entry, "JOB"));
        assert!(matches(&entry, "requisitions"));
        assert!(matches(&entry, "posi"));
        assert!(matches(&entry, "  Reqs "));
        assert!(!matches(&entry, "zzz"));
    }

    #[test]
    fn test_missing_subtitle_and_keywords_only_match_title() {
        let entry = CatalogEntry::action("quit", "Quit", "app.quit");
        assert!(matches(&entry, "qu"));
        assert!(!matches(&entry, "exit"));
    }

    #[test]
    fn test_icon_is_never_matched() {
        let entry = CatalogEntry::action("quit", "Quit", "app.quit").icon("power");
        assert!(!matches(&entry, "power"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = Catalog::new([jobs(), jobs()]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("jobs".to_string()));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let err = Catalog::new([CatalogEntry::navigation(" ", "Blank", "/")]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyId("Blank".to_string()));
    }

    #[test]
    fn test_catalog_preserves_declaration_order() {
        let catalog = Catalog::new([
            CatalogEntry::navigation("b", "B", "/b"),
            CatalogEntry::navigation("a", "A", "/a"),
        ])
        .unwrap();
        let ids: Vec<_> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.find_destination("/a").unwrap().id.as_str(), "a");
        assert!(catalog.get("missing").is_none());
    }
}
