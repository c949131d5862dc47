use super::keymap::KeyMap;
use super::palette::PaletteState;
use crate::domain::builtin::HOME_DESTINATION;
use crate::domain::catalog::Catalog;
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Browsing the current view
    CommandPalette, // Searching the catalog
    Help,           // Showing the help overlay
}

#[derive(Debug, Clone)]
pub struct AppState {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub status_message: Option<String>, // "Invoked jobs.create"
    pub status_clear_time: Option<Instant>,

    // --- Host View ---
    pub current_view: String,

    // --- Command Palette ---
    pub palette: PaletteState,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, keymap: KeyMap, palette_type: PaletteType) -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            status_message: None,
            status_clear_time: None,
            current_view: HOME_DESTINATION.to_string(),
            palette: PaletteState::new(catalog),
            frame_count: 0,
            keymap: Arc::new(keymap),
            palette_type,
            theme: Theme::from_palette_type(palette_type),
        }
    }

    /// Title of the catalog entry for the current view, if there is one.
    #[must_use]
    pub fn current_view_title(&self) -> Option<&str> {
        self.palette
            .catalog()
            .find_destination(&self.current_view)
            .map(|e| e.title.as_str())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(Catalog::default()),
            KeyMap::default(),
            PaletteType::default(),
        )
    }
}
