use crate::app::command::Command;
use crate::domain::catalog::HandlerRef;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Command Palette ---
    TogglePalette,       // Global toggle (Ctrl+K by default)
    ClosePalette,        // Esc
    PaletteInput(char),  // Append to the query
    PaletteBackspace,    // Remove the last query character
    PaletteNext,         // Down
    PalettePrev,         // Up
    PaletteFirst,        // Home
    PaletteLast,         // End
    PaletteHover(usize), // Pointer over a flattened position
    PaletteClick(usize), // Pointer click on a flattened position
    PaletteSelect,       // Enter

    // --- Shell ---
    ToggleHelp,
    CycleTheme,

    // --- Dispatch Results (sent back by the host dispatcher) ---
    Navigated(String),
    HandlerInvoked(HandlerRef),
}
