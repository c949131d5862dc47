use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    palette::PaletteKey,
    state::{AppMode, AppState},
};
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            state.palette.toggle();
            sync_mode(state);
            debug!(open = state.palette.is_open(), "palette toggled");
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => UpdateResult::Handled(key(state, PaletteKey::Escape)),
        Action::PaletteInput(c) => {
            if state.palette.is_open() {
                state.palette.push_char(*c);
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteBackspace => {
            if state.palette.is_open() {
                state.palette.backspace();
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => UpdateResult::Handled(key(state, PaletteKey::Down)),
        Action::PalettePrev => UpdateResult::Handled(key(state, PaletteKey::Up)),
        Action::PaletteFirst => UpdateResult::Handled(key(state, PaletteKey::Home)),
        Action::PaletteLast => UpdateResult::Handled(key(state, PaletteKey::End)),
        Action::PaletteSelect => UpdateResult::Handled(key(state, PaletteKey::Enter)),
        Action::PaletteHover(idx) => {
            if state.palette.is_open() {
                state.palette.hover(*idx);
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteClick(idx) => {
            if !state.palette.is_open() {
                return UpdateResult::Handled(None);
            }
            let command = state.palette.click(*idx);
            if let Some(cmd) = &command {
                info!(index = idx, ?cmd, "palette selection by click");
            }
            sync_mode(state);
            UpdateResult::Handled(command)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn key(state: &mut AppState, key: PaletteKey) -> Option<Command> {
    if !state.palette.is_open() {
        return None;
    }

    let chosen = match key {
        PaletteKey::Enter => state.palette.active_item().map(|i| i.entry.id.clone()),
        _ => None,
    };
    let command = state.palette.handle_key(key);
    if let (Some(id), Some(cmd)) = (chosen, &command) {
        info!(entry = %id.0, ?cmd, "palette selection");
    }

    sync_mode(state);
    command
}

/// Keeps the app mode in step with palette visibility.
fn sync_mode(state: &mut AppState) {
    if state.palette.is_open() {
        state.mode = AppMode::CommandPalette;
    } else if state.mode == AppMode::CommandPalette {
        state.mode = AppMode::Normal;
    }
}
