use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::footer::palette_hint_area;
use crate::components::modals::command_palette::{hit_test, PaletteHit};
use crate::components::modals::helpers::contains;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(event: Event, app_state: &AppState, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if let Some(action) = app_state.keymap.get_action(key, app_state.mode) {
                return Some(action);
            }

            match app_state.mode {
                AppMode::CommandPalette => match key.code {
                    KeyCode::Esc => Some(Action::ClosePalette),
                    KeyCode::Down => Some(Action::PaletteNext),
                    KeyCode::Up => Some(Action::PalettePrev),
                    KeyCode::Home => Some(Action::PaletteFirst),
                    KeyCode::End => Some(Action::PaletteLast),
                    KeyCode::Enter => Some(Action::PaletteSelect),
                    KeyCode::Backspace => Some(Action::PaletteBackspace),
                    KeyCode::Char(c)
                        if !key
                            .modifiers
                            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                    {
                        Some(Action::PaletteInput(c))
                    }
                    _ => None,
                },
                AppMode::Help => match key.code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                        Some(Action::ToggleHelp)
                    }
                    _ => None,
                },
                // The keymap already covered normal mode.
                AppMode::Normal => None,
            }
        }
        Event::Mouse(mouse) => match app_state.mode {
            AppMode::CommandPalette => {
                let hit = hit_test(&app_state.palette, area, mouse.column, mouse.row);
                match (mouse.kind, hit) {
                    (MouseEventKind::Moved, PaletteHit::Entry(idx)) => {
                        Some(Action::PaletteHover(idx))
                    }
                    (MouseEventKind::Down(MouseButton::Left), PaletteHit::Entry(idx)) => {
                        Some(Action::PaletteClick(idx))
                    }
                    (MouseEventKind::Down(_), PaletteHit::Outside) => Some(Action::ClosePalette),
                    (MouseEventKind::ScrollUp, _) => Some(Action::PalettePrev),
                    (MouseEventKind::ScrollDown, _) => Some(Action::PaletteNext),
                    _ => None,
                }
            }
            AppMode::Help => match mouse.kind {
                MouseEventKind::Down(_) => Some(Action::ToggleHelp),
                _ => None,
            },
            AppMode::Normal => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let footer = ui::get_layout(area).footer;
                    let hint = palette_hint_area(footer, &app_state.keymap.toggle_label());
                    contains(hint, mouse.column, mouse.row).then_some(Action::TogglePalette)
                }
                _ => None,
            },
        },
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}
