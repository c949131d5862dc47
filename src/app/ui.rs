use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::command_palette::sync_scroll;
use crate::components::modals::helpers::dim_area;
use crate::components::modals::{CommandPaletteModal, HelpModal};
use crate::components::view::ViewPanel;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    if app_state.mode == AppMode::CommandPalette {
        sync_scroll(&mut app_state.palette, area);
    }

    let app_state = &*app_state;
    let theme = &app_state.theme;
    let layout = get_layout(area);

    if layout.header.height > 0 {
        f.render_widget(
            Header {
                state: app_state,
                theme,
            },
            layout.header,
        );
    }

    if layout.body.width > 0 && layout.body.height > 0 {
        f.render_widget(
            ViewPanel {
                app_state,
                theme,
            },
            layout.body,
        );
    }

    if layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    // --- Overlays ---
    match app_state.mode {
        AppMode::CommandPalette => {
            dim_area(f.buffer_mut(), area);
            f.render_widget(
                CommandPaletteModal {
                    theme,
                    state: &app_state.palette,
                },
                area,
            );
        }
        AppMode::Help => {
            dim_area(f.buffer_mut(), area);
            let toggle_label = app_state.keymap.toggle_label();
            f.render_widget(
                HelpModal {
                    theme,
                    toggle_label: &toggle_label,
                },
                area,
            );
        }
        AppMode::Normal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{action::Action, reducer};
    use crate::domain::builtin::builtin_entries;
    use crate::domain::catalog::Catalog;
    use crate::app::keymap::KeyMap;
    use crate::theme::PaletteType;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn screen(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn state() -> AppState {
        let catalog = Catalog::new(builtin_entries()).unwrap();
        AppState::new(Arc::new(catalog), KeyMap::default(), PaletteType::default())
    }

    #[test]
    fn test_layout_reserves_header_and_footer() {
        let layout = get_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.body.height, 22);
    }

    #[test]
    fn test_home_view_shows_hint() {
        let text = screen(&mut state());
        assert!(text.contains("STAFFDESK"));
        assert!(text.contains("Command palette"));
        assert!(text.contains("Ctrl+K"));
    }

    #[test]
    fn test_open_palette_renders_groups() {
        let mut state = state();
        reducer::update(&mut state, Action::TogglePalette);
        let text = screen(&mut state);
        assert!(text.contains("COMMAND PALETTE"));
        assert!(text.contains("NAVIGATION"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = state();
        reducer::update(&mut state, Action::TogglePalette);
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
