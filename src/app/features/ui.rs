use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};
use crate::theme::Theme;
use std::time::Instant;
use tracing::info;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::CycleTheme => {
            state.palette_type = state.palette_type.next();
            state.theme = Theme::from_palette_type(state.palette_type);
            state.set_status(format!("Theme: {}", state.palette_type.label()));
            UpdateResult::Handled(None)
        }
        Action::Navigated(destination) => {
            info!(%destination, "view changed");
            state.current_view = destination.clone();
            UpdateResult::Handled(None)
        }
        Action::HandlerInvoked(handler) => {
            state.set_status(format!("Invoked {}", handler.0));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
