use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let UpdateResult::Handled(cmd) = features::palette::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::ui::update(state, &action) {
        return cmd;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::KeyMap;
    use crate::app::state::AppMode;
    use crate::domain::builtin::builtin_entries;
    use crate::domain::catalog::Catalog;
    use crate::domain::query::GroupId;
    use crate::theme::PaletteType;
    use std::sync::Arc;

    #[test]
    fn test_recent_group_after_selection() {
        let catalog = Arc::new(Catalog::new(builtin_entries()).unwrap());
        let mut state = AppState::new(catalog, KeyMap::default(), PaletteType::default());

        update(&mut state, Action::TogglePalette);
        for c in "payroll".chars() {
            update(&mut state, Action::PaletteInput(c));
        }
        let cmd = update(&mut state, Action::PaletteSelect);
        assert_eq!(
            cmd,
            Some(Command::Navigate("/employee/hr/payroll".to_string()))
        );
        assert_eq!(state.mode, AppMode::Normal);

        update(&mut state, Action::TogglePalette);
        let first = &state.palette.groups()[0];
        assert_eq!(first.id, GroupId::Recent);
        assert_eq!(first.entries[0].entry.id.as_str(), "payroll");
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
