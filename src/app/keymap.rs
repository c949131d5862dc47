use super::action::Action;
use super::config::ConfigError;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DEFAULT_TOGGLE: &str = "ctrl+k";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub toggle_palette: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            toggle_palette: DEFAULT_TOGGLE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyMap {
    pub toggle_palette: KeyEvent,
    // Normal-mode bindings; the palette and help overlay decode their own keys.
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Result<Self, ConfigError> {
        let toggle_palette = parse_key_binding(&config.toggle_palette)?;
        Ok(Self::with_toggle(toggle_palette))
    }

    fn with_toggle(toggle_palette: KeyEvent) -> Self {
        let mut global = HashMap::new();

        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(key(KeyCode::Char(':')), Action::TogglePalette);
        global.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(key(KeyCode::Char('t')), Action::CycleTheme);
        global.insert(toggle_palette, Action::TogglePalette);

        Self {
            toggle_palette,
            global,
        }
    }

    /// The toggle binding wins in every mode; everything else only applies
    /// in normal mode.
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        if event == self.toggle_palette {
            return Some(Action::TogglePalette);
        }
        if mode == AppMode::Normal {
            return self.global.get(&event).cloned();
        }
        None
    }

    /// Human readable form of the toggle binding, e.g. "Ctrl+K".
    #[must_use]
    pub fn toggle_label(&self) -> String {
        describe_key(&self.toggle_palette)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::with_toggle(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL))
    }
}

/// Parses bindings such as `ctrl+k`, `alt+p` or `ctrl+shift+f1`.
pub fn parse_key_binding(binding: &str) -> Result<KeyEvent, ConfigError> {
    let invalid = || ConfigError::InvalidKeyBinding(binding.to_string());

    let lowered = binding.trim().to_lowercase();
    let mut parts: Vec<&str> = lowered.split('+').map(str::trim).collect();
    let key_part = parts.pop().filter(|p| !p.is_empty()).ok_or_else(invalid)?;

    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" | "meta" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return Err(invalid()),
        }
    }

    let code = match key_part {
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().map_err(|_| invalid())?;
            if !(1..=12).contains(&n) {
                return Err(invalid());
            }
            KeyCode::F(n)
        }
        single => {
            let mut chars = single.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(invalid()),
            }
        }
    };

    // The toggle is checked before palette text input, so a printable
    // binding would be untypeable in the query.
    if matches!(code, KeyCode::Char(_))
        && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Err(invalid());
    }

    Ok(KeyEvent::new(code, modifiers))
}

fn describe_key(event: &KeyEvent) -> String {
    let mut parts = Vec::new();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    parts.push(match event.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        other => format!("{other:?}"),
    });
    parts.join("+")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}
