use dioxus::prelude::*;
use std::str::FromStr;

use crate::shared::constants::{PREFERS_DARK_QUERY, THEME_STORAGE_KEY};
use crate::shared::dom;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{self, LogOperation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Class set on `<html>`; also the persisted value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred { Theme::Dark } else { Theme::Light }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AppError::UnknownTheme(other.to_string())),
        }
    }
}

/// Current theme, restored on mount from localStorage, else from the
/// system color-scheme preference.
pub fn use_theme() -> Signal<Theme> {
    let mut current_theme = use_signal(|| Theme::Light);

    use_effect(move || {
        let stored = dom::local_storage_get(THEME_STORAGE_KEY);
        if let Err(err) = &stored {
            logging::log_dom_miss(LogOperation::Theme, err);
        }
        let prefers_dark = dom::media_matches(PREFERS_DARK_QUERY).unwrap_or(false);

        let theme = initial_theme(stored, prefers_dark);
        apply_theme(theme);
        current_theme.set(theme);
    });

    current_theme
}

/// Saved choice wins; blocked or unreadable storage and unknown values fall
/// back to the system preference.
pub fn initial_theme(stored: Result<Option<String>>, prefers_dark: bool) -> Theme {
    stored
        .ok()
        .flatten()
        .and_then(|saved| saved.parse::<Theme>().ok())
        .unwrap_or_else(|| Theme::system_default(prefers_dark))
}

/// Put the theme class on the document root.
pub fn apply_theme(theme: Theme) {
    let all: Vec<&str> = Theme::ALL.iter().map(Theme::as_str).collect();
    match dom::set_root_class(theme.as_str(), &all) {
        Ok(()) => logging::log_theme_applied(theme.as_str()),
        Err(err) => logging::log_dom_miss(LogOperation::Theme, &err),
    }
}

pub fn save_theme(theme: Theme) {
    if let Err(err) = dom::local_storage_set(THEME_STORAGE_KEY, theme.as_str()) {
        logging::log_dom_miss(LogOperation::Theme, &err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_parse_persisted_value() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("golden".parse::<Theme>().is_err());
    }

    #[test]
    fn test_saved_theme_wins_over_system() {
        assert_eq!(initial_theme(Ok(Some("dark".to_string())), false), Theme::Dark);
        assert_eq!(initial_theme(Ok(Some("light".to_string())), true), Theme::Light);
    }

    #[test]
    fn test_nothing_saved_uses_system_preference() {
        assert_eq!(initial_theme(Ok(None), true), Theme::Dark);
        assert_eq!(initial_theme(Ok(None), false), Theme::Light);
    }

    #[test]
    fn test_blocked_storage_uses_system_preference() {
        let blocked = Err(AppError::Js("SecurityError".to_string()));
        assert_eq!(initial_theme(blocked, true), Theme::Dark);
        assert_eq!(initial_theme(Err(AppError::WindowUnavailable), false), Theme::Light);
    }

    #[test]
    fn test_unknown_saved_value_uses_system_preference() {
        assert_eq!(initial_theme(Ok(Some("golden".to_string())), true), Theme::Dark);
    }

    #[test]
    fn test_system_default() {
        assert_eq!(Theme::system_default(true), Theme::Dark);
        assert_eq!(Theme::system_default(false), Theme::Light);
    }
}
