use serde::{Deserialize, Serialize};

/// Display mode shared by every section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Class placed on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some(DARK_CLASS),
            Theme::Light => None,
        }
    }

    /// Selects the style variant for the current theme.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    pub fn label(self) -> &'static str {
        self.pick("Switch to light mode", "Switch to dark mode")
    }
}
