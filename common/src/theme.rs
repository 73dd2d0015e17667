use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// light/dark preference
//
// the stored value is the bare string "light" or "dark" under THEME_STORAGE_KEY, which is
// what pages rendered before this crate already wrote, so existing preferences carry over

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

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

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other:?}"))),
        }
    }
}

// startup policy: a stored preference wins, then whatever class the page was served with,
// then light
pub fn resolve_initial(stored: Option<&str>, root_has_dark: bool) -> Theme {
    if let Some(value) = stored {
        match value.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(err) => tracing::warn!("ignoring stored theme: {err}"),
        }
    }

    if root_has_dark { Theme::Dark } else { Theme::Light }
}

// key/value storage the preference lives in
//
// errors are plain strings since the browser only hands back opaque js values
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
}

// a missing or failing store reads as no preference
pub fn load_theme<S: PreferenceStore>(store: Option<&S>) -> Option<String> {
    let Some(store) = store else {
        tracing::warn!("preference storage unavailable, using page default");
        return None;
    };

    store.get_item(THEME_STORAGE_KEY).unwrap_or_else(|err| {
        tracing::error!("failed to read {THEME_STORAGE_KEY}: {err}");
        None
    })
}

// returns whether the preference was written
pub fn save_theme<S: PreferenceStore>(store: Option<&S>, theme: Theme) -> bool {
    let Some(store) = store else {
        tracing::warn!("preference storage unavailable, {theme} not saved");
        return false;
    };

    match store.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("failed to write {THEME_STORAGE_KEY}: {err}");
            false
        }
    }
}
