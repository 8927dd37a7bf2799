//! User preferences, each persisted under its own key.

use serde::{Deserialize, Serialize};

use crate::error::JournalResult;
use crate::storage::{SHORTCUTS_KEY, StorageBackend, THEME_KEY, VISUAL_STYLE_KEY};

/// How cards are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    /// Plain text.
    #[default]
    Text,
    /// Drawn with styled boxes.
    Css,
    /// Emoji glyphs.
    Emoji,
    /// Card images from a remote API.
    Api,
}

impl VisualStyle {
    /// All styles.
    pub const ALL: [Self; 4] = [Self::Text, Self::Css, Self::Emoji, Self::Api];

    /// Parse a style key.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "css" => Some(Self::Css),
            "emoji" => Some(Self::Emoji),
            "api" => Some(Self::Api),
            _ => None,
        }
    }

    /// The stored key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Css => "css",
            Self::Emoji => "emoji",
            Self::Api => "api",
        }
    }
}

impl std::fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Parse a theme key.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The stored key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// All user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Card rendering style.
    pub visual_style: VisualStyle,
    /// Chosen theme; `None` follows the system.
    pub theme: Option<Theme>,
    /// Whether keyboard shortcut hints are shown.
    pub shortcuts_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            visual_style: VisualStyle::Text,
            theme: None,
            shortcuts_enabled: true,
        }
    }
}

impl Preferences {
    /// Load every preference. Missing or unreadable values take their default.
    pub fn load<B: StorageBackend + ?Sized>(backend: &B) -> Self {
        let defaults = Self::default();
        Self {
            visual_style: read_scalar(backend, VISUAL_STYLE_KEY, VisualStyle::parse)
                .unwrap_or(defaults.visual_style),
            theme: read_scalar(backend, THEME_KEY, Theme::parse),
            shortcuts_enabled: read_scalar(backend, SHORTCUTS_KEY, |s| s.parse::<bool>().ok())
                .unwrap_or(defaults.shortcuts_enabled),
        }
    }

    /// Persist the visual style.
    pub fn save_visual_style<B: StorageBackend + ?Sized>(&self, backend: &B) -> JournalResult<()> {
        write_scalar(backend, VISUAL_STYLE_KEY, self.visual_style.key())
    }

    /// Persist the theme, removing the key when unset.
    pub fn save_theme<B: StorageBackend + ?Sized>(&self, backend: &B) -> JournalResult<()> {
        match self.theme {
            Some(theme) => write_scalar(backend, THEME_KEY, theme.key()),
            None => backend.remove(THEME_KEY),
        }
    }

    /// Persist the shortcuts flag.
    pub fn save_shortcuts<B: StorageBackend + ?Sized>(&self, backend: &B) -> JournalResult<()> {
        write_scalar(backend, SHORTCUTS_KEY, if self.shortcuts_enabled { "true" } else { "false" })
    }

    /// Persist every preference.
    pub fn save<B: StorageBackend + ?Sized>(&self, backend: &B) -> JournalResult<()> {
        self.save_visual_style(backend)?;
        self.save_theme(backend)?;
        self.save_shortcuts(backend)
    }
}

/// Scalars are stored as JSON strings; bare legacy values are accepted too.
fn read_scalar<B, T>(backend: &B, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T>
where
    B: StorageBackend + ?Sized,
{
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("could not read preference '{key}': {e}");
            return None;
        }
    };
    let text = serde_json::from_str::<serde_json::Value>(&raw)
        .ok()
        .map(|v| match v {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .unwrap_or_else(|| raw.trim().to_string());
    let value = parse(&text);
    if value.is_none() {
        log::warn!("ignoring unreadable preference '{key}': {raw}");
    }
    value
}

fn write_scalar<B: StorageBackend + ?Sized>(backend: &B, key: &str, value: &str) -> JournalResult<()> {
    backend.write(key, &serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemBackend;

    #[test]
    fn defaults_when_nothing_stored() {
        let prefs = Preferences::load(&MemBackend::new());
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.visual_style, VisualStyle::Text);
        assert!(prefs.shortcuts_enabled);
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn save_and_load() {
        let backend = MemBackend::new();
        let prefs = Preferences {
            visual_style: VisualStyle::Emoji,
            theme: Some(Theme::Dark),
            shortcuts_enabled: false,
        };
        prefs.save(&backend).unwrap();
        assert_eq!(Preferences::load(&backend), prefs);
        assert_eq!(backend.read(VISUAL_STYLE_KEY).unwrap().as_deref(), Some("\"emoji\""));
    }

    #[test]
    fn unset_theme_removes_key() {
        let backend = MemBackend::new();
        backend.insert(THEME_KEY, "\"light\"");
        Preferences::default().save_theme(&backend).unwrap();
        assert_eq!(backend.read(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn bare_legacy_values_load() {
        let backend = MemBackend::new();
        backend.insert(VISUAL_STYLE_KEY, "css");
        backend.insert(THEME_KEY, "dark");
        backend.insert(SHORTCUTS_KEY, "false");
        let prefs = Preferences::load(&backend);
        assert_eq!(prefs.visual_style, VisualStyle::Css);
        assert_eq!(prefs.theme, Some(Theme::Dark));
        assert!(!prefs.shortcuts_enabled);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let backend = MemBackend::new();
        backend.insert(VISUAL_STYLE_KEY, "\"holographic\"");
        backend.insert(SHORTCUTS_KEY, "maybe");
        let prefs = Preferences::load(&backend);
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn style_keys_round_trip() {
        for style in VisualStyle::ALL {
            assert_eq!(VisualStyle::parse(style.key()), Some(style));
        }
        assert_eq!(VisualStyle::parse("EMOJI"), Some(VisualStyle::Emoji));
    }
}
