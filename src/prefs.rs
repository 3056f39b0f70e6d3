//! Persisted user preferences (theme + language).

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Body class and stored value.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light-theme" | "light" => Some(Theme::Light),
            "dark-theme" | "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }
}

/// Minimal string key-value storage. The browser implementation wraps
/// `localStorage`; tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Default, Debug)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Read both values; absent or unrecognised entries fall back to dark / Arabic.
    pub fn load(store: &dyn KeyValueStore, cfg: &SiteConfig) -> Self {
        let theme = store
            .get(&cfg.theme_storage_key)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        let language = store
            .get(&cfg.language_storage_key)
            .and_then(|v| Language::parse(&v))
            .unwrap_or_default();
        Self { theme, language }
    }

    pub fn save(&self, store: &dyn KeyValueStore, cfg: &SiteConfig) {
        store.set(&cfg.theme_storage_key, self.theme.class_name());
        store.set(&cfg.language_storage_key, self.language.code());
    }
}
