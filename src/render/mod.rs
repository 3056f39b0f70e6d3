//! Pure renderers: documents + language + theme in, [`Patch`] list out.
//!
//! Nothing here touches the DOM. The browser boundary (`crate::web`) applies
//! patches; tests inspect them directly. Every section patch replaces the
//! previous content of its target entirely, so rendering twice with the same
//! inputs leaves the page unchanged.

use crate::config::SiteConfig;
use crate::i18n::{self, TextKey};
use crate::model::{Documents, UiText};
use crate::prefs::{Language, Theme};

mod hero;
mod journey;
mod portfolio;
mod recognitions;
mod toolkit;

pub use hero::typing_texts;

pub const TYPING_SLOT: &str = "#typing-text";
pub const TYPING_CURSOR: &str = ".typing-text-container .cursor";
pub const TIMELINE: &str = ".timeline-container";
pub const TOOLKIT_GRID: &str = ".toolkit-grid";
pub const LANGUAGES_SHOWCASE: &str = "#languages-showcase";
pub const CERTIFICATES_SHOWCASE: &str = "#certificates-showcase";
pub const PORTFOLIO_GRID: &str = "#portfolio-grid";
pub const LANGUAGE_BUTTON: &str = "#language-toggle-button";
pub const FOOTER_NAME: &str = "footer p span[data-cv-key=\"about_me.name\"]";
pub const CURRENT_YEAR: &str = "#current-year";

/// One DOM mutation, addressed by CSS selector.
#[derive(Clone, Debug, PartialEq)]
pub enum Patch {
    /// Replace the text content of the first match.
    Text { selector: &'static str, text: String },
    /// Replace the inner HTML of the first match.
    Html { selector: &'static str, html: String },
    Attr {
        selector: &'static str,
        name: &'static str,
        value: String,
    },
    Style {
        selector: &'static str,
        property: &'static str,
        value: String,
    },
    /// Replace all children of a container with `items` (one element each).
    Children {
        selector: &'static str,
        items: Vec<String>,
    },
    /// Keep the container's `<h3>` heading and put `<ul class=list_class>`
    /// holding `items` after it.
    Showcase {
        selector: &'static str,
        list_class: &'static str,
        items: Vec<String>,
    },
    /// (Re)insert the download-CV link in the hero text block.
    CvButton { href: String, label: String },
    DocumentTitle(String),
    /// `<html lang dir>` plus the language button title.
    DocumentLanguage { lang: Language, button_title: String },
    /// Apply `data-lang-key` / `data-placeholder-lang-key` lookups.
    UiText(UiText),
    BodyTheme(Theme),
    /// Icon visibility and title of the theme button.
    ThemeControls { theme: Theme, title: String },
    /// Mobile navigation open/closed, with item animations for `lang`.
    NavMenu { open: bool, lang: Language },
    /// Blocking acknowledgement shown to the user.
    Notify(String),
}

impl Patch {
    pub fn selector(&self) -> Option<&'static str> {
        match self {
            Patch::Text { selector, .. }
            | Patch::Html { selector, .. }
            | Patch::Attr { selector, .. }
            | Patch::Style { selector, .. }
            | Patch::Children { selector, .. }
            | Patch::Showcase { selector, .. } => Some(*selector),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[String]> {
        match self {
            Patch::Children { items, .. } | Patch::Showcase { items, .. } => Some(items.as_slice()),
            _ => None,
        }
    }
}

pub(crate) fn text(selector: &'static str, text: impl Into<String>) -> Patch {
    Patch::Text {
        selector,
        text: text.into(),
    }
}

/// Escape text for inclusion in element content or a quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render every section for `lang`.
pub fn render_page(docs: &Documents, lang: Language, theme: Theme, cfg: &SiteConfig) -> Vec<Patch> {
    let mut patches = Vec::new();
    let ui = docs.ui_text(lang);
    if let Some(profile) = docs.profile(lang) {
        patches.extend(hero::render(profile, lang, cfg));
        if let Some(j) = &profile.my_journey {
            patches.extend(journey::render(j));
        }
        if let Some(t) = &profile.my_toolkit {
            patches.extend(toolkit::render(t));
        }
        if let Some(r) = &profile.recognitions {
            patches.extend(recognitions::render(r, ui, lang));
        }
    }
    if let Some(projects) = docs.projects(lang) {
        patches.extend(portfolio::render(projects, ui, lang));
    }
    if let Some(profile) = docs.profile(lang) {
        patches.push(Patch::UiText(profile.ui_text.clone()));
        let name = profile.about_me.as_ref().map(|me| me.name.as_str());
        let title = profile
            .ui_text
            .get("page_title")
            .filter(|t| !t.trim().is_empty())
            .cloned()
            .or_else(|| name.map(|n| format!("{n} | Portfolio & Innovations")));
        if let Some(title) = title {
            patches.push(Patch::DocumentTitle(title));
        }
        if let Some(name) = name {
            patches.push(text(FOOTER_NAME, name));
        }
    }
    patches.push(theme_controls(ui, lang, theme));
    patches
}

/// Language-dependent document attributes; needs no documents.
pub fn document_language(docs: Option<&Documents>, lang: Language) -> Patch {
    // The button offers the other language, so its label comes from there.
    let target = lang.other();
    let ui = docs.and_then(|d| d.ui_text(target));
    Patch::DocumentLanguage {
        lang,
        button_title: i18n::text(ui, target, TextKey::switch_to(target)).into_owned(),
    }
}

pub fn theme_controls(ui: Option<&UiText>, lang: Language, theme: Theme) -> Patch {
    let key = match theme {
        Theme::Light => TextKey::ThemeToggleDark,
        Theme::Dark => TextKey::ThemeToggleLight,
    };
    Patch::ThemeControls {
        theme,
        title: i18n::text(ui, lang, key).into_owned(),
    }
}

/// CSS animation for the `index`-th mobile nav item, mirrored for RTL.
pub fn nav_item_animation(index: usize, lang: Language) -> String {
    let name = match lang.direction() {
        crate::prefs::Direction::Rtl => "navLinkFadeRTL",
        crate::prefs::Direction::Ltr => "navLinkFadeLTR",
    };
    let delay = index as f64 / 7.0 + 0.3;
    format!("{name} 0.5s ease forwards {delay}s")
}

/// Shared progress-bar markup used by skills and languages.
pub(crate) fn level_bar(pct: f64) -> String {
    // `{}` on f64 prints 85.0 as "85" and keeps 87.5 as is.
    let pct = pct.clamp(0.0, 100.0);
    format!(
        "<div class=\"skill-level-indicator\"><div class=\"progress-bar-container\"><div class=\"progress-bar\" style=\"width: {pct}%;\"></div></div><span class=\"skill-percentage-text\">{pct}%</span></div>"
    )
}
