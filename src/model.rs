//! Data model for the two JSON documents the page is built from.
//!
//! Both documents are keyed by language code at the top level:
//! `{ "ar": { ... }, "en": { ... } }`. Optional fields are tolerated
//! everywhere a missing value has an obvious rendering (omit it).

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::prefs::Language;

/// One value per supported language; either may be missing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Localized<T> {
    #[serde(default)]
    pub ar: Option<T>,
    #[serde(default)]
    pub en: Option<T>,
}

impl<T> Localized<T> {
    pub fn get(&self, lang: Language) -> Option<&T> {
        match lang {
            Language::Ar => self.ar.as_ref(),
            Language::En => self.en.as_ref(),
        }
    }
}

pub type ProfileDocument = Localized<Profile>;
pub type PortfolioDocument = Localized<PortfolioSection>;

/// Flat mapping of UI-text keys to localized strings.
pub type UiText = BTreeMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub about_me: Option<AboutMe>,
    #[serde(default)]
    pub my_journey: Option<Journey>,
    #[serde(default)]
    pub my_toolkit: Option<Toolkit>,
    #[serde(default)]
    pub recognitions: Option<Recognitions>,
    #[serde(default)]
    pub ui_text: UiText,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutMe {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub introduction: String,
    pub profile_image: String,
    pub contact_details: Option<ContactDetails>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub linkedin: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Journey {
    pub intro: Option<String>,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: Option<String>,
    pub period: String,
    pub heading: String,
    pub subheading: Option<String>,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Toolkit {
    pub intro_text: Option<String>,
    pub categories: Vec<SkillCategory>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level_percentage: Option<f64>,
    pub details: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Recognitions {
    pub languages_intro: Option<String>,
    pub certificates_intro: Option<String>,
    pub languages: Option<Vec<SpokenLanguage>>,
    pub certificates: Option<Vec<Certificate>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpokenLanguage {
    pub language: String,
    pub proficiency: String,
    pub level_percentage: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub name: String,
    pub date: Option<String>,
    pub file: Option<String>,
    pub issuer_icon: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioSection {
    pub projects: Vec<Project>,
}

/// Project identifiers appear both as numbers and as strings in the wild.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(i64),
    Text(String),
}

impl Default for ProjectId {
    fn default() -> Self {
        ProjectId::Text(String::new())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub video_url: Option<String>,
    pub live_url: Option<String>,
    pub source_code_url: Option<String>,
    pub view_live_button: Option<String>,
    pub view_source_button: Option<String>,
}

/// How a project's media slot is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectMedia<'a> {
    Video(&'a str),
    Image(&'a str),
    Placeholder,
}

impl Project {
    /// Video wins over image; neither yields a placeholder.
    pub fn media(&self) -> ProjectMedia<'_> {
        match (non_empty(&self.video_url), non_empty(&self.image)) {
            (Some(v), _) => ProjectMedia::Video(v),
            (None, Some(i)) => ProjectMedia::Image(i),
            (None, None) => ProjectMedia::Placeholder,
        }
    }

    pub fn live_link(&self) -> Option<&str> {
        link(&self.live_url)
    }

    pub fn source_link(&self) -> Option<&str> {
        link(&self.source_code_url)
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

// "#" is used in the documents as a "no link yet" marker.
fn link(v: &Option<String>) -> Option<&str> {
    non_empty(v).filter(|s| *s != "#")
}

/// Both documents, loaded together. Never constructed from half a load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Documents {
    pub profile: ProfileDocument,
    pub portfolio: PortfolioDocument,
}

impl Documents {
    pub fn profile(&self, lang: Language) -> Option<&Profile> {
        self.profile.get(lang)
    }

    pub fn projects(&self, lang: Language) -> Option<&[Project]> {
        self.portfolio.get(lang).map(|p| p.projects.as_slice())
    }

    pub fn ui_text(&self, lang: Language) -> Option<&UiText> {
        self.profile(lang).map(|p| &p.ui_text)
    }
}
