//! Localization table.
//!
//! Every user-visible string the page produces on its own (as opposed to text
//! copied straight out of the documents) is a [`TextKey`]. Resolution order:
//! the profile's `ui_text` entry for the key when present and non-empty, else
//! the built-in literal for the language.

use std::borrow::Cow;

use crate::model::UiText;
use crate::prefs::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextKey {
    ErrorLoadingData,
    DownloadCv,
    SpecializedIn,
    GenericSkill,
    FallbackTitle,
    ContactLinkedin,
    ContactSubmitted,
    DownloadCertificate,
    ViewLive,
    SourceCode,
    ProjectLabel,
    NoImage,
    VideoUnsupported,
    ComingSoonTitle,
    ComingSoonCategory,
    ComingSoonText,
    LanguageToggleEn,
    LanguageToggleAr,
    ThemeToggleDark,
    ThemeToggleLight,
}

impl TextKey {
    /// Key looked up in the profile's `ui_text` map.
    pub fn json_key(self) -> &'static str {
        use TextKey::*;
        match self {
            ErrorLoadingData => "error_loading_data",
            DownloadCv => "download_cv_button",
            SpecializedIn => "hero_i_am_specialized_in",
            GenericSkill => "hero_generic_skill",
            FallbackTitle => "hero_fallback_title",
            ContactLinkedin => "contact_my_linkedin",
            ContactSubmitted => "contact_form_submitted",
            DownloadCertificate => "download_certificate_button",
            ViewLive => "view_live_button",
            SourceCode => "view_source_button",
            ProjectLabel => "project_label",
            NoImage => "project_no_image",
            VideoUnsupported => "video_unsupported",
            ComingSoonTitle => "coming_soon_title",
            ComingSoonCategory => "coming_soon_category",
            ComingSoonText => "coming_soon_text",
            LanguageToggleEn => "language_toggle_en",
            LanguageToggleAr => "language_toggle_ar",
            ThemeToggleDark => "theme_toggle_dark",
            ThemeToggleLight => "theme_toggle_light",
        }
    }

    /// Built-in literal used when the documents carry no value.
    pub fn literal(self, lang: Language) -> &'static str {
        use Language::*;
        use TextKey::*;
        match (self, lang) {
            (ErrorLoadingData, Ar) => "حدث خطأ أثناء تحميل البيانات.",
            (ErrorLoadingData, En) => "Error loading data.",
            (DownloadCv, Ar) => "تحميل السيرة الذاتية",
            (DownloadCv, En) => "Download CV",
            (SpecializedIn, Ar) => "فنان في",
            (SpecializedIn, En) => "An artist in",
            (GenericSkill, Ar) => "مبتكر حلول تقنية شاملة.",
            (GenericSkill, En) => "An innovator of comprehensive tech solutions.",
            (FallbackTitle, Ar) => "مبتكر ومطور",
            (FallbackTitle, En) => "Innovator and Developer",
            (ContactLinkedin, Ar) => "الملف الشخصي على LinkedIn",
            (ContactLinkedin, En) => "LinkedIn Profile",
            (ContactSubmitted, Ar) => "تم إرسال الرسالة (تجريبي).",
            (ContactSubmitted, En) => "Message sent (demo).",
            (DownloadCertificate, Ar) => "تحميل الشهادة",
            (DownloadCertificate, En) => "Download Certificate",
            (ViewLive, Ar) => "مشاهدة مباشرة",
            (ViewLive, En) => "View Live",
            (SourceCode, Ar) => "الكود المصدري",
            (SourceCode, En) => "Source Code",
            (ProjectLabel, Ar) => "مشروع",
            (ProjectLabel, En) => "Project",
            (NoImage, Ar) => "لا توجد صورة",
            (NoImage, En) => "No image",
            (VideoUnsupported, Ar) => "متصفحك لا يدعم تشغيل الفيديو",
            (VideoUnsupported, En) => "Your browser does not support the video tag",
            (ComingSoonTitle, Ar) => "قريباً",
            (ComingSoonTitle, En) => "Coming Soon",
            (ComingSoonCategory, Ar) => "مشاريع مستقبلية",
            (ComingSoonCategory, En) => "Future Projects",
            (ComingSoonText, Ar) => "سيتم إضافة المزيد من المشاريع تدريجياً. ترقبوا الإضافات الجديدة!",
            (ComingSoonText, En) => {
                "More projects will be added gradually. Stay tuned for new additions!"
            }
            (LanguageToggleEn, _) => "Switch to English",
            (LanguageToggleAr, _) => "التحويل إلى العربية",
            (ThemeToggleDark, Ar) => "التبديل إلى الوضع الداكن",
            (ThemeToggleDark, En) => "Switch to dark mode",
            (ThemeToggleLight, Ar) => "التبديل إلى الوضع الفاتح",
            (ThemeToggleLight, En) => "Switch to light mode",
        }
    }

    /// Key naming the action "switch to `target`".
    pub fn switch_to(target: Language) -> Self {
        match target {
            Language::Ar => TextKey::LanguageToggleAr,
            Language::En => TextKey::LanguageToggleEn,
        }
    }
}

/// A document value for `key`, if present and not blank.
pub fn lookup<'a>(ui_text: &'a UiText, key: &str) -> Option<&'a str> {
    ui_text
        .get(key)
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Resolve `key` for `lang`, preferring the document's own text.
pub fn text<'a>(ui_text: Option<&'a UiText>, lang: Language, key: TextKey) -> Cow<'a, str> {
    match ui_text.and_then(|t| lookup(t, key.json_key())) {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Borrowed(key.literal(lang)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_value_wins() {
        let mut ui = UiText::new();
        ui.insert("download_cv_button".into(), "Grab my CV".into());
        assert_eq!(text(Some(&ui), Language::En, TextKey::DownloadCv), "Grab my CV");
    }

    #[test]
    fn empty_document_value_falls_back() {
        let mut ui = UiText::new();
        ui.insert("download_cv_button".into(), "  ".into());
        assert_eq!(text(Some(&ui), Language::En, TextKey::DownloadCv), "Download CV");
        assert_eq!(text(None, Language::Ar, TextKey::DownloadCv), "تحميل السيرة الذاتية");
    }

    #[test]
    fn lookup_skips_blank_values() {
        let mut ui = UiText::new();
        ui.insert("nav_home".into(), "Home".into());
        ui.insert("nav_about".into(), "".into());
        ui.insert("contact_name".into(), " \t".into());
        assert_eq!(lookup(&ui, "nav_home"), Some("Home"));
        assert_eq!(lookup(&ui, "nav_about"), None);
        assert_eq!(lookup(&ui, "contact_name"), None);
        assert_eq!(lookup(&ui, "missing"), None);
    }

    #[test]
    fn switch_to_names_target_language() {
        assert_eq!(
            text(None, Language::En, TextKey::switch_to(Language::En)),
            "Switch to English"
        );
        assert_eq!(TextKey::switch_to(Language::Ar).json_key(), "language_toggle_ar");
    }
}
