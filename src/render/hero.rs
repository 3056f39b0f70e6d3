use super::{Patch, escape, text};
use crate::config::SiteConfig;
use crate::i18n::{self, TextKey};
use crate::model::Profile;
use crate::prefs::Language;

/// Hero and about-me sections; nothing when the profile has no `about_me`.
pub(super) fn render(profile: &Profile, lang: Language, cfg: &SiteConfig) -> Vec<Patch> {
    let Some(me) = &profile.about_me else {
        return Vec::new();
    };
    let ui = Some(&profile.ui_text);
    let mut out = vec![
        text("#nav-name", me.name.clone()),
        text("#hero-name", me.name.clone()),
        text("#hero-title", me.title.clone()),
        text("#hero-tagline", me.tagline.clone()),
        Patch::CvButton {
            href: cfg.cv_download_path.clone(),
            label: i18n::text(ui, lang, TextKey::DownloadCv).into_owned(),
        },
        Patch::Attr {
            selector: "#hero-personal-photo",
            name: "src",
            value: me.profile_image.clone(),
        },
        Patch::Html {
            selector: "#about-me-intro",
            html: format!(
                "<h2>{}</h2><p class=\"tagline\">{}</p><p>{}</p>",
                escape(&me.name),
                escape(&me.tagline),
                escape(&me.introduction)
            ),
        },
    ];

    if let Some(c) = &me.contact_details {
        let mut html = format!(
            "<p><i class=\"fas fa-envelope\"></i> <a href=\"mailto:{0}\">{0}</a></p><p><i class=\"fas fa-phone\"></i> {1}</p>",
            escape(&c.email),
            escape(&c.phone)
        );
        if let Some(handle) = c.linkedin.as_deref().filter(|h| !h.is_empty()) {
            html.push_str(&format!(
                "<p><i class=\"fab fa-linkedin\"></i> <a href=\"https://linkedin.com/in/{}\" target=\"_blank\">{}</a></p>",
                escape(handle),
                escape(&i18n::text(ui, lang, TextKey::ContactLinkedin))
            ));
        }
        out.push(Patch::Html {
            selector: "#contact-info-showcase",
            html,
        });
    }
    out
}

/// Strings cycled by the typewriter: the title, one phrase per toolkit
/// category, then a closing phrase. Empty without `about_me`.
pub fn typing_texts(profile: &Profile, lang: Language) -> Vec<String> {
    let Some(me) = &profile.about_me else {
        return Vec::new();
    };
    let ui = Some(&profile.ui_text);
    let mut texts = vec![me.title.clone()];
    if let Some(toolkit) = &profile.my_toolkit {
        let prefix = i18n::text(ui, lang, TextKey::SpecializedIn);
        texts.extend(
            toolkit
                .categories
                .iter()
                .map(|c| format!("{} {}", prefix, c.name)),
        );
    }
    texts.push(i18n::text(ui, lang, TextKey::GenericSkill).into_owned());
    texts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AboutMe, ContactDetails, SkillCategory, Toolkit};

    fn profile() -> Profile {
        Profile {
            about_me: Some(AboutMe {
                name: "Sam <Dev>".into(),
                title: "Engineer".into(),
                contact_details: Some(ContactDetails {
                    email: "sam@example.com".into(),
                    phone: "+1 555".into(),
                    linkedin: None,
                }),
                ..Default::default()
            }),
            my_toolkit: Some(Toolkit {
                intro_text: None,
                categories: vec![
                    SkillCategory {
                        name: "Rust".into(),
                        ..Default::default()
                    },
                    SkillCategory {
                        name: "Design".into(),
                        ..Default::default()
                    },
                ],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn typing_texts_title_categories_closing() {
        let texts = typing_texts(&profile(), Language::En);
        assert_eq!(
            texts,
            vec![
                "Engineer".to_string(),
                "An artist in Rust".to_string(),
                "An artist in Design".to_string(),
                "An innovator of comprehensive tech solutions.".to_string(),
            ]
        );
    }

    #[test]
    fn about_intro_is_escaped_and_linkedin_optional() {
        let patches = render(&profile(), Language::En, &SiteConfig::default());
        let intro = patches
            .iter()
            .find(|p| p.selector() == Some("#about-me-intro"))
            .unwrap();
        assert!(matches!(intro, Patch::Html { html, .. } if html.contains("Sam &lt;Dev&gt;")));
        let contact = patches
            .iter()
            .find(|p| p.selector() == Some("#contact-info-showcase"))
            .unwrap();
        assert!(matches!(contact, Patch::Html { html, .. } if !html.contains("linkedin")));
    }

    #[test]
    fn cv_button_uses_configured_path() {
        let patches = render(&profile(), Language::Ar, &SiteConfig::default());
        assert!(patches.contains(&Patch::CvButton {
            href: "cv.pdf".into(),
            label: "تحميل السيرة الذاتية".into(),
        }));
    }

    #[test]
    fn profile_without_about_me_has_no_hero_and_no_typing_texts() {
        let p = Profile {
            about_me: None,
            ..profile()
        };
        assert!(render(&p, Language::En, &SiteConfig::default()).is_empty());
        assert!(typing_texts(&p, Language::En).is_empty());
    }
}
