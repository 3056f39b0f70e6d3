use super::{Patch, escape, level_bar, text};
use crate::i18n::{self, TextKey};
use crate::model::{Certificate, Recognitions, SpokenLanguage, UiText};
use crate::prefs::Language;

pub(super) fn render(recog: &Recognitions, ui: Option<&UiText>, lang: Language) -> Vec<Patch> {
    let mut out = vec![
        text(
            "#languages-intro-text",
            recog.languages_intro.clone().unwrap_or_default(),
        ),
        text(
            "#certificates-intro-text",
            recog.certificates_intro.clone().unwrap_or_default(),
        ),
    ];
    if let Some(langs) = &recog.languages {
        out.push(Patch::Showcase {
            selector: super::LANGUAGES_SHOWCASE,
            list_class: "languages-list-detailed",
            items: langs.iter().map(language_item).collect(),
        });
    }
    if let Some(certs) = &recog.certificates {
        let label = i18n::text(ui, lang, TextKey::DownloadCertificate);
        out.push(Patch::Showcase {
            selector: super::CERTIFICATES_SHOWCASE,
            list_class: "certificates-list",
            items: certs.iter().map(|c| certificate_item(c, &label)).collect(),
        });
    }
    out
}

fn language_item(l: &SpokenLanguage) -> String {
    let level = match l.level_percentage {
        Some(pct) => level_bar(pct),
        None => format!(
            "<span class=\"language-proficiency-text\">{}</span>",
            escape(&l.proficiency)
        ),
    };
    format!(
        "<li class=\"language-item\"><div class=\"language-name-progress\"><span class=\"language-name\">{} ({})</span>{level}</div></li>",
        escape(&l.language),
        escape(&l.proficiency)
    )
}

fn certificate_item(cert: &Certificate, download_label: &str) -> String {
    let date = cert
        .date
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!("({})", escape(d)))
        .unwrap_or_default();
    let description = cert
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!("<p class=\"certificate-description\">{}</p>", escape(d)))
        .unwrap_or_default();
    let download = cert
        .file
        .as_deref()
        .filter(|f| !f.is_empty())
        .map(|f| {
            format!(
                "<a href=\"{}\" target=\"_blank\" class=\"cta-button-small download-certificate-button\">{}</a>",
                escape(f),
                escape(download_label)
            )
        })
        .unwrap_or_default();
    format!(
        "<li class=\"certificate-item\"><div class=\"certificate-main-content\"><div class=\"certificate-info\"><i class=\"fas fa-{icon}\"></i><div class=\"certificate-info-text\"><strong>{name}</strong><span>{date}</span></div></div>{description}</div>{download}</li>",
        icon = escape(cert.issuer_icon.as_deref().unwrap_or("certificate")),
        name = escape(&cert.name),
    )
}
