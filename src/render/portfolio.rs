use super::{Patch, escape};
use crate::i18n::{self, TextKey};
use crate::model::{Project, ProjectMedia, UiText};
use crate::prefs::Language;

/// Project cards followed by the "coming soon" card.
pub(super) fn render(projects: &[Project], ui: Option<&UiText>, lang: Language) -> Vec<Patch> {
    let mut items: Vec<String> = projects.iter().map(|p| project_card(p, ui, lang)).collect();
    items.push(coming_soon_card(ui, lang));
    vec![Patch::Children {
        selector: super::PORTFOLIO_GRID,
        items,
    }]
}

fn media(p: &Project, ui: Option<&UiText>, lang: Language) -> String {
    match p.media() {
        ProjectMedia::Video(src) => format!(
            "<div class=\"portfolio-media-container video-container\"><video class=\"portfolio-video\" controls preload=\"metadata\"><source src=\"{}\" type=\"video/mp4\">{}</video></div>",
            escape(src),
            escape(&i18n::text(ui, lang, TextKey::VideoUnsupported))
        ),
        ProjectMedia::Image(src) => format!(
            "<div class=\"portfolio-media-container\"><img src=\"{}\" alt=\"{}\"></div>",
            escape(src),
            escape(&p.title)
        ),
        ProjectMedia::Placeholder => format!(
            "<div class=\"portfolio-media-container\"><div class=\"video-placeholder\">{}: {} ({})</div></div>",
            escape(&i18n::text(ui, lang, TextKey::ProjectLabel)),
            escape(&p.title),
            escape(&i18n::text(ui, lang, TextKey::NoImage))
        ),
    }
}

fn project_card(p: &Project, ui: Option<&UiText>, lang: Language) -> String {
    let techs: String = p
        .technologies
        .iter()
        .map(|t| format!("<span>{}</span>", escape(t)))
        .collect();
    let mut links = String::new();
    if let Some(url) = p.live_link() {
        let label = p
            .view_live_button
            .clone()
            .unwrap_or_else(|| i18n::text(ui, lang, TextKey::ViewLive).into_owned());
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"cta-button-small\">{}</a>",
            escape(url),
            escape(&label)
        ));
    }
    if let Some(url) = p.source_link() {
        let label = p
            .view_source_button
            .clone()
            .unwrap_or_else(|| i18n::text(ui, lang, TextKey::SourceCode).into_owned());
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"cta-button-small outline\">{}</a>",
            escape(url),
            escape(&label)
        ));
    }
    format!(
        "<div class=\"portfolio-item\" data-id=\"{id}\">{media}<div class=\"portfolio-item-content\"><h4>{title}</h4><span class=\"category\">{category}</span><p>{desc}</p><div class=\"technologies\">{techs}</div><div class=\"project-links\">{links}</div></div></div>",
        id = escape(&p.id.to_string()),
        media = media(p, ui, lang),
        title = escape(&p.title),
        category = escape(&p.category),
        desc = escape(&p.description),
    )
}

fn coming_soon_card(ui: Option<&UiText>, lang: Language) -> String {
    format!(
        "<div class=\"portfolio-item coming-soon-item\"><div class=\"portfolio-media-container\"><div class=\"coming-soon-placeholder\"><i class=\"fas fa-code\"></i></div></div><div class=\"portfolio-item-content\"><h4>{}</h4><span class=\"category\">{}</span><p>{}</p></div></div>",
        escape(&i18n::text(ui, lang, TextKey::ComingSoonTitle)),
        escape(&i18n::text(ui, lang, TextKey::ComingSoonCategory)),
        escape(&i18n::text(ui, lang, TextKey::ComingSoonText))
    )
}
