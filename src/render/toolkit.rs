use super::{Patch, escape, level_bar, text};
use crate::model::{Skill, SkillCategory, Toolkit};

pub(super) fn render(toolkit: &Toolkit) -> Vec<Patch> {
    vec![
        text("#toolkit-intro", toolkit.intro_text.clone().unwrap_or_default()),
        Patch::Children {
            selector: super::TOOLKIT_GRID,
            items: toolkit.categories.iter().map(category_card).collect(),
        },
    ]
}

fn category_card(cat: &SkillCategory) -> String {
    let description = cat
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!("<p class=\"category-description\">{}</p>", escape(d)))
        .unwrap_or_default();
    let skills: String = cat.skills.iter().map(skill_item).collect();
    format!(
        "<div class=\"toolkit-category-card\"><div class=\"toolkit-category-header\"><i class=\"fas fa-{icon}\"></i><h3>{name}</h3></div>{description}<ul class=\"skills-list-detailed\">{skills}</ul></div>",
        icon = escape(cat.icon.as_deref().unwrap_or("tools")),
        name = escape(&cat.name),
    )
}

fn skill_item(skill: &Skill) -> String {
    let bar = skill.level_percentage.map(level_bar).unwrap_or_default();
    let details = skill
        .details
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!("<p class=\"skill-details\">{}</p>", escape(d)))
        .unwrap_or_default();
    format!(
        "<li class=\"skill-item\"><div class=\"skill-name-progress\"><span class=\"skill-name\">{}</span>{bar}</div>{details}</li>",
        escape(&skill.name)
    )
}
