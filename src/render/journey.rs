use super::{Patch, escape, text};
use crate::model::{Journey, TimelineEntry};

pub(super) fn render(journey: &Journey) -> Vec<Patch> {
    vec![
        text("#journey-intro", journey.intro.clone().unwrap_or_default()),
        Patch::Children {
            selector: super::TIMELINE,
            items: journey.timeline.iter().map(entry).collect(),
        },
    ]
}

fn entry(item: &TimelineEntry) -> String {
    let sub = item
        .subheading
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!("<h4>{}</h4>", escape(s)))
        .unwrap_or_default();
    format!(
        "<div class=\"timeline-item timeline-item-{kind}\"><div class=\"timeline-icon\"><i class=\"fas fa-{icon}\"></i></div><div class=\"timeline-content\"><span class=\"timeline-period\">{period}</span><h3>{heading}</h3>{sub}<p>{desc}</p></div></div>",
        kind = escape(&item.kind),
        icon = escape(item.icon.as_deref().unwrap_or("circle")),
        period = escape(&item.period),
        heading = escape(&item.heading),
        desc = escape(&item.description),
    )
}
