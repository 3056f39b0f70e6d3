//! Applying [`Patch`]es to the live document, and drawing particles.
//!
//! A selector that matches nothing is skipped; optional page regions are
//! allowed to be absent.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlElement};

use crate::effects::ParticleField;
use crate::i18n;
use crate::model::UiText;
use crate::prefs::{Language, Theme};
use crate::render::{self, Patch};

fn find(doc: &Document, selector: &str) -> Result<Option<Element>, JsValue> {
    let found = doc.query_selector(selector)?;
    if found.is_none() {
        log::debug!("no element for {selector}, skipped");
    }
    Ok(found)
}

fn each_match(
    root: &Document,
    selector: &str,
    mut f: impl FnMut(usize, Element) -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    let list = root.query_selector_all(selector)?;
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            f(i as usize, el)?;
        }
    }
    Ok(())
}

fn set_style(el: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if value.is_empty() {
            html.style().remove_property(property)?;
        } else {
            html.style().set_property(property, value)?;
        }
    }
    Ok(())
}

pub fn apply(doc: &Document, patches: &[Patch]) -> Result<(), JsValue> {
    for patch in patches {
        apply_one(doc, patch)?;
    }
    Ok(())
}

fn apply_one(doc: &Document, patch: &Patch) -> Result<(), JsValue> {
    match patch {
        Patch::Text { selector, text } => {
            if let Some(el) = find(doc, selector)? {
                el.set_text_content(Some(text));
            }
        }
        Patch::Html { selector, html } => {
            if let Some(el) = find(doc, selector)? {
                el.set_inner_html(html);
            }
        }
        Patch::Attr {
            selector,
            name,
            value,
        } => {
            if let Some(el) = find(doc, selector)? {
                el.set_attribute(name, value)?;
            }
        }
        Patch::Style {
            selector,
            property,
            value,
        } => {
            if let Some(el) = find(doc, selector)? {
                set_style(&el, property, value)?;
            }
        }
        Patch::Children { selector, items } => {
            if let Some(el) = find(doc, selector)? {
                el.set_inner_html(&items.concat());
            }
        }
        Patch::Showcase {
            selector,
            list_class,
            items,
        } => {
            if let Some(el) = find(doc, selector)? {
                let heading = el.query_selector("h3")?;
                el.set_inner_html("");
                if let Some(h) = heading {
                    el.append_child(&h)?;
                }
                el.insert_adjacent_html(
                    "beforeend",
                    &format!("<ul class=\"{list_class}\">{}</ul>", items.concat()),
                )?;
            }
        }
        Patch::CvButton { href, label } => cv_button(doc, href, label)?,
        Patch::DocumentTitle(title) => doc.set_title(title),
        Patch::DocumentLanguage { lang, button_title } => {
            if let Some(root) = doc.document_element() {
                root.set_attribute("lang", lang.code())?;
                root.set_attribute("dir", lang.direction().as_str())?;
            }
            if let Some(btn) = find(doc, render::LANGUAGE_BUTTON)? {
                btn.set_attribute("title", button_title)?;
            }
        }
        Patch::UiText(ui) => ui_text(doc, ui)?,
        Patch::BodyTheme(theme) => {
            if let Some(body) = doc.body() {
                body.set_class_name(theme.class_name());
            }
        }
        Patch::ThemeControls { theme, title } => theme_controls(doc, *theme, title)?,
        Patch::NavMenu { open, lang } => nav_menu(doc, *open, *lang)?,
        Patch::Notify(message) => {
            if let Some(win) = web_sys::window() {
                win.alert_with_message(message)?;
            }
        }
    }
    Ok(())
}

fn cv_button(doc: &Document, href: &str, label: &str) -> Result<(), JsValue> {
    let Some(hero_text) = find(doc, ".hero-text")? else {
        return Ok(());
    };
    if let Some(old) = hero_text.query_selector(".download-cv-button")? {
        old.remove();
    }
    let a = doc.create_element("a")?;
    a.set_attribute("href", href)?;
    a.set_attribute("target", "_blank")?;
    a.set_class_name("cta-button download-cv-button");
    a.set_text_content(Some(label));
    set_style(&a, "margin-top", "1.5rem")?;

    if let Some(cta) = hero_text.query_selector(".cta-button")? {
        cta.after_with_node_1(&a)?;
    } else if let Some(tagline) = doc.get_element_by_id("hero-tagline") {
        tagline.after_with_node_1(&a)?;
    } else {
        hero_text.append_child(&a)?;
    }
    Ok(())
}

// Blank values leave the markup's own text in place.
fn ui_text(doc: &Document, ui: &UiText) -> Result<(), JsValue> {
    each_match(doc, "[data-lang-key]", |_, el| {
        if let Some(key) = el.get_attribute("data-lang-key") {
            if let Some(value) = i18n::lookup(ui, &key) {
                el.set_text_content(Some(value));
            }
        }
        Ok(())
    })?;
    each_match(doc, "[data-placeholder-lang-key]", |_, el| {
        if let Some(key) = el.get_attribute("data-placeholder-lang-key") {
            if let Some(value) = i18n::lookup(ui, &key) {
                el.set_attribute("placeholder", value)?;
            }
        }
        Ok(())
    })
}

fn theme_controls(doc: &Document, theme: Theme, title: &str) -> Result<(), JsValue> {
    let Some(button) = doc.get_element_by_id("theme-toggle-button") else {
        return Ok(());
    };
    let moon = button.query_selector(".icon-moon")?;
    let sun = button.query_selector(".icon-sun")?;
    if let (Some(moon), Some(sun)) = (moon, sun) {
        let (moon_display, sun_display) = match theme {
            Theme::Light => ("inline-block", "none"),
            Theme::Dark => ("none", "inline-block"),
        };
        set_style(&moon, "display", moon_display)?;
        set_style(&sun, "display", sun_display)?;
    }
    button.set_attribute("title", title)?;
    Ok(())
}

fn nav_menu(doc: &Document, open: bool, lang: Language) -> Result<(), JsValue> {
    let (Some(nav), Some(burger)) = (find(doc, ".nav-links")?, find(doc, ".burger")?) else {
        return Ok(());
    };
    nav.class_list().toggle_with_force("nav-active", open)?;
    burger.class_list().toggle_with_force("toggle", open)?;
    if let Some(body) = doc.body() {
        body.class_list()
            .toggle_with_force("nav-open-overflow-hidden", open)?;
    }
    each_match(doc, ".nav-links li", |i, item| {
        let anim = if open {
            render::nav_item_animation(i, lang)
        } else {
            String::new()
        };
        set_style(&item, "animation", &anim)
    })
}

pub fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (w, h) = field.size();
    ctx.clear_rect(0.0, 0.0, w, h);
    for p in field.particles() {
        ctx.set_fill_style_str(p.color);
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}
