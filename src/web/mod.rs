//! Browser boundary: owns the page state and every side effect.
//!
//! Startup order: stored theme, stored language, kick off the document
//! fetch, attach listeners, start the frame loop. The fetch completes
//! asynchronously and renders through the same patch path as every other
//! operation.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlFormElement,
    ScrollBehavior, ScrollIntoViewOptions, Storage, window,
};

use crate::app::AppState;
use crate::config::SiteConfig;
use crate::effects::ParticleField;
use crate::loader;
use crate::prefs::{KeyValueStore, Preferences};
use crate::render::Patch;

mod dom;

/// `localStorage`, or nothing when the browser refuses access.
struct BrowserStore(Option<Storage>);

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }
    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("could not persist {key}: {e:?}");
            }
        }
    }
}

struct HeroCanvas {
    hero: HtmlElement,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl HeroCanvas {
    fn fit(&self) -> (f64, f64) {
        let w = self.hero.offset_width().max(0) as u32;
        let h = self.hero.offset_height().max(0) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        (f64::from(w), f64::from(h))
    }
}

struct Page {
    app: AppState,
    store: BrowserStore,
    hero: Option<HeroCanvas>,
}

thread_local! {
    static PAGE: std::cell::RefCell<Option<Page>> = const { std::cell::RefCell::new(None) };
}

/// Run `f` against the page state, if the page has started.
fn with_page<R>(f: impl FnOnce(&mut Page) -> R) -> Option<R> {
    PAGE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Apply patches outside the state borrow.
fn commit(patches: Vec<Patch>) {
    if patches.is_empty() {
        return;
    }
    if let Some(doc) = document() {
        if let Err(e) = dom::apply(&doc, &patches) {
            log::warn!("failed to apply page update: {e:?}");
        }
    }
}

fn on_event(
    target: &web_sys::EventTarget,
    name: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn start(cfg: SiteConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if PAGE.with(|cell| cell.borrow().is_some()) {
        log::warn!("portfolio page already started");
        return Ok(());
    }

    let store = BrowserStore(win.local_storage().ok().flatten());
    let prefs = Preferences::load(&store, &cfg);
    log::info!(
        "starting portfolio page (theme {}, language {})",
        prefs.theme.class_name(),
        prefs.language.code()
    );
    let mut app = AppState::new(cfg.clone(), prefs);
    let year = js_sys::Date::new_0().get_full_year() as i32;
    dom::apply(&doc, &app.startup(year))?;

    let hero = init_hero_canvas(&doc, &mut app)?;
    PAGE.with(|cell| {
        *cell.borrow_mut() = Some(Page { app, store, hero });
    });

    wasm_bindgen_futures::spawn_local(async move {
        let result = loader::load_documents(&cfg).await;
        let now = performance_now();
        let patches = with_page(|page| page.app.documents_loaded(result, now)).unwrap_or_default();
        commit(patches);
    });

    attach_listeners(&doc)?;
    start_frame_loop();
    Ok(())
}

fn init_hero_canvas(doc: &Document, app: &mut AppState) -> Result<Option<HeroCanvas>, JsValue> {
    let Some(hero) = doc.get_element_by_id("hero") else {
        log::debug!("no #hero section, particles disabled");
        return Ok(None);
    };
    let hero: HtmlElement = hero.dyn_into()?;
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_id("hero-particle-canvas");
    hero.append_child(&canvas)?;
    let Some(ctx) = canvas.get_context("2d")? else {
        return Ok(None);
    };
    let ctx: CanvasRenderingContext2d = ctx.dyn_into()?;
    let hero = HeroCanvas { hero, canvas, ctx };
    let (w, h) = hero.fit();

    let mut rng = SmallRng::from_entropy();
    let count = app.config().particle_count;
    app.attach_particles(ParticleField::new(&mut rng, count, w, h, app.theme()));
    Ok(Some(hero))
}

fn attach_listeners(doc: &Document) -> Result<(), JsValue> {
    if let Some(btn) = doc.get_element_by_id("theme-toggle-button") {
        on_event(&btn, "click", |_: web_sys::Event| {
            commit(with_page(|p| p.app.toggle_theme(&p.store)).unwrap_or_default());
        })?;
    }

    if let Some(btn) = doc.get_element_by_id("language-toggle-button") {
        on_event(&btn, "click", |_: web_sys::Event| {
            let now = performance_now();
            commit(with_page(|p| p.app.toggle_language(&p.store, now)).unwrap_or_default());
        })?;
    }

    if let (Some(burger), Some(_)) = (doc.query_selector(".burger")?, doc.query_selector(".nav-links")?) {
        on_event(&burger, "click", |_: web_sys::Event| {
            commit(with_page(|p| p.app.toggle_nav()).unwrap_or_default());
        })?;
    }

    let anchors = doc.query_selector_all("a[href^=\"#\"]")?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i) else {
            continue;
        };
        on_event(&anchor, "click", |evt: web_sys::Event| {
            evt.prevent_default();
            let href = evt
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|a| a.get_attribute("href"));
            let Some(doc) = document() else { return };
            // A bare "#" is not a valid selector; treat it like a missing target.
            let target = href.and_then(|h| doc.query_selector(&h).ok().flatten());
            if let Some(target) = target {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
                commit(with_page(|p| p.app.close_nav()).unwrap_or_default());
            }
        })?;
    }

    if let Some(form) = doc.get_element_by_id("contact-form") {
        let form: HtmlFormElement = form.dyn_into()?;
        let form_reset = form.clone();
        on_event(&form, "submit", move |evt: web_sys::Event| {
            evt.prevent_default();
            commit(with_page(|p| p.app.contact_submitted()).unwrap_or_default());
            form_reset.reset();
        })?;
    }

    if let Some(win) = window() {
        on_event(&win, "resize", |_: web_sys::Event| {
            with_page(|p| {
                if let Some(hero) = &p.hero {
                    let (w, h) = hero.fit();
                    p.app.resize_particles(w, h);
                }
            });
        })?;
    }
    Ok(())
}

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Single loop driving particles every frame and all delayed work.
fn start_frame_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let patches = with_page(|page| {
            let patches = page.app.tick(ts);
            if let (Some(hero), Some(field)) = (&page.hero, page.app.particles()) {
                dom::draw_particles(&hero.ctx, field);
            }
            patches
        })
        .unwrap_or_default();
        commit(patches);
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
