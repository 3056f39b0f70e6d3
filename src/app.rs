//! Application state and the operations the page performs on it.
//!
//! Every operation is a plain method returning the [`Patch`]es the browser
//! boundary must apply, so the whole page can be driven natively in tests
//! with a virtual clock.

use crate::config::SiteConfig;
use crate::effects::{ParticleField, Typewriter};
use crate::i18n::{self, TextKey};
use crate::loader::LoadFailure;
use crate::model::{Documents, UiText};
use crate::prefs::{KeyValueStore, Language, Preferences, Theme};
use crate::render::{self, Patch};
use crate::scheduler::{Scheduler, Task};

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Pending,
    Ready(Documents),
    /// Terminal for this page load; holds the message shown to the user.
    Failed(String),
}

pub struct AppState {
    cfg: SiteConfig,
    prefs: Preferences,
    load: LoadState,
    typewriter: Typewriter,
    scheduler: Scheduler,
    particles: Option<ParticleField>,
    nav_open: bool,
}

impl AppState {
    pub fn new(cfg: SiteConfig, prefs: Preferences) -> Self {
        let typewriter = Typewriter::new(cfg.typing);
        Self {
            cfg,
            prefs,
            load: LoadState::Pending,
            typewriter,
            scheduler: Scheduler::new(),
            particles: None,
            nav_open: false,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.cfg
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn documents(&self) -> Option<&Documents> {
        match &self.load {
            LoadState::Ready(d) => Some(d),
            _ => None,
        }
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    fn ui_text(&self) -> Option<&UiText> {
        self.documents().and_then(|d| d.ui_text(self.prefs.language))
    }

    /// Apply the stored theme and language before any document is loaded.
    pub fn startup(&self, year: i32) -> Vec<Patch> {
        vec![
            Patch::BodyTheme(self.prefs.theme),
            render::theme_controls(None, self.prefs.language, self.prefs.theme),
            render::document_language(None, self.prefs.language),
            render::text(render::CURRENT_YEAR, year.to_string()),
        ]
    }

    pub fn documents_loaded(
        &mut self,
        result: Result<Documents, LoadFailure>,
        now: f64,
    ) -> Vec<Patch> {
        match result {
            Ok(docs) => {
                log::info!("documents loaded");
                self.load = LoadState::Ready(docs);
                self.render(now)
            }
            Err(failure) => {
                log::error!("error loading data: {}", failure.cause);
                let lang = self.prefs.language;
                let ui = failure
                    .profile
                    .as_ref()
                    .and_then(|p| p.get(lang))
                    .map(|p| &p.ui_text);
                let message = i18n::text(ui, lang, TextKey::ErrorLoadingData).into_owned();
                self.typewriter.restart(Vec::new());
                self.load = LoadState::Failed(message.clone());
                vec![render::text(render::TYPING_SLOT, message)]
            }
        }
    }

    /// Re-render every section for the current language and restart the
    /// typewriter. No-op until documents are loaded.
    pub fn render(&mut self, now: f64) -> Vec<Patch> {
        let LoadState::Ready(docs) = &self.load else {
            return Vec::new();
        };
        let lang = self.prefs.language;
        let mut patches = render::render_page(docs, lang, self.prefs.theme, &self.cfg);
        patches.push(render::document_language(Some(docs), lang));

        let texts = docs
            .profile(lang)
            .map(|profile| render::typing_texts(profile, lang))
            .unwrap_or_default();
        if texts.is_empty() {
            self.typewriter.restart(Vec::new());
            patches.push(render::text(
                render::TYPING_SLOT,
                TextKey::FallbackTitle.literal(lang),
            ));
            patches.push(cursor_display("none"));
        } else {
            let generation = self.typewriter.restart(texts);
            self.scheduler
                .schedule_at(now, Task::TypewriterStep { generation });
            patches.push(render::text(render::TYPING_SLOT, ""));
            patches.push(cursor_display(""));
        }
        patches
    }

    pub fn set_language(
        &mut self,
        lang: Language,
        store: &dyn KeyValueStore,
        now: f64,
    ) -> Vec<Patch> {
        self.prefs.language = lang;
        store.set(&self.cfg.language_storage_key, lang.code());
        log::info!("language set to {}", lang.code());
        if self.documents().is_some() {
            self.render(now)
        } else {
            vec![render::document_language(None, lang)]
        }
    }

    pub fn toggle_language(&mut self, store: &dyn KeyValueStore, now: f64) -> Vec<Patch> {
        self.set_language(self.prefs.language.other(), store, now)
    }

    pub fn toggle_theme(&mut self, store: &dyn KeyValueStore) -> Vec<Patch> {
        let theme = self.prefs.theme.toggled();
        self.prefs.theme = theme;
        store.set(&self.cfg.theme_storage_key, theme.class_name());
        if let Some(field) = self.particles.as_mut() {
            field.set_theme(theme);
        }
        vec![
            Patch::BodyTheme(theme),
            render::theme_controls(self.ui_text(), self.prefs.language, theme),
        ]
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn language(&self) -> Language {
        self.prefs.language
    }

    pub fn toggle_nav(&mut self) -> Vec<Patch> {
        self.nav_open = !self.nav_open;
        vec![Patch::NavMenu {
            open: self.nav_open,
            lang: self.prefs.language,
        }]
    }

    /// Close the mobile menu if it is open.
    pub fn close_nav(&mut self) -> Vec<Patch> {
        if self.nav_open {
            self.toggle_nav()
        } else {
            Vec::new()
        }
    }

    /// Demo contact form: acknowledge, send nothing.
    pub fn contact_submitted(&self) -> Vec<Patch> {
        vec![Patch::Notify(
            i18n::text(self.ui_text(), self.prefs.language, TextKey::ContactSubmitted)
                .into_owned(),
        )]
    }

    pub fn attach_particles(&mut self, mut field: ParticleField) {
        field.set_theme(self.prefs.theme);
        self.particles = Some(field);
    }

    pub fn resize_particles(&mut self, width: f64, height: f64) {
        if let Some(field) = self.particles.as_mut() {
            field.resize(width, height);
        }
    }

    /// One animation frame: move particles, run due timers.
    pub fn tick(&mut self, now: f64) -> Vec<Patch> {
        if let Some(field) = self.particles.as_mut() {
            field.step();
        }
        let mut patches = Vec::new();
        // Drain first so a zero delay cannot spin within one frame.
        let mut due = Vec::new();
        while let Some((_, task)) = self.scheduler.pop_due(now) {
            due.push(task);
        }
        for task in due {
            match task {
                Task::TypewriterStep { generation } => {
                    if !self.typewriter.is_current(generation) {
                        continue; // stale chain from an earlier text list
                    }
                    if let Some(step) = self.typewriter.step() {
                        self.scheduler.schedule_at(
                            now + f64::from(step.delay_ms),
                            Task::TypewriterStep { generation },
                        );
                        patches.push(render::text(render::TYPING_SLOT, step.visible));
                    }
                }
            }
        }
        patches
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }
}

fn cursor_display(value: &str) -> Patch {
    Patch::Style {
        selector: render::TYPING_CURSOR,
        property: "display",
        value: value.to_string(),
    }
}
