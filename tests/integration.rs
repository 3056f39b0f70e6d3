// Integration tests (native) for the `folio-page` crate.
// These drive `AppState` with fixture documents and a virtual clock, so they
// run under `cargo test` on the host without a browser.

use folio_page::config::SiteConfig;
use folio_page::loader::{self, LoadError};
use folio_page::model::{AboutMe, Documents, Localized, PortfolioSection, Profile};
use folio_page::prefs::{KeyValueStore, MemoryStore};
use folio_page::render;
use folio_page::{AppState, Language, Patch, Preferences, Theme};

const CV: &str = include_str!("fixtures/cv_data.json");
const PORTFOLIO: &str = include_str!("fixtures/portfolio_data.json");

fn fixture_docs() -> Documents {
    loader::assemble(
        &SiteConfig::default(),
        Ok(CV.to_string()),
        Ok(PORTFOLIO.to_string()),
    )
    .expect("fixtures parse")
}

fn app(lang: Language) -> AppState {
    AppState::new(
        SiteConfig::default(),
        Preferences {
            theme: Theme::Dark,
            language: lang,
        },
    )
}

fn items<'a>(patches: &'a [Patch], selector: &str) -> &'a [String] {
    patches
        .iter()
        .find(|p| p.selector() == Some(selector) && p.items().is_some())
        .and_then(|p| p.items())
        .unwrap_or_else(|| panic!("no list patch for {selector}"))
}

fn text_of(patches: &[Patch], selector: &str) -> Option<String> {
    patches.iter().rev().find_map(|p| match p {
        Patch::Text { selector: s, text } if *s == selector => Some(text.clone()),
        _ => None,
    })
}

#[test]
fn every_container_gets_expected_item_count() {
    let mut app = app(Language::En);
    let patches = app.documents_loaded(Ok(fixture_docs()), 0.0);
    assert_eq!(items(&patches, render::TIMELINE).len(), 2);
    assert_eq!(items(&patches, render::TOOLKIT_GRID).len(), 2);
    assert_eq!(items(&patches, render::LANGUAGES_SHOWCASE).len(), 2);
    assert_eq!(items(&patches, render::CERTIFICATES_SHOWCASE).len(), 2);
    // 3 projects + the "coming soon" card
    let cards = items(&patches, render::PORTFOLIO_GRID);
    assert_eq!(cards.len(), 4);
    assert!(cards[3].contains("coming-soon-item"));

    let mut ar = self::app(Language::Ar);
    let patches = ar.documents_loaded(Ok(fixture_docs()), 0.0);
    assert_eq!(items(&patches, render::PORTFOLIO_GRID).len(), 3);
}

#[test]
fn project_without_media_renders_titled_placeholder() {
    let mut app = app(Language::En);
    let patches = app.documents_loaded(Ok(fixture_docs()), 0.0);
    let cards = items(&patches, render::PORTFOLIO_GRID);
    assert!(cards[0].contains("<video"));
    assert!(cards[1].contains("<img src=\"media/dash.png\""));
    assert!(cards[1].contains(">Try it</a>"));
    assert!(cards[2].contains("video-placeholder"));
    assert!(cards[2].contains("CLI toolkit"));
}

#[test]
fn certificates_link_only_with_file() {
    let mut app = app(Language::En);
    let patches = app.documents_loaded(Ok(fixture_docs()), 0.0);
    let certs = items(&patches, render::CERTIFICATES_SHOWCASE);
    assert!(certs[0].contains("download-certificate-button"));
    assert!(!certs[1].contains("download-certificate-button"));
}

#[test]
fn language_round_trip_restores_rendered_text() {
    let store = MemoryStore::new();
    let mut app = app(Language::En);
    let initial = app.documents_loaded(Ok(fixture_docs()), 0.0);

    let arabic = app.toggle_language(&store, 10.0);
    assert_ne!(arabic, initial);
    assert_eq!(text_of(&arabic, "#hero-name").as_deref(), Some("سارة خالد"));
    assert!(arabic.contains(&Patch::DocumentTitle("سارة خالد | Portfolio & Innovations".into())));
    assert_eq!(store.get("lang").as_deref(), Some("ar"));

    let back = app.toggle_language(&store, 20.0);
    assert_eq!(back, initial);
    assert_eq!(store.get("lang").as_deref(), Some("en"));
}

#[test]
fn language_button_title_comes_from_other_language() {
    let mut app = app(Language::Ar);
    let patches = app.documents_loaded(Ok(fixture_docs()), 0.0);
    assert!(patches.contains(&Patch::DocumentLanguage {
        lang: Language::Ar,
        button_title: "English please".into(),
    }));
}

#[test]
fn theme_round_trip_persists_and_recolors_particles() {
    use rand::SeedableRng;
    let store = MemoryStore::new();
    let mut app = app(Language::En);
    app.documents_loaded(Ok(fixture_docs()), 0.0);
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    app.attach_particles(folio_page::effects::ParticleField::new(
        &mut rng, 50, 640.0, 480.0, Theme::Light,
    ));
    // attaching adopts the page theme
    let dark = folio_page::effects::particle_color(Theme::Dark);
    assert!(app.particles().unwrap().particles().iter().all(|p| p.color == dark));

    let patches = app.toggle_theme(&store);
    assert_eq!(store.get("theme").as_deref(), Some("light-theme"));
    assert!(patches.contains(&Patch::BodyTheme(Theme::Light)));
    assert!(patches.contains(&Patch::ThemeControls {
        theme: Theme::Light,
        title: "Dark mode".into(),
    }));
    let light = folio_page::effects::particle_color(Theme::Light);
    assert!(app.particles().unwrap().particles().iter().all(|p| p.color == light));

    app.toggle_theme(&store);
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark-theme"));
    app.tick(16.0);
    assert_eq!(app.particles().unwrap().particles().len(), 50);
    assert!(app.particles().unwrap().particles().iter().all(|p| p.color == dark));
}

fn two_text_docs() -> Documents {
    let mut ui = folio_page::model::UiText::new();
    ui.insert("hero_generic_skill".into(), "Hi".into());
    let profile = Profile {
        about_me: Some(AboutMe {
            name: "N".into(),
            title: "Yo".into(),
            ..Default::default()
        }),
        ui_text: ui,
        ..Default::default()
    };
    Documents {
        profile: Localized {
            ar: None,
            en: Some(profile),
        },
        portfolio: Localized {
            ar: None,
            en: Some(PortfolioSection::default()),
        },
    }
}

#[test]
fn typewriter_cycles_through_texts_on_virtual_clock() {
    let mut app = app(Language::En);
    app.documents_loaded(Ok(two_text_docs()), 0.0);
    assert_eq!(app.typewriter().texts(), ["Yo".to_string(), "Hi".to_string()]);

    // Frame every millisecond; record what the slot shows at sample points.
    let samples = [
        (0, ""),
        (0, "Y"),
        (149, "Y"),
        (150, "Yo"),
        (2149, "Yo"),
        (2150, "Y"),
        (2225, ""),
        (2724, ""),
        (2725, "H"),
        (2875, "Hi"),
        (4875, "H"),
        (4950, ""),
        (5450, "Y"),
    ];
    let mut shown = String::new();
    let mut clock = 0u32;
    for (i, (at, expect)) in samples.iter().enumerate() {
        if i == 0 {
            assert_eq!(shown, *expect);
            continue;
        }
        while clock <= *at {
            if let Some(t) = text_of(&app.tick(f64::from(clock)), render::TYPING_SLOT) {
                shown = t;
            }
            clock += 1;
        }
        assert_eq!(shown, *expect, "at {at}ms");
    }
}

#[test]
fn portfolio_failure_shows_localized_error_only() {
    let mut app = app(Language::Ar);
    let failure = loader::assemble(
        &SiteConfig::default(),
        Ok(CV.to_string()),
        Err(LoadError::Status {
            path: "portfolio_data.json".into(),
            status: 500,
        }),
    )
    .unwrap_err();
    let patches = app.documents_loaded(Err(failure), 0.0);
    assert_eq!(
        patches,
        vec![Patch::Text {
            selector: render::TYPING_SLOT,
            text: "تعذر تحميل البيانات.".into(),
        }]
    );
    assert!(app.documents().is_none());

    // Later interactions never render sections.
    let store = MemoryStore::new();
    let after = app.toggle_language(&store, 100.0);
    assert!(after.iter().all(|p| p.items().is_none()));
    assert!(app.tick(5_000.0).is_empty());
}

#[test]
fn profile_failure_uses_built_in_message() {
    let mut app = app(Language::En);
    let failure = loader::assemble(
        &SiteConfig::default(),
        Ok("[1, 2".to_string()),
        Ok(PORTFOLIO.to_string()),
    )
    .unwrap_err();
    let patches = app.documents_loaded(Err(failure), 0.0);
    assert_eq!(text_of(&patches, render::TYPING_SLOT).as_deref(), Some("Error loading data."));
    assert_eq!(patches.len(), 1);
}

#[test]
fn rendering_twice_is_idempotent() {
    let mut app = app(Language::En);
    let first = app.documents_loaded(Ok(fixture_docs()), 0.0);
    let second = app.render(0.0);
    assert_eq!(first, second);
}

#[test]
fn nav_toggle_round_trip() {
    let mut app = app(Language::Ar);
    assert_eq!(
        app.toggle_nav(),
        vec![Patch::NavMenu {
            open: true,
            lang: Language::Ar
        }]
    );
    assert_eq!(
        app.toggle_nav(),
        vec![Patch::NavMenu {
            open: false,
            lang: Language::Ar
        }]
    );
}

#[test]
fn profile_without_about_me_renders_rest_of_page() {
    let mut docs = fixture_docs();
    if let Some(en) = docs.profile.en.as_mut() {
        en.about_me = None;
    }
    let mut app = app(Language::En);
    let patches = app.documents_loaded(Ok(docs), 0.0);
    assert_eq!(text_of(&patches, "#hero-name"), None);
    assert_eq!(text_of(&patches, render::FOOTER_NAME), None);
    assert_eq!(items(&patches, render::TIMELINE).len(), 2);
    assert_eq!(
        text_of(&patches, render::TYPING_SLOT).as_deref(),
        Some("Innovator and Developer")
    );
    assert_eq!(app.pending_timers(), 0);
}

#[test]
fn fractional_skill_level_draws_bar() {
    let cv = CV.replace("\"level_percentage\": 90", "\"level_percentage\": 87.5");
    let docs = loader::assemble(&SiteConfig::default(), Ok(cv), Ok(PORTFOLIO.to_string()))
        .expect("fractional level parses");
    let mut app = app(Language::En);
    let patches = app.documents_loaded(Ok(docs), 0.0);
    let grid = items(&patches, render::TOOLKIT_GRID).concat();
    assert!(grid.contains("width: 87.5%"));
}
