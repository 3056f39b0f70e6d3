//! Folio page core crate.
//!
//! Renders a bilingual (Arabic / English), theme-switchable portfolio page
//! from two JSON documents. Rendering, preferences, the typewriter headline
//! and the particle background are plain Rust (see [`app::AppState`]);
//! `web` is the only module that touches the browser.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod config;
pub mod effects;
pub mod i18n;
pub mod loader;
pub mod model;
pub mod prefs;
pub mod render;
pub mod scheduler;
mod web;

pub use app::{AppState, LoadState};
pub use config::{SiteConfig, TypingTimings};
pub use model::Documents;
pub use prefs::{Language, Preferences, Theme};
pub use render::Patch;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Already initialised when the module is instantiated twice (tests).
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Boot the page with the default configuration.
#[wasm_bindgen]
pub fn start_portfolio() -> Result<(), JsValue> {
    web::start(SiteConfig::default())
}

/// Boot the page with a JSON configuration object overlaid on the defaults.
#[wasm_bindgen]
pub fn start_portfolio_with_config(config_json: &str) -> Result<(), JsValue> {
    let cfg = SiteConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
    web::start(cfg)
}
