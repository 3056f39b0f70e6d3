//! Loading the profile and portfolio documents.
//!
//! Both are fetched in parallel; the load succeeds only if both respond with
//! a success status and parse. There is no retry.

use std::fmt;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::SiteConfig;
use crate::model::{Documents, PortfolioDocument, ProfileDocument};

#[derive(Clone, Debug, PartialEq)]
pub enum LoadError {
    /// No window / fetch API (e.g. running outside a browser).
    Unavailable,
    Network { path: String, message: String },
    Status { path: String, status: u16 },
    Parse { path: String, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Unavailable => f.write_str("fetch is not available"),
            LoadError::Network { path, message } => write!(f, "request for {path} failed: {message}"),
            LoadError::Status { path, status } => write!(f, "HTTP error! status: {status} for {path}"),
            LoadError::Parse { path, message } => write!(f, "invalid JSON in {path}: {message}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<LoadError> for JsValue {
    fn from(e: LoadError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// A failed load. `profile` is kept only so the error message can be
/// localized from its `ui_text`; it is never rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadFailure {
    pub cause: LoadError,
    pub profile: Option<ProfileDocument>,
}

impl From<LoadError> for LoadFailure {
    fn from(cause: LoadError) -> Self {
        Self {
            cause,
            profile: None,
        }
    }
}

fn parse<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

pub fn parse_profile(path: &str, body: &str) -> Result<ProfileDocument, LoadError> {
    parse(path, body)
}

pub fn parse_portfolio(path: &str, body: &str) -> Result<PortfolioDocument, LoadError> {
    parse(path, body)
}

/// Combine two already-fetched bodies (or fetch errors) into documents.
pub fn assemble(
    cfg: &SiteConfig,
    profile_body: Result<String, LoadError>,
    portfolio_body: Result<String, LoadError>,
) -> Result<Documents, LoadFailure> {
    let profile = parse_profile(&cfg.profile_path, &profile_body?)?;
    let portfolio = portfolio_body
        .and_then(|body| parse_portfolio(&cfg.portfolio_path, &body))
        .map_err(|cause| LoadFailure {
            cause,
            profile: Some(profile.clone()),
        })?;
    Ok(Documents { profile, portfolio })
}

fn js_message(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}

async fn read_body(request: JsFuture, path: &str) -> Result<String, LoadError> {
    let network = |e: JsValue| LoadError::Network {
        path: path.to_string(),
        message: js_message(&e),
    };
    let resp: Response = request.await.map_err(network)?.dyn_into().map_err(network)?;
    if !resp.ok() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    let body = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?;
    body.as_string().ok_or_else(|| LoadError::Parse {
        path: path.to_string(),
        message: "response body is not text".to_string(),
    })
}

/// Fetch both documents. Both requests are in flight before either is awaited.
pub async fn load_documents(cfg: &SiteConfig) -> Result<Documents, LoadFailure> {
    let win = web_sys::window().ok_or(LoadError::Unavailable)?;
    let profile_req = JsFuture::from(win.fetch_with_str(&cfg.profile_path));
    let portfolio_req = JsFuture::from(win.fetch_with_str(&cfg.portfolio_path));
    let profile_body = read_body(profile_req, &cfg.profile_path).await;
    let portfolio_body = read_body(portfolio_req, &cfg.portfolio_path).await;
    assemble(cfg, profile_body, portfolio_body)
}
