//! Page Configuration
//!
//! Settings supplied by the hosting page through `<body data-*>` attributes.

use leptos::logging::log;

pub const REPORT_PATH: &str = "/api/gerar-relatorio";
pub const CONTRIBUTE_PATH: &str = "/api/contribuir";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageConfig {
    /// `data-is-authenticated`: gates vote buttons and the contribution modal
    pub authenticated: bool,
    /// `data-api-base`: prefix for both endpoints, empty means same origin
    pub api_base: String,
}

impl PageConfig {
    pub fn from_attributes(is_authenticated: Option<&str>, api_base: Option<&str>) -> Self {
        Self {
            authenticated: is_authenticated.map(str::trim) == Some("true"),
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
        }
    }

    /// Read the body dataset; a missing body means an anonymous, same-origin page
    pub fn from_document() -> Self {
        let dataset = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.dataset());

        let config = match dataset {
            Some(ds) => Self::from_attributes(
                ds.get("isAuthenticated").as_deref(),
                ds.get("apiBase").as_deref(),
            ),
            None => Self::default(),
        };
        log!("[CONFIG] authenticated={} api_base={:?}", config.authenticated, config.api_base);
        config
    }

    pub fn report_url(&self) -> String {
        format!("{}{}", self.api_base, REPORT_PATH)
    }

    pub fn contribute_url(&self) -> String {
        format!("{}{}", self.api_base, CONTRIBUTE_PATH)
    }
}
