//! Report Endpoint
//!
//! `GET /api/gerar-relatorio?cnpj=..&inicio=..&fim=..`

use leptos::logging::log;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::fetch::{read_error_body, read_json, send};
use crate::config::PageConfig;
use crate::error::ApiError;
use crate::format::{strip_cnpj_punctuation, strip_separators};
use crate::models::ReportItem;

/// Raw values of the filter form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub cnpj: String,
    /// `YYYY-MM-DD` from the date input
    pub data_inicio: String,
    pub data_fim: String,
}

impl SearchFilter {
    /// `cnpj=<cnpj>&inicio=<YYYYMMDD>&fim=<YYYYMMDD>`
    pub fn query_string(&self) -> String {
        let encode = |v: String| utf8_percent_encode(&v, NON_ALPHANUMERIC).to_string();
        format!(
            "cnpj={}&inicio={}&fim={}",
            encode(strip_cnpj_punctuation(&self.cnpj)),
            encode(strip_separators(&self.data_inicio)),
            encode(strip_separators(&self.data_fim))
        )
    }
}

fn status_fallback(status: u16) -> String {
    format!("Erro {} ao buscar dados.", status)
}

pub(super) async fn fetch_report(config: &PageConfig, filter: &SearchFilter) -> Result<Vec<ReportItem>, ApiError> {
    let url = format!("{}?{}", config.report_url(), filter.query_string());
    log!("[SEARCH] GET {}", url);

    let resp = send("GET", &url, None).await?;
    if !resp.ok() {
        let status = resp.status();
        return Err(ApiError::rejected(status, read_error_body(&resp).await, status_fallback));
    }

    let body = read_json(&resp).await?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
