//! Report API Client
//!
//! Bindings to the two backend endpoints, organized by endpoint.

mod fetch;
mod report;
mod contribution;

use crate::config::PageConfig;
use crate::error::ApiError;
use crate::models::{ContributionRequest, ReportItem};

pub use report::SearchFilter;

/// Backend operations the controllers depend on
#[allow(async_fn_in_trait)]
pub trait ReportApi {
    /// `GET /api/gerar-relatorio`
    async fn fetch_report(&self, filter: &SearchFilter) -> Result<Vec<ReportItem>, ApiError>;

    /// `POST /api/contribuir`
    async fn contribute(&self, request: &ContributionRequest) -> Result<(), ApiError>;
}

/// Browser `fetch` implementation
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: PageConfig,
}

impl HttpApi {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }
}

impl ReportApi for HttpApi {
    async fn fetch_report(&self, filter: &SearchFilter) -> Result<Vec<ReportItem>, ApiError> {
        report::fetch_report(&self.config, filter).await
    }

    async fn contribute(&self, request: &ContributionRequest) -> Result<(), ApiError> {
        contribution::contribute(&self.config, request).await
    }
}
