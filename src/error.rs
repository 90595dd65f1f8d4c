//! Error Types
//!
//! Failures of the two API calls and of local vote validation.

use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server's `erro` when it sent one
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Request never produced a response
    #[error("Falha de comunicação com o servidor: {0}")]
    Transport(String),

    /// 2xx response whose body is not the expected JSON
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),

    /// Browser APIs unavailable or misbehaving
    #[error("Erro no navegador: {0}")]
    Browser(String),
}

impl ApiError {
    /// Build a rejection from an error body, falling back to `fallback` when
    /// the body was unparseable or carried no `erro`.
    pub fn rejected(status: u16, body: Option<ErrorBody>, fallback: impl FnOnce(u16) -> String) -> Self {
        let message = body
            .and_then(|b| b.erro)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback(status));
        ApiError::Rejected { status, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContributionError {
    #[error("Você precisa estar logado para contribuir.")]
    NotAuthenticated,

    #[error("Por favor, insira um link de referência.")]
    MissingLink,

    #[error(transparent)]
    Api(#[from] ApiError),
}
