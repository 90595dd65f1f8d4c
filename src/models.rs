//! Frontend Models
//!
//! Data structures matching the report API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Price assessment a contributor can vote for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteStatus {
    Sobrepreco,
    PrecoOk,
    AbaixoPreco,
    /// Anything the backend sends that this client does not know about
    #[serde(other)]
    Unknown,
}

impl VoteStatus {
    /// The statuses a user can vote for, in display order
    pub const VOTABLE: [VoteStatus; 3] = [
        VoteStatus::Sobrepreco,
        VoteStatus::PrecoOk,
        VoteStatus::AbaixoPreco,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteStatus::Sobrepreco => "SOBREPRECO",
            VoteStatus::PrecoOk => "PRECO_OK",
            VoteStatus::AbaixoPreco => "ABAIXO_PRECO",
            VoteStatus::Unknown => "UNKNOWN",
        }
    }

    /// Parse a status carried in a `data-vote-status` attribute.
    /// Only votable statuses are accepted.
    pub fn parse_votable(value: &str) -> Option<VoteStatus> {
        Self::VOTABLE.into_iter().find(|s| s.as_str() == value)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VoteStatus::Sobrepreco => "📈",
            VoteStatus::PrecoOk => "✅",
            VoteStatus::AbaixoPreco => "📉",
            VoteStatus::Unknown => "❔",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            VoteStatus::Sobrepreco => "📈 Acima",
            VoteStatus::PrecoOk => "✅ Na Média",
            VoteStatus::AbaixoPreco => "📉 Abaixo",
            VoteStatus::Unknown => "❔",
        }
    }
}

/// A vote already registered on the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub status: VoteStatus,
}

/// Crowd-sourced breakdown of a bundled lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubItem {
    pub descricao: String,
    #[serde(default)]
    pub quantidade: Option<f64>,
    #[serde(default)]
    pub valor_unitario: Option<f64>,
}

/// One procurement item row of the report (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportItem {
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub quantidade: Option<f64>,
    #[serde(default)]
    pub valor_unit_estimado: Option<f64>,
    #[serde(default)]
    pub licitacao_modalidade: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub cnpj: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub ano: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub sequencial: String,
    #[serde(default)]
    pub item_key: String,
    #[serde(default)]
    pub contribuicoes: Vec<Contribution>,
    #[serde(default)]
    pub sub_itens: Vec<SubItem>,
    /// Object of the whole procurement, shown as the row tooltip
    #[serde(default)]
    pub licitacao_objeto: Option<String>,
}

/// Error payload returned by both endpoints on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub erro: Option<String>,
}

/// Body of `POST /api/contribuir`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionRequest {
    pub item_key: String,
    pub status: VoteStatus,
    pub link: String,
    pub comment: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

/// `cnpj`, `ano` and `sequencial` arrive as strings or numbers depending on
/// the upstream source; both are kept as text for link building.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Int(n)) => n.to_string(),
        Some(TextOrNumber::Float(f)) => f.to_string(),
        None => String::new(),
    })
}
