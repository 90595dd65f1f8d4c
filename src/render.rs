//! Report Row View-Models
//!
//! Pure transform from API items to the values the report table displays.
//! Components only ever render these, so every string reaches the DOM as
//! escaped text.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::format::{format_brl, format_quantity, text_or_placeholder, truncate_with_ellipsis};
use crate::models::{ReportItem, SubItem, VoteStatus};

/// Descriptions containing any of these usually point at an annex
const LOT_KEYWORDS: [&str; 4] = ["TERMO DE REFERÊNCIA", "ANEXO", "EDITAL", "LOTE"];

/// Shown under the description of warning rows
pub const LOT_NOTICE: &str =
    "(Itens provavelmente detalhados no Termo de Referência. Clique no link ao lado para ver os anexos no PNCP.)";

const EDITAL_BASE_URL: &str = "https://pncp.gov.br/app/editais";

/// Characters escaped inside an edital path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Length of the description preview carried by vote buttons
const DESC_PREVIEW_CHARS: usize = 50;

pub const WARNING_ROW_CLASS: &str = "linha-aviso";

/// Vote counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub sobrepreco: usize,
    pub preco_ok: usize,
    pub abaixo_preco: usize,
}

impl VoteTally {
    pub fn count(statuses: impl IntoIterator<Item = VoteStatus>) -> Self {
        statuses.into_iter().fold(Self::default(), |mut tally, status| {
            match status {
                VoteStatus::Sobrepreco => tally.sobrepreco += 1,
                VoteStatus::PrecoOk => tally.preco_ok += 1,
                VoteStatus::AbaixoPreco => tally.abaixo_preco += 1,
                VoteStatus::Unknown => {}
            }
            tally
        })
    }

    pub fn get(&self, status: VoteStatus) -> usize {
        match status {
            VoteStatus::Sobrepreco => self.sobrepreco,
            VoteStatus::PrecoOk => self.preco_ok,
            VoteStatus::AbaixoPreco => self.abaixo_preco,
            VoteStatus::Unknown => 0,
        }
    }
}

/// Everything a vote button carries as `data-*` attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTarget {
    pub item_key: String,
    pub status: VoteStatus,
    pub item_desc: String,
}

impl VoteTarget {
    /// Rebuild a target from a vote button's `data-item-key`,
    /// `data-vote-status` and `data-item-desc`
    pub fn from_data(item_key: Option<String>, status: Option<String>, item_desc: Option<String>) -> Option<Self> {
        let item_key = item_key.filter(|k| !k.is_empty())?;
        let status = VoteStatus::parse_votable(status.as_deref()?)?;
        Some(Self {
            item_key,
            status,
            item_desc: item_desc.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubItemRow {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub item_key: String,
    pub description: String,
    /// Probable bundled lot: row gets [`WARNING_ROW_CLASS`] and [`LOT_NOTICE`]
    pub warning: bool,
    pub quantity: String,
    pub unit_price: String,
    pub modality: String,
    pub edital_url: String,
    pub tally: VoteTally,
    /// Empty unless the viewer is authenticated
    pub vote_buttons: Vec<VoteTarget>,
    pub sub_items: Vec<SubItemRow>,
    /// Procurement object, used as the row tooltip
    pub title: Option<String>,
}

impl ReportRow {
    pub fn row_class(&self) -> &'static str {
        if self.warning {
            WARNING_ROW_CLASS
        } else {
            ""
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.warning.then_some(LOT_NOTICE)
    }
}

/// External link to the procurement notice on PNCP
pub fn edital_url(cnpj: &str, ano: &str, sequencial: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        EDITAL_BASE_URL,
        utf8_percent_encode(cnpj, PATH_SEGMENT),
        utf8_percent_encode(ano, PATH_SEGMENT),
        utf8_percent_encode(sequencial, PATH_SEGMENT)
    )
}

/// Description mentions an annex/lot, or the row is a priceless single unit
pub fn is_probable_lot(item: &ReportItem) -> bool {
    let upper = item.descricao.as_deref().unwrap_or_default().to_uppercase();
    let keyword_hit = LOT_KEYWORDS.iter().any(|k| upper.contains(k));
    let priceless = item.valor_unit_estimado.map_or(true, |v| v == 0.0 || v.is_nan());
    keyword_hit || (priceless && item.quantidade == Some(1.0))
}

pub fn build_row(item: &ReportItem, authenticated: bool) -> ReportRow {
    let vote_buttons = if authenticated {
        let preview = truncate_with_ellipsis(
            item.descricao.as_deref().unwrap_or_default(),
            DESC_PREVIEW_CHARS,
        );
        VoteStatus::VOTABLE
            .into_iter()
            .map(|status| VoteTarget {
                item_key: item.item_key.clone(),
                status,
                item_desc: preview.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    ReportRow {
        item_key: item.item_key.clone(),
        description: text_or_placeholder(item.descricao.as_deref()),
        warning: is_probable_lot(item),
        quantity: format_quantity(item.quantidade),
        unit_price: format_brl(item.valor_unit_estimado),
        modality: text_or_placeholder(item.licitacao_modalidade.as_deref()),
        edital_url: edital_url(&item.cnpj, &item.ano, &item.sequencial),
        tally: VoteTally::count(item.contribuicoes.iter().map(|c| c.status)),
        vote_buttons,
        sub_items: item.sub_itens.iter().map(sub_item_row).collect(),
        title: item
            .licitacao_objeto
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

fn sub_item_row(sub: &SubItem) -> SubItemRow {
    SubItemRow {
        description: text_or_placeholder(Some(&sub.descricao)),
        quantity: format_quantity(sub.quantidade),
        unit_price: format_brl(sub.valor_unitario),
    }
}

/// Rows in API order
pub fn build_rows(items: &[ReportItem], authenticated: bool) -> Vec<ReportRow> {
    items.iter().map(|item| build_row(item, authenticated)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contribution;

    fn make_item(descricao: &str, quantidade: f64, valor: Option<f64>) -> ReportItem {
        ReportItem {
            descricao: Some(descricao.to_string()),
            quantidade: Some(quantidade),
            valor_unit_estimado: valor,
            licitacao_modalidade: Some("Pregão - Eletrônico".to_string()),
            cnpj: "12345678000190".to_string(),
            ano: "2024".to_string(),
            sequencial: "17".to_string(),
            item_key: format!("12345678000190-2024-17-{}", descricao.len()),
            ..Default::default()
        }
    }

    fn vote(status: VoteStatus) -> Contribution {
        Contribution { status }
    }

    #[test]
    fn test_normal_row() {
        let rows = build_rows(&[make_item("Caneta", 1.0, Some(2.5))], false);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert!(!row.warning);
        assert_eq!(row.row_class(), "");
        assert_eq!(row.notice(), None);
        assert_eq!(row.unit_price, "R$\u{a0}2,50");
        assert_eq!(row.quantity, "1");
        assert_eq!(row.edital_url, "https://pncp.gov.br/app/editais/12345678000190/2024/17");
    }

    #[test]
    fn test_procurement_object_becomes_row_title() {
        let mut item = make_item("Caneta", 1.0, Some(2.5));
        assert_eq!(build_row(&item, false).title, None);

        item.licitacao_objeto = Some("  ".to_string());
        assert_eq!(build_row(&item, false).title, None);

        item.licitacao_objeto = Some("Aquisição de material de expediente".to_string());
        assert_eq!(
            build_row(&item, false).title.as_deref(),
            Some("Aquisição de material de expediente")
        );
    }

    #[test]
    fn test_keyword_rows_are_flagged() {
        for desc in ["ANEXO I", "conforme termo de referência", "Edital completo", "lote 3 - material"] {
            let row = build_row(&make_item(desc, 5.0, Some(10.0)), false);
            assert!(row.warning, "{desc} should be flagged");
            assert_eq!(row.row_class(), WARNING_ROW_CLASS);
            assert_eq!(row.notice(), Some(LOT_NOTICE));
        }
    }

    #[test]
    fn test_priceless_single_unit_is_flagged() {
        assert!(build_row(&make_item("Serviço de limpeza", 1.0, Some(0.0)), false).warning);
        assert!(build_row(&make_item("Serviço de limpeza", 1.0, None), false).warning);
        assert!(!build_row(&make_item("Serviço de limpeza", 2.0, None), false).warning);
        assert!(!build_row(&make_item("Serviço de limpeza", 1.0, Some(3.0)), false).warning);
    }

    #[test]
    fn test_anexo_with_zero_price_is_warning() {
        let row = build_row(&make_item("ANEXO I", 1.0, Some(0.0)), true);
        assert!(row.warning);
        assert_eq!(row.unit_price, "R$\u{a0}0,00");
    }

    #[test]
    fn test_missing_fields_use_placeholder() {
        let item = ReportItem { item_key: "k".to_string(), ..Default::default() };
        let row = build_row(&item, false);
        assert_eq!(row.description, "N/D");
        assert_eq!(row.quantity, "N/D");
        assert_eq!(row.unit_price, "N/D");
        assert_eq!(row.modality, "N/D");
    }

    #[test]
    fn test_vote_buttons_only_when_authenticated() {
        let items = vec![make_item("Caneta", 1.0, Some(2.5)), make_item("Lápis", 3.0, Some(1.0))];

        for row in build_rows(&items, false) {
            assert!(row.vote_buttons.is_empty());
        }

        for row in build_rows(&items, true) {
            assert_eq!(row.vote_buttons.len(), 3);
            let statuses: Vec<_> = row.vote_buttons.iter().map(|b| b.status).collect();
            assert_eq!(statuses, VoteStatus::VOTABLE.to_vec());
            assert!(row.vote_buttons.iter().all(|b| b.item_key == row.item_key));
        }
    }

    #[test]
    fn test_vote_button_description_preview() {
        let long = "A".repeat(80);
        let row = build_row(&make_item(&long, 2.0, Some(1.0)), true);
        assert_eq!(row.vote_buttons[0].item_desc, format!("{}...", "A".repeat(50)));
    }

    #[test]
    fn test_tally_counts_always_present() {
        let mut item = make_item("Caneta", 1.0, Some(2.5));
        item.contribuicoes = vec![
            vote(VoteStatus::Sobrepreco),
            vote(VoteStatus::Sobrepreco),
            vote(VoteStatus::AbaixoPreco),
            vote(VoteStatus::Unknown),
        ];
        let row = build_row(&item, false);
        assert_eq!(row.tally, VoteTally { sobrepreco: 2, preco_ok: 0, abaixo_preco: 1 });
        assert_eq!(row.tally.get(VoteStatus::PrecoOk), 0);
    }

    #[test]
    fn test_edital_url_escapes_segments() {
        assert_eq!(
            edital_url("12/34", "2024", "1 2"),
            "https://pncp.gov.br/app/editais/12%2F34/2024/1%202"
        );
    }

    #[test]
    fn test_vote_target_from_button_data() {
        let target = VoteTarget::from_data(
            Some("k-9".to_string()),
            Some("ABAIXO_PRECO".to_string()),
            Some("Caneta...".to_string()),
        )
        .unwrap();
        assert_eq!(target.item_key, "k-9");
        assert_eq!(target.status, VoteStatus::AbaixoPreco);

        assert!(VoteTarget::from_data(Some("k-9".to_string()), Some("BARATO".to_string()), None).is_none());
        assert!(VoteTarget::from_data(Some(String::new()), Some("PRECO_OK".to_string()), None).is_none());
        assert!(VoteTarget::from_data(None, Some("PRECO_OK".to_string()), None).is_none());
    }

    #[test]
    fn test_sub_items_are_formatted() {
        let mut item = make_item("LOTE 1", 1.0, None);
        item.sub_itens = vec![SubItem {
            descricao: "Resma de papel".to_string(),
            quantidade: Some(20.0),
            valor_unitario: Some(24.9),
        }];
        let row = build_row(&item, false);
        assert_eq!(
            row.sub_items,
            vec![SubItemRow {
                description: "Resma de papel".to_string(),
                quantity: "20".to_string(),
                unit_price: "R$\u{a0}24,90".to_string(),
            }]
        );
    }
}
