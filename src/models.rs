use serde::{Deserialize, Serialize};

/// The named extraction algorithm chosen for a hostname.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Kabum,
    Pichau,
    MercadoLivre,
    Generic,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Kabum => "kabum",
            Strategy::Pichau => "pichau",
            Strategy::MercadoLivre => "mercadolivre",
            Strategy::Generic => "generic",
        }
    }
}

/// Which cross-field heuristic filled a missing price.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inference {
    #[serde(rename = "vista_from_parcelado_5pct_discount")]
    VistaFromParcelado,
    #[serde(rename = "parcelado_equals_vista_fallback")]
    ParceladoEqualsVista,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Source {
    pub hostname: String,
    pub strategy: Strategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred: Option<Inference>,
}

/// Outcome of one extraction call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub url: String,
    pub title: Option<String>,
    pub price_vista: Option<f64>,
    pub price_parcelado: Option<f64>,
    pub source: Source,
}

/// Prices and optional title as reported by a site strategy, before
/// reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyOutput {
    pub title: Option<String>,
    pub price_vista: Option<f64>,
    pub price_parcelado: Option<f64>,
}

/// Failure body reported to callers, `{ error, details }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

impl ErrorBody {
    pub fn collect_failed(details: impl ToString) -> Self {
        Self {
            error: "Falha ao coletar dados".to_string(),
            details: details.to_string(),
        }
    }
}

/// One line of a batch run: either a result or the reason it failed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Outcome {
    Extracted(ExtractionResult),
    Failed(ErrorBody),
}

/// What `archiver` writes to disk.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub archived_at: String,
    pub results: Vec<Outcome>,
}
