use serde::{Deserialize, Serialize};

use crate::llm_client::Backend;

/// One backend's output for one contract.
///
/// On failure `error` is set and the text fields carry placeholders, so a
/// result is always renderable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub backend: Backend,
    pub contract_id: String,
    pub summary: String,
    pub proposal_outline: String,
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Stand-in for a (contract, backend) pairing that produced no result.
    pub fn missing(contract_id: &str, backend: Backend) -> Self {
        Self {
            backend,
            contract_id: contract_id.to_string(),
            summary: format!("No {} result was produced for this contract.", backend.label()),
            proposal_outline: "Unable to generate proposal.".to_string(),
            error: Some("no result was produced".to_string()),
        }
    }
}

/// Optional bidder details used to tailor proposal outlines.
/// Only considered when `company_name` is non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub company_name: String,
    pub experience: String,
    pub capabilities: String,
    pub certifications: String,
    pub past_performance: String,
    pub competitive_advantages: String,
}

impl CompanyProfile {
    pub fn is_present(&self) -> bool {
        !self.company_name.trim().is_empty()
    }
}
