//! Search pipeline: keyword → synthesize → analyze (3 records × 2 backends) → assemble.
//!
//! All six analyses run concurrently and every one settles before assembly.
//! Output order never depends on completion order.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::analyze;
use crate::comparison::{assemble, ComparisonBlock};
use crate::contracts::{normalize_keyword, synthesize};
use crate::llm_client::{Backend, BackendPair};
use crate::models::{CompanyProfile, ContractRecord};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub company_profile: Option<CompanyProfile>,
}

/// The in-memory search session returned to the caller. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub session_id: Uuid,
    /// Keyword actually used, after trimming / defaulting.
    pub keyword: String,
    pub blocks: Vec<ComparisonBlock>,
}

impl SearchOutcome {
    pub fn failed_results(&self) -> usize {
        self.blocks
            .iter()
            .flat_map(|b| [&b.primary, &b.secondary])
            .filter(|r| r.is_error())
            .count()
    }
}

pub async fn run_search(backends: &BackendPair, request: &SearchRequest) -> SearchOutcome {
    let session_id = Uuid::new_v4();
    let keyword = normalize_keyword(&request.keyword).to_string();
    let span = info_span!("search", %session_id, keyword = %keyword);

    async move {
        let records = synthesize(&keyword);
        info!("Synthesized {} contract records", records.len());

        let profile = request
            .company_profile
            .as_ref()
            .filter(|p| p.is_present());
        let blocks = compare_records(backends, &records, profile).await;

        let outcome = SearchOutcome {
            session_id,
            keyword,
            blocks,
        };
        info!(
            "Search complete: {} blocks, {} failed results",
            outcome.blocks.len(),
            outcome.failed_results()
        );
        outcome
    }
    .instrument(span)
    .await
}

/// Analyzes every record against both backends concurrently, then assembles.
pub async fn compare_records(
    backends: &BackendPair,
    records: &[ContractRecord],
    profile: Option<&CompanyProfile>,
) -> Vec<ComparisonBlock> {
    let analyses = records.iter().flat_map(move |record| {
        Backend::ALL
            .into_iter()
            .map(move |backend| analyze(record, backend, backends.get(backend), profile))
    });

    let results = join_all(analyses).await;
    assemble(records, results)
}
