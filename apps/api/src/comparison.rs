//! Pairs each contract with both backends' results, in contract order.

use serde::Serialize;

use crate::llm_client::Backend;
use crate::models::{AnalysisResult, ContractRecord};

/// One contract with its two results in fixed positions:
/// `primary` is the left column, `secondary` the right.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonBlock {
    pub contract: ContractRecord,
    pub primary: AnalysisResult,
    pub secondary: AnalysisResult,
}

impl ComparisonBlock {
    pub fn result(&self, backend: Backend) -> &AnalysisResult {
        match backend {
            Backend::Primary => &self.primary,
            Backend::Secondary => &self.secondary,
        }
    }
}

/// Builds one block per record, in record order.
///
/// Results may arrive in any order. A pairing with no result gets an
/// error-indicated placeholder; for duplicate pairings the first result wins;
/// results for unknown contracts are ignored. Blocks are never dropped.
pub fn assemble(records: &[ContractRecord], results: Vec<AnalysisResult>) -> Vec<ComparisonBlock> {
    let mut slots: Vec<[Option<AnalysisResult>; 2]> = vec![[None, None]; records.len()];

    for result in results {
        let Some(index) = records
            .iter()
            .position(|r| r.notice_id == result.contract_id)
        else {
            continue;
        };
        let slot = &mut slots[index][slot_index(result.backend)];
        if slot.is_none() {
            *slot = Some(result);
        }
    }

    records
        .iter()
        .zip(slots)
        .map(|(record, [primary, secondary])| ComparisonBlock {
            contract: record.clone(),
            primary: primary
                .unwrap_or_else(|| AnalysisResult::missing(&record.notice_id, Backend::Primary)),
            secondary: secondary
                .unwrap_or_else(|| AnalysisResult::missing(&record.notice_id, Backend::Secondary)),
        })
        .collect()
}

fn slot_index(backend: Backend) -> usize {
    match backend {
        Backend::Primary => 0,
        Backend::Secondary => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str) -> ContractRecord {
        ContractRecord {
            notice_id: id.to_string(),
            title: format!("Contract {id}"),
            department: "General Services Administration".to_string(),
            notice_type: "Solicitation".to_string(),
            naics_code: "561730".to_string(),
            posted_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            response_deadline: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            description: "Scope".to_string(),
        }
    }

    fn ok(id: &str, backend: Backend) -> AnalysisResult {
        AnalysisResult {
            backend,
            contract_id: id.to_string(),
            summary: format!("{id} summary from {}", backend.label()),
            proposal_outline: format!("{id} proposal from {}", backend.label()),
            error: None,
        }
    }

    fn failed(id: &str, backend: Backend) -> AnalysisResult {
        AnalysisResult {
            error: Some("authentication failed".to_string()),
            ..ok(id, backend)
        }
    }

    fn records() -> Vec<ContractRecord> {
        vec![record("A"), record("B"), record("C")]
    }

    #[test]
    fn test_preserves_record_order_for_every_result_order() {
        let records = records();
        let all: Vec<AnalysisResult> = ["A", "B", "C"]
            .iter()
            .flat_map(|id| [ok(id, Backend::Primary), ok(id, Backend::Secondary)])
            .collect();

        // Every rotation and its reverse of the six completions
        for shift in 0..all.len() {
            let mut rotated = all.clone();
            rotated.rotate_left(shift);
            for results in [rotated.clone(), rotated.into_iter().rev().collect()] {
                let blocks = assemble(&records, results);
                let ids: Vec<&str> = blocks
                    .iter()
                    .map(|b| b.contract.notice_id.as_str())
                    .collect();
                assert_eq!(ids, ["A", "B", "C"]);
                for block in &blocks {
                    assert_eq!(block.primary.backend, Backend::Primary);
                    assert_eq!(block.secondary.backend, Backend::Secondary);
                    assert_eq!(block.primary.contract_id, block.contract.notice_id);
                    assert_eq!(block.secondary.contract_id, block.contract.notice_id);
                }
            }
        }
    }

    #[test]
    fn test_double_failure_still_produces_block() {
        let records = vec![record("A")];
        let blocks = assemble(
            &records,
            vec![failed("A", Backend::Secondary), failed("A", Backend::Primary)],
        );
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].primary.is_error());
        assert!(blocks[0].secondary.is_error());
    }

    #[test]
    fn test_missing_pairing_gets_placeholder() {
        let blocks = assemble(&records(), vec![ok("B", Backend::Primary)]);
        assert_eq!(blocks.len(), 3);

        let a = &blocks[0];
        assert!(a.primary.is_error());
        assert!(a.secondary.is_error());
        assert!(!a.primary.summary.is_empty());
        assert_eq!(a.primary.contract_id, "A");

        assert!(!blocks[1].primary.is_error());
        assert!(blocks[1].secondary.is_error());
    }

    #[test]
    fn test_first_duplicate_wins_and_unknown_ignored() {
        let mut second = ok("A", Backend::Primary);
        second.summary = "late duplicate".to_string();

        let blocks = assemble(
            &[record("A")],
            vec![ok("A", Backend::Primary), second, ok("Z", Backend::Secondary)],
        );
        assert_eq!(blocks[0].primary.summary, "A summary from Google Gemini");
        assert!(blocks[0].secondary.is_error(), "Z result must not fill A");
    }

    #[test]
    fn test_empty_records_yield_no_blocks() {
        assert!(assemble(&[], vec![ok("A", Backend::Primary)]).is_empty());
    }

    #[test]
    fn test_result_accessor_matches_columns() {
        let blocks = assemble(
            &[record("A")],
            vec![ok("A", Backend::Secondary), ok("A", Backend::Primary)],
        );
        assert_eq!(blocks[0].result(Backend::Primary).backend, Backend::Primary);
        assert_eq!(
            blocks[0].result(Backend::Secondary).backend,
            Backend::Secondary
        );
    }
}
