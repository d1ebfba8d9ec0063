//! Asks one backend for a summary and a proposal outline of one contract.
//!
//! Infallible by contract: a failed call becomes an error-indicated
//! `AnalysisResult` with placeholder text. Nothing is retried.

use tracing::{debug, warn};

use crate::analysis::prompts::{
    fill_template, COMPANY_CONTEXT_TEMPLATE, CONTRACT_DETAILS_TEMPLATE, PROPOSAL_PROMPT_TEMPLATE,
    SUMMARY_PROMPT_TEMPLATE,
};
use crate::llm_client::{Backend, BackendError, TextGenerationBackend};
use crate::models::{AnalysisResult, CompanyProfile, ContractRecord};

const PROPOSAL_PLACEHOLDER: &str = "Unable to generate proposal.";

/// Runs both prompts for `record` against `client` concurrently.
pub async fn analyze(
    record: &ContractRecord,
    backend: Backend,
    client: &dyn TextGenerationBackend,
    profile: Option<&CompanyProfile>,
) -> AnalysisResult {
    let summary_prompt = build_summary_prompt(record);
    let proposal_prompt = build_proposal_prompt(record, profile);

    let (summary, proposal) = tokio::join!(
        client.generate(&summary_prompt),
        client.generate(&proposal_prompt)
    );

    let result = into_result(record, backend, non_blank(summary), non_blank(proposal));
    match &result.error {
        Some(error) => warn!(
            "{} analysis failed for {}: {error}",
            backend.label(),
            record.notice_id
        ),
        None => debug!("{} analysis complete for {}", backend.label(), record.notice_id),
    }
    result
}

fn non_blank(outcome: Result<String, BackendError>) -> Result<String, BackendError> {
    outcome.and_then(|text| match text.trim() {
        "" => Err(BackendError::EmptyContent),
        trimmed => Ok(trimmed.to_string()),
    })
}

fn into_result(
    record: &ContractRecord,
    backend: Backend,
    summary: Result<String, BackendError>,
    proposal: Result<String, BackendError>,
) -> AnalysisResult {
    let mut errors = Vec::new();

    let summary = summary.unwrap_or_else(|e| {
        errors.push(format!("summary: {e}"));
        format!("Error generating {} summary: {e}", backend.label())
    });
    let proposal_outline = proposal.unwrap_or_else(|e| {
        errors.push(format!("proposal: {e}"));
        PROPOSAL_PLACEHOLDER.to_string()
    });

    AnalysisResult {
        backend,
        contract_id: record.notice_id.clone(),
        summary,
        proposal_outline,
        error: (!errors.is_empty()).then(|| errors.join("; ")),
    }
}

fn contract_details(record: &ContractRecord) -> String {
    let posted_date = record.posted_date.to_string();
    let response_deadline = record.response_deadline.to_string();
    fill_template(
        CONTRACT_DETAILS_TEMPLATE,
        &[
            ("title", record.title.as_str()),
            ("notice_id", record.notice_id.as_str()),
            ("department", record.department.as_str()),
            ("notice_type", record.notice_type.as_str()),
            ("naics_code", record.naics_code.as_str()),
            ("posted_date", posted_date.as_str()),
            ("response_deadline", response_deadline.as_str()),
            ("description", record.description.as_str()),
        ],
    )
}

pub fn build_summary_prompt(record: &ContractRecord) -> String {
    let details = contract_details(record);
    fill_template(SUMMARY_PROMPT_TEMPLATE, &[("contract_details", details.as_str())])
}

pub fn build_proposal_prompt(record: &ContractRecord, profile: Option<&CompanyProfile>) -> String {
    let company_context = match profile.filter(|p| p.is_present()) {
        Some(p) => fill_template(
            COMPANY_CONTEXT_TEMPLATE,
            &[
                ("company_name", p.company_name.trim()),
                ("experience", p.experience.trim()),
                ("capabilities", p.capabilities.trim()),
                ("certifications", p.certifications.trim()),
                ("past_performance", p.past_performance.trim()),
                ("competitive_advantages", p.competitive_advantages.trim()),
            ],
        ),
        None => String::new(),
    };

    let details = contract_details(record);
    fill_template(
        PROPOSAL_PROMPT_TEMPLATE,
        &[
            ("contract_details", details.as_str()),
            ("company_context", company_context.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedBackend;
    use chrono::NaiveDate;

    fn record() -> ContractRecord {
        ContractRecord {
            notice_id: "DEMO-2026-001-ABCD".to_string(),
            title: "Landscaping Services and Maintenance Contract".to_string(),
            department: "Department of Veterans Affairs".to_string(),
            notice_type: "Solicitation".to_string(),
            naics_code: "561730".to_string(),
            posted_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            response_deadline: NaiveDate::from_ymd_opt(2026, 11, 15).unwrap(),
            description: "Comprehensive landscaping services for federal facilities.".to_string(),
        }
    }

    fn profile(name: &str) -> CompanyProfile {
        CompanyProfile {
            company_name: name.to_string(),
            experience: "15 years".to_string(),
            capabilities: "Irrigation, tree care".to_string(),
            certifications: "ISA Certified Arborist".to_string(),
            past_performance: "50+ federal sites".to_string(),
            competitive_advantages: "Veteran-owned".to_string(),
        }
    }

    #[test]
    fn test_summary_prompt_contains_contract_fields() {
        let prompt = build_summary_prompt(&record());
        assert!(prompt.contains("Title: Landscaping Services and Maintenance Contract"));
        assert!(prompt.contains("Department: Department of Veterans Affairs"));
        assert!(prompt.contains("Posted: 2026-10-01"));
        assert!(prompt.contains("Deadline: 2026-11-15"));
        assert!(prompt.contains("Requirements"));
        assert!(prompt.contains("Timeline"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_proposal_prompt_includes_company_profile_when_named() {
        let prompt = build_proposal_prompt(&record(), Some(&profile("GreenScape LLC")));
        assert!(prompt.contains("1-2 paragraphs"));
        assert!(prompt.contains("Company Name: GreenScape LLC"));
        assert!(prompt.contains("Certifications: ISA Certified Arborist"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_proposal_prompt_ignores_unnamed_profile() {
        let with_blank = build_proposal_prompt(&record(), Some(&profile("   ")));
        let without = build_proposal_prompt(&record(), None);
        assert_eq!(with_blank, without);
        assert!(!without.contains("Company Name"));
    }

    #[test]
    fn test_user_text_is_not_resubstituted() {
        let mut r = record();
        r.title = "{department} Hauling".to_string();
        r.description = "provide {title} work".to_string();
        let summary = build_summary_prompt(&r);
        assert!(summary.contains("Title: {department} Hauling"));
        assert!(summary.contains("Description: provide {title} work"));

        let mut p = profile("Acme");
        p.experience = "see {contract_details}".to_string();
        p.capabilities = "ask {company_name}".to_string();
        let proposal = build_proposal_prompt(&r, Some(&p));
        assert!(proposal.contains("Description: provide {title} work"));
        assert!(proposal.contains("Years of Experience: see {contract_details}"));
        assert!(proposal.contains("Key Capabilities: ask {company_name}"));
        assert_eq!(proposal.matches("Title: ").count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_success_populates_both_fields() {
        let backend = ScriptedBackend::echo();
        let result = analyze(&record(), Backend::Primary, &backend, None).await;

        assert_eq!(result.backend, Backend::Primary);
        assert_eq!(result.contract_id, "DEMO-2026-001-ABCD");
        assert!(result.error.is_none());
        assert!(result.summary.starts_with("echo: Analyze this"));
        assert!(result.proposal_outline.starts_with("echo: Draft a bid proposal"));
        assert_eq!(backend.calls(), 2);
    }

    #[tokio::test]
    async fn test_analyze_failure_sets_error_and_placeholders() {
        let backend = ScriptedBackend::failing_auth();
        let result = analyze(&record(), Backend::Secondary, &backend, None).await;

        assert!(result.is_error());
        assert!(result.summary.starts_with("Error generating GPT-4 summary"));
        assert_eq!(result.proposal_outline, PROPOSAL_PLACEHOLDER);
        assert!(result.error.as_deref().unwrap().contains("authentication failed"));
        assert_eq!(backend.calls(), 2, "no retries");
    }

    #[tokio::test]
    async fn test_blank_response_counts_as_failure() {
        let backend = ScriptedBackend::replying("   ");
        let result = analyze(&record(), Backend::Primary, &backend, None).await;

        assert!(result.is_error());
        assert!(!result.summary.is_empty());
        assert!(result.error.unwrap().contains("empty content"));
    }

    #[test]
    fn test_partial_failure_keeps_successful_text() {
        let result = into_result(
            &record(),
            Backend::Primary,
            Ok("A summary".to_string()),
            Err(BackendError::EmptyContent),
        );
        assert_eq!(result.summary, "A summary");
        assert_eq!(result.proposal_outline, PROPOSAL_PLACEHOLDER);
        assert_eq!(
            result.error.as_deref(),
            Some("proposal: model returned empty content")
        );
    }
}
