// All LLM prompt templates for contract analysis.
// The system instruction lives in llm_client::prompts and is shared by both backends.

/// Contract details block shared by both prompts.
/// Replace: {title}, {notice_id}, {department}, {notice_type}, {naics_code},
///          {posted_date}, {response_deadline}, {description}
pub const CONTRACT_DETAILS_TEMPLATE: &str = "\
Title: {title}
Notice ID: {notice_id}
Department: {department}
Notice Type: {notice_type}
NAICS Code: {naics_code}
Posted: {posted_date}
Deadline: {response_deadline}
Description: {description}";

/// Structured summary prompt. Replace: {contract_details}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Analyze this government contract opportunity:

{contract_details}

Provide a concise summary of the opportunity with three short labelled sections:
- Requirements: what the contractor must provide or demonstrate
- Scope: the work, locations and deliverables covered
- Timeline: posting date, response deadline and contract period

Do not write a proposal. Keep the summary under 200 words."#;

/// Bid proposal outline prompt. Replace: {contract_details}, {company_context}
pub const PROPOSAL_PROMPT_TEMPLATE: &str = r#"Draft a bid proposal outline for this government contract opportunity:

{contract_details}{company_context}

Write 1-2 paragraphs that address the contract requirements, highlight relevant qualifications, and state clear differentiators. Do not restate the contract details."#;

/// Appended to the proposal prompt when a company profile is supplied.
/// Replace: {company_name}, {experience}, {capabilities}, {certifications},
///          {past_performance}, {competitive_advantages}
pub const COMPANY_CONTEXT_TEMPLATE: &str = "

When creating the proposal outline, incorporate these company strengths and details:
Company Name: {company_name}
Years of Experience: {experience}
Key Capabilities: {capabilities}
Certifications: {certifications}
Past Performance: {past_performance}
Competitive Advantages: {competitive_advantages}

Tailor the proposal to highlight how this company's specific strengths match the contract requirements.";

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so user text containing a placeholder
/// survives verbatim. Unknown `{...}` sequences are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let value = tail.find('}').and_then(|end| {
            values
                .iter()
                .find(|(name, _)| *name == &tail[1..end])
                .map(|(_, value)| (end, *value))
        });
        match value {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
