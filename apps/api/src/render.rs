//! Server-rendered HTML for the search page.
//!
//! Every piece of user or model text goes through [`escape_html`].

use crate::comparison::ComparisonBlock;
use crate::contracts::normalize_keyword;
use crate::llm_client::Backend;
use crate::models::{AnalysisResult, CompanyProfile};
use crate::search::{SearchOutcome, SearchRequest};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Tender: Contract Intelligence Agent</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #000; }
  header { background: #1B5E20; color: #fff; padding: 16px 32px; }
  header p { margin: 4px 0 0; opacity: 0.85; }
  main { display: grid; grid-template-columns: 1fr 2fr; gap: 32px; padding: 24px 32px; }
  form label { display: block; font-weight: 600; margin-top: 12px; }
  form input, form textarea { width: 100%; box-sizing: border-box; padding: 6px; font: inherit; }
  form button { margin-top: 16px; padding: 10px 20px; background: #2E7D32; color: #fff; border: 0; border-radius: 6px; font-size: 16px; cursor: pointer; }
  .hint { color: #666; font-style: italic; font-size: 14px; }
  .config-error { border: 2px solid #C62828; background: #FFEBEE; color: #B71C1C; padding: 12px 16px; border-radius: 8px; }
  .contract { border: 2px solid #4CAF50; padding: 20px; margin: 20px 0; border-radius: 10px; background: #f9f9f9; }
  .contract h3 { color: #2E7D32; margin-top: 0; }
  .meta { background: #e8f5e9; padding: 10px; border-radius: 5px; margin: 10px 0; }
  .meta p { margin: 5px 0; }
  .meta strong { color: #1B5E20; }
  .scope { color: #444; font-size: 14px; }
  .comparison { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-top: 20px; }
  .analysis { padding: 15px; border-radius: 8px; font-size: 14px; line-height: 1.6; }
  .analysis h4 { margin-top: 0; }
  .analysis.primary { background: #e8f5e9; border-left: 4px solid #4CAF50; }
  .analysis.primary h4, .analysis.primary h5 { color: #1B5E20; }
  .analysis.secondary { background: #e3f2fd; border-left: 4px solid #2196F3; }
  .analysis.secondary h4, .analysis.secondary h5 { color: #0D47A1; }
  .analysis.failed { border-left-color: #C62828; }
  .error-note { color: #B71C1C; font-weight: 600; }
</style>
</head>
<body>
<header>
  <h1>Tender: Contract Intelligence Agent</h1>
  <p>Generate sample government contract opportunities and compare analysis from Google Gemini and GPT-4.</p>
</header>
<main>
"#;

const PAGE_FOOT: &str = r#"</main>
</body>
</html>
"#;

/// (query name, label, placeholder, rows) for the optional company profile inputs.
const PROFILE_FIELDS: [(&str, &str, &str, u8); 6] = [
    ("company_name", "Company Name", "e.g., GreenScape Solutions LLC", 1),
    (
        "experience",
        "Years of Experience / Background",
        "e.g., 15 years providing commercial landscaping services",
        2,
    ),
    (
        "capabilities",
        "Key Capabilities &amp; Services",
        "e.g., Landscape design, irrigation systems, tree services",
        3,
    ),
    (
        "certifications",
        "Certifications &amp; Credentials",
        "e.g., ISA Certified Arborist, LEED AP",
        2,
    ),
    (
        "past_performance",
        "Past Performance Highlights",
        "e.g., Maintained 50+ federal facilities, 98% CPARS rating",
        3,
    ),
    (
        "competitive_advantages",
        "Competitive Advantages",
        "e.g., Veteran-owned, local presence, 24/7 emergency response",
        3,
    ),
];

/// Renders the whole page. `outcome` fills the results area; `error` shows a
/// banner in its place.
pub fn render_page(
    request: &SearchRequest,
    outcome: Option<&SearchOutcome>,
    error: Option<&str>,
) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(&render_form(request));
    html.push_str("<section>\n");

    if let Some(message) = error {
        html.push_str(&format!(
            "<div class=\"config-error\"><strong>Configuration error:</strong> {}</div>\n",
            escape_html(message)
        ));
    }
    match outcome {
        Some(outcome) => html.push_str(&render_results(outcome)),
        None if error.is_none() => html.push_str(
            "<p class=\"hint\">Enter a keyword and press Generate Proposals. \
             Listings are generated samples, not live SAM.gov data.</p>\n",
        ),
        None => {}
    }

    html.push_str("</section>\n");
    html.push_str(PAGE_FOOT);
    html
}

fn render_form(request: &SearchRequest) -> String {
    let keyword = normalize_keyword(&request.keyword);
    let empty = CompanyProfile::default();
    let profile = request.company_profile.as_ref().unwrap_or(&empty);

    let mut html =
        String::from("<form method=\"get\" action=\"/search\">\n<h3>Search Contracts</h3>\n");
    html.push_str(&format!(
        "<label for=\"keyword\">Search Keyword</label>\n\
         <input id=\"keyword\" name=\"keyword\" value=\"{}\" placeholder=\"e.g., gardening, IT services, construction\">\n",
        escape_html(keyword)
    ));
    html.push_str(
        "<h3>Company Profile (Optional)</h3>\n\
         <p class=\"hint\">Provide your company details for personalized proposals.</p>\n",
    );

    for (name, label, placeholder, rows) in PROFILE_FIELDS {
        let value = escape_html(profile_value(profile, name));
        html.push_str(&format!("<label for=\"{name}\">{label}</label>\n"));
        if rows > 1 {
            html.push_str(&format!(
                "<textarea id=\"{name}\" name=\"{name}\" rows=\"{rows}\" placeholder=\"{placeholder}\">{value}</textarea>\n"
            ));
        } else {
            html.push_str(&format!(
                "<input id=\"{name}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\">\n"
            ));
        }
    }

    html.push_str("<button type=\"submit\">Generate Proposals</button>\n</form>\n");
    html
}

fn profile_value<'a>(profile: &'a CompanyProfile, field: &str) -> &'a str {
    match field {
        "company_name" => &profile.company_name,
        "experience" => &profile.experience,
        "capabilities" => &profile.capabilities,
        "certifications" => &profile.certifications,
        "past_performance" => &profile.past_performance,
        "competitive_advantages" => &profile.competitive_advantages,
        _ => "",
    }
}

fn render_results(outcome: &SearchOutcome) -> String {
    let mut html = format!(
        "<h2>Search Results for: <em>{}</em></h2>\n",
        escape_html(&outcome.keyword)
    );
    for (idx, block) in outcome.blocks.iter().enumerate() {
        html.push_str(&render_block(idx + 1, block));
    }
    html
}

fn render_block(number: usize, block: &ComparisonBlock) -> String {
    let contract = &block.contract;
    let mut html = format!(
        "<div class=\"contract\">\n<h3>Contract {number}: {}</h3>\n<div class=\"meta\">\n",
        escape_html(&contract.title)
    );

    for (label, value) in [
        ("Notice ID", contract.notice_id.clone()),
        ("Department", contract.department.clone()),
        ("Notice Type", contract.notice_type.clone()),
        ("Posted", contract.posted_date.to_string()),
        ("Deadline", contract.response_deadline.to_string()),
    ] {
        html.push_str(&format!(
            "<p><strong>{label}:</strong> {}</p>\n",
            escape_html(&value)
        ));
    }
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<p class=\"scope\">{}</p>\n",
        escape_html(&contract.description)
    ));

    html.push_str("<div class=\"comparison\">\n");
    for backend in Backend::ALL {
        html.push_str(&render_analysis(block.result(backend)));
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn render_analysis(result: &AnalysisResult) -> String {
    let column = match result.backend {
        Backend::Primary => "primary",
        Backend::Secondary => "secondary",
    };
    let failed = if result.is_error() { " failed" } else { "" };

    let mut html = format!(
        "<div class=\"analysis {column}{failed}\">\n<h4>{} Analysis</h4>\n",
        result.backend.label()
    );
    if let Some(error) = &result.error {
        html.push_str(&format!(
            "<p class=\"error-note\">Request failed: {}</p>\n",
            escape_html(error)
        ));
    }
    html.push_str(&format!(
        "<h5>Summary:</h5>\n<p>{}</p>\n<h5>Proposal Outline:</h5>\n<p>{}</p>\n</div>\n",
        multiline(&result.summary),
        multiline(&result.proposal_outline)
    ));
    html
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes, then turns newlines into `<br>`.
fn multiline(text: &str) -> String {
    escape_html(text).replace("\r\n", "\n").replace('\n', "<br>")
}
