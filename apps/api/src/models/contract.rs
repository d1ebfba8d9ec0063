use chrono::NaiveDate;
use serde::Serialize;

/// One synthetic government contract opportunity.
///
/// Invariants: `response_deadline > posted_date`, every text field non-empty,
/// `notice_id` unique within one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractRecord {
    pub notice_id: String,
    pub title: String,
    pub department: String,
    pub notice_type: String,
    pub naics_code: String,
    pub posted_date: NaiveDate,
    pub response_deadline: NaiveDate,
    pub description: String,
}
