//! Synthetic contract listings from a keyword.
//!
//! Pure: no I/O, never fails. Randomness is injected so a seeded RNG yields
//! exact, repeatable output.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::contracts::templates::{DEPARTMENTS, NOTICE_SUFFIX_ALPHABET, TEMPLATES};
use crate::models::ContractRecord;

/// Keyword used when the input is empty or whitespace-only.
pub const DEFAULT_KEYWORD: &str = "gardening";
/// Records produced per search.
pub const RECORDS_PER_SEARCH: usize = TEMPLATES.len();

/// Posted dates fall within this many days before today.
const MAX_POSTED_AGE_DAYS: i64 = 30;
const MIN_RESPONSE_DAYS: i64 = 14;
const MAX_RESPONSE_DAYS: i64 = 60;
const NOTICE_SUFFIX_LEN: usize = 4;

/// Trims the keyword, falling back to [`DEFAULT_KEYWORD`] when nothing is left.
pub fn normalize_keyword(keyword: &str) -> &str {
    match keyword.trim() {
        "" => DEFAULT_KEYWORD,
        trimmed => trimmed,
    }
}

/// Synthesizes records dated relative to today using thread-local randomness.
pub fn synthesize(keyword: &str) -> Vec<ContractRecord> {
    synthesize_with(keyword, Utc::now().date_naive(), &mut rand::thread_rng())
}

/// Synthesizes exactly [`RECORDS_PER_SEARCH`] records.
///
/// Per slot: title, scope and notice type come from the slot's template;
/// departments are drawn without replacement; the posted date is up to
/// 30 days before `today` and the deadline 14–60 days after posting.
/// Notice ids embed the slot number, so they never collide within a batch.
pub fn synthesize_with<R: Rng + ?Sized>(
    keyword: &str,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<ContractRecord> {
    let keyword = normalize_keyword(keyword);
    let display_keyword = title_case(keyword);

    let departments: Vec<&str> = DEPARTMENTS
        .choose_multiple(&mut *rng, RECORDS_PER_SEARCH)
        .copied()
        .collect();

    TEMPLATES
        .iter()
        .zip(departments)
        .enumerate()
        .map(|(slot, (template, department))| {
            let posted_date = today - Duration::days(rng.gen_range(0..=MAX_POSTED_AGE_DAYS));
            let response_deadline = posted_date
                + Duration::days(rng.gen_range(MIN_RESPONSE_DAYS..=MAX_RESPONSE_DAYS));

            ContractRecord {
                notice_id: notice_id(slot, posted_date, &mut *rng),
                title: template.title.replace("{keyword}", &display_keyword),
                department: department.to_string(),
                notice_type: template.notice_type.to_string(),
                naics_code: template.naics_code.to_string(),
                posted_date,
                response_deadline,
                description: template
                    .scope
                    .replace("{department}", department)
                    .replace("{keyword}", keyword),
            }
        })
        .collect()
}

/// `DEMO-<posted year>-<slot, 1-based, 3 digits>-<4 random chars>`
fn notice_id<R: Rng + ?Sized>(slot: usize, posted: NaiveDate, rng: &mut R) -> String {
    let suffix: String = (0..NOTICE_SUFFIX_LEN)
        .map(|_| NOTICE_SUFFIX_ALPHABET[rng.gen_range(0..NOTICE_SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("DEMO-{}-{:03}-{suffix}", posted.year(), slot + 1)
}

/// Upper-cases the first letter of each whitespace-separated word.
///
/// Letters whose upper-case form is not a single char that lower-cases back
/// to the same text (e.g. `ß`) are left alone, so the result always contains
/// the input case-insensitively.
fn title_case(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut at_word_start = true;

    for c in keyword.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
            continue;
        }
        if at_word_start {
            out.push(upper_if_reversible(c));
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn upper_if_reversible(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u.to_lowercase().eq(c.to_lowercase()) => u,
        _ => c,
    }
}
