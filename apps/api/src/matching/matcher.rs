//! Job Matcher: scores listings against a user's technical skills.
//!
//! Algorithm, per listing:
//! 1. haystack = lowercase "title description category"
//! 2. a skill matches when it is a substring of the haystack (looser than
//!    the word-boundary match used at extraction time)
//! 3. match_percentage = round(100 × matched / total), 0 when the user has no skills
//! 4. missing_skills = the user's skills the listing never mentions
//!
//! Results are sorted by match_percentage, descending; the sort is stable so
//! ties keep the feed's order.

use crate::models::job::{JobListing, MatchedJob};
use crate::models::profile::dedup_preserving_order;

pub const SALARY_NOT_SPECIFIED: &str = "Not specified";

pub fn match_jobs(user_skills: &[String], listings: Vec<JobListing>) -> Vec<MatchedJob> {
    let skills = dedup_preserving_order(
        user_skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty()),
    );

    let mut matched: Vec<MatchedJob> = listings
        .into_iter()
        .map(|listing| score_listing(&skills, listing))
        .collect();

    matched.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matched
}

fn score_listing(skills: &[String], listing: JobListing) -> MatchedJob {
    let haystack = format!(
        "{} {} {}",
        listing.title, listing.description, listing.category
    )
    .to_lowercase();

    let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = skills
        .iter()
        .cloned()
        .partition(|skill| haystack.contains(skill.as_str()));

    let match_percentage = if skills.is_empty() {
        0
    } else {
        (100.0 * matching_skills.len() as f64 / skills.len() as f64).round() as u32
    };

    MatchedJob {
        salary: format_salary(listing.salary_min, listing.salary_max),
        listing,
        match_percentage,
        matching_skills,
        missing_skills,
    }
}

/// "$50,000 - $80,000", "$50,000+" or "Not specified". A zero minimum counts
/// as absent; a maximum alone is not displayed.
pub fn format_salary(min: Option<f64>, max: Option<f64>) -> String {
    let present = |v: Option<f64>| v.filter(|x| x.is_finite() && *x != 0.0);
    match (present(min), present(max)) {
        (Some(min), Some(max)) => {
            format!("${} - ${}", format_thousands(min), format_thousands(max))
        }
        (Some(min), None) => format!("${}+", format_thousands(min)),
        _ => SALARY_NOT_SPECIFIED.to_string(),
    }
}

/// Rounds to a whole number and inserts thousands separators.
fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Feed query for a profile: the role plus its first two technical skills.
pub fn build_search_query(job_role: &str, technical_skills: &[String]) -> String {
    let role = job_role.trim();
    let role = if role.is_empty() { "developer" } else { role };
    let primary: Vec<&str> = technical_skills
        .iter()
        .take(2)
        .map(|s| s.as_str())
        .collect();
    format!("{} {}", role, primary.join(" ")).trim().to_string()
}
