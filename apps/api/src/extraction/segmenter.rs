//! Text Segmenter: positional and keyword heuristics over raw resume text.
//!
//! A stray short line containing a section word ends the projects section
//! early; capture never restarts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::profile::{DEFAULT_NAME, EMAIL_NOT_FOUND, MAX_PROJECTS, PROJECTS_NOT_PARSED};

const NAME_SCAN_LINES: usize = 5;
const NAME_MAX_CHARS: usize = 50;
const NAME_STOPWORDS: &[&str] = &["resume", "curriculum vitae", "cv", "bio", "profile"];

const HEADER_MAX_CHARS: usize = 40;
const PROJECT_LINE_MIN_CHARS: usize = 5;
const PROJECT_HEADERS: &[&str] = &[
    "projects",
    "key projects",
    "academic projects",
    "professional projects",
    "project experience",
    "technical projects",
];
const OTHER_SECTION_HEADERS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "certifications",
    "languages",
    "achievements",
    "interests",
    "references",
];

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid regex pattern")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("Invalid regex pattern")
});

/// Picks the candidate's name from the first few non-empty lines.
pub fn find_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| {
            let lower = line.to_lowercase();
            line.chars().count() < NAME_MAX_CHARS
                && !NAME_STOPWORDS.iter().any(|word| lower.contains(word))
        })
        .map(title_case)
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

/// Collects the lines under a "Projects"-style header, up to the next section.
pub fn find_projects_section(text: &str) -> Vec<String> {
    let mut projects = Vec::new();
    let mut capturing = false;

    for line in text.lines() {
        let trimmed = line.trim();
        let normalized = trimmed.to_lowercase();
        let is_short = normalized.chars().count() < HEADER_MAX_CHARS;

        if is_short && PROJECT_HEADERS.iter().any(|h| normalized.contains(h)) {
            capturing = true;
            continue;
        }

        if !capturing {
            continue;
        }

        if is_short && OTHER_SECTION_HEADERS.iter().any(|h| normalized.contains(h)) {
            break;
        }

        if trimmed.chars().count() > PROJECT_LINE_MIN_CHARS {
            projects.push(trimmed.to_string());
            if projects.len() >= MAX_PROJECTS {
                break;
            }
        }
    }

    if projects.is_empty() {
        projects.push(PROJECTS_NOT_PARSED.to_string());
    }
    projects
}

/// First email address in the text, or the "Not Found" sentinel.
pub fn find_email(text: &str) -> String {
    EMAIL_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
}

/// First phone-number-like run of digits, if any.
pub fn find_phone(text: &str) -> Option<String> {
    PHONE_PATTERN
        .find(text)
        .map(|m| m.as_str().trim().to_string())
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}
