//! Deterministic Extractor: offline, keyword-based profile extraction.
//!
//! Algorithm:
//! 1. Whole-word match every taxonomy skill against the lowercased text
//!    ("go" must not match inside "google"). A skill is delimited by non-word
//!    characters or the text edges, so "c#" and ".net" match too.
//! 2. Vote: each matched skill adds 1 to every role whose vocabulary has it.
//!    Frontend > 2 and Backend > 2 → Full Stack. Otherwise the first role (in
//!    table order) with the strictly highest score; all zero → Backend.
//! 3. Name, email and projects come from the segmenter.
//!
//! Identical text always yields an identical profile: skills are reported in
//! taxonomy order, never in hash order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::segmenter::{find_email, find_name, find_phone, find_projects_section};
use crate::extraction::taxonomy::{
    all_skills, role_categories, skills_for_role, BACKEND_DEVELOPER, FRONTEND_DEVELOPER,
    FULL_STACK_DEVELOPER,
};
use crate::models::profile::{StructuredProfile, DEFAULT_ROLE};

pub const MANUAL_REVIEW_EXPERIENCE: &str = "Experience details require manual review.";
const FULL_STACK_THRESHOLD: usize = 2;

static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    all_skills()
        .into_iter()
        .filter_map(|skill| {
            Regex::new(&format!(r"(?:^|\W){}(?:$|\W)", regex::escape(skill)))
                .ok()
                .map(|re| (skill, re))
        })
        .collect()
});

/// Extracts a profile with zero external calls. Has no failure mode.
pub fn extract(text: &str) -> StructuredProfile {
    let technical_skills = extract_skills(text);
    let job_role = infer_role(&technical_skills);

    StructuredProfile {
        name: find_name(text),
        email: find_email(text),
        phone: find_phone(text),
        technical_skills,
        soft_skills: vec![],
        projects: find_projects_section(text),
        experience: MANUAL_REVIEW_EXPERIENCE.to_string(),
        job_role,
    }
}

/// Taxonomy skills present in the text as whole words, in taxonomy order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SKILL_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&lower))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Weighted vote over role vocabularies.
pub fn infer_role(skills: &[String]) -> String {
    let scores: Vec<(&'static str, usize)> = role_categories()
        .map(|role| {
            let vocabulary = skills_for_role(role);
            let score = skills
                .iter()
                .filter(|skill| vocabulary.contains(&skill.as_str()))
                .count();
            (role, score)
        })
        .collect();

    let score_of = |role: &str| {
        scores
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, s)| *s)
            .unwrap_or(0)
    };

    if score_of(FRONTEND_DEVELOPER) > FULL_STACK_THRESHOLD
        && score_of(BACKEND_DEVELOPER) > FULL_STACK_THRESHOLD
    {
        return FULL_STACK_DEVELOPER.to_string();
    }

    let mut best_role = DEFAULT_ROLE;
    let mut best_score = 0;
    for (role, score) in &scores {
        if *score > best_score {
            best_score = *score;
            best_role = *role;
        }
    }
    best_role.to_string()
}
