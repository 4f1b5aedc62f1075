use serde::{Deserialize, Deserializer, Serialize};

pub const EMAIL_NOT_FOUND: &str = "Not Found";
pub const DEFAULT_NAME: &str = "Candidate";
pub const DEFAULT_ROLE: &str = "Backend Developer";
pub const PROJECTS_NOT_PARSED: &str = "Project details not parsed. Please add them manually.";
pub const MAX_PROJECTS: usize = 15;
pub const MAX_EXPERIENCE_WORDS: usize = 100;

/// Structured view of a resume. JSON keys follow the oracle contract exactly.
///
/// Every contract key must be present, but `null` is read as empty and
/// `normalized()` then fills in the sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Only filled by deterministic extraction; not part of the oracle contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub technical_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub soft_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_role: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StructuredProfile {
    /// The last rung of the extraction ladder. Never fails.
    pub fn stub() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: EMAIL_NOT_FOUND.to_string(),
            phone: None,
            technical_skills: vec![],
            soft_skills: vec![],
            projects: vec!["Error parsing resume".to_string()],
            experience: "NIL".to_string(),
            job_role: DEFAULT_ROLE.to_string(),
        }
    }

    /// Brings an externally produced profile in line with the value-object
    /// invariants: lowercase unique technical skills, 1..=15 projects,
    /// experience of at most 100 words.
    pub fn normalized(mut self) -> Self {
        self.technical_skills = dedup_preserving_order(
            self.technical_skills
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        self.soft_skills = dedup_preserving_order(
            self.soft_skills
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        );

        self.projects.retain(|p| !p.trim().is_empty());
        self.projects.truncate(MAX_PROJECTS);
        if self.projects.is_empty() {
            self.projects.push(PROJECTS_NOT_PARSED.to_string());
        }

        let words: Vec<&str> = self.experience.split_whitespace().collect();
        if words.len() > MAX_EXPERIENCE_WORDS {
            self.experience = words[..MAX_EXPERIENCE_WORDS].join(" ");
        }

        if self.email.trim().is_empty() {
            self.email = EMAIL_NOT_FOUND.to_string();
        }
        if self.name.trim().is_empty() {
            self.name = DEFAULT_NAME.to_string();
        }
        if self.job_role.trim().is_empty() {
            self.job_role = DEFAULT_ROLE.to_string();
        }
        self
    }
}

/// Which rung of the extraction ladder produced a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    Oracle,
    Deterministic,
    Stub,
}

pub(crate) fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
