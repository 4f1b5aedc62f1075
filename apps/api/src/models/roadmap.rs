use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered learning material for a single skill.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillResources {
    #[serde(default)]
    pub roadmap: Vec<String>,
    #[serde(default)]
    pub websites: Vec<String>,
    #[serde(default)]
    pub youtube: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub job_role: String,
    pub current_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Keyed by skill, in the order the skills were listed.
    pub learning_roadmap: IndexMap<String, SkillResources>,
    /// Provenance marker, present only when the roadmap came from the static
    /// tables instead of the oracle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
