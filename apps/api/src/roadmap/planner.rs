//! Roadmap Planner: required skills, skill gap, and learning resources for a
//! target role.
//!
//! The oracle is asked once (no retries at this layer). Any failure falls
//! back to the static tables, and the result carries a provenance note.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{info, warn};

use crate::llm_client::{strip_json_fences, LlmError, Oracle};
use crate::models::roadmap::{Roadmap, SkillResources};
use crate::roadmap::prompts::ROADMAP_PROMPT_TEMPLATE;
use crate::roadmap::resources::{required_skills_for_role, resources_for, BASELINE_SKILLS};

pub const FALLBACK_NOTE: &str = "Generated using standard database (AI unavailable)";

/// Oracle answer. Missing keys default to empty, matching the lenient
/// contract of the roadmap prompt.
#[derive(Debug, Deserialize)]
struct OracleRoadmap {
    #[serde(default)]
    required_skills: Vec<String>,
    #[serde(default)]
    missing_skills: Vec<String>,
    #[serde(default)]
    learning_roadmap: IndexMap<String, SkillResources>,
}

pub struct RoadmapPlanner {
    oracle: Option<Arc<dyn Oracle>>,
}

impl RoadmapPlanner {
    pub fn new(oracle: Option<Arc<dyn Oracle>>) -> Self {
        Self { oracle }
    }

    /// Oracle first, static tables on any failure. Never fails.
    pub async fn plan(&self, job_role: &str, current_skills: &[String]) -> Roadmap {
        match self.plan_ai(job_role, current_skills).await {
            Ok(roadmap) => {
                info!("Roadmap for '{job_role}' generated by oracle");
                roadmap
            }
            Err(e) => {
                warn!(
                    "Oracle roadmap failed for '{job_role}' ({} failure: {e}), using static tables",
                    e.kind()
                );
                let mut roadmap = plan_fallback(job_role, current_skills);
                roadmap.note = Some(FALLBACK_NOTE.to_string());
                roadmap
            }
        }
    }

    pub async fn plan_ai(
        &self,
        job_role: &str,
        current_skills: &[String],
    ) -> Result<Roadmap, LlmError> {
        let oracle = self.oracle.as_ref().ok_or(LlmError::Unavailable)?;

        let prompt = ROADMAP_PROMPT_TEMPLATE
            .replace("{job_role}", job_role)
            .replace("{current_skills}", &current_skills.join(", "));
        let raw = oracle.generate(&prompt).await?;
        let parsed: OracleRoadmap = serde_json::from_str(strip_json_fences(&raw))?;
        // An answer without required skills carries nothing worth keeping.
        if parsed.required_skills.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(Roadmap {
            job_role: job_role.to_string(),
            current_skills: current_skills.to_vec(),
            required_skills: parsed.required_skills,
            missing_skills: parsed.missing_skills,
            learning_roadmap: parsed.learning_roadmap,
            note: None,
        })
    }
}

/// Static-table roadmap. Missing skills keep the order of the required list;
/// comparison with the user's skills is case-insensitive.
pub fn plan_fallback(job_role: &str, current_skills: &[String]) -> Roadmap {
    let required: Vec<String> = required_skills_for_role(job_role)
        .unwrap_or(BASELINE_SKILLS)
        .iter()
        .map(|s| s.to_string())
        .collect();

    let current_lower: Vec<String> = current_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|skill| !current_lower.contains(*skill))
        .cloned()
        .collect();

    let learning_roadmap = missing
        .iter()
        .map(|skill| (skill.clone(), resources_for(skill)))
        .collect();

    Roadmap {
        job_role: job_role.to_string(),
        current_skills: current_skills.to_vec(),
        required_skills: required,
        missing_skills: missing,
        learning_roadmap,
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedOracle(Result<&'static str, u16>);

    #[async_trait]
    impl Oracle for FixedOracle {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LlmError::Api {
                    status,
                    message: "down".to_string(),
                }),
            }
        }
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_backend_fallback_gap() {
        let roadmap = plan_fallback("backend developer", &skills(&["python"]));
        for skill in [
            "fastapi", "django", "sql", "postgresql", "docker", "git", "api design", "redis",
        ] {
            assert!(roadmap.missing_skills.contains(&skill.to_string()), "missing {skill}");
        }
        assert!(!roadmap.missing_skills.contains(&"python".to_string()));
        assert_eq!(roadmap.missing_skills[0], "fastapi");
        assert!(roadmap.learning_roadmap.contains_key("fastapi"));
        assert!(!roadmap.learning_roadmap.contains_key("python"));
    }

    #[test]
    fn test_fallback_matching_is_case_insensitive() {
        let roadmap = plan_fallback("Frontend Developer", &skills(&["React", " CSS "]));
        assert!(!roadmap.missing_skills.contains(&"react".to_string()));
        assert!(!roadmap.missing_skills.contains(&"css".to_string()));
        assert_eq!(roadmap.required_skills.len(), 8);
    }

    #[test]
    fn test_unknown_role_uses_baseline() {
        let roadmap = plan_fallback("Astronaut", &skills(&["Git"]));
        assert_eq!(
            roadmap.required_skills,
            vec!["git", "communication", "problem solving", "python"]
        );
        assert_eq!(
            roadmap.missing_skills,
            vec!["communication", "problem solving", "python"]
        );
        assert_eq!(
            roadmap.learning_roadmap["communication"].youtube,
            vec!["https://www.youtube.com/results?search_query=communication+tutorial"]
        );
    }

    #[tokio::test]
    async fn test_plan_without_oracle_is_annotated_fallback() {
        let planner = RoadmapPlanner::new(None);
        let roadmap = planner.plan("devops engineer", &skills(&["docker"])).await;
        assert_eq!(roadmap.note.as_deref(), Some(FALLBACK_NOTE));
        assert!(roadmap.missing_skills.contains(&"kubernetes".to_string()));
    }

    #[tokio::test]
    async fn test_plan_uses_oracle_answer() {
        let json = r#"```json
        {
            "required_skills": ["rust", "tokio", "sql", "docker", "git"],
            "missing_skills": ["tokio"],
            "learning_roadmap": {
                "tokio": {
                    "roadmap": ["Async basics"],
                    "websites": ["https://tokio.rs/tokio/tutorial"],
                    "youtube": []
                }
            }
        }
        ```"#;
        let planner = RoadmapPlanner::new(Some(Arc::new(FixedOracle(Ok(json)))));
        let roadmap = planner
            .plan("Rust Developer", &skills(&["rust", "sql", "docker", "git"]))
            .await;

        assert!(roadmap.note.is_none());
        assert_eq!(roadmap.required_skills.len(), 5);
        assert_eq!(roadmap.missing_skills, vec!["tokio"]);
        assert_eq!(
            roadmap.learning_roadmap["tokio"].websites,
            vec!["https://tokio.rs/tokio/tutorial"]
        );
    }

    #[tokio::test]
    async fn test_rate_limited_oracle_falls_back() {
        let planner = RoadmapPlanner::new(Some(Arc::new(FixedOracle(Err(429)))));
        let roadmap = planner.plan("data scientist", &[]).await;
        assert_eq!(roadmap.note.as_deref(), Some(FALLBACK_NOTE));
        assert_eq!(roadmap.missing_skills.len(), 8);
    }

    #[test]
    fn test_fallback_roadmap_follows_missing_skill_order() {
        let roadmap = plan_fallback("backend developer", &skills(&["python"]));
        let keys: Vec<&String> = roadmap.learning_roadmap.keys().collect();
        let missing: Vec<&String> = roadmap.missing_skills.iter().collect();
        assert_eq!(keys, missing);

        let json = serde_json::to_string(&roadmap).unwrap();
        let fastapi = json.find(r#""fastapi":{"#).unwrap();
        let api_design = json.find(r#""api design":{"#).unwrap();
        assert!(fastapi < api_design);
    }

    #[tokio::test]
    async fn test_oracle_roadmap_keeps_key_order() {
        let json = r#"{
            "required_skills": ["rust", "tokio", "axum"],
            "missing_skills": ["tokio", "axum"],
            "learning_roadmap": {"tokio": {}, "axum": {}}
        }"#;
        let planner = RoadmapPlanner::new(Some(Arc::new(FixedOracle(Ok(json)))));
        let roadmap = planner.plan("Rust Developer", &skills(&["rust"])).await;

        assert!(roadmap.note.is_none());
        let keys: Vec<&str> = roadmap.learning_roadmap.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["tokio", "axum"]);
    }

    #[tokio::test]
    async fn test_empty_oracle_answer_falls_back() {
        let planner = RoadmapPlanner::new(Some(Arc::new(FixedOracle(Ok("{}")))));
        let roadmap = planner.plan("backend developer", &skills(&["python"])).await;

        assert_eq!(roadmap.note.as_deref(), Some(FALLBACK_NOTE));
        assert_eq!(roadmap.required_skills[0], "python");
        assert_eq!(roadmap.missing_skills[0], "fastapi");
    }

    #[tokio::test]
    async fn test_answer_without_required_skills_is_empty_content() {
        let json = r#"{"required_skills": [], "missing_skills": ["docker"]}"#;
        let planner = RoadmapPlanner::new(Some(Arc::new(FixedOracle(Ok(json)))));
        let err = planner.plan_ai("devops engineer", &[]).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_malformed_oracle_answer_falls_back() {
        let planner = RoadmapPlanner::new(Some(Arc::new(FixedOracle(Ok("no json here")))));
        let roadmap = planner.plan("mobile developer", &[]).await;
        assert_eq!(roadmap.note.as_deref(), Some(FALLBACK_NOTE));
        assert_eq!(roadmap.required_skills[0], "react native");
    }
}
