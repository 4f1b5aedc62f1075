//! Skill Taxonomy: static role categories and their canonical skill vocabularies.
//!
//! Table order is part of the contract: role inference breaks ties by it.

pub const FRONTEND_DEVELOPER: &str = "Frontend Developer";
pub const BACKEND_DEVELOPER: &str = "Backend Developer";
pub const FULL_STACK_DEVELOPER: &str = "Full Stack Developer";

const SKILLS_BY_ROLE: &[(&str, &[&str])] = &[
    (
        FRONTEND_DEVELOPER,
        &[
            "react", "angular", "vue", "svelte", "html", "css", "javascript", "typescript",
            "redux", "bootstrap", "tailwind", "sass", "webpack", "jest", "cypress",
        ],
    ),
    (
        BACKEND_DEVELOPER,
        &[
            "python", "django", "flask", "fastapi", "node", "express", "java", "spring", "go",
            "golang", "rust", "c#", ".net", "ruby", "rails", "php", "laravel", "sql",
            "postgresql", "mysql", "mongodb", "redis", "elasticsearch",
        ],
    ),
    // Inferred from Frontend + Backend scores, never voted for directly.
    (FULL_STACK_DEVELOPER, &[]),
    (
        "Data Scientist",
        &[
            "python", "r", "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "keras",
            "matplotlib", "seaborn", "sql", "tableau", "powerbi", "hadoop", "spark",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "gitlab ci",
            "github actions", "terraform", "ansible", "linux", "bash", "monitoring",
            "prometheus", "grafana",
        ],
    ),
    (
        "Mobile Developer",
        &[
            "swift", "ios", "kotlin", "android", "flutter", "react native", "objective-c",
            "dart",
        ],
    ),
];

/// Canonical lowercase skills for a role key (case-insensitive exact match).
/// Unknown roles yield an empty slice; callers supply their own default.
pub fn skills_for_role(role: &str) -> &'static [&'static str] {
    let role = role.trim();
    SKILLS_BY_ROLE
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(role))
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

/// All role keys, in table order.
pub fn role_categories() -> impl Iterator<Item = &'static str> {
    SKILLS_BY_ROLE.iter().map(|(role, _)| *role)
}

/// Every skill across all roles, each listed once, in table order.
pub fn all_skills() -> Vec<&'static str> {
    let mut skills: Vec<&'static str> = Vec::new();
    for (_, role_skills) in SKILLS_BY_ROLE {
        for skill in *role_skills {
            if !skills.contains(skill) {
                skills.push(*skill);
            }
        }
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_for_role_is_case_insensitive() {
        assert!(skills_for_role("frontend developer").contains(&"react"));
        assert!(skills_for_role("FRONTEND DEVELOPER").contains(&"react"));
    }

    #[test]
    fn test_skills_for_role_is_exact_not_fuzzy() {
        assert!(skills_for_role("Frontend").is_empty());
        assert!(skills_for_role("Senior Frontend Developer").is_empty());
    }

    #[test]
    fn test_full_stack_has_no_vocabulary() {
        assert!(skills_for_role(FULL_STACK_DEVELOPER).is_empty());
    }

    #[test]
    fn test_role_categories_order() {
        let roles: Vec<_> = role_categories().collect();
        assert_eq!(
            roles,
            vec![
                "Frontend Developer",
                "Backend Developer",
                "Full Stack Developer",
                "Data Scientist",
                "DevOps Engineer",
                "Mobile Developer",
            ]
        );
    }

    #[test]
    fn test_all_skills_is_deduplicated_union() {
        let skills = all_skills();
        assert_eq!(skills.iter().filter(|s| **s == "python").count(), 1);
        assert_eq!(skills.iter().filter(|s| **s == "sql").count(), 1);
        assert!(skills.contains(&"react native"));
        assert!(skills.contains(&"grafana"));
        assert_eq!(skills[0], "react");
    }
}
