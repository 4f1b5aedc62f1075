//! Static roadmap tables and the two-tier learning-resource lookup.

use crate::models::roadmap::SkillResources;

const REQUIRED_SKILLS_BY_ROLE: &[(&str, &[&str])] = &[
    (
        "backend developer",
        &["python", "fastapi", "django", "sql", "postgresql", "docker", "git", "api design", "redis"],
    ),
    (
        "frontend developer",
        &["react", "javascript", "typescript", "html", "css", "tailwind", "redux", "webpack"],
    ),
    (
        "full stack developer",
        &["react", "node", "express", "mongodb", "javascript", "typescript", "docker", "git"],
    ),
    (
        "data scientist",
        &["python", "pandas", "numpy", "machine learning", "tensorflow", "sql", "statistics", "jupyter"],
    ),
    (
        "devops engineer",
        &["docker", "kubernetes", "aws", "terraform", "jenkins", "linux", "git", "ci/cd"],
    ),
    (
        "mobile developer",
        &["react native", "flutter", "kotlin", "swift", "firebase", "mobile ui", "api integration"],
    ),
];

/// Used when the target role is not in the table.
pub const BASELINE_SKILLS: &[&str] = &["git", "communication", "problem solving", "python"];

struct StaticResources {
    skill: &'static str,
    roadmap: &'static [&'static str],
    websites: &'static [&'static str],
    youtube: &'static [&'static str],
}

const SKILL_RESOURCES: &[StaticResources] = &[
    StaticResources {
        skill: "python",
        roadmap: &[
            "Basics (variables, loops, functions)",
            "OOP (classes, inheritance)",
            "Advanced (decorators, generators)",
            "Frameworks (FastAPI/Django)",
        ],
        websites: &[
            "https://docs.python.org",
            "https://realpython.com",
            "https://www.pythontutorial.net",
        ],
        youtube: &[
            "https://www.youtube.com/watch?v=rfscVS0vtbw - Python Full Course (freeCodeCamp)",
            "https://www.youtube.com/watch?v=_uQrJ0TkZlc - Python Tutorial (Programming with Mosh)",
        ],
    },
    StaticResources {
        skill: "fastapi",
        roadmap: &[
            "REST API basics",
            "CRUD operations",
            "Database integration",
            "Authentication",
            "Deployment",
        ],
        websites: &[
            "https://fastapi.tiangolo.com",
            "https://www.freecodecamp.org/news/fastapi-quickstart",
        ],
        youtube: &[
            "https://www.youtube.com/watch?v=0sOvCWFmrtA - FastAPI Course (freeCodeCamp)",
            "https://www.youtube.com/watch?v=7t2alSnE2-I - FastAPI Tutorial (Tech with Tim)",
        ],
    },
    StaticResources {
        skill: "docker",
        roadmap: &[
            "Images and containers",
            "Writing Dockerfiles",
            "Volumes and networking",
            "Docker Compose for multi-service apps",
        ],
        websites: &["https://docs.docker.com/get-started/"],
        youtube: &[
            "https://www.youtube.com/results?search_query=docker+full+course - Docker Full Course",
        ],
    },
    StaticResources {
        skill: "git",
        roadmap: &[
            "Commits and history",
            "Branching and merging",
            "Remotes and pull requests",
            "Rebasing and conflict resolution",
        ],
        websites: &["https://git-scm.com/book/en/v2"],
        youtube: &["https://www.youtube.com/results?search_query=git+full+course - Git Full Course"],
    },
    StaticResources {
        skill: "sql",
        roadmap: &[
            "SELECT, WHERE, ORDER BY",
            "Joins and aggregation",
            "Indexes and query plans",
            "Transactions and normalization",
        ],
        websites: &["https://www.postgresql.org/docs/current/tutorial.html"],
        youtube: &["https://www.youtube.com/results?search_query=sql+full+course - SQL Full Course"],
    },
    StaticResources {
        skill: "react",
        roadmap: &[
            "Components and JSX",
            "State and props",
            "Hooks and effects",
            "Routing and data fetching",
        ],
        websites: &["https://react.dev/learn"],
        youtube: &["https://www.youtube.com/results?search_query=react+full+course - React Full Course"],
    },
    StaticResources {
        skill: "kubernetes",
        roadmap: &[
            "Pods, deployments and services",
            "ConfigMaps and secrets",
            "Ingress and networking",
            "Helm and cluster operations",
        ],
        websites: &["https://kubernetes.io/docs/tutorials/"],
        youtube: &[
            "https://www.youtube.com/results?search_query=kubernetes+full+course - Kubernetes Full Course",
        ],
    },
];

const GENERIC_ROADMAP: &[&str] = &["Basics", "Intermediate Concepts", "Projects", "Interviews"];

/// Required skills for a role (case-insensitive), or `None` for unknown roles.
pub fn required_skills_for_role(role: &str) -> Option<&'static [&'static str]> {
    let role = role.trim().to_lowercase();
    REQUIRED_SKILLS_BY_ROLE
        .iter()
        .find(|(key, _)| *key == role)
        .map(|(_, skills)| *skills)
}

/// Two-tier lookup: the curated table, else templated search links.
pub fn resources_for(skill: &str) -> SkillResources {
    curated_resources(skill).unwrap_or_else(|| generated_resources(skill))
}

fn curated_resources(skill: &str) -> Option<SkillResources> {
    SKILL_RESOURCES
        .iter()
        .find(|r| r.skill.eq_ignore_ascii_case(skill))
        .map(|r| SkillResources {
            roadmap: owned(r.roadmap),
            websites: owned(r.websites),
            youtube: owned(r.youtube),
        })
}

fn generated_resources(skill: &str) -> SkillResources {
    let query = urlencoding::encode(skill.trim());
    SkillResources {
        roadmap: owned(GENERIC_ROADMAP),
        websites: vec![format!("https://www.google.com/search?q={query}+tutorial")],
        youtube: vec![format!(
            "https://www.youtube.com/results?search_query={query}+tutorial"
        )],
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
