//! Skill catalogs and substring-based skill detection.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Catalog the scorer uses unless configured otherwise.
const STANDARD_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "c++",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "html",
    "css",
    "typescript",
    "machine learning",
    "data analysis",
    "project management",
    "rest api",
    "graphql",
];

/// Application-wide skills database, a superset used by profile-driven matching.
const EXTENDED_SKILLS: &[&str] = &[
    "javascript", "python", "java", "c++", "c#", "ruby", "php", "swift", "kotlin", "go",
    "react", "angular", "vue", "svelte", "next.js", "nuxt", "gatsby",
    "node.js", "express", "django", "flask", "spring", "laravel", "rails",
    "sql", "mongodb", "postgresql", "mysql", "redis", "elasticsearch", "cassandra",
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "terraform", "ansible",
    "git", "github", "gitlab", "bitbucket", "jira", "confluence",
    "agile", "scrum", "kanban", "devops", "ci/cd",
    "leadership", "communication", "teamwork", "problem solving", "critical thinking",
    "html", "css", "sass", "less", "tailwind", "bootstrap",
    "typescript", "graphql", "rest api", "microservices", "serverless",
    "machine learning", "deep learning", "ai", "data science", "data analysis",
    "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy",
    "project management", "product management", "business analysis",
    "testing", "unit testing", "integration testing", "e2e testing", "jest", "cypress",
    "security", "authentication", "authorization", "oauth", "jwt",
    "responsive design", "mobile development", "ios", "android", "react native", "flutter",
    "figma", "adobe xd", "user research", "accessibility",
];

static STANDARD: LazyLock<SkillCatalog> = LazyLock::new(|| SkillCatalog::new(STANDARD_SKILLS));
static EXTENDED: LazyLock<SkillCatalog> = LazyLock::new(|| SkillCatalog::new(EXTENDED_SKILLS));

/// Which built-in catalog to score against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCatalogKind {
    #[default]
    Standard,
    Extended,
}

impl SkillCatalogKind {
    pub fn catalog(self) -> &'static SkillCatalog {
        match self {
            SkillCatalogKind::Standard => SkillCatalog::standard(),
            SkillCatalogKind::Extended => SkillCatalog::extended(),
        }
    }
}

impl FromStr for SkillCatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(SkillCatalogKind::Standard),
            "extended" => Ok(SkillCatalogKind::Extended),
            other => Err(format!("unknown skill catalog '{other}'")),
        }
    }
}

impl fmt::Display for SkillCatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCatalogKind::Standard => f.write_str("standard"),
            SkillCatalogKind::Extended => f.write_str("extended"),
        }
    }
}

/// A fixed, ordered list of lowercase skill keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Builds a catalog, lowercasing entries and dropping repeats while keeping
    /// first-seen order.
    pub fn new<S: AsRef<str>>(skills: &[S]) -> Self {
        let mut normalized: Vec<String> = Vec::with_capacity(skills.len());
        for skill in skills {
            let lower = skill.as_ref().trim().to_lowercase();
            if !lower.is_empty() && !normalized.contains(&lower) {
                normalized.push(lower);
            }
        }
        Self { skills: normalized }
    }

    pub fn standard() -> &'static SkillCatalog {
        &STANDARD
    }

    pub fn extended() -> &'static SkillCatalog {
        &EXTENDED
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Returns every catalog skill that occurs as a substring of the
    /// lowercased text, in catalog order. No tokenization: "java" is found
    /// inside "javascript".
    pub fn detect(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| text_lower.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_has_36_unique_skills() {
        assert_eq!(SkillCatalog::standard().len(), 36);
    }

    #[test]
    fn test_extended_is_superset_of_standard() {
        let extended = SkillCatalog::extended();
        for skill in SkillCatalog::standard().skills() {
            assert!(extended.skills().contains(skill), "missing {skill}");
        }
    }

    #[test]
    fn test_detect_is_case_insensitive_and_catalog_ordered() {
        let skills = SkillCatalog::standard().detect("Worked with DOCKER, then Python and React");
        assert_eq!(skills, vec!["python", "react", "docker"]);
    }

    #[test]
    fn test_detect_matches_substrings() {
        let skills = SkillCatalog::standard().detect("javascript");
        assert_eq!(skills, vec!["javascript", "java"]);
    }

    #[test]
    fn test_detect_empty_text_finds_nothing() {
        assert!(SkillCatalog::standard().detect("").is_empty());
    }

    #[test]
    fn test_detect_reports_each_skill_once() {
        let skills = SkillCatalog::standard().detect("sql sql SQL");
        assert_eq!(skills, vec!["sql"]);
    }

    #[test]
    fn test_new_normalizes_and_dedups() {
        let catalog = SkillCatalog::new(&["Rust", "rust", " Go ", ""]);
        assert_eq!(catalog.skills(), &["rust".to_string(), "go".to_string()]);
    }

    #[test]
    fn test_catalog_kind_parses() {
        assert_eq!("Extended".parse::<SkillCatalogKind>(), Ok(SkillCatalogKind::Extended));
        assert_eq!("standard".parse::<SkillCatalogKind>(), Ok(SkillCatalogKind::Standard));
        assert!("other".parse::<SkillCatalogKind>().is_err());
        assert_eq!(SkillCatalogKind::Extended.to_string(), "extended");
    }
}
