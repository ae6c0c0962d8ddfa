//! Learning center: courses and articles for skills a candidate is missing.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Course,
    Article,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub skill: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub provider: String,
    pub url: String,
    pub free: bool,
    pub accessible_format: bool,
    pub description: String,
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    resource_type: ResourceType,
    skill: &str,
    difficulty: Difficulty,
    duration: &str,
    provider: &str,
    url: &str,
    free: bool,
    description: &str,
) -> LearningResource {
    LearningResource {
        id: id.to_string(),
        title: title.to_string(),
        resource_type,
        skill: skill.to_string(),
        difficulty,
        duration: duration.to_string(),
        provider: provider.to_string(),
        url: url.to_string(),
        free,
        accessible_format: true,
        description: description.to_string(),
    }
}

static RESOURCES: LazyLock<Vec<LearningResource>> = LazyLock::new(|| {
    vec![
        resource(
            "learn-1",
            "JavaScript Fundamentals",
            ResourceType::Course,
            "javascript",
            Difficulty::Beginner,
            "4 weeks",
            "freeCodeCamp",
            "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/",
            true,
            "Learn JavaScript basics including variables, functions, and DOM manipulation.",
        ),
        resource(
            "learn-2",
            "React Complete Guide",
            ResourceType::Course,
            "react",
            Difficulty::Intermediate,
            "6 weeks",
            "Coursera",
            "https://www.coursera.org/learn/react",
            false,
            "Master React including hooks, context, and state management.",
        ),
        resource(
            "learn-3",
            "Python for Data Science",
            ResourceType::Course,
            "python",
            Difficulty::Beginner,
            "8 weeks",
            "edX",
            "https://www.edx.org/learn/python",
            true,
            "Learn Python programming with focus on data analysis and visualization.",
        ),
        resource(
            "learn-4",
            "AWS Cloud Practitioner",
            ResourceType::Course,
            "aws",
            Difficulty::Beginner,
            "3 weeks",
            "AWS Training",
            "https://aws.amazon.com/training/",
            true,
            "Get started with AWS cloud services and prepare for certification.",
        ),
        resource(
            "learn-5",
            "Accessibility Best Practices",
            ResourceType::Article,
            "accessibility",
            Difficulty::Intermediate,
            "2 hours",
            "MDN Web Docs",
            "https://developer.mozilla.org/en-US/docs/Web/Accessibility",
            true,
            "Learn how to build accessible web applications following WCAG guidelines.",
        ),
        resource(
            "learn-6",
            "Docker Mastery",
            ResourceType::Course,
            "docker",
            Difficulty::Intermediate,
            "5 weeks",
            "Udemy",
            "https://www.udemy.com/topic/docker/",
            false,
            "Master Docker containerization and orchestration.",
        ),
    ]
});

pub fn learning_catalog() -> &'static [LearningResource] {
    &RESOURCES
}

/// Resources teaching any of `missing_skills` (case-insensitive). Falls back
/// to the whole catalog when nothing is missing or nothing matches.
pub fn recommend_resources<'a>(
    catalog: &'a [LearningResource],
    missing_skills: &[String],
) -> Vec<&'a LearningResource> {
    if missing_skills.is_empty() {
        return catalog.iter().collect();
    }

    let recommended: Vec<&LearningResource> = catalog
        .iter()
        .filter(|r| {
            missing_skills
                .iter()
                .any(|s| s.to_lowercase() == r.skill.to_lowercase())
        })
        .collect();

    if recommended.is_empty() {
        catalog.iter().collect()
    } else {
        recommended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn ids(resources: &[&LearningResource]) -> Vec<String> {
        resources.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_no_missing_skills_returns_everything() {
        let recs = recommend_resources(learning_catalog(), &[]);
        assert_eq!(recs.len(), 6);
    }

    #[test]
    fn test_filters_by_missing_skill() {
        let recs = recommend_resources(learning_catalog(), &skills(&["Docker", "aws", "sql"]));
        assert_eq!(ids(&recs), vec!["learn-4", "learn-6"]);
    }

    #[test]
    fn test_unmatched_skills_fall_back_to_everything() {
        let recs = recommend_resources(learning_catalog(), &skills(&["cobol"]));
        assert_eq!(recs.len(), learning_catalog().len());
    }

    #[test]
    fn test_serializes_with_type_key() {
        let json = serde_json::to_string(&learning_catalog()[4]).unwrap();
        assert!(json.contains("\"type\":\"article\""));
        assert!(json.contains("\"accessibleFormat\":true"));
    }
}
