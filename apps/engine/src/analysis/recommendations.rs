//! Rule-based CV advice.
//!
//! Rules are evaluated in a fixed order and are independent of each other;
//! every rule that fires appends one message. When nothing fires the CV gets
//! three generic suggestions instead, so the list is never empty.

use crate::analysis::contact::ContactSignals;
use crate::analysis::education::Education;

const MIN_SKILLS: usize = 5;
const MIN_EXPERIENCE_YEARS: u32 = 3;
const MIN_EDUCATION_LEVEL: u8 = 2;

const SOFT_SKILLS: &[&str] = &["leadership", "communication", "teamwork"];
const CLOUD_SKILLS: &[&str] = &["aws", "azure", "gcp", "docker", "kubernetes"];

pub const ADD_SKILLS: &str = "Add more relevant technical skills to strengthen your profile";
pub const SHOWCASE_EXPERIENCE: &str =
    "Highlight any internships, projects, or volunteer work to showcase experience";
pub const CONTACT_VISIBLE: &str =
    "Ensure your contact information (email and phone) is clearly visible";
pub const FURTHER_EDUCATION: &str =
    "Consider pursuing additional certifications or degrees to enhance qualifications";
pub const SOFT_SKILLS_HINT: &str = "Include soft skills like leadership, communication, and teamwork";
pub const CLOUD_SKILLS_HINT: &str =
    "Consider adding cloud technologies or DevOps skills for modern roles";

pub const GENERIC_RECOMMENDATIONS: [&str; 3] = [
    "Excellent CV! Keep it updated with your latest achievements",
    "Consider tailoring your CV for specific job applications",
    "Add quantifiable achievements and metrics to your experience",
];

pub fn generate_recommendations(
    skills: &[String],
    experience_years: u32,
    education: &Education,
    contact: ContactSignals,
) -> Vec<String> {
    let rules = [
        (skills.len() < MIN_SKILLS, ADD_SKILLS),
        (experience_years < MIN_EXPERIENCE_YEARS, SHOWCASE_EXPERIENCE),
        (!contact.is_complete(), CONTACT_VISIBLE),
        (education.level < MIN_EDUCATION_LEVEL, FURTHER_EDUCATION),
        (!has_any(skills, SOFT_SKILLS), SOFT_SKILLS_HINT),
        (!skills.is_empty() && !has_any(skills, CLOUD_SKILLS), CLOUD_SKILLS_HINT),
    ];

    let recommendations: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, message)| message.to_string())
        .collect();

    if recommendations.is_empty() {
        GENERIC_RECOMMENDATIONS.iter().map(|m| m.to_string()).collect()
    } else {
        recommendations
    }
}

fn has_any(skills: &[String], group: &[&str]) -> bool {
    skills
        .iter()
        .any(|skill| group.iter().any(|g| *g == skill.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn full_contact() -> ContactSignals {
        ContactSignals {
            has_email: true,
            has_phone: true,
        }
    }

    #[test]
    fn test_empty_profile_triggers_expected_rules_in_order() {
        let recs = generate_recommendations(&[], 2, &Education::default(), ContactSignals::default());
        assert_eq!(
            recs,
            vec![ADD_SKILLS, SHOWCASE_EXPERIENCE, CONTACT_VISIBLE, SOFT_SKILLS_HINT]
        );
    }

    #[test]
    fn test_cloud_rule_needs_at_least_one_skill() {
        let recs = generate_recommendations(&[], 5, &Education::default(), full_contact());
        assert!(!recs.iter().any(|r| r == CLOUD_SKILLS_HINT));

        let recs =
            generate_recommendations(&skills(&["python"]), 5, &Education::default(), full_contact());
        assert!(recs.iter().any(|r| r == CLOUD_SKILLS_HINT));
    }

    #[test]
    fn test_low_education_rule() {
        let edu = Education {
            level: 1,
            name: "Diploma".to_string(),
        };
        let recs = generate_recommendations(&[], 5, &edu, full_contact());
        assert!(recs.iter().any(|r| r == FURTHER_EDUCATION));
    }

    #[test]
    fn test_strong_profile_gets_generic_fallback() {
        let strong = skills(&["python", "react", "sql", "docker", "leadership"]);
        let recs = generate_recommendations(&strong, 6, &Education::default(), full_contact());
        assert_eq!(recs, GENERIC_RECOMMENDATIONS.to_vec());
    }

    #[test]
    fn test_never_empty() {
        for years in [0, 2, 3, 10] {
            for level in 0..=4 {
                let edu = Education {
                    level,
                    name: String::new(),
                };
                let recs = generate_recommendations(&[], years, &edu, full_contact());
                assert!(!recs.is_empty());
            }
        }
    }
}
