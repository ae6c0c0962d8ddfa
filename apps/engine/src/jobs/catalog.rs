use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::jobs::models::Job;

static JOBS: LazyLock<Vec<Job>> = LazyLock::new(|| {
    vec![
        job(JobSeed {
            id: "job-1",
            title: "Frontend Developer",
            company: "TechCorp Inc.",
            location: "Remote",
            job_type: "Full-time",
            salary: "$60,000 - $90,000",
            description: "We are looking for a talented Frontend Developer to join our team.",
            requirements: "Experience with React, JavaScript, HTML, CSS. Good communication skills.",
            skills: &["react", "javascript", "html", "css", "git", "communication"],
            posted: (2025, 12, 10),
            accommodations: &["Remote work", "Flexible hours", "Screen reader compatible tools"],
        }),
        job(JobSeed {
            id: "job-2",
            title: "Python Data Analyst",
            company: "DataViz Solutions",
            location: "New York, NY",
            job_type: "Full-time",
            salary: "$70,000 - $95,000",
            description: "Join our data team to analyze and visualize complex datasets.",
            requirements: "Python, pandas, data analysis, SQL. Bachelor degree preferred.",
            skills: &["python", "pandas", "sql", "data analysis", "machine learning"],
            posted: (2025, 12, 11),
            accommodations: &["Accessible office", "Assistive technology provided"],
        }),
        job(JobSeed {
            id: "job-3",
            title: "Full Stack Developer",
            company: "StartupXYZ",
            location: "San Francisco, CA",
            job_type: "Full-time",
            salary: "$80,000 - $120,000",
            description: "Build scalable web applications using modern technologies.",
            requirements: "Node.js, React, MongoDB, AWS. 3+ years experience.",
            skills: &["node.js", "react", "mongodb", "aws", "docker", "rest api"],
            posted: (2025, 12, 9),
            accommodations: &["Remote option available", "Ergonomic workspace"],
        }),
        job(JobSeed {
            id: "job-4",
            title: "UX/UI Designer",
            company: "DesignHub",
            location: "Remote",
            job_type: "Contract",
            salary: "$50 - $80/hour",
            description: "Create beautiful and accessible user interfaces.",
            requirements: "Figma, Adobe XD, user research, accessibility standards (WCAG).",
            skills: &["figma", "adobe xd", "user research", "accessibility", "responsive design"],
            posted: (2025, 12, 12),
            accommodations: &["Flexible schedule", "Accessibility-first design culture"],
        }),
        job(JobSeed {
            id: "job-5",
            title: "DevOps Engineer",
            company: "CloudTech",
            location: "Austin, TX",
            job_type: "Full-time",
            salary: "$90,000 - $130,000",
            description: "Manage cloud infrastructure and CI/CD pipelines.",
            requirements: "AWS, Kubernetes, Docker, Terraform, Jenkins.",
            skills: &["aws", "kubernetes", "docker", "terraform", "jenkins", "ci/cd"],
            posted: (2025, 12, 8),
            accommodations: &["Remote work", "Flexible hours"],
        }),
    ]
});

struct JobSeed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    job_type: &'static str,
    salary: &'static str,
    description: &'static str,
    requirements: &'static str,
    skills: &'static [&'static str],
    posted: (i32, u32, u32),
    accommodations: &'static [&'static str],
}

fn job(seed: JobSeed) -> Job {
    let (y, m, d) = seed.posted;
    Job {
        id: seed.id.to_string(),
        title: seed.title.to_string(),
        company: seed.company.to_string(),
        location: seed.location.to_string(),
        job_type: seed.job_type.to_string(),
        salary: seed.salary.to_string(),
        description: seed.description.to_string(),
        requirements: seed.requirements.to_string(),
        skills: seed.skills.iter().map(|s| s.to_string()).collect(),
        posted_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        accessibility_friendly: true,
        disability_accommodations: seed.accommodations.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in job board.
pub fn job_catalog() -> &'static [Job] {
    &JOBS
}

pub fn find_job(id: &str) -> Option<&'static Job> {
    JOBS.iter().find(|job| job.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_jobs_with_skills() {
        let jobs = job_catalog();
        assert_eq!(jobs.len(), 5);
        assert!(jobs.iter().all(|j| !j.skills.is_empty()));
    }

    #[test]
    fn test_posted_dates_are_real_dates() {
        let job = find_job("job-5").unwrap();
        assert_eq!(job.posted_date, NaiveDate::from_ymd_opt(2025, 12, 8).unwrap());
    }

    #[test]
    fn test_find_job_unknown_id() {
        assert!(find_job("job-404").is_none());
        assert_eq!(find_job("job-4").unwrap().job_type, "Contract");
    }
}
