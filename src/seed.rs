use chrono::{Duration, Utc};

use crate::job::{Domain, ExperienceLevel, Job, JobType};

/// Bundled starter dataset used when no persisted collection exists yet.
pub fn default_jobs() -> Vec<Job> {
    let now = Utc::now();
    let entry = |id: &str,
                 title: &str,
                 company: &str,
                 url: &str,
                 days_ago: i64,
                 job_type: JobType,
                 experience_level: ExperienceLevel,
                 domain: Domain| Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        url: url.to_string(),
        date_added: now - Duration::days(days_ago),
        job_type,
        experience_level,
        domain,
    };

    vec![
        entry(
            "1",
            "Senior Frontend Developer",
            "TechCorp",
            "https://techcorp.com/careers",
            2,
            JobType::FullTime,
            ExperienceLevel::Senior,
            Domain::Frontend,
        ),
        entry(
            "2",
            "Backend Engineer",
            "DataSystems",
            "https://datasystems.io/jobs",
            5,
            JobType::FullTime,
            ExperienceLevel::Mid,
            Domain::Backend,
        ),
        entry(
            "3",
            "UX/UI Design Intern",
            "CreativeMinds",
            "https://creativeminds.design/internships",
            1,
            JobType::Internship,
            ExperienceLevel::Entry,
            Domain::UiUx,
        ),
        entry(
            "4",
            "DevOps Specialist",
            "CloudNative",
            "https://cloudnative.dev/careers",
            7,
            JobType::Contract,
            ExperienceLevel::Senior,
            Domain::DevOps,
        ),
        entry(
            "5",
            "Mobile Developer",
            "AppWorks",
            "https://appworks.io/jobs",
            3,
            JobType::FullTime,
            ExperienceLevel::Mid,
            Domain::Mobile,
        ),
        entry(
            "6",
            "Data Scientist",
            "AnalyticsPro",
            "https://analyticspro.ai/careers",
            10,
            JobType::PartTime,
            ExperienceLevel::Senior,
            Domain::DataScience,
        ),
        entry(
            "7",
            "Product Manager",
            "InnovateTech",
            "https://innovatetech.com/jobs",
            4,
            JobType::FullTime,
            ExperienceLevel::Lead,
            Domain::ProductManagement,
        ),
        entry(
            "8",
            "QA Engineer Intern",
            "QualitySoft",
            "https://qualitysoft.com/internships",
            6,
            JobType::Internship,
            ExperienceLevel::Entry,
            Domain::Qa,
        ),
        entry(
            "9",
            "Full Stack Developer",
            "WebSolutions",
            "https://websolutions.dev/careers",
            8,
            JobType::FullTime,
            ExperienceLevel::Mid,
            Domain::FullStack,
        ),
        entry(
            "10",
            "Machine Learning Engineer",
            "AILabs",
            "https://ailabs.tech/jobs",
            12,
            JobType::Contract,
            ExperienceLevel::Senior,
            Domain::MachineLearning,
        ),
    ]
}
