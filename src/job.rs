use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Frontend,
    Backend,
    #[serde(rename = "Full Stack")]
    FullStack,
    Mobile,
    DevOps,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Product Management")]
    ProductManagement,
    #[serde(rename = "QA")]
    Qa,
    Other,
}

impl Domain {
    pub const ALL: [Domain; 11] = [
        Domain::Frontend,
        Domain::Backend,
        Domain::FullStack,
        Domain::Mobile,
        Domain::DevOps,
        Domain::DataScience,
        Domain::MachineLearning,
        Domain::UiUx,
        Domain::ProductManagement,
        Domain::Qa,
        Domain::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Domain::Frontend => "Frontend",
            Domain::Backend => "Backend",
            Domain::FullStack => "Full Stack",
            Domain::Mobile => "Mobile",
            Domain::DevOps => "DevOps",
            Domain::DataScience => "Data Science",
            Domain::MachineLearning => "Machine Learning",
            Domain::UiUx => "UI/UX",
            Domain::ProductManagement => "Product Management",
            Domain::Qa => "QA",
            Domain::Other => "Other",
        }
    }
}

/// One tracked job opportunity. `id` and `date_added` are assigned by the
/// store at creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub url: String,
    pub date_added: DateTime<Utc>,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub domain: Domain,
}

/// Input for [`crate::store::JobStore::add`]: a job without its
/// store-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub url: String,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub domain: Domain,
}
