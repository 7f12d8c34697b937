use crate::job::{Domain, ExperienceLevel, Job, JobType};

/// Active view criteria: free-form search text plus three categorical
/// selectors. `None` on a selector means "All" (no constraint).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_query: String,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub domain: Option<Domain>,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        self.search_query.is_empty()
            && self.job_type.is_none()
            && self.experience_level.is_none()
            && self.domain.is_none()
    }

    /// Conjunction of four independent clauses; all must hold.
    pub fn matches(&self, job: &Job) -> bool {
        let matches_search = self.search_query.is_empty() || {
            let needle = self.search_query.to_lowercase();
            job.title.to_lowercase().contains(needle.as_str())
                || job.company.to_lowercase().contains(needle.as_str())
        };

        let matches_job_type = self
            .job_type
            .map_or(true, |job_type| job_type == job.job_type);

        let matches_experience = self
            .experience_level
            .map_or(true, |level| level == job.experience_level);

        let matches_domain = self.domain.map_or(true, |domain| domain == job.domain);

        matches_search && matches_job_type && matches_experience && matches_domain
    }
}
