use aes_gcm::aead::{rand_core::RngCore, OsRng};
use chrono::{Duration, Utc};
use tracing::{debug, warn};

use crate::filter::FilterCriteria;
use crate::job::{Domain, ExperienceLevel, Job, JobDraft, JobType};
use crate::seed;
use crate::storage::{Storage, JOBS_KEY};
use crate::StorageError;

/// Aggregate counts for the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobStats {
    pub total: usize,
    /// Jobs added within the last 7 days.
    pub recent: usize,
}

/// Owns the canonical job sequence, a persisted snapshot of it, and the
/// derived filtered view. Every mutation of the sequence or the criteria
/// recomputes the view synchronously, always from the full sequence, then
/// writes through to storage best-effort.
pub struct JobStore {
    storage: Box<dyn Storage>,
    jobs: Vec<Job>,
    criteria: FilterCriteria,
    filtered: Vec<Job>,
}

impl JobStore {
    /// Loads the persisted sequence from `storage`, falling back to the
    /// bundled seed dataset when the key is absent or the payload does not
    /// parse. Criteria always start at defaults; they are never persisted.
    pub fn load(storage: Box<dyn Storage>) -> Result<Self, StorageError> {
        let jobs = match storage.get(JOBS_KEY)? {
            Some(bytes) => match serde_json::from_slice::<Vec<Job>>(bytes.as_slice()) {
                Ok(jobs) => jobs,
                Err(err) => {
                    warn!(error = %err, "persisted jobs unreadable, reseeding");
                    seed::default_jobs()
                }
            },
            None => seed::default_jobs(),
        };
        let filtered = jobs.clone();
        Ok(Self {
            storage,
            jobs,
            criteria: FilterCriteria::default(),
            filtered,
        })
    }

    pub fn jobs(&self) -> &[Job] {
        self.jobs.as_slice()
    }

    pub fn filtered_jobs(&self) -> &[Job] {
        self.filtered.as_slice()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn stats(&self) -> JobStats {
        let one_week_ago = Utc::now() - Duration::days(7);
        let recent = self
            .jobs
            .iter()
            .filter(|job| job.date_added >= one_week_ago)
            .count();
        JobStats {
            total: self.jobs.len(),
            recent,
        }
    }

    /// Assigns a fresh id and timestamp, prepends the record (newest first),
    /// and returns a reference to it. Input validation happens upstream in
    /// the form layer; the store accepts any draft as-is.
    pub fn add(&mut self, draft: JobDraft) -> &Job {
        let job = Job {
            id: new_id(),
            title: draft.title,
            company: draft.company,
            url: draft.url,
            date_added: Utc::now(),
            job_type: draft.job_type,
            experience_level: draft.experience_level,
            domain: draft.domain,
        };
        debug!(id = %job.id, "adding job");
        self.jobs.insert(0, job);
        self.recompute();
        self.persist();
        &self.jobs[0]
    }

    /// Replaces the record whose id matches. An unknown id is a silent
    /// no-op; callers needing confirmation should check presence first.
    pub fn update(&mut self, updated: Job) {
        if let Some(slot) = self.jobs.iter_mut().find(|job| job.id == updated.id) {
            *slot = updated;
        }
        self.recompute();
        self.persist();
    }

    /// Removes the record with the given id; no-op when absent.
    pub fn delete(&mut self, id: &str) {
        self.jobs.retain(|job| job.id != id);
        self.recompute();
        self.persist();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
        self.recompute();
    }

    pub fn set_job_type_filter(&mut self, job_type: Option<JobType>) {
        self.criteria.job_type = job_type;
        self.recompute();
    }

    pub fn set_experience_filter(&mut self, level: Option<ExperienceLevel>) {
        self.criteria.experience_level = level;
        self.recompute();
    }

    pub fn set_domain_filter(&mut self, domain: Option<Domain>) {
        self.criteria.domain = domain;
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.filtered = self.jobs.clone();
    }

    // Always from the full sequence, never from the previous filtered view,
    // so criteria replace each other instead of compounding.
    fn recompute(&mut self) {
        let criteria = self.criteria.clone();
        self.filtered = self
            .jobs
            .iter()
            .filter(|job| criteria.matches(job))
            .cloned()
            .collect();
    }

    // Write-through is best-effort: the in-memory state stays authoritative
    // and a failed durable write is logged, not raised.
    fn persist(&mut self) {
        let payload = match serde_json::to_vec(&self.jobs) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "failed to encode jobs for persistence");
                return;
            }
        };
        if let Err(err) = self.storage.set(JOBS_KEY, payload.as_slice()) {
            warn!(error = %err, "failed to persist jobs");
        }
    }
}

fn new_id() -> String {
    let ms = Utc::now().timestamp_millis();
    let mut bytes = [0_u8; 10];
    OsRng.fill_bytes(&mut bytes);
    let mut hex = String::new();
    for b in bytes {
        hex.push_str(format!("{:02x}", b).as_str());
    }
    format!("id-{ms}-{hex}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::collections::HashSet;

    fn draft(title: &str, company: &str, job_type: JobType) -> JobDraft {
        JobDraft {
            title: title.to_string(),
            company: company.to_string(),
            url: format!("https://{}.example/jobs", company.to_lowercase()),
            job_type,
            experience_level: ExperienceLevel::Mid,
            domain: Domain::Backend,
        }
    }

    fn empty_store() -> JobStore {
        let mut storage = MemoryStorage::new();
        storage.set(JOBS_KEY, b"[]").unwrap();
        JobStore::load(Box::new(storage)).unwrap()
    }

    #[test]
    fn load_seeds_defaults_when_storage_is_empty() {
        let store = JobStore::load(Box::new(MemoryStorage::new())).unwrap();
        assert_eq!(store.jobs().len(), 10);
        assert_eq!(store.filtered_jobs(), store.jobs());
        assert!(store.criteria().is_default());
    }

    #[test]
    fn load_reseeds_on_unparseable_payload() {
        let mut storage = MemoryStorage::new();
        storage.set(JOBS_KEY, b"not json at all").unwrap();
        let store = JobStore::load(Box::new(storage)).unwrap();
        assert_eq!(store.jobs().len(), 10);
    }

    #[test]
    fn add_prepends_with_fresh_id_and_timestamp() {
        let mut store = empty_store();
        store.add(draft("First", "Acme", JobType::FullTime));
        let added = store.add(draft("Second", "Globex", JobType::Contract));
        assert_eq!(added.title, "Second");

        assert_eq!(store.jobs()[0].title, "Second");
        assert_eq!(store.jobs()[1].title, "First");
        assert!(!store.jobs()[0].id.is_empty());
    }

    #[test]
    fn ids_stay_unique_across_mutations() {
        let mut store = empty_store();
        for i in 0..50 {
            store.add(draft(&format!("Job {i}"), "Acme", JobType::FullTime));
        }
        let doomed = store.jobs()[25].id.clone();
        store.delete(doomed.as_str());
        store.add(draft("Replacement", "Acme", JobType::FullTime));

        let ids: HashSet<String> = store.jobs().iter().map(|job| job.id.clone()).collect();
        assert_eq!(ids.len(), store.jobs().len());
    }

    #[test]
    fn update_replaces_matching_record() {
        let mut store = empty_store();
        store.add(draft("Old Title", "Acme", JobType::FullTime));
        let mut edited = store.jobs()[0].clone();
        edited.title = "New Title".to_string();
        edited.job_type = JobType::PartTime;

        store.update(edited.clone());
        assert_eq!(store.jobs().len(), 1);
        assert_eq!(store.jobs()[0], edited);
    }

    #[test]
    fn update_with_unknown_id_is_a_silent_noop() {
        let mut store = empty_store();
        store.add(draft("Kept", "Acme", JobType::FullTime));
        let before = store.jobs().to_vec();

        let mut ghost = before[0].clone();
        ghost.id = "id-0-doesnotexist".to_string();
        ghost.title = "Ghost".to_string();
        store.update(ghost);

        assert_eq!(store.jobs(), before.as_slice());
    }

    #[test]
    fn delete_removes_exactly_the_matching_id() {
        let mut store = empty_store();
        store.add(draft("A", "Acme", JobType::FullTime));
        store.add(draft("B", "Globex", JobType::Contract));
        store.add(draft("C", "Initech", JobType::Internship));
        let target = store.jobs()[1].id.clone();

        store.delete(target.as_str());
        assert_eq!(store.jobs().len(), 2);
        assert!(store.jobs().iter().all(|job| job.id != target));
    }

    #[test]
    fn delete_with_unknown_id_is_a_noop() {
        let mut store = empty_store();
        store.add(draft("Kept", "Acme", JobType::FullTime));
        let before = store.jobs().to_vec();
        store.delete("id-0-doesnotexist");
        assert_eq!(store.jobs(), before.as_slice());
    }

    #[test]
    fn filters_recompute_from_the_full_sequence() {
        let mut store = empty_store();
        store.add(draft("C", "Gamma", JobType::FullTime));
        store.add(draft("B", "Beta", JobType::Internship));
        store.add(draft("A", "Alpha", JobType::FullTime));

        // jobTypes newest-first: [Full-time, Internship, Full-time]
        store.set_job_type_filter(Some(JobType::FullTime));
        let titles: Vec<&str> = store
            .filtered_jobs()
            .iter()
            .map(|job| job.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);

        // A non-matching search on top yields an empty view but the full
        // sequence is untouched.
        store.set_search_query("xyz-no-match");
        assert!(store.filtered_jobs().is_empty());
        assert_eq!(store.jobs().len(), 3);

        // Clearing the search must reconsider the full sequence, not the
        // empty previous view.
        store.set_search_query("");
        let titles: Vec<&str> = store
            .filtered_jobs()
            .iter()
            .map(|job| job.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn filtered_view_preserves_relative_order() {
        let mut store = empty_store();
        for title in ["E", "D", "C", "B", "A"] {
            store.add(draft(title, "Acme", JobType::FullTime));
        }
        store.set_search_query("acme");
        let titles: Vec<&str> = store
            .filtered_jobs()
            .iter()
            .map(|job| job.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn reset_filters_restores_the_full_view_and_default_criteria() {
        let mut store = empty_store();
        store.add(draft("A", "Alpha", JobType::FullTime));
        store.add(draft("B", "Beta", JobType::Internship));

        store.set_search_query("alpha");
        store.set_job_type_filter(Some(JobType::FullTime));
        store.set_experience_filter(Some(ExperienceLevel::Lead));
        store.set_domain_filter(Some(Domain::Qa));
        assert!(store.filtered_jobs().is_empty());

        store.reset_filters();
        assert!(store.criteria().is_default());
        assert_eq!(store.filtered_jobs(), store.jobs());
    }

    #[test]
    fn mutations_keep_the_active_filter_applied() {
        let mut store = empty_store();
        store.add(draft("Keep", "Acme", JobType::FullTime));
        store.set_job_type_filter(Some(JobType::Internship));
        assert!(store.filtered_jobs().is_empty());

        store.add(draft("Intern", "Acme", JobType::Internship));
        assert_eq!(store.filtered_jobs().len(), 1);
        assert_eq!(store.filtered_jobs()[0].title, "Intern");
    }

    #[test]
    fn stats_count_totals_and_recent_jobs() {
        let mut store = empty_store();
        store.add(draft("Old Posting", "Acme", JobType::FullTime));
        store.add(draft("Fresh Posting", "Globex", JobType::FullTime));

        // Age the first record a month back through the public surface.
        let mut aged = store.jobs()[1].clone();
        aged.date_added = Utc::now() - Duration::days(30);
        store.update(aged);

        let stats = store.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.recent, 1);
    }

    #[test]
    fn mutations_write_through_to_storage() {
        let mut store = empty_store();
        store.add(draft("Persisted", "Acme", JobType::FullTime));
        let snapshot = store.jobs().to_vec();

        let payload = store.storage.get(JOBS_KEY).unwrap().unwrap();
        let decoded: Vec<Job> = serde_json::from_slice(payload.as_slice()).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
