//! Core of an offline job-application tracker: the collection store that
//! owns the canonical job list, persists it through a pluggable storage
//! port, and derives a filtered view from the active search and category
//! criteria. Presentation layers call into [`store::JobStore`]; everything
//! here is synchronous and single-writer.

pub mod error;
pub mod export;
pub mod filter;
pub mod job;
pub mod seed;
pub mod storage;
pub mod store;
pub mod validate;

pub use error::{StorageError, ValidationError};
pub use filter::FilterCriteria;
pub use job::{Domain, ExperienceLevel, Job, JobDraft, JobType};
pub use storage::{EncryptedFileStorage, FileStorage, MemoryStorage, Storage, JOBS_KEY};
pub use store::{JobStats, JobStore};
