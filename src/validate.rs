use url::Url;

use crate::error::ValidationError;
use crate::job::JobDraft;

/// Prefixes `https://` when no scheme is present, then checks the result
/// actually parses as a URL. Returns the normalized form.
pub fn normalize_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidUrl);
    }
    let lowered = trimmed.to_ascii_lowercase();
    let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let parsed = Url::parse(candidate.as_str()).map_err(|_| ValidationError::InvalidUrl)?;
    if parsed.host_str().is_none() {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(candidate)
}

/// Form-layer gate in front of the store: rejects empty title/company and
/// bad URLs, and returns the draft with its URL normalized. The store
/// itself accepts drafts unchecked.
pub fn validate_draft(draft: &JobDraft) -> Result<JobDraft, ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if draft.company.trim().is_empty() {
        return Err(ValidationError::EmptyCompany);
    }
    let url = normalize_url(draft.url.as_str())?;
    let mut out = draft.clone();
    out.url = url;
    Ok(out)
}
