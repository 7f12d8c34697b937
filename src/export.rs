use crate::job::Job;

pub const EXPORT_COLUMNS: [&str; 8] = [
    "id",
    "title",
    "company",
    "url",
    "dateAdded",
    "jobType",
    "experienceLevel",
    "domain",
];

/// Renders the job sequence as CSV, header row first. Cell values are
/// quoted where needed and leading formula characters are neutralized so
/// the export opens safely in spreadsheet apps.
pub fn jobs_to_csv(jobs: &[Job]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(
        EXPORT_COLUMNS
            .iter()
            .map(|col| csv_escape(col))
            .collect::<Vec<_>>()
            .join(","),
    );
    for job in jobs {
        let date_added = job.date_added.to_rfc3339();
        let cells = [
            job.id.as_str(),
            job.title.as_str(),
            job.company.as_str(),
            job.url.as_str(),
            date_added.as_str(),
            job.job_type.label(),
            job.experience_level.label(),
            job.domain.label(),
        ];
        lines.push(
            cells
                .iter()
                .map(|cell| csv_escape(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

fn should_neutralize(value: &str) -> bool {
    let trimmed = value.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('\'') {
        return false;
    }
    matches!(
        trimmed.chars().next(),
        Some('=') | Some('+') | Some('-') | Some('@')
    )
}

fn neutralize_formula(value: &str) -> String {
    if should_neutralize(value) {
        format!("'{value}")
    } else {
        value.to_string()
    }
}

fn csv_escape(value: &str) -> String {
    let safe = neutralize_formula(value);
    if safe.contains(',') || safe.contains('"') || safe.contains('\n') || safe.contains('\r') {
        format!("\"{}\"", safe.replace('"', "\"\""))
    } else {
        safe
    }
}
