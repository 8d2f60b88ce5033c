// Ingestion Mapper - raw API record to normalized vacancy row

use crate::domain::{CompanyId, NewVacancy};
use crate::error::{AppError, Result};
use crate::port::VacancyRecord;
use chrono::{DateTime, Utc};

/// Map one raw record into an insertable vacancy.
///
/// `name` and `alternate_url` are required; absence is a mapping error.
/// Salary bounds come from the nested salary object when present, otherwise
/// both stay null. The description is the snippet's `responsibility`
/// sub-field, null when the snippet is absent.
pub fn map_vacancy(company_id: CompanyId, record: &VacancyRecord) -> Result<NewVacancy> {
    let title = record
        .name
        .as_deref()
        .ok_or_else(|| AppError::Mapping("vacancy record has no name".to_string()))?;

    let url = record
        .alternate_url
        .as_deref()
        .ok_or_else(|| AppError::Mapping("vacancy record has no alternate_url".to_string()))?;

    let (salary_min, salary_max) = match &record.salary {
        Some(salary) => (salary.from, salary.to),
        None => (None, None),
    };

    let description = record
        .snippet
        .as_ref()
        .and_then(|s| s.responsibility.clone());

    let published_raw = record
        .published_at
        .as_deref()
        .ok_or_else(|| AppError::Mapping("vacancy record has no published_at".to_string()))?;
    let published = parse_published(published_raw)?;

    Ok(NewVacancy {
        company_id,
        title: title.to_string(),
        salary_min,
        salary_max,
        url: url.to_string(),
        description,
        published,
    })
}

/// Parse the upstream publish timestamp.
///
/// The API's zone marker is a literal `Z`, which the source format does not
/// otherwise use; it is rewritten to an explicit `+00:00` offset before
/// parsing so both spellings land on the same instant.
pub fn parse_published(raw: &str) -> Result<DateTime<Utc>> {
    let normalized = if let Some(stripped) = raw.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        raw.to_string()
    };

    DateTime::parse_from_rfc3339(&normalized)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::Mapping(format!("bad published_at {:?}: {}", raw, e)))
}
