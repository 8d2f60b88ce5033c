// Seed Loader Use Case

use crate::domain::EmployerId;
use crate::error::{AppError, Result};
use crate::port::CompanyRepository;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One entry of the seed file: the employer id used against the remote API
/// plus a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCompany {
    pub id: EmployerId,
    pub name: String,
}

/// Load the seed set of companies from a JSON file and upsert each row.
///
/// Rows whose `employer_id` already exists are skipped by the repository,
/// so reseeding is idempotent. A missing, unreadable, or malformed file is
/// fatal and surfaces to the caller; there is no partial-success recovery.
pub async fn load_companies(repo: &dyn CompanyRepository, path: &Path) -> Result<usize> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Seed(format!("cannot read {}: {}", path.display(), e)))?;

    let companies: Vec<SeedCompany> = serde_json::from_str(&raw)
        .map_err(|e| AppError::Seed(format!("malformed seed file {}: {}", path.display(), e)))?;

    for company in &companies {
        repo.insert_or_skip(&company.name, company.id).await?;
    }

    info!(count = companies.len(), "Seed companies loaded");
    Ok(companies.len())
}
