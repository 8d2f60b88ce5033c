// Company Domain Model

use serde::{Deserialize, Serialize};

/// Store-assigned company primary key
pub type CompanyId = i64;

/// Identifier used to query the remote vacancy API for one employer.
/// Unique across the companies table.
pub type EmployerId = i64;

/// A tracked employer whose vacancies are ingested.
///
/// Created once during seeding; never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub employer_id: EmployerId,
}
