// Vacancy API Port (Interface)
// One concrete implementation lives in infra-http; tests substitute fakes.

use crate::domain::EmployerId;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Salary bounds as the remote API sends them. Either bound may be null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryRange {
    pub from: Option<i64>,
    pub to: Option<i64>,
}

/// Optional text snippet attached to a vacancy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snippet {
    pub responsibility: Option<String>,
}

/// One raw vacancy object from the remote API's `items` array.
///
/// Required fields (`name`, `alternate_url`, `published_at`) are still
/// modeled as Option here: the wire format gives no guarantees, and the
/// mapper is where absence turns into a mapping error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub name: Option<String>,
    pub salary: Option<SalaryRange>,
    pub alternate_url: Option<String>,
    pub snippet: Option<Snippet>,
    pub published_at: Option<String>,
}

/// Capability interface over the remote vacancy API
#[async_trait]
pub trait VacancyApi: Send + Sync {
    /// Fetch the vacancy records for one employer.
    ///
    /// The concrete client sends pagination parameters but consumes a
    /// single page; callers get whatever that page held.
    async fn fetch_vacancies(&self, employer_id: EmployerId) -> Result<Vec<VacancyRecord>>;
}
