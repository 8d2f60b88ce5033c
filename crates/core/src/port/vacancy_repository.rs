// Vacancy Repository Port (Interface)
// Covers both ingestion writes and the fixed query operations.

use crate::domain::{CompanyVacancyCount, NewVacancy, VacancyListing};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Vacancy persistence and queries
#[async_trait]
pub trait VacancyRepository: Send + Sync {
    /// Insert one vacancy. No duplicate guard: re-running ingestion
    /// appends new rows.
    async fn insert(&self, vacancy: &NewVacancy) -> Result<()>;

    /// Vacancy count per company, zero included (LEFT JOIN + GROUP BY).
    async fn counts_by_company(&self) -> Result<Vec<CompanyVacancyCount>>;

    /// All vacancies joined to their company name.
    async fn list_all(&self) -> Result<Vec<VacancyListing>>;

    /// Mean of the per-row salary proxy `COALESCE(salary_min, salary_max, 0)`.
    /// `None` when the table is empty.
    async fn average_salary(&self) -> Result<Option<f64>>;

    /// Vacancies whose midpoint `(salary_min + salary_max) / 2` exceeds the
    /// current average. Rows with either bound NULL drop out of the
    /// comparison entirely.
    async fn with_salary_above_average(&self) -> Result<Vec<VacancyListing>>;

    /// Case-insensitive substring match against titles. Empty keyword
    /// matches everything.
    async fn search_by_title(&self, keyword: &str) -> Result<Vec<VacancyListing>>;
}
