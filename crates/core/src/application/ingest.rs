// Ingestion Run Use Case
//
// Fetches the current page of vacancies for every seeded company, maps each
// record, and inserts the result. Append-only: nothing here deduplicates,
// so repeated runs insert the same vacancies again.

use crate::application::mapping::map_vacancy;
use crate::domain::EmployerId;
use crate::error::Result;
use crate::port::{CompanyRepository, VacancyApi, VacancyRepository};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one ingestion run.
///
/// A run only fails outright on store errors; upstream and mapping
/// failures are isolated and reported here instead.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Companies whose fetch and insert loop completed.
    pub companies_ok: usize,
    /// Vacancy rows inserted.
    pub inserted: usize,
    /// Records dropped because mapping failed.
    pub skipped_records: usize,
    /// Companies whose fetch failed, with the error rendered as text.
    pub failed_companies: Vec<(EmployerId, String)>,
}

/// Drives fetch -> map -> insert for the whole seed set.
pub struct IngestService {
    companies: Arc<dyn CompanyRepository>,
    vacancies: Arc<dyn VacancyRepository>,
    api: Arc<dyn VacancyApi>,
}

impl IngestService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        vacancies: Arc<dyn VacancyRepository>,
        api: Arc<dyn VacancyApi>,
    ) -> Self {
        Self {
            companies,
            vacancies,
            api,
        }
    }

    /// Run one full ingestion pass over every seeded company.
    ///
    /// A failing fetch marks that company in the report and the run moves
    /// on; a record that fails mapping is logged and skipped. Store errors
    /// still abort, since nothing useful can continue without the store.
    pub async fn run(&self) -> Result<IngestReport> {
        let companies = self.companies.list_all().await?;
        let mut report = IngestReport::default();

        for company in &companies {
            let records = match self.api.fetch_vacancies(company.employer_id).await {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        employer_id = company.employer_id,
                        company = %company.name,
                        error = %e,
                        "Fetch failed, skipping company"
                    );
                    report.failed_companies.push((company.employer_id, e.to_string()));
                    continue;
                }
            };

            for record in &records {
                let vacancy = match map_vacancy(company.id, record) {
                    Ok(vacancy) => vacancy,
                    Err(e) => {
                        warn!(
                            employer_id = company.employer_id,
                            error = %e,
                            "Skipping malformed vacancy record"
                        );
                        report.skipped_records += 1;
                        continue;
                    }
                };

                self.vacancies.insert(&vacancy).await?;
                report.inserted += 1;
            }

            report.companies_ok += 1;
        }

        info!(
            companies_ok = report.companies_ok,
            inserted = report.inserted,
            skipped_records = report.skipped_records,
            failed_companies = report.failed_companies.len(),
            "Ingestion run finished"
        );
        Ok(report)
    }
}
