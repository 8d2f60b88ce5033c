//! End-to-end pipeline tests: seed -> fetch (fake) -> map -> store -> query.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use hirewatch_core::application::{load_companies, IngestService};
use hirewatch_core::domain::EmployerId;
use hirewatch_core::error::{AppError, Result};
use hirewatch_core::port::{
    CompanyRepository, SalaryRange, VacancyApi, VacancyRecord, VacancyRepository,
};
use hirewatch_infra_sqlite::{
    create_pool, ensure_schema, SqliteCompanyRepository, SqliteVacancyRepository,
};
use sqlx::SqlitePool;

struct FakeApi {
    pages: HashMap<EmployerId, Vec<VacancyRecord>>,
    failing: Vec<EmployerId>,
}

#[async_trait]
impl VacancyApi for FakeApi {
    async fn fetch_vacancies(&self, employer_id: EmployerId) -> Result<Vec<VacancyRecord>> {
        if self.failing.contains(&employer_id) {
            return Err(AppError::Upstream { status: 500 });
        }
        Ok(self.pages.get(&employer_id).cloned().unwrap_or_default())
    }
}

async fn setup_test_db() -> SqlitePool {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}

fn write_seed(contents: &str, tag: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "hirewatch_e2e_{}_{}.json",
        std::process::id(),
        tag
    ));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn dev_record() -> VacancyRecord {
    VacancyRecord {
        name: Some("Dev".to_string()),
        salary: Some(SalaryRange {
            from: Some(1000),
            to: Some(2000),
        }),
        alternate_url: Some("http://x".to_string()),
        snippet: None,
        published_at: Some("2024-01-01T00:00:00Z".to_string()),
    }
}

/// Seed one company, ingest one vacancy through the full stack, read it
/// back with company name and salary intact, and check the average.
#[tokio::test]
async fn test_single_company_single_vacancy_roundtrip() {
    let pool = setup_test_db().await;
    let companies = Arc::new(SqliteCompanyRepository::new(pool.clone()));
    let vacancies = Arc::new(SqliteVacancyRepository::new(pool.clone()));

    let seed = write_seed(r#"[{"id": 42, "name": "Acme"}]"#, "roundtrip");
    load_companies(companies.as_ref(), &seed).await.unwrap();

    let api = Arc::new(FakeApi {
        pages: HashMap::from([(42, vec![dev_record()])]),
        failing: vec![],
    });
    let service = IngestService::new(companies.clone(), vacancies.clone(), api);

    let report = service.run().await.unwrap();
    assert_eq!(report.companies_ok, 1);
    assert_eq!(report.inserted, 1);
    assert!(report.failed_companies.is_empty());

    let listings = vacancies.list_all().await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].company_name, "Acme");
    assert_eq!(listings[0].title, "Dev");
    assert_eq!(listings[0].salary_min, Some(1000));
    assert_eq!(listings[0].salary_max, Some(2000));

    let avg = vacancies.average_salary().await.unwrap().unwrap();
    assert_eq!(avg, 1000.0); // proxy prefers salary_min

    std::fs::remove_file(seed).unwrap();
}

/// Reseeding the same file twice leaves the company set unchanged.
#[tokio::test]
async fn test_reseeding_is_idempotent() {
    let pool = setup_test_db().await;
    let companies = Arc::new(SqliteCompanyRepository::new(pool.clone()));

    let seed = write_seed(
        r#"[{"id": 42, "name": "Acme"}, {"id": 7, "name": "Globex"}]"#,
        "reseed",
    );
    load_companies(companies.as_ref(), &seed).await.unwrap();
    load_companies(companies.as_ref(), &seed).await.unwrap();

    let all = companies.list_all().await.unwrap();
    assert_eq!(all.len(), 2);

    std::fs::remove_file(seed).unwrap();
}

/// One company failing upstream does not stop the others from ingesting.
#[tokio::test]
async fn test_failing_company_is_isolated() {
    let pool = setup_test_db().await;
    let companies = Arc::new(SqliteCompanyRepository::new(pool.clone()));
    let vacancies = Arc::new(SqliteVacancyRepository::new(pool.clone()));

    let seed = write_seed(
        r#"[{"id": 42, "name": "Acme"}, {"id": 7, "name": "Globex"}]"#,
        "isolated",
    );
    load_companies(companies.as_ref(), &seed).await.unwrap();

    let api = Arc::new(FakeApi {
        pages: HashMap::from([(7, vec![dev_record()])]),
        failing: vec![42],
    });
    let service = IngestService::new(companies.clone(), vacancies.clone(), api);

    let report = service.run().await.unwrap();
    assert_eq!(report.companies_ok, 1);
    assert_eq!(report.inserted, 1);
    assert_eq!(report.failed_companies, vec![(42, AppError::Upstream { status: 500 }.to_string())]);

    std::fs::remove_file(seed).unwrap();
}

/// Running ingestion twice appends duplicate vacancy rows. Preserved
/// limitation of the pipeline, pinned so nobody "fixes" it silently.
#[tokio::test]
async fn test_repeated_ingestion_appends() {
    let pool = setup_test_db().await;
    let companies = Arc::new(SqliteCompanyRepository::new(pool.clone()));
    let vacancies = Arc::new(SqliteVacancyRepository::new(pool.clone()));

    let seed = write_seed(r#"[{"id": 42, "name": "Acme"}]"#, "appends");
    load_companies(companies.as_ref(), &seed).await.unwrap();

    let api = Arc::new(FakeApi {
        pages: HashMap::from([(42, vec![dev_record()])]),
        failing: vec![],
    });
    let service = IngestService::new(companies.clone(), vacancies.clone(), api);

    service.run().await.unwrap();
    service.run().await.unwrap();

    assert_eq!(vacancies.list_all().await.unwrap().len(), 2);

    std::fs::remove_file(seed).unwrap();
}
