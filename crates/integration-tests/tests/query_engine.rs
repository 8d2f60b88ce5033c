//! Query operations exercised through the real SQLite repositories.

use chrono::{TimeZone, Utc};
use hirewatch_core::domain::NewVacancy;
use hirewatch_core::port::{CompanyRepository, VacancyRepository};
use hirewatch_infra_sqlite::{
    create_pool, ensure_schema, SqliteCompanyRepository, SqliteVacancyRepository,
};
use sqlx::SqlitePool;

async fn setup() -> (SqlitePool, SqliteCompanyRepository, SqliteVacancyRepository) {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    ensure_schema(&pool).await.unwrap();
    (
        pool.clone(),
        SqliteCompanyRepository::new(pool.clone()),
        SqliteVacancyRepository::new(pool),
    )
}

async fn company_id(pool: &SqlitePool, employer_id: i64) -> i64 {
    sqlx::query_scalar("SELECT id FROM companies WHERE employer_id = ?")
        .bind(employer_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn vacancy(company_id: i64, title: &str, min: Option<i64>, max: Option<i64>) -> NewVacancy {
    NewVacancy {
        company_id,
        title: title.to_string(),
        salary_min: min,
        salary_max: max,
        url: format!("http://hh.example/{}", title),
        description: None,
        published: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_counts_keep_empty_companies() {
    let (pool, companies, vacancies) = setup().await;
    companies.insert_or_skip("Acme", 42).await.unwrap();
    companies.insert_or_skip("Globex", 7).await.unwrap();

    let acme = company_id(&pool, 42).await;
    vacancies.insert(&vacancy(acme, "Dev", None, None)).await.unwrap();
    vacancies.insert(&vacancy(acme, "Ops", None, None)).await.unwrap();

    let counts = vacancies.counts_by_company().await.unwrap();
    let by_name = |name: &str| counts.iter().find(|c| c.name == name).unwrap().vacancies;
    assert_eq!(by_name("Acme"), 2);
    assert_eq!(by_name("Globex"), 0);
}

#[tokio::test]
async fn test_salary_proxy_and_above_average_filter() {
    let (pool, companies, vacancies) = setup().await;
    companies.insert_or_skip("Acme", 42).await.unwrap();
    let acme = company_id(&pool, 42).await;

    // Proxies: 1000 and 3000 -> average 2000
    vacancies
        .insert(&vacancy(acme, "Junior", Some(1000), Some(1000)))
        .await
        .unwrap();
    vacancies
        .insert(&vacancy(acme, "Senior", Some(3000), Some(3000)))
        .await
        .unwrap();

    assert_eq!(vacancies.average_salary().await.unwrap(), Some(2000.0));

    let above = vacancies.with_salary_above_average().await.unwrap();
    assert_eq!(above.len(), 1);
    assert_eq!(above[0].title, "Senior");
}

#[tokio::test]
async fn test_salaryless_rows_drag_the_average_down() {
    let (pool, companies, vacancies) = setup().await;
    companies.insert_or_skip("Acme", 42).await.unwrap();
    let acme = company_id(&pool, 42).await;

    vacancies
        .insert(&vacancy(acme, "Paid", Some(3000), Some(3000)))
        .await
        .unwrap();
    vacancies
        .insert(&vacancy(acme, "Unpaid", None, None))
        .await
        .unwrap();

    // The salary-less row contributes proxy 0
    assert_eq!(vacancies.average_salary().await.unwrap(), Some(1500.0));
}

#[tokio::test]
async fn test_keyword_search_matches_title_substring() {
    let (pool, companies, vacancies) = setup().await;
    companies.insert_or_skip("Acme", 42).await.unwrap();
    let acme = company_id(&pool, 42).await;

    vacancies
        .insert(&vacancy(acme, "Backend Engineer", None, None))
        .await
        .unwrap();
    vacancies
        .insert(&vacancy(acme, "Frontend Engineer", None, None))
        .await
        .unwrap();
    vacancies
        .insert(&vacancy(acme, "Product Manager", None, None))
        .await
        .unwrap();

    let engineers = vacancies.search_by_title("ENGINEER").await.unwrap();
    assert_eq!(engineers.len(), 2);

    let all = vacancies.search_by_title("").await.unwrap();
    assert_eq!(all.len(), 3);

    let none = vacancies.search_by_title("astronaut").await.unwrap();
    assert!(none.is_empty());
}
