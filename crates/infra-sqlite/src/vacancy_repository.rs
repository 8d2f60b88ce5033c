// SQLite VacancyRepository Implementation
//
// Carries the whole fixed query set: listing, grouped counts, average
// salary, above-average filter, keyword filter.

use crate::map_sqlx_error;
use async_trait::async_trait;
use hirewatch_core::domain::{CompanyVacancyCount, NewVacancy, VacancyListing};
use hirewatch_core::error::Result;
use hirewatch_core::port::VacancyRepository;
use sqlx::SqlitePool;

const LISTING_SELECT: &str = r#"
    SELECT c.name AS company_name, v.title, v.salary_min, v.salary_max, v.url
    FROM vacancies v
    JOIN companies c ON v.company_id = c.id
"#;

pub struct SqliteVacancyRepository {
    pool: SqlitePool,
}

impl SqliteVacancyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VacancyRepository for SqliteVacancyRepository {
    async fn insert(&self, vacancy: &NewVacancy) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO vacancies (company_id, title, salary_min, salary_max, url, description, published)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(vacancy.company_id)
        .bind(&vacancy.title)
        .bind(vacancy.salary_min)
        .bind(vacancy.salary_max)
        .bind(&vacancy.url)
        .bind(&vacancy.description)
        .bind(vacancy.published)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn counts_by_company(&self) -> Result<Vec<CompanyVacancyCount>> {
        let rows: Vec<CountRow> = sqlx::query_as(
            r#"
            SELECT c.name, COUNT(v.id) AS vacancies
            FROM companies c
            LEFT JOIN vacancies v ON c.id = v.company_id
            GROUP BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CountRow::into_count).collect())
    }

    async fn list_all(&self) -> Result<Vec<VacancyListing>> {
        let rows: Vec<ListingRow> = sqlx::query_as(LISTING_SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    async fn average_salary(&self) -> Result<Option<f64>> {
        // Per-row proxy: min if present, else max, else 0. Salary-less rows
        // contribute 0 and pull the average down; preserved deliberately.
        let avg: Option<f64> =
            sqlx::query_scalar("SELECT AVG(COALESCE(salary_min, salary_max, 0)) FROM vacancies")
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(avg)
    }

    async fn with_salary_above_average(&self) -> Result<Vec<VacancyListing>> {
        let Some(avg) = self.average_salary().await? else {
            return Ok(vec![]);
        };

        // NULL in either bound makes the midpoint NULL, and the row drops
        // out of the comparison. Documented behavior, kept as-is.
        let sql = format!("{} WHERE ((v.salary_min + v.salary_max) / 2) > ?", LISTING_SELECT);
        let rows: Vec<ListingRow> = sqlx::query_as(&sql)
            .bind(avg)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    async fn search_by_title(&self, keyword: &str) -> Result<Vec<VacancyListing>> {
        // SQLite's LOWER() folds ASCII only: non-ASCII titles (e.g. Cyrillic)
        // match case-sensitively, unlike Postgres ILIKE. Same-case substrings
        // still match.
        let sql = format!(
            "{} WHERE LOWER(v.title) LIKE '%' || LOWER(?) || '%'",
            LISTING_SELECT
        );
        let rows: Vec<ListingRow> = sqlx::query_as(&sql)
            .bind(keyword)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    company_name: String,
    title: String,
    salary_min: Option<i64>,
    salary_max: Option<i64>,
    url: String,
}

impl ListingRow {
    fn into_listing(self) -> VacancyListing {
        VacancyListing {
            company_name: self.company_name,
            title: self.title,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            url: self.url,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CountRow {
    name: String,
    vacancies: i64,
}

impl CountRow {
    fn into_count(self) -> CompanyVacancyCount {
        CompanyVacancyCount {
            name: self.name,
            vacancies: self.vacancies,
        }
    }
}
