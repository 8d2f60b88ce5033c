// SQLite CompanyRepository Implementation

use crate::map_sqlx_error;
use async_trait::async_trait;
use hirewatch_core::domain::{Company, EmployerId};
use hirewatch_core::error::Result;
use hirewatch_core::port::CompanyRepository;
use sqlx::SqlitePool;

pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn insert_or_skip(&self, name: &str, employer_id: EmployerId) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO companies (name, employer_id)
            VALUES (?, ?)
            ON CONFLICT (employer_id) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(employer_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Company>> {
        let rows: Vec<CompanyRow> =
            sqlx::query_as("SELECT id, name, employer_id FROM companies")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CompanyRow::into_company).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    employer_id: i64,
}

impl CompanyRow {
    fn into_company(self) -> Company {
        Company {
            id: self.id,
            name: self.name,
            employer_id: self.employer_id,
        }
    }
}
