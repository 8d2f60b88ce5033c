// Vacancy Domain Model

use crate::domain::company::CompanyId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored vacancy row. Append-only: ingestion never updates or deletes,
/// and re-running ingestion inserts additional rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: i64,
    pub company_id: CompanyId,
    pub title: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub url: String,
    pub description: Option<String>,
    pub published: DateTime<Utc>,
}

/// A vacancy about to be inserted (id assigned by the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVacancy {
    pub company_id: CompanyId,
    pub title: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub url: String,
    pub description: Option<String>,
    pub published: DateTime<Utc>,
}

/// One row of the vacancy listing queries: the vacancy joined to its
/// company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyListing {
    pub company_name: String,
    pub title: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub url: String,
}

/// One row of the grouped-count query. Companies with no vacancies appear
/// with `vacancies = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyVacancyCount {
    pub name: String,
    pub vacancies: i64,
}
