// Hirewatch Infrastructure - SQLite Adapter
// Implements: CompanyRepository, VacancyRepository, schema management

mod company_repository;
mod connection;
mod error;
mod schema;
mod vacancy_repository;

pub use company_repository::SqliteCompanyRepository;
pub use connection::create_pool;
pub use schema::{ensure_schema, tables_exist};
pub use vacancy_repository::SqliteVacancyRepository;

pub(crate) use error::map_sqlx_error;

// Note: sqlx::Error conversion is handled by wrapping in a helper function
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
