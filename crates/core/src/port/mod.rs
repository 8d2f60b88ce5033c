// Port Layer - Interfaces for external dependencies

pub mod company_repository;
pub mod vacancy_api;
pub mod vacancy_repository;

// Re-exports
pub use company_repository::CompanyRepository;
pub use vacancy_api::{SalaryRange, Snippet, VacancyApi, VacancyRecord};
pub use vacancy_repository::VacancyRepository;
