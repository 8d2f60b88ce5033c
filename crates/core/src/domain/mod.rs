// Domain Layer - Pure entities and query row types

pub mod company;
pub mod vacancy;

// Re-exports
pub use company::{Company, CompanyId, EmployerId};
pub use vacancy::{CompanyVacancyCount, NewVacancy, Vacancy, VacancyListing};
