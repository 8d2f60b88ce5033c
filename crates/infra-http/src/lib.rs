// Hirewatch Infrastructure - HTTP Adapter
// Implements: VacancyApi against the HeadHunter-style vacancy endpoint

mod hh_client;

pub use hh_client::{HhClient, DEFAULT_BASE_URL};
