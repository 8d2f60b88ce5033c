// HeadHunter Vacancy API Client

use async_trait::async_trait;
use hirewatch_core::domain::EmployerId;
use hirewatch_core::error::{AppError, Result};
use hirewatch_core::port::{VacancyApi, VacancyRecord};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

const PER_PAGE: u32 = 100;

/// Response envelope of GET /vacancies
#[derive(Debug, Deserialize)]
struct VacanciesPage {
    items: Vec<VacancyRecord>,
}

/// Thin client over the vacancy endpoint.
///
/// One `reqwest::Client` is reused across calls for connection pooling;
/// no other state is kept between calls.
pub struct HhClient {
    client: reqwest::Client,
    base_url: String,
}

impl HhClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Override the endpoint, mainly for tests against a local server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HhClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VacancyApi for HhClient {
    async fn fetch_vacancies(&self, employer_id: EmployerId) -> Result<Vec<VacancyRecord>> {
        let url = format!("{}/vacancies", self.base_url);

        // Pagination parameters are sent but only page 0 is consumed.
        // Known limitation, kept deliberately.
        let response = self
            .client
            .get(&url)
            .query(&[
                ("employer_id", employer_id.to_string()),
                ("per_page", PER_PAGE.to_string()),
                ("page", "0".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
            });
        }

        let page: VacanciesPage = response
            .json()
            .await
            .map_err(|e| AppError::Mapping(format!("bad vacancies payload: {}", e)))?;

        debug!(
            employer_id,
            items = page.items.len(),
            "Fetched vacancy page"
        );
        Ok(page.items)
    }
}
