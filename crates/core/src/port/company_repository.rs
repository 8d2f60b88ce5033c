// Company Repository Port (Interface)

use crate::domain::{Company, EmployerId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Company persistence
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a company; if a row with this `employer_id` already exists,
    /// skip silently. Idempotent reseeding depends on this.
    async fn insert_or_skip(&self, name: &str, employer_id: EmployerId) -> Result<()>;

    /// All companies, store-default order.
    async fn list_all(&self) -> Result<Vec<Company>>;
}
