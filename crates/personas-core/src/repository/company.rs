//! Company repository trait definition.

use personas_types::company::{Company, CompanyId};
use personas_types::error::RepositoryError;

/// Repository trait for company persistence.
///
/// Implementations live in personas-infra (e.g., SqliteCompanyRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait CompanyRepository: Send + Sync {
    /// Persist a new company.
    fn create(
        &self,
        company: &Company,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get a company by its unique ID.
    fn get_by_id(
        &self,
        id: &CompanyId,
    ) -> impl std::future::Future<Output = Result<Option<Company>, RepositoryError>> + Send;
}
