//! Persona repository trait definition.

use personas_types::error::RepositoryError;
use personas_types::persona::{Persona, PersonaId};

/// Repository trait for persona persistence.
///
/// `create` never checks that `company_id` names a stored company.
pub trait PersonaRepository: Send + Sync {
    /// Persist a new persona.
    fn create(
        &self,
        persona: &Persona,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get a persona by its unique ID.
    fn get_by_id(
        &self,
        id: &PersonaId,
    ) -> impl std::future::Future<Output = Result<Option<Persona>, RepositoryError>> + Send;
}
