//! Persona service: create and look up personas.

use personas_types::error::{PersonaError, ValidationError};
use personas_types::persona::{CreatePersonaRequest, Persona, PersonaCreated, PersonaId};
use personas_types::timestamp;

use crate::repository::persona::PersonaRepository;

/// Service for persona records.
pub struct PersonaService<R: PersonaRepository> {
    repo: R,
}

impl<R: PersonaRepository> PersonaService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and store a new persona.
    ///
    /// The referenced company is not looked up: a persona pointing at an
    /// unknown `company_id` is stored as-is.
    pub async fn create_persona(
        &self,
        request: CreatePersonaRequest,
    ) -> Result<PersonaCreated, PersonaError> {
        let missing = request.missing_fields();
        let CreatePersonaRequest {
            company_id: Some(company_id),
            name: Some(name),
            age: Some(age),
            gender: Some(gender),
            location: Some(location),
            job_title: Some(job_title),
            interests: Some(interests),
            challenges: Some(challenges),
            avatar: Some(avatar),
        } = request
        else {
            return Err(ValidationError::MissingFields(missing).into());
        };

        let persona = Persona {
            id: PersonaId::new(),
            company_id,
            name,
            age,
            gender,
            location,
            job_title,
            interests,
            challenges,
            avatar,
            created_at: timestamp::now(),
        };

        self.repo
            .create(&persona)
            .await
            .map_err(|e| PersonaError::StorageError(e.to_string()))?;

        tracing::info!(
            persona_id = %persona.id,
            company_id = %persona.company_id,
            "persona created"
        );
        Ok(PersonaCreated::from(persona))
    }

    /// Look up a persona by id.
    pub async fn get_persona(&self, id: &str) -> Result<Persona, PersonaError> {
        let id = PersonaId::parse_canonical(id).ok_or(PersonaError::NotFound)?;
        tracing::debug!(persona_id = %id, "looking up persona");

        self.repo
            .get_by_id(&id)
            .await
            .map_err(|e| PersonaError::StorageError(e.to_string()))?
            .ok_or(PersonaError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use personas_types::error::RepositoryError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPersonas {
        rows: Mutex<Vec<Persona>>,
    }

    impl PersonaRepository for InMemoryPersonas {
        async fn create(&self, persona: &Persona) -> Result<(), RepositoryError> {
            self.rows.lock().unwrap().push(persona.clone());
            Ok(())
        }

        async fn get_by_id(&self, id: &PersonaId) -> Result<Option<Persona>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.id == id)
                .cloned())
        }
    }

    fn dana(company_id: &str) -> CreatePersonaRequest {
        CreatePersonaRequest {
            company_id: Some(company_id.to_string()),
            name: Some("Dana".to_string()),
            age: Some(34),
            gender: Some("female".to_string()),
            location: Some("Austin, TX".to_string()),
            job_title: Some("Store Manager".to_string()),
            interests: Some(vec!["hiking".to_string(), "podcasts".to_string()]),
            challenges: Some(vec!["staffing".to_string()]),
            avatar: Some("https://example.com/dana.png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips_lists() {
        let service = PersonaService::new(InMemoryPersonas::default());

        let created = service.create_persona(dana("acme")).await.unwrap();
        assert_eq!(created.job_title, "Store Manager");

        let found = service.get_persona(&created.id.to_string()).await.unwrap();
        assert_eq!(found.interests, vec!["hiking", "podcasts"]);
        assert_eq!(found.challenges, vec!["staffing"]);
        assert_eq!(found.age, 34);
    }

    #[tokio::test]
    async fn test_unknown_company_is_accepted() {
        let service = PersonaService::new(InMemoryPersonas::default());
        let created = service
            .create_persona(dana("no-such-company"))
            .await
            .unwrap();
        assert_eq!(created.company_id, "no-such-company");
    }

    #[tokio::test]
    async fn test_missing_age_and_avatar() {
        let service = PersonaService::new(InMemoryPersonas::default());
        let mut request = dana("acme");
        request.age = None;
        request.avatar = None;

        let err = service.create_persona(request).await.unwrap_err();
        assert!(matches!(
            err,
            PersonaError::Validation(ValidationError::MissingFields(ref f)) if f == &vec!["age", "avatar"]
        ));
    }

    #[tokio::test]
    async fn test_unknown_persona_is_not_found() {
        let service = PersonaService::new(InMemoryPersonas::default());
        let err = service
            .get_persona(&PersonaId::new().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, PersonaError::NotFound));
    }

    #[tokio::test]
    async fn test_uppercase_id_is_not_found() {
        let service = PersonaService::new(InMemoryPersonas::default());
        let created = service.create_persona(dana("acme")).await.unwrap();

        let err = service
            .get_persona(&created.id.to_string().to_uppercase())
            .await
            .unwrap_err();
        assert!(matches!(err, PersonaError::NotFound));
    }
}
