//! SQLite persona repository implementation.

use personas_core::repository::persona::PersonaRepository;
use personas_types::error::RepositoryError;
use personas_types::persona::{Persona, PersonaId};
use sqlx::Row;

use super::codec::{decode_list, encode_list, format_datetime, parse_datetime, storage_error};
use super::pool::DatabasePool;

/// SQLite-backed implementation of `PersonaRepository`.
pub struct SqlitePersonaRepository {
    pool: DatabasePool,
}

impl SqlitePersonaRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct PersonaRow {
    id: String,
    company_id: String,
    name: String,
    age: i64,
    gender: String,
    location: String,
    job_title: String,
    interests: String,
    challenges: String,
    avatar: String,
    created_at: String,
}

impl PersonaRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            company_id: row.try_get("company_id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            gender: row.try_get("gender")?,
            location: row.try_get("location")?,
            job_title: row.try_get("job_title")?,
            interests: row.try_get("interests")?,
            challenges: row.try_get("challenges")?,
            avatar: row.try_get("avatar")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_persona(self) -> Result<Persona, RepositoryError> {
        let id = self
            .id
            .parse::<PersonaId>()
            .map_err(|e| RepositoryError::Query(format!("invalid persona id: {e}")))?;

        Ok(Persona {
            id,
            company_id: self.company_id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            location: self.location,
            job_title: self.job_title,
            interests: decode_list("interests", &self.interests)?,
            challenges: decode_list("challenges", &self.challenges)?,
            avatar: self.avatar,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl PersonaRepository for SqlitePersonaRepository {
    async fn create(&self, persona: &Persona) -> Result<(), RepositoryError> {
        let interests_json = encode_list(&persona.interests)?;
        let challenges_json = encode_list(&persona.challenges)?;

        sqlx::query(
            "INSERT INTO personas (id, company_id, name, age, gender, location, job_title, interests, challenges, avatar, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(persona.id.to_string())
        .bind(&persona.company_id)
        .bind(&persona.name)
        .bind(persona.age)
        .bind(&persona.gender)
        .bind(&persona.location)
        .bind(&persona.job_title)
        .bind(&interests_json)
        .bind(&challenges_json)
        .bind(&persona.avatar)
        .bind(format_datetime(&persona.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn get_by_id(&self, id: &PersonaId) -> Result<Option<Persona>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM personas WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(storage_error)?;

        row.map(|row| {
            PersonaRow::from_row(&row)
                .map_err(storage_error)?
                .into_persona()
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::{database_url_for, DatabasePool};
    use personas_types::timestamp;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url_for(&dir.path().join("test.db"));
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_persona(company_id: &str) -> Persona {
        Persona {
            id: PersonaId::new(),
            company_id: company_id.to_string(),
            name: "Dana".to_string(),
            age: 34,
            gender: "female".to_string(),
            location: "Austin, TX".to_string(),
            job_title: "Store Manager".to_string(),
            interests: vec!["hiking".to_string(), "podcasts".to_string()],
            challenges: vec!["staffing".to_string(), "inventory".to_string()],
            avatar: "https://example.com/dana.png".to_string(),
            created_at: timestamp::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trips_lists() {
        let repo = SqlitePersonaRepository::new(test_pool().await);
        let persona = make_persona("acme");

        repo.create(&persona).await.unwrap();

        let found = repo.get_by_id(&persona.id).await.unwrap().unwrap();
        assert_eq!(found, persona);
    }

    #[tokio::test]
    async fn test_dangling_company_reference_is_stored() {
        let repo = SqlitePersonaRepository::new(test_pool().await);
        let persona = make_persona("00000000-0000-0000-0000-000000000000");

        repo.create(&persona).await.unwrap();

        let found = repo.get_by_id(&persona.id).await.unwrap().unwrap();
        assert_eq!(found.company_id, "00000000-0000-0000-0000-000000000000");
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = SqlitePersonaRepository::new(test_pool().await);
        assert!(repo.get_by_id(&PersonaId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_challenges_is_an_error() {
        let pool = test_pool().await;
        let repo = SqlitePersonaRepository::new(pool.clone());
        let id = PersonaId::new();

        sqlx::query(
            "INSERT INTO personas (id, company_id, name, age, gender, location, job_title, interests, challenges, avatar, created_at)
             VALUES (?, 'c', 'Dana', 34, 'female', 'Austin', 'Buyer', '[]', 'oops', 'a', '2026-01-01T00:00:00.000000Z')",
        )
        .bind(id.to_string())
        .execute(&pool.writer)
        .await
        .unwrap();

        let err = repo.get_by_id(&id).await.unwrap_err();
        assert!(err.to_string().contains("invalid challenges JSON"));
    }
}
