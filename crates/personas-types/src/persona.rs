use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

entity_id! {
    /// Unique identifier for a persona.
    PersonaId
}

/// A synthetic individual profile linked to a company, used as a simulated
/// chat counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub id: PersonaId,
    /// Id of the owning company. Not checked against stored companies.
    pub company_id: String,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub location: String,
    pub job_title: String,
    pub interests: Vec<String>,
    pub challenges: Vec<String>,
    /// Avatar URL or identifier.
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/persona`.
///
/// Clients send the job title as `jobTitle`; `job_title` is accepted too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePersonaRequest {
    pub company_id: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "jobTitle", alias = "job_title")]
    pub job_title: Option<String>,
    pub interests: Option<Vec<String>>,
    pub challenges: Option<Vec<String>>,
    pub avatar: Option<String>,
}

impl CreatePersonaRequest {
    /// Names of required fields absent from the request, using the wire names.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("company_id", self.company_id.is_none()),
            ("name", self.name.is_none()),
            ("age", self.age.is_none()),
            ("gender", self.gender.is_none()),
            ("location", self.location.is_none()),
            ("jobTitle", self.job_title.is_none()),
            ("interests", self.interests.is_none()),
            ("challenges", self.challenges.is_none()),
            ("avatar", self.avatar.is_none()),
        ];
        checks
            .into_iter()
            .filter_map(|(field, missing)| missing.then_some(field))
            .collect()
    }
}

/// Response to a successful persona creation: the submitted fields (keeping
/// the `jobTitle` spelling) plus the generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaCreated {
    pub id: PersonaId,
    pub company_id: String,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub location: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub interests: Vec<String>,
    pub challenges: Vec<String>,
    pub avatar: String,
}

impl From<Persona> for PersonaCreated {
    fn from(persona: Persona) -> Self {
        Self {
            id: persona.id,
            company_id: persona.company_id,
            name: persona.name,
            age: persona.age,
            gender: persona.gender,
            location: persona.location,
            job_title: persona.job_title,
            interests: persona.interests,
            challenges: persona.challenges,
            avatar: persona.avatar,
        }
    }
}
