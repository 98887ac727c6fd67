use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

entity_id! {
    /// Unique identifier for a company.
    CompanyId
}

/// A business described by name, industry, traits and description.
///
/// Companies are create-only: once stored they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub industry: String,
    /// Ordered list of traits ("fast", "cheap", ...).
    pub characteristics: Vec<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/company`.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation error naming it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub characteristics: Option<Vec<String>>,
    pub description: Option<String>,
}

impl CreateCompanyRequest {
    /// Names of required fields absent from the request, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.industry.is_none() {
            missing.push("industry");
        }
        if self.characteristics.is_none() {
            missing.push("characteristics");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        missing
    }
}

/// Response to a successful company creation: the submitted fields plus the
/// generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCreated {
    pub id: CompanyId,
    pub name: String,
    pub industry: String,
    pub characteristics: Vec<String>,
    pub description: String,
}

impl From<Company> for CompanyCreated {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            industry: company.industry,
            characteristics: company.characteristics,
            description: company.description,
        }
    }
}
