//! Company service: create and look up companies.

use personas_types::company::{Company, CompanyCreated, CompanyId, CreateCompanyRequest};
use personas_types::error::{CompanyError, ValidationError};
use personas_types::timestamp;

use crate::repository::company::CompanyRepository;

/// Service for company records.
pub struct CompanyService<R: CompanyRepository> {
    repo: R,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and store a new company, returning the submitted fields plus
    /// the generated id.
    pub async fn create_company(
        &self,
        request: CreateCompanyRequest,
    ) -> Result<CompanyCreated, CompanyError> {
        let missing = request.missing_fields();
        let CreateCompanyRequest {
            name: Some(name),
            industry: Some(industry),
            characteristics: Some(characteristics),
            description: Some(description),
        } = request
        else {
            return Err(ValidationError::MissingFields(missing).into());
        };

        let company = Company {
            id: CompanyId::new(),
            name,
            industry,
            characteristics,
            description,
            created_at: timestamp::now(),
        };

        self.repo
            .create(&company)
            .await
            .map_err(|e| CompanyError::StorageError(e.to_string()))?;

        tracing::info!(company_id = %company.id, name = %company.name, "company created");
        Ok(CompanyCreated::from(company))
    }

    /// Look up a company by id. Ids not in canonical UUID form cannot exist and
    /// report `NotFound`.
    pub async fn get_company(&self, id: &str) -> Result<Company, CompanyError> {
        let id = CompanyId::parse_canonical(id).ok_or(CompanyError::NotFound)?;
        tracing::debug!(company_id = %id, "looking up company");

        self.repo
            .get_by_id(&id)
            .await
            .map_err(|e| CompanyError::StorageError(e.to_string()))?
            .ok_or(CompanyError::NotFound)
    }
}
