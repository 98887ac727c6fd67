//! SQLite company repository implementation.
//!
//! Implements `CompanyRepository` from `personas-core` using sqlx with split read/write pools.

use personas_core::repository::company::CompanyRepository;
use personas_types::company::{Company, CompanyId};
use personas_types::error::RepositoryError;
use sqlx::Row;

use super::codec::{decode_list, encode_list, format_datetime, parse_datetime, storage_error};
use super::pool::DatabasePool;

/// SQLite-backed implementation of `CompanyRepository`.
pub struct SqliteCompanyRepository {
    pool: DatabasePool,
}

impl SqliteCompanyRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Company.
struct CompanyRow {
    id: String,
    name: String,
    industry: String,
    characteristics: String,
    description: String,
    created_at: String,
}

impl CompanyRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            industry: row.try_get("industry")?,
            characteristics: row.try_get("characteristics")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_company(self) -> Result<Company, RepositoryError> {
        let id = self
            .id
            .parse::<CompanyId>()
            .map_err(|e| RepositoryError::Query(format!("invalid company id: {e}")))?;

        Ok(Company {
            id,
            name: self.name,
            industry: self.industry,
            characteristics: decode_list("characteristics", &self.characteristics)?,
            description: self.description,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl CompanyRepository for SqliteCompanyRepository {
    async fn create(&self, company: &Company) -> Result<(), RepositoryError> {
        let characteristics_json = encode_list(&company.characteristics)?;

        sqlx::query(
            "INSERT INTO companies (id, name, industry, characteristics, description, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(company.id.to_string())
        .bind(&company.name)
        .bind(&company.industry)
        .bind(&characteristics_json)
        .bind(&company.description)
        .bind(format_datetime(&company.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn get_by_id(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM companies WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(storage_error)?;

        match row {
            Some(row) => {
                let company_row = CompanyRow::from_row(&row)
                    .map_err(storage_error)?;
                Ok(Some(company_row.into_company()?))
            }
            None => Ok(None),
        }
    }
}
