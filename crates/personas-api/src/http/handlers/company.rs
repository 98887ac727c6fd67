//! Company handlers for the REST API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use personas_types::company::{Company, CompanyCreated, CreateCompanyRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/company - Create a company.
pub async fn create_company(
    State(state): State<AppState>,
    payload: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyCreated>), AppError> {
    let Json(body) = payload?;
    let created = state.company_service.create_company(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/company/{company_id} - Get a company with its characteristics.
pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<Company>, AppError> {
    let company = state.company_service.get_company(&company_id).await?;
    Ok(Json(company))
}
