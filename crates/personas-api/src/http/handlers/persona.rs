//! Persona handlers for the REST API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use personas_types::persona::{CreatePersonaRequest, Persona, PersonaCreated};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/persona - Create a persona. The company is not looked up.
pub async fn create_persona(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PersonaCreated>), AppError> {
    let Json(body) = payload?;
    let created = state.persona_service.create_persona(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/persona/{persona_id} - Get a persona with decoded interests and challenges.
pub async fn get_persona(
    State(state): State<AppState>,
    Path(persona_id): Path<String>,
) -> Result<Json<Persona>, AppError> {
    let persona = state.persona_service.get_persona(&persona_id).await?;
    Ok(Json(persona))
}
