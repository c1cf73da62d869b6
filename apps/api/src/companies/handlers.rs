use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::companies::write::{
    create_company, delete_company, list_companies, update_company, CompanyPayload,
};
use crate::errors::AppError;
use crate::models::company::Company;
use crate::state::AppState;

/// GET /api/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, AppError> {
    let companies = list_companies(&state.db).await?;
    Ok(Json(companies))
}

/// POST /api/companies
pub async fn handle_create_company(
    State(state): State<AppState>,
    Json(payload): Json<CompanyPayload>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let company_id = create_company(&state.db, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Company created", "companyId": company_id })),
    ))
}

/// PUT /api/companies/:id
pub async fn handle_update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CompanyPayload>,
) -> Result<Json<Value>, AppError> {
    update_company(&state.db, id, &payload).await?;
    Ok(Json(json!({ "message": "Company updated" })))
}

/// DELETE /api/companies/:id
pub async fn handle_delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    delete_company(&state.db, id).await?;
    Ok(Json(json!({ "message": "Company deleted" })))
}
