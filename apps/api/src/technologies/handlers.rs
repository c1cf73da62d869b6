use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::technology::{Technology, TechnologyName};
use crate::state::AppState;

/// GET /api/technologies
pub async fn handle_list_technologies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Technology>>, AppError> {
    let technologies = sqlx::query_as::<_, Technology>("SELECT * FROM technologies")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(technologies))
}

/// GET /api/technologies/:type
/// Returns the names registered under a category; 404 when the category is empty.
pub async fn handle_list_by_type(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<TechnologyName>>, AppError> {
    let names = sqlx::query_as::<_, TechnologyName>("SELECT name FROM technologies WHERE type = $1")
        .bind(&kind)
        .fetch_all(&state.db)
        .await?;

    if names.is_empty() {
        return Err(AppError::NotFound("Technology not found".to_string()));
    }
    Ok(Json(names))
}

#[derive(Debug, Deserialize)]
pub struct NewTechnology {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// POST /api/technologies
pub async fn handle_create_technology(
    State(state): State<AppState>,
    Json(payload): Json<NewTechnology>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id: i32 =
        sqlx::query_scalar("INSERT INTO technologies (name, type) VALUES ($1, $2) RETURNING id")
            .bind(&payload.name)
            .bind(&payload.kind)
            .fetch_one(&state.db)
            .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
