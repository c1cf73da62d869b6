pub mod health;

use axum::{
    routing::{get, put},
    Router,
};

use crate::companies::handlers as companies;
use crate::state::AppState;
use crate::technologies::handlers as technologies;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Companies
        .route(
            "/api/companies",
            get(companies::handle_list_companies).post(companies::handle_create_company),
        )
        .route(
            "/api/companies/:id",
            put(companies::handle_update_company).delete(companies::handle_delete_company),
        )
        // Technology catalog
        .route(
            "/api/technologies",
            get(technologies::handle_list_technologies)
                .post(technologies::handle_create_technology),
        )
        .route(
            "/api/technologies/:type",
            get(technologies::handle_list_by_type),
        )
        // Users
        .route(
            "/api/users",
            get(users::handle_list_users).post(users::handle_create_user),
        )
        .route("/api/users/:id", get(users::handle_get_user))
        .with_state(state)
}
