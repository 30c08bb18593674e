//! Cupcake HTTP routes
//!
//! The five CRUD endpoints, nested under `/api` by the server:
//! - GET    /cupcakes        - list, best rated first
//! - POST   /cupcakes        - create
//! - GET    /cupcakes/{id}   - fetch one
//! - PATCH  /cupcakes/{id}   - partial update
//! - DELETE /cupcakes/{id}   - delete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::store::{CupcakeChanges, CupcakeStore, NewCupcake};

use super::errors::ApiResult;
use super::response::{CupcakeListResponse, CupcakeResponse, DeleteResponse};

/// State shared across cupcake handlers
#[derive(Clone)]
pub struct ApiState {
    pub store: CupcakeStore,
}

impl ApiState {
    pub fn new(store: CupcakeStore) -> Self {
        Self { store }
    }
}

/// Create the cupcake routes
pub fn cupcake_routes(state: ApiState) -> Router {
    Router::new()
        .route("/cupcakes", get(list_cupcakes).post(create_cupcake))
        .route(
            "/cupcakes/{id}",
            get(get_cupcake).patch(update_cupcake).delete(delete_cupcake),
        )
        .with_state(state)
}

/// List all cupcakes, ordered by rating descending
async fn list_cupcakes(State(state): State<ApiState>) -> ApiResult<Json<CupcakeListResponse>> {
    let cupcakes = state.store.list().await?;
    Ok(Json(CupcakeListResponse::new(cupcakes)))
}

/// Fetch a single cupcake by id
async fn get_cupcake(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CupcakeResponse>> {
    let cupcake = state.store.find(id).await?;
    Ok(Json(CupcakeResponse::new(cupcake)))
}

/// Create a cupcake; the store assigns the id
async fn create_cupcake(
    State(state): State<ApiState>,
    Json(body): Json<NewCupcake>,
) -> ApiResult<(StatusCode, Json<CupcakeResponse>)> {
    let cupcake = state.store.create(body).await?;
    Ok((StatusCode::CREATED, Json(CupcakeResponse::new(cupcake))))
}

/// Apply a partial update and return the merged state
async fn update_cupcake(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(body): Json<CupcakeChanges>,
) -> ApiResult<Json<CupcakeResponse>> {
    let cupcake = state.store.update(id, body).await?;
    Ok(Json(CupcakeResponse::new(cupcake)))
}

/// Delete a cupcake permanently
async fn delete_cupcake(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<DeleteResponse>> {
    state.store.delete(id).await?;
    Ok(Json(DeleteResponse::new(id)))
}
