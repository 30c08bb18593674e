//! Response envelopes
//!
//! Body shapes returned by the cupcake endpoints.

use serde::Serialize;

use crate::model::cupcake;

/// Body of `GET /api/cupcakes`
#[derive(Debug, Serialize)]
pub struct CupcakeListResponse {
    pub cupcakes: Vec<cupcake::Model>,
}

impl CupcakeListResponse {
    pub fn new(cupcakes: Vec<cupcake::Model>) -> Self {
        Self { cupcakes }
    }
}

/// Body of the single-cupcake endpoints
#[derive(Debug, Serialize)]
pub struct CupcakeResponse {
    pub cupcake: cupcake::Model,
}

impl CupcakeResponse {
    pub fn new(cupcake: cupcake::Model) -> Self {
        Self { cupcake }
    }
}

/// Body of `DELETE /api/cupcakes/{id}`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: i32,
}

impl DeleteResponse {
    pub fn new(deleted: i32) -> Self {
        Self { deleted }
    }
}
