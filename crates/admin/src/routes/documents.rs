//! Verification document route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use ctu_core::{DocumentId, DocumentStatus};

use crate::db::DocumentRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::VerificationDocument;
use crate::state::AppState;

/// Query parameters for the document list.
#[derive(Debug, Deserialize)]
pub struct DocumentQuery {
    pub status: Option<DocumentStatus>,
}

/// Body for document review actions.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewBody {
    pub note: Option<String>,
}

/// GET /documents
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn list(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<Vec<VerificationDocument>>, AppError> {
    let repository = DocumentRepository::new(state.db());
    Ok(Json(repository.list(query.status).await))
}

/// POST /documents/{id}/approve
#[instrument(skip(state, admin, body), fields(admin = %admin.0.id))]
pub async fn approve(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
    Json(body): Json<ReviewBody>,
) -> Result<Json<VerificationDocument>, AppError> {
    let repository = DocumentRepository::new(state.db());
    let document = repository
        .review(&DocumentId::new(id), true, body.note)
        .await?;
    tracing::info!(document = %document.id, by = %admin.0.id, "document approved");
    Ok(Json(document))
}

/// POST /documents/{id}/reject
#[instrument(skip(state, admin, body), fields(admin = %admin.0.id))]
pub async fn reject(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
    Json(body): Json<ReviewBody>,
) -> Result<Json<VerificationDocument>, AppError> {
    let repository = DocumentRepository::new(state.db());
    let document = repository
        .review(&DocumentId::new(id), false, body.note)
        .await?;
    tracing::info!(document = %document.id, by = %admin.0.id, "document rejected");
    Ok(Json(document))
}
