//! Public supplier profile page.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::instrument;

use ctu_cards::{BusinessCardData, CardFace, compose};
use ctu_core::SupplierId;

use crate::db::SupplierRepository;
use crate::error::AppError;
use crate::filters;
use crate::models::SupplierProfile;
use crate::state::AppState;

/// The supplier's public default card, pre-composed for the template.
pub struct ProfileCard {
    pub name: String,
    pub data: BusinessCardData,
    pub face: CardFace,
}

/// Public profile page.
#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfilePage {
    pub supplier: SupplierProfile,
    pub card: Option<ProfileCard>,
}

/// GET /suppliers/{id}/profile
///
/// Rendered pages are cached per supplier; card and profile mutations
/// invalidate the entry.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    if let Some(cached) = state.profile_cache().get(&id).await {
        return Ok(Html(cached));
    }

    let supplier_id = SupplierId::new(id.clone());
    let repository = SupplierRepository::new(state.db());
    let supplier = repository.profile(&supplier_id).await?;

    // Only a card that is both the default and public appears to visitors
    let card = state
        .cards()
        .supplier_cards(&supplier_id)
        .into_iter()
        .find(|card| card.is_default && card.is_public)
        .map(|card| ProfileCard {
            face: compose(&card.data, 1.0),
            name: card.name,
            data: card.data,
        });

    let html = ProfilePage { supplier, card }.render()?;
    state.profile_cache().insert(id, html.clone()).await;
    Ok(Html(html))
}
