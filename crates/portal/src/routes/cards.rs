//! Business-card gallery route handlers.
//!
//! Reads are open to anyone for public cards; everything else requires the
//! owner (or an admin) via `CurrentUser::can_manage_business_cards`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ctu_cards::{BusinessCardData, CardDraft, CardFace, CardPatch, SavedBusinessCard, compose};
use ctu_core::{CardId, CurrentUser, SupplierId};

use crate::error::AppError;
use crate::filters;
use crate::middleware::{OptionalUser, RequireUser};
use crate::state::AppState;

/// Default render scale for the standalone card page.
const DEFAULT_RENDER_SCALE: f32 = 1.0;

fn can_manage(user: &CurrentUser, supplier_id: &SupplierId) -> bool {
    user.can_manage_business_cards(supplier_id)
}

fn is_visible(card: &SavedBusinessCard, user: Option<&CurrentUser>) -> bool {
    card.is_public || user.is_some_and(|u| can_manage(u, &card.supplier_id))
}

/// Fetch a card or 404.
fn fetch(state: &AppState, id: &str) -> Result<SavedBusinessCard, AppError> {
    let card_id = CardId::new(id);
    state
        .cards()
        .card(&card_id)
        .ok_or_else(|| AppError::NotFound(format!("card {card_id}")))
}

/// GET /suppliers/{id}/cards
///
/// The owner sees the whole gallery; everyone else only public cards.
#[instrument(skip(state, user))]
pub async fn list(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<SavedBusinessCard>>, AppError> {
    let supplier_id = SupplierId::new(id);
    let mut cards = state.cards().supplier_cards(&supplier_id);
    if !user
        .as_ref()
        .is_some_and(|u| can_manage(u, &supplier_id))
    {
        cards.retain(|card| card.is_public);
    }
    Ok(Json(cards))
}

/// Body for card creation.
#[derive(Debug, Deserialize)]
pub struct CreateCardBody {
    pub name: String,
    pub data: BusinessCardData,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// POST /suppliers/{id}/cards
#[instrument(skip(state, user, body))]
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<String>,
    Json(body): Json<CreateCardBody>,
) -> Result<Json<SavedBusinessCard>, AppError> {
    let supplier_id = SupplierId::new(id);
    if !can_manage(&user, &supplier_id) {
        return Err(AppError::Forbidden(
            "you cannot manage this supplier's cards".into(),
        ));
    }
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("card name cannot be empty".into()));
    }

    let card = state.cards().save(CardDraft {
        name: body.name,
        supplier_id: supplier_id.clone(),
        data: body.data,
        is_default: body.is_default,
        is_public: body.is_public,
        tags: body.tags,
    })?;
    state.invalidate_profile(supplier_id.as_str()).await;
    Ok(Json(card))
}

/// GET /cards/{id}
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<String>,
) -> Result<Json<SavedBusinessCard>, AppError> {
    let card = fetch(&state, &id)?;
    if !is_visible(&card, user.as_ref()) {
        return Err(AppError::NotFound(format!("card {}", card.id)));
    }
    Ok(Json(card))
}

/// PATCH /cards/{id}
#[instrument(skip(state, user, patch))]
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<String>,
    Json(patch): Json<CardPatch>,
) -> Result<Json<SavedBusinessCard>, AppError> {
    let card = fetch(&state, &id)?;
    if !can_manage(&user, &card.supplier_id) {
        return Err(AppError::Forbidden(
            "you cannot manage this supplier's cards".into(),
        ));
    }

    let updated = state.cards().update(&card.id, patch)?;
    state.invalidate_profile(updated.supplier_id.as_str()).await;
    Ok(Json(updated))
}

/// Deletion result.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// DELETE /cards/{id}
#[instrument(skip(state, user))]
pub async fn delete(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let card = fetch(&state, &id)?;
    if !can_manage(&user, &card.supplier_id) {
        return Err(AppError::Forbidden(
            "you cannot manage this supplier's cards".into(),
        ));
    }

    let deleted = state.cards().delete(&card.id)?;
    state.invalidate_profile(card.supplier_id.as_str()).await;
    Ok(Json(DeleteResponse { deleted }))
}

/// Body for card duplication.
#[derive(Debug, Deserialize)]
pub struct DuplicateBody {
    pub name: String,
}

/// POST /cards/{id}/duplicate
#[instrument(skip(state, user, body))]
pub async fn duplicate(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<String>,
    Json(body): Json<DuplicateBody>,
) -> Result<Json<SavedBusinessCard>, AppError> {
    let card = fetch(&state, &id)?;
    if !can_manage(&user, &card.supplier_id) {
        return Err(AppError::Forbidden(
            "you cannot manage this supplier's cards".into(),
        ));
    }
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("card name cannot be empty".into()));
    }

    Ok(Json(state.cards().duplicate(&card.id, body.name)?))
}

/// Counter payload for download/share bumps.
#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub downloads: u32,
    pub shares: u32,
}

impl From<&SavedBusinessCard> for CounterResponse {
    fn from(card: &SavedBusinessCard) -> Self {
        Self {
            downloads: card.downloads,
            shares: card.shares,
        }
    }
}

/// POST /cards/{id}/download
///
/// Best-effort: a failed persist is logged and the previous count returned,
/// never an error page for the person downloading a card.
#[instrument(skip(state, user))]
pub async fn download(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<String>,
) -> Result<Json<CounterResponse>, AppError> {
    let card = fetch(&state, &id)?;
    if !is_visible(&card, user.as_ref()) {
        return Err(AppError::NotFound(format!("card {}", card.id)));
    }

    match state.cards().increment_downloads(&card.id) {
        Ok(downloads) => Ok(Json(CounterResponse {
            downloads,
            shares: card.shares,
        })),
        Err(e) => {
            tracing::warn!(error = %e, card = %card.id, "download counter bump failed");
            Ok(Json(CounterResponse::from(&card)))
        }
    }
}

/// POST /cards/{id}/share
///
/// Best-effort, like [`download`].
#[instrument(skip(state, user))]
pub async fn share(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<String>,
) -> Result<Json<CounterResponse>, AppError> {
    let card = fetch(&state, &id)?;
    if !is_visible(&card, user.as_ref()) {
        return Err(AppError::NotFound(format!("card {}", card.id)));
    }

    match state.cards().increment_shares(&card.id) {
        Ok(shares) => Ok(Json(CounterResponse {
            downloads: card.downloads,
            shares,
        })),
        Err(e) => {
            tracing::warn!(error = %e, card = %card.id, "share counter bump failed");
            Ok(Json(CounterResponse::from(&card)))
        }
    }
}

/// Query parameters for the HTML render.
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    pub scale: Option<f32>,
}

/// Standalone card page.
#[derive(Template, WebTemplate)]
#[template(path = "card.html")]
pub struct CardPage {
    pub name: String,
    pub data: BusinessCardData,
    pub face: CardFace,
}

/// GET /cards/{id}/render
#[instrument(skip(state, user))]
pub async fn render(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<CardPage, AppError> {
    let card = fetch(&state, &id)?;
    if !is_visible(&card, user.as_ref()) {
        return Err(AppError::NotFound(format!("card {}", card.id)));
    }

    let face = compose(&card.data, query.scale.unwrap_or(DEFAULT_RENDER_SCALE));
    Ok(CardPage {
        name: card.name,
        data: card.data,
        face,
    })
}
