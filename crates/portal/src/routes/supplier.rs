//! Supplier dashboard route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::instrument;

use ctu_core::{ConversationId, Price, ReviewId};

use crate::db::SupplierRepository;
use crate::error::AppError;
use crate::middleware::RequireSupplier;
use crate::models::{CustomerAccount, Message, MonthlyStat, ProductSummary, Review, SupplierOrder};
use crate::state::AppState;

/// Format a price for dashboard tiles.
fn format_price(price: &Price) -> String {
    price.display()
}

/// Metric tiles shown at the top of the supplier dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub orders: usize,
    pub revenue: String,
    pub unread_messages: usize,
    pub profile_views: u32,
}

/// Recent order row for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct RecentOrderView {
    pub number: String,
    pub customer_name: String,
    pub total: String,
    pub status: String,
}

impl From<&SupplierOrder> for RecentOrderView {
    fn from(order: &SupplierOrder) -> Self {
        Self {
            number: order.number.clone(),
            customer_name: order.customer_name.clone(),
            total: format_price(&order.total),
            status: order.status.to_string(),
        }
    }
}

/// Dashboard payload.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub metrics: DashboardMetrics,
    pub recent_orders: Vec<RecentOrderView>,
}

/// GET /supplier/dashboard
#[instrument(skip(state, auth), fields(supplier = %auth.supplier_id))]
pub async fn dashboard(
    State(state): State<AppState>,
    auth: RequireSupplier,
) -> Result<Json<DashboardResponse>, AppError> {
    let repository = SupplierRepository::new(state.db());
    let supplier_id = &auth.supplier_id;

    let (order_count, revenue) = repository.order_totals(supplier_id).await;
    let unread_messages = repository
        .conversations(supplier_id)
        .await
        .iter()
        .map(crate::models::Conversation::unread_count)
        .sum();
    let profile_views = repository
        .monthly_stats(supplier_id)
        .await
        .last()
        .map_or(0, |m| m.profile_views);
    let recent_orders = repository
        .orders(supplier_id)
        .await
        .iter()
        .take(5)
        .map(RecentOrderView::from)
        .collect();

    Ok(Json(DashboardResponse {
        metrics: DashboardMetrics {
            orders: order_count,
            revenue: format_price(&Price::eur(revenue)),
            unread_messages,
            profile_views,
        },
        recent_orders,
    }))
}

/// Analytics payload: the raw monthly series plus top products.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub months: Vec<MonthlyStat>,
    pub top_products: Vec<ProductSummary>,
}

/// GET /supplier/analytics
#[instrument(skip(state, auth), fields(supplier = %auth.supplier_id))]
pub async fn analytics(
    State(state): State<AppState>,
    auth: RequireSupplier,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let repository = SupplierRepository::new(state.db());
    Ok(Json(AnalyticsResponse {
        months: repository.monthly_stats(&auth.supplier_id).await,
        top_products: repository.top_products(&auth.supplier_id, 5).await,
    }))
}

/// Query parameters for the customer list.
#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    /// Case-insensitive text match over name and company.
    pub q: Option<String>,
}

/// GET /supplier/customers
#[instrument(skip(state, auth), fields(supplier = %auth.supplier_id))]
pub async fn customers(
    State(state): State<AppState>,
    auth: RequireSupplier,
    Query(query): Query<CustomerQuery>,
) -> Result<Json<Vec<CustomerAccount>>, AppError> {
    let repository = SupplierRepository::new(state.db());
    Ok(Json(
        repository
            .customers(&auth.supplier_id, query.q.as_deref())
            .await,
    ))
}

/// Conversation summary with its unread count.
#[derive(Debug, Serialize)]
pub struct ConversationView {
    pub id: ConversationId,
    pub contact_name: String,
    pub subject: String,
    pub unread: usize,
    pub messages: Vec<Message>,
}

impl From<crate::models::Conversation> for ConversationView {
    fn from(conversation: crate::models::Conversation) -> Self {
        Self {
            id: conversation.id.clone(),
            contact_name: conversation.contact_name.clone(),
            subject: conversation.subject.clone(),
            unread: conversation.unread_count(),
            messages: conversation.messages,
        }
    }
}

/// GET /supplier/messages
#[instrument(skip(state, auth), fields(supplier = %auth.supplier_id))]
pub async fn messages(
    State(state): State<AppState>,
    auth: RequireSupplier,
) -> Result<Json<Vec<ConversationView>>, AppError> {
    let repository = SupplierRepository::new(state.db());
    Ok(Json(
        repository
            .conversations(&auth.supplier_id)
            .await
            .into_iter()
            .map(ConversationView::from)
            .collect(),
    ))
}

/// POST /supplier/messages/{id}/read
#[instrument(skip(state, auth), fields(supplier = %auth.supplier_id))]
pub async fn mark_read(
    State(state): State<AppState>,
    auth: RequireSupplier,
    Path(id): Path<String>,
) -> Result<Json<ConversationView>, AppError> {
    let repository = SupplierRepository::new(state.db());
    let conversation = repository
        .mark_conversation_read(&auth.supplier_id, &ConversationId::new(id))
        .await?;
    Ok(Json(ConversationView::from(conversation)))
}

/// Body for message and review replies.
#[derive(Debug, Deserialize)]
pub struct ReplyBody {
    pub body: String,
}

/// POST /supplier/messages/{id}/reply
#[instrument(skip(state, auth, reply_body), fields(supplier = %auth.supplier_id))]
pub async fn reply(
    State(state): State<AppState>,
    auth: RequireSupplier,
    Path(id): Path<String>,
    Json(reply_body): Json<ReplyBody>,
) -> Result<Json<Message>, AppError> {
    let body = reply_body.body.trim();
    if body.is_empty() {
        return Err(AppError::BadRequest("reply body cannot be empty".into()));
    }

    let repository = SupplierRepository::new(state.db());
    let message = repository
        .reply(&auth.supplier_id, &ConversationId::new(id), body.to_owned())
        .await?;
    Ok(Json(message))
}

/// Query parameters for the review list.
#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub min_rating: Option<u8>,
}

/// GET /supplier/reviews
#[instrument(skip(state, auth), fields(supplier = %auth.supplier_id))]
pub async fn reviews(
    State(state): State<AppState>,
    auth: RequireSupplier,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<Vec<Review>>, AppError> {
    let repository = SupplierRepository::new(state.db());
    Ok(Json(
        repository
            .reviews(&auth.supplier_id, query.min_rating)
            .await,
    ))
}

/// POST /supplier/reviews/{id}/reply
#[instrument(skip(state, auth, reply_body), fields(supplier = %auth.supplier_id))]
pub async fn reply_to_review(
    State(state): State<AppState>,
    auth: RequireSupplier,
    Path(id): Path<String>,
    Json(reply_body): Json<ReplyBody>,
) -> Result<Json<Review>, AppError> {
    let body = reply_body.body.trim();
    if body.is_empty() {
        return Err(AppError::BadRequest("reply body cannot be empty".into()));
    }

    let repository = SupplierRepository::new(state.db());
    let review = repository
        .reply_to_review(&auth.supplier_id, &ReviewId::new(id), body.to_owned())
        .await?;
    Ok(Json(review))
}

/// GET /supplier/settings
#[instrument(skip(state, auth), fields(supplier = %auth.supplier_id))]
pub async fn settings(
    State(state): State<AppState>,
    auth: RequireSupplier,
) -> Result<Json<Vec<(String, JsonValue)>>, AppError> {
    let repository = SupplierRepository::new(state.db());
    Ok(Json(repository.settings(&auth.supplier_id).await))
}

/// PUT /supplier/settings/{key}
#[instrument(skip(state, auth, value), fields(supplier = %auth.supplier_id))]
pub async fn set_setting(
    State(state): State<AppState>,
    auth: RequireSupplier,
    Path(key): Path<String>,
    Json(value): Json<JsonValue>,
) -> Result<Json<Vec<(String, JsonValue)>>, AppError> {
    let repository = SupplierRepository::new(state.db());
    repository.set_setting(&auth.supplier_id, &key, value).await;
    Ok(Json(repository.settings(&auth.supplier_id).await))
}
