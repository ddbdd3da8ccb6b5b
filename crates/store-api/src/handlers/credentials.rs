//! Admin credential handlers
//!
//! Admin-only visibility into the credential store. Summaries never include
//! hash or salt material.

use axum::{extract::State, Json};
use store_service::{AuthService, CredentialSummaryResponse};

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// List all credentials
///
/// GET /api/auth/credentials
pub async fn list_credentials(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> ApiResult<Json<Vec<CredentialSummaryResponse>>> {
    tracing::debug!(admin = %admin.customer_id, "Listing credentials");

    let service = AuthService::new(state.service_context());
    let credentials = service.list_credentials().await?;

    Ok(Json(
        credentials.iter().map(CredentialSummaryResponse::from).collect(),
    ))
}
