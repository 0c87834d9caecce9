//! Customer registration.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use ledgerbank_db::entities::customers;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Creates the customer routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/customers", post(create_customer))
}

/// Request body for `POST /customers`.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    /// Customer's first name.
    pub first_name: String,
    /// Customer's last name.
    pub last_name: String,
    /// Customer's email, must be unique.
    pub email: String,
}

/// Response body for a customer.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    /// Internal id.
    pub id: i64,
    /// Stable external id.
    pub external_id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// KYC status, e.g. `"PENDING"`.
    pub kyc_status: String,
    /// Whether the customer is active.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<customers::Model> for CustomerResponse {
    fn from(model: customers::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            kyc_status: format!("{:?}", model.kyc_status).to_uppercase(),
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

/// POST `/customers` - register a new customer.
async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let customer = state
        .accounts
        .create_customer(&payload.first_name, &payload.last_name, &payload.email)
        .await?;
    info!(customer_id = customer.id, "customer created");
    Ok((StatusCode::CREATED, Json(customer.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_customer_request_deserializes() {
        let body = r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com"}"#;
        let req: CreateCustomerRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.email, "ada@example.com");
    }
}
