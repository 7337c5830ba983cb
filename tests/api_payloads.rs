use axum::http::StatusCode;
use axum::response::IntoResponse;
use mongodb::bson::oid::ObjectId;

use fuliza_boost_api::errors::AppError;
use fuliza_boost_api::handlers::payments::{PayHeroCallback, PayRequest};
use fuliza_boost_api::models::boost::{Boost, CreateBoost};

fn sample_boost() -> Boost {
    Boost::new(CreateBoost {
        identification_number: "12345678".to_string(),
        amount: 500.0,
        fee: 49.0,
    })
}

#[test]
fn new_boost_is_unpaid_and_unlinked() {
    let boost = sample_boost();

    assert!(!boost.paid);
    assert!(boost.payment_date.is_none());
    assert!(boost.external_reference.is_none());
    assert!(boost.id.is_none());
}

#[test]
fn boost_serializes_with_camel_case_keys() {
    let boost = sample_boost();
    let value = serde_json::to_value(&boost).unwrap();

    assert_eq!(value["identificationNumber"], "12345678");
    assert_eq!(value["amount"], 500.0);
    assert_eq!(value["fee"], 49.0);
    assert_eq!(value["paid"], false);
    assert!(value["paymentDate"].is_null());
    assert!(value["externalReference"].is_null());
    assert!(value.get("createdAt").is_some());
    // No id until the store assigns one.
    assert!(value.get("_id").is_none());
}

#[test]
fn boost_with_id_exposes_it() {
    let mut boost = sample_boost();
    boost.id = Some(ObjectId::new());

    let value = serde_json::to_value(&boost).unwrap();
    assert!(value.get("_id").is_some());
}

#[test]
fn create_boost_reads_camel_case_field_names() {
    let payload: CreateBoost = serde_json::from_str(
        r#"{"identificationNumber": "87654321", "amount": 1000, "fee": 99.5}"#,
    )
    .unwrap();

    assert_eq!(payload.identification_number, "87654321");
    assert_eq!(payload.amount, 1000.0);
    assert_eq!(payload.fee, 99.5);
}

#[test]
fn pay_request_needs_only_phone_and_fee() {
    let request: PayRequest =
        serde_json::from_str(r#"{"phone": "0712345678", "fee": 49}"#).unwrap();

    assert_eq!(request.phone, "0712345678");
    assert_eq!(request.fee, 49.0);
    assert!(request.customer_name.is_none());
    assert!(request.boost_id.is_none());
}

#[test]
fn pay_request_accepts_optional_fields() {
    let request: PayRequest = serde_json::from_str(
        r#"{"phone": "0712345678", "fee": 49, "customer_name": "Jane", "boost_id": "665f1f77bcf86cd799439011"}"#,
    )
    .unwrap();

    assert_eq!(request.customer_name.as_deref(), Some("Jane"));
    assert_eq!(request.boost_id.as_deref(), Some("665f1f77bcf86cd799439011"));
}

#[test]
fn callback_missing_success_is_treated_as_failure() {
    let callback: PayHeroCallback =
        serde_json::from_str(r#"{"reference": "BOOST-abc"}"#).unwrap();

    assert!(!callback.success);
    assert_eq!(callback.reference.as_deref(), Some("BOOST-abc"));
}

#[test]
fn callback_ignores_extra_provider_fields() {
    let callback: PayHeroCallback = serde_json::from_str(
        r#"{"success": true, "reference": "BOOST-abc", "amount": 49, "provider": "m-pesa", "status": "SUCCESS"}"#,
    )
    .unwrap();

    assert!(callback.success);
    assert_eq!(callback.reference.as_deref(), Some("BOOST-abc"));
}

#[tokio::test]
async fn invalid_phone_maps_to_bad_request_with_flat_body() {
    let response = AppError::InvalidPhone("Invalid Safaricom number".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid Safaricom number");
}

#[tokio::test]
async fn payhero_errors_pass_the_upstream_status_through() {
    let response = AppError::PayHero {
        status: 422,
        body: r#"{"error_message":"insufficient balance"}"#.to_string(),
    }
    .into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "PayHero API error");
    assert_eq!(body["details"], r#"{"error_message":"insufficient balance"}"#);
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let response = AppError::BoostNotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unexpected_maps_to_500_with_its_message() {
    let response = AppError::Unexpected("Payment initiation failed".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Payment initiation failed");
}

#[test]
fn paid_never_set_from_create_payload() {
    // The create DTO has no paid/paymentDate fields at all; a client cannot
    // forge a paid record through POST /api/boosts.
    let result = serde_json::from_str::<CreateBoost>(
        r#"{"identificationNumber": "1", "amount": 1, "fee": 1, "paid": true}"#,
    );
    let payload = result.unwrap();
    let boost = Boost::new(payload);
    assert!(!boost.paid);
}
