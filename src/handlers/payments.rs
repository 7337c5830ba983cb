// handlers/payments.rs
use axum::extract::{Json, State};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    database::boost_store::BoostStore,
    errors::{AppError, Result},
    services::phone::normalize_phone,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct PayRequest {
    pub phone: String,
    pub fee: f64,
    pub customer_name: Option<String>,
    /// When present, the generated reference is stamped onto this record so
    /// the callback can reconcile it. Without it, the reference only travels
    /// back to the caller.
    pub boost_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PayHeroCallback {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reference: Option<String>,
}

pub fn new_reference() -> String {
    format!("BOOST-{}", Uuid::new_v4())
}

pub async fn pay_boost_fee(
    State(state): State<AppState>,
    Json(request): Json<PayRequest>,
) -> Result<Json<Value>> {
    let phone = normalize_phone(&request.phone)?;
    let customer_name = request.customer_name.as_deref().unwrap_or("Customer");
    let reference = new_reference();

    // Link before calling PayHero: the callback can arrive as soon as the
    // request is accepted.
    if let Some(raw_id) = &request.boost_id {
        let id = ObjectId::parse_str(raw_id)?;
        let store = BoostStore::new(&state.db);
        if !store.link_reference(id, &reference).await? {
            warn!(
                "Boost {} absent or already linked; callback will not reconcile {}",
                raw_id, reference
            );
        }
    }

    let body = match state
        .payhero
        .initiate_payment(request.fee, &phone, customer_name, &reference)
        .await
    {
        Ok(body) => body,
        Err(AppError::Unexpected(message)) if !state.config.expose_error_details => {
            error!("Payment initiation failed: {}", message);
            return Err(AppError::Unexpected("Payment initiation failed".to_string()));
        }
        Err(e) => return Err(e),
    };

    Ok(Json(json!({
        "success": true,
        "message": "Payment initiated successfully",
        "data": body,
        "reference": reference,
    })))
}

/// PayHero status notification. Unknown references and failed payments are
/// acknowledged and dropped; PayHero is never told about a local miss.
pub async fn payhero_callback(
    State(state): State<AppState>,
    Json(callback): Json<PayHeroCallback>,
) -> Result<&'static str> {
    info!("Received PayHero callback: {:?}", callback);

    if callback.success {
        if let Some(reference) = &callback.reference {
            let store = BoostStore::new(&state.db);
            match store.get_by_reference(reference).await? {
                Some(_) => {
                    store.mark_paid(reference, Utc::now()).await?;
                    info!("Boost paid: {}", reference);
                }
                None => warn!("Callback for unknown reference: {}", reference),
            }
        }
    }

    Ok("Callback received")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_carry_the_boost_prefix() {
        let reference = new_reference();
        let suffix = reference.strip_prefix("BOOST-").expect("BOOST- prefix");
        Uuid::parse_str(suffix).expect("uuid suffix");
    }

    #[test]
    fn references_are_unique_per_call() {
        assert_ne!(new_reference(), new_reference());
    }
}
