use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use mongodb::bson;

/// A customer-facing fee-payment record. Field names on the wire are
/// camelCase; the Mongo documents share the same keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boost {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub identification_number: String,
    pub amount: f64,
    pub fee: f64,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub payment_date: Option<bson::DateTime>,
    #[serde(default)]
    pub external_reference: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoost {
    pub identification_number: String,
    pub amount: f64,
    pub fee: f64,
}

impl Boost {
    /// A freshly created record is never born paid; the PayHero callback is
    /// the only writer of `paid` and `payment_date`.
    pub fn new(payload: CreateBoost) -> Self {
        Boost {
            id: None,
            identification_number: payload.identification_number,
            amount: payload.amount,
            fee: payload.fee,
            paid: false,
            payment_date: None,
            external_reference: None,
            created_at: Utc::now(),
        }
    }
}
