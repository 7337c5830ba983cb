// handlers/boosts.rs
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    database::boost_store::{day_window, range_window, BoostStore},
    errors::Result,
    models::boost::{Boost, CreateBoost},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct PaidQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

// Create a new boost record. Fields are persisted as supplied; no
// amount/fee range checks.
pub async fn create_boost(
    State(state): State<AppState>,
    Json(payload): Json<CreateBoost>,
) -> Result<Json<Boost>> {
    let store = BoostStore::new(&state.db);
    let boost = store.create(Boost::new(payload)).await?;

    info!(
        "Created boost {} for ID number {}",
        boost.id.map(|id| id.to_hex()).unwrap_or_default(),
        boost.identification_number
    );
    Ok(Json(boost))
}

pub async fn get_boosts(State(state): State<AppState>) -> Result<Json<Vec<Boost>>> {
    let store = BoostStore::new(&state.db);
    Ok(Json(store.list().await?))
}

pub async fn get_boosts_by_id_number(
    State(state): State<AppState>,
    Path(identification_number): Path<String>,
) -> Result<Json<Vec<Boost>>> {
    let store = BoostStore::new(&state.db);
    Ok(Json(
        store
            .get_by_identification_number(&identification_number)
            .await?,
    ))
}

pub async fn get_boost(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Boost>> {
    let id = ObjectId::parse_str(&id)?;
    let store = BoostStore::new(&state.db);
    Ok(Json(store.get_by_id(id).await?))
}

pub async fn delete_boost(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str> {
    let id = ObjectId::parse_str(&id)?;
    let store = BoostStore::new(&state.db);
    store.delete(id).await?;

    info!("Deleted boost {}", id.to_hex());
    Ok("Boost deleted successfully")
}

// ------------------ REPORTING ------------------

pub async fn get_paid_boosts(
    State(state): State<AppState>,
    Query(query): Query<PaidQuery>,
) -> Result<Json<Vec<Boost>>> {
    let store = BoostStore::new(&state.db);
    Ok(Json(store.list_paid(optional_day(&query)?).await?))
}

pub async fn get_total_fees(
    State(state): State<AppState>,
    Query(query): Query<PaidQuery>,
) -> Result<Json<Value>> {
    let store = BoostStore::new(&state.db);
    let total = store.sum_fees(optional_day(&query)?).await?;
    Ok(Json(json!({ "total": total })))
}

pub async fn get_paid_count(
    State(state): State<AppState>,
    Query(query): Query<PaidQuery>,
) -> Result<Json<Value>> {
    let store = BoostStore::new(&state.db);
    let count = store.count_paid(optional_day(&query)?).await?;
    Ok(Json(json!({ "count": count })))
}

pub async fn filter_paid_boosts(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<Boost>>> {
    let start: NaiveDate = query.start_date.parse()?;
    let end: NaiveDate = query.end_date.parse()?;

    let store = BoostStore::new(&state.db);
    Ok(Json(store.list_paid(Some(range_window(start, end))).await?))
}

fn optional_day(query: &PaidQuery) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    match &query.date {
        Some(raw) => Ok(Some(day_window(raw.parse::<NaiveDate>()?))),
        None => Ok(None),
    }
}
