use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{boosts, payments};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // POST /api/boosts - create a record; GET - list all
        .route("/", post(boosts::create_boost).get(boosts::get_boosts))
        // GET /api/boosts/by-id/{identificationNumber} - all records for a customer ID
        .route("/by-id/:identification_number", get(boosts::get_boosts_by_id_number))
        // Payment initiation and the PayHero status callback
        .route("/pay", post(payments::pay_boost_fee))
        .route("/pay/callback", post(payments::payhero_callback))
        // Reporting over paid boosts, optionally scoped to a day or range
        .route("/paid", get(boosts::get_paid_boosts))
        .route("/paid/total", get(boosts::get_total_fees))
        .route("/paid/count", get(boosts::get_paid_count))
        .route("/paid/filter", get(boosts::filter_paid_boosts))
        // Literal routes above win over the id capture
        .route("/:id", get(boosts::get_boost).delete(boosts::delete_boost))
}
