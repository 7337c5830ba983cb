// config.rs
use std::env;

/// PayHero payments endpoint. Fixed, not overridable.
pub const PAYHERO_API_URL: &str = "https://backend.payhero.co.ke/api/v2/payments";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub payhero_username: String,
    pub payhero_password: String,
    pub payhero_channel_id: String,
    pub payhero_callback_url: String,
    pub expose_error_details: bool,
}

impl AppConfig {
    /// Reads PayHero settings from the environment. Values are not validated
    /// here; a missing or bad credential surfaces on the first PayHero call.
    pub fn from_env() -> Self {
        AppConfig {
            payhero_username: env::var("PAYHERO_API_USERNAME").unwrap_or_default(),
            payhero_password: env::var("PAYHERO_API_PASSWORD").unwrap_or_default(),
            payhero_channel_id: env::var("PAYHERO_CHANNEL_ID").unwrap_or_default(),
            payhero_callback_url: env::var("PAYHERO_CALLBACK_URL").unwrap_or_default(),
            expose_error_details: env::var("EXPOSE_ERROR_DETAILS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
