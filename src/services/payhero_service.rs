// services/payhero_service.rs
use base64::{engine::general_purpose::STANDARD as base64, Engine as _};
use reqwest::{header, Client};
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};

use crate::config::{AppConfig, PAYHERO_API_URL};
use crate::errors::{AppError, Result};

#[derive(Debug, Serialize)]
pub struct PaymentRequest {
    pub amount: i64,
    pub phone_number: String,
    pub channel_id: i64,
    pub provider: String,
    pub external_reference: String,
    pub customer_name: String,
    pub callback_url: String,
}

#[derive(Debug, Clone)]
pub struct PayHeroService {
    config: AppConfig,
    client: Client,
}

impl PayHeroService {
    pub fn new(config: AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        PayHeroService { config, client }
    }

    // Build Basic Auth header from username:password
    fn basic_auth(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.config.payhero_username, self.config.payhero_password
        );
        format!("Basic {}", base64.encode(credentials))
    }

    /// PayHero wants whole shillings; fractional fees are truncated.
    /// The channel id is parsed here, not at startup, so a misconfigured
    /// environment fails the request rather than the process.
    pub fn build_payment_request(
        &self,
        amount: f64,
        phone: &str,
        customer_name: &str,
        reference: &str,
    ) -> Result<PaymentRequest> {
        let channel_id = self
            .config
            .payhero_channel_id
            .trim()
            .parse::<i64>()
            .map_err(|e| AppError::Unexpected(format!("Invalid PayHero channel id: {}", e)))?;

        Ok(PaymentRequest {
            amount: amount as i64,
            phone_number: phone.to_string(),
            channel_id,
            provider: "m-pesa".to_string(),
            external_reference: reference.to_string(),
            customer_name: customer_name.to_string(),
            callback_url: self.config.payhero_callback_url.clone(),
        })
    }

    /// Sends an STK push request to PayHero and returns the raw response
    /// body. A 4xx from PayHero is passed through with its body; anything
    /// else becomes an opaque failure. No retries.
    pub async fn initiate_payment(
        &self,
        amount: f64,
        phone: &str,
        customer_name: &str,
        reference: &str,
    ) -> Result<String> {
        let request = self.build_payment_request(amount, phone, customer_name, reference)?;

        info!(
            "PayHero: initiating KSh {} for {} ({})",
            request.amount, request.phone_number, request.external_reference
        );

        let response = self
            .client
            .post(PAYHERO_API_URL)
            .header(header::AUTHORIZATION, self.basic_auth())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_client_error() {
            error!("PayHero error response: {} - {}", status, body);
            return Err(AppError::PayHero {
                status: status.as_u16(),
                body,
            });
        }

        if !status.is_success() {
            error!("PayHero request failed: {} - {}", status, body);
            return Err(AppError::Unexpected(format!(
                "PayHero request failed: {}",
                status
            )));
        }

        info!("PayHero response: {}", body);
        Ok(body)
    }
}
