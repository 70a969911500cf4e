//! Network lookup - Resolves nicknames through the top-up store's payment init endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::errors::LookupError;
use crate::domain::entities::LookupProfile;
use crate::domain::traits::LookupAdapter;

/// Payment initiation endpoint that echoes the account nickname
pub const DEFAULT_ENDPOINT: &str = "https://order.codashop.com/id/initPayment.action";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Form body of a payment initiation
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitPaymentForm<'a> {
    voucher_price_point_id: &'a str,
    voucher_type_name: &'a str,
    user_id: &'a str,
    zone_id: &'a str,
    payment_channel_id: &'a str,
    checkout_id: String,
    iap_ref_id: &'a str,
}

impl<'a> InitPaymentForm<'a> {
    fn new(user_id: &'a str, zone_id: &'a str) -> Self {
        Self {
            voucher_price_point_id: "240631",
            voucher_type_name: "MOBILE_LEGENDS",
            user_id,
            zone_id,
            payment_channel_id: "302",
            checkout_id: chrono::Utc::now().timestamp_millis().to_string(),
            iap_ref_id: "",
        }
    }
}

/// Lookup adapter backed by a real HTTP call
pub struct NetworkLookup {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl NetworkLookup {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

fn request_error(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Network(e.to_string())
    }
}

#[async_trait]
impl LookupAdapter for NetworkLookup {
    fn name(&self) -> &str {
        "network"
    }

    async fn lookup(&self, user_id: &str, zone_id: &str) -> Result<LookupProfile, LookupError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .form(&InitPaymentForm::new(user_id, zone_id))
            .send()
            .await
            .map_err(request_error)?;

        tracing::debug!("Lookup endpoint answered {}", response.status());
        let body = response.text().await.map_err(request_error)?;
        let data: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| LookupError::Malformed(e.to_string()))?;

        let nickname = data
            .pointer("/confirmationFields/username")
            .and_then(serde_json::Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| LookupError::NotFound {
                user_id: user_id.to_string(),
                zone_id: zone_id.to_string(),
            })?;

        Ok(LookupProfile::new(user_id, zone_id, nickname))
    }
}
