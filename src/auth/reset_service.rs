use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::auth::reset::{PasswordResetService, ResetError};
use crate::config::{self, ResetServiceKind};

pub const RESET_REQUEST_PATH: &str = "/api/password-reset/request";

#[derive(Serialize)]
struct ResetPayload {
    email: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Stands in for a backend: waits, then reports success.
pub struct SimulatedResetService {
    pub delay_ms: u32,
}

impl Default for SimulatedResetService {
    fn default() -> Self {
        Self {
            delay_ms: config::SIMULATED_RESET_DELAY_MS,
        }
    }
}

impl PasswordResetService for SimulatedResetService {
    fn request_reset(&self, _email: &str) -> LocalBoxFuture<'static, Result<(), ResetError>> {
        let delay_ms = self.delay_ms;
        info!("Simulating password reset request ({} ms)", delay_ms);
        async move {
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

pub struct HttpResetService {
    endpoint: String,
}

impl HttpResetService {
    pub fn new(backend_url: &str) -> Self {
        Self {
            endpoint: reset_endpoint(backend_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PasswordResetService for HttpResetService {
    fn request_reset(&self, email: &str) -> LocalBoxFuture<'static, Result<(), ResetError>> {
        let payload = ResetPayload {
            email: email.to_string(),
        };
        post_reset(self.endpoint.clone(), payload).boxed_local()
    }
}

async fn post_reset(endpoint: String, payload: ResetPayload) -> Result<(), ResetError> {
    let request = Request::post(&endpoint)
        .json(&payload)
        .map_err(|e| ResetError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ResetError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    warn!("Password reset request failed with status: {}", status);
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => "Password reset request failed".to_string(),
    };
    Err(ResetError::Rejected { status, message })
}

fn reset_endpoint(backend_url: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), RESET_REQUEST_PATH)
}

pub fn reset_service() -> Rc<dyn PasswordResetService> {
    match config::reset_service_kind() {
        ResetServiceKind::Http => Rc::new(HttpResetService::new(config::get_backend_url())),
        ResetServiceKind::Simulated => Rc::new(SimulatedResetService::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_backend_url() {
        assert_eq!(
            HttpResetService::new("http://localhost:3001").endpoint(),
            "http://localhost:3001/api/password-reset/request"
        );
        assert_eq!(
            HttpResetService::new("https://equiteee.com/").endpoint(),
            "https://equiteee.com/api/password-reset/request"
        );
    }

    #[test]
    fn same_origin_endpoint_is_relative() {
        assert_eq!(reset_endpoint(""), "/api/password-reset/request");
    }

    #[test]
    fn payload_is_a_plain_email_object() {
        let payload = ResetPayload {
            email: "alice@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "email": "alice@example.com" })
        );
    }

    #[test]
    fn error_body_parses() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error":"unknown address"}"#).unwrap();
        assert_eq!(body.error, "unknown address");
    }

    #[test]
    fn simulated_service_uses_configured_delay() {
        assert_eq!(SimulatedResetService::default().delay_ms, 1_500);
    }
}
