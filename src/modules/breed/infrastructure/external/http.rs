use crate::shared::errors::{AppError, AppResult};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry configuration for external API calls
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Create a conservative retry config for production use
    pub fn conservative() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 1.5,
            jitter: true,
        }
    }

    fn calculate_delay(&self, attempt: u32) -> Duration {
        let exponential_delay =
            self.base_delay.as_millis() as f64 * self.backoff_multiplier.powi(attempt as i32);

        let mut delay = Duration::from_millis(exponential_delay as u64);

        if delay > self.max_delay {
            delay = self.max_delay;
        }

        if self.jitter {
            let jitter_factor = 0.1; // 10% jitter
            let jitter_ms =
                (delay.as_millis() as f64 * jitter_factor * rand::random::<f64>()) as u64;
            delay = Duration::from_millis(delay.as_millis() as u64 + jitter_ms);
        }

        delay
    }
}

/// Shared HTTP plumbing for remote API clients: client construction, status
/// triage, and bounded retry with exponential backoff.
pub struct HttpHandler;

impl HttpHandler {
    pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::NetworkError(format!("Failed to create HTTP client: {}", e)))
    }

    /// Execute an HTTP request, retrying transient failures, and return the
    /// response once it carries an acceptable status.
    pub async fn execute_with_retry<F, Fut>(
        request_fn: F,
        service_name: &str,
        operation_name: &str,
    ) -> AppResult<reqwest::Response>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let config = RetryConfig::conservative();
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match request_fn().await {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::OK {
                        if attempt > 0 {
                            debug!(
                                "{} {} succeeded after {} retries",
                                service_name, operation_name, attempt
                            );
                        }
                        return Ok(response);
                    }

                    let error = Self::status_to_app_error(status, service_name);
                    if !Self::is_retryable_status(status) {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
                Err(e) => {
                    let error = AppError::from(e);
                    if matches!(error, AppError::DecodeError(_) | AppError::NotFound(_)) {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
            }

            if attempt < config.max_retries {
                let delay = config.calculate_delay(attempt);
                warn!(
                    "{} {} failed on attempt {} ({}), retrying in {:?}",
                    service_name,
                    operation_name,
                    attempt + 1,
                    last_error.as_ref().map(|e| e.to_string()).unwrap_or_default(),
                    delay
                );
                sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| AppError::NetworkError("All retries exhausted".to_string())))
    }

    /// Check if an HTTP status code indicates a retryable failure
    pub fn is_retryable_status(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR
                | StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
                | StatusCode::REQUEST_TIMEOUT
                | StatusCode::TOO_MANY_REQUESTS
        )
    }

    fn status_to_app_error(status: StatusCode, service_name: &str) -> AppError {
        match status {
            StatusCode::NOT_FOUND => AppError::NotFound("Remote resource not found".to_string()),
            _ if status.is_server_error() => {
                AppError::NetworkError(format!("{} server error: {}", service_name, status))
            }
            _ => AppError::NetworkError(format!(
                "Unexpected status code from {}: {}",
                service_name, status
            )),
        }
    }
}
