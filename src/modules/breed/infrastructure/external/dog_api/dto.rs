use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Response envelope shared by every Dog CEO endpoint. The `message` payload
/// shape varies by call: a breed to sub-breeds map for list-all, a string
/// array for sub-breed listing, a single URL string for random images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogApiEnvelope<T> {
    pub message: T,
    pub status: String,
}

impl<T> DogApiEnvelope<T> {
    /// Unwrap the payload, rejecting any envelope whose status is not
    /// `"success"`.
    pub fn into_message(self) -> AppResult<T> {
        if self.status == "success" {
            Ok(self.message)
        } else {
            Err(AppError::DecodeError(format!(
                "Dog API returned status '{}'",
                self.status
            )))
        }
    }
}
