use crate::modules::breed::domain::{Breed, BreedKey};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// The narrow seam between the aggregation/search engines and the remote
/// breed service. Every call resolves exactly once, success or failure; a
/// breed with zero sub-breeds is success with an empty list, not a failure.
#[async_trait]
pub trait BreedApiClient: Send + Sync {
    /// List every breed together with its sub-breeds.
    async fn list_breeds(&self) -> AppResult<Vec<Breed>>;

    /// List the sub-breeds of one breed (empty if none).
    async fn list_sub_breeds(&self, breed: &str) -> AppResult<Vec<String>>;

    /// Fetch one random image URL for a breed or breed/sub-breed pair.
    async fn fetch_random_image(&self, key: &BreedKey) -> AppResult<String>;
}
