use std::collections::HashSet;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::modules::breed::domain::{AggregationResult, BreedKey};
use crate::modules::breed::traits::BreedApiClient;
use crate::shared::errors::{AppError, AppResult};

/// Outcome of one unit of work inside the fan-out. Every launched future
/// resolves to exactly one of these.
enum FetchOutcome {
    Image { key: BreedKey, result: AppResult<String> },
    SubBreeds(AppResult<Vec<String>>),
}

/// Fan-out/fan-in aggregator: picks one breed at random, then fetches one
/// image for the breed itself and one per sub-breed, all concurrently, and
/// returns a single consolidated result once every fetch has resolved.
pub struct BreedImageAggregator {
    client: Arc<dyn BreedApiClient>,
}

impl BreedImageAggregator {
    pub fn new(client: Arc<dyn BreedApiClient>) -> Self {
        Self { client }
    }

    /// Run one aggregation round.
    ///
    /// Only a failed or empty breed list is fatal. Individual image fetches
    /// that fail are recorded on the result and never abort their siblings.
    pub async fn random_breed_images(&self) -> AppResult<AggregationResult> {
        let breeds = self.client.list_breeds().await?;

        let selected = breeds
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| AppError::EmptyResult("Breed list was empty".to_string()))?;
        let breed_name = selected.name.clone();
        info!("Aggregating images for randomly selected breed '{}'", breed_name);

        // The wait-set grows while draining: the sub-breed list call pushes
        // one image fetch per sub-breed into the same set. The loop below
        // ends only when every launched future has resolved.
        let mut fetches: FuturesUnordered<BoxFuture<'static, FetchOutcome>> =
            FuturesUnordered::new();
        let mut requested: HashSet<BreedKey> = HashSet::new();

        let primary_key = BreedKey::breed(&breed_name);
        requested.insert(primary_key.clone());
        fetches.push(Self::image_fetch(Arc::clone(&self.client), primary_key));

        {
            let client = Arc::clone(&self.client);
            let breed = breed_name.clone();
            fetches.push(
                async move { FetchOutcome::SubBreeds(client.list_sub_breeds(&breed).await) }
                    .boxed(),
            );
        }

        let mut result = AggregationResult::new(&breed_name);

        while let Some(outcome) = fetches.next().await {
            match outcome {
                FetchOutcome::Image { key, result: Ok(url) } => {
                    debug!("Fetched image for '{}'", key);
                    result.record_success(key, url);
                }
                FetchOutcome::Image { key, result: Err(e) } => {
                    warn!("Image fetch for '{}' failed: {}", key, e);
                    result.record_failure(key);
                }
                FetchOutcome::SubBreeds(Ok(sub_breeds)) => {
                    debug!("Breed '{}' has {} sub-breeds", breed_name, sub_breeds.len());
                    for sub in sub_breeds {
                        let key = BreedKey::with_sub(&breed_name, &sub);
                        // Same breed/sub-breed pair requested twice gets one fetch.
                        if !requested.insert(key.clone()) {
                            continue;
                        }
                        fetches.push(Self::image_fetch(Arc::clone(&self.client), key));
                    }
                }
                FetchOutcome::SubBreeds(Err(e)) => {
                    warn!(
                        "Sub-breed list for '{}' failed, aggregating primary image only: {}",
                        breed_name, e
                    );
                }
            }
        }

        info!(
            "Aggregation for '{}' complete: {} images, {} failed fetches",
            breed_name,
            result.len(),
            result.failed().len()
        );
        Ok(result)
    }

    fn image_fetch(
        client: Arc<dyn BreedApiClient>,
        key: BreedKey,
    ) -> BoxFuture<'static, FetchOutcome> {
        async move {
            let result = client.fetch_random_image(&key).await;
            FetchOutcome::Image { key, result }
        }
        .boxed()
    }
}
