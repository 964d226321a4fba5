use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::breed_key::BreedKey;

/// A breed/sub-breed key paired with its fetched image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedImage {
    pub key: BreedKey,
    pub url: String,
}

impl BreedImage {
    pub fn new(key: BreedKey, url: impl Into<String>) -> Self {
        Self {
            key,
            url: url.into(),
        }
    }
}

/// Consolidated outcome of one aggregation round for a selected breed.
///
/// Successful fetches land in the image map; fetches that failed are recorded
/// by key so the caller can see what was attempted. Populated incrementally
/// by the aggregator, handed out exactly once when every launched fetch has
/// resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationResult {
    breed: String,
    images: HashMap<BreedKey, String>,
    failed: Vec<BreedKey>,
}

impl AggregationResult {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
            images: HashMap::new(),
            failed: Vec::new(),
        }
    }

    pub(crate) fn record_success(&mut self, key: BreedKey, url: String) {
        self.images.insert(key, url);
    }

    pub(crate) fn record_failure(&mut self, key: BreedKey) {
        self.failed.push(key);
    }

    /// The randomly selected breed this round was run for.
    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn images(&self) -> &HashMap<BreedKey, String> {
        &self.images
    }

    pub fn failed(&self) -> &[BreedKey] {
        &self.failed
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Key-sorted view, convenient as display content.
    pub fn to_breed_images(&self) -> Vec<BreedImage> {
        let mut items: Vec<BreedImage> = self
            .images
            .iter()
            .map(|(key, url)| BreedImage::new(key.clone(), url.clone()))
            .collect();
        items.sort_by(|a, b| a.key.cmp(&b.key));
        items
    }
}
