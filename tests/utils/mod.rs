#![allow(dead_code)]
//! Shared test doubles: a configurable stand-in for the remote breed API and
//! a sink that records everything published to it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use inu::{AppResult, Breed, BreedApiClient, BreedImage, BreedKey, ResultSink};

pub struct StubBreedApi {
    breeds: AppResult<Vec<Breed>>,
    sub_breeds: HashMap<String, AppResult<Vec<String>>>,
    images: HashMap<String, AppResult<String>>,
    image_delays: HashMap<String, Duration>,
    pub list_calls: AtomicUsize,
    pub sub_list_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
}

impl StubBreedApi {
    pub fn new(breeds: Vec<Breed>) -> Self {
        Self {
            breeds: Ok(breeds),
            sub_breeds: HashMap::new(),
            images: HashMap::new(),
            image_delays: HashMap::new(),
            list_calls: AtomicUsize::new(0),
            sub_list_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_list(error: inu::AppError) -> Self {
        let mut stub = Self::new(Vec::new());
        stub.breeds = Err(error);
        stub
    }

    pub fn with_sub_breeds(mut self, breed: &str, result: AppResult<Vec<String>>) -> Self {
        self.sub_breeds.insert(breed.to_string(), result);
        self
    }

    pub fn with_image(mut self, key: &BreedKey, result: AppResult<String>) -> Self {
        self.images.insert(key.to_string(), result);
        self
    }

    pub fn with_image_delay(mut self, key: &BreedKey, delay: Duration) -> Self {
        self.image_delays.insert(key.to_string(), delay);
        self
    }

    pub fn default_url(key: &BreedKey) -> String {
        format!(
            "https://images.dog.ceo/breeds/{}/1.jpg",
            key.to_string().replace(' ', "-")
        )
    }
}

#[async_trait]
impl BreedApiClient for StubBreedApi {
    async fn list_breeds(&self) -> AppResult<Vec<Breed>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.breeds.clone()
    }

    async fn list_sub_breeds(&self, breed: &str) -> AppResult<Vec<String>> {
        self.sub_list_calls.fetch_add(1, Ordering::SeqCst);
        self.sub_breeds
            .get(breed)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_random_image(&self, key: &BreedKey) -> AppResult<String> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.image_delays.get(&key.to_string()) {
            tokio::time::sleep(*delay).await;
        }
        self.images
            .get(&key.to_string())
            .cloned()
            .unwrap_or_else(|| Ok(Self::default_url(key)))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    displays: Mutex<Vec<Vec<BreedImage>>>,
    resets: Mutex<Vec<Vec<BreedImage>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displays(&self) -> Vec<Vec<BreedImage>> {
        self.displays.lock().unwrap().clone()
    }

    pub fn resets(&self) -> Vec<Vec<BreedImage>> {
        self.resets.lock().unwrap().clone()
    }

    pub fn last_display(&self) -> Option<Vec<BreedImage>> {
        self.displays.lock().unwrap().last().cloned()
    }
}

impl ResultSink for RecordingSink {
    fn display(&self, results: Vec<BreedImage>) {
        self.displays.lock().unwrap().push(results);
    }

    fn reset_to_baseline(&self, baseline: &[BreedImage]) {
        self.resets.lock().unwrap().push(baseline.to_vec());
    }
}
