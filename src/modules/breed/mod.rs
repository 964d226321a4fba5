pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::BreedImageAggregator;
pub use domain::{AggregationResult, Breed, BreedImage, BreedKey};
pub use infrastructure::DogApiClient;
pub use traits::BreedApiClient;
