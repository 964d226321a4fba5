mod aggregation_result;
mod breed_key;

pub use aggregation_result::{AggregationResult, BreedImage};
pub use breed_key::BreedKey;
