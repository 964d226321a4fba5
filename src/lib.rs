pub mod modules;
pub mod shared;

// Re-exports for easy external access
pub use modules::breed::{
    AggregationResult, Breed, BreedApiClient, BreedImage, BreedImageAggregator, BreedKey,
    DogApiClient,
};
pub use modules::search::{
    BreedSearchController, ChannelSink, ResultSink, SearchPhase, SinkEvent,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;
