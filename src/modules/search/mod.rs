pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::BreedSearchController;
pub use domain::{SearchPhase, SearchSession};
pub use infrastructure::{ChannelSink, SinkEvent};
pub use traits::ResultSink;
