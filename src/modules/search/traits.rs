use crate::modules::breed::domain::BreedImage;

/// Push interface the search controller publishes through. The controller
/// calls these from runtime worker tasks; implementations must be
/// non-blocking and marshal onto whatever single thread owns display state
/// (see `ChannelSink`).
pub trait ResultSink: Send + Sync {
    /// Replace the visible content with this session's accumulated results.
    fn display(&self, results: Vec<BreedImage>);

    /// Restore the unfiltered baseline captured at controller initialization.
    fn reset_to_baseline(&self, baseline: &[BreedImage]);
}
