use tokio::sync::mpsc;

use crate::log_warn;
use crate::modules::breed::domain::BreedImage;
use crate::modules::search::traits::ResultSink;

/// Display update handed across the channel to whatever single consumer owns
/// display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Display(Vec<BreedImage>),
    ResetToBaseline(Vec<BreedImage>),
}

/// `ResultSink` that forwards publishes over an unbounded channel. Sends
/// never block the publishing task; the receiving half decides where and how
/// updates are rendered.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<SinkEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SinkEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ResultSink for ChannelSink {
    fn display(&self, results: Vec<BreedImage>) {
        if self.tx.send(SinkEvent::Display(results)).is_err() {
            log_warn!("Display channel closed, dropping search results update");
        }
    }

    fn reset_to_baseline(&self, baseline: &[BreedImage]) {
        if self
            .tx
            .send(SinkEvent::ResetToBaseline(baseline.to_vec()))
            .is_err()
        {
            log_warn!("Display channel closed, dropping baseline reset");
        }
    }
}
