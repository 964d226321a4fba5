use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::modules::breed::domain::{BreedImage, BreedKey};
use crate::modules::breed::traits::BreedApiClient;
use crate::modules::search::domain::{SearchPhase, SearchSession};
use crate::modules::search::traits::ResultSink;
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info, log_warn};

const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Incremental breed search: debounces keystrokes, fans out image fetches
/// for matching breeds, and publishes each session's accumulating result
/// list to the sink.
///
/// Every `on_query_changed` call supersedes all prior work by bumping the
/// generation counter. The debounce token only stops a timer that has not
/// fired yet; the generation comparison at every publish point is what keeps
/// in-flight completions of older sessions away from display state.
pub struct BreedSearchController {
    client: Arc<dyn BreedApiClient>,
    sink: Arc<dyn ResultSink>,
    debounce: Duration,
    state: Arc<Mutex<ControllerState>>,
}

struct ControllerState {
    generation: u64,
    phase: SearchPhase,
    baseline: Vec<BreedImage>,
    pending: Option<CancellationToken>,
}

impl BreedSearchController {
    pub fn new(client: Arc<dyn BreedApiClient>, sink: Arc<dyn ResultSink>) -> Self {
        Self::with_debounce(client, sink, DEBOUNCE_DELAY)
    }

    pub fn with_debounce(
        client: Arc<dyn BreedApiClient>,
        sink: Arc<dyn ResultSink>,
        debounce: Duration,
    ) -> Self {
        Self {
            client,
            sink,
            debounce,
            state: Arc::new(Mutex::new(ControllerState {
                generation: 0,
                phase: SearchPhase::Idle,
                baseline: Vec::new(),
                pending: None,
            })),
        }
    }

    /// Store the unfiltered baseline content and display it. Called once by
    /// the host at startup.
    pub async fn initialize(&self, baseline: Vec<BreedImage>) {
        let mut state = self.state.lock().await;
        state.baseline = baseline.clone();
        self.sink.display(baseline);
    }

    pub async fn phase(&self) -> SearchPhase {
        self.state.lock().await.phase
    }

    /// Handle one user input event.
    pub async fn on_query_changed(&self, text: &str) {
        let mut state = self.state.lock().await;

        state.generation += 1;
        let generation = state.generation;
        if let Some(token) = state.pending.take() {
            token.cancel();
        }

        if text.is_empty() {
            log_debug!("Query cleared, restoring baseline of {} entries", state.baseline.len());
            state.phase = SearchPhase::Idle;
            self.sink.reset_to_baseline(&state.baseline);
            return;
        }

        state.phase = SearchPhase::Debouncing;
        let token = CancellationToken::new();
        state.pending = Some(token.clone());
        drop(state);

        let session = SearchSession::new(generation, text);
        let client = Arc::clone(&self.client);
        let sink = Arc::clone(&self.sink);
        let shared = Arc::clone(&self.state);
        let delay = self.debounce;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }
            Self::run_session(client, sink, shared, session).await;
        });
    }

    /// One debounced search round. Runs after the quiet period; bails out the
    /// moment its session is superseded.
    async fn run_session(
        client: Arc<dyn BreedApiClient>,
        sink: Arc<dyn ResultSink>,
        shared: Arc<Mutex<ControllerState>>,
        session: SearchSession,
    ) {
        {
            let mut state = shared.lock().await;
            if state.generation != session.generation() {
                return;
            }
            state.phase = SearchPhase::Fetching;
        }

        log_info!("Searching breeds for '{}'", session.query());

        let breeds = match client.list_breeds().await {
            Ok(breeds) => breeds,
            Err(e) => {
                log_warn!("Breed list fetch for '{}' failed: {}", session.query(), e);
                let mut state = shared.lock().await;
                if state.generation == session.generation() {
                    state.phase = SearchPhase::Idle;
                }
                return;
            }
        };

        let mut fetches: FuturesUnordered<BoxFuture<'static, (BreedKey, AppResult<String>)>> =
            FuturesUnordered::new();
        for breed in &breeds {
            if !session.matches(&breed.name) {
                continue;
            }
            let key = BreedKey::breed(&breed.name);
            let client = Arc::clone(&client);
            fetches.push(
                async move {
                    let result = client.fetch_random_image(&key).await;
                    (key, result)
                }
                .boxed(),
            );
        }

        log_debug!(
            "Session {} matched {} breeds for '{}'",
            session.generation(),
            fetches.len(),
            session.query()
        );

        // Session-local accumulator; the sink sees a snapshot per completion.
        let mut accumulated: Vec<BreedImage> = Vec::new();

        while let Some((key, result)) = fetches.next().await {
            match result {
                Ok(url) => {
                    let state = shared.lock().await;
                    if state.generation != session.generation() {
                        // Superseded mid-flight: computed and discarded.
                        log_debug!("Dropping stale result '{}' from session {}", key, session.generation());
                        return;
                    }
                    accumulated.push(BreedImage::new(key, url));
                    sink.display(accumulated.clone());
                }
                Err(e) => {
                    log_debug!("Image fetch for '{}' failed during search: {}", key, e);
                }
            }
        }

        let mut state = shared.lock().await;
        if state.generation == session.generation() {
            state.phase = SearchPhase::Idle;
            log_info!(
                "Search session {} for '{}' complete with {} results",
                session.generation(),
                session.query(),
                accumulated.len()
            );
        }
    }
}
