//! Incremental search controller tests
//!
//! Paused-clock tests for debounce collapsing, session supersession, and
//! baseline restoration. With the clock paused, tokio advances time only
//! when every task is idle, which makes the interleavings deterministic.

mod utils;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use inu::{AppError, Breed, BreedImage, BreedKey, BreedSearchController, SearchPhase};
use utils::{RecordingSink, StubBreedApi};

fn breeds() -> Vec<Breed> {
    vec![
        Breed::new("affenpinscher", vec![]),
        Breed::new("akita", vec![]),
        Breed::new("boxer", vec![]),
    ]
}

fn baseline() -> Vec<BreedImage> {
    vec![
        BreedImage::new(BreedKey::breed("boxer"), "https://images.dog.ceo/breeds/boxer/1.jpg"),
        BreedImage::new(BreedKey::breed("akita"), "https://images.dog.ceo/breeds/akita/1.jpg"),
    ]
}

#[tokio::test(start_paused = true)]
async fn test_rapid_typing_collapses_to_one_fetch_round() {
    let api = Arc::new(StubBreedApi::new(breeds()));
    let sink = Arc::new(RecordingSink::new());
    let controller = BreedSearchController::new(api.clone(), sink.clone());

    controller.on_query_changed("a").await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    controller.on_query_changed("ak").await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    controller.on_query_changed("aki").await;

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    let last = sink.last_display().expect("final query must publish");
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].key, BreedKey::breed("akita"));
}

#[tokio::test(start_paused = true)]
async fn test_stale_session_cannot_overwrite_newer_results() {
    // First session's only match resolves long after the second session.
    let api = Arc::new(
        StubBreedApi::new(breeds())
            .with_image_delay(&BreedKey::breed("affenpinscher"), Duration::from_secs(3)),
    );
    let sink = Arc::new(RecordingSink::new());
    let controller = BreedSearchController::new(api.clone(), sink.clone());

    controller.on_query_changed("af").await;
    tokio::time::sleep(Duration::from_millis(600)).await;

    controller.on_query_changed("aki").await;
    tokio::time::sleep(Duration::from_secs(5)).await;

    let displays = sink.displays();
    assert!(
        displays
            .iter()
            .flatten()
            .all(|image| image.key != BreedKey::breed("affenpinscher")),
        "stale completion must never reach the sink"
    );
    let last = sink.last_display().expect("newer session must publish");
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].key, BreedKey::breed("akita"));
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_clearing_query_restores_exact_baseline() {
    let api = Arc::new(StubBreedApi::new(breeds()));
    let sink = Arc::new(RecordingSink::new());
    let controller = BreedSearchController::new(api.clone(), sink.clone());

    controller.initialize(baseline()).await;
    controller.on_query_changed("aki").await;
    tokio::time::sleep(Duration::from_secs(1)).await;

    let list_calls_before_reset = api.list_calls.load(Ordering::SeqCst);
    controller.on_query_changed("").await;

    assert_eq!(sink.resets(), vec![baseline()]);
    assert_eq!(controller.phase().await, SearchPhase::Idle);
    assert_eq!(api.list_calls.load(Ordering::SeqCst), list_calls_before_reset);
}

#[tokio::test(start_paused = true)]
async fn test_results_are_published_incrementally() {
    // Two matches, the second delayed, so the sink sees a growing list.
    let api = Arc::new(
        StubBreedApi::new(breeds())
            .with_image_delay(&BreedKey::breed("akita"), Duration::from_millis(200)),
    );
    let sink = Arc::new(RecordingSink::new());
    let controller = BreedSearchController::new(api.clone(), sink.clone());

    controller.on_query_changed("a").await;
    tokio::time::sleep(Duration::from_secs(2)).await;

    let displays = sink.displays();
    assert_eq!(displays.len(), 2);
    assert_eq!(displays[0].len(), 1);
    assert_eq!(displays[0][0].key, BreedKey::breed("affenpinscher"));
    assert_eq!(displays[1].len(), 2);
    assert_eq!(displays[1][1].key, BreedKey::breed("akita"));
}

#[tokio::test(start_paused = true)]
async fn test_phase_transitions_across_one_session() {
    let api = Arc::new(
        StubBreedApi::new(breeds())
            .with_image_delay(&BreedKey::breed("akita"), Duration::from_secs(1)),
    );
    let sink = Arc::new(RecordingSink::new());
    let controller = BreedSearchController::new(api, sink);

    assert_eq!(controller.phase().await, SearchPhase::Idle);

    controller.on_query_changed("aki").await;
    assert_eq!(controller.phase().await, SearchPhase::Debouncing);

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(controller.phase().await, SearchPhase::Fetching);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(controller.phase().await, SearchPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_breed_list_failure_ends_session_without_display() {
    let api = Arc::new(StubBreedApi::failing_list(AppError::NetworkError(
        "offline".to_string(),
    )));
    let sink = Arc::new(RecordingSink::new());
    let controller = BreedSearchController::new(api, sink.clone());

    controller.on_query_changed("aki").await;
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(sink.displays().is_empty());
    assert!(sink.resets().is_empty());
    assert_eq!(controller.phase().await, SearchPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_failed_image_fetches_are_omitted_from_results() {
    let api = Arc::new(StubBreedApi::new(breeds()).with_image(
        &BreedKey::breed("affenpinscher"),
        Err(AppError::EmptyResult("no image URL".to_string())),
    ));
    let sink = Arc::new(RecordingSink::new());
    let controller = BreedSearchController::new(api, sink.clone());

    controller.on_query_changed("a").await;
    tokio::time::sleep(Duration::from_secs(2)).await;

    let last = sink.last_display().expect("surviving match must publish");
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].key, BreedKey::breed("akita"));
}
