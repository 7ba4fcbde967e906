// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::mock_engine::MockEngine;
use crate::helpers::{scan_config, shared, word_list_file};
use dirprobe::infrastructure::storage;
use dirprobe::queue::word_list::build_queue;
use dirprobe::workers::{CancellationController, WorkerManager};
use std::sync::Arc;
use url::Url;

fn words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("w{}", i)).collect()
}

#[tokio::test]
async fn test_single_worker_stops_after_in_flight_word() {
    let words = words(20);
    let queue = Arc::new(build_queue(words.iter().map(String::as_str), None));

    let cancellation = CancellationController::new();
    let engine = Arc::new(MockEngine::always_ok().cancelling_after(3, cancellation.clone()));
    let file = word_list_file(&[]);
    let config = shared(scan_config(&["http://target.test"], file.path(), 1));

    let mut manager = WorkerManager::new(config, engine.clone(), cancellation);
    manager.start_workers(Url::parse("http://target.test").unwrap(), queue.clone());
    let results = manager.join().await;

    // The third word was already in flight when cancellation was requested
    assert_eq!(engine.calls().len(), 3);
    assert_eq!(results.len(), 3);
    assert_eq!(queue.len(), 17);
    for word in &words[..3] {
        let url = format!("http://target.test/{}/", word);
        assert!(results.get(200).unwrap().contains_key(&url));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_partial_results_cover_only_dequeued_words() {
    let words = words(500);
    let queue = Arc::new(build_queue(words.iter().map(String::as_str), None));

    let cancellation = CancellationController::new();
    let engine = Arc::new(MockEngine::always_ok().cancelling_after(10, cancellation.clone()));
    let file = word_list_file(&[]);
    let config = shared(scan_config(&["http://target.test"], file.path(), 4));

    let mut manager = WorkerManager::new(config, engine.clone(), cancellation);
    manager.start_workers(Url::parse("http://target.test").unwrap(), queue.clone());
    let results = manager.join().await;

    let remaining = queue.len();
    assert!(remaining > 0, "cancellation should leave words unprobed");
    assert_eq!(results.len(), words.len() - remaining);
    assert_eq!(engine.calls().len(), words.len() - remaining);
    assert_eq!(queue.unfinished(), remaining);
}

#[tokio::test]
async fn test_cancelled_scan_still_produces_artifact() {
    let file = word_list_file(&["a", "b", "c", "d", "e", "f"]);
    let config = shared(scan_config(&["http://target.test"], file.path(), 1));

    let cancellation = CancellationController::new();
    let engine = Arc::new(MockEngine::always_ok().cancelling_after(2, cancellation.clone()));

    let results = WorkerManager::scan(config, engine, cancellation).await.unwrap();
    assert_eq!(results.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    storage::write_results(&path, &results).await.unwrap();

    let restored = storage::read_results(&path).await.unwrap();
    assert_eq!(restored, results);
}

#[tokio::test]
async fn test_full_scan_leaves_nothing_unfinished() {
    let queue = Arc::new(build_queue(["admin", "login", "backup"], None));
    let file = word_list_file(&[]);
    let config = shared(scan_config(&["http://target.test"], file.path(), 2));

    let mut manager = WorkerManager::new(
        config,
        Arc::new(MockEngine::with_statuses(&[("/admin/", 200)])),
        CancellationController::new(),
    );
    manager.start_workers(Url::parse("http://target.test").unwrap(), queue.clone());
    let results = manager.join().await;

    assert!(queue.is_empty());
    assert_eq!(queue.unfinished(), 0);
    assert_eq!(results.len(), 1);
}
