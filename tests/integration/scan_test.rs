// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::mock_engine::MockEngine;
use crate::helpers::{scan_config, shared, word_list_file};
use dirprobe::engines::reqwest_engine::ReqwestEngine;
use dirprobe::engines::traits::ProbeEngine;
use dirprobe::utils::errors::ScanError;
use dirprobe::workers::{CancellationController, WorkerManager};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_every_word_is_probed_exactly_once() {
    let words: Vec<String> = (0..200).map(|i| format!("word{}", i)).collect();
    let word_refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let file = word_list_file(&word_refs);

    let config = shared(scan_config(&["http://target.test"], file.path(), 8));
    let engine = Arc::new(MockEngine::always_ok());

    let results = WorkerManager::scan(config, engine.clone(), CancellationController::new())
        .await
        .unwrap();

    let calls = engine.calls();
    let unique: HashSet<&String> = calls.iter().collect();
    assert_eq!(calls.len(), 200);
    assert_eq!(unique.len(), 200);
    assert_eq!(results.get(200).unwrap().len(), 200);
    for word in &words {
        let url = format!("http://target.test/{}/", word);
        assert!(results.get(200).unwrap().contains_key(&url), "missing {}", url);
    }
}

#[tokio::test]
async fn test_mixed_outcomes_group_by_status() {
    let file = word_list_file(&["admin", "secret", "missing"]);
    let config = shared(scan_config(&["http://target.test"], file.path(), 3));
    let engine = Arc::new(MockEngine::with_statuses(&[
        ("/admin/", 200),
        ("/secret/", 403),
    ]));

    let results = WorkerManager::scan(config, engine.clone(), CancellationController::new())
        .await
        .unwrap();

    assert_eq!(engine.calls().len(), 3);
    assert_eq!(results.len(), 2);
    assert_eq!(
        results.status_codes().collect::<Vec<_>>(),
        vec![200, 403]
    );
    assert_eq!(
        results.get(200).unwrap()["http://target.test/admin/"],
        "http://target.test/admin/"
    );
    assert!(results.get(403).unwrap().contains_key("http://target.test/secret/"));
}

#[tokio::test]
async fn test_each_target_gets_its_own_queue() {
    let file = word_list_file(&["admin", "login"]);
    let mut config = scan_config(&["http://a.test", "http://b.test"], file.path(), 2);
    config.extensions = vec![".php".to_string()];
    let engine = Arc::new(MockEngine::always_ok());

    let results = WorkerManager::scan(shared(config), engine.clone(), CancellationController::new())
        .await
        .unwrap();

    // 2 targets x 2 words x (1 + 1 extension)
    assert_eq!(engine.calls().len(), 8);
    let ok = results.get(200).unwrap();
    for url in [
        "http://a.test/admin/",
        "http://a.test/admin.php",
        "http://b.test/login/",
        "http://b.test/login.php",
    ] {
        assert!(ok.contains_key(url), "missing {}", url);
    }
}

#[tokio::test]
async fn test_resume_token_applies_to_every_target() {
    let file = word_list_file(&["alpha", "bravo", "charlie"]);
    let mut config = scan_config(&["http://a.test", "http://b.test"], file.path(), 2);
    config.resume = Some("bravo".to_string());
    let engine = Arc::new(MockEngine::always_ok());

    let results = WorkerManager::scan(shared(config), engine.clone(), CancellationController::new())
        .await
        .unwrap();

    let mut calls = engine.calls();
    calls.sort();
    assert_eq!(calls, vec!["http://a.test/charlie/", "http://b.test/charlie/"]);
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_missing_word_list_starts_no_workers() {
    let dir = tempfile::tempdir().unwrap();
    let config = shared(scan_config(
        &["http://target.test"],
        &dir.path().join("absent.txt"),
        4,
    ));
    let engine = Arc::new(MockEngine::always_ok());

    let result = WorkerManager::scan(config, engine.clone(), CancellationController::new()).await;

    assert!(matches!(result, Err(ScanError::WordList { .. })));
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn test_scan_against_http_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/secret/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/old/"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/new/"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let file = word_list_file(&["admin", "secret", "old", "nothing"]);
    let config = shared(scan_config(&[server.uri().as_str()], file.path(), 2));
    let engine: Arc<dyn ProbeEngine> =
        Arc::new(ReqwestEngine::new("dirprobe-test", Duration::from_secs(5)).unwrap());

    let results = WorkerManager::scan(config, engine, CancellationController::new())
        .await
        .unwrap();

    let base = server.uri();
    let ok = results.get(200).unwrap();
    assert_eq!(ok[&format!("{}/admin/", base)], format!("{}/admin/", base));
    assert_eq!(ok[&format!("{}/old/", base)], format!("{}/new/", base));
    assert!(results.get(403).unwrap().contains_key(&format!("{}/secret/", base)));
    assert!(results.get(404).unwrap().contains_key(&format!("{}/nothing/", base)));
    assert_eq!(results.len(), 4);
}
