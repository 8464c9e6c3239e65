//! Socket-level test: real listener, graceful shutdown, reqwest client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::net::TcpListener;

use trendify_api::store::{DocumentStore, MemoryStore};
use trendify_api::{HttpServer, Shutdown};

mod common;

#[tokio::test]
async fn test_serves_and_shuts_down() {
    let store = MemoryStore::new();
    let server = HttpServer::new(common::test_config(), Arc::new(store.clone()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();
    let base = format!("http://{}", addr);

    let created: Value = client
        .post(format!("{}/api/v1/products", base))
        .json(&common::hat())
        .send()
        .await
        .expect("server unreachable")
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let res = client
        .get(format!("{}/api/v1/products/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());

    store.close().await;
    assert!(store.ping().await.is_err());
}
