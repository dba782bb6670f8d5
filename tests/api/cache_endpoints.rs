use crate::helpers::{
    explorer_blocks, explorer_mempool, mount_explorer, spawn_app, spawn_app_with_interval,
};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn blocks_and_mempool_are_empty_before_the_first_refresh() {
    // Arrange
    let explorer_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(explorer_blocks(3))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&explorer_server)
        .await;
    let app = spawn_app(explorer_server).await;

    // Act
    let blocks = app.get("/blocks").await;
    let mempool = app.get("/mempool").await;

    // Assert
    assert_eq!(200, blocks.status().as_u16());
    assert_eq!(blocks.json::<Value>().await.unwrap(), json!([]));
    assert_eq!(200, mempool.status().as_u16());
    assert_eq!(mempool.json::<Value>().await.unwrap(), json!([]));
}

#[tokio::test]
async fn blocks_are_served_trimmed_and_projected() {
    // Arrange
    let explorer_server = MockServer::start().await;
    mount_explorer(&explorer_server, 20, 3).await;
    let app = spawn_app(explorer_server).await;
    app.wait_for_cache().await;

    // Act
    let response = app.get("/blocks").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let blocks: Vec<Value> = response.json().await.unwrap();
    assert_eq!(blocks.len(), 15);
    assert_eq!(
        blocks[0],
        json!({
            "id": format!("{:064x}", 900_000),
            "height": 900_000,
            "timestamp": 1_700_000_000,
            "tx_count": 3_000
        })
    );
    assert_eq!(blocks[14]["height"], json!(900_000 - 14));
}

#[tokio::test]
async fn mempool_is_served_trimmed_and_projected() {
    // Arrange
    let explorer_server = MockServer::start().await;
    mount_explorer(&explorer_server, 1, 25).await;
    let app = spawn_app(explorer_server).await;
    app.wait_for_cache().await;

    // Act
    let response = app.get("/mempool").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let mempool: Vec<Value> = response.json().await.unwrap();
    assert_eq!(mempool.len(), 10);
    assert_eq!(
        mempool[0],
        json!({ "txid": format!("{:064x}", 1), "fee": 2_000, "vsize": 141 })
    );
}

#[tokio::test]
async fn cache_endpoints_never_call_the_explorer() {
    // Arrange
    let explorer_server = MockServer::start().await;
    mount_explorer(&explorer_server, 5, 5).await;
    let app = spawn_app(explorer_server).await;
    app.wait_for_cache().await;
    let requests_after_refresh = app
        .explorer_server
        .received_requests()
        .await
        .unwrap()
        .len();

    // Act
    for _ in 0..5 {
        assert_eq!(200, app.get("/blocks").await.status().as_u16());
        assert_eq!(200, app.get("/mempool").await.status().as_u16());
    }

    // Assert
    let requests = app.explorer_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), requests_after_refresh);
}

#[tokio::test]
async fn unreachable_explorer_still_serves_empty_lists() {
    // Arrange
    let explorer_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&explorer_server)
        .await;
    let app = spawn_app(explorer_server).await;

    // Act
    let response = app.get("/blocks").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(response.json::<Value>().await.unwrap(), json!([]));
}

#[tokio::test]
async fn cache_is_refreshed_on_every_interval() {
    // Arrange
    let explorer_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(explorer_blocks(20)))
        .up_to_n_times(1)
        .mount(&explorer_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(explorer_blocks(2)))
        .mount(&explorer_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mempool/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(explorer_mempool(3)))
        .mount(&explorer_server)
        .await;

    // Act
    let app = spawn_app_with_interval(explorer_server, Duration::from_millis(200)).await;

    // Assert
    let mut sizes = Vec::new();
    for _ in 0..100 {
        let size = app.cache.snapshot().blocks.len();
        if sizes.last() != Some(&size) {
            sizes.push(size);
        }
        if size == 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    assert_eq!(sizes.last(), Some(&2));
    assert!(!sizes.contains(&17), "the cache must never merge refreshes");
}
