use crate::helpers::spawn_app;
use serde_json::{json, Value};
use wiremock::MockServer;

#[tokio::test]
async fn root_describes_the_service() {
    // Arrange
    let app = spawn_app(MockServer::start().await).await;

    // Act
    let response = app.get("/").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "running",
            "service": "BitScope API",
            "endpoints": ["/blocks", "/mempool", "/tx/:id"]
        })
    );
}

#[tokio::test]
async fn any_origin_is_allowed() {
    // Arrange
    let app = spawn_app(MockServer::start().await).await;

    // Act
    let response = app
        .api_client
        .get(&format!("{}/blocks", &app.address))
        .header("Origin", "https://example.com")
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn unknown_routes_return_404() {
    let app = spawn_app(MockServer::start().await).await;

    let response = app.get("/blocks/latest").await;

    assert_eq!(404, response.status().as_u16());
}
