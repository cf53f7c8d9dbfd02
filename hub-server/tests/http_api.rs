//! HTTP surface tests: requests go through the full middleware stack via
//! `tower::ServiceExt::oneshot`, no socket involved.

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use hub_server::api::build_app;
use hub_server::{Config, ServerState};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app(seed: bool) -> axum::Router {
    let mut config = Config::with_overrides(0);
    config.seed_demo_data = seed;
    let state = ServerState::initialize(&config).await;
    build_app().with_state(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app(false).await.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_order_wire_format() {
    let app = app(false).await;
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({
                "storeName": "Downtown Store",
                "priority": "high",
                "items": [
                    { "productId": "1", "productName": "Bê bò bistech đặc biệt",
                      "quantity": 10, "unit": "portion", "price": 150000 },
                    { "productId": "2", "productName": "Sốt tiêu đen",
                      "quantity": 5, "unit": "lit", "price": 120000 }
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "submitted");
    assert_eq!(body["totalAmount"], json!(2_100_000.0));
    assert_eq!(body["itemsCount"], 2);
    let id = body["id"].as_str().unwrap().to_string();

    // The new order leads the list
    let listed = body_json(app.oneshot(get("/api/orders")).await.unwrap()).await;
    assert_eq!(listed[0]["id"], id.as_str());
}

#[tokio::test]
async fn test_create_order_rejects_empty_items() {
    let response = app(false)
        .await
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({ "storeName": "Downtown Store", "items": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_ne!(body["code"], json!(0));
    assert!(body["details"]["items"].is_array());
}

#[tokio::test]
async fn test_unknown_order_is_404_with_domain_code() {
    let response = app(false)
        .await
        .oneshot(get("/api/orders/ORD-0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], json!(4001));
}

#[tokio::test]
async fn test_status_filter_query() {
    let app = app(true).await;
    let submitted = body_json(
        app.clone()
            .oneshot(get("/api/orders?status=submitted"))
            .await
            .unwrap(),
    )
    .await;
    assert!(!submitted.as_array().unwrap().is_empty());

    let delivered = body_json(
        app.oneshot(get("/api/orders?status=delivered")).await.unwrap(),
    )
    .await;
    assert!(delivered.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_task_update_syncs_order_over_http() {
    let app = app(false).await;
    let order = body_json(
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/orders",
                json!({
                    "storeName": "Downtown Store",
                    "items": [{ "productId": "1", "productName": "Beef",
                                "quantity": 1, "unit": "kg", "price": 10 }]
                }),
            ))
            .await
            .unwrap(),
    )
    .await;
    let order_id = order["id"].as_str().unwrap();

    let tasks = body_json(
        app.clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/kitchen/tasks/from-order/{order_id}"),
                json!([{ "name": "Beef", "quantity": 1 }]),
            ))
            .await
            .unwrap(),
    )
    .await;
    let task_id = tasks[0]["id"].as_str().unwrap();
    assert_eq!(tasks[0]["assignedTo"], "Unassigned");

    let task = body_json(
        app.clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/kitchen/tasks/{task_id}/status"),
                json!({ "status": "completed" }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(task["status"], "completed");

    let order = body_json(
        app.oneshot(get(&format!("/api/orders/{order_id}")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(order["status"], "produced");
}

#[tokio::test]
async fn test_inventory_alerts_and_adjustment() {
    let app = app(true).await;

    // Seeded dataset has no low-stock rows
    let alerts = body_json(app.clone().oneshot(get("/api/inventory/alerts")).await.unwrap()).await;
    assert!(alerts.as_array().unwrap().is_empty());

    // Draw INV-002 below its minimum
    let item = body_json(
        app.clone()
            .oneshot(json_request(
                "PUT",
                "/api/inventory/INV-002",
                json!({ "quantity": 3, "reason": "Production run" }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(item["quantity"], json!(3.0));
    assert_eq!(item["type"], "material");

    let alerts = body_json(app.clone().oneshot(get("/api/inventory/alerts")).await.unwrap()).await;
    assert_eq!(alerts.as_array().unwrap().len(), 1);
    assert_eq!(alerts[0]["id"], "INV-002");

    // Location filter
    let kitchen = body_json(
        app.oneshot(get("/api/inventory?location=kitchen")).await.unwrap(),
    )
    .await;
    assert_eq!(kitchen.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_invoice_status_update() {
    let app = app(true).await;
    let invoice = body_json(
        app.clone()
            .oneshot(json_request(
                "PUT",
                "/api/invoices/INV-2024-002/status",
                json!({ "status": "paid" }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(invoice["status"], "paid");

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/invoices/INV-0/status",
            json!({ "status": "paid" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], json!(8001));
}

#[tokio::test]
async fn test_catalog_reads_from_seed() {
    let app = app(true).await;

    let products = body_json(app.clone().oneshot(get("/api/products")).await.unwrap()).await;
    assert_eq!(products.as_array().unwrap().len(), 5);
    assert_eq!(products[0]["sku"], "BS-001");
    assert_eq!(products[0]["status"], "active");

    let store = body_json(app.clone().oneshot(get("/api/stores/2")).await.unwrap()).await;
    assert_eq!(store["name"], "Uptown Branch");
    assert_eq!(store["inventoryStatus"], "warning");

    let materials = body_json(app.clone().oneshot(get("/api/materials")).await.unwrap()).await;
    assert_eq!(materials.as_array().unwrap().len(), 4);
    // expiryDate is omitted when the material carries none
    assert_eq!(materials[0]["expiryDate"], "2023-11-20");
    assert!(materials[1].get("expiryDate").is_none());

    let response = app.oneshot(get("/api/stores/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], json!(3001));
}

#[tokio::test]
async fn test_recipe_lookup_by_product() {
    let app = app(true).await;

    let recipe = body_json(
        app.clone()
            .oneshot(get("/api/recipes/by-product/1"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(recipe["id"], "REC-001");
    assert_eq!(recipe["yield"], json!(1.0));
    assert_eq!(recipe["items"].as_array().unwrap().len(), 3);

    // Products without a recipe report the catalog domain code
    let response = app.oneshot(get("/api/recipes/by-product/5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], json!(3004));
}

#[tokio::test]
async fn test_dashboard_stats_from_seed() {
    let stats = body_json(
        app(true)
            .await
            .oneshot(get("/api/dashboard/stats"))
            .await
            .unwrap(),
    )
    .await;
    // Seed: 1 submitted order, 3 open tasks, 1 in-transit shipment, 0 alerts
    assert_eq!(stats["pendingOrders"], 1);
    assert_eq!(stats["openTasks"], 3);
    assert_eq!(stats["shipmentsInTransit"], 1);
    assert_eq!(stats["lowStockItems"], 0);
}
