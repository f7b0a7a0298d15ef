use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use pushkind_pim::routes;

mod common;

macro_rules! app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn category_lifecycle_over_http() {
    let test_db = common::TestDb::new("api_category_lifecycle.db");
    let repo = test_db.repo();
    let admin = common::admin(&repo);
    let app = app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(("X-User-Id", admin.id.to_string()))
        .set_json(json!({"name": "Laptops"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["slug"], "laptops");
    let id = body["data"]["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri("/api/v1/categories/slug/laptops")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["id"], id);

    let req = test::TestRequest::get()
        .uri("/api/v1/categories?limit=5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["meta"]["limit"], 5);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/categories/{id}"))
        .insert_header(("X-User-Id", admin.id.to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn writes_without_actor_are_unauthorized() {
    let test_db = common::TestDb::new("api_writes_without_actor.db");
    let app = app!(test_db.repo());

    let req = test::TestRequest::post()
        .uri("/api/v1/categories")
        .set_json(json!({"name": "Laptops"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn typed_attribute_values_over_http() {
    let test_db = common::TestDb::new("api_typed_attribute_values.db");
    let repo = test_db.repo();
    let admin = common::admin(&repo);
    let actor = ("X-User-Id", admin.id.to_string());
    let app = app!(repo);

    let post = |uri: &str, body: Value| {
        test::TestRequest::post()
            .uri(uri)
            .insert_header(actor.clone())
            .set_json(body)
            .to_request()
    };

    let body: Value =
        test::call_and_read_body_json(&app, post("/api/v1/categories", json!({"name": "Laptops"})))
            .await;
    let category_id = body["data"]["id"].clone();

    let body: Value = test::call_and_read_body_json(
        &app,
        post(
            "/api/v1/products",
            json!({"name": "Laptop Pro", "category_id": category_id}),
        ),
    )
    .await;
    let product_id = body["data"]["id"].as_i64().expect("product id");

    let body: Value = test::call_and_read_body_json(
        &app,
        post(
            &format!("/api/v1/products/{product_id}/skus"),
            json!({"name": "Laptop Pro 16GB", "sku_number": "LP-16", "price": 1499.99}),
        ),
    )
    .await;
    assert_eq!(body["data"]["price_cents"], 149_999);
    let sku_id = body["data"]["id"].as_i64().expect("sku id");

    let body: Value = test::call_and_read_body_json(
        &app,
        post(
            "/api/v1/attributes",
            json!({"name": "Memory", "code": "memory", "data_type": "NUMBER", "uom": "GB"}),
        ),
    )
    .await;
    let attribute_id = body["data"]["id"].clone();

    let resp = test::call_service(
        &app,
        post(
            &format!("/api/v1/skus/{sku_id}/attributes"),
            json!({"attribute_id": attribute_id, "value": "lots"}),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let resp = test::call_service(
        &app,
        post(
            &format!("/api/v1/skus/{sku_id}/attributes"),
            json!({"attribute_id": attribute_id, "value": 16}),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/skus/{sku_id}/attributes"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["display_value"], "16 GB");
    assert_eq!(body["data"][0]["attribute_code"], "memory");
}

#[actix_web::test]
async fn malformed_json_uses_error_envelope() {
    let test_db = common::TestDb::new("api_malformed_json.db");
    let repo = test_db.repo();
    let admin = common::admin(&repo);
    let app = app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(("X-User-Id", admin.id.to_string()))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_client_error());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
