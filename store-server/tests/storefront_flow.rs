//! End-to-end tests against the real router on an in-memory database.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use store_server::auth::JwtConfig;
use store_server::{Config, ServerState, build_router};

fn test_config() -> Config {
    Config {
        work_dir: "./unused-in-tests".to_string(),
        http_port: 0,
        delivery_fee: 8.0,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hs256".to_string(),
            expiration_minutes: 60,
            issuer: "store-server".to_string(),
        },
        admin_email: "admin@store.local".to_string(),
        admin_password: "test-admin-password".to_string(),
        environment: "development".to_string(),
        log_level: "info".to_string(),
        log_dir: None,
    }
}

async fn test_app() -> Router {
    let config = test_config();
    let state = ServerState::initialize_in_memory(&config)
        .await
        .expect("state should initialize");
    build_router(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn admin_token(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({
            "email": "admin@store.local",
            "password": "test-admin-password",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["data"]["token"].as_str().unwrap().to_string()
}

async fn create_product(app: &Router, token: &str, product: Value) -> Value {
    let (status, body) = send(app, "POST", "/api/products", Some(token), Some(product)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["data"].clone()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn login_rejects_wrong_password_with_a_uniform_message() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@store.local", "password": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let wrong_password = body["message"].clone();

    let (_, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "ghost@store.local", "password": "nope"})),
    )
    .await;
    assert_eq!(body["message"], wrong_password);
}

#[tokio::test]
async fn catalog_writes_require_a_token() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        None,
        Some(json!({"title": "Tapis", "price": 100.0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/orders", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn listing_sorts_filters_and_pages() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    create_product(
        &app,
        &token,
        json!({"title": "Miroir doré", "price": 50.0, "promo": 0.0, "category": "Décoration"}),
    )
    .await;
    create_product(
        &app,
        &token,
        json!({"title": "Tapis berbère", "price": 40.0, "promo": 30.0, "category": "Décoration"}),
    )
    .await;
    create_product(
        &app,
        &token,
        json!({"title": "Service à café", "price": 80.0, "category": "Cuisine"}),
    )
    .await;

    // price_asc uses the effective price: promo 30 sorts below base 50
    let (status, body) = send(&app, "GET", "/api/products?sort=price_asc", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["title"], "Tapis berbère");
    assert_eq!(items[2]["title"], "Service à café");
    assert_eq!(body["data"]["page_count"], 1);

    // an unknown sort key is the identity (catalog order), not an error
    let (status, _) = send(&app, "GET", "/api/products?sort=by_magic", None, None).await;
    assert_eq!(status, StatusCode::OK);

    // category filter via slug
    let (_, body) = send(&app, "GET", "/api/products?category=Cuisine", None, None).await;
    assert_eq!(body["data"]["total"], 1);

    // promo grid keeps only active promos (promo 0 is not a promotion)
    let (_, body) = send(&app, "GET", "/api/products?promo=true", None, None).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], "Tapis berbère");

    // title search
    let (_, body) = send(&app, "GET", "/api/products?q=tapis", None, None).await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn slug_lookup_finds_the_detail_page() {
    let app = test_app().await;
    let token = admin_token(&app).await;
    create_product(&app, &token, json!({"title": "Grand Tapis Berbère", "price": 120.0})).await;

    let (status, body) = send(
        &app,
        "GET",
        "/api/products/by-slug/grand-tapis-berb%C3%A8re",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Grand Tapis Berbère");

    let (status, _) = send(&app, "GET", "/api/products/by-slug/introuvable", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_crud_and_slug_lookup() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(&token),
        Some(json!({"name": "Arts de la table", "subcategories": ["Assiettes", "Verres"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = send(&app, "GET", "/api/categories/by-slug/arts-de-la-table", None, None).await;
    assert_eq!(body["data"]["subcategories"].as_array().unwrap().len(), 2);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/categories/{id}"),
        Some(&token),
        Some(json!({"subcategories": ["Assiettes", "Verres", "Plateaux"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "update failed: {body}");
    assert_eq!(body["data"]["subcategories"].as_array().unwrap().len(), 3);

    let (status, _) = send(&app, "DELETE", &format!("/api/categories/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/api/categories", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn cart_gate_merge_and_edits() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    let product = create_product(
        &app,
        &token,
        json!({"title": "Coussin", "price": 25.0, "colors": ["Bleu", "Rouge"]}),
    )
    .await;
    let product_id = product["id"].as_str().unwrap().to_string();

    send(
        &app,
        "POST",
        "/api/customers",
        None,
        Some(json!({"name": "Amina Ben Salah", "email": "amina@example.tn"})),
    )
    .await;

    // variant gate: no color, no change
    let (status, body) = send(
        &app,
        "POST",
        "/api/cart/amina@example.tn/items",
        None,
        Some(json!({"product_id": product_id})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("couleur"));

    let (_, body) = send(&app, "GET", "/api/cart/amina@example.tn", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // add Bleu, then Rouge: one line, quantity 2, first color kept
    for color in ["Bleu", "Rouge"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/cart/amina@example.tn/items",
            None,
            Some(json!({"product_id": product_id, "selected_color": color})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, body) = send(&app, "GET", "/api/cart/amina@example.tn", None, None).await;
    let lines = body["data"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 2);
    assert_eq!(lines[0]["selected_color"], "Bleu");

    // quantity below 1 is ignored
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/cart/amina@example.tn/items/{product_id}"),
        None,
        Some(json!({"quantity": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["quantity"], 2);

    let (_, body) = send(
        &app,
        "PUT",
        &format!("/api/cart/amina@example.tn/items/{product_id}"),
        None,
        Some(json!({"quantity": 5})),
    )
    .await;
    assert_eq!(body["data"][0]["quantity"], 5);

    // removal empties the cart
    let (_, body) = send(
        &app,
        "DELETE",
        &format!("/api/cart/amina@example.tn/items/{product_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn importing_a_local_cart_sums_quantities() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    let product = create_product(&app, &token, json!({"title": "Miroir", "price": 60.0})).await;
    let product_id = product["id"].as_str().unwrap().to_string();

    send(
        &app,
        "POST",
        "/api/customers",
        None,
        Some(json!({"name": "Karim Haddad", "email": "karim@example.tn"})),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/cart/karim@example.tn/items",
        None,
        Some(json!({"product_id": product_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // the browser-local cart held 3 more of the same product
    let (status, body) = send(
        &app,
        "POST",
        "/api/cart/karim@example.tn/import",
        None,
        Some(json!({
            "lines": [{
                "product": product_id,
                "title": "Miroir",
                "price": 60.0,
                "promo": null,
                "image_url": null,
                "quantity": 3,
                "selected_color": null,
            }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "import failed: {body}");
    let lines = body["data"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 4);
}

#[tokio::test]
async fn checkout_creates_the_order_and_clears_the_cart() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    let product = create_product(&app, &token, json!({"title": "Vase", "price": 10.0})).await;
    let product_id = product["id"].as_str().unwrap().to_string();

    send(
        &app,
        "POST",
        "/api/customers",
        None,
        Some(json!({"name": "Leila Trabelsi", "email": "leila@example.tn"})),
    )
    .await;
    for _ in 0..2 {
        send(
            &app,
            "POST",
            "/api/cart/leila@example.tn/items",
            None,
            Some(json!({"product_id": product_id})),
        )
        .await;
    }

    // missing contact fields are rejected with the form message
    let (status, body) = send(
        &app,
        "POST",
        "/api/checkout",
        None,
        Some(json!({"name": "", "phone": "", "address": "", "email": "leila@example.tn"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Tous les champs sont obligatoires.");

    let (status, body) = send(
        &app,
        "POST",
        "/api/checkout",
        None,
        Some(json!({
            "name": "Leila Trabelsi",
            "phone": "+216 20 123 456",
            "address": "12 avenue Habib Bourguiba, Tunis",
            "email": "leila@example.tn",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "checkout failed: {body}");
    assert_eq!(body["data"]["subtotal"], 20.0);
    assert_eq!(body["data"]["delivery_fee"], 8.0);
    assert_eq!(body["data"]["total_price"], 28.0);

    // the account cart is cleared wholesale
    let (_, body) = send(&app, "GET", "/api/cart/leila@example.tn", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // sales moved by the quantity sold
    let (_, body) = send(&app, "GET", &format!("/api/products/{product_id}"), None, None).await;
    assert_eq!(body["data"]["sales"], 2);

    // the console sees the order
    let (status, body) = send(&app, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["name"], "Leila Trabelsi");
    assert_eq!(orders[0]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn anonymous_checkout_uses_the_posted_lines() {
    let app = test_app().await;
    let token = admin_token(&app).await;
    let product = create_product(&app, &token, json!({"title": "Plateau", "price": 5.0})).await;
    let product_id = product["id"].as_str().unwrap().to_string();

    // an empty cart cannot be confirmed
    let (status, body) = send(
        &app,
        "POST",
        "/api/checkout",
        None,
        Some(json!({"name": "A", "phone": "1", "address": "Tunis"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Votre panier est vide.");

    let (status, body) = send(
        &app,
        "POST",
        "/api/checkout",
        None,
        Some(json!({
            "name": "Sami",
            "phone": "+216 98 000 111",
            "address": "Sfax",
            "lines": [{
                "product": product_id,
                "title": "Plateau",
                "price": 5.0,
                "promo": null,
                "image_url": null,
                "quantity": 1,
                "selected_color": null,
            }],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "checkout failed: {body}");
    assert_eq!(body["data"]["total_price"], 13.0);
}

#[tokio::test]
async fn testimonials_are_admin_managed() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    // stars outside 1..=5 are rejected
    let (status, _) = send(
        &app,
        "POST",
        "/api/testimonials",
        Some(&token),
        Some(json!({"name": "Noura", "stars": 9, "feedback": "Magnifique!"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/api/testimonials",
        Some(&token),
        Some(json!({"name": "Noura", "stars": 5, "feedback": "Magnifique!"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // the storefront reads without a token
    let (status, body) = send(&app, "GET", "/api/testimonials", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/testimonials/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = test_app().await;

    let payload = json!({"name": "Yassine", "email": "yassine@example.tn"});
    let (status, _) = send(&app, "POST", "/api/customers", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", "/api/customers", None, Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}
