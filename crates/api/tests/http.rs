use api::{handler::AppRouter, state::AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::{Value, json};
use shared::config::{Config, ConnectionManager};
use tower::ServiceExt;

async fn app() -> Router {
    let pool = ConnectionManager::in_memory().await.unwrap();
    ConnectionManager::run_migrations(&pool).await.unwrap();

    let config = Config {
        database_url: "sqlite::memory:".into(),
        jwt_secret: "http-test-secret".into(),
        run_migrations: true,
        port: 0,
        bcrypt_cost: 4,
        access_token_ttl_minutes: 60,
    };

    let state = AppState::new(pool, &config).await.unwrap();
    AppRouter::build(state)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={username}&password={password}")))
        .unwrap()
}

/// Registers and logs in a fresh identity, returning its bearer token.
async fn token(app: &Router) -> String {
    let response = send(
        app,
        json_request(
            "POST",
            "/auth/register",
            None,
            json!({"nombre": "Ana Perez", "email": "ana@example.com", "passwd": "s3cret-pass"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(app, login_request("ana@example.com", "s3cret-pass")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["token_type"], "bearer");
    body["access_token"].as_str().unwrap().to_string()
}

async fn create_product(app: &Router, token: &str, stock: i64) -> i64 {
    let response = send(
        app,
        json_request(
            "POST",
            "/productos",
            Some(token),
            json!({"producto": "Martillo", "precio_compra": 12.5, "precio_venta": 18.0, "stock": stock}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_client(app: &Router, token: &str) -> i64 {
    let response = send(
        app,
        json_request(
            "POST",
            "/clientes",
            Some(token),
            json!({"nombre": "Ferreteria Central", "nit": "900123456"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn register_twice_conflicts() {
    let app = app().await;
    let body = json!({"nombre": "Ana Perez", "email": "dup@example.com", "passwd": "s3cret-pass"});

    let first = send(&app, json_request("POST", "/auth/register", None, body.clone())).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = json_body(first).await;
    assert_eq!(first["status"], "success");
    assert_eq!(first["data"]["email"], "dup@example.com");
    assert!(first["data"].get("password_hash").is_none());

    let second = send(&app, json_request("POST", "/auth/register", None, body)).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let second = json_body(second).await;
    assert_eq!(second["status"], "error");
}

#[tokio::test]
async fn bad_login_is_unauthorized_with_a_generic_message() {
    let app = app().await;
    token(&app).await;

    let wrong = send(&app, login_request("ana@example.com", "nope")).await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong = json_body(wrong).await;

    let unknown = send(&app, login_request("ghost@example.com", "s3cret-pass")).await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown = json_body(unknown).await;

    assert_eq!(wrong["message"], "Invalid credentials");
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn malformed_login_form_is_a_bad_request() {
    let app = app().await;

    let response = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("username=ana@example.com"))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_requires_a_valid_token() {
    let app = app().await;
    let token = token(&app).await;

    let anonymous = send(&app, get("/auth/me", None)).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        anonymous.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );

    let forged = send(&app, get("/auth/me", Some("forged.token.value"))).await;
    assert_eq!(forged.status(), StatusCode::UNAUTHORIZED);

    let me = send(&app, get("/auth/me", Some(&token))).await;
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(json_body(me).await["data"]["email"], "ana@example.com");

    let cookie = send(
        &app,
        Request::builder()
            .uri("/auth/me")
            .header(header::COOKIE, format!("token={token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(cookie.status(), StatusCode::OK);
}

#[tokio::test]
async fn reads_are_public_and_writes_need_a_token() {
    let app = app().await;
    let token = token(&app).await;

    let anonymous_write = send(
        &app,
        json_request(
            "POST",
            "/productos",
            None,
            json!({"producto": "Martillo", "precio_compra": 12.5, "precio_venta": 18.0, "stock": 3}),
        ),
    )
    .await;
    assert_eq!(anonymous_write.status(), StatusCode::UNAUTHORIZED);

    let id = create_product(&app, &token, 3).await;

    let list = send(&app, get("/productos", None)).await;
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(json_body(list).await["data"].as_array().unwrap().len(), 1);

    let one = send(&app, get(&format!("/productos/{id}"), None)).await;
    assert_eq!(one.status(), StatusCode::OK);
    assert_eq!(json_body(one).await["data"]["producto"], "Martillo");

    let missing = send(&app, get("/productos/999", None)).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let anonymous_delete = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/productos/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(anonymous_delete.status(), StatusCode::UNAUTHORIZED);

    let sales = send(&app, get("/ventas", None)).await;
    assert_eq!(sales.status(), StatusCode::UNAUTHORIZED);

    let users = send(&app, get("/usuarios", None)).await;
    assert_eq!(users.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_bodies_report_field_details() {
    let app = app().await;
    let token = token(&app).await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/productos",
            Some(&token),
            json!({"producto": "Martillo", "precio_compra": 0.0, "precio_venta": 18.0, "stock": -1}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    let details = body["details"].as_object().unwrap();
    assert_eq!(details.len(), 2);
    assert!(details["stock"].is_array());

    let missing_field = send(
        &app,
        json_request("POST", "/clientes", Some(&token), json!({"nombre": "Sin NIT"})),
    )
    .await;
    assert_eq!(missing_field.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sale_flow_over_http() {
    let app = app().await;
    let token = token(&app).await;
    let product_id = create_product(&app, &token, 5).await;
    let client_id = create_client(&app, &token).await;

    let sale = |cantidad: i64, producto_id: i64| {
        json!({
            "producto_id": producto_id,
            "cliente_id": client_id,
            "cantidad": cantidad,
            "precio_unitario": 18.0,
            "total": 18.0 * cantidad as f64
        })
    };

    let too_many = send(&app, json_request("POST", "/ventas", Some(&token), sale(6, product_id))).await;
    assert_eq!(too_many.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let unknown = send(&app, json_request("POST", "/ventas", Some(&token), sale(1, 999))).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let created = send(&app, json_request("POST", "/ventas", Some(&token), sale(5, product_id))).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;
    assert_eq!(created["data"]["cantidad"], 5);

    let me = json_body(send(&app, get("/auth/me", Some(&token))).await).await;
    assert_eq!(created["data"]["usuario_id"], me["data"]["id"]);

    let product = json_body(send(&app, get(&format!("/productos/{product_id}"), None)).await).await;
    assert_eq!(product["data"]["stock"], 0);

    let listed = send(&app, get("/ventas", Some(&token))).await;
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(json_body(listed).await["data"].as_array().unwrap().len(), 1);

    let restricted = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/productos/{product_id}"))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(restricted.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_uses_the_path_id() {
    let app = app().await;
    let token = token(&app).await;
    let client_id = create_client(&app, &token).await;

    let response = send(
        &app,
        json_request(
            "PUT",
            &format!("/clientes/{client_id}"),
            Some(&token),
            json!({"id": 12345, "nombre": "Ferreteria Norte", "nit": "900654321"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["data"]["id"], client_id);
    assert_eq!(body["data"]["nombre"], "Ferreteria Norte");
}

#[tokio::test]
async fn operational_endpoints() {
    let app = app().await;
    let token = token(&app).await;
    create_product(&app, &token, 1).await;

    let health = send(&app, get("/health", None)).await;
    assert_eq!(health.status(), StatusCode::OK);

    let metrics = send(&app, get("/metrics", None)).await;
    assert_eq!(metrics.status(), StatusCode::OK);
    let text = String::from_utf8(
        to_bytes(metrics.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec(),
    )
    .unwrap();
    assert!(text.contains("product_command_service_request_counter"));

    let docs = send(&app, get("/api-docs/openapi.json", None)).await;
    assert_eq!(docs.status(), StatusCode::OK);
    let docs = json_body(docs).await;
    assert!(docs["paths"].get("/ventas").is_some());
    assert!(docs["paths"].get("/auth/login").is_some());
}
