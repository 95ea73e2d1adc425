//! Router-level CRUD tests
//!
//! Drives the real router over an in-memory store with
//! `tower::ServiceExt::oneshot`, asserting the status-code contract and
//! the denormalized read shapes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hr_server::core::server::build_app;
use hr_server::{Config, ServerState, db};

async fn app() -> Router {
    let db = db::connect_memory().await.expect("db");
    let config = Config::with_overrides("/tmp/hr-test", "/tmp/hr-test", 0);
    build_app().with_state(ServerState::new(config, db))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn send_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn area_crud_flow() {
    let app = app().await;

    // Create
    let response = app
        .clone()
        .oneshot(send_json("POST", "/api/areas", json!({"nombre": "Ventas"})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let area = body_json(response).await;
    let id = area["id"].as_str().expect("id").to_string();
    assert!(id.starts_with("area:"));

    // Duplicate name -> 409
    let response = app
        .clone()
        .oneshot(send_json("POST", "/api/areas", json!({"nombre": "Ventas"})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // List
    let response = app.clone().oneshot(get("/api/areas")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let areas = body_json(response).await;
    assert_eq!(areas.as_array().expect("array").len(), 1);

    // Get by id
    let response = app
        .clone()
        .oneshot(get(&format!("/api/areas/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    // Update
    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &format!("/api/areas/{id}"),
            json!({"nombre": "Comercial"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["nombre"], "Comercial");

    // Delete, then the record is gone
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/areas/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/areas/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_a_bad_request() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get("/api/areas/sin-dos-puntos"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_nombre_is_rejected() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(send_json("POST", "/api/areas", json!({"nombre": ""})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empleado_requires_existing_area_and_cargo() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/empleados",
            json!({
                "documento": "1001",
                "nombre": "Laura",
                "apellido": "Gomez",
                "email": "laura@acme.test",
                "edad": 34,
                "ciudad": "Medellin",
                "barrio": "Laureles",
                "roles": ["ventas"],
                "salarioBase": 1000.0,
                "areaId": "area:inexistente",
                "cargoId": "cargo:inexistente",
                "fechaContratacion": "2021-03-15"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

async fn seed_empleado(app: &Router) -> (String, String, String) {
    let area = body_json(
        app.clone()
            .oneshot(send_json("POST", "/api/areas", json!({"nombre": "Ventas"})))
            .await
            .expect("response"),
    )
    .await;
    let cargo = body_json(
        app.clone()
            .oneshot(send_json("POST", "/api/cargos", json!({"nombre": "Analista"})))
            .await
            .expect("response"),
    )
    .await;
    let area_id = area["id"].as_str().expect("id").to_string();
    let cargo_id = cargo["id"].as_str().expect("id").to_string();

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/empleados",
            json!({
                "documento": "1001",
                "nombre": "Laura",
                "apellido": "Gomez",
                "email": "laura@acme.test",
                "edad": 34,
                "ciudad": "Medellin",
                "barrio": "Laureles",
                "roles": "ventas, supervisor",
                "salarioBase": 1000.0,
                "areaId": area_id,
                "cargoId": cargo_id,
                "fechaContratacion": "2021-03-15"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let empleado = body_json(response).await;
    let empleado_id = empleado["id"].as_str().expect("id").to_string();
    (area_id, cargo_id, empleado_id)
}

#[tokio::test]
async fn empleado_reads_are_denormalized() {
    let app = app().await;
    let (_, _, empleado_id) = seed_empleado(&app).await;

    let response = app.clone().oneshot(get("/api/empleados")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let empleados = body_json(response).await;
    let first = &empleados.as_array().expect("array")[0];
    assert_eq!(first["area"]["nombre"], "Ventas");
    assert_eq!(first["cargo"]["nombre"], "Analista");
    // Comma-separated roles input arrives as a proper list
    assert_eq!(first["roles"], json!(["ventas", "supervisor"]));

    let response = app
        .clone()
        .oneshot(get(&format!("/api/empleados/{empleado_id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["area"]["nombre"], "Ventas");
}

#[tokio::test]
async fn duplicate_documento_is_a_conflict() {
    let app = app().await;
    let (area_id, cargo_id, _) = seed_empleado(&app).await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/empleados",
            json!({
                "documento": "1001",
                "nombre": "Otra",
                "apellido": "Persona",
                "email": "otra@acme.test",
                "edad": 30,
                "ciudad": "Cali",
                "barrio": "Granada",
                "salarioBase": 900.0,
                "areaId": area_id,
                "cargoId": cargo_id,
                "fechaContratacion": "2023-01-01"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn nomina_create_recomputes_totals_server_side() {
    let app = app().await;
    let (_, _, empleado_id) = seed_empleado(&app).await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/nominas",
            json!({
                "empleadoId": empleado_id,
                "periodo": "2024-05",
                "fechaEmision": "2024-05-31",
                "salarioBruto": 1000.0,
                "devengos": [{"concepto": "Bono", "valor": 100.0}],
                "deducciones": [{"concepto": "Salud", "valor": 50.0}],
                // Bogus client totals: must be ignored and recomputed
                "totalDevengos": 9999.0,
                "totalDeducciones": 0.0,
                "salarioNeto": 123456.0
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let nomina = body_json(response).await;
    assert_eq!(nomina["totalDevengos"], 100.0);
    assert_eq!(nomina["totalDeducciones"], 50.0);
    assert_eq!(nomina["salarioNeto"], 1050.0);
    assert_eq!(nomina["devengos"].as_array().expect("array").len(), 1);

    // Denormalized read joins the empleado
    let response = app.clone().oneshot(get("/api/nominas")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let nominas = body_json(response).await;
    assert_eq!(
        nominas.as_array().expect("array")[0]["empleado"]["documento"],
        "1001"
    );
}

#[tokio::test]
async fn nomina_for_unknown_empleado_is_rejected() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/nominas",
            json!({
                "empleadoId": "empleado:inexistente",
                "periodo": "2024-05",
                "fechaEmision": "2024-05-31",
                "salarioBruto": 1000.0
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = app().await;

    for uri in [
        "/api/areas/area:nope",
        "/api/cargos/cargo:nope",
        "/api/empleados/empleado:nope",
        "/api/nominas/nomina:nope",
    ] {
        let response = app.clone().oneshot(get(uri)).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = app().await;

    let response = app.clone().oneshot(get("/health")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}
