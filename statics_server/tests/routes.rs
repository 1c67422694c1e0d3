//! Route tests driven through the router without binding a socket.

use approx::assert_relative_eq;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use statics_server::app;

async fn call(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    call(Method::POST, uri, Some(body)).await
}

fn midspan_beam() -> Value {
    json!({
        "length": 10.0,
        "point_loads": [{"position": 5.0, "magnitude": 100.0}],
        "num_points": 10
    })
}

#[tokio::test]
async fn health_reports_version() {
    let (status, body) = call(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn analyze_returns_diagrams_and_metadata() {
    let mut beam = midspan_beam();
    beam["analysis"] = json!({"unit_system": "US", "export_format": "csv"});
    let (status, body) = post("/api/beam/analyze", beam).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reactions"]["A"]["vertical"], 50.0);
    assert_eq!(body["diagrams"]["positions"].as_array().unwrap().len(), 11);
    assert_relative_eq!(body["diagrams"]["moment"][5].as_f64().unwrap(), 250.0);
    assert_eq!(body["metadata"]["unit_system"], "US");
    assert_eq!(body["metadata"]["export_format"], "csv");
}

#[tokio::test]
async fn reactions_route() {
    let (status, body) = post("/api/beam/reactions", midspan_beam()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"RA": 50.0, "RB": 50.0, "RC": 0.0}));
}

#[tokio::test]
async fn center_of_mass_is_null_without_loads() {
    let (status, body) = post("/api/beam/center-of-mass", json!({"length": 4.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["x_cm"].is_null());

    let (_, body) = post("/api/beam/center-of-mass", midspan_beam()).await;
    assert_eq!(body["x_cm"], 5.0);
}

#[tokio::test]
async fn torsor_at_route() {
    let mut beam = midspan_beam();
    beam["x"] = json!(2.5);
    let (status, body) = post("/api/beam/torsor-at", beam).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["x"], 2.5);
    assert_relative_eq!(body["torsor"].as_f64().unwrap(), 125.0);
}

#[tokio::test]
async fn invalid_beam_is_unprocessable() {
    let (status, body) = post("/api/beam/analyze", json!({"length": -1.0})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["detail"].as_str().unwrap().contains("length"));
}

#[tokio::test]
async fn missing_support_c_position_is_unprocessable() {
    let (status, body) = post(
        "/api/beam/reactions",
        json!({"length": 10.0, "support_c_type": "fixed"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MISSING_FIELD");
}

#[tokio::test]
async fn malformed_body_is_unprocessable() {
    let (status, body) = post("/api/beam/analyze", json!({"length": "ten"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "SERIALIZATION_ERROR");
}

#[tokio::test]
async fn section_routes() {
    let (status, body) = post("/api/section/rectangular", json!({"width": 2.0, "height": 3.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert_relative_eq!(body["area"].as_f64().unwrap(), 6.0);
    assert_relative_eq!(body["ix"].as_f64().unwrap(), 4.5);

    let (status, body) = post(
        "/api/section/i-beam",
        json!({
            "top_width": 10.0, "top_height": 1.0,
            "web_width": 1.0, "web_height": 8.0,
            "bottom_width": 10.0, "bottom_height": 1.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_relative_eq!(body["area"].as_f64().unwrap(), 28.0);
    assert_relative_eq!(body["centroid_y"].as_f64().unwrap(), 5.0);

    let (status, _) = post("/api/section/rectangular", json!({"width": 0.0, "height": 3.0})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn mechanics_routes() {
    let (status, body) = post(
        "/api/mechanics/center-of-mass-3d",
        json!({"points": [
            {"x": 0.0, "y": 0.0, "z": 0.0, "m": 1.0},
            {"x": 2.0, "y": 4.0, "z": 6.0, "m": 1.0}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"x_cm": 1.0, "y_cm": 2.0, "z_cm": 3.0}));

    let (status, body) = post(
        "/api/mechanics/force-from-torsor",
        json!({"torsor": 50.0, "distance": 2.0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["force"], 25.0);

    let (status, _) = post(
        "/api/mechanics/force-from-torsor",
        json!({"torsor": 50.0, "distance": 0.0}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn composite_section_route() {
    let (status, body) = post(
        "/api/section/composite",
        json!({"shapes": [
            {"kind": "Rectangle", "x": 0.0, "y": 0.0, "width": 2.0, "height": 2.0},
            {"kind": "Rectangle", "x": 2.0, "y": 0.0, "width": 2.0, "height": 2.0}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"area": 8.0, "cx": 2.0, "cy": 1.0}));

    let (status, body) = post(
        "/api/section/composite",
        json!({"shapes": [{"kind": "Circle", "x": 0.0, "y": 0.0, "width": -1.0}]}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("shapes[0].width"));
}

#[tokio::test]
async fn truss_route_solves_triangle() {
    let (status, body) = post(
        "/api/truss/analyze",
        json!({
            "nodes": [
                {"id": 1, "x": 0.0, "y": 0.0, "restrain_x": true, "restrain_y": true},
                {"id": 2, "x": 4.0, "y": 0.0, "restrain_y": true},
                {"id": 3, "x": 2.0, "y": 2.0, "load_y": -10.0}
            ],
            "bars": [{"start": 1, "end": 2}, {"start": 2, "end": 3}, {"start": 1, "end": 3}]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_relative_eq!(body["bar_forces"][0]["force"].as_f64().unwrap(), 5.0, epsilon = 1e-9);
    assert_relative_eq!(
        body["bar_forces"][2]["force"].as_f64().unwrap(),
        -10.0 / std::f64::consts::SQRT_2,
        epsilon = 1e-9
    );
    assert_relative_eq!(body["reactions"][1]["ry"].as_f64().unwrap(), 5.0, epsilon = 1e-9);
}

#[tokio::test]
async fn truss_route_rejects_unstable_truss() {
    let (status, body) = post(
        "/api/truss/analyze",
        json!({
            "nodes": [
                {"id": 1, "x": 0.0, "y": 0.0, "restrain_x": true, "restrain_y": true},
                {"id": 2, "x": 4.0, "y": 0.0},
                {"id": 3, "x": 2.0, "y": 2.0}
            ],
            "bars": [{"start": 1, "end": 2}, {"start": 2, "end": 3}, {"start": 1, "end": 3}]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn frame_route_solves_cantilever() {
    let (status, body) = post(
        "/api/frame/analyze",
        json!({
            "nodes": [
                {"id": 1, "x": 0.0, "y": 0.0,
                 "restrain_x": true, "restrain_y": true, "restrain_rotation": true},
                {"id": 2, "x": 2.0, "y": 0.0, "load_y": -10.0}
            ],
            "members": [{"start": 1, "end": 2, "E": 1000.0, "A": 1.0, "I": 2.0}]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // PL³/3EI
    assert_relative_eq!(
        body["displacements"][1]["uy"].as_f64().unwrap(),
        -80.0 / 6000.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(body["reactions"][0]["moment"].as_f64().unwrap(), 20.0, epsilon = 1e-9);
}
