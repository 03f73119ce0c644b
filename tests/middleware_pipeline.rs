//! Pipe ordering across the router, route and nested route levels.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use pipe_router::{Handler, Pipe, Pipeline, Router};
use tower::{Service, ServiceExt};
use tower_http::set_header::SetResponseHeaderLayer;

mod common;
use common::{add_num_to_response as num, get_body, send};

#[tokio::test]
async fn test_separate_pipelines_for_router_and_route() {
    let mut rtr = Router::new();
    rtr.layers([num(1), num(2), num(3)]);

    rtr.route("/")
        .unwrap()
        .layers([num(4), num(5)])
        .get_fn(|| async { "\nroot route fin." })
        .unwrap();

    {
        let mut root = rtr.route("/").unwrap();
        let mut nested = root.route("/nested").unwrap().layers([num(6), num(7)]);
        nested.get_fn(|| async { "\nnested fin." }).unwrap();
        nested
            .route("/deeply")
            .unwrap()
            .layers([num(12), num(13)])
            .get_fn(|| async { "\nnested deep fin." })
            .unwrap();
    }

    rtr.route("/")
        .unwrap()
        .route("/other")
        .unwrap()
        .layers([num(8), num(9)])
        .get_fn(|| async { "\nother fin." })
        .unwrap();

    rtr.route("/nested/deeply/torouter")
        .unwrap()
        .layers([num(10), num(11)])
        .get_fn(|| async { "\ndeep fin." })
        .unwrap();

    let app = rtr.into_axum_router();
    assert_eq!(get_body(&app, "/").await, "12345\nroot route fin.");
    assert_eq!(get_body(&app, "/nested").await, "1234567\nnested fin.");
    assert_eq!(get_body(&app, "/other").await, "1234589\nother fin.");
    assert_eq!(get_body(&app, "/nested/deeply").await, "12345671213\nnested deep fin.");
    assert_eq!(get_body(&app, "/nested/deeply/torouter").await, "1231011\ndeep fin.");
}

#[tokio::test]
async fn test_root_pipes_resolve_when_handler_is_attached() {
    let mut rtr = Router::new();
    rtr.layer(num(1));

    rtr.route("/early")
        .unwrap()
        .layer(num(9))
        .get_fn(|| async { "!" })
        .unwrap();

    // Root pipe added after /late was derived but before its handler: applies.
    // Added after /early's handler: does not.
    let _ = rtr.route("/late").unwrap().layer(num(9));
    rtr.layer(num(2));
    rtr.route("/late").unwrap().get_fn(|| async { "!" }).unwrap();

    let app = rtr.into_axum_router();
    assert_eq!(get_body(&app, "/early").await, "19!");
    assert_eq!(get_body(&app, "/late").await, "129!");
}

#[tokio::test]
async fn test_rederived_route_layers_both_chains() {
    let mut rtr = Router::new();

    rtr.route("/a").unwrap().layer(num(1)).route("/x").unwrap();
    rtr.route("/")
        .unwrap()
        .layer(num(2))
        .route("/a/x")
        .unwrap()
        .layer(num(3))
        .get_fn(|| async { "!" })
        .unwrap();

    let app = rtr.into_axum_router();
    assert_eq!(get_body(&app, "/a/x").await, "123!");
}

#[tokio::test]
async fn test_rederiving_through_grown_parent_runs_each_pipe_once() {
    let mut rtr = Router::new();

    rtr.route("/p").unwrap().layer(num(1)).route("/c").unwrap();
    rtr.route("/p")
        .unwrap()
        .layer(num(2))
        .route("/c")
        .unwrap()
        .get_fn(|| async { "!" })
        .unwrap();

    let app = rtr.into_axum_router();
    assert_eq!(get_body(&app, "/p/c").await, "12!");
}

#[tokio::test]
async fn test_pipeline_values_and_tower_layers_as_pipes() {
    let shared = Pipeline::new().with([num(1), num(2)]);

    let mut rtr = Router::new();
    rtr.layer_pipeline(&shared);
    rtr.route("/v")
        .unwrap()
        .layer_pipeline(&shared)
        .layer(Pipe::from_layer(SetResponseHeaderLayer::overriding(
            header::SERVER,
            HeaderValue::from_static("pipe-router"),
        )))
        .get_fn(|| async { "!" })
        .unwrap();

    let app = rtr.into_axum_router();
    let (status, head, body) = send(&app, Method::GET, "/v").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "1212!");
    assert_eq!(head.headers()[header::SERVER], "pipe-router");
    assert_eq!(shared.len(), 2);
}

#[tokio::test]
async fn test_any_method_handler_alongside_method_handlers() {
    let mut rtr = Router::new();
    let mut item = rtr.route("/item").unwrap();
    item.get_fn(|| async { "get" }).unwrap();
    item.any(Handler::new(|| async { "any" })).unwrap();

    let app = rtr.into_axum_router();
    assert_eq!(send(&app, Method::GET, "/item").await.2, "get");
    assert_eq!(send(&app, Method::PUT, "/item").await.2, "any");
    assert_eq!(send(&app, Method::GET, "/nope").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_router_is_a_service() {
    let mut rtr = Router::new();
    rtr.route("/").unwrap().get_fn(|| async { "Hello, World!" }).unwrap();

    let res = ServiceExt::<Request>::ready(&mut rtr)
        .await
        .unwrap()
        .call(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Handlers registered after a dispatch are picked up.
    rtr.route("/later").unwrap().get_fn(|| async { "later" }).unwrap();
    let res = rtr
        .oneshot(Request::builder().uri("/later").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
