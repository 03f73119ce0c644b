//! End-to-end tests over TCP.

use std::time::Duration;

use pipe_router::config::ServerConfig;
use pipe_router::{app, HttpServer, Router, Shutdown};
use tokio::net::TcpListener;

async fn spawn(router: Router, config: ServerConfig) -> (String, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(router, config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{addr}"), shutdown)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_basic_router() {
    let mut router = Router::new();
    router.route("/").unwrap().get_fn(|| async { "Hello, World!" }).unwrap();

    let (url, shutdown) = spawn(router, ServerConfig::default()).await;

    let res = client().get(&url).send().await.expect("Server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello, World!");

    shutdown.trigger();
}

#[tokio::test]
async fn test_demo_table_end_to_end() {
    let mut config = ServerConfig::default();
    config.middleware.server_header = Some("pipe-router".into());
    let router = app::build_router(&config).unwrap();

    let (url, shutdown) = spawn(router, config).await;
    let client = client();

    let res = client.get(format!("{url}/ping")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["server"], "pipe-router");
    assert!(res.headers().contains_key("x-request-id"));
    let allow = res.headers()["access-control-allow-methods"].to_str().unwrap().to_string();
    assert_eq!(allow, "GET, POST");
    assert_eq!(res.text().await.unwrap(), "get-pong");

    let res = client
        .post(format!("{url}/api/echo"))
        .header("x-request-id", "req-42")
        .body("echo me")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-api-version"], "1");
    assert_eq!(res.headers()["x-request-id"], "req-42");
    assert_eq!(res.text().await.unwrap(), "echo me");

    let res = client.patch(format!("{url}/api/health")).send().await.unwrap();
    assert_eq!(res.headers()["access-control-allow-methods"], "*");
    assert_eq!(res.text().await.unwrap(), "ok");

    let res = client.delete(format!("{url}/ping")).send().await.unwrap();
    assert_eq!(res.status(), 405);

    let routes: serde_json::Value = serde_json::from_str(
        &client.get(format!("{url}/debug/routes")).send().await.unwrap().text().await.unwrap(),
    )
    .unwrap();
    assert_eq!(routes[1]["path"], "/ping");
    assert_eq!(routes[1]["methods"], serde_json::json!(["GET", "POST"]));

    shutdown.trigger();
}
