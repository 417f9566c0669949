use tokio::net::TcpListener;

use trex_client::TrexClient;
use trex_server::infrastructure::settings::Settings;
use trex_server::server::build_router;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port must bind");
    let addr = listener.local_addr().expect("bound socket has an address");
    let app = build_router(&Settings::default());

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server must run");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn health_check_round_trip() {
    let client = TrexClient::new(spawn_server().await).expect("client must build");

    let health = client.health().await.expect("health must succeed");
    assert_eq!(health.status, "OK");
}

#[tokio::test]
async fn problem_responses_parse_back_into_typed_errors() {
    let client = TrexClient::new(spawn_server().await).expect("client must build");

    let err = client
        .get::<serde_json::Value>("/definitely/missing")
        .await
        .expect_err("unknown route must fail");

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("no such route"));
}
