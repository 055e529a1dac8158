//! Integration tests for the serve command lifecycle.
//!
//! Real TCP listeners on loopback, scripted watch sessions. Tests verify
//! the ordering contract: listeners bind after the session starts, nothing
//! is reported before the first build, and every listener is closed only
//! after the rebuild stream has ended.

use axum::routing::get;
use axum::Router;
use drover_cli::commands::serve;
use drover_cli::config::{ServeOptions, ServeTarget, SharedOptions};
use drover_cli::CliError;
use drover_engine::testing::{scripted_watch, scripted_watch_static, ScriptedEngine};
use drover_engine::BuildOutcome;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::time::sleep;

fn success(ms: u64) -> BuildOutcome {
    BuildOutcome::success(Duration::from_millis(ms))
}

fn serve_options(targets: Vec<ServeTarget>) -> ServeOptions {
    ServeOptions {
        shared: SharedOptions::default(),
        host_name: "127.0.0.1".to_string(),
        serve_targets: targets,
    }
}

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

async fn wait_for_listener(port: u16) {
    for _ in 0..100 {
        if tokio::net::TcpStream::connect(("127.0.0.1", port))
            .await
            .is_ok()
        {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("listener on port {port} never came up");
}

async fn http_get(port: u16) -> String {
    let mut stream = tokio::net::TcpStream::connect(("127.0.0.1", port))
        .await
        .unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_each_target_is_served_by_its_directory_handler() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut controller, session) = scripted_watch(Box::new(|dir: &str| {
        let body = format!("dir:{dir}");
        Router::new().route(
            "/",
            get(move || {
                let body = body.clone();
                async move { body }
            }),
        )
    }));
    controller.finish_first_build(success(5));
    engine.push_watch(session);

    let (alpha_port, beta_port) = (free_port(), free_port());
    let options = serve_options(vec![
        ServeTarget::new("alpha", alpha_port),
        ServeTarget::new("beta", beta_port),
    ]);

    let task = tokio::spawn({
        let engine = engine.clone();
        async move { serve::execute(&options, engine.as_ref()).await }
    });

    wait_for_listener(alpha_port).await;
    wait_for_listener(beta_port).await;
    assert!(http_get(alpha_port).await.contains("dir:alpha"));
    assert!(http_get(beta_port).await.contains("dir:beta"));

    controller.end();
    let code = task.await.unwrap().unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn test_nothing_is_reported_before_the_first_build() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut controller, session) = scripted_watch_static();
    // The stream ends right away, but the first-build signal stays pending.
    controller.end();
    engine.push_watch(session);

    let port = free_port();
    let options = serve_options(vec![ServeTarget::new("web", port)]);

    let task = tokio::spawn({
        let engine = engine.clone();
        async move { serve::execute(&options, engine.as_ref()).await }
    });

    // Listeners bind while the first build is still pending.
    wait_for_listener(port).await;

    sleep(Duration::from_millis(50)).await;
    assert!(
        !task.is_finished(),
        "serve must stay suspended until the first build finishes"
    );

    controller.finish_first_build(success(3));
    let code = task.await.unwrap().unwrap();
    assert_eq!(code, 0);

    // Everything was closed before the executor returned.
    assert!(tokio::net::TcpStream::connect(("127.0.0.1", port))
        .await
        .is_err());
}

#[tokio::test]
async fn test_listeners_stay_up_until_the_stream_ends() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut controller, session) = scripted_watch_static();
    controller.finish_first_build(success(3));
    engine.push_watch(session);

    let port = free_port();
    let options = serve_options(vec![ServeTarget::new("web", port)]);

    let task = tokio::spawn({
        let engine = engine.clone();
        async move { serve::execute(&options, engine.as_ref()).await }
    });

    wait_for_listener(port).await;
    controller.emit(success(2));

    sleep(Duration::from_millis(50)).await;
    assert!(!task.is_finished(), "the stream is still open");
    tokio::net::TcpStream::connect(("127.0.0.1", port))
        .await
        .expect("listener must stay bound while rebuilds are in flight");

    controller.end();
    let code = task.await.unwrap().unwrap();
    assert_eq!(code, 0);
    assert!(tokio::net::TcpStream::connect(("127.0.0.1", port))
        .await
        .is_err());
}

#[tokio::test]
async fn test_bind_failure_closes_already_bound_listeners() {
    let blocker = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let occupied = blocker.local_addr().unwrap().port();
    let open_port = free_port();

    let engine = ScriptedEngine::new();
    let (controller, session) = scripted_watch_static();
    engine.push_watch(session);

    let options = serve_options(vec![
        ServeTarget::new("ok", open_port),
        ServeTarget::new("bad", occupied),
    ]);

    let err = serve::execute(&options, &engine)
        .await
        .expect_err("one unbindable target fails the whole serve");
    assert!(matches!(
        err,
        CliError::ListenerBind { port, .. } if port == occupied
    ));

    // No partial-serve state: the listener that did bind was closed again.
    std::net::TcpListener::bind(("127.0.0.1", open_port)).unwrap();
    drop(controller);
}
