//! End-to-end tests for the `echochat` binary.

use std::net::{SocketAddr, TcpListener as StdTcpListener};

use assert_cmd::Command;
use echochat_api::config::ApiConfig;
use predicates::prelude::*;
use tokio::runtime::Runtime;

/// Serves the real router on an ephemeral port for as long as the runtime lives.
fn spawn_server() -> (Runtime, SocketAddr) {
    let rt = Runtime::new().expect("runtime");
    let listener = rt
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = echochat_api::router(&ApiConfig::default());
    rt.spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (rt, addr)
}

fn unreachable_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn echochat() -> Command {
    let mut cmd = Command::cargo_bin("echochat").expect("binary");
    cmd.env_remove("ECHOCHAT_URL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_prints_package_version() {
    echochat()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn send_prints_both_bubbles() {
    let (_rt, addr) = spawn_server();

    echochat()
        .args(["send", "--url", &format!("http://{addr}"), "Hello there!"])
        .assert()
        .success()
        .stdout("you> Hello there!\nbot> You said: 'Hello there!'\n");
}

#[test]
fn send_whitespace_does_nothing() {
    echochat()
        .args(["send", "--url", &unreachable_url(), "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn send_to_unreachable_server_renders_error_bubble() {
    echochat()
        .args(["send", "--url", &unreachable_url(), "hi"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("you> hi"))
        .stdout(predicate::str::contains("bot> Sorry, something went wrong:"));
}

#[test]
fn chat_reads_one_message_per_line() {
    let (_rt, addr) = spawn_server();

    echochat()
        .args(["chat", "--url", &format!("http://{addr}")])
        .write_stdin("hello\n   \nbye\n")
        .assert()
        .success()
        .stdout("you> hello\nbot> You said: 'hello'\nyou> bye\nbot> You said: 'bye'\n");
}
