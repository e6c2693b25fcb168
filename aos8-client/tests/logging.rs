//! Log output of the HTTP transport.
//!
//! Runs in its own binary so the capturing logger is the only one installed.

use std::sync::{Arc, Mutex, OnceLock};

use aos8_client::{ClientBuilder, HttpConfig, HttpTransport};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type LogBuffer = Vec<(Level, String)>;

/// Handle for inspecting captured log records.
struct LogHandle {
    inner: Arc<Mutex<LogBuffer>>,
}

impl LogHandle {
    fn contains(&self, level: Level, needle: &str) -> bool {
        let guard = self.inner.lock().expect("log mutex poisoned");
        guard
            .iter()
            .any(|(lvl, msg)| *lvl == level && msg.contains(needle))
    }
}

#[derive(Clone)]
struct TestLogger {
    inner: Arc<Mutex<LogBuffer>>,
}

impl Log for TestLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let mut guard = self.inner.lock().expect("log mutex poisoned");
        guard.push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<TestLogger> = OnceLock::new();

/// Install the capturing logger once and hand out a reader for it.
///
/// Tests share the buffer, so they match on their own mock server URL.
fn init_test_logger() -> LogHandle {
    let logger = LOGGER.get_or_init(|| {
        let logger = TestLogger {
            inner: Arc::new(Mutex::new(Vec::new())),
        };
        if log::set_boxed_logger(Box::new(logger.clone())).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        logger
    });

    LogHandle {
        inner: Arc::clone(&logger.inner),
    }
}

async fn mount_login(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/auth/"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_failed_login_does_not_warn_about_close() {
    let logs = init_test_logger();
    let server = MockServer::start().await;
    mount_login(&server, ResponseTemplate::new(401)).await;

    let result = ClientBuilder::new(server.uri())
        .username("admin")
        .password("wrong")
        .build()
        .await;

    assert!(result.is_err());
    assert!(!logs.contains(Level::Warn, &server.uri()));
}

#[tokio::test]
async fn test_missing_cookie_does_not_warn_about_close() {
    let logs = init_test_logger();
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": {"diag": 200}})),
    )
    .await;

    let result = HttpTransport::connect(HttpConfig::new(server.uri(), "admin", "switch")).await;

    assert!(result.is_err());
    assert!(!logs.contains(Level::Warn, &server.uri()));
}

#[tokio::test]
async fn test_unclosed_session_warns_on_drop() {
    let logs = init_test_logger();
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(200)
            .insert_header("Set-Cookie", "wv_sess=abc123; Path=/")
            .set_body_json(json!({"result": {"diag": 200}})),
    )
    .await;

    let transport = HttpTransport::connect(HttpConfig::new(server.uri(), "admin", "switch"))
        .await
        .unwrap();
    drop(transport);

    let expected = format!("HttpTransport for {} dropped without close()", server.uri());
    assert!(logs.contains(Level::Warn, &expected));
}
