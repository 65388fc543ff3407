// Integration tests for the nl-search binary
use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn nl_search() -> Command {
    let mut cmd = Command::cargo_bin("nl-search").unwrap();
    for var in [
        "NL_SEARCH_BASE_URL",
        "NL_SEARCH_PATH",
        "NL_SEARCH_QUERY",
        "NL_SEARCH_TIMEOUT_SECS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_unreachable_endpoint() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let base_url = format!("http://127.0.0.1:{}", port);
    nl_search()
        .args(["--base-url", base_url.as_str()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Status code").not())
        .stderr(predicate::str::contains("ERROR: Could not reach nl-search endpoint"));
}

#[test]
fn test_cli_empty_query() {
    nl_search()
        .args(["--query", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Query cannot be empty"));
}

#[test]
fn test_cli_invalid_base_url() {
    nl_search()
        .args(["--base-url", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid endpoint URL"));
}

#[tokio::test]
async fn test_cli_default_query_and_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/nl-search"))
        .and(body_json(json!({
            "query": "Show me all delivered parcels at Location A excluding expired parcels"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filters": {"location_name": "Location A", "exclude_status": ["EXPIRED"]},
            "results": [],
            "warnings": [],
            "followUp": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        nl_search()
            .env("NL_SEARCH_BASE_URL", uri)
            .arg("--summary")
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Status code: 200\nResponse JSON: {\"filters\":"))
        .stdout(predicate::str::contains("Results: 0\n"))
        .stdout(predicate::str::contains("  Location: Location A\n"))
        .stdout(predicate::str::contains("  Excluded: Status: EXPIRED\n"));
}

#[tokio::test]
async fn test_cli_logs_stay_off_stdout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        nl_search()
            .env("RUST_LOG", "debug")
            .args(["--base-url", uri.as_str(), "-q", "Show me all orders"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout("Status code: 200\nResponse JSON: {\"results\":[]}\n")
        .stderr(predicate::str::contains("sending nl-search query"))
        .stderr(predicate::str::contains("nl-search response received"));
}

#[tokio::test]
async fn test_cli_server_error_still_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        nl_search()
            .args(["--base-url", uri.as_str(), "-q", "Show me all orders"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout("Status code: 500\nResponse text: Internal Server Error\n");
}
