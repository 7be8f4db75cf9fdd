//! Common test utilities for integration tests
//!
//! Provides shared fixtures and mock GitHub endpoints used across
//! multiple integration test files.

use mockito::{Matcher, Mock, Server, ServerGuard};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// JSON array of `{"login": ...}` records.
#[allow(dead_code)]
pub fn logins_body(logins: &[&str]) -> String {
    serde_json::Value::Array(
        logins
            .iter()
            .enumerate()
            .map(|(id, login)| serde_json::json!({ "login": login, "id": id }))
            .collect(),
    )
    .to_string()
}

/// JSON array of repositories under `org`.
#[allow(dead_code)]
pub fn repos_body(org: &str, names: &[&str]) -> String {
    serde_json::Value::Array(
        names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "full_name": format!("{org}/{name}"),
                    "html_url": format!("https://github.com/{org}/{name}"),
                })
            })
            .collect(),
    )
    .to_string()
}

/// JSON array of commits, one per author login.
#[allow(dead_code)]
pub fn commits_body(authors: &[Option<&str>]) -> String {
    serde_json::Value::Array(
        authors
            .iter()
            .enumerate()
            .map(|(i, author)| match author {
                Some(login) => serde_json::json!({ "sha": format!("{i:040x}"), "author": { "login": login } }),
                None => serde_json::json!({ "sha": format!("{i:040x}"), "author": null }),
            })
            .collect(),
    )
    .to_string()
}

/// JSON array with `count` GPG keys.
#[allow(dead_code)]
pub fn gpg_keys_body(count: usize) -> String {
    serde_json::Value::Array(
        (0..count)
            .map(|id| serde_json::json!({ "id": id, "key_id": format!("{id:016X}"), "can_sign": true }))
            .collect(),
    )
    .to_string()
}

/// Mock one page of a paginated listing, expected exactly once.
#[allow(dead_code)]
pub fn mock_page(server: &mut ServerGuard, path: &str, page: u32, body: String) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create()
}

/// Mock a listing whose every page answers with `status`.
#[allow(dead_code)]
pub fn mock_status(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(status)
        .create()
}

/// Mock the GPG key listing of `user`.
#[allow(dead_code)]
pub fn mock_gpg_keys(server: &mut ServerGuard, user: &str, count: usize) -> Mock {
    server
        .mock("GET", format!("/users/{user}/gpg_keys").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gpg_keys_body(count))
        .expect(1)
        .create()
}

/// Members `alice`, `bob`, `carol` of `acme`; `alice` has one key, the
/// others none.
#[allow(dead_code)]
pub fn alice_bob_carol(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        mock_page(server, "/orgs/acme/members", 1, logins_body(&["alice", "bob", "carol"])),
        mock_page(server, "/orgs/acme/members", 2, "[]".to_string()),
        mock_gpg_keys(server, "alice", 1),
        mock_gpg_keys(server, "carol", 0),
    ]
}

/// Start a mock GitHub API server.
#[allow(dead_code)]
pub fn github_server() -> ServerGuard {
    Server::new()
}
