use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(deprecated)]
fn get_geofix_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("geofix")
}

/// Start a mock Nominatim endpoint on a runtime that keeps serving while
/// the binary under test runs.
fn start_mock_geocoder(
    runtime: &tokio::runtime::Runtime,
    response: ResponseTemplate,
) -> MockServer {
    runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .and(header("user-agent", "MyReverseGeocoder/1.0"))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    })
}

#[test]
fn test_geocode_command_help() {
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("geocode").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resolve coordinates"))
        .stdout(predicate::str::contains("--lat"))
        .stdout(predicate::str::contains("--lon"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_geocode_resolves_address() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = start_mock_geocoder(
        &runtime,
        ResponseTemplate::new(200).set_body_json(json!({
            "address": {
                "city": "Springfield",
                "state": "Illinois",
                "country": "USA"
            }
        })),
    );

    let mut cmd = Command::new(get_geofix_bin());
    cmd.args([
        "geocode",
        "--lat",
        "39.7817",
        "--lon",
        "-89.6501",
        "--endpoint",
        &format!("{}/reverse", server.uri()),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address: Springfield, Illinois, USA"));
}

#[test]
fn test_geocode_json_output() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = start_mock_geocoder(
        &runtime,
        ResponseTemplate::new(200).set_body_json(json!({
            "address": {
                "village": "Grasmere",
                "country": "United Kingdom"
            }
        })),
    );

    let mut cmd = Command::new(get_geofix_bin());
    cmd.args([
        "geocode",
        "--lat",
        "54.4609",
        "--lon",
        "-3.0886",
        "--endpoint",
        &format!("{}/reverse", server.uri()),
        "--format",
        "json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""latitude": "54.4609""#))
        .stdout(predicate::str::contains(
            r#""address": "Grasmere, United Kingdom""#,
        ));
}

#[test]
fn test_geocode_reports_location_not_found() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = start_mock_geocoder(
        &runtime,
        ResponseTemplate::new(200).set_body_json(json!({
            "error": "Unable to geocode"
        })),
    );

    let mut cmd = Command::new(get_geofix_bin());
    cmd.args([
        "geocode",
        "--lat",
        "0.0",
        "--lon",
        "0.0",
        "--endpoint",
        &format!("{}/reverse", server.uri()),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address: Location not found"));
}

#[test]
fn test_geocode_swallows_unreachable_endpoint() {
    // Geocoding failures are reported in the output, not as process
    // failures
    let mut cmd = Command::new(get_geofix_bin());
    cmd.args([
        "geocode",
        "--lat",
        "1.0",
        "--lon",
        "2.0",
        "--endpoint",
        "http://127.0.0.1:1/reverse",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Geocoding error:"));
}
