//! Summary/ranking flow against a local mock of the Ubigen API.

use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;

use ubigen_api::{run_report, Endpoints, UbigenClient};
use ubigen_common::{ErrorKind, GeneSet, SandboxClient};

const GENES: &str = "ENSG00000111640 ENSG00000111669 ENSG00000149925";

fn client_for(server: &ServerGuard) -> UbigenClient {
    UbigenClient::with_client(
        SandboxClient::new().unwrap(),
        Endpoints::from_base(&format!("{}/api", server.url())),
    )
}

fn genes() -> GeneSet {
    GeneSet::parse(GENES)
}

#[tokio::test]
async fn test_full_report() {
    let mut server = Server::new_async().await;
    let summary_mock = server
        .mock("POST", "/api/summary")
        .match_header("content-type", "text/plain")
        .match_body(Matcher::Exact(GENES.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"median_percentile": 0.8234567, "change": 1.5, "p_value": 0.01}"#)
        .expect(1)
        .create_async()
        .await;
    let ranking_mock = server
        .mock("POST", "/api/ranking")
        .match_header("content-type", "text/plain")
        .match_body(Matcher::Exact(GENES.to_string()))
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body("percentile\n0.1\n0.2\n0.3\n0.4\n")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut lines = Vec::new();
    let report = run_report(&client, &genes(), |line| lines.push(line.to_string()))
        .await
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "Median percentile: 82.3%".to_string(),
            "Estimated score difference: 1.5 (p = 0.01)".to_string(),
            "Recomputed median percentile: 25.0%".to_string(),
        ]
    );
    assert_eq!(report.recomputed_median, 0.25);
    assert_eq!(report.lines().to_vec(), lines);

    summary_mock.assert_async().await;
    ranking_mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_summary_skips_ranking() {
    let mut server = Server::new_async().await;
    let summary_mock = server
        .mock("POST", "/api/summary")
        .with_status(200)
        .with_body("{\"median_percentile\": ")
        .create_async()
        .await;
    let ranking_mock = server
        .mock("POST", "/api/ranking")
        .with_status(200)
        .with_body("percentile\n0.5\n")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut lines = Vec::new();
    let err = run_report(&client, &genes(), |line| lines.push(line.to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(lines.is_empty());
    summary_mock.assert_async().await;
    ranking_mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let mut server = Server::new_async().await;
    let summary_mock = server
        .mock("POST", "/api/summary")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.summary(&genes()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().contains("503"));
    summary_mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_ranking_after_summary() {
    let mut server = Server::new_async().await;
    let _summary_mock = server
        .mock("POST", "/api/summary")
        .with_status(200)
        .with_body(r#"{"median_percentile": 0.5, "change": -0.2, "p_value": 0.5}"#)
        .create_async()
        .await;
    let _ranking_mock = server
        .mock("POST", "/api/ranking")
        .with_status(200)
        .with_body("percentile\n")
        .create_async()
        .await;

    let client = client_for(&server);
    let mut lines = Vec::new();
    let err = run_report(&client, &genes(), |line| lines.push(line.to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    // Summary lines were already emitted before the ranking failed.
    assert_eq!(
        lines,
        vec![
            "Median percentile: 50.0%".to_string(),
            "Estimated score difference: -0.2 (p = 0.5)".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_ranking_without_percentile_column() {
    let mut server = Server::new_async().await;
    let _ranking_mock = server
        .mock("POST", "/api/ranking")
        .with_status(200)
        .with_body("gene,rank\nGAPDH,1\n")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.ranking(&genes()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_blocked_host_never_sent() {
    let client = UbigenClient::with_client(
        SandboxClient::new().unwrap(),
        Endpoints::from_base("https://example.org/api"),
    );
    let err = client.summary(&genes()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Security);
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_live_glycolysis_report() {
    let client = UbigenClient::new().expect("client");
    let report = run_report(&client, &GeneSet::glycolysis(), |line| println!("{}", line))
        .await
        .expect("Ubigen report failed");

    assert!((0.0..=1.0).contains(&report.summary.median_percentile.as_f64()));
    assert!((0.0..=1.0).contains(&report.recomputed_median));
}
