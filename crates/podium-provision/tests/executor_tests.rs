//! Integration tests for the provisioning executor — organization reuse,
//! partial-failure isolation, dry-run, and the end-to-end artifact flow.

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use podium_judge::models::{Organization, Team, User};
use podium_judge::JudgeClient;
use podium_provision::artifacts;
use podium_provision::{DirectorySnapshot, Executor, ProvisionPlan};
use podium_roster::RosterRecord;

const CONTEST: &str = "nwerc";

fn client(server: &MockServer) -> JudgeClient {
    JudgeClient::with_http_client(
        server.uri(),
        "admin".to_string(),
        "adminpw".to_string(),
        reqwest::Client::new(),
    )
}

fn record(team: &str, canonical: &str, external_id: &str) -> RosterRecord {
    RosterRecord {
        team: team.to_string(),
        uni_local: canonical.to_string(),
        uni_canonical: canonical.to_string(),
        external_id: external_id.to_string(),
    }
}

fn empty_snapshot() -> DirectorySnapshot {
    DirectorySnapshot::from_listings(vec![], vec![], vec![])
}

fn organization_create_mock(id: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!("/api/v4/contests/{CONTEST}/organizations")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": id,
            "name": "created",
            "shortname": id
        })))
}

#[tokio::test]
async fn test_end_to_end_sharif_example() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v4/contests/{CONTEST}/organizations")))
        .and(body_string_contains("sharif-university-of-technology"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "sharif-university-of-technology",
            "name": "Sharif University of Technology",
            "shortname": "sharif-university-of-technology"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v4/contests/{CONTEST}/teams")))
        .and(body_string_contains("Alpha Squad"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "42",
            "name": "Alpha Squad"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v4/users"))
        .and(body_string_contains("t42"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "42",
            "username": "t42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let roster = vec![record(
        "Alpha Squad",
        "Sharif University of Technology",
        "42",
    )];
    let mut snapshot = empty_snapshot();
    let plan = ProvisionPlan::build(&roster, &snapshot);
    assert_eq!(plan.records[0].username, "t42");

    let client = client(&server);
    let executor = Executor::new(&client, CONTEST, false);
    let report = executor.run(&plan, &mut snapshot).await;

    assert_eq!(report.failed, 0);
    assert_eq!(report.created.len(), 1);

    let dir = TempDir::new().unwrap();
    let path = artifacts::write_created(dir.path(), &report.created).unwrap();
    let created = artifacts::read_created(&path).unwrap();

    assert_eq!(created[0].team, "Alpha Squad");
    assert_eq!(created[0].id, "42");
    assert_eq!(created[0].username, "t42");
    assert_eq!(created[0].password.len(), 12);
    assert!(created[0].password.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_existing_organization_name_is_reused() {
    let server = MockServer::start().await;

    // No organization may be created when the name is already indexed.
    organization_create_mock("unused")
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v4/contests/{CONTEST}/teams")))
        .and(body_string_contains("org-7"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "1",
            "name": "Alpha"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v4/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "1",
            "username": "t1"
        })))
        .mount(&server)
        .await;

    let mut snapshot = DirectorySnapshot::from_listings(
        vec![Organization {
            id: "org-7".to_string(),
            name: Some("Yazd University".to_string()),
            shortname: Some("yazd-university".to_string()),
        }],
        vec![],
        vec![],
    );

    let roster = vec![record("Alpha", "Yazd University", "1")];
    let plan = ProvisionPlan::build(&roster, &snapshot);

    let client = client(&server);
    let report = Executor::new(&client, CONTEST, false)
        .run(&plan, &mut snapshot)
        .await;

    assert_eq!(report.created.len(), 1);
}

#[tokio::test]
async fn test_existing_organization_shortname_is_reused() {
    let server = MockServer::start().await;

    organization_create_mock("unused")
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v4/contests/{CONTEST}/teams")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "1",
            "name": "Alpha"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v4/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "1",
            "username": "t1"
        })))
        .mount(&server)
        .await;

    // Remote record carries the shortname only; the roster's display name
    // differs but slugs to the same value.
    let mut snapshot = DirectorySnapshot::from_listings(
        vec![Organization {
            id: "org-9".to_string(),
            name: None,
            shortname: Some("yazd-university".to_string()),
        }],
        vec![],
        vec![],
    );

    let roster = vec![record("Alpha", "Yazd  University", "1")];
    let plan = ProvisionPlan::build(&roster, &snapshot);

    let client = client(&server);
    let report = Executor::new(&client, CONTEST, false)
        .run(&plan, &mut snapshot)
        .await;

    assert_eq!(report.failed, 0);
    assert_eq!(report.created.len(), 1);
}

#[tokio::test]
async fn test_shared_university_creates_one_organization() {
    let server = MockServer::start().await;

    organization_create_mock("yazd-university")
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v4/contests/{CONTEST}/teams")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "1",
            "name": "created"
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v4/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "1",
            "username": "created"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let roster = vec![
        record("Alpha", "Yazd University", "1"),
        record("Beta", "Yazd University", "2"),
    ];
    let mut snapshot = empty_snapshot();
    let plan = ProvisionPlan::build(&roster, &snapshot);

    let client = client(&server);
    let report = Executor::new(&client, CONTEST, false)
        .run(&plan, &mut snapshot)
        .await;

    assert_eq!(report.failed, 0);
    assert_eq!(report.created.len(), 2);
}

#[tokio::test]
async fn test_failed_record_does_not_stop_later_records() {
    let server = MockServer::start().await;

    organization_create_mock("yazd-university")
        .mount(&server)
        .await;

    // Team creation fails for Alpha, succeeds for Beta.
    Mock::given(method("POST"))
        .and(path(format!("/api/v4/contests/{CONTEST}/teams")))
        .and(body_string_contains("Alpha"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v4/contests/{CONTEST}/teams")))
        .and(body_string_contains("Beta"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "2",
            "name": "Beta"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v4/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "2",
            "username": "t2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let roster = vec![
        record("Alpha", "Yazd University", "1"),
        record("Beta", "Yazd University", "2"),
    ];
    let mut snapshot = empty_snapshot();
    let plan = ProvisionPlan::build(&roster, &snapshot);

    let client = client(&server);
    let report = Executor::new(&client, CONTEST, false)
        .run(&plan, &mut snapshot)
        .await;

    assert_eq!(report.failed, 1);
    assert_eq!(report.created.len(), 1);
    assert_eq!(report.created[0].team, "Beta");

    // The created-accounts artifact still lists the surviving record.
    let dir = TempDir::new().unwrap();
    let path = artifacts::write_created(dir.path(), &report.created).unwrap();
    let created = artifacts::read_created(&path).unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].username, "t2");
}

#[tokio::test]
async fn test_dry_run_makes_no_create_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let roster = vec![
        record("Alpha", "Yazd University", "1"),
        record("Beta", "Yazd University", "2"),
    ];
    let mut snapshot = empty_snapshot();
    let plan = ProvisionPlan::build(&roster, &snapshot);

    let client = client(&server);
    let report = Executor::new(&client, CONTEST, true)
        .run(&plan, &mut snapshot)
        .await;

    assert_eq!(report.failed, 0);
    assert!(report.created.is_empty());

    // The placeholder id is indexed so later records in the run see the
    // organization as existing.
    assert_eq!(
        snapshot.organization_id("Yazd University"),
        Some("yazd-university")
    );
    assert_eq!(
        snapshot.organization_id("yazd-university"),
        Some("yazd-university")
    );
}

#[tokio::test]
async fn test_team_already_in_snapshot_is_never_recreated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut snapshot = DirectorySnapshot::from_listings(
        vec![],
        vec![Team {
            id: "42".to_string(),
            name: "Alpha Squad".to_string(),
        }],
        vec![User {
            id: "42".to_string(),
            username: "t42".to_string(),
            userid: Some(7),
            team: None,
            roles: vec![],
        }],
    );

    let roster = vec![record("Alpha Squad", "Sharif University of Technology", "42")];
    let plan = ProvisionPlan::build(&roster, &snapshot);
    assert!(plan.is_empty());

    let client = client(&server);
    let report = Executor::new(&client, CONTEST, false)
        .run(&plan, &mut snapshot)
        .await;

    assert!(report.created.is_empty());
    assert_eq!(report.failed, 0);
}
