//! Integration tests for the jury form channel — edit-page scraping and
//! form submission.

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use podium_judge::jury::UserEditForm;
use podium_judge::{JudgeClientError, JuryClient};

fn jury_client(server: &MockServer) -> JuryClient {
    JuryClient::with_http_client(
        server.uri(),
        "abc123session".to_string(),
        reqwest::Client::new(),
    )
}

fn edit_page_html() -> String {
    r#"<html><body>
        <form name="user" method="post" action="/jury/users/7/edit">
            <select id="user_team" name="user[team]" class="form-control">
                <option value=""></option>
                <option value="17">Beta</option>
                <option value="42" selected="selected">Alpha Squad</option>
            </select>
        </form>
    </body></html>"#
        .to_string()
}

#[tokio::test]
async fn test_fetch_selected_team_sends_session_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jury/users/7/edit"))
        .and(header("Cookie", "PHPSESSID=abc123session"))
        .respond_with(ResponseTemplate::new(200).set_body_string(edit_page_html()))
        .expect(1)
        .mount(&server)
        .await;

    let team = jury_client(&server).fetch_selected_team(7).await.unwrap();
    assert_eq!(team, "42");
}

#[tokio::test]
async fn test_fetch_selected_team_without_selection_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jury/users/7/edit"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<select name="user[team]"><option value="">none</option></select>"#,
        ))
        .mount(&server)
        .await;

    let err = jury_client(&server).fetch_selected_team(7).await.unwrap_err();
    assert!(matches!(err, JudgeClientError::MissingTeamValue));
}

#[tokio::test]
async fn test_fetch_selected_team_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jury/users/7/edit"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let err = jury_client(&server).fetch_selected_team(7).await.unwrap_err();
    assert!(matches!(err, JudgeClientError::Api { status: 403, .. }));
}

#[tokio::test]
async fn test_update_user_submits_form_fields() {
    let server = MockServer::start().await;

    // Bracketed field names arrive percent-encoded in the form body.
    Mock::given(method("POST"))
        .and(path("/jury/users/7/edit"))
        .and(header("Cookie", "PHPSESSID=abc123session"))
        .and(body_string_contains("user%5BplainPassword%5D=s3cretpw"))
        .and(body_string_contains("user%5Bteam%5D=42"))
        .and(body_string_contains("user%5Buser_roles%5D%5B%5D=3"))
        .and(body_string_contains("user%5Benabled%5D=1"))
        .and(body_string_contains("user%5Bexternalid%5D=42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let form = UserEditForm {
        external_id: "42".to_string(),
        name: "Alpha Squad".to_string(),
        password: "s3cretpw".to_string(),
        enabled: true,
        team: "42".to_string(),
        role_codes: vec![3],
    };

    jury_client(&server).update_user(7, &form).await.unwrap();
}

#[tokio::test]
async fn test_update_user_rejection_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/jury/users/7/edit"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad form"))
        .mount(&server)
        .await;

    let form = UserEditForm {
        external_id: "42".to_string(),
        name: "Alpha Squad".to_string(),
        password: "s3cretpw".to_string(),
        enabled: true,
        team: "42".to_string(),
        role_codes: vec![3],
    };

    let err = jury_client(&server).update_user(7, &form).await.unwrap_err();
    assert!(matches!(err, JudgeClientError::Api { status: 400, .. }));
}
