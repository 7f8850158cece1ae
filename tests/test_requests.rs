//! Request-construction behavior: URL resolution, query encoding, header
//! defaults. Nothing here talks to a server.

use graph_solutions::errors::GraphError;
use graph_solutions::{ODataQuery, RequestConfiguration, SolutionsClient};
use reqwest::header::{HeaderValue, ACCEPT};
use rstest::*;

mod helpers;
use helpers::{StubAdapter, TESTING_URL};

#[fixture]
fn client() -> SolutionsClient {
    SolutionsClient::new(StubAdapter::new())
}

#[rstest]
fn test_collection_url_without_query(client: SolutionsClient) {
    let request = client
        .backup_restore()
        .drive_protection_units()
        .to_get_request(None);
    assert_eq!(
        request.uri().unwrap(),
        format!("{TESTING_URL}/solutions/backupRestore/driveProtectionUnits")
    );
    assert_eq!(request.headers.get(ACCEPT).unwrap(), "application/json");
}

#[rstest]
fn test_exactly_the_present_query_options_are_encoded(client: SolutionsClient) {
    let config = RequestConfiguration::new().query(
        ODataQuery::new()
            .top(10)
            .skip(5)
            .filter("startsWith(name,'A')"),
    );
    let request = client
        .backup_restore()
        .drive_protection_units()
        .to_get_request(Some(&config));
    assert_eq!(
        request.uri().unwrap(),
        format!(
            "{TESTING_URL}/solutions/backupRestore/driveProtectionUnits\
             ?%24filter=startsWith%28name%2C%27A%27%29&%24skip=5&%24top=10"
        )
    );
}

#[rstest]
fn test_no_config_equals_default_config(client: SolutionsClient) {
    let sessions = client.backup_restore().restore_sessions();
    let bare = sessions.to_get_request(None);
    let configured = sessions.to_get_request(Some(&RequestConfiguration::default()));
    assert_eq!(bare.uri().unwrap(), configured.uri().unwrap());
    assert_eq!(bare.headers, configured.headers);
    assert_eq!(bare.method, configured.method);
}

#[rstest]
fn test_by_id_binds_exactly_one_parameter(client: SolutionsClient) {
    let sessions = client.backup_restore().restore_sessions();
    let request = sessions.by_id("s-1").to_get_request(None);
    assert_eq!(
        request.uri().unwrap(),
        format!("{TESTING_URL}/solutions/backupRestore/restoreSessions/s-1")
    );
}

#[rstest]
fn test_empty_id_passes_parameters_through_unmodified(client: SolutionsClient) {
    let item = client.backup_restore().restore_sessions().by_id("");
    assert_eq!(item.path_parameters().len(), 1);
    assert!(item.path_parameters().contains_key("baseurl"));
    let err = item.to_get_request(None).uri().unwrap_err();
    assert!(matches!(err, GraphError::Template(name) if name == "restoreSessionId"));
}

#[rstest]
fn test_nested_navigation_preserves_parent_parameters(client: SolutionsClient) {
    let request = client
        .virtual_events()
        .webinars()
        .by_id("w 1")
        .sessions()
        .by_id("s1")
        .to_get_request(None);
    assert_eq!(
        request.uri().unwrap(),
        format!("{TESTING_URL}/solutions/virtualEvents/webinars/w%201/sessions/s1")
    );
}

#[rstest]
fn test_with_url_overrides_everything(client: SolutionsClient) {
    let raw = "https://graph.microsoft.com/v1.0/anything?already=there";
    let config = RequestConfiguration::new().query(ODataQuery::new().top(3));
    let request = client
        .backup_restore()
        .restore_sessions()
        .with_url(raw)
        .to_get_request(Some(&config));
    assert_eq!(request.uri().unwrap(), raw);
}

#[rstest]
fn test_caller_accept_header_beats_the_default(client: SolutionsClient) {
    let config = RequestConfiguration::new().header(
        ACCEPT,
        HeaderValue::from_static("application/json;odata.metadata=minimal"),
    );
    let request = client
        .virtual_events()
        .events()
        .to_get_request(Some(&config));
    assert_eq!(
        request.headers.get(ACCEPT).unwrap(),
        "application/json;odata.metadata=minimal"
    );
}

#[rstest]
fn test_count_endpoint_is_plain_text(client: SolutionsClient) {
    let config = RequestConfiguration::new().query(ODataQuery::new().filter("status eq 'active'"));
    let request = client
        .virtual_events()
        .events()
        .count()
        .to_get_request(Some(&config));
    assert_eq!(
        request.uri().unwrap(),
        format!("{TESTING_URL}/solutions/virtualEvents/events/$count?%24filter=status+eq+%27active%27")
    );
    assert_eq!(request.headers.get(ACCEPT).unwrap(), "text/plain");
}

#[rstest]
fn test_select_joins_with_comma(client: SolutionsClient) {
    let config =
        RequestConfiguration::new().query(ODataQuery::new().select(["id", "displayName"]));
    let request = client
        .virtual_events()
        .webinars()
        .to_get_request(Some(&config));
    assert_eq!(
        request.uri().unwrap(),
        format!("{TESTING_URL}/solutions/virtualEvents/webinars?%24select=id%2CdisplayName")
    );
}
