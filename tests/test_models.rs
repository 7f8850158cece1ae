//! Model round trips: explicit-set fields survive, never-set fields stay
//! absent, unknown discriminators and enum values degrade gracefully.

use graph_solutions::models::*;
use rstest::*;
use serde_json::json;

#[rstest]
fn test_unset_fields_stay_absent_across_a_round_trip() {
    let properties = RestoreSessionProperties {
        id: Some("1".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&properties).unwrap();
    assert_eq!(value, json!({"id": "1"}));

    let back: RestoreSessionProperties = serde_json::from_value(value).unwrap();
    assert_eq!(back, properties);
    assert!(back.status.is_none());
    assert!(back.created_date_time.is_none());
}

#[rstest]
fn test_additional_data_round_trips() {
    let mut properties = RestoreSessionProperties::default();
    properties
        .additional_data
        .insert("restorePointPreference".to_string(), json!("latest"));
    let session = RestoreSession::exchange(properties);

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["@odata.type"], "#microsoft.graph.exchangeRestoreSession");
    assert_eq!(value["restorePointPreference"], "latest");

    let back: RestoreSession = serde_json::from_value(value).unwrap();
    assert_eq!(back, session);
}

#[rstest]
fn test_patch_body_contains_only_set_fields() {
    let webinar = VirtualEventWebinar {
        base: VirtualEventProperties {
            display_name: Some("New name".to_string()),
            ..Default::default()
        },
        audience: None,
    };
    assert_eq!(
        serde_json::to_value(&webinar).unwrap(),
        json!({"displayName": "New name"})
    );
}

#[rstest]
fn test_mixed_protection_unit_collection() {
    let payload = json!({
        "@odata.count": 3,
        "@odata.nextLink": "https://graph.microsoft.com/v1.0/next",
        "value": [
            {"@odata.type": "#microsoft.graph.driveProtectionUnit", "id": "1", "email": "a@contoso.com"},
            {"@odata.type": "#microsoft.graph.mailboxProtectionUnit", "id": "2"},
            {"@odata.type": "#microsoft.graph.fileShareProtectionUnit", "id": "3"},
        ],
    });
    let page: CollectionResponse<ProtectionUnit> = serde_json::from_value(payload).unwrap();
    assert_eq!(page.count, Some(3));
    assert!(page.next_link.is_some());
    assert!(matches!(page.value[0], ProtectionUnit::Drive(_)));
    assert!(matches!(page.value[1], ProtectionUnit::Mailbox(_)));
    assert!(matches!(page.value[2], ProtectionUnit::Unknown(_)));
    assert_eq!(page.value[2].properties().id.as_deref(), Some("3"));
}

#[rstest]
fn test_timestamps_parse_as_rfc3339() {
    let session: RestoreSession = serde_json::from_value(json!({
        "@odata.type": "#microsoft.graph.oneDriveForBusinessRestoreSession",
        "createdDateTime": "2024-03-30T10:01:02Z",
        "status": "activating",
    }))
    .unwrap();
    let created = session.properties().created_date_time.unwrap();
    assert_eq!(created.year(), 2024);
    assert_eq!(
        session.properties().status,
        Some(RestoreSessionStatus::Activating)
    );
}

#[rstest]
fn test_enum_values_outside_the_closed_set_degrade() {
    let status: RestoreSessionStatus = serde_json::from_value(json!("hibernating")).unwrap();
    assert_eq!(status, RestoreSessionStatus::UnknownFutureValue);
    assert_eq!(
        serde_json::to_value(RestoreSessionStatus::Active).unwrap(),
        json!("active")
    );
}

#[rstest]
fn test_empty_collection_payload() {
    let page: CollectionResponse<VirtualEventSession> =
        serde_json::from_value(json!({})).unwrap();
    assert!(page.value.is_empty());
    assert!(page.count.is_none());
    assert!(page.next_link.is_none());
}
