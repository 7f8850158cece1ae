//! Entities of the backup and restore service.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use super::PublicError;

const EXCHANGE_RESTORE_SESSION: &str = "#microsoft.graph.exchangeRestoreSession";
const ONEDRIVE_RESTORE_SESSION: &str = "#microsoft.graph.oneDriveForBusinessRestoreSession";
const SHAREPOINT_RESTORE_SESSION: &str = "#microsoft.graph.sharePointRestoreSession";

const DRIVE_PROTECTION_UNIT: &str = "#microsoft.graph.driveProtectionUnit";
const MAILBOX_PROTECTION_UNIT: &str = "#microsoft.graph.mailboxProtectionUnit";
const SITE_PROTECTION_UNIT: &str = "#microsoft.graph.siteProtectionUnit";

pub(crate) fn discriminator(value: &Value) -> String {
    value
        .get("@odata.type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Root of the backup and restore service.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct BackupRestoreRoot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "serviceStatus", skip_serializing_if = "Option::is_none")]
    pub service_status: Option<ServiceStatus>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ServiceStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatusValue>,
    #[serde(rename = "disableReason", skip_serializing_if = "Option::is_none")]
    pub disable_reason: Option<String>,
    #[serde(
        rename = "lastModifiedDateTime",
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date_time: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum ServiceStatusValue {
    Disabled,
    Enabled,
    ProtectionChangeLocked,
    RestoreChangeLocked,
    UnknownFutureValue,
}

impl From<String> for ServiceStatusValue {
    fn from(value: String) -> Self {
        match value.as_str() {
            "disabled" => Self::Disabled,
            "enabled" => Self::Enabled,
            "protectionChangeLocked" => Self::ProtectionChangeLocked,
            "restoreChangeLocked" => Self::RestoreChangeLocked,
            _ => Self::UnknownFutureValue,
        }
    }
}

impl From<ServiceStatusValue> for String {
    fn from(value: ServiceStatusValue) -> Self {
        match value {
            ServiceStatusValue::Disabled => "disabled",
            ServiceStatusValue::Enabled => "enabled",
            ServiceStatusValue::ProtectionChangeLocked => "protectionChangeLocked",
            ServiceStatusValue::RestoreChangeLocked => "restoreChangeLocked",
            ServiceStatusValue::UnknownFutureValue => "unknownFutureValue",
        }
        .to_string()
    }
}

/// Fields shared by every restore session variant.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct RestoreSessionProperties {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RestoreSessionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PublicError>,
    #[serde(
        rename = "createdDateTime",
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date_time: Option<OffsetDateTime>,
    #[serde(
        rename = "lastModifiedDateTime",
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date_time: Option<OffsetDateTime>,
    #[serde(
        rename = "completedDateTime",
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_date_time: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

/// A restore session, discriminated by its `@odata.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreSession {
    Exchange(RestoreSessionProperties),
    OneDriveForBusiness(RestoreSessionProperties),
    SharePoint(RestoreSessionProperties),
    /// A variant this crate does not model. The payload is preserved as-is.
    Unknown(RestoreSessionProperties),
}

impl RestoreSession {
    /// The fields shared by every variant.
    pub fn properties(&self) -> &RestoreSessionProperties {
        match self {
            Self::Exchange(p) | Self::OneDriveForBusiness(p) | Self::SharePoint(p) | Self::Unknown(p) => p,
        }
    }

    pub fn exchange(properties: RestoreSessionProperties) -> Self {
        Self::Exchange(tagged(properties, EXCHANGE_RESTORE_SESSION))
    }

    pub fn one_drive_for_business(properties: RestoreSessionProperties) -> Self {
        Self::OneDriveForBusiness(tagged(properties, ONEDRIVE_RESTORE_SESSION))
    }

    pub fn share_point(properties: RestoreSessionProperties) -> Self {
        Self::SharePoint(tagged(properties, SHAREPOINT_RESTORE_SESSION))
    }
}

fn tagged(mut properties: RestoreSessionProperties, tag: &str) -> RestoreSessionProperties {
    properties.odata_type = Some(tag.to_string());
    properties
}

impl Serialize for RestoreSession {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.properties().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RestoreSession {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tag = discriminator(&value);
        let properties = serde_json::from_value(value).map_err(D::Error::custom)?;
        Ok(match tag.as_str() {
            EXCHANGE_RESTORE_SESSION => Self::Exchange(properties),
            ONEDRIVE_RESTORE_SESSION => Self::OneDriveForBusiness(properties),
            SHAREPOINT_RESTORE_SESSION => Self::SharePoint(properties),
            _ => Self::Unknown(properties),
        })
    }
}

/// Lifecycle of a restore session.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum RestoreSessionStatus {
    Draft,
    Activating,
    Active,
    CompletedWithError,
    Completed,
    Failed,
    UnknownFutureValue,
}

impl From<String> for RestoreSessionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => Self::Draft,
            "activating" => Self::Activating,
            "active" => Self::Active,
            "completedWithError" => Self::CompletedWithError,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::UnknownFutureValue,
        }
    }
}

impl From<RestoreSessionStatus> for String {
    fn from(value: RestoreSessionStatus) -> Self {
        match value {
            RestoreSessionStatus::Draft => "draft",
            RestoreSessionStatus::Activating => "activating",
            RestoreSessionStatus::Active => "active",
            RestoreSessionStatus::CompletedWithError => "completedWithError",
            RestoreSessionStatus::Completed => "completed",
            RestoreSessionStatus::Failed => "failed",
            RestoreSessionStatus::UnknownFutureValue => "unknownFutureValue",
        }
        .to_string()
    }
}

/// Fields shared by every protection unit variant.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ProtectionUnitProperties {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Protection policy this unit belongs to.
    #[serde(rename = "policyId", skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProtectionUnitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PublicError>,
    #[serde(
        rename = "createdDateTime",
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date_time: Option<OffsetDateTime>,
    #[serde(
        rename = "lastModifiedDateTime",
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date_time: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

/// Protection unit for a OneDrive drive.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct DriveProtectionUnit {
    #[serde(flatten)]
    pub base: ProtectionUnitProperties,
    /// Directory object (user) whose drive is protected.
    #[serde(rename = "directoryObjectId", skip_serializing_if = "Option::is_none")]
    pub directory_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Protection unit for an Exchange mailbox.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct MailboxProtectionUnit {
    #[serde(flatten)]
    pub base: ProtectionUnitProperties,
    #[serde(rename = "directoryObjectId", skip_serializing_if = "Option::is_none")]
    pub directory_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Protection unit for a SharePoint site.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct SiteProtectionUnit {
    #[serde(flatten)]
    pub base: ProtectionUnitProperties,
    #[serde(rename = "siteId", skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

/// A protection unit, discriminated by its `@odata.type`. Returned mixed
/// from the polymorphic `protectionUnits` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtectionUnit {
    Drive(DriveProtectionUnit),
    Mailbox(MailboxProtectionUnit),
    Site(SiteProtectionUnit),
    /// A variant this crate does not model. The payload is preserved as-is.
    Unknown(ProtectionUnitProperties),
}

impl ProtectionUnit {
    /// The fields shared by every variant.
    pub fn properties(&self) -> &ProtectionUnitProperties {
        match self {
            Self::Drive(unit) => &unit.base,
            Self::Mailbox(unit) => &unit.base,
            Self::Site(unit) => &unit.base,
            Self::Unknown(properties) => properties,
        }
    }

    pub fn drive(mut unit: DriveProtectionUnit) -> Self {
        unit.base.odata_type = Some(DRIVE_PROTECTION_UNIT.to_string());
        Self::Drive(unit)
    }

    pub fn mailbox(mut unit: MailboxProtectionUnit) -> Self {
        unit.base.odata_type = Some(MAILBOX_PROTECTION_UNIT.to_string());
        Self::Mailbox(unit)
    }

    pub fn site(mut unit: SiteProtectionUnit) -> Self {
        unit.base.odata_type = Some(SITE_PROTECTION_UNIT.to_string());
        Self::Site(unit)
    }
}

impl Serialize for ProtectionUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Drive(unit) => unit.serialize(serializer),
            Self::Mailbox(unit) => unit.serialize(serializer),
            Self::Site(unit) => unit.serialize(serializer),
            Self::Unknown(properties) => properties.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ProtectionUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let unit = match discriminator(&value).as_str() {
            DRIVE_PROTECTION_UNIT => {
                Self::Drive(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            MAILBOX_PROTECTION_UNIT => {
                Self::Mailbox(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            SITE_PROTECTION_UNIT => {
                Self::Site(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            _ => Self::Unknown(serde_json::from_value(value).map_err(D::Error::custom)?),
        };
        Ok(unit)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum ProtectionUnitStatus {
    ProtectRequested,
    Protected,
    UnprotectRequested,
    Unprotected,
    RemoveRequested,
    UnknownFutureValue,
}

impl From<String> for ProtectionUnitStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "protectRequested" => Self::ProtectRequested,
            "protected" => Self::Protected,
            "unprotectRequested" => Self::UnprotectRequested,
            "unprotected" => Self::Unprotected,
            "removeRequested" => Self::RemoveRequested,
            _ => Self::UnknownFutureValue,
        }
    }
}

impl From<ProtectionUnitStatus> for String {
    fn from(value: ProtectionUnitStatus) -> Self {
        match value {
            ProtectionUnitStatus::ProtectRequested => "protectRequested",
            ProtectionUnitStatus::Protected => "protected",
            ProtectionUnitStatus::UnprotectRequested => "unprotectRequested",
            ProtectionUnitStatus::Unprotected => "unprotected",
            ProtectionUnitStatus::RemoveRequested => "removeRequested",
            ProtectionUnitStatus::UnknownFutureValue => "unknownFutureValue",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    fn test_restore_session_dispatches_on_discriminator() {
        let payload = serde_json::json!({
            "@odata.type": "#microsoft.graph.exchangeRestoreSession",
            "id": "1",
            "status": "draft",
        });
        let session: RestoreSession = serde_json::from_value(payload).unwrap();
        assert!(matches!(session, RestoreSession::Exchange(_)));
        assert_eq!(
            session.properties().status,
            Some(RestoreSessionStatus::Draft)
        );
    }

    #[rstest]
    fn test_unknown_discriminator_preserves_payload() {
        let payload = serde_json::json!({
            "@odata.type": "#microsoft.graph.somethingNewer",
            "id": "2",
            "novelField": true,
        });
        let session: RestoreSession = serde_json::from_value(payload.clone()).unwrap();
        let RestoreSession::Unknown(properties) = &session else {
            panic!("expected Unknown variant");
        };
        assert_eq!(properties.additional_data["novelField"], true);
        let reserialized = serde_json::to_value(&session).unwrap();
        assert_eq!(reserialized, payload);
    }

    #[rstest]
    fn test_protection_unit_variant_fields() {
        let payload = serde_json::json!({
            "@odata.type": "#microsoft.graph.siteProtectionUnit",
            "id": "3",
            "policyId": "p1",
            "siteId": "site-9",
            "status": "protected",
        });
        let unit: ProtectionUnit = serde_json::from_value(payload).unwrap();
        let ProtectionUnit::Site(site) = &unit else {
            panic!("expected Site variant");
        };
        assert_eq!(site.site_id.as_deref(), Some("site-9"));
        assert_eq!(unit.properties().policy_id.as_deref(), Some("p1"));
    }

    #[rstest]
    fn test_constructors_set_the_discriminator() {
        let session = RestoreSession::share_point(Default::default());
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(
            value["@odata.type"],
            "#microsoft.graph.sharePointRestoreSession"
        );
    }
}
