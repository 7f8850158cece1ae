//! Entities of the virtual events service.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::backup_restore::discriminator;
use super::{DateTimeTimeZone, ItemBody};

const VIRTUAL_EVENT: &str = "#microsoft.graph.virtualEvent";
const VIRTUAL_EVENT_WEBINAR: &str = "#microsoft.graph.virtualEventWebinar";

/// Root of the virtual events service.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct VirtualEventsRoot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

/// Fields shared by every virtual event variant.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct VirtualEventProperties {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<ItemBody>,
    #[serde(rename = "startDateTime", skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTimeTimeZone>,
    #[serde(rename = "endDateTime", skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTimeTimeZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VirtualEventStatus>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

/// A webinar: a virtual event with an audience and registration.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct VirtualEventWebinar {
    #[serde(flatten)]
    pub base: VirtualEventProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<MeetingAudience>,
}

/// A virtual event, discriminated by its `@odata.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum VirtualEvent {
    Event(VirtualEventProperties),
    Webinar(VirtualEventWebinar),
    /// A variant this crate does not model. The payload is preserved as-is.
    Unknown(VirtualEventProperties),
}

impl VirtualEvent {
    /// The fields shared by every variant.
    pub fn properties(&self) -> &VirtualEventProperties {
        match self {
            Self::Event(properties) | Self::Unknown(properties) => properties,
            Self::Webinar(webinar) => &webinar.base,
        }
    }

    pub fn event(mut properties: VirtualEventProperties) -> Self {
        properties.odata_type = Some(VIRTUAL_EVENT.to_string());
        Self::Event(properties)
    }

    pub fn webinar(mut webinar: VirtualEventWebinar) -> Self {
        webinar.base.odata_type = Some(VIRTUAL_EVENT_WEBINAR.to_string());
        Self::Webinar(webinar)
    }
}

impl Serialize for VirtualEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Event(properties) | Self::Unknown(properties) => properties.serialize(serializer),
            Self::Webinar(webinar) => webinar.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for VirtualEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let event = match discriminator(&value).as_str() {
            VIRTUAL_EVENT => Self::Event(serde_json::from_value(value).map_err(D::Error::custom)?),
            VIRTUAL_EVENT_WEBINAR => {
                Self::Webinar(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            _ => Self::Unknown(serde_json::from_value(value).map_err(D::Error::custom)?),
        };
        Ok(event)
    }
}

/// One session on a virtual event's agenda.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct VirtualEventSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "startDateTime", skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTimeTimeZone>,
    #[serde(rename = "endDateTime", skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTimeTimeZone>,
    #[serde(rename = "joinWebUrl", skip_serializing_if = "Option::is_none")]
    pub join_web_url: Option<String>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum VirtualEventStatus {
    Draft,
    Published,
    Canceled,
    UnknownFutureValue,
}

impl From<String> for VirtualEventStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => Self::Draft,
            "published" => Self::Published,
            "canceled" => Self::Canceled,
            _ => Self::UnknownFutureValue,
        }
    }
}

impl From<VirtualEventStatus> for String {
    fn from(value: VirtualEventStatus) -> Self {
        match value {
            VirtualEventStatus::Draft => "draft",
            VirtualEventStatus::Published => "published",
            VirtualEventStatus::Canceled => "canceled",
            VirtualEventStatus::UnknownFutureValue => "unknownFutureValue",
        }
        .to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum MeetingAudience {
    Everyone,
    Organization,
    UnknownFutureValue,
}

impl From<String> for MeetingAudience {
    fn from(value: String) -> Self {
        match value.as_str() {
            "everyone" => Self::Everyone,
            "organization" => Self::Organization,
            _ => Self::UnknownFutureValue,
        }
    }
}

impl From<MeetingAudience> for String {
    fn from(value: MeetingAudience) -> Self {
        match value {
            MeetingAudience::Everyone => "everyone",
            MeetingAudience::Organization => "organization",
            MeetingAudience::UnknownFutureValue => "unknownFutureValue",
        }
        .to_string()
    }
}
