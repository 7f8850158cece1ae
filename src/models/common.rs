use serde::{Deserialize, Serialize};

/// Body of a rich-content field.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ItemBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<BodyType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum BodyType {
    Text,
    Html,
    UnknownFutureValue,
}

impl From<String> for BodyType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "text" => Self::Text,
            "html" => Self::Html,
            _ => Self::UnknownFutureValue,
        }
    }
}

impl From<BodyType> for String {
    fn from(value: BodyType) -> Self {
        match value {
            BodyType::Text => "text",
            BodyType::Html => "html",
            BodyType::UnknownFutureValue => "unknownFutureValue",
        }
        .to_string()
    }
}

/// Date and time paired with a time zone identifier, as Graph represents
/// scheduled (wall-clock) times.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct DateTimeTimeZone {
    /// Local date and time, e.g. `2024-03-30T10:00:00`.
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// IANA or Windows time zone name, e.g. `America/New_York`.
    #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Error detail embedded in long-running resources such as restore sessions
/// and protection units. Distinct from the transport-level OData error.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PublicError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<PublicErrorDetail>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PublicErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("text", BodyType::Text)]
    #[case("html", BodyType::Html)]
    #[case("unknownFutureValue", BodyType::UnknownFutureValue)]
    #[case("markdown", BodyType::UnknownFutureValue)]
    fn test_body_type_is_open_world(#[case] wire: &str, #[case] expected: BodyType) {
        let parsed: BodyType = serde_json::from_value(serde_json::json!(wire)).unwrap();
        assert_eq!(parsed, expected);
    }
}
