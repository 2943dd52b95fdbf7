//! Entities shared across services, with an explicit map representation.

use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{FieldType, Operation, SortOrder};
use crate::helpers::converters::struct_to_map;

/// Explicit map form of an entity, keyed by its wire field names.
pub trait ToMap {
    fn to_map(&self) -> Result<Map<String, Value>>;
}

macro_rules! impl_to_map {
    ($($ty:ty),+ $(,)?) => {
        $(impl ToMap for $ty {
            fn to_map(&self) -> Result<Map<String, Value>> {
                struct_to_map(self)
            }
        })+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInput {
    #[serde(default)]
    pub first: i64,
    #[serde(default)]
    pub last: i64,
    #[serde(default)]
    pub after: String,
    #[serde(default)]
    pub before: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortInput {
    #[serde(default)]
    pub sort_by: Vec<SortParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortParam {
    pub field_name: String,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterInput {
    pub search: Option<String>,
    #[serde(default)]
    pub filter_by: Vec<FilterParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParam {
    pub field_name: String,
    pub field_type: FieldType,
    pub comparison_operation: Operation,
    pub field_value: Value,
}

/// Phone communication whitelist entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneOptIn {
    pub msisdn: String,
    pub opted_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UssdSessionLog {
    pub msisdn: String,
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

/// Email communication whitelist entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailOptIn {
    pub email: String,
    pub opted_in: bool,
}

/// PIN tied to a phone number sign-up
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub uid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub msisdn: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pin: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_valid: bool,
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pin")
            .field("uid", &self.uid)
            .field("msisdn", &self.msisdn)
            .field("pin", &"***")
            .field("is_valid", &self.is_valid)
            .finish()
    }
}

/// File uploaded to cloud storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    pub id: String,
    pub url: String,
    pub size: i64,
    pub hash: String,
    pub creation: DateTime<Utc>,
    pub title: String,
    pub content_type: String,
    pub language: String,
    pub base64data: String,
}

impl Upload {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadInput {
    pub title: String,
    pub content_type: String,
    pub language: String,
    pub base64data: String,
    pub filename: String,
}

/// Domain error carrying a numeric code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: i32,
}

fn is_zero(code: &i32) -> bool {
    *code == 0
}

impl CustomError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            error: None,
            message: message.into(),
            code,
        }
    }

    pub fn with_cause(mut self, cause: impl fmt::Display) -> Self {
        self.error = Some(cause.to_string());
        self
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CustomError {}

impl_to_map!(
    PaginationInput,
    SortInput,
    SortParam,
    FilterInput,
    FilterParam,
    PhoneOptIn,
    UssdSessionLog,
    EmailOptIn,
    Pin,
    Upload,
    UploadInput,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn custom_error_display() {
        let err = CustomError::new(404, "not found").with_cause("missing row");
        assert_eq!(err.to_string(), "404: not found");
        assert_eq!(err.error.as_deref(), Some("missing row"));

        let wrapped: anyhow::Error = err.into();
        assert!(wrapped.downcast_ref::<CustomError>().is_some());
    }

    #[test]
    fn filter_param_map_uses_wire_names() {
        let param = FilterParam {
            field_name: "age".to_owned(),
            field_type: FieldType::Integer,
            comparison_operation: Operation::GreaterThan,
            field_value: json!(18),
        };
        let map = param.to_map().unwrap();
        assert_eq!(map["fieldName"], "age");
        assert_eq!(map["fieldType"], "INTEGER");
        assert_eq!(map["comparisonOperation"], "GREATER_THAN");
        assert_eq!(map["fieldValue"], 18);
    }

    #[test]
    fn pin_map_omits_empty_fields() {
        let pin = Pin { uid: "u1".to_owned(), ..Default::default() };
        let map = pin.to_map().unwrap();
        assert_eq!(Value::Object(map), json!({"uid": "u1"}));
        assert!(!format!("{:?}", Pin { pin: "1234".to_owned(), ..pin }).contains("1234"));
    }

    #[test]
    fn ussd_log_and_upload_field_names() {
        let log = UssdSessionLog { msisdn: "+254700000000".to_owned(), session_id: "s1".to_owned() };
        assert_eq!(log.to_map().unwrap()["sessionID"], "s1");

        let mut upload = Upload {
            id: String::new(),
            url: "https://storage.example.com/a.png".to_owned(),
            size: 10,
            hash: "abc".to_owned(),
            creation: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
            title: "a".to_owned(),
            content_type: "PNG".to_owned(),
            language: "en".to_owned(),
            base64data: "aGVsbG8=".to_owned(),
        };
        upload.set_id("up-1");
        assert_eq!(upload.id(), "up-1");
        let map = upload.to_map().unwrap();
        assert_eq!(map["contentType"], "PNG");
        assert_eq!(map["creation"], "2021-01-01T00:00:00Z");
    }

    #[test]
    fn sort_input_decodes_camel_case() {
        let input: SortInput =
            serde_json::from_value(json!({"sortBy": [{"fieldName": "name", "sortOrder": "DESC"}]})).unwrap();
        assert_eq!(input.sort_by[0].sort_order, SortOrder::Desc);
        assert!(serde_json::from_value::<SortParam>(json!({"fieldName": "x", "sortOrder": "down"})).is_err());
    }
}
