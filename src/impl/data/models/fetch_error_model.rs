use serde_json::Value;

use crate::entities::{FetchError, FetchErrorBody, FetchErrorDetail};

/// Error objects come in several shapes, so fields are kept as raw JSON and
/// only interpreted during conversion. Unrecognized shapes convert to an empty
/// `FetchError`.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FetchErrorModel {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub status_text: Option<Value>,
}

fn detail(value: &Value) -> FetchErrorDetail {
    FetchErrorDetail {
        message: value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

impl Into<FetchError> for FetchErrorModel {
    fn into(self) -> FetchError {
        let body = match &self.body {
            Some(Value::Array(items)) => {
                Some(FetchErrorBody::Many(items.iter().map(detail).collect()))
            }
            Some(v @ Value::Object(_)) => Some(FetchErrorBody::Single(detail(v))),
            _ => None,
        };
        FetchError {
            body,
            status_text: self
                .status_text
                .as_ref()
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}
