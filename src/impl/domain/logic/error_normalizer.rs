use crate::entities::{FetchError, FetchErrorBody};

pub(crate) const UNKNOWN_ERROR: &str = "Unknown error";

pub(crate) struct ErrorNormalizer;

impl ErrorNormalizer {
    /// First matching case wins:
    ///   1. list body: non-empty sub-error messages joined with ", ",
    ///   2. single body: its message,
    ///   3. status text,
    ///   4. "Unknown error".
    pub(crate) fn normalize(error: &FetchError) -> String {
        let from_body = match &error.body {
            Some(FetchErrorBody::Many(details)) => {
                let messages: Vec<&str> = details
                    .iter()
                    .filter_map(|d| d.message.as_deref())
                    .filter(|m| !m.is_empty())
                    .collect();
                (!messages.is_empty()).then(|| messages.join(", "))
            }
            Some(FetchErrorBody::Single(detail)) => {
                detail.message.clone().filter(|m| !m.is_empty())
            }
            None => None,
        };
        from_body
            .or_else(|| error.status_text.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}
