/// Error object delivered by the data source instead of a payload.
///
/// Known shapes are `{body: [{message}, ...]}`, `{body: {message}}` and
/// `{statusText}`. Anything else is kept as an empty (unrecognized) error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchError {
    pub body: Option<FetchErrorBody>,
    pub status_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchErrorBody {
    Many(Vec<FetchErrorDetail>),
    Single(FetchErrorDetail),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchErrorDetail {
    pub message: Option<String>,
}

impl FetchError {
    pub fn with_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            body: Some(FetchErrorBody::Many(
                messages
                    .into_iter()
                    .map(|m| FetchErrorDetail {
                        message: Some(m.into()),
                    })
                    .collect(),
            )),
            status_text: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            body: Some(FetchErrorBody::Single(FetchErrorDetail {
                message: Some(message.into()),
            })),
            status_text: None,
        }
    }

    pub fn with_status_text(status_text: impl Into<String>) -> Self {
        Self {
            body: None,
            status_text: Some(status_text.into()),
        }
    }
}
