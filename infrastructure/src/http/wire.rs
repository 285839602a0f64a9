//! Request and response shapes of the HTTP subsystems.
//!
//! Both services answer with either a bare JSON array or an object wrapping
//! the array under a named key.

use docquery_application::{RetrievalError, SynthesisError};
use docquery_domain::{Match, Theme};
use serde::Serialize;
use serde_json::Value;

/// Body POSTed to the theme service
#[derive(Debug, Serialize)]
pub(crate) struct ThemeRequestBody<'a> {
    pub matches: &'a [Match],
    pub theme_count: u32,
}

/// Transport level failure shared by both adapters
#[derive(Debug, PartialEq)]
pub(crate) enum WireError {
    Connection(String),
    Status(String),
    Decode(String),
}

impl WireError {
    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            WireError::Connection(e.to_string())
        } else if e.is_decode() {
            WireError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            WireError::Status(status_text(status))
        } else {
            WireError::Connection(e.to_string())
        }
    }
}

impl From<WireError> for RetrievalError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::Connection(msg) => RetrievalError::Connection(msg),
            WireError::Status(msg) => RetrievalError::RequestFailed(msg),
            WireError::Decode(msg) => RetrievalError::InvalidResponse(msg),
        }
    }
}

impl From<WireError> for SynthesisError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::Connection(msg) => SynthesisError::Connection(msg),
            WireError::Status(msg) => SynthesisError::RequestFailed(msg),
            WireError::Decode(msg) => SynthesisError::InvalidResponse(msg),
        }
    }
}

pub(crate) fn status_text(status: reqwest::StatusCode) -> String {
    format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

/// POST `body` as JSON and return the decoded JSON response.
pub(crate) async fn post_json<B: Serialize + ?Sized>(
    client: &reqwest::Client,
    endpoint: &str,
    body: &B,
) -> Result<Value, WireError> {
    let response = client
        .post(endpoint)
        .json(body)
        .send()
        .await
        .map_err(WireError::from_reqwest)?;

    let status = response.status();
    if !status.is_success() {
        return Err(WireError::Status(status_text(status)));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| WireError::Decode(e.to_string()))
}

fn unwrap_list(body: Value, key: &str) -> Result<Vec<Value>, WireError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(WireError::Decode(format!("'{}' is not an array", key))),
            None => Err(WireError::Decode(format!(
                "expected an array or an object with '{}'",
                key
            ))),
        },
        _ => Err(WireError::Decode(format!(
            "expected an array or an object with '{}'",
            key
        ))),
    }
}

pub(crate) fn parse_matches(body: Value) -> Result<Vec<Match>, WireError> {
    Ok(unwrap_list(body, "matches")?
        .into_iter()
        .map(Match::new)
        .collect())
}

pub(crate) fn parse_themes(body: Value) -> Result<Vec<Theme>, WireError> {
    Ok(unwrap_list(body, "themes")?
        .into_iter()
        .map(Theme::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_of_matches() {
        let matches = parse_matches(json!([{"text": "a"}, {"text": "b"}])).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].as_value()["text"], "b");
    }

    #[test]
    fn test_wrapped_themes() {
        let themes = parse_themes(json!({"themes": [{"label": "cost"}], "model": "x"})).unwrap();
        assert_eq!(themes, vec![Theme::new(json!({"label": "cost"}))]);
    }

    #[test]
    fn test_wrong_key_is_decode_error() {
        let err = parse_matches(json!({"themes": []})).unwrap_err();
        assert!(matches!(err, WireError::Decode(_)));
    }

    #[test]
    fn test_scalar_body_is_decode_error() {
        assert!(matches!(
            parse_themes(json!("oops")).unwrap_err(),
            WireError::Decode(_)
        ));
    }

    #[test]
    fn test_status_maps_to_request_failed() {
        let err: RetrievalError =
            WireError::Status(status_text(reqwest::StatusCode::BAD_GATEWAY)).into();
        assert_eq!(err.to_string(), "Request failed: HTTP 502 Bad Gateway");
    }

    #[test]
    fn test_theme_body_shape() {
        let matches = vec![Match::new(json!({"text": "a"}))];
        let body = ThemeRequestBody {
            matches: &matches,
            theme_count: 3,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"matches": [{"text": "a"}], "theme_count": 3})
        );
    }
}
