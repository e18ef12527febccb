// W3C WebDriver wire subset
//
// Only the shapes the page-object surface needs: new-session, the `value`
// response envelope, the error body, and element lookup. Everything is
// plain serde; no driver-specific extensions.
//
// See: https://www.w3.org/TR/webdriver2/

use crate::error::Error;
use crate::locator::Locator;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// JSON key carrying an element reference in W3C responses.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Every W3C response wraps its payload in `{"value": ...}`.
#[derive(Debug, Deserialize)]
pub struct ValueEnvelope<T> {
    pub value: T,
}

/// Error body carried in the `value` of a non-2xx response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub stacktrace: String,
}

impl ErrorBody {
    /// Maps a W3C error code onto the crate error taxonomy.
    pub fn into_error(self) -> Error {
        match self.error.as_str() {
            "no such element" => Error::ElementNotFound(self.message),
            "invalid session id" | "no such window" => Error::SessionClosed(self.message),
            "timeout" | "script timeout" => Error::Timeout(self.message),
            "invalid argument" | "invalid selector" => Error::InvalidArgument(self.message),
            _ => Error::Driver {
                error: self.error,
                message: self.message,
            },
        }
    }
}

/// `POST /session` request.
#[derive(Debug, Serialize)]
pub struct NewSessionRequest {
    pub capabilities: CapabilitiesRequest,
}

#[derive(Debug, Serialize)]
pub struct CapabilitiesRequest {
    #[serde(rename = "alwaysMatch")]
    pub always_match: JsonValue,
}

impl NewSessionRequest {
    pub fn with_capabilities(always_match: JsonValue) -> Self {
        Self {
            capabilities: CapabilitiesRequest { always_match },
        }
    }
}

/// `POST /session` response payload.
#[derive(Debug, Deserialize)]
pub struct NewSessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub capabilities: JsonValue,
}

/// `POST /session/{id}/url` request.
#[derive(Debug, Serialize)]
pub struct NavigateRequest<'a> {
    pub url: &'a str,
}

/// `POST /session/{id}/element` request.
#[derive(Debug, Serialize)]
pub struct FindRequest {
    pub using: &'static str,
    pub value: String,
}

impl From<&Locator> for FindRequest {
    fn from(locator: &Locator) -> Self {
        let (using, value) = locator.to_wire();
        Self { using, value }
    }
}

/// `POST /session/{id}/element` response payload: a one-entry map keyed by
/// [`ELEMENT_KEY`].
#[derive(Debug, Deserialize)]
pub struct ElementRef(pub HashMap<String, String>);

impl ElementRef {
    /// The element reference string, if the driver sent a W3C-shaped ref.
    pub fn reference(&self) -> Option<&str> {
        self.0.get(ELEMENT_KEY).map(String::as_str)
    }
}

/// `POST /session/{id}/element/{id}/value` request.
#[derive(Debug, Serialize)]
pub struct SendKeysRequest<'a> {
    pub text: &'a str,
}
