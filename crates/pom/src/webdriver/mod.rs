// W3C WebDriver backend
//
// A thin HTTP client over an already-running driver (chromedriver,
// geckodriver, or a Selenium server). Deliberately not a full WebDriver
// client: only the endpoints behind `DriverSession` are spoken. Starting
// and stopping the driver process is the caller's business.

mod wire;

pub use wire::ELEMENT_KEY;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::{DriverSession, ElementId};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value as JsonValue, json};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};
use url::Url;
use wire::{
    ElementRef, ErrorBody, FindRequest, NavigateRequest, NewSessionRequest, NewSessionResponse,
    SendKeysRequest, ValueEnvelope,
};

/// A session against a W3C WebDriver endpoint.
///
/// # Examples
///
/// ```ignore
/// use pom_rs::WebDriverSession;
/// use std::sync::Arc;
///
/// // chromedriver --port=9515
/// let session = Arc::new(WebDriverSession::connect("http://localhost:9515").await?);
/// let page = LoginPage::new(session.clone());
/// page.visit().await?;
/// // ...
/// session.quit().await?;
/// ```
pub struct WebDriverSession {
    http: reqwest::Client,
    base: Url,
    session_id: String,
    closed: AtomicBool,
}

impl WebDriverSession {
    /// Creates a new session at `endpoint` with empty `alwaysMatch`
    /// capabilities.
    pub async fn connect(endpoint: &str) -> Result<Self> {
        Self::connect_with(endpoint, json!({})).await
    }

    /// Creates a new session at `endpoint` with the given `alwaysMatch`
    /// capabilities.
    pub async fn connect_with(endpoint: &str, always_match: JsonValue) -> Result<Self> {
        let base = parse_endpoint(endpoint)?;
        let http = reqwest::Client::new();
        let request = NewSessionRequest::with_capabilities(always_match);

        let url = base
            .join("session")
            .map_err(|e| Error::ConnectionFailed(e.to_string()))?;
        debug!(%url, "creating WebDriver session");
        let response = http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::ConnectionFailed(format!("{endpoint}: {e}")))?;
        let created: NewSessionResponse = decode(response).await?;
        debug!(session_id = %created.session_id, "session created");

        Ok(Self {
            http,
            base,
            session_id: created.session_id,
            closed: AtomicBool::new(false),
        })
    }

    /// Wraps a session that was created elsewhere.
    ///
    /// No request is made; the id is trusted until the first call fails.
    pub fn attach(endpoint: &str, session_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: parse_endpoint(endpoint)?,
            session_id: session_id.into(),
            closed: AtomicBool::new(false),
        })
    }

    /// The driver-assigned session id.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Ends the session on the driver. Further calls on this handle return
    /// [`Error::SessionClosed`].
    pub async fn quit(&self) -> Result<()> {
        self.ensure_open("quit")?;
        let url = self.route("")?;
        debug!(session_id = %self.session_id, "quitting session");
        let response = self.http.delete(url).send().await?;
        let _: JsonValue = decode(response).await?;
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn ensure_open(&self, op: &str) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::SessionClosed(format!(
                "cannot {op}, session already quit"
            )));
        }
        Ok(())
    }

    fn route(&self, path: &str) -> Result<Url> {
        let mut full = format!("session/{}", self.session_id);
        if !path.is_empty() {
            full.push('/');
            full.push_str(path);
        }
        Ok(self.base.join(&full)?)
    }

    async fn get<T: DeserializeOwned>(&self, op: &str, path: &str) -> Result<T> {
        self.ensure_open(op)?;
        let url = self.route(path)?;
        trace!(%op, %url, "GET");
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        op: &str,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        self.ensure_open(op)?;
        let url = self.route(path)?;
        trace!(%op, %url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        decode(response).await
    }
}

#[async_trait]
impl DriverSession for WebDriverSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        debug!(%url, "navigate");
        let _: JsonValue = self
            .post("navigate", "url", &NavigateRequest { url })
            .await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        self.get("current_url", "url").await
    }

    async fn title(&self) -> Result<String> {
        self.get("title", "title").await
    }

    async fn find(&self, locator: &Locator) -> Result<ElementId> {
        let request = FindRequest::from(locator);
        let element: ElementRef = self.post("find", "element", &request).await?;
        match element.reference() {
            Some(reference) => Ok(ElementId(reference.to_string())),
            None => Err(Error::Protocol(format!(
                "find response for '{locator}' carried no {ELEMENT_KEY} key"
            ))),
        }
    }

    async fn click(&self, element: &ElementId) -> Result<()> {
        let _: JsonValue = self
            .post("click", &format!("element/{element}/click"), &json!({}))
            .await?;
        Ok(())
    }

    async fn clear(&self, element: &ElementId) -> Result<()> {
        let _: JsonValue = self
            .post("clear", &format!("element/{element}/clear"), &json!({}))
            .await?;
        Ok(())
    }

    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()> {
        let _: JsonValue = self
            .post(
                "send_keys",
                &format!("element/{element}/value"),
                &SendKeysRequest { text },
            )
            .await?;
        Ok(())
    }

    async fn text(&self, element: &ElementId) -> Result<String> {
        self.get("text", &format!("element/{element}/text")).await
    }

    async fn attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>> {
        self.get(
            "attribute",
            &format!("element/{element}/attribute/{name}"),
        )
        .await
    }

    async fn is_displayed(&self, element: &ElementId) -> Result<bool> {
        self.get("is_displayed", &format!("element/{element}/displayed"))
            .await
    }

    async fn is_enabled(&self, element: &ElementId) -> Result<bool> {
        self.get("is_enabled", &format!("element/{element}/enabled"))
            .await
    }
}

/// Parses the endpoint and guarantees a trailing slash so `Url::join` keeps
/// the full path (`http://host:4444/wd/hub` stays intact).
fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let mut text = endpoint.to_string();
    if !text.ends_with('/') {
        text.push('/');
    }
    Url::parse(&text).map_err(|e| Error::ConnectionFailed(format!("{endpoint}: {e}")))
}

/// Unwraps the `{"value": ...}` envelope, turning error bodies into crate
/// errors.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if status.is_success() {
        let envelope: ValueEnvelope<T> = serde_json::from_slice(&bytes)
            .map_err(|e| Error::Protocol(format!("malformed success response: {e}")))?;
        Ok(envelope.value)
    } else {
        match serde_json::from_slice::<ValueEnvelope<ErrorBody>>(&bytes) {
            Ok(envelope) => Err(envelope.value.into_error()),
            Err(_) => Err(Error::Protocol(format!(
                "driver returned {status} with a non-W3C body"
            ))),
        }
    }
}
