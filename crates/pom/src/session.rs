// Driver session seam
//
// `DriverSession` is the object-safe boundary between page objects and
// whatever automation client actually drives the browser. The crate ships
// one implementation (`webdriver::WebDriverSession`); tests and consumers
// with their own client implement the trait themselves.
//
// Deliberately narrow: only the operations the page-object surface needs.
// Browser/process lifecycle, windows, frames, screenshots and the rest of
// the driver API stay with the underlying client.

use crate::error::Result;
use crate::locator::Locator;
use crate::wait::WaitConfig;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Opaque reference to an element held by the driver.
///
/// The inner string is the driver's element reference (for W3C WebDriver,
/// the value keyed by `element-6066-11e4-a52e-4f735466cecf`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub String);

impl ElementId {
    /// The raw reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A live connection to a browser, able to navigate and interact with
/// elements.
///
/// Implementations must be `Send + Sync`; page objects hold the session
/// behind an `Arc` and may be used from spawned tasks.
#[async_trait]
pub trait DriverSession: Send + Sync {
    /// Navigates the session to `url`.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Returns the URL the session is currently at.
    async fn current_url(&self) -> Result<String>;

    /// Returns the current document title.
    async fn title(&self) -> Result<String>;

    /// Finds the first element matching `locator`.
    ///
    /// Single-shot: implementations do not wait or retry. Retry policy lives
    /// in element resolution (see [`WaitConfig`]).
    async fn find(&self, locator: &Locator) -> Result<ElementId>;

    /// Clicks the element.
    async fn click(&self, element: &ElementId) -> Result<()>;

    /// Clears the element's value (text inputs).
    async fn clear(&self, element: &ElementId) -> Result<()>;

    /// Sends keystrokes to the element.
    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()>;

    /// Returns the element's rendered text.
    async fn text(&self, element: &ElementId) -> Result<String>;

    /// Returns the element's attribute value, if present.
    async fn attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>>;

    /// Whether the element is rendered visible.
    async fn is_displayed(&self, element: &ElementId) -> Result<bool>;

    /// Whether the element is enabled for interaction.
    async fn is_enabled(&self, element: &ElementId) -> Result<bool>;
}

/// Cheap-to-clone handle a page object holds onto its driver session.
///
/// Pairs the session with the wait policy used when resolving elements.
/// Pass either a `PageSession` or a bare `Arc<dyn DriverSession>` anywhere
/// one is expected:
///
/// ```ignore
/// let session = Arc::new(WebDriverSession::connect("http://localhost:9515").await?);
/// let page = LoginPage::new(session.clone());
/// let patient = LoginPage::new(PageSession::new(session).with_wait(WaitConfig::new(60_000, 250)));
/// ```
#[derive(Clone)]
pub struct PageSession {
    driver: Arc<dyn DriverSession>,
    wait: WaitConfig,
}

impl PageSession {
    /// Wraps a driver session with the default wait policy.
    pub fn new(driver: Arc<dyn DriverSession>) -> Self {
        Self {
            driver,
            wait: WaitConfig::default(),
        }
    }

    /// Replaces the wait policy used for element resolution.
    #[must_use]
    pub fn with_wait(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }

    /// The underlying driver session.
    pub fn driver(&self) -> &Arc<dyn DriverSession> {
        &self.driver
    }

    /// The wait policy for element resolution.
    pub fn wait(&self) -> WaitConfig {
        self.wait
    }
}

impl fmt::Debug for PageSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSession")
            .field("wait", &self.wait)
            .finish_non_exhaustive()
    }
}

impl From<Arc<dyn DriverSession>> for PageSession {
    fn from(driver: Arc<dyn DriverSession>) -> Self {
        Self::new(driver)
    }
}

impl<S: DriverSession + 'static> From<Arc<S>> for PageSession {
    fn from(driver: Arc<S>) -> Self {
        Self::new(driver)
    }
}
