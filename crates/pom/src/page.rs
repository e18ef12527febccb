// Page - base abstraction page definitions implement
//
// A page object couples one declared URL with the session it runs against.
// `visit` navigates to exactly the declared URL; everything else a page does
// is ordinary inherent methods on the implementing type.

use crate::error::Result;
use crate::session::PageSession;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// A page object: one declared URL plus the elements that live on it.
///
/// Implement `url` and `session` (or let the `#[page]` macro do it) and the
/// navigation surface comes for free.
///
/// # Examples
///
/// ```ignore
/// use pom_rs::{Button, Locator, Page, PageComponent, PageSession, Textbox};
///
/// struct SearchPage {
///     session: PageSession,
///     query: Textbox,
///     submit: Button,
/// }
///
/// impl SearchPage {
///     fn new(session: impl Into<PageSession>) -> Self {
///         let session = session.into();
///         Self {
///             query: Textbox::attach(session.clone(), Locator::name("q")),
///             submit: Button::attach(session.clone(), Locator::css("button[type='submit']")),
///             session,
///         }
///     }
///
///     /// Composite action: ordinary method, no registration machinery.
///     async fn search(&self, term: &str) -> pom_rs::Result<()> {
///         self.query.set(term).await?;
///         self.submit.click().await
///     }
/// }
///
/// impl Page for SearchPage {
///     fn url(&self) -> &str {
///         "https://example.com/search"
///     }
///
///     fn session(&self) -> &PageSession {
///         &self.session
///     }
/// }
/// ```
#[async_trait]
pub trait Page: Send + Sync {
    /// The URL this page is declared at.
    fn url(&self) -> &str;

    /// The session this page object runs against.
    fn session(&self) -> &PageSession;

    /// Navigates the session to the declared URL.
    ///
    /// The URL is validated before the driver sees it, so a malformed
    /// declaration fails with [`Error::InvalidUrl`](crate::Error::InvalidUrl)
    /// rather than a driver-dependent message.
    async fn visit(&self) -> Result<()> {
        // Validation only: the driver gets the declared string untouched, so
        // the session lands on exactly the URL the page declares.
        let _ = Url::parse(self.url())?;
        debug!(url = self.url(), "visit");
        self.session().driver().navigate(self.url()).await
    }

    /// The document title of whatever the session currently shows.
    async fn title(&self) -> Result<String> {
        self.session().driver().title().await
    }

    /// The URL the session is currently at.
    async fn current_url(&self) -> Result<String> {
        self.session().driver().current_url().await
    }

    /// Whether the session is currently on this page, judged by URL prefix.
    async fn is_open(&self) -> Result<bool> {
        let current = self.current_url().await?;
        Ok(current.starts_with(self.url()))
    }
}
