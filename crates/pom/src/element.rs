// Typed page components
//
// Components are lazy wrappers over (session, locator), the same shape as a
// Playwright locator: nothing talks to the driver until an action runs.
// Unlike a Playwright locator, the first successful resolution is cached for
// the lifetime of the page object, so every action on one accessor hits the
// same underlying element reference. Clones share the cache.

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::{ElementId, PageSession};
use crate::wait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, trace};

/// Types that can be constructed as a declared element of a page.
///
/// The `#[page]` macro constructs every annotated field through this trait;
/// hand-written pages can do the same.
pub trait PageComponent {
    /// Binds a component to a session and locator.
    fn attach(session: PageSession, locator: Locator) -> Self;
}

/// A lazily-resolved element on a page.
///
/// Resolution polls the session's `find` according to the page session's
/// [`WaitConfig`](crate::WaitConfig) and caches the element reference on
/// first success. A fresh page object starts with an empty cache.
#[derive(Clone)]
pub struct Element {
    session: PageSession,
    locator: Locator,
    resolved: Arc<OnceCell<ElementId>>,
}

impl Element {
    /// Creates an unresolved element.
    pub fn new(session: PageSession, locator: Locator) -> Self {
        Self {
            session,
            locator,
            resolved: Arc::new(OnceCell::new()),
        }
    }

    /// The locator this element resolves through.
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Resolves the element reference, reusing the cached reference after
    /// the first success.
    pub async fn id(&self) -> Result<&ElementId> {
        self.resolved
            .get_or_try_init(|| async {
                trace!(locator = %self.locator, "resolving element");
                let id = wait::poll(self.session.wait(), || {
                    self.session.driver().find(&self.locator)
                })
                .await
                .map_err(|e| self.with_locator_context(e))?;
                debug!(locator = %self.locator, element = %id, "element resolved");
                Ok(id)
            })
            .await
    }

    /// Clicks the element.
    pub async fn click(&self) -> Result<()> {
        let id = self.id().await?;
        debug!(locator = %self.locator, "click");
        self.session
            .driver()
            .click(id)
            .await
            .map_err(|e| self.with_locator_context(e))
    }

    /// Returns the element's rendered text.
    pub async fn text(&self) -> Result<String> {
        let id = self.id().await?;
        self.session
            .driver()
            .text(id)
            .await
            .map_err(|e| self.with_locator_context(e))
    }

    /// Returns an attribute value, if the attribute is present.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let id = self.id().await?;
        self.session
            .driver()
            .attribute(id, name)
            .await
            .map_err(|e| self.with_locator_context(e))
    }

    /// Whether the element is rendered visible.
    pub async fn is_displayed(&self) -> Result<bool> {
        let id = self.id().await?;
        self.session
            .driver()
            .is_displayed(id)
            .await
            .map_err(|e| self.with_locator_context(e))
    }

    /// Whether the element is enabled for interaction.
    pub async fn is_enabled(&self) -> Result<bool> {
        let id = self.id().await?;
        self.session
            .driver()
            .is_enabled(id)
            .await
            .map_err(|e| self.with_locator_context(e))
    }

    pub(crate) async fn clear_value(&self) -> Result<()> {
        let id = self.id().await?;
        self.session
            .driver()
            .clear(id)
            .await
            .map_err(|e| self.with_locator_context(e))
    }

    pub(crate) async fn send_keys(&self, text: &str) -> Result<()> {
        let id = self.id().await?;
        self.session
            .driver()
            .send_keys(id, text)
            .await
            .map_err(|e| self.with_locator_context(e))
    }

    /// Attaches the locator to errors that would otherwise only carry
    /// driver-side detail.
    fn with_locator_context(&self, error: Error) -> Error {
        match error {
            Error::ElementNotFound(_) => Error::ElementNotFound(self.locator.to_string()),
            Error::Timeout(msg) => Error::Timeout(format!("{msg} [locator: {}]", self.locator)),
            other => other,
        }
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("locator", &self.locator.to_string())
            .field("resolved", &self.resolved.initialized())
            .finish()
    }
}

impl PageComponent for Element {
    fn attach(session: PageSession, locator: Locator) -> Self {
        Element::new(session, locator)
    }
}

/// A single-line text input.
///
/// `set` reproduces the page-object "assign a string to type" ergonomics:
/// clear the field, then send the keystrokes.
#[derive(Debug, Clone)]
pub struct Textbox {
    inner: Element,
}

impl Textbox {
    /// Replaces the field's content with `value`.
    pub async fn set(&self, value: &str) -> Result<()> {
        self.inner.clear_value().await?;
        self.inner.send_keys(value).await
    }

    /// Appends keystrokes without clearing first.
    pub async fn type_text(&self, value: &str) -> Result<()> {
        self.inner.send_keys(value).await
    }

    /// Clears the field.
    pub async fn clear(&self) -> Result<()> {
        self.inner.clear_value().await
    }

    /// Reads the field's current value.
    pub async fn value(&self) -> Result<String> {
        Ok(self.inner.attribute("value").await?.unwrap_or_default())
    }

    /// The underlying element.
    pub fn element(&self) -> &Element {
        &self.inner
    }
}

impl PageComponent for Textbox {
    fn attach(session: PageSession, locator: Locator) -> Self {
        Self {
            inner: Element::new(session, locator),
        }
    }
}

impl From<Element> for Textbox {
    fn from(inner: Element) -> Self {
        Self { inner }
    }
}

/// A clickable button.
#[derive(Debug, Clone)]
pub struct Button {
    inner: Element,
}

impl Button {
    /// Clicks the button.
    pub async fn click(&self) -> Result<()> {
        self.inner.click().await
    }

    /// The button's visible label.
    pub async fn label(&self) -> Result<String> {
        self.inner.text().await
    }

    /// Whether the button is enabled.
    pub async fn is_enabled(&self) -> Result<bool> {
        self.inner.is_enabled().await
    }

    /// The underlying element.
    pub fn element(&self) -> &Element {
        &self.inner
    }
}

impl PageComponent for Button {
    fn attach(session: PageSession, locator: Locator) -> Self {
        Self {
            inner: Element::new(session, locator),
        }
    }
}

impl From<Element> for Button {
    fn from(inner: Element) -> Self {
        Self { inner }
    }
}
