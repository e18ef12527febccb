//! pom-rs: Page objects over a W3C WebDriver session
//!
//! This crate wraps the structure and interactive elements of one UI page
//! behind a stable, typed interface, decoupling test logic from page
//! internals. It is a thin layer: element interaction goes through a narrow
//! [`DriverSession`] seam, and everything beyond that seam (browser
//! lifecycle, fixtures, parallelism, the rest of the driver API) stays with
//! the underlying driver and the consuming test framework.
//!
//! # Examples
//!
//! ## Declaring a page with the `#[page]` macro
//!
//! ```ignore
//! use pom_rs::{page, Button, Page, Textbox, WebDriverSession};
//! use std::sync::Arc;
//!
//! #[page(url = "https://example.com/login")]
//! struct LoginPage {
//!     #[element(name = "username")]
//!     username: Textbox,
//!     #[element(name = "password")]
//!     password: Textbox,
//!     #[element(css = "button[type='submit']")]
//!     submit: Button,
//! }
//!
//! impl LoginPage {
//!     // Composite actions are ordinary methods.
//!     async fn login(&self, user: &str, pass: &str) -> pom_rs::Result<()> {
//!         self.username.set(user).await?;
//!         self.password.set(pass).await?;
//!         self.submit.click().await
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // chromedriver --port=9515
//!     let session = Arc::new(WebDriverSession::connect("http://localhost:9515").await?);
//!
//!     let login = LoginPage::new(session.clone());
//!     login.visit().await?;
//!     login.login("admin", "hunter2").await?;
//!     assert_eq!(login.title().await?, "Dashboard");
//!
//!     session.quit().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Declaring a page without macros
//!
//! ```ignore
//! use pom_rs::{Locator, Page, PageModel};
//!
//! let search = PageModel::new("https://duckduckgo.com/")
//!     .with_textbox("query", Locator::name("q"))
//!     .with_button("go", Locator::id("search_button_homepage"))
//!     .bind(session);
//!
//! search.visit().await?;
//! search.textbox("query")?.set("page object pattern").await?;
//! search.button("go")?.click().await?;
//! ```
//!
//! # Element caching
//!
//! Accessors are lazy and cached: the first action on an accessor resolves
//! the element (polling per [`WaitConfig`]), and every later action within
//! the same page object's lifetime reuses that element reference. Construct
//! a fresh page object to re-resolve.

mod element;
mod error;
mod locator;
mod model;
mod page;
mod session;
mod wait;

#[cfg(feature = "webdriver")]
pub mod webdriver;

// Re-export error types
pub use error::{Error, Result};

// Re-export the session seam
pub use session::{DriverSession, ElementId, PageSession};

// Re-export locators
pub use locator::{Locator, Strategy};

// Re-export typed components
pub use element::{Button, Element, PageComponent, Textbox};

// Re-export the page abstraction and the untyped model
pub use model::{BoundPage, PageModel, Role};
pub use page::Page;

// Re-export wait policy
pub use wait::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS, WaitConfig};

#[cfg(feature = "webdriver")]
pub use webdriver::WebDriverSession;

/// `#[page(url = "...")]` attribute macro; see the crate-level example.
#[cfg(feature = "macros")]
pub use pom_rs_macros::page;
