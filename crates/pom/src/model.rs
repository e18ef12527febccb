// Untyped page definitions
//
// The macro-free path: a `PageModel` is pure data (one URL, an ordered set
// of named locators with element roles), and `bind` attaches it to a live
// session. Useful when page layouts come from configuration or when the
// proc-macro dependency is unwanted.

use crate::element::{Button, Element, PageComponent, Textbox};
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::page::Page;
use crate::session::PageSession;
use std::collections::HashMap;
use std::fmt;

/// Role tag carried by each declared element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Text input; bound accessor is [`Textbox`]
    Textbox,
    /// Clickable control; bound accessor is [`Button`]
    Button,
    /// Untyped element
    Element,
}

impl Role {
    fn tag(self) -> &'static str {
        match self {
            Role::Textbox => "textbox",
            Role::Button => "button",
            Role::Element => "element",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Declarative page definition: a URL plus named, role-tagged locators.
///
/// # Examples
///
/// ```
/// use pom_rs::{Locator, PageModel};
///
/// let login = PageModel::new("https://example.com/login")
///     .with_textbox("username", Locator::name("username"))
///     .with_textbox("password", Locator::name("password"))
///     .with_button("submit", Locator::css("button[type='submit']"));
///
/// assert_eq!(login.url(), "https://example.com/login");
/// assert!(login.locator("username").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PageModel {
    url: String,
    elements: Vec<(String, Role, Locator)>,
}

impl PageModel {
    /// Starts a definition for the page at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            elements: Vec::new(),
        }
    }

    /// Declares a textbox.
    #[must_use]
    pub fn with_textbox(self, name: impl Into<String>, locator: Locator) -> Self {
        self.with_element_role(name, Role::Textbox, locator)
    }

    /// Declares a button.
    #[must_use]
    pub fn with_button(self, name: impl Into<String>, locator: Locator) -> Self {
        self.with_element_role(name, Role::Button, locator)
    }

    /// Declares an untyped element.
    #[must_use]
    pub fn with_element(self, name: impl Into<String>, locator: Locator) -> Self {
        self.with_element_role(name, Role::Element, locator)
    }

    fn with_element_role(mut self, name: impl Into<String>, role: Role, locator: Locator) -> Self {
        let name = name.into();
        // Redeclaration replaces, keeping the original position.
        if let Some(slot) = self.elements.iter_mut().find(|(n, _, _)| *n == name) {
            slot.1 = role;
            slot.2 = locator;
        } else {
            self.elements.push((name, role, locator));
        }
        self
    }

    /// The declared URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The locator declared under `name`, if any.
    pub fn locator(&self, name: &str) -> Option<&Locator> {
        self.elements
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, _, l)| l)
    }

    /// The role declared under `name`, if any.
    pub fn role(&self, name: &str) -> Option<Role> {
        self.elements
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, r, _)| *r)
    }

    /// Declared element names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|(n, _, _)| n.as_str())
    }

    /// Attaches the definition to a live session.
    ///
    /// Every declared element gets exactly one handle; accessors on the
    /// bound page hand out clones sharing that handle's resolution cache.
    pub fn bind(self, session: impl Into<PageSession>) -> BoundPage {
        let session = session.into();
        let handles = self
            .elements
            .iter()
            .map(|(name, role, locator)| {
                (
                    name.clone(),
                    (*role, Element::attach(session.clone(), locator.clone())),
                )
            })
            .collect();
        BoundPage {
            model: self,
            session,
            handles,
        }
    }
}

/// A [`PageModel`] attached to a live driver session.
pub struct BoundPage {
    model: PageModel,
    session: PageSession,
    handles: HashMap<String, (Role, Element)>,
}

impl BoundPage {
    /// The definition this page was bound from.
    pub fn model(&self) -> &PageModel {
        &self.model
    }

    /// The textbox declared under `name`.
    pub fn textbox(&self, name: &str) -> Result<Textbox> {
        Ok(Textbox::from(self.handle(name, Role::Textbox)?))
    }

    /// The button declared under `name`.
    pub fn button(&self, name: &str) -> Result<Button> {
        Ok(Button::from(self.handle(name, Role::Button)?))
    }

    /// The element declared under `name`, whatever its role.
    pub fn element(&self, name: &str) -> Result<Element> {
        match self.handles.get(name) {
            Some((_, handle)) => Ok(handle.clone()),
            None => Err(Error::UnknownElement(name.to_string())),
        }
    }

    fn handle(&self, name: &str, expected: Role) -> Result<Element> {
        match self.handles.get(name) {
            Some((role, handle)) if *role == expected => Ok(handle.clone()),
            Some((role, _)) => Err(Error::RoleMismatch {
                name: name.to_string(),
                expected: expected.tag(),
                actual: role.tag(),
            }),
            None => Err(Error::UnknownElement(name.to_string())),
        }
    }
}

impl Page for BoundPage {
    fn url(&self) -> &str {
        self.model.url()
    }

    fn session(&self) -> &PageSession {
        &self.session
    }
}
