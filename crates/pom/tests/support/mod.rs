// Scripted in-memory driver session for integration tests
//
// Records every call and serves elements from a programmable table, so
// tests can assert on exactly what a page object asked the driver to do.

// Note: helpers appear "unused" because each test binary compiles
// separately, but they ARE used across multiple test files.
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use pom_rs::{DriverSession, ElementId, Error, Locator, Result};
use std::collections::HashMap;

#[derive(Default)]
struct FakeElement {
    text: String,
    value: String,
    attributes: HashMap<String, String>,
    displayed: bool,
    enabled: bool,
}

#[derive(Default)]
struct State {
    current_url: String,
    title: String,
    // locator display string -> element id
    locators: HashMap<String, String>,
    elements: HashMap<String, FakeElement>,
    // locator display string -> failures left before find succeeds
    appear_after: HashMap<String, u32>,
    calls: Vec<String>,
}

/// In-memory `DriverSession` with a scripted DOM.
#[derive(Default)]
pub struct FakeDriver {
    state: Mutex<State>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(self, title: &str) -> Self {
        self.state.lock().title = title.to_string();
        self
    }

    /// Registers an element reachable through `locator`.
    pub fn add_element(&self, locator: &Locator, id: &str) {
        let mut state = self.state.lock();
        state.locators.insert(locator.to_string(), id.to_string());
        state.elements.insert(
            id.to_string(),
            FakeElement {
                displayed: true,
                enabled: true,
                ..FakeElement::default()
            },
        );
    }

    pub fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.state.lock().elements.get_mut(id) {
            el.text = text.to_string();
        }
    }

    pub fn set_attribute(&self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.state.lock().elements.get_mut(id) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Drops a registered element, as if the DOM node went away. Element
    /// actions against the id fail afterwards; its locator still resolves.
    pub fn remove_element(&self, id: &str) {
        self.state.lock().elements.remove(id);
    }

    /// Makes `find` fail `failures` times before the element appears.
    pub fn appear_after(&self, locator: &Locator, failures: u32) {
        self.state
            .lock()
            .appear_after
            .insert(locator.to_string(), failures);
    }

    /// Every recorded call, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    /// How many times `find` ran for `locator`.
    pub fn find_count(&self, locator: &Locator) -> usize {
        let needle = format!("find {locator}");
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| **call == needle)
            .count()
    }

    /// Current value of a registered element (what send_keys built up).
    pub fn element_value(&self, id: &str) -> Option<String> {
        self.state.lock().elements.get(id).map(|el| el.value.clone())
    }

    fn record(&self, call: String) {
        self.state.lock().calls.push(call);
    }

    fn with_element<T>(&self, id: &ElementId, f: impl FnOnce(&mut FakeElement) -> T) -> Result<T> {
        let mut state = self.state.lock();
        match state.elements.get_mut(id.as_str()) {
            Some(el) => Ok(f(el)),
            None => Err(Error::ElementNotFound(format!("no element with id {id}"))),
        }
    }
}

#[async_trait]
impl DriverSession for FakeDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.record(format!("navigate {url}"));
        self.state.lock().current_url = url.to_string();
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.state.lock().current_url.clone())
    }

    async fn title(&self) -> Result<String> {
        Ok(self.state.lock().title.clone())
    }

    async fn find(&self, locator: &Locator) -> Result<ElementId> {
        self.record(format!("find {locator}"));
        let mut state = self.state.lock();
        let key = locator.to_string();
        if let Some(left) = state.appear_after.get_mut(&key) {
            if *left > 0 {
                *left -= 1;
                return Err(Error::ElementNotFound(key));
            }
        }
        match state.locators.get(&key) {
            Some(id) => Ok(ElementId(id.clone())),
            None => Err(Error::ElementNotFound(key)),
        }
    }

    async fn click(&self, element: &ElementId) -> Result<()> {
        self.record(format!("click {element}"));
        self.with_element(element, |_| ())
    }

    async fn clear(&self, element: &ElementId) -> Result<()> {
        self.record(format!("clear {element}"));
        self.with_element(element, |el| el.value.clear())
    }

    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()> {
        self.record(format!("send_keys {element} {text}"));
        self.with_element(element, |el| el.value.push_str(text))
    }

    async fn text(&self, element: &ElementId) -> Result<String> {
        self.with_element(element, |el| el.text.clone())
    }

    async fn attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>> {
        self.with_element(element, |el| {
            if name == "value" {
                Some(el.value.clone())
            } else {
                el.attributes.get(name).cloned()
            }
        })
    }

    async fn is_displayed(&self, element: &ElementId) -> Result<bool> {
        self.with_element(element, |el| el.displayed)
    }

    async fn is_enabled(&self, element: &ElementId) -> Result<bool> {
        self.with_element(element, |el| el.enabled)
    }
}
