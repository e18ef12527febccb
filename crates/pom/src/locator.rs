// Locator - strategy + expression identifying one element on a page
//
// A Locator is pure data: it does not touch the driver. Element resolution
// happens in `Element`, which hands the locator to the session's `find`.
//
// W3C WebDriver only defines "css selector", "xpath", "link text",
// "partial link text" and "tag name" location strategies. The `Id` and
// `Name` conveniences therefore lower to CSS attribute selectors, the same
// approach fantoccini takes.

use std::fmt;

/// Element location strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// CSS selector expression
    Css,
    /// `id` attribute value
    Id,
    /// `name` attribute value
    Name,
    /// XPath expression
    XPath,
    /// Exact anchor link text
    LinkText,
}

impl Strategy {
    /// Short tag used in `Display` and error messages
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Css => "css",
            Strategy::Id => "id",
            Strategy::Name => "name",
            Strategy::XPath => "xpath",
            Strategy::LinkText => "link-text",
        }
    }
}

/// Identifies an element within a page.
///
/// Locators are cheap to construct and clone; nothing is resolved until a
/// page component performs an action.
///
/// # Examples
///
/// ```
/// use pom_rs::Locator;
///
/// let query = Locator::name("q");
/// let submit = Locator::css("button[type='submit']");
/// assert_eq!(query.to_string(), "name=q");
/// assert_eq!(submit.value(), "button[type='submit']");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    strategy: Strategy,
    value: String,
}

impl Locator {
    /// Locate by CSS selector.
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Css,
            value: selector.into(),
        }
    }

    /// Locate by `id` attribute.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Id,
            value: id.into(),
        }
    }

    /// Locate by `name` attribute.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Name,
            value: name.into(),
        }
    }

    /// Locate by XPath expression.
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::XPath,
            value: expr.into(),
        }
    }

    /// Locate an anchor by its exact link text.
    pub fn link_text(text: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::LinkText,
            value: text.into(),
        }
    }

    /// The location strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The raw locator expression.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Lowers the locator to the W3C `(using, value)` wire pair.
    ///
    /// `Id` and `Name` become CSS attribute selectors since the protocol has
    /// no strategy for them.
    pub fn to_wire(&self) -> (&'static str, String) {
        match self.strategy {
            Strategy::Css => ("css selector", self.value.clone()),
            Strategy::Id => ("css selector", format!("[id={}]", css_quote(&self.value))),
            Strategy::Name => ("css selector", format!("[name={}]", css_quote(&self.value))),
            Strategy::XPath => ("xpath", self.value.clone()),
            Strategy::LinkText => ("link text", self.value.clone()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.strategy.tag(), self.value)
    }
}

/// Quotes a value for use inside a CSS attribute selector.
fn css_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_strategy_tag() {
        assert_eq!(Locator::css("#main").to_string(), "css=#main");
        assert_eq!(Locator::name("q").to_string(), "name=q");
        assert_eq!(Locator::link_text("Sign in").to_string(), "link-text=Sign in");
    }

    #[test]
    fn css_and_xpath_lower_verbatim() {
        assert_eq!(
            Locator::css("button.primary").to_wire(),
            ("css selector", "button.primary".to_string())
        );
        assert_eq!(
            Locator::xpath("//form//input[1]").to_wire(),
            ("xpath", "//form//input[1]".to_string())
        );
    }

    #[test]
    fn id_and_name_lower_to_attribute_selectors() {
        assert_eq!(
            Locator::id("search_button").to_wire(),
            ("css selector", "[id=\"search_button\"]".to_string())
        );
        assert_eq!(
            Locator::name("q").to_wire(),
            ("css selector", "[name=\"q\"]".to_string())
        );
    }

    #[test]
    fn attribute_values_are_quoted() {
        let (_, value) = Locator::name("weird\"name").to_wire();
        assert_eq!(value, "[name=\"weird\\\"name\"]");
    }

    #[test]
    fn link_text_uses_link_text_strategy() {
        assert_eq!(
            Locator::link_text("Next page").to_wire(),
            ("link text", "Next page".to_string())
        );
    }
}
