// Element resolution caching and wait/retry behavior
//
// A page object resolves each declared element at most once per lifetime:
// repeated actions, clones, and repeated accessor calls all reuse the first
// resolved element reference. A fresh page object starts over.

mod support;

use pom_rs::{Element, Error, Locator, PageComponent, PageModel, PageSession, WaitConfig};
use std::sync::Arc;
use support::FakeDriver;

fn driver_with_button() -> Arc<FakeDriver> {
    let driver = Arc::new(FakeDriver::new());
    driver.add_element(&Locator::id("go"), "el-go");
    driver
}

#[tokio::test]
async fn repeated_actions_resolve_once() {
    let driver = driver_with_button();
    let page = PageModel::new("https://example.com/")
        .with_button("go", Locator::id("go"))
        .bind(driver.clone());

    let go = page.button("go").unwrap();
    go.click().await.unwrap();
    go.click().await.unwrap();
    go.click().await.unwrap();

    assert_eq!(driver.find_count(&Locator::id("go")), 1);
}

#[tokio::test]
async fn repeated_accessor_calls_share_one_resolution() {
    let driver = driver_with_button();
    let page = PageModel::new("https://example.com/")
        .with_button("go", Locator::id("go"))
        .bind(driver.clone());

    page.button("go").unwrap().click().await.unwrap();
    page.button("go").unwrap().click().await.unwrap();

    assert_eq!(driver.find_count(&Locator::id("go")), 1);
}

#[tokio::test]
async fn clones_share_the_cache() {
    let driver = driver_with_button();
    let session = PageSession::new(driver.clone());
    let element = Element::attach(session, Locator::id("go"));
    let clone = element.clone();

    element.click().await.unwrap();
    clone.click().await.unwrap();

    assert_eq!(driver.find_count(&Locator::id("go")), 1);
}

#[tokio::test]
async fn a_fresh_page_object_resolves_again() {
    let driver = driver_with_button();
    let model = PageModel::new("https://example.com/").with_button("go", Locator::id("go"));

    let first = model.clone().bind(driver.clone());
    first.button("go").unwrap().click().await.unwrap();

    let second = model.bind(driver.clone());
    second.button("go").unwrap().click().await.unwrap();

    assert_eq!(driver.find_count(&Locator::id("go")), 2);
}

#[tokio::test]
async fn resolution_polls_until_the_element_appears() {
    let driver = driver_with_button();
    driver.appear_after(&Locator::id("go"), 2);
    let session = PageSession::new(driver.clone()).with_wait(WaitConfig::new(2_000, 5));
    let element = Element::attach(session, Locator::id("go"));

    element.click().await.expect("element never appeared");

    // Two misses plus the hit.
    assert_eq!(driver.find_count(&Locator::id("go")), 3);
}

#[tokio::test]
async fn no_wait_fails_on_the_first_miss() {
    let driver = driver_with_button();
    driver.appear_after(&Locator::id("go"), 1);
    let session = PageSession::new(driver.clone()).with_wait(WaitConfig::none());
    let element = Element::attach(session, Locator::id("go"));

    let err = element.click().await.unwrap_err();

    assert!(matches!(err, Error::ElementNotFound(_)));
    assert_eq!(driver.find_count(&Locator::id("go")), 1);
}

#[tokio::test]
async fn failed_resolution_is_not_cached() {
    let driver = driver_with_button();
    driver.appear_after(&Locator::id("go"), 1);
    let session = PageSession::new(driver.clone()).with_wait(WaitConfig::none());
    let element = Element::attach(session, Locator::id("go"));

    assert!(element.click().await.is_err());
    // The element has appeared by now; the next action resolves it.
    element.click().await.expect("second resolution failed");

    assert_eq!(driver.find_count(&Locator::id("go")), 2);
}
