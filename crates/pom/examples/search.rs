// Search page declared without macros, via PageModel
//
// Shows: untyped page definition, role-checked accessors, element caching
//
// Needs a WebDriver endpoint, e.g.: geckodriver --port 4444

use pom_rs::{Locator, Page, PageModel, WebDriverSession};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let session = Arc::new(WebDriverSession::connect("http://localhost:4444").await?);

    let search = PageModel::new("https://duckduckgo.com/")
        .with_textbox("query", Locator::name("q"))
        .with_button("go", Locator::css("button[type='submit']"))
        .bind(session.clone());

    search.visit().await?;
    search.textbox("query")?.set("page object pattern").await?;
    search.button("go")?.click().await?;

    // Accessors reuse the first resolved element reference, so reading the
    // value back hits the same element the set() above typed into.
    println!("Query box now holds: {}", search.textbox("query")?.value().await?);
    println!("Result page title: {}", search.title().await?);

    session.quit().await?;
    Ok(())
}
