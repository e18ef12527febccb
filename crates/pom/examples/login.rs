// Login page declared with the #[page] macro
//
// Shows: session connect, macro-declared page, composite action, cleanup
//
// Needs a WebDriver endpoint, e.g.: chromedriver --port=9515

use pom_rs::{Button, Page, Textbox, WebDriverSession, page};
use std::sync::Arc;

#[page(url = "https://the-internet.herokuapp.com/login")]
struct LoginPage {
    #[element(id = "username")]
    username: Textbox,
    #[element(id = "password")]
    password: Textbox,
    #[element(css = "button[type='submit']")]
    submit: Button,
}

impl LoginPage {
    async fn login(&self, user: &str, pass: &str) -> pom_rs::Result<()> {
        self.username.set(user).await?;
        self.password.set(pass).await?;
        self.submit.click().await
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=pom_rs=debug shows navigation and element resolution.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let session = Arc::new(WebDriverSession::connect("http://localhost:9515").await?);

    let login = LoginPage::new(session.clone());
    login.visit().await?;
    login.login("tomsmith", "SuperSecretPassword!").await?;

    println!("Title after login: {}", login.title().await?);
    println!("URL after login: {}", login.current_url().await?);

    session.quit().await?;
    Ok(())
}
