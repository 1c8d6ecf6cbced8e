use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::{Error, Result};

static LOGIN_FORM: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("form.form-horizontal.login-form").expect("Invalid login form selector")
});

/// The one capability the scrapers consume from the session: fetch a URL
/// over the authenticated connection and hand back the document text.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Authenticated HTTP session against the site. Owns the cookie-carrying
/// client for the whole run; there is exactly one of these per run and it is
/// never shared across concurrent navigations.
pub struct Session {
    client: Client,
    base_url: Url,
    login_url: Url,
    wishlist_url: Url,
}

impl Session {
    pub fn new(client: Client, config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let login_url = base_url.join(&config.login_path)?;
        let wishlist_url = base_url.join(&config.wishlist_path)?;

        Ok(Self {
            client,
            base_url,
            login_url,
            wishlist_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The account wishlist overview page (sidebar lives here).
    pub fn wishlist_overview_url(&self) -> &Url {
        &self.wishlist_url
    }

    /// Log in by submitting the site's login form. Success means the
    /// response document no longer carries that form; anything else is
    /// classified as an authentication failure rather than a generic
    /// navigation error.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        credentials.ensure_present()?;

        // Prime session cookies before posting the form.
        self.fetch(&self.login_url).await?;

        let response = self
            .client
            .post(self.login_url.clone())
            .form(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Authentication(format!(
                "login responded with {status}"
            )));
        }

        let body = response.text().await?;
        let document = Html::parse_document(&body);
        if document.select(&LOGIN_FORM).next().is_some() {
            return Err(Error::Authentication(format!(
                "login form still present after submitting as {}",
                credentials.username
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl PageSource for Session {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
