use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub login_path: String,
    pub wishlist_path: String,
    pub output_path: String,
    pub credentials_path: String,
    pub user_agent: String,
    /// Safety cap on pages fetched per wishlist, on top of whatever the
    /// pagination control advertises.
    pub max_pages: usize,
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Defaults, overridden by an optional `wishlist-exporter.toml` next to
    /// the binary and then by `WISHLIST_*` environment variables.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("base_url", "https://www.bookdepository.com")?
            .set_default("login_path", "/account/login")?
            .set_default("wishlist_path", "/account/wishlist")?
            .set_default("output_path", "wishlists.json")?
            .set_default("credentials_path", "credentials.json")?
            .set_default(
                "user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36",
            )?
            .set_default("max_pages", 100)?
            .set_default("request_timeout_seconds", 25)?
            .add_source(config::File::with_name("wishlist-exporter").required(false))
            .add_source(config::Environment::with_prefix("WISHLIST"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
