use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::Result;

/// HTTP client for the run: cookie store on so the login session sticks.
pub fn create_client(user_agent: &str, timeout_seconds: u64) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_seconds))
        .cookie_store(true)
        .pool_max_idle_per_host(6)
        .build()?;

    Ok(client)
}
