use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const APP_USER_AGENT: &str = "statshot-terminal/0.1";

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Shared blocking client. Built once; every outbound call in the app goes
/// through it.
pub fn http_client() -> reqwest::Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(APP_USER_AGENT)
            .build()
    })
}
