//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! This module wraps the `name/{prefix}` search endpoint and returns results
//! as tidy [`Country`](crate::models::Country) records.
//!
//! ### Notes
//! - Only the field subset `name,capital,population,flags,languages` is
//!   requested; the response is a JSON array of country objects.
//! - HTTP status codes are deliberately **not** inspected: the service
//!   answers "no match" with a 404 and an error-shaped body, which fails
//!   decoding into an array exactly like any malformed payload. Both surface
//!   as [`FetchError::Service`].
//! - No retries, no pagination, no cancellation of superseded requests.
//!
//! Typical usage:
//! ```no_run
//! # use country_lookup::Client;
//! let client = Client::default();
//! let countries = client.fetch_countries("fra")?;
//! # Ok::<(), country_lookup::FetchError>(())
//! ```

use crate::error::FetchError;
use crate::models::{Country, RawCountry};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Fields requested from the service; keeps response bodies small.
const FIELDS: &str = "name,capital,population,flags,languages";

// Allow -, _, . unescaped in name fragments
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(part: &str) -> String {
    percent_encoding::utf8_percent_encode(part.trim(), SAFE).to_string()
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("country_lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://restcountries.com/v3.1".into(),
            http,
        }
    }
}

impl Client {
    /// Search countries whose name matches `name_prefix`.
    ///
    /// The caller guarantees a non-empty prefix; empty input is
    /// short-circuited upstream and never reaches the network.
    ///
    /// ### Errors
    /// - [`FetchError::Network`] on transport failure
    /// - [`FetchError::Service`] on a body that does not decode as a country
    ///   array (including the service's "not found" payload)
    pub fn fetch_countries(&self, name_prefix: &str) -> Result<Vec<Country>, FetchError> {
        let url = format!(
            "{}/name/{}?fields={}",
            self.base_url,
            enc(name_prefix),
            FIELDS
        );
        log::debug!("GET {url}");

        let body = self.http.get(&url).send()?.text()?;
        let raw: Vec<RawCountry> = serde_json::from_str(&body)
            .map_err(|e| FetchError::Service(format!("unexpected response for {url}: {e}")))?;
        Ok(raw.into_iter().map(Country::from).collect())
    }
}
