use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::clients::errors::{Error, Result};

/// Root of the lyrics site; every scraped URL is resolved against it.
pub const BASE_URL: &str = "https://www.letras.mus.br";

// The site serves a consent interstitial to clients that don't look like a
// desktop browser, so requests carry a fixed Chrome-like header set.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "sec-ch-ua",
        HeaderValue::from_static(
            "\" Not;A Brand\";v=\"99\", \"Google Chrome\";v=\"91\", \"Chromium\";v=\"91\"",
        ),
    );
    headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
    headers.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.77 Safari/537.36",
        ),
    );
    headers
}

pub struct LetrasClient {
    http: reqwest::Client,
    base_url: String,
}

impl LetrasClient {
    pub fn new(http: reqwest::Client) -> Self {
        LetrasClient {
            http,
            base_url: BASE_URL.to_string(),
        }
    }

    // Build a client with the browser-like default headers
    pub fn try_default() -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(browser_headers())
            .build()
            .map_err(|e| Error::ConfigurationError(format!("Failed to build HTTP client: {e}")))?;
        Ok(LetrasClient::new(http))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Discography page URL for an artist, e.g. `https://www.letras.mus.br/coldplay/discografia`
    pub fn discography_url(&self, artist: &str) -> String {
        format!("{}/{}/discografia", self.base_url, artist_slug(artist))
    }

    /// Fetch a page and return its decoded body.
    ///
    /// Returns `None` on any transport error, non-success status or body
    /// decoding failure. Body text is decoded using the response charset, so
    /// accented characters survive intact.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        debug!("GET {url}");
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {url} failed: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("GET {url} returned {status}");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to decode body from {url}: {e}");
                None
            }
        }
    }

    /// Fetch the artist's discography page.
    pub async fn fetch_discography(&self, artist: &str) -> Option<String> {
        self.fetch(&self.discography_url(artist)).await
    }
}

// Artist names appear in URLs lowercased with spaces dashed
fn artist_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_dashes() {
        assert_eq!(artist_slug("Coldplay"), "coldplay");
        assert_eq!(artist_slug("Foo Fighters"), "foo-fighters");
        assert_eq!(artist_slug("the beatles"), "the-beatles");
    }

    #[test]
    fn discography_url_uses_slug() {
        let client = LetrasClient::new(reqwest::Client::new());
        assert_eq!(
            client.discography_url("Foo Fighters"),
            "https://www.letras.mus.br/foo-fighters/discografia"
        );
    }
}
