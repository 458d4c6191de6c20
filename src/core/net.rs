// src/core/net.rs

// Blocking HTTP GET behind a small trait so the driver can run offline.

use reqwest::blocking::Client;

use crate::config::options::ScrapeOptions;
use crate::error::Result;

/// The only network primitive the scraper needs: GET a URL, return the body.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the run's timeout and user agent. Every request
    /// is bounded; a stalled server can't hang the run.
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(opts.request_timeout)
            .user_agent(opts.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}
