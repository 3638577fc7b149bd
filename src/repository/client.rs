// src/repository/client.rs

//! HTTP access for archive downloads and go-get discovery
//!
//! Every request is bounded by the configured timeout. Nothing is retried:
//! a failed request surfaces as [`Error::DownloadError`] and the resolver
//! moves on to its next fallback.

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use reqwest::blocking::{Client, Response};
use std::io::{Read, Write};
use tracing::debug;

/// Buffer size for streaming downloads (8 KB)
const STREAM_BUFFER_SIZE: usize = 8192;

/// Network capability used by the prober and the repository root resolver
pub trait Fetcher {
    /// Stream the body of `url` into `dest`, returning the number of bytes written
    fn download_to(&self, url: &str, dest: &mut dyn Write) -> Result<u64>;

    /// Fetch the body of `url` into memory
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        self.download_to(url, &mut body)?;
        Ok(body)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn download_to(&self, url: &str, dest: &mut dyn Write) -> Result<u64> {
        (**self).download_to(url, dest)
    }
}

/// Blocking reqwest client with a per-request timeout
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client from the resolver settings
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::DownloadError(format!("Failed to fetch {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        Ok(response)
    }
}

impl Fetcher for HttpClient {
    fn download_to(&self, url: &str, dest: &mut dyn Write) -> Result<u64> {
        let mut response = self.get(url)?;

        let mut downloaded: u64 = 0;
        let mut buffer = [0u8; STREAM_BUFFER_SIZE];

        loop {
            // Read errors here include the timeout expiring mid-body
            let bytes_read = response.read(&mut buffer).map_err(|e| {
                Error::DownloadError(format!("Failed to read response from {url}: {e}"))
            })?;

            if bytes_read == 0 {
                break;
            }

            dest.write_all(&buffer[..bytes_read])
                .map_err(|e| Error::IoError(format!("Failed to write downloaded data: {e}")))?;

            downloaded += bytes_read as u64;
        }

        debug!("Downloaded {} bytes from {}", downloaded, url);
        Ok(downloaded)
    }
}
