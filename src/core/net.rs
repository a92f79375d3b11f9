// src/core/net.rs
// One blocking HTTPS GET. No retries: any failure ends the run.

use reqwest::blocking::Client;

use crate::config::options::ScrapeOptions;
use crate::error::{ScrapeError, ScrapeResult};

/// Fetch `url` and return the body as strict UTF-8 text.
///
/// Uses the user agent and timeout from `opts`. A transport error or timeout
/// is `Network`, a non-2xx reply is `Status`, and a body that is not UTF-8 is
/// `Decode`. The client and response are dropped on every path.
pub fn http_get(url: &str, opts: &ScrapeOptions) -> ScrapeResult<String> {
    let network = |source| ScrapeError::Network { url: s!(url), source };

    let client = Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(opts.timeout())
        .build()
        .map_err(network)?;

    tracing::info!("GET {url}");
    let t = std::time::Instant::now();
    let resp = client.get(url).send().map_err(network)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { url: s!(url), status });
    }

    let body = resp.bytes().map_err(network)?;
    tracing::debug!("Fetched {} bytes in {:?}", body.len(), t.elapsed());

    String::from_utf8(body.to_vec()).map_err(|source| ScrapeError::Decode { url: s!(url), source })
}
