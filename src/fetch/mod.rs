//! Profile page retrieval.
//!
//! One GET per run to `<base_url><domain>`. The status code is logged but not
//! checked: an error page is handed to the extractor like any other page and
//! usually yields an empty profile.

use log::{debug, warn};

use crate::error_handling::BwError;

/// Builds the profile page URL for a normalized domain.
///
/// The domain is appended to the base URL verbatim; a missing trailing slash on
/// the base URL is added.
pub fn profile_url(base_url: &str, domain: &str) -> String {
    if base_url.ends_with('/') {
        format!("{base_url}{domain}")
    } else {
        format!("{base_url}/{domain}")
    }
}

/// Fetches the raw profile page HTML for `domain`.
///
/// # Errors
///
/// Returns `BwError::Http` on transport failures (DNS, connect, TLS, body read).
/// Non-2xx responses are not errors.
pub async fn fetch_profile_page(
    client: &reqwest::Client,
    base_url: &str,
    domain: &str,
) -> Result<String, BwError> {
    let url = profile_url(base_url, domain);
    debug!("GET {}", url);

    let response = client.get(&url).send().await?;
    let status = response.status();
    if status.is_success() {
        debug!("{} responded {}", url, status);
    } else {
        warn!("{} responded {}; parsing the body anyway", url, status);
    }

    let body = response.text().await?;
    debug!("Received {} bytes from {}", body.len(), url);
    Ok(body)
}
