use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::header::AUTHORIZATION;

use crate::payload::DeploymentEvent;

/// Fixed user agent reported on every request.
pub const USER_AGENT: &str = concat!("cased-notify/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// POST one deployment event. Exactly one attempt is made; a non-2xx
/// response is an error carrying the status and the response body.
pub async fn post_deployment(
    endpoint: &str,
    api_key: &str,
    event: &DeploymentEvent,
) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Building HTTP client")?;

    let response = client
        .post(endpoint)
        .header(AUTHORIZATION, format!("Token {api_key}"))
        .json(event)
        .send()
        .await
        .with_context(|| format!("Sending deployment event to {endpoint}"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        if body.is_empty() {
            bail!("Cased API error: {status}");
        }
        bail!("Cased API error: {status}: {body}");
    }
    Ok(())
}
