//! Token exchange and profile fetch
//!
//! The two Fyers API interactions in the flow: swapping an auth code
//! for an access token, and a single profile read used to confirm the
//! new token works. Both take the endpoint URL as a parameter so tests
//! can point them at a local mock server.

use serde::{Deserialize, Serialize};

use crate::constants::GRANT_TYPE;
use crate::error::{Error, Result};

/// Response from the token endpoint.
///
/// `access_token` is optional because the endpoint reports failures as
/// a 200 with `s = "error"` and no token. A response without a token is
/// a failed exchange; the raw body is surfaced for diagnostics.
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    /// API status field, "ok" on success
    #[serde(default)]
    pub s: String,
    pub code: Option<i64>,
    pub message: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Exchange an auth code for an access token.
///
/// POSTs the grant type, app id hash, and code to the token endpoint.
/// Returns the access token string; a non-2xx status or a body lacking
/// `access_token` is an error carrying the raw response text.
pub async fn exchange_code(
    client: &reqwest::Client,
    token_url: &str,
    app_id_hash: &str,
    code: &str,
) -> Result<String> {
    let response = client
        .post(token_url)
        .json(&serde_json::json!({
            "grant_type": GRANT_TYPE,
            "appIdHash": app_id_hash,
            "code": code,
        }))
        .send()
        .await
        .map_err(|e| Error::Http(format!("token exchange request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Http(format!("reading token response: {e}")))?;

    if !status.is_success() {
        return Err(Error::TokenExchange(format!(
            "token endpoint returned {status}: {body}"
        )));
    }

    let parsed: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| Error::TokenExchange(format!("invalid token response: {e}")))?;

    parsed
        .access_token
        .ok_or_else(|| Error::TokenExchange(format!("response missing access_token: {body}")))
}

/// Response from the profile endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileResponse {
    /// API status field, "ok" on success
    #[serde(default)]
    pub s: String,
    pub data: Option<ProfileData>,
}

/// Account details nested in the profile response.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileData {
    pub name: Option<String>,
}

impl ProfileResponse {
    /// Whether the API reported success.
    pub fn is_ok(&self) -> bool {
        self.s == "ok"
    }

    /// Account holder name, or "Unknown" when the API omitted it.
    pub fn holder_name(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .unwrap_or("Unknown")
    }
}

/// Fetch the account profile using a freshly issued token.
///
/// Fyers authenticates API calls with `Authorization:
/// "{client_id}:{access_token}"` rather than a Bearer scheme.
pub async fn fetch_profile(
    client: &reqwest::Client,
    profile_url: &str,
    client_id: &str,
    access_token: &str,
) -> Result<ProfileResponse> {
    let response = client
        .get(profile_url)
        .header("Authorization", format!("{client_id}:{access_token}"))
        .send()
        .await
        .map_err(|e| Error::Http(format!("profile request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(Error::ProfileFetch(format!(
            "profile endpoint returned {status}: {body}"
        )));
    }

    response
        .json::<ProfileResponse>()
        .await
        .map_err(|e| Error::ProfileFetch(format!("invalid profile response: {e}")))
}
