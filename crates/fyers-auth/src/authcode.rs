//! Authorization URL construction and auth-code extraction
//!
//! The authorization URL sends the user to the Fyers login page. After
//! login the identity provider redirects to the fixed redirect target
//! with an `auth_code` query parameter, and the user pastes that whole
//! URL back into the terminal. There is no callback server; extraction
//! works on the pasted string.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;
use sha2::{Digest, Sha256};

use crate::constants::RESPONSE_TYPE;
use crate::error::{Error, Result};

/// Generate a random URL-safe state value for the authorization URL.
///
/// The identity provider echoes it back in the redirect. The flow does
/// not verify it on return — the redirect URL is hand-copied by the
/// user, not received on a callback.
pub fn generate_state() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Build the full authorization URL for the interactive login page.
///
/// No local validation of the client ID format; a malformed credential
/// is only detected by the remote service when the URL is used.
pub fn build_authorization_url(
    authcode_url: &str,
    client_id: &str,
    redirect_uri: &str,
    state: &str,
) -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type={}&state={}",
        authcode_url,
        client_id,
        urlencoded(redirect_uri),
        RESPONSE_TYPE,
        state,
    )
}

/// Extract the auth code from the redirect URL the user pasted.
///
/// Takes everything between `auth_code=` and the next `&` (or end of
/// string). The code shape is not validated further; a bad code is
/// rejected by the token endpoint at exchange time.
pub fn extract_auth_code(raw_url: &str) -> Result<String> {
    let (_, rest) = raw_url
        .split_once("auth_code=")
        .ok_or(Error::MissingAuthCode)?;
    let code = match rest.split_once('&') {
        Some((code, _)) => code,
        None => rest,
    };
    Ok(code.to_string())
}

/// Hash identifying the app to the token endpoint.
///
/// `SHA256("{client_id}:{secret_key}")` as lowercase hex. The token
/// endpoint recomputes this server-side from the registered app secret,
/// so the secret itself never travels in the exchange request.
pub fn app_id_hash(client_id: &str, secret_key: &str) -> String {
    let hash = Sha256::digest(format!("{client_id}:{secret_key}").as_bytes());
    hex::encode(hash)
}

/// Minimal URL encoding for parameter values.
/// Only encodes characters that would break URL parameter parsing.
fn urlencoded(s: &str) -> String {
    s.replace(' ', "%20")
        .replace(':', "%3A")
        .replace('/', "%2F")
}
