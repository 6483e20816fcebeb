//! Fyers API v3 endpoints and OAuth constants
//!
//! These identify the public API surface, not secrets. The app's client
//! ID and secret key come from the CLI configuration; the access token
//! is managed by the token_file module.

/// Authorization endpoint serving the interactive login page
pub const AUTHCODE_ENDPOINT: &str = "https://api-t1.fyers.in/api/v3/generate-authcode";

/// Token endpoint that validates an auth code and issues an access token
pub const TOKEN_ENDPOINT: &str = "https://api-t1.fyers.in/api/v3/validate-authcode";

/// Profile endpoint used to verify a freshly issued token
pub const PROFILE_ENDPOINT: &str = "https://api-t1.fyers.in/api/v3/profile";

/// Fixed redirect target. Not a real callback — the identity provider
/// sends the user here after login and the user copies the landing URL
/// back into the terminal.
pub const REDIRECT_URI: &str = "https://www.google.com/";

/// OAuth response type sent in the authorization URL
pub const RESPONSE_TYPE: &str = "code";

/// Grant type sent during token exchange
pub const GRANT_TYPE: &str = "authorization_code";

/// The three Fyers API URLs the flow talks to.
///
/// `Default` points at the production API; tests substitute a local
/// mock server.
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    pub authcode_url: String,
    pub token_url: String,
    pub profile_url: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            authcode_url: AUTHCODE_ENDPOINT.into(),
            token_url: TOKEN_ENDPOINT.into(),
            profile_url: PROFILE_ENDPOINT.into(),
        }
    }
}
