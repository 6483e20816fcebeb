//! Fyers OAuth token acquisition library
//!
//! Implements the non-interactive half of the Fyers API v3 login flow:
//! building the authorization URL, pulling the auth code out of the
//! redirect URL the user pastes back, exchanging the code for an access
//! token, and persisting that token. The interactive prompting lives in
//! the `fyers-login` binary — this crate is a standalone library with no
//! dependency on it and can be tested independently.
//!
//! Token flow:
//! 1. CLI builds the login URL via `authcode::build_authorization_url()`
//! 2. User logs in; the pasted redirect URL goes through
//!    `authcode::extract_auth_code()`
//! 3. `token::exchange_code()` swaps the code for an access token
//! 4. `token_file::persist_token()` writes the token to disk
//! 5. `token::fetch_profile()` confirms the token works

pub mod authcode;
pub mod constants;
pub mod error;
pub mod token;
pub mod token_file;

pub use authcode::{app_id_hash, build_authorization_url, extract_auth_code, generate_state};
pub use constants::ApiEndpoints;
pub use error::{Error, Result};
pub use token::{ProfileResponse, TokenResponse, exchange_code, fetch_profile};
pub use token_file::{DEFAULT_TOKEN_FILE, persist_token};
