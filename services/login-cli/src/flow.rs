//! The interactive token acquisition flow
//!
//! Linear and single-pass: build the login URL, open the browser, wait
//! for the user to paste the redirect URL, extract the auth code,
//! exchange it, persist the token. A missing auth code or a failed
//! exchange short-circuits to failure; nothing is retried. The input
//! source is generic so tests drive the prompt from a byte buffer
//! instead of stdin.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fyers_auth::constants::ApiEndpoints;
use fyers_auth::{app_id_hash, build_authorization_url, extract_auth_code, generate_state};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, warn};

use crate::config::Credentials;

pub struct LoginFlow {
    client: reqwest::Client,
    credentials: Credentials,
    endpoints: ApiEndpoints,
    token_path: PathBuf,
    launch_browser: bool,
}

impl LoginFlow {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            endpoints: ApiEndpoints::default(),
            token_path: PathBuf::from(fyers_auth::DEFAULT_TOKEN_FILE),
            launch_browser: true,
        }
    }

    /// Run the login flow once. Returns the access token on success.
    ///
    /// There is no timeout on the paste prompt; the printed
    /// instructions tell the user to hurry because the auth code
    /// itself expires server-side.
    pub async fn run<R>(&self, input: &mut R) -> Result<String>
    where
        R: AsyncBufRead + Unpin,
    {
        info!("starting Fyers authentication");

        let state = generate_state();
        let auth_url = build_authorization_url(
            &self.endpoints.authcode_url,
            &self.credentials.client_id,
            &self.credentials.redirect_uri,
            &state,
        );

        print_login_instructions();

        if self.launch_browser {
            // Launch failure is not fatal; the URL is printed either way
            if let Err(e) = webbrowser::open(&auth_url) {
                warn!(error = %e, "could not open browser");
            }
        }
        println!("If the browser didn't open automatically, visit:\n{auth_url}\n");

        print!("After logging in, paste the complete redirect URL here: ");
        std::io::stdout().flush().context("flushing prompt")?;

        let mut redirect_url = String::new();
        input
            .read_line(&mut redirect_url)
            .await
            .context("reading redirect URL")?;

        let code = extract_auth_code(redirect_url.trim()).inspect_err(|_| {
            error!("no auth code found in the URL");
        })?;
        info!(code = %redacted(&code), "auth code extracted");

        let hash = app_id_hash(
            &self.credentials.client_id,
            self.credentials.secret_key.expose(),
        );
        let token =
            fyers_auth::exchange_code(&self.client, &self.endpoints.token_url, &hash, &code)
                .await
                .context("exchanging auth code for access token")?;
        info!(token = %redacted(&token), "access token generated");

        fyers_auth::persist_token(&self.token_path, &token)
            .await
            .with_context(|| format!("saving token to {}", self.token_path.display()))?;
        info!(path = %self.token_path.display(), "token saved");

        Ok(token)
    }

    /// Check the token with one profile fetch.
    ///
    /// Any transport error or a non-"ok" status counts as invalid;
    /// there is no retry.
    pub async fn validate_token(&self, token: &str) -> bool {
        info!("testing token validity");

        match fyers_auth::fetch_profile(
            &self.client,
            &self.endpoints.profile_url,
            &self.credentials.client_id,
            token,
        )
        .await
        {
            Ok(profile) if profile.is_ok() => {
                info!(name = %profile.holder_name(), "token is valid, connected");
                true
            }
            Ok(profile) => {
                error!(status = %profile.s, "token validation failed");
                false
            }
            Err(e) => {
                error!(error = %e, "error testing token");
                false
            }
        }
    }
}

fn print_login_instructions() {
    println!("\n{}", "=".repeat(50));
    println!("IMPORTANT INSTRUCTIONS:");
    println!("1. A browser window will open for Fyers login");
    println!("2. Complete the login process quickly");
    println!("3. After being redirected to Google, immediately copy the ENTIRE URL");
    println!("4. Paste the URL back here within 60 seconds");
    println!("{}\n", "=".repeat(50));
}

/// First few characters of a credential, for logs.
fn redacted(value: &str) -> String {
    let prefix: String = value.chars().take(10).collect();
    format!("{prefix}...")
}
