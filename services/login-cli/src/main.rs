//! Fyers login CLI
//!
//! Walks a human through the Fyers API v3 authorization-code login:
//! opens the login page in a browser, waits for the pasted redirect
//! URL, exchanges the auth code for an access token, saves the token to
//! a local file, and checks it with one profile call.
//!
//! The flow runs once per invocation. Outcome is communicated through
//! the printed next-steps or troubleshooting text; the process exits 0
//! either way.

mod config;
mod flow;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Credentials;
use crate::flow::LoginFlow;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with LOG_LEVEL / RUST_LOG support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting fyers-login");

    let credentials = Credentials::from_env();
    info!(client_id = %credentials.client_id, "credentials loaded");

    let flow = LoginFlow::new(credentials);
    let mut stdin = BufReader::new(tokio::io::stdin());

    match flow.run(&mut stdin).await {
        Ok(token) => {
            flow.validate_token(&token).await;

            println!("\nNext steps:");
            println!("1. Use this token for Fyers data requests");
            println!(
                "2. The token is also saved to {}",
                fyers_auth::DEFAULT_TOKEN_FILE
            );
            println!("3. The token is valid for one day");
        }
        Err(e) => {
            error!(error = ?e, "authentication failed");

            println!("\nAuthentication failed. Here are some troubleshooting tips:");
            println!("1. Make sure your client ID and secret key are correct");
            println!("2. Complete the login process quickly (within 60 seconds)");
            println!(
                "3. Copy the ENTIRE redirect URL, including 'https://www.google.com/?auth_code=...'"
            );
            println!(
                "4. If you keep getting 'auth code expired', try clearing your browser cache or using incognito mode"
            );
        }
    }

    Ok(())
}
