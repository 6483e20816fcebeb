//! Credential loading
//!
//! Credentials come from the environment, with baked-in fallback
//! defaults as a deployment convenience. They are loaded once at
//! startup into an explicit struct that the flow takes by value;
//! nothing mutates them afterwards.

use common::Secret;
use fyers_auth::constants::REDIRECT_URI;

/// Fallback app ID used when FYERS_CLIENT_ID is not set
const DEFAULT_CLIENT_ID: &str = "GBJMHA44CH-100";

/// Fallback app secret used when FYERS_SECRET_KEY is not set
const DEFAULT_SECRET_KEY: &str = "YW543H05CG";

/// Fyers app credentials plus the fixed redirect target.
#[derive(Debug)]
pub struct Credentials {
    pub client_id: String,
    pub secret_key: Secret,
    pub redirect_uri: String,
}

impl Credentials {
    /// Read credentials from the environment, falling back to the
    /// baked-in defaults.
    ///
    /// No local validation: a malformed client ID or secret is only
    /// rejected by the Fyers API when used.
    pub fn from_env() -> Self {
        let client_id =
            std::env::var("FYERS_CLIENT_ID").unwrap_or_else(|_| DEFAULT_CLIENT_ID.into());
        let secret_key =
            std::env::var("FYERS_SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET_KEY.into());

        Self {
            client_id,
            secret_key: Secret::new(secret_key),
            redirect_uri: REDIRECT_URI.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that mutate environment variables,
    /// preventing data races when tests run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// SAFETY: Callers must hold ENV_MUTEX to prevent concurrent env mutation.
    unsafe fn set_env(key: &str, val: &str) {
        unsafe { std::env::set_var(key, val) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    fn defaults_apply_when_env_unset() {
        let _lock = ENV_MUTEX.lock().unwrap();
        unsafe { remove_env("FYERS_CLIENT_ID") };
        unsafe { remove_env("FYERS_SECRET_KEY") };

        let credentials = Credentials::from_env();
        assert_eq!(credentials.client_id, "GBJMHA44CH-100");
        assert_eq!(credentials.secret_key.expose(), "YW543H05CG");
    }

    #[test]
    fn env_overrides_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();
        unsafe { set_env("FYERS_CLIENT_ID", "CUSTOM-200") };
        unsafe { set_env("FYERS_SECRET_KEY", "CUSTOMSECRET") };

        let credentials = Credentials::from_env();
        assert_eq!(credentials.client_id, "CUSTOM-200");
        assert_eq!(credentials.secret_key.expose(), "CUSTOMSECRET");

        unsafe { remove_env("FYERS_CLIENT_ID") };
        unsafe { remove_env("FYERS_SECRET_KEY") };
    }

    #[test]
    fn redirect_target_is_fixed() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let credentials = Credentials::from_env();
        assert_eq!(credentials.redirect_uri, "https://www.google.com/");
    }

    #[test]
    fn debug_output_redacts_secret() {
        let _lock = ENV_MUTEX.lock().unwrap();
        unsafe { set_env("FYERS_SECRET_KEY", "SHOULD-NOT-LEAK") };

        let credentials = Credentials::from_env();
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("SHOULD-NOT-LEAK"), "got: {debug}");
        assert!(debug.contains("[REDACTED]"));

        unsafe { remove_env("FYERS_SECRET_KEY") };
    }
}
