//! Shared types for the Fyers login tool

use std::fmt;
use zeroize::Zeroize;

/// The Fyers app secret, redacted in Debug/Display and zeroized on drop.
///
/// The secret never leaves the process: it is only read to compute the
/// app id hash sent during token exchange, and never appears in logs,
/// URLs, or the persisted token file.
pub struct Secret(String);

impl Secret {
    /// Wrap a secret value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read access to the inner value (use sparingly)
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_debug_and_display() {
        let secret = Secret::new("YW543H05CG");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(format!("{}", secret), "[REDACTED]");
    }

    #[test]
    fn exposes_inner_value() {
        let secret = Secret::new(String::from("YW543H05CG"));
        assert_eq!(secret.expose(), "YW543H05CG");
    }

    #[test]
    fn constructs_from_str_and_string() {
        assert_eq!(Secret::new("a").expose(), Secret::new(String::from("a")).expose());
    }
}
