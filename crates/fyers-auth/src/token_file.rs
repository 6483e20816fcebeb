//! Access token persistence
//!
//! The token is the only artifact the flow leaves behind: one
//! plain-text file holding the bare token string, overwritten on every
//! successful login. The write goes through a temp file + rename so a
//! crash mid-write cannot leave a truncated token, and the file is set
//! to 0600 since it holds a live credential.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Default token file path, relative to the working directory.
pub const DEFAULT_TOKEN_FILE: &str = "fyers_token.txt";

/// Write the access token, replacing any previous one.
pub async fn persist_token(path: &Path, token: &str) -> Result<()> {
    // parent() is empty for a bare relative filename; treat that as cwd
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let tmp_path = dir.join(format!(".fyers_token.tmp.{}", std::process::id()));

    tokio::fs::write(&tmp_path, token.as_bytes())
        .await
        .map_err(|e| Error::Io(format!("writing temp token file: {e}")))?;

    // Set 0600 permissions (unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        tokio::fs::set_permissions(&tmp_path, perms)
            .await
            .map_err(|e| Error::Io(format!("setting token file permissions: {e}")))?;
    }

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| Error::Io(format!("renaming temp token file: {e}")))?;

    debug!(path = %path.display(), "persisted access token");
    Ok(())
}
