//! Session persisted between runs at `<data_dir>/sgst/session.json`.

use anyhow::{Context, Result};
use sgst_client::SessionSnapshot;
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session.json";

pub fn session_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Cannot get data directory")?;
    let dir = base.join("sgst");
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create data directory")?;
    }
    Ok(dir.join(SESSION_FILE))
}

/// Stored session, or an empty one. A corrupt file is discarded.
pub fn load(path: &Path) -> SessionSnapshot {
    let Ok(content) = fs::read_to_string(path) else {
        return SessionSnapshot::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Discarding unreadable session file: {}", e);
        SessionSnapshot::default()
    })
}

pub fn save(path: &Path, snapshot: &SessionSnapshot) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    let content = serde_json::to_string_pretty(snapshot)?;
    fs::write(&temp_path, content).context("Failed to write temp session")?;
    fs::rename(&temp_path, path).context("Failed to save session")
}

pub fn clear(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).context("Failed to remove session file")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "tests")]

    use super::*;
    use sgst_client::types::TallerActual;
    use sgst_client::Cookie;
    use url::Url;

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SESSION_FILE);
        assert!(!load(&path).has_cookies());

        let origin = Url::parse("http://127.0.0.1:8000/").expect("url");
        let cookie = Cookie::parse("access_token=abc; Path=/; Max-Age=3600".to_string(), &origin)
            .expect("cookie");
        let snapshot = SessionSnapshot {
            cookies: vec![cookie],
            taller: Some(TallerActual { id_taller: "t-1".to_string(), rol_taller: "admin".to_string() }),
        };
        save(&path, &snapshot).expect("save");

        let loaded = load(&path);
        assert_eq!(loaded.taller, snapshot.taller);
        let pairs: Vec<_> = loaded.live_cookies().map(|c| (c.name(), c.value())).collect();
        assert_eq!(pairs, vec![("access_token", "abc")]);

        clear(&path).expect("clear");
        assert!(!path.exists());
        clear(&path).expect("clearing twice is fine");
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SESSION_FILE);
        fs::write(&path, "{not json").expect("write");
        let loaded = load(&path);
        assert!(!loaded.has_cookies());
        assert!(loaded.taller.is_none());
    }
}
