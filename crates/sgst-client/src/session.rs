//! Client-side session state: the cookie store and the selected workshop.
//!
//! Identity lives in the cookies only. The workshop selection is kept here
//! for display and is cleared when the backend reports that the workshop
//! session ended.

use cookie_store::{Cookie, CookieStore};
use parking_lot::RwLock;
use reqwest_cookie_store::CookieStoreMutex;
use serde::{Deserialize, Serialize};
use sgst_types::TallerActual;
use std::sync::{Arc, MutexGuard, PoisonError};
use url::Url;

/// Serializable copy of a session, used to persist it between runs.
///
/// Cookies keep their domain, path and expiry, so a restored cookie dies
/// when the backend meant it to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub cookies: Vec<Cookie<'static>>,
    #[serde(default)]
    pub taller: Option<TallerActual>,
}

impl SessionSnapshot {
    /// Cookies that have not expired yet.
    pub fn live_cookies(&self) -> impl Iterator<Item = &Cookie<'static>> {
        self.cookies.iter().filter(|cookie| !cookie.is_expired())
    }

    pub fn has_cookies(&self) -> bool {
        self.live_cookies().next().is_some()
    }
}

pub struct SessionState {
    store: Arc<CookieStoreMutex>,
    taller: RwLock<Option<TallerActual>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState").field("taller", &*self.taller.read()).finish_non_exhaustive()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(CookieStoreMutex::new(CookieStore::default())),
            taller: RwLock::new(None),
        }
    }

    pub(crate) fn cookie_store(&self) -> Arc<CookieStoreMutex> {
        Arc::clone(&self.store)
    }

    fn cookies(&self) -> MutexGuard<'_, CookieStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn taller(&self) -> Option<TallerActual> {
        self.taller.read().clone()
    }

    pub fn set_taller(&self, taller: Option<TallerActual>) {
        *self.taller.write() = taller;
    }

    /// Drop the workshop selection, returning the previous one.
    pub fn clear_taller(&self) -> Option<TallerActual> {
        self.taller.write().take()
    }

    /// `name=value` pairs of the live cookies sent to `origin`.
    pub fn cookies_for(&self, origin: &Url) -> Vec<String> {
        self.cookies()
            .matches(origin)
            .into_iter()
            .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
            .collect()
    }

    pub fn has_cookies_for(&self, origin: &Url) -> bool {
        !self.cookies_for(origin).is_empty()
    }

    pub fn snapshot(&self, origin: &Url) -> SessionSnapshot {
        let cookies = self.cookies().matches(origin).into_iter().cloned().collect();
        SessionSnapshot { cookies, taller: self.taller() }
    }

    /// Load a persisted session into this state. Expired cookies are skipped.
    pub fn restore(&self, origin: &Url, snapshot: &SessionSnapshot) {
        let mut store = self.cookies();
        for cookie in &snapshot.cookies {
            if cookie.is_expired() {
                tracing::debug!("skipping expired cookie {}", cookie.name());
                continue;
            }
            if let Err(e) = store.insert(cookie.clone(), origin) {
                tracing::warn!("Discarding stored cookie {}: {}", cookie.name(), e);
            }
        }
        drop(store);
        self.set_taller(snapshot.taller.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn origin() -> Url {
        Url::parse("http://127.0.0.1:8000/").unwrap()
    }

    fn cookie(raw: &str) -> Cookie<'static> {
        Cookie::parse(raw.to_string(), &origin()).unwrap()
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let snapshot = SessionSnapshot {
            cookies: vec![
                cookie("access_token=abc; Path=/; Max-Age=3600"),
                cookie("refresh_token=def; Path=/; Max-Age=86400"),
            ],
            taller: Some(TallerActual {
                id_taller: "t-1".to_string(),
                rol_taller: "admin".to_string(),
            }),
        };

        let state = SessionState::new();
        assert!(!state.has_cookies_for(&origin()));
        state.restore(&origin(), &snapshot);

        let mut pairs = state.cookies_for(&origin());
        pairs.sort();
        assert_eq!(pairs, vec!["access_token=abc", "refresh_token=def"]);
        assert_eq!(state.taller(), snapshot.taller);
    }

    #[test]
    fn test_expired_cookies_are_not_restored() {
        let snapshot = SessionSnapshot {
            cookies: vec![
                cookie("id_taller_actual=5; Path=/; Max-Age=1"),
                cookie("access_token=abc; Path=/; Max-Age=3600"),
            ],
            taller: None,
        };
        let saved = serde_json::to_string(&snapshot).unwrap();

        std::thread::sleep(Duration::from_millis(1500));
        let loaded: SessionSnapshot = serde_json::from_str(&saved).unwrap();
        assert_eq!(loaded.live_cookies().count(), 1);

        let state = SessionState::new();
        state.restore(&origin(), &loaded);
        assert_eq!(state.cookies_for(&origin()), vec!["access_token=abc"]);
    }

    #[test]
    fn test_clear_taller_returns_previous() {
        let state = SessionState::new();
        state.set_taller(Some(TallerActual {
            id_taller: "t-9".to_string(),
            rol_taller: "tecnico".to_string(),
        }));
        assert_eq!(state.clear_taller().map(|t| t.id_taller), Some("t-9".to_string()));
        assert_eq!(state.taller(), None);
    }
}
