//! Keyed query cache with prefix invalidation.
//!
//! Keys are segment lists such as `["equipos", "page=1&limit=10"]`.
//! Invalidating `["equipos"]` drops every key that starts with it.

use dashmap::DashMap;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Key extended with one more segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Keys used by the data hooks.
pub mod keys {
    use super::QueryKey;
    use crate::services::ListParams;

    /// Root of the equipment family. Also covers the type list.
    pub fn equipos() -> QueryKey {
        QueryKey::new(["equipos"])
    }

    pub fn equipos_list(params: &ListParams) -> QueryKey {
        equipos().child(params.cache_segment())
    }

    pub fn equipo(id_equipo: i64) -> QueryKey {
        QueryKey::new(["equipo".to_string(), id_equipo.to_string()])
    }

    pub fn tipos() -> QueryKey {
        equipos().child("tipos")
    }

    pub fn talleres() -> QueryKey {
        QueryKey::new(["talleres"])
    }
}

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
}

pub struct QueryCache {
    entries: DashMap<QueryKey, Entry>,
    stale_after: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self { entries: DashMap::new(), stale_after }
    }

    /// Fresh cached value for `key`, if any.
    pub fn get<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let entry = self.entries.get(key)?;
        if entry.fetched_at.elapsed() > self.stale_after {
            return None;
        }
        Arc::clone(&entry.value).downcast::<T>().ok()
    }

    pub fn set<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let erased: Arc<dyn Any + Send + Sync> = value.clone();
        self.entries.insert(key, Entry { value: erased, fetched_at: Instant::now() });
        value
    }

    /// Cached value for `key`, loading it with `load` when missing or stale.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, load: F) -> Result<Arc<T>, ClientError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if let Some(hit) = self.get::<T>(&key) {
            tracing::debug!("query cache hit {}", key);
            return Ok(hit);
        }
        tracing::debug!("query cache miss {}", key);
        let value = load().await?;
        Ok(self.set(key, value))
    }

    /// Drop every entry under `prefix`. Returns how many were removed.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.entries.len());
        tracing::debug!("invalidated {} entries under {}", removed, prefix);
        removed
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_prefix_matching() {
        let equipos = QueryKey::new(["equipos"]);
        let tipos = QueryKey::new(["equipos", "tipos"]);
        let detalle = QueryKey::new(["equipo", "5"]);
        assert!(tipos.starts_with(&equipos));
        assert!(!detalle.starts_with(&equipos));
        assert_eq!(equipos.child("page=1").to_string(), "[equipos, page=1]");
    }

    #[tokio::test]
    async fn test_fetch_caches_by_key() {
        let cache = QueryCache::default();
        let loads = AtomicU32::new(0);
        let load = || async {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ClientError>(vec![1, 2, 3])
        };

        let key = QueryKey::new(["equipos", "page=1"]);
        let first = cache.fetch(key.clone(), load).await.expect("load");
        let second = cache.fetch(key, load).await.expect("cached");
        assert_eq!(first, second);
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        cache.fetch(QueryKey::new(["equipos", "page=2"]), load).await.expect("load");
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalidate_by_prefix() {
        let cache = QueryCache::default();
        cache.set(QueryKey::new(["equipos", "page=1"]), 1_u8);
        cache.set(QueryKey::new(["equipos", "page=2"]), 2_u8);
        cache.set(QueryKey::new(["equipos", "tipos"]), 3_u8);
        cache.set(QueryKey::new(["equipo", "9"]), 4_u8);

        assert_eq!(cache.invalidate(&QueryKey::new(["equipos", "tipos"])), 1);
        assert_eq!(cache.invalidate(&QueryKey::new(["equipos"])), 2);
        assert!(cache.contains(&QueryKey::new(["equipo", "9"])));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_hook_keys() {
        use crate::services::ListParams;

        let params = ListParams { page: Some(2), ..Default::default() };
        assert_eq!(keys::equipos_list(&params).segments(), ["equipos", "page=2"]);
        assert_eq!(keys::equipo(7).segments(), ["equipo", "7"]);
        assert!(keys::tipos().starts_with(&keys::equipos()));
        assert!(!keys::equipo(7).starts_with(&keys::equipos()));
    }

    #[test]
    fn test_stale_entries_are_misses() {
        let cache = QueryCache::new(Duration::ZERO);
        let key = QueryKey::new(["talleres"]);
        cache.set(key.clone(), "x".to_string());
        std::thread::sleep(Duration::from_millis(2));
        assert!(cache.get::<String>(&key).is_none());
    }

    #[test]
    fn test_type_mismatch_is_a_miss() {
        let cache = QueryCache::default();
        let key = QueryKey::new(["talleres"]);
        cache.set(key.clone(), 5_u32);
        assert!(cache.get::<String>(&key).is_none());
        assert_eq!(cache.get::<u32>(&key).as_deref(), Some(&5));
    }
}
