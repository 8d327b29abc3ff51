use std::path::PathBuf;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::errors::{AnalyzerError, AnalyzerResult};

/// JSON documents on disk at `<root>/<category>/<owner>/<repo>/<id>.json`.
///
/// Entries never expire. A missing or unreadable entry is a miss.
#[derive(Debug, Clone)]
pub struct DiskCache {
    root: PathBuf,
    read_enabled: bool,
}

impl DiskCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            read_enabled: true,
        }
    }

    /// A cache that only writes; every lookup is a miss.
    pub fn write_only(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            read_enabled: false,
        }
    }

    pub fn entry_path(&self, category: &str, owner: &str, repo: &str, id: &str) -> PathBuf {
        self.root
            .join(sanitize(category))
            .join(sanitize(owner))
            .join(sanitize(repo))
            .join(format!("{}.json", sanitize(id)))
    }

    pub async fn get<T: DeserializeOwned>(&self, category: &str, owner: &str, repo: &str, id: &str) -> Option<T> {
        if !self.read_enabled {
            return None;
        }

        let path = self.entry_path(category, owner, repo, id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(_) => return None,
        };

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("⚠️ Ignoring unreadable cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    pub async fn set<T: Serialize + ?Sized>(&self, category: &str, owner: &str, repo: &str, id: &str, data: &T) -> AnalyzerResult<()> {
        let path = self.entry_path(category, owner, repo, id);
        let path_str = path.display().to_string();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AnalyzerError::cache_error(&path_str, &e.to_string()))?;
        }

        let content = serde_json::to_vec_pretty(data)?;
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| AnalyzerError::cache_error(&path_str, &e.to_string()))?;

        log::debug!("💾 Cached {}", path_str);
        Ok(())
    }
}

// Percent-encodes separators, NUL and `%` so each key component is one path
// segment and distinct components never share a file name. A bare `%` stands
// for the empty component.
fn sanitize(component: &str) -> String {
    match component {
        "" => return "%".to_string(),
        "." => return "%2E".to_string(),
        ".." => return "%2E%2E".to_string(),
        _ => {}
    }

    let mut encoded = String::with_capacity(component.len());
    for c in component.chars() {
        match c {
            '/' | '\\' | ':' | '\0' | '%' => encoded.push_str(&format!("%{:02X}", c as u32)),
            c => encoded.push(c),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn set_then_get_returns_the_same_value() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());

        cache.set("checkruns", "getsentry", "sentry", "abc123", &json!({"a": 1})).await.unwrap();
        let value: Option<Value> = cache.get("checkruns", "getsentry", "sentry", "abc123").await;

        assert_eq!(value, Some(json!({"a": 1})));
        assert!(dir.path().join("checkruns/getsentry/sentry/abc123.json").exists());
    }

    #[tokio::test]
    async fn unset_key_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());

        let value: Option<Value> = cache.get("checkruns", "o", "r", "missing").await;
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn corrupt_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());
        let path = cache.entry_path("checkruns", "o", "r", "bad");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let value: Option<Value> = cache.get("checkruns", "o", "r", "bad").await;
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn set_overwrites_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());

        cache.set("repos", "o", "_org", "all", &json!([1])).await.unwrap();
        cache.set("repos", "o", "_org", "all", &json!([1, 2])).await.unwrap();

        let value: Option<Value> = cache.get("repos", "o", "_org", "all").await;
        assert_eq!(value, Some(json!([1, 2])));
    }

    #[tokio::test]
    async fn write_only_cache_never_hits() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::write_only(dir.path());

        cache.set("checkruns", "o", "r", "x", &json!({"a": 1})).await.unwrap();
        let value: Option<Value> = cache.get("checkruns", "o", "r", "x").await;

        assert!(value.is_none());
        assert!(DiskCache::new(dir.path()).entry_path("checkruns", "o", "r", "x").exists());
    }

    #[test]
    fn key_components_cannot_escape_the_root() {
        let cache = DiskCache::new("/cache");
        let path = cache.entry_path("checkruns", "..", "a/b", "refs/heads/main");
        assert_eq!(path, PathBuf::from("/cache/checkruns/%2E%2E/a%2Fb/refs%2Fheads%2Fmain.json"));
    }

    #[test]
    fn distinct_ids_never_share_a_path() {
        let cache = DiskCache::new("/cache");
        let ids = ["release/1.0", "release_1.0", "release%2F1.0", "release:1.0", "release\\1.0", "", "%", ".", ".."];

        let mut paths = std::collections::HashSet::new();
        for id in ids {
            assert!(paths.insert(cache.entry_path("checkruns", "o", "r", id)), "collision for {:?}", id);
        }
    }

    #[tokio::test]
    async fn refs_differing_only_in_separators_are_separate_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());

        cache.set("checkruns", "o", "r", "release/1.0", &json!({"ref": "release/1.0"})).await.unwrap();
        let other: Option<Value> = cache.get("checkruns", "o", "r", "release_1.0").await;
        let same: Option<Value> = cache.get("checkruns", "o", "r", "release/1.0").await;

        assert!(other.is_none());
        assert_eq!(same, Some(json!({"ref": "release/1.0"})));
    }
}
