use rustc_hash::FxHashMap;
use tracing::trace;

/// A bounded cache of merge results.
///
/// Entries live in two generations. New results go into the current one, and
/// once it holds `limit` entries it replaces the previous generation, which is
/// dropped. A hit in the previous generation moves the entry forward, so
/// entries that keep being used survive the rollover.
#[derive(Debug)]
pub(crate) struct MergeCache {
    limit: usize,
    current: FxHashMap<String, String>,
    previous: FxHashMap<String, String>,
}

impl MergeCache {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            current: FxHashMap::default(),
            previous: FxHashMap::default(),
        }
    }

    pub(crate) fn get(&mut self, key: &str) -> Option<String> {
        if let Some(value) = self.current.get(key) {
            return Some(value.clone());
        }
        let (key, value) = self.previous.remove_entry(key)?;
        self.insert(key, value.clone());
        Some(value)
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.current.insert(key, value);
        if self.current.len() >= self.limit {
            trace!(limit = self.limit, "rolling over merge cache");
            self.previous = std::mem::take(&mut self.current);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.current.len() + self.previous.len()
    }
}

#[cfg(test)]
mod tests {
    use super::MergeCache;

    #[test]
    fn hit_and_miss() {
        let mut cache = MergeCache::new(4);
        assert_eq!(cache.get("p-2 p-4"), None);
        cache.insert("p-2 p-4".to_string(), "p-4".to_string());
        assert_eq!(cache.get("p-2 p-4").as_deref(), Some("p-4"));
    }

    #[test]
    fn stays_bounded() {
        let mut cache = MergeCache::new(2);
        for i in 0..10 {
            cache.insert(format!("k{i}"), format!("v{i}"));
        }
        assert!(cache.len() <= 4);
        assert_eq!(cache.get("k9").as_deref(), Some("v9"));
        assert_eq!(cache.get("k0"), None);
    }

    #[test]
    fn generations_never_exceed_the_limit() {
        let mut cache = MergeCache::new(3);
        for i in 0..20 {
            cache.insert(format!("k{i}"), format!("v{i}"));
            // A full current generation rolls over at once.
            assert!(cache.current.len() < 3);
            assert!(cache.previous.len() <= 3);
        }
    }

    #[test]
    fn previous_generation_is_promoted() {
        let mut cache = MergeCache::new(3);
        cache.insert("a".to_string(), "1".to_string());
        cache.insert("b".to_string(), "2".to_string());
        cache.insert("c".to_string(), "3".to_string());
        // The rollover moved a, b and c to the previous generation.
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        cache.insert("d".to_string(), "4".to_string());
        cache.insert("e".to_string(), "5".to_string());
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        assert_eq!(cache.get("b"), None);
    }
}
