use std::borrow::Cow;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use tracing::trace;

use super::cache::MergeCache;
use super::config::MergeConfig;
use super::groups::{class_group, conflicting_groups};
use super::parse::ParsedClass;
use super::{ClassValue, clsx};

/// Resolves conflicts between utility classes.
///
/// When two classes set the same property under the same variants, the later
/// one wins and the earlier one is removed:
///
/// ```rust
/// use craft::merge::ClassMerger;
///
/// let merger = ClassMerger::default();
/// assert_eq!(merger.merge("px-2 py-1 p-4 hover:p-2"), "p-4 hover:p-2");
/// ```
///
/// Results are cached, and the cache is shared behind a lock, so one merger
/// can serve every thread.
#[derive(Debug)]
pub struct ClassMerger {
    config: MergeConfig,
    cache: Option<Mutex<MergeCache>>,
}

impl Default for ClassMerger {
    fn default() -> Self {
        Self::new(MergeConfig::default())
    }
}

impl ClassMerger {
    pub fn new(config: MergeConfig) -> Self {
        let cache = (config.cache_size > 0).then(|| Mutex::new(MergeCache::new(config.cache_size)));
        Self { config, cache }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merges a space separated class list.
    pub fn merge(&self, classes: &str) -> String {
        let Some(cache) = &self.cache else {
            return self.merge_uncached(classes);
        };
        if let Some(merged) = cache.lock().get(classes) {
            return merged;
        }
        let merged = self.merge_uncached(classes);
        cache.lock().insert(classes.to_string(), merged.clone());
        merged
    }

    /// Flattens `values` like [`clsx`] and merges the result.
    pub fn merge_values<'a, I>(&self, values: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<ClassValue<'a>>,
    {
        self.merge(&clsx(values))
    }

    fn group_of(&self, base: &str) -> Option<Cow<'static, str>> {
        let base = match &self.config.prefix {
            Some(prefix) => base.strip_prefix(prefix.as_str())?,
            None => base,
        };
        if let Some(group) = self.config.extra_groups.iter().find(|g| g.matches(base)) {
            return Some(Cow::Owned(group.id.clone()));
        }
        class_group(base)
    }

    fn conflicts_of<'s>(&'s self, group: &'s str) -> impl Iterator<Item = &'s str> + 's {
        let extra = self
            .config
            .extra_groups
            .iter()
            .filter(move |g| g.id == group)
            .flat_map(|g| g.conflicts.iter().map(String::as_str));
        extra.chain(conflicting_groups(group).iter().copied())
    }

    fn merge_uncached(&self, classes: &str) -> String {
        let separator = self.config.separator;
        let mut claimed: FxHashSet<String> = FxHashSet::default();
        let mut unknown: FxHashSet<&str> = FxHashSet::default();
        let mut kept: Vec<&str> = Vec::new();

        for token in classes.split_whitespace().rev() {
            let parsed = ParsedClass::parse(token, separator);
            let Some(group) = self.group_of(parsed.base) else {
                if unknown.insert(token) {
                    kept.push(token);
                }
                continue;
            };

            let variant = parsed.variant_key(separator);
            if !claimed.insert(format!("{variant}{group}")) {
                trace!(class = token, "dropping overridden class");
                continue;
            }
            for conflict in self.conflicts_of(&group) {
                claimed.insert(format!("{variant}{conflict}"));
            }
            kept.push(token);
        }

        kept.reverse();
        kept.join(" ")
    }
}
