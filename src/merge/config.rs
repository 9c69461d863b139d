/// A class group added on top of the built-in utilities.
///
/// A class belongs to the group when it equals one of `prefixes` or starts
/// with a prefix followed by `-`. Extra groups are tried before the built-in
/// ones, so they can also claim utilities the built-ins know about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtraGroup {
    pub id: String,
    pub prefixes: Vec<String>,
    /// Other groups, built-in or extra, that a class of this group overrides.
    pub conflicts: Vec<String>,
}

impl ExtraGroup {
    pub fn new(id: impl Into<String>, prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            conflicts: Vec::new(),
        }
    }

    pub fn conflicts(mut self, groups: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.conflicts.extend(groups.into_iter().map(Into::into));
        self
    }

    pub(crate) fn matches(&self, base: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            base.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
        })
    }
}

/// Settings for a [`ClassMerger`](super::ClassMerger).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MergeConfig {
    /// Prefix every utility carries, e.g. `tw-`. Classes without it are left
    /// alone apart from exact duplicates.
    pub prefix: Option<String>,
    /// Separator between variants and the utility.
    pub separator: char,
    /// Number of merge results to remember. `0` disables caching.
    pub cache_size: usize,
    pub extra_groups: Vec<ExtraGroup>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: ':',
            cache_size: 500,
            extra_groups: Vec::new(),
        }
    }
}

impl MergeConfig {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    pub fn extra_group(mut self, group: ExtraGroup) -> Self {
        self.extra_groups.push(group);
        self
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
