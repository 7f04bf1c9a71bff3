use std::collections::BTreeMap;
use std::fmt;

/// Per-domain schema versions recorded by the documentation builder.
///
/// Sphinx bumps a domain's version whenever the shape of the data it stores changes, so two
/// indexes with different versions for the same domain must not share cached state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVersion {
    versions: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvChange {
    Added { domain: String, version: i64 },
    Removed { domain: String, version: i64 },
    Changed { domain: String, from: i64, to: i64 },
}

impl EnvVersion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, domain: &str, version: i64) -> Option<i64> {
        self.versions.insert(domain.to_string(), version)
    }

    pub fn get(&self, domain: &str) -> Option<i64> {
        self.versions.get(domain).copied()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.versions.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Lists what changed going from `self` (the cached build) to `current`.
    ///
    /// Changes are reported in domain name order.
    pub fn diff(&self, current: &EnvVersion) -> Vec<EnvChange> {
        let mut changes = Vec::new();

        for (domain, &version) in &self.versions {
            match current.versions.get(domain) {
                None => changes.push(EnvChange::Removed {
                    domain: domain.clone(),
                    version,
                }),
                Some(&to) if to != version => changes.push(EnvChange::Changed {
                    domain: domain.clone(),
                    from: version,
                    to,
                }),
                Some(_) => {}
            }
        }
        for (domain, &version) in &current.versions {
            if !self.versions.contains_key(domain) {
                changes.push(EnvChange::Added {
                    domain: domain.clone(),
                    version,
                });
            }
        }

        changes.sort_by(|a, b| a.domain().cmp(b.domain()));
        changes
    }

    pub fn is_compatible_with(&self, current: &EnvVersion) -> bool {
        self.versions == current.versions
    }
}

impl FromIterator<(String, i64)> for EnvVersion {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self {
            versions: iter.into_iter().collect(),
        }
    }
}

impl EnvChange {
    pub fn domain(&self) -> &str {
        match self {
            Self::Added { domain, .. } | Self::Removed { domain, .. } => domain,
            Self::Changed { domain, .. } => domain,
        }
    }
}

impl fmt::Display for EnvChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { domain, version } => write!(f, "+ {} (v{})", domain, version),
            Self::Removed { domain, version } => write!(f, "- {} (v{})", domain, version),
            Self::Changed { domain, from, to } => {
                write!(f, "~ {} (v{} -> v{})", domain, from, to)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, i64)]) -> EnvVersion {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn identical_versions_are_compatible_and_have_no_diff() {
        let a = env(&[("sphinx", 56), ("sphinx.domains.python", 3)]);
        let b = a.clone();
        assert!(a.is_compatible_with(&b));
        assert!(a.diff(&b).is_empty());
    }

    #[test]
    fn diff_reports_added_removed_and_changed_domains_in_name_order() {
        let cached = env(&[
            ("sphinx", 56),
            ("sphinx.domains.cpp", 3),
            ("sphinx.ext.todo", 2),
        ]);
        let current = env(&[
            ("sphinx", 56),
            ("sphinx.domains.cpp", 4),
            ("sphinx.ext.viewcode", 1),
        ]);

        let changes = cached.diff(&current);
        assert_eq!(
            changes,
            vec![
                EnvChange::Changed {
                    domain: "sphinx.domains.cpp".into(),
                    from: 3,
                    to: 4
                },
                EnvChange::Removed {
                    domain: "sphinx.ext.todo".into(),
                    version: 2
                },
                EnvChange::Added {
                    domain: "sphinx.ext.viewcode".into(),
                    version: 1
                },
            ]
        );
        assert!(!cached.is_compatible_with(&current));
    }

    #[test]
    fn insert_overwrites_and_returns_previous_version() {
        let mut e = EnvVersion::new();
        assert_eq!(e.insert("sphinx", 55), None);
        assert_eq!(e.insert("sphinx", 56), Some(55));
        assert_eq!(e.get("sphinx"), Some(56));
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn change_display_is_compact() {
        let change = EnvChange::Changed {
            domain: "sphinx".into(),
            from: 56,
            to: 57,
        };
        assert_eq!(change.to_string(), "~ sphinx (v56 -> v57)");
    }
}
