//! Hierarchical option resolution
//!
//! Options for a template start from `default_opts`. Each path segment, from
//! the root down to the file name, may override options (last write wins per
//! option name) and may set or clear the skip flag. The most specific skip flag
//! decides, so a skipped directory can re-enable individual files below it.

use crate::config::TestsConfig;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::Value;
use std::path::{Component, Path};

/// Insertion-ordered map of option name to raw option values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap {
    entries: Vec<(String, Vec<Value>)>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values for `name`, keeping its position if already present.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<Value>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Apply `overrides` on top of this map.
    pub fn extend_from(&mut self, overrides: &OptionMap) {
        for (name, values) in &overrides.entries {
            self.insert(name.clone(), values.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.entries.iter().map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Value>)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Value>)>>(iter: I) -> Self {
        let mut map = OptionMap::new();
        for (name, values) in iter {
            map.insert(name, values);
        }
        map
    }
}

impl Serialize for OptionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl TestsConfig {
    /// Compute the options for a template path, or `None` if it is skipped.
    pub fn resolve(&self, template: &Path) -> Option<OptionMap> {
        let mut options = self.default_opts().clone();
        let mut should_skip = false;
        let mut node = Some(self.root());

        for segment in path_segments(template) {
            node = node.and_then(|n| n.child(&segment));
            let Some(current) = node else {
                // Nothing deeper can match once a segment is missing.
                break;
            };

            if !current.opts().is_empty() {
                tracing::debug!(
                    segment = %segment,
                    overrides = ?current.opts().names().collect::<Vec<_>>(),
                    "Applying option overrides"
                );
                options.extend_from(current.opts());
            }
            if let Some(skip) = current.skip() {
                tracing::debug!(segment = %segment, skip, "Skip flag set");
                should_skip = skip;
            }
        }

        if should_skip {
            tracing::debug!("Skipping {}", template.display());
            None
        } else {
            Some(options)
        }
    }
}

/// Normal components of a relative path; `.` and `..` are not path segments.
fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
