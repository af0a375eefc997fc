//! Explicit render context.
//!
//! Values a root wrapper wants descendants to see are inserted here and
//! travel down inside [`RenderProps`](crate::RenderProps) and every element's
//! [`Props`](crate::Props). There is no ambient lookup: a component reads
//! exactly what the layers above it put in its props.

use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable string map, cheap to clone.
///
/// [`Context::with`] returns a new map and leaves the receiver untouched, so a
/// wrapper can never alter what a sibling layer already handed down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    values: Arc<BTreeMap<String, String>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `key` set to `value`. Inner layers shadow outer ones.
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = (*self.values).clone();
        values.insert(key.into(), value.into());
        Self { values: Arc::new(values) }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
