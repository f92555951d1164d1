use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a physical pub: `id` followed by `branch`, no separator.
///
/// Overlapping query regions report the same pub more than once, possibly with a
/// different name or timestamp. Two records describe the same pub iff their keys match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueKey(String);

impl UniqueKey {
    pub fn new(id: &str, branch: &str) -> Self {
        let mut key = String::with_capacity(id.len() + branch.len());
        key.push_str(id);
        key.push_str(branch);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
