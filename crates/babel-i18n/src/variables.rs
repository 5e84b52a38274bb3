//! Placeholder variables supplied by the caller at lookup time.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Named values substituted into `{name}` placeholders.
///
/// Substitution visits variables in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    /// Create an empty variable set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name` to `value`, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    /// Value bound to `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variable is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

impl<'a> IntoIterator for &'a Variables {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Macro to create [`Variables`] more easily
///
/// ```rust
/// use babel_i18n::vars;
///
/// let vars = vars!["name" => "Lee", "count" => 3];
/// assert_eq!(vars.get("count"), Some("3"));
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::Variables::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut vars = $crate::Variables::new();
        $(
            vars.insert($name, $value);
        )+
        vars
    }};
}
