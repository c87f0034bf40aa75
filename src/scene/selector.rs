//! Object selection queries.
//!
//! A selector narrows a scene down to the objects a sampler works on: an optional
//! name regex, which must match the whole name, and an optional index into the
//! matches.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Query picking scene objects by name and position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectSelector {
    /// Regular expression matched against the full name. `None` matches every object.
    pub name: Option<String>,
    /// Keep only the n-th match.
    pub index: Option<usize>,
}

impl ObjectSelector {
    /// Selector matching every object.
    pub fn all() -> Self {
        Self::default()
    }

    /// Selector matching a name pattern.
    pub fn by_name(pattern: impl Into<String>) -> Self {
        Self {
            name: Some(pattern.into()),
            index: None,
        }
    }

    /// Restrict to the n-th match.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Apply the selector to an ordered sequence of named items.
    ///
    /// Fails if the name pattern is not a valid regular expression.
    pub fn select<'a, T, I, F>(&self, items: I, name_of: F) -> Result<Vec<&'a T>>
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> &str,
        T: 'a,
    {
        let pattern = self.name.as_deref().map(full_match).transpose()?;
        let matched = items.into_iter().filter(|item| {
            pattern
                .as_ref()
                .is_none_or(|re| re.is_match(name_of(*item)))
        });
        Ok(match self.index {
            Some(i) => matched.skip(i).take(1).collect(),
            None => matched.collect(),
        })
    }
}

/// Compile `pattern` anchored at both ends.
fn full_match(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
        Error::Configuration(format!("invalid name pattern '{}': {}", pattern, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 4] = ["Table", "Chair", "Table.001", "SideTable"];

    fn names(selector: &ObjectSelector) -> Vec<&'static str> {
        selector
            .select(NAMES.iter(), |n| *n)
            .unwrap()
            .into_iter()
            .copied()
            .collect()
    }

    #[test]
    fn test_full_match() {
        let re = full_match("Table.*").unwrap();
        assert!(re.is_match("Table"));
        assert!(re.is_match("Table.001"));
        assert!(!re.is_match("SideTable"));

        let exact = full_match("Table").unwrap();
        assert!(!exact.is_match("Table.001"));

        let alternation = full_match("Chair|Lamp").unwrap();
        assert!(alternation.is_match("Lamp"));
        assert!(!alternation.is_match("Lamp2"));
    }

    #[test]
    fn test_select_all() {
        assert_eq!(names(&ObjectSelector::all()).len(), 4);
    }

    #[test]
    fn test_select_by_name_and_index() {
        let tables = ObjectSelector::by_name("Table.*");
        assert_eq!(names(&tables), vec!["Table", "Table.001"]);
        assert_eq!(names(&tables.clone().with_index(1)), vec!["Table.001"]);
        assert!(names(&tables.with_index(5)).is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let result = ObjectSelector::by_name("Table(").select(NAMES.iter(), |n| *n);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_deserialize_defaults() {
        let sel: ObjectSelector = serde_json::from_str(r#"{"name": "Desk.*"}"#).unwrap();
        assert_eq!(sel.name.as_deref(), Some("Desk.*"));
        assert_eq!(sel.index, None);
    }
}
