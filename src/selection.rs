//! Selection data model shared by the dropdown widget and the popup.

use serde::{Deserialize, Serialize};

/// A (label, value) pair offered for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label
    pub text: String,
    /// Unique identifier within one option list
    pub value: String,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Ordered, duplicate-free list of selected option values.
///
/// Insertion order is selection order. A set is never edited in place by the
/// dropdown: [`SelectionSet::toggled`] produces the next set and the owner
/// decides whether to store it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(Vec<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from values, dropping later duplicates.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for value in values {
            let value = value.into();
            if !set.contains(&value) {
                set.0.push(value);
            }
        }
        set
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// Return the set with `value` removed if present, appended otherwise.
    #[must_use]
    pub fn toggled(&self, value: &str) -> Self {
        if self.contains(value) {
            Self(self.0.iter().filter(|v| v.as_str() != value).cloned().collect())
        } else {
            let mut next = self.0.clone();
            next.push(value.to_string());
            Self(next)
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Identifies which popup-owned selection a dropdown writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionTarget {
    Materials,
    Preferences,
}

/// Resolve a value against an option list, falling back to the raw value.
pub fn display_text<'a>(options: &'a [SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.text.as_str())
        .unwrap_or(value)
}

/// Default material options offered by the popup
pub fn default_materials() -> Vec<SelectOption> {
    vec![
        SelectOption::new("JavaScript", "javascript"),
        SelectOption::new("React", "react"),
        SelectOption::new("TypeScript", "typescript"),
        SelectOption::new("Node.js", "nodejs"),
        SelectOption::new("Python", "python"),
    ]
}

/// Default learning preference options offered by the popup
pub fn default_preferences() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Video lessons", "video"),
        SelectOption::new("Written guides", "articles"),
        SelectOption::new("Live workshops", "workshops"),
        SelectOption::new("One-on-one mentoring", "mentoring"),
    ]
}
