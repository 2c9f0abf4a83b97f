//! Utility-class token lists with explicit override order.
//!
//! Components declare their baseline tokens and append the caller's override
//! last. Conflicting utilities are not resolved here; the stylesheet's own
//! precedence (later token wins) applies.

#[cfg(test)]
#[path = "class_list_test.rs"]
mod class_list_test;

use std::fmt;

/// Ordered, de-duplicated list of class tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Start from a whitespace-separated baseline.
    pub fn new(baseline: &str) -> Self {
        let mut list = Self::default();
        list.push(baseline);
        list
    }

    /// Append every token in `classes`, skipping exact repeats.
    pub fn push(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            if !self.tokens.iter().any(|t| t == token) {
                self.tokens.push(token.to_owned());
            }
        }
    }

    /// Builder form of [`ClassList::push`].
    #[must_use]
    pub fn with(mut self, classes: &str) -> Self {
        self.push(classes);
        self
    }

    /// Append the caller override, if any. Always applied after the baseline.
    #[must_use]
    pub fn with_override(self, classes: Option<&str>) -> Self {
        match classes {
            Some(classes) => self.with(classes),
            None => self,
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}

/// Merge a baseline with an optional override into a `class` attribute value.
pub fn merge_classes(baseline: &str, class: Option<&str>) -> String {
    ClassList::new(baseline).with_override(class).to_string()
}
