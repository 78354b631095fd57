//! Validated newtypes for open free-text tags.
//!
//! `Tag` wraps a `String` that has been checked to be non-blank at
//! construction time. Proof strategies, difficulty levels, and solver
//! backend names are open vocabularies, so they are kept as tags rather than
//! closed enumerations.

use std::fmt;

use serde::de;
use serde::{Deserialize, Serialize};

/// Error returned when a tag is empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tag must be non-empty after trimming")]
pub struct TagError;

/// A validated, non-blank free-text tag.
///
/// The original spelling is preserved; only blankness is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Creates a new `Tag` after checking the input is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`TagError`] if the string is empty or whitespace-only.
    ///
    /// # Examples
    ///
    ///     use theoremsite::schema::Tag;
    ///
    ///     assert!(Tag::new("induction").is_ok());
    ///     assert!(Tag::new("   ").is_err());
    pub fn new(value: impl Into<String>) -> Result<Self, TagError> {
        let text: String = value.into();
        if text.trim().is_empty() {
            return Err(TagError);
        }
        Ok(Self(text))
    }

    /// Builds a tag from a literal known to be non-blank.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs_and_newlines("\t\n")]
    fn blank_tags_are_rejected(#[case] input: &str) {
        assert_eq!(Tag::new(input), Err(TagError));
    }

    #[test]
    fn surrounding_whitespace_is_preserved() {
        let tag = Tag::new(" by_cases ").expect("tag should be accepted");
        assert_eq!(tag.as_str(), " by_cases ");
    }

    #[test]
    fn deserializing_a_blank_tag_fails() {
        let result: Result<Tag, _> = serde_json::from_str("\"  \"");
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("tag must be non-empty"), "got: {message}");
    }
}
