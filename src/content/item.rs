//! Content items: the prompts, dares, phrases and questions a game shows.
//!
//! The engine only reads `id` and `tags` (and `answer`, for answer
//! selection). Everything else is passthrough payload for the presentation
//! layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Content identifier, unique within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(pub u32);

impl ContentId {
    /// Create a new content ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Content({})", self.0)
    }
}

/// One entry of a static content catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,

    /// Prompt text shown to players.
    pub text: String,

    /// Pack/category tags used for filtering.
    #[serde(default)]
    pub tags: SmallVec<[String; 2]>,

    /// Index of the correct option, for trivia-style items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<usize>,

    /// Game-specific extras (hint, intensity, options...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl ContentItem {
    pub fn new(id: ContentId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            tags: SmallVec::new(),
            answer: None,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_answer(mut self, answer: usize) -> Self {
        self.answer = Some(answer);
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Check if the item carries any of the given tags.
    #[must_use]
    pub fn has_any_tag(&self, filter: &[String]) -> bool {
        self.tags.iter().any(|t| filter.contains(t))
    }

    /// Look up a passthrough field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let item = ContentItem::new(ContentId::new(1), "Capital of France?")
            .with_tag("geography")
            .with_answer(2)
            .with_field("hint", "Eiffel");

        assert_eq!(item.tags.as_slice(), &["geography".to_string()]);
        assert_eq!(item.answer, Some(2));
        assert_eq!(item.field("hint"), Some("Eiffel"));
        assert_eq!(item.field("intensity"), None);
    }

    #[test]
    fn test_has_any_tag() {
        let item = ContentItem::new(ContentId::new(1), "x").with_tag("spicy").with_tag("classic");
        assert!(item.has_any_tag(&["classic".to_string()]));
        assert!(!item.has_any_tag(&["kids".to_string()]));
        assert!(!item.has_any_tag(&[]));
    }

    #[test]
    fn test_minimal_json() {
        let item: ContentItem = serde_json::from_str(r#"{"id": 4, "text": "Dance"}"#).unwrap();
        assert_eq!(item.id, ContentId::new(4));
        assert!(item.tags.is_empty());
        assert!(item.answer.is_none());

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("answer"));
        assert!(!json.contains("fields"));
    }
}
