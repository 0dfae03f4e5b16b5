//! Content catalogs and the per-session content pool.
//!
//! Games ship static catalogs of [`ContentItem`]s. At game start the engine
//! filters the catalog by the selected packs and builds a [`ContentPool`]
//! that serves items without repetition until a pass is used up.

mod item;
mod pool;

pub use item::{ContentId, ContentItem};
pub use pool::{ContentPool, DrawPolicy};

use rustc_hash::FxHashSet;

use crate::core::EngineError;

/// Parse a catalog from a JSON array of items.
///
/// ```
/// use party_engine::content::{catalog_from_json, ContentId};
///
/// let catalog = catalog_from_json(r#"[
///     {"id": 1, "text": "Sing a song", "tags": ["dare"]},
///     {"id": 2, "text": "2 + 2?", "tags": ["math"], "answer": 1}
/// ]"#).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog[1].id, ContentId::new(2));
/// ```
pub fn catalog_from_json(source: &str) -> Result<Vec<ContentItem>, EngineError> {
    let items: Vec<ContentItem> = serde_json::from_str(source)?;

    let mut seen = FxHashSet::default();
    for item in &items {
        if !seen.insert(item.id) {
            return Err(EngineError::DuplicateContentId(item.id));
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json_fields() {
        let catalog = catalog_from_json(
            r#"[{"id": 7, "text": "Act like a cat", "tags": ["animals"], "fields": {"difficulty": "easy"}}]"#,
        )
        .unwrap();

        assert_eq!(catalog[0].field("difficulty"), Some("easy"));
        assert_eq!(catalog[0].tags.len(), 1);
    }

    #[test]
    fn test_catalog_from_json_duplicate() {
        let result = catalog_from_json(r#"[{"id": 1, "text": "a"}, {"id": 1, "text": "b"}]"#);
        assert!(matches!(result, Err(EngineError::DuplicateContentId(_))));
    }

    #[test]
    fn test_catalog_from_json_malformed() {
        let result = catalog_from_json(r#"[{"text": "no id"}]"#);
        assert!(matches!(result, Err(EngineError::CatalogParse(_))));
    }
}
