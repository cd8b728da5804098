//! Lore corpus operations.
//!
//! The corpus is a fixed, read-only collection built once per process. Query
//! results preserve corpus order, which the prompt assembler relies on.

use std::sync::Arc;

use once_cell::sync::Lazy;
use soulgen_domain::{LoreCategory, LoreDocument};

use super::lore_documents::builtin_documents;

static BUILTIN: Lazy<LoreCorpus> = Lazy::new(|| LoreCorpus::new(builtin_documents()));

/// Queryable, shareable set of lore documents.
#[derive(Debug, Clone)]
pub struct LoreCorpus {
    documents: Arc<Vec<LoreDocument>>,
}

impl LoreCorpus {
    pub fn new(documents: Vec<LoreDocument>) -> Self {
        Self {
            documents: Arc::new(documents),
        }
    }

    /// The built-in 0N1 corpus.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    // Query operations

    pub fn all(&self) -> &[LoreDocument] {
        &self.documents
    }

    pub fn by_id(&self, id: &str) -> Option<&LoreDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn by_category(&self, category: LoreCategory) -> Vec<&LoreDocument> {
        self.documents
            .iter()
            .filter(|doc| doc.category == category)
            .collect()
    }

    /// Documents carrying at least one of `tags`.
    pub fn by_tags(&self, tags: &[String]) -> Vec<&LoreDocument> {
        self.documents
            .iter()
            .filter(|doc| doc.has_any_tag(tags))
            .collect()
    }

    /// Resolve a document's related ids. Unknown ids are dropped.
    pub fn related(&self, id: &str) -> Vec<&LoreDocument> {
        let Some(doc) = self.by_id(id) else {
            return Vec::new();
        };

        doc.related_documents
            .iter()
            .filter_map(|related_id| self.by_id(related_id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn ids(docs: &[&LoreDocument]) -> Vec<String> {
        docs.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn builtin_corpus_has_unique_ids() {
        let corpus = LoreCorpus::builtin();
        let unique: HashSet<_> = corpus.all().iter().map(|d| d.id.as_str()).collect();

        assert_eq!(corpus.len(), 8);
        assert_eq!(unique.len(), corpus.len());
    }

    #[test]
    fn builtin_corpus_is_shared() {
        let a = LoreCorpus::builtin();
        let b = LoreCorpus::builtin();
        assert!(Arc::ptr_eq(&a.documents, &b.documents));
    }

    #[test]
    fn by_category_keeps_corpus_order() {
        let corpus = LoreCorpus::builtin();
        let docs = corpus.by_category(LoreCategory::NarrativeStyle);
        assert_eq!(ids(&docs), vec!["narrative-voice", "character-voice-examples"]);
    }

    #[test]
    fn by_tags_matches_any_tag() {
        let corpus = LoreCorpus::builtin();
        let docs = corpus.by_tags(&["past".to_string(), "body-types".to_string()]);
        assert_eq!(ids(&docs), vec!["powers-system", "historical-timeline"]);

        assert!(corpus.by_tags(&[]).is_empty());
    }

    #[test]
    fn related_resolves_known_ids_only() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let corpus = LoreCorpus::new(vec![
            LoreDocument::new("a", "A", LoreCategory::History, "a", date)
                .with_related(["b", "missing"]),
            LoreDocument::new("b", "B", LoreCategory::History, "b", date),
        ]);

        assert_eq!(ids(&corpus.related("a")), vec!["b"]);
        assert!(corpus.related("b").is_empty());
        assert!(corpus.related("nope").is_empty());
    }

    #[test]
    fn builtin_related_documents() {
        let corpus = LoreCorpus::builtin();
        let related = corpus.related("character-voice-examples");
        assert_eq!(ids(&related), vec!["narrative-voice"]);
    }
}
