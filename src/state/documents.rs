//! Document list state

use crate::error::ApiError;
use crate::types::Document;

pub const LOAD_FAILED: &str = "Failed to fetch documents. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete document. Please try again.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this document?";

/// Documents shown on the list page.
///
/// Starts out loading. A failed refresh keeps whatever was shown
/// before and raises the banner; a successful one replaces the list.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentList {
    documents: Vec<Document>,
    loading: bool,
    error: Option<String>,
}

impl Default for DocumentList {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl DocumentList {
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Nothing loaded and nothing loading
    pub fn is_empty(&self) -> bool {
        !self.loading && self.documents.is_empty()
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    pub fn finish_refresh(&mut self, result: Result<Vec<Document>, ApiError>) {
        match result {
            Ok(documents) => {
                self.documents = documents;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// A delete call failed; the list stays as it was
    pub fn delete_failed(&mut self) {
        self.error = Some(DELETE_FAILED.to_string());
    }
}

/// Ask the user before deleting.
///
/// Returns the id to delete only if `confirm` agreed.
pub fn confirm_delete(document_id: &str, confirm: impl FnOnce(&str) -> bool) -> Option<String> {
    confirm(DELETE_PROMPT).then(|| document_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode;

    fn docs() -> Vec<Document> {
        decode(
            r#"[
                {"id":"a","filename":"a.pdf","uploadedAt":"2024-01-02T00:00:00Z"},
                {"id":"b","filename":"b.pdf","uploadedAt":"2024-01-01T00:00:00Z"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_starts_loading() {
        let list = DocumentList::default();
        assert!(list.is_loading());
        assert!(!list.is_empty());
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_refresh_success() {
        let mut list = DocumentList::default();
        list.finish_refresh(Ok(docs()));
        assert!(!list.is_loading());
        assert_eq!(list.documents().len(), 2);
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_refresh_empty() {
        let mut list = DocumentList::default();
        list.finish_refresh(Ok(vec![]));
        assert!(list.is_empty());
    }

    #[test]
    fn test_refresh_failure_keeps_page_usable() {
        let mut list = DocumentList::default();
        list.finish_refresh(Err(ApiError::Network("down".into())));
        assert!(!list.is_loading());
        assert_eq!(list.error(), Some(LOAD_FAILED));
        assert!(list.documents().is_empty());
    }

    #[test]
    fn test_successful_refresh_clears_banner() {
        let mut list = DocumentList::default();
        list.finish_refresh(Err(ApiError::Network("down".into())));
        list.begin_refresh();
        list.finish_refresh(Ok(docs()));
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_delete_failure_leaves_list_unchanged() {
        let mut list = DocumentList::default();
        list.finish_refresh(Ok(docs()));
        let before = list.documents().to_vec();

        list.delete_failed();

        assert_eq!(list.documents(), before.as_slice());
        assert_eq!(list.error(), Some(DELETE_FAILED));
    }

    #[test]
    fn test_confirm_delete_accepted() {
        let mut asked = None;
        let id = confirm_delete("a", |prompt| {
            asked = Some(prompt.to_string());
            true
        });
        assert_eq!(id.as_deref(), Some("a"));
        assert_eq!(asked.as_deref(), Some(DELETE_PROMPT));
    }

    #[test]
    fn test_confirm_delete_declined() {
        assert_eq!(confirm_delete("a", |_| false), None);
    }
}
