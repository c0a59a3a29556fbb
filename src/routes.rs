//! Client-side paths

pub const DOCUMENTS: &str = "/";
pub const UPLOAD: &str = "/upload";

/// Chat page of one document
pub fn document(document_id: &str) -> String {
    format!("/document/{}", document_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_route() {
        assert_eq!(document("doc1"), "/document/doc1");
    }
}
