//! API client for communicating with the document Q&A server

use crate::config;
use crate::error::{ApiError, Result};
use crate::types::*;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

/// Thin wrapper over the server's REST endpoints.
///
/// Holds only the base URL; pages get it from context and call it
/// directly. Every method is a single request with no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client for the URL configured at build time
    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload a PDF as multipart field `file`
    pub async fn upload_document(&self, file: &File) -> Result<Document> {
        let form = FormData::new().map_err(ApiError::from_js)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(ApiError::from_js)?;

        let resp = Request::post(&self.url("/documents/upload"))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;

        read_json(resp).await
    }

    /// List all documents, newest first
    pub async fn get_documents(&self) -> Result<Vec<Document>> {
        let resp = Request::get(&self.url("/documents/")).send().await?;
        read_json(resp).await
    }

    /// Fetch one document with its question history.
    ///
    /// `Ok(None)` means the server does not know the id.
    pub async fn get_document(&self, document_id: &str) -> Result<Option<Document>> {
        let resp = Request::get(&self.url(&format!("/documents/{}", document_id)))
            .send()
            .await?;
        absent_on_not_found(read_json(resp).await)
    }

    /// Delete a document; the server answers with the removed record
    pub async fn delete_document(&self, document_id: &str) -> Result<Document> {
        let resp = Request::delete(&self.url(&format!("/documents/{}", document_id)))
            .send()
            .await?;
        read_json(resp).await
    }

    /// Ask a question about a document
    pub async fn ask_question(&self, document_id: &str, question: &str) -> Result<AskResponse> {
        let body = AskRequest {
            document_id: document_id.to_string(),
            question: question.to_string(),
        };

        let resp = Request::post(&self.url("/qa/"))
            .json(&body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;

        read_json(resp).await
    }

    /// Question history of a document, oldest first.
    ///
    /// The chat page reads history from `get_document` instead, which
    /// embeds the same records; this endpoint is kept for callers that
    /// only need the conversation.
    pub async fn get_document_questions(&self, document_id: &str) -> Result<Vec<QuestionAnswer>> {
        let resp = Request::get(&self.url(&format!("/qa/document/{}", document_id)))
            .send()
            .await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await?;

    if !ok {
        return Err(status_error(status, &body));
    }

    decode(&body)
}

/// Parse a success body into its expected shape
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(ApiError::from)
}

const MAX_DETAIL_LEN: usize = 200;

/// Build the error for a non-2xx response, keeping the server's `detail`
pub fn status_error(status: u16, body: &str) -> ApiError {
    let detail = match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => err.detail,
        Err(_) if body.trim().is_empty() => "no details".to_string(),
        Err(_) => body.trim().chars().take(MAX_DETAIL_LEN).collect(),
    };
    ApiError::Status { status, detail }
}

/// Treat a 404 like a `null` body: the resource is absent
pub fn absent_on_not_found<T>(result: Result<Option<T>>) -> Result<Option<T>> {
    match result {
        Err(e) if e.is_not_found() => Ok(None),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(
            client.url("/documents/abc"),
            "http://localhost:8000/api/documents/abc"
        );
    }

    #[test]
    fn test_from_env_has_no_trailing_slash() {
        let client = ApiClient::from_env();
        assert!(!client.base_url().ends_with('/'));
        assert!(!client.base_url().is_empty());
    }

    #[test]
    fn test_decode_document_list() {
        let body = r#"[
            {"id":"a","filename":"a.pdf","uploadedAt":"2024-01-02T03:04:05Z"},
            {"id":"b","filename":"b.pdf","title":"B","uploadedAt":"2024-01-01T03:04:05Z"}
        ]"#;
        let docs: Vec<Document> = decode(body).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].display_title(), "B");
    }

    #[test]
    fn test_decode_document_questions() {
        let body = r#"[
            {"id":"q1","documentId":"doc1","question":"Q1","answer":"A1","createdAt":"2024-01-01T00:00:00"},
            {"id":"q2","documentId":"doc1","question":"Q2","answer":"A2","createdAt":"2024-01-01T00:05:00Z"}
        ]"#;
        let history: Vec<QuestionAnswer> = decode(body).unwrap();

        let pairs: Vec<_> = history
            .iter()
            .map(|qa| (qa.question.as_str(), qa.answer.as_str()))
            .collect();
        assert_eq!(pairs, vec![("Q1", "A1"), ("Q2", "A2")]);
        assert_eq!(history[0].document_id.as_deref(), Some("doc1"));
        assert!(history[0].created_at < history[1].created_at);
    }

    #[test]
    fn test_decode_document_questions_rejects_missing_answer() {
        let body = r#"[{"question":"Q1","createdAt":"2024-01-01T00:00:00"}]"#;
        let result: Result<Vec<QuestionAnswer>> = decode(body);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_missing_answer() {
        let result: Result<AskResponse> = decode(r#"{"question":"Why?"}"#);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let result: Result<Vec<Document>> = decode(r#"{"documents": []}"#);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn test_decode_null_document_is_absent() {
        let doc: Option<Document> = decode("null").unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn test_ask_response_ignores_echoed_fields() {
        let body = r#"{
            "id": "q9",
            "documentId": "doc1",
            "question": "What is the conclusion?",
            "answer": "The conclusion is Y.",
            "createdAt": "2024-01-01T00:00:00"
        }"#;
        let resp: AskResponse = decode(body).unwrap();
        assert_eq!(resp.answer, "The conclusion is Y.");
    }

    #[test]
    fn test_status_error_uses_detail() {
        let err = status_error(404, r#"{"detail":"Document not found"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                detail: "Document not found".to_string()
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_error_without_json_body() {
        assert_eq!(
            status_error(502, "  "),
            ApiError::Status {
                status: 502,
                detail: "no details".to_string()
            }
        );

        let long = "x".repeat(1000);
        match status_error(500, &long) {
            ApiError::Status { detail, .. } => assert_eq!(detail.len(), MAX_DETAIL_LEN),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_absent_on_not_found() {
        let not_found: Result<Option<u8>> = Err(status_error(404, ""));
        assert_eq!(absent_on_not_found(not_found), Ok(None));

        let server_error: Result<Option<u8>> = Err(status_error(500, ""));
        assert!(absent_on_not_found(server_error).is_err());

        assert_eq!(absent_on_not_found(Ok(Some(1u8))), Ok(Some(1)));
    }
}
