//! API types matching the document Q&A server

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A stored PDF and its metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(with = "timestamp")]
    pub uploaded_at: DateTime<Utc>,
    /// Only populated by the single-document endpoint
    #[serde(default)]
    pub questions: Vec<QuestionAnswer>,
}

impl Document {
    /// Title if the server extracted one, otherwise the file name
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(self.filename.as_str())
    }

    /// Upload date rendered in the given time zone
    pub fn uploaded_on<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.uploaded_at
            .with_timezone(tz)
            .format("%b %-d, %Y")
            .to_string()
    }
}

/// One persisted question/answer pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    pub question: String,
    pub answer: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Ask request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub document_id: String,
    pub question: String,
}

/// Ask response; the server echoes the stored pair but only the answer is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Error body returned by the server
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Kind of a chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Question,
    Answer,
    Thinking,
    Error,
}

impl MessageKind {
    /// Transient lines are removed before a question settles
    pub fn is_transient(self) -> bool {
        matches!(self, MessageKind::Thinking)
    }
}

/// A line in the document chat
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub kind: MessageKind,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(kind: MessageKind, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            text: text.into(),
            timestamp,
        }
    }

    pub fn question(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(MessageKind::Question, text, timestamp)
    }

    pub fn answer(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(MessageKind::Answer, text, timestamp)
    }

    pub fn thinking(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(MessageKind::Thinking, text, timestamp)
    }

    pub fn error(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(MessageKind::Error, text, timestamp)
    }

    /// Wall-clock time of the message as `HH:MM` in the given zone
    pub fn clock<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.timestamp.with_timezone(tz).format("%H:%M").to_string()
    }
}

/// Server timestamps come either with an offset or as naive UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp `{}`", raw)))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_with_questions() {
        let json = r#"{
            "id": "doc1",
            "filename": "report.pdf",
            "title": "Quarterly Report",
            "filepath": "./uploads/doc1.pdf",
            "uploadedAt": "2024-03-01T09:30:00Z",
            "questions": [{
                "id": "q1",
                "documentId": "doc1",
                "question": "Summarize",
                "answer": "It's about X.",
                "createdAt": "2024-03-01T09:31:00.250000"
            }]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.display_title(), "Quarterly Report");
        assert_eq!(doc.questions.len(), 1);
        assert_eq!(doc.questions[0].answer, "It's about X.");
        assert_eq!(
            doc.uploaded_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_summary_without_questions_or_title() {
        let json = r#"{"id":"d","filename":"notes.pdf","title":null,"uploadedAt":"2024-03-01T09:30:00+02:00"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert!(doc.questions.is_empty());
        assert_eq!(doc.display_title(), "notes.pdf");
        assert_eq!(
            doc.uploaded_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 7, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_blank_title_falls_back_to_filename() {
        let json = r#"{"id":"d","filename":"notes.pdf","title":"  ","uploadedAt":"2024-03-01T09:30:00Z"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.display_title(), "notes.pdf");
    }

    #[test]
    fn test_uploaded_on_formatting() {
        let json = r#"{"id":"d","filename":"a.pdf","uploadedAt":"2024-03-05T23:30:00Z"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.uploaded_on(&Utc), "Mar 5, 2024");
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let json = r#"{"id":"d","filename":"a.pdf","uploadedAt":"yesterday"}"#;
        assert!(serde_json::from_str::<Document>(json).is_err());
    }

    #[test]
    fn test_ask_request_field_names() {
        let body = AskRequest {
            document_id: "doc1".to_string(),
            question: "Why?".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"documentId": "doc1", "question": "Why?"}));
    }

    #[test]
    fn test_only_thinking_is_transient() {
        assert!(MessageKind::Thinking.is_transient());
        assert!(!MessageKind::Question.is_transient());
        assert!(!MessageKind::Answer.is_transient());
        assert!(!MessageKind::Error.is_transient());
    }

    #[test]
    fn test_message_clock() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 7, 5, 59).unwrap();
        assert_eq!(Message::answer("ok", at).clock(&Utc), "07:05");
    }
}
