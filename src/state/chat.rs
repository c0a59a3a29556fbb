//! Conversation state for the document chat page

use chrono::{DateTime, Utc};

use crate::error::ApiError;
use crate::types::{AskResponse, Document, Message, QuestionAnswer};

/// Placeholder shown while the server works on an answer
pub const THINKING_TEXT: &str = "Analyzing document...";
/// Chat line appended when a question fails
pub const ANSWER_FAILED_TEXT: &str = "Sorry, I couldn't process your question. Please try again.";
/// Page banner shown when a question fails
pub const ANSWER_FAILED_BANNER: &str = "Failed to get answer. Please try again.";

/// Turn stored question/answer pairs into chat lines.
///
/// Each pair becomes a question followed by its answer, both stamped
/// with the pair's creation time.
pub fn flatten_history(questions: &[QuestionAnswer]) -> Vec<Message> {
    questions
        .iter()
        .flat_map(|qa| {
            [
                Message::question(&qa.question, qa.created_at),
                Message::answer(&qa.answer, qa.created_at),
            ]
        })
        .collect()
}

/// A question sent to the server and not yet answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuestion {
    /// Id of the question's message; `settle` must be given it back
    pub token: String,
    pub question: String,
}

/// Messages and in-flight status of one document's conversation.
///
/// At most one question is in flight. `submit` starts a question and
/// `settle` finishes it; between the two the last message is a
/// transient thinking line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    document_id: String,
    messages: Vec<Message>,
    pending: Option<String>,
    error: Option<String>,
}

impl ChatSession {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Self::default()
        }
    }

    /// Session seeded with the document's stored history
    pub fn from_document(document: &Document) -> Self {
        Self {
            document_id: document.id.clone(),
            messages: flatten_history(&document.questions),
            pending: None,
            error: None,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_answering(&self) -> bool {
        self.pending.is_some()
    }

    /// Page-level error banner, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a question.
    ///
    /// Returns the trimmed question to send with its token, or `None`
    /// when the input is blank or another question is still in flight.
    /// On `None` nothing changes.
    pub fn submit(&mut self, input: &str, now: DateTime<Utc>) -> Option<PendingQuestion> {
        let question = input.trim();
        if question.is_empty() || self.pending.is_some() {
            return None;
        }

        let message = Message::question(question, now);
        let token = message.id.clone();
        self.messages.push(message);
        self.messages.push(Message::thinking(THINKING_TEXT, now));
        self.pending = Some(token.clone());

        Some(PendingQuestion {
            token,
            question: question.to_string(),
        })
    }

    /// Finish the in-flight question with the server's result.
    ///
    /// Only the result for the current token is applied; answers to
    /// questions from an earlier session (the route changed, or the
    /// document was reloaded) are dropped. Returns whether the result
    /// was applied.
    pub fn settle(
        &mut self,
        token: &str,
        result: Result<AskResponse, ApiError>,
        now: DateTime<Utc>,
    ) -> bool {
        if self.pending.as_deref() != Some(token) {
            return false;
        }

        self.messages.retain(|m| !m.kind.is_transient());
        match result {
            Ok(resp) => {
                self.messages.push(Message::answer(resp.answer, now));
            }
            Err(_) => {
                self.messages.push(Message::error(ANSWER_FAILED_TEXT, now));
                self.error = Some(ANSWER_FAILED_BANNER.to_string());
            }
        }
        self.pending = None;
        true
    }
}
