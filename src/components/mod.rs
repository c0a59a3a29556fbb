//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod document_card;
pub mod error_banner;
pub mod header;
pub mod loading;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use document_card::DocumentCard;
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use loading::{LoadingDots, LoadingSpinner, PageLoading};
