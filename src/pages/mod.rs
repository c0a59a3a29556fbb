//! Routed pages

pub mod chat;
pub mod documents;
pub mod upload;

pub use chat::DocumentChatPage;
pub use documents::DocumentListPage;
pub use upload::UploadPage;
