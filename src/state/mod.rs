//! Page-local state
//!
//! Each page keeps its own state in a signal; these types hold the
//! transitions so they can be tested without a browser. Nothing here is
//! shared between pages.

pub mod chat;
pub mod documents;
pub mod upload;

pub use chat::{ChatSession, PendingQuestion};
pub use documents::DocumentList;
pub use upload::{FileSource, PickedFile, UploadForm};
