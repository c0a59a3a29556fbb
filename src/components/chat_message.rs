//! Chat message component

use chrono::Local;
use leptos::prelude::*;

use crate::components::LoadingDots;
use crate::types::{Message, MessageKind};

/// Render a single chat line.
///
/// Questions sit on the right, answers, errors and the thinking
/// placeholder on the left.
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_question = message.kind == MessageKind::Question;
    let is_thinking = message.kind == MessageKind::Thinking;

    let bubble = match message.kind {
        MessageKind::Question => "bg-blue-600 text-white rounded-tr-sm",
        MessageKind::Answer => "bg-white border border-gray-200 text-gray-800 rounded-tl-sm",
        MessageKind::Thinking => "bg-gray-200 text-gray-700 rounded-tl-sm animate-pulse",
        MessageKind::Error => "bg-red-100 text-red-700 rounded-tl-sm",
    };

    view! {
        <div class=format!(
            "flex message-appear {}",
            if is_question { "justify-end" } else { "justify-start" }
        )>
            <div class=format!("max-w-[75%] rounded-lg p-3 {}", bubble)>
                <div class="flex items-center gap-2">
                    <p class="whitespace-pre-wrap break-words">{message.text.clone()}</p>
                    {is_thinking.then(|| view! { <LoadingDots /> })}
                </div>

                // Timestamp
                <div class=format!(
                    "text-xs mt-1 {}",
                    if is_question { "text-blue-200" } else { "text-gray-500" }
                )>
                    {message.clock(&Local)}
                </div>
            </div>
        </div>
    }
}
