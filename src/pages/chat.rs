//! Document chat page - questions and answers about one document

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api::ApiClient;
use crate::components::{ChatInput, ChatMessage, ErrorBanner, PageLoading};
use crate::routes;
use crate::state::ChatSession;
use crate::types::{Document, Message};

/// Where the page is in loading its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadPhase {
    Loading,
    Ready,
    NotFound,
}

/// Chat view of a single document
#[component]
pub fn DocumentChatPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let document_id = Memo::new(move |_| params.read().get("document_id").unwrap_or_default());

    // Local state
    let phase = RwSignal::new(LoadPhase::Loading);
    let document = RwSignal::new(Option::<Document>::None);
    let session = RwSignal::new(ChatSession::default());
    let question = RwSignal::new(String::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // Load the document whenever the id in the route changes
    let api_for_load = api.clone();
    Effect::new(move |_| {
        let id = document_id.get();
        let api = api_for_load.clone();
        phase.set(LoadPhase::Loading);
        question.set(String::new());

        spawn_local(async move {
            let result = api.get_document(&id).await;

            // The route may have moved on, or the page may be gone
            if document_id.try_get_untracked().as_deref() != Some(id.as_str()) {
                tracing::debug!("Dropping stale load of document {}", id);
                return;
            }

            match result {
                Ok(Some(doc)) => {
                    session.set(ChatSession::from_document(&doc));
                    document.set(Some(doc));
                    phase.set(LoadPhase::Ready);
                }
                Ok(None) => {
                    tracing::warn!("Document {} not found", id);
                    document.set(None);
                    phase.set(LoadPhase::NotFound);
                }
                Err(e) => {
                    tracing::error!("Error fetching document {}: {}", id, e);
                    document.set(None);
                    phase.set(LoadPhase::NotFound);
                }
            }
        });
    });

    // Auto-scroll to the newest message
    Effect::new(move |_| {
        session.track();
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let ask = move || {
        let text = question.get_untracked();
        let Some(pending) = session.try_update(|s| s.submit(&text, Utc::now())).flatten() else {
            return;
        };
        question.set(String::new());

        let id = session.with_untracked(|s| s.document_id().to_string());
        let api = api.clone();
        spawn_local(async move {
            let result = api.ask_question(&id, &pending.question).await;
            if let Err(e) = &result {
                tracing::error!("Error getting answer for document {}: {}", id, e);
            }

            match session.try_update(|s| s.settle(&pending.token, result, Utc::now())) {
                Some(true) => {}
                Some(false) => tracing::debug!("Dropping stale answer for document {}", id),
                None => tracing::debug!("Chat page left before answer arrived"),
            }
        });
    };

    let busy = Signal::derive(move || session.with(|s| s.is_answering()));

    view! {
        {move || match phase.get() {
            LoadPhase::Loading => view! {
                <Title text="Loading document" />
                <PageLoading message="Loading document..." />
            }.into_any(),
            LoadPhase::NotFound => view! { <DocumentNotFound /> }.into_any(),
            LoadPhase::Ready => {
                let ask = ask.clone();
                view! {
                    <div class="max-w-4xl mx-auto">
                        <BackLink />

                        <div class="bg-white shadow rounded-lg overflow-hidden mb-6">
                            // Document header
                            {move || document.get().map(|doc| view! {
                                <Title text=doc.display_title().to_string() />
                                <div class="bg-blue-600 text-white p-4">
                                    <h1 class="text-xl font-bold">{doc.display_title().to_string()}</h1>
                                    <p class="text-blue-100 text-sm">
                                        {doc.filename.clone()} " • Uploaded on " {doc.uploaded_on(&Local)}
                                    </p>
                                </div>
                            })}

                            // Messages area
                            <div class="p-4 h-[calc(100vh-300px)] overflow-y-auto bg-gray-50">
                                <Show when=move || session.with(|s| s.messages().is_empty())>
                                    <EmptyConversation />
                                </Show>
                                <div class="space-y-4">
                                    <For
                                        each=move || session.with(|s| s.messages().to_vec())
                                        key=|message: &Message| message.id.clone()
                                        children=move |message: Message| view! { <ChatMessage message=message /> }
                                    />
                                </div>

                                // Scroll anchor
                                <div node_ref=messages_end_ref></div>
                            </div>

                            // Input area
                            {move || session.with(|s| s.error().map(|msg| view! {
                                <div class="px-4 pt-4">
                                    <ErrorBanner message=msg.to_string() spacing="p-2 text-sm" />
                                </div>
                            }))}
                            <ChatInput value=question on_submit=ask busy=busy />
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}

#[component]
fn BackLink() -> impl IntoView {
    view! {
        <div class="mb-4">
            <a href=routes::DOCUMENTS class="text-blue-600 hover:underline flex items-center">
                "← Back to Documents"
            </a>
        </div>
    }
}

/// Terminal state for an unknown or unloadable document
#[component]
fn DocumentNotFound() -> impl IntoView {
    view! {
        <Title text="Document not found" />
        <div class="max-w-4xl mx-auto">
            <div class="bg-red-100 border-l-4 border-red-500 text-red-700 p-4 mb-6" role="alert">
                <p>"Document not found or couldn't be loaded."</p>
                <a href=routes::DOCUMENTS class="text-red-700 font-bold hover:underline mt-2 inline-block">
                    "Back to Documents"
                </a>
            </div>
        </div>
    }
}

/// Empty state when the document has no questions yet
#[component]
fn EmptyConversation() -> impl IntoView {
    view! {
        <div class="text-center py-8 text-gray-500">
            <div class="text-5xl mb-3">"💬"</div>
            <p class="text-lg">"Ask questions about this document"</p>
            <p class="mt-2">
                "For example: \"What is the main topic of this document?\" or \"Summarize the key points.\""
            </p>
        </div>
    }
}
