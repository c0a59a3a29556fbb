//! Document list page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::ApiClient;
use crate::components::{DocumentCard, ErrorBanner, PageLoading};
use crate::routes;
use crate::state::documents::{confirm_delete, DocumentList};

/// Fetch the document list into `list`
fn refresh_documents(api: ApiClient, list: RwSignal<DocumentList>) {
    if list.try_update(|l| l.begin_refresh()).is_none() {
        return;
    }
    spawn_local(async move {
        let result = api.get_documents().await;
        if let Err(e) = &result {
            tracing::error!("Error fetching documents: {}", e);
        }
        if list.try_update(|l| l.finish_refresh(result)).is_none() {
            tracing::debug!("Document list left before it loaded");
        }
    });
}

fn ask_user(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

/// Grid of uploaded documents
#[component]
pub fn DocumentListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = RwSignal::new(DocumentList::default());

    // Load on mount
    let api_for_load = api.clone();
    Effect::new(move |_| {
        refresh_documents(api_for_load.clone(), list);
    });

    let on_delete = move |document_id: String| {
        let Some(document_id) = confirm_delete(&document_id, ask_user) else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            match api.delete_document(&document_id).await {
                Ok(_) => {
                    tracing::info!("Deleted document {}", document_id);
                    refresh_documents(api, list);
                }
                Err(e) => {
                    tracing::error!("Error deleting document {}: {}", document_id, e);
                    if list.try_update(|l| l.delete_failed()).is_none() {
                        tracing::debug!("Document list left before delete finished");
                    }
                }
            }
        });
    };

    view! {
        <Title text="Your Documents" />
        {move || {
            if list.with(|l| l.is_loading()) {
                return view! { <PageLoading message="Loading documents..." /> }.into_any();
            }

            let on_delete = on_delete.clone();
            view! {
                <div class="max-w-4xl mx-auto">
                    <div class="flex justify-between items-center mb-6">
                        <h1 class="text-2xl font-bold text-gray-800">"Your Documents"</h1>
                        <a
                            href=routes::UPLOAD
                            class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded"
                        >
                            "Upload New Document"
                        </a>
                    </div>

                    {list.with(|l| l.error().map(|msg| view! { <ErrorBanner message=msg.to_string() /> }))}

                    {if list.with(|l| l.is_empty()) {
                        view! { <EmptyList /> }.into_any()
                    } else {
                        view! {
                            <div class="grid gap-4 md:grid-cols-2">
                                {list.with(|l| {
                                    l.documents()
                                        .iter()
                                        .cloned()
                                        .map(|document| {
                                            view! { <DocumentCard document=document on_delete=on_delete.clone() /> }
                                        })
                                        .collect::<Vec<_>>()
                                })}
                            </div>
                        }.into_any()
                    }}
                </div>
            }.into_any()
        }}
    }
}

/// Shown when nothing has been uploaded yet
#[component]
fn EmptyList() -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <p class="text-gray-600">"You haven't uploaded any documents yet."</p>
            <a href=routes::UPLOAD class="text-blue-600 hover:underline mt-2 inline-block">
                "Upload your first document"
            </a>
        </div>
    }
}
