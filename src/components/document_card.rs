//! Document card for the list page

use chrono::Local;
use leptos::prelude::*;

use crate::routes;
use crate::types::Document;

/// Card linking to a document's chat, with a delete button.
///
/// The delete click is kept from reaching the surrounding link.
#[component]
pub fn DocumentCard<F>(document: Document, on_delete: F) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    let id = document.id.clone();
    let on_delete_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_delete(id.clone());
    };

    view! {
        <a
            href=routes::document(&document.id)
            class="bg-white shadow hover:shadow-md rounded-lg p-5 block transition duration-200"
        >
            <div class="flex justify-between items-start gap-3">
                <div class="min-w-0">
                    <h2 class="text-xl font-semibold text-gray-800 mb-2 truncate">
                        {document.display_title().to_string()}
                    </h2>
                    <p class="text-gray-600 text-sm mb-2 truncate">{document.filename.clone()}</p>
                    <p class="text-gray-500 text-xs">
                        "Uploaded on " {document.uploaded_on(&Local)}
                    </p>
                </div>
                <button
                    on:click=on_delete_click
                    class="text-red-500 hover:text-red-700 shrink-0"
                    title="Delete document"
                >
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor">
                        <path
                            fill-rule="evenodd"
                            d="M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z"
                            clip-rule="evenodd"
                        />
                    </svg>
                </button>
            </div>
        </a>
    }
}
