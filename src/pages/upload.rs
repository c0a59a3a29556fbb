//! Upload page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use web_sys::{DragEvent, File, HtmlInputElement};

use crate::api::ApiClient;
use crate::components::{ErrorBanner, LoadingSpinner};
use crate::state::{FileSource, UploadForm};

/// PDF upload form with a drop zone
#[component]
pub fn UploadPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    // `File` is a JS handle, so the form lives in thread-local storage
    let form = RwSignal::new_local(UploadForm::<File>::default());

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        form.update(|f| f.select(file, FileSource::Picker));
        // Allow picking the same file again after clearing it
        input.set_value("");
    };

    let on_drag = move |ev: DragEvent, active: bool| {
        ev.prevent_default();
        ev.stop_propagation();
        form.update(|f| f.set_drag_active(active));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        form.update(|f| f.select(file, FileSource::Drop));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(file) = form.try_update(|f| f.begin_upload()).flatten() else {
            return;
        };

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.upload_document(&file).await;
            match &result {
                Ok(document) => tracing::info!("Uploaded {} as {}", document.filename, document.id),
                Err(e) => tracing::error!("Error uploading document: {}", e),
            }

            match form.try_update(|f| f.finish_upload(result)) {
                Some(Some(target)) => navigate(&target, Default::default()),
                Some(None) => {}
                None => tracing::debug!("Upload page left before upload finished"),
            }
        });
    };

    view! {
        <Title text="Upload PDF Document" />
        <div class="max-w-xl mx-auto">
            <h1 class="text-2xl font-bold text-gray-800 mb-6">"Upload PDF Document"</h1>

            {move || form.with(|f| f.error().map(|msg| view! { <ErrorBanner message=msg.to_string() /> }))}

            <form on:submit=on_submit class="bg-white shadow-md rounded-lg p-6">
                <div
                    class=move || format!(
                        "border-2 border-dashed rounded-lg p-12 text-center transition-colors {}",
                        if form.with(|f| f.is_drag_active()) { "border-blue-500 bg-blue-50" } else { "border-gray-300" }
                    )
                    on:dragenter=move |ev: DragEvent| on_drag(ev, true)
                    on:dragover=move |ev: DragEvent| on_drag(ev, true)
                    on:dragleave=move |ev: DragEvent| on_drag(ev, false)
                    on:drop=on_drop
                >
                    <input
                        type="file"
                        id="file-upload"
                        accept=".pdf,application/pdf"
                        class="hidden"
                        on:change=on_file_change
                    />

                    <label for="file-upload" class="cursor-pointer">
                        <div class="flex flex-col items-center justify-center">
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                class="h-12 w-12 text-gray-400 mb-3"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M7 16a4 4 0 01-.88-7.903A5 5 0 1115.9 6L16 6a5 5 0 011 9.9M15 13l-3-3m0 0l-3 3m3-3v12"
                                />
                            </svg>
                            <p class="text-gray-700 mb-2">
                                <span class="font-medium text-blue-600">"Click to upload"</span>
                                " or drag and drop"
                            </p>
                            <p class="text-sm text-gray-500">"PDF files only (max 10MB)"</p>
                        </div>
                    </label>
                </div>

                // Selected file
                {move || form.with(|f| f.file_name()).map(|name| view! {
                    <div class="mt-4 p-3 bg-gray-50 rounded flex items-center justify-between">
                        <span class="text-sm text-gray-700 truncate max-w-xs">"📄 " {name}</span>
                        <button
                            type="button"
                            on:click=move |_| form.update(|f| f.clear_file())
                            class="text-gray-500 hover:text-gray-700"
                            title="Remove file"
                        >
                            "✕"
                        </button>
                    </div>
                })}

                <div class="mt-6">
                    <button
                        type="submit"
                        disabled=move || !form.with(|f| f.can_submit())
                        class="w-full py-2 px-4 rounded font-bold flex items-center justify-center gap-2
                               bg-blue-600 hover:bg-blue-700 text-white
                               disabled:bg-gray-400 disabled:text-gray-700 disabled:cursor-not-allowed"
                    >
                        <Show when=move || form.with(|f| f.is_uploading())>
                            <LoadingSpinner size="w-4 h-4" />
                        </Show>
                        {move || if form.with(|f| f.is_uploading()) { "Uploading..." } else { "Upload Document" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
