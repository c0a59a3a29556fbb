//! PDF Q&A - Leptos frontend
//!
//! Upload PDFs, browse them, and ask questions about a document in a
//! chat view. All storage and answering happens on the remote API; this
//! crate only renders pages and calls it.

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use api::ApiClient;
use components::Header;
use pages::{DocumentChatPage, DocumentListPage, UploadPage};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::from_env();
    tracing::info!("Using document API at {}", api.base_url());
    provide_context(api);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100">
                <Header />
                <main class="container mx-auto py-6 px-4">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=DocumentListPage />
                        <Route path=path!("/upload") view=UploadPage />
                        <Route path=path!("/document/:document_id") view=DocumentChatPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-400 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=routes::DOCUMENTS
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Back to Documents"
                </a>
            </div>
        </div>
    }
}
