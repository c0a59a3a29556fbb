//! Header component

use leptos::prelude::*;

use crate::routes;

/// Application header with links to the list and upload pages
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-blue-600 text-white shadow">
            <div class="container mx-auto py-4 px-6 flex justify-between items-center">
                <a href=routes::DOCUMENTS class="text-2xl font-bold hover:opacity-90 transition-opacity">
                    "PDF Q&A App"
                </a>

                <nav>
                    <ul class="flex space-x-6">
                        <li>
                            <a href=routes::DOCUMENTS class="hover:text-blue-200">"Documents"</a>
                        </li>
                        <li>
                            <a href=routes::UPLOAD class="hover:text-blue-200">"Upload"</a>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
