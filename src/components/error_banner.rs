//! Inline error banner

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    message: String,
    #[prop(default = "p-4 mb-6")] spacing: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("bg-red-100 border-l-4 border-red-500 text-red-700 animate-fade-in {}", spacing)
            role="alert"
        >
            <p>{message}</p>
        </div>
    }
}
