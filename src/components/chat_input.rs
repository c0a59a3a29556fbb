//! Question input component

use leptos::prelude::*;
use web_sys::HtmlTextAreaElement;

const MAX_HEIGHT: i32 = 160;

/// Height for the textarea given its content height
fn fitted_height(scroll_height: i32) -> i32 {
    scroll_height.clamp(0, MAX_HEIGHT)
}

/// Question box with auto-resize textarea.
///
/// Enter submits, Shift+Enter inserts a newline. Blank input is passed
/// through to `on_submit`, which decides what to do with it.
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Whether a question is in flight
    #[prop(into)]
    busy: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Ask a question about this document...")]
    placeholder: &'static str,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Auto-resize textarea
    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let style = web_sys::HtmlElement::style(el);
            let _ = style.set_property("height", "auto");
            let height = fitted_height(el.scroll_height());
            let _ = style.set_property("height", &format!("{}px", height));
        }
    };

    // Shrink back once the question has been taken
    Effect::new(move |_| {
        if value.get().is_empty() {
            resize_textarea();
        }
    });

    let on_input = move |ev: web_sys::Event| {
        value.set(event_target_value(&ev));
        resize_textarea();
    };

    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                on_submit();
            }
        }
    };

    let on_button_click = move |_| on_submit();

    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <div class="flex items-end gap-3 p-4 border-t">
            <textarea
                node_ref=textarea_ref
                prop:value=move || value.get()
                on:input=on_input
                on:keydown=on_keydown
                placeholder=placeholder
                disabled=move || busy.get()
                rows="1"
                class="flex-grow px-3 py-2 border rounded-lg resize-none
                       focus:outline-none focus:ring-2 focus:ring-blue-500
                       disabled:opacity-50 disabled:cursor-not-allowed"
                style=format!("max-height: {}px;", MAX_HEIGHT)
            ></textarea>

            <button
                on:click=on_button_click
                disabled=move || busy.get() || is_empty.get()
                class="px-4 py-2 rounded-lg font-medium bg-blue-600 text-white hover:bg-blue-700
                       disabled:bg-gray-300 disabled:text-gray-500 disabled:cursor-not-allowed transition-colors"
            >
                {move || if busy.get() { "Processing..." } else { "Ask" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitted_height_follows_content() {
        assert_eq!(fitted_height(24), 24);
        assert_eq!(fitted_height(MAX_HEIGHT), MAX_HEIGHT);
    }

    #[test]
    fn test_fitted_height_is_capped() {
        assert_eq!(fitted_height(MAX_HEIGHT + 1), MAX_HEIGHT);
        assert_eq!(fitted_height(900), MAX_HEIGHT);
    }

    #[test]
    fn test_fitted_height_never_negative() {
        assert_eq!(fitted_height(-5), 0);
    }
}
