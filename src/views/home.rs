use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::SearchForm;

/// Landing page hosting the question search form
#[component]
pub fn Home() -> Element {
    let mut last_query = use_signal(|| None::<String>);

    rsx! {
        div { class: "search-container",
            div { class: "search-header",
                h1 { "Questions" }
            }

            SearchForm {
                submit_search: move |query: String| {
                    tracing::info!("Search submitted: {}", query);
                    last_query.set(Some(query));
                }
            }

            if let Some(query) = last_query() {
                p { class: "search-status", "Last search: \"{query}\"" }
            }
        }
    }
}
