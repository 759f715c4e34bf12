use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::utils::config::{SEARCH_PLACEHOLDER, SUBMIT_LABEL};

/// Text currently held by a [`SearchForm`] input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFormState {
    query: String,
}

impl SearchFormState {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query with the latest input value
    pub fn on_input_change(&mut self, new_text: String) {
        self.query = new_text;
    }

    /// Whether the submit button is enabled. Whitespace counts as input.
    pub fn can_submit(&self) -> bool {
        !self.query.is_empty()
    }

    /// Query to hand to the submission callback, or `None` while the field is empty.
    /// The query is left in place after submitting.
    pub fn on_submit(&self) -> Option<String> {
        self.can_submit().then(|| self.query.clone())
    }
}

/// Hand the current query to `submit_search` unless the field is empty.
/// Returns whether the callback ran.
pub fn submit_query(state: &SearchFormState, submit_search: impl FnOnce(String)) -> bool {
    match state.on_submit() {
        Some(query) => {
            tracing::debug!("Submitting search: {}", query);
            submit_search(query);
            true
        }
        None => {
            tracing::debug!("Ignoring submit with empty query");
            false
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SearchFormProps {
    submit_search: EventHandler<String>,
}

#[component]
pub fn SearchForm(props: SearchFormProps) -> Element {
    let state = use_signal(SearchFormState::default);

    rsx! {
        SearchFormFields { state, submit_search: props.submit_search }
    }
}

#[derive(Props, PartialEq, Clone)]
struct SearchFormFieldsProps {
    state: Signal<SearchFormState>,
    submit_search: EventHandler<String>,
}

#[component]
fn SearchFormFields(props: SearchFormFieldsProps) -> Element {
    let mut state = props.state;
    let submit_search = props.submit_search;

    let query = state.read().query().to_string();
    let disabled = !state.read().can_submit();

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                // Enter still fires submit while the button is disabled
                submit_query(&state.read(), |query| submit_search.call(query));
            },
            input {
                class: "search-input",
                r#type: "text",
                placeholder: SEARCH_PLACEHOLDER,
                value: "{query}",
                oninput: move |evt| state.write().on_input_change(evt.value())
            }
            button {
                r#type: "submit",
                class: "button",
                disabled,
                "{SUBMIT_LABEL}"
            }
        }
    }
}
