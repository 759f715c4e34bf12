//! Shared components. Components are the building blocks of dioxus apps.

mod search_form;
pub use search_form::SearchForm;
