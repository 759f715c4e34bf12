/// Configuration constants for the application
pub mod config {
    /// Title of the desktop window
    pub const WINDOW_TITLE: &str = "Trivia Search";

    /// Placeholder shown in the empty search input
    pub const SEARCH_PLACEHOLDER: &str = "Search questions...";

    /// Label of the search submit button
    pub const SUBMIT_LABEL: &str = "submit";
}
