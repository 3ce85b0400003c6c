pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::base::base_layout;

/// Link to a listing's details page.
pub fn details_href(id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", id)
        .finish();
    format!("/pg?{query}")
}
