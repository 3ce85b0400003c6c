use maud::{html, Markup};

/// Shown above the feed when a fetch failed; the rest of the page still works.
pub fn load_error_notice(detail: &str) -> Markup {
    html! {
        div class="notice notice-error" role="alert" {
            strong { "Couldn't load PGs." }
            " Please try again in a moment."
            small class="notice-detail" { (detail) }
        }
    }
}
