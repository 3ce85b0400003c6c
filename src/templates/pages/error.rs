use crate::templates::base_layout;
use maud::{html, Markup};

/// Build a basic HTML error page
pub fn error_page(status: u16, message: &str) -> Markup {
    base_layout(
        &format!("Error {status}"),
        html! {
            h1 { "Error " (status) }
            p { (message) }
            p { a href="/" { "← Back to home" } }
        },
    )
}
