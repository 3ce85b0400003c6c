use maud::{html, Markup};

pub const SEARCH_PLACEHOLDER: &str = "Search nearest available pg";

pub fn search_bar(query: &str) -> Markup {
    html! {
        div class="search-bar" {
            input type="search" name="q" value=(query) placeholder=(SEARCH_PLACEHOLDER)
                aria-label="Search";
            button type="submit" class="btn" { "Search" }
        }
    }
}
