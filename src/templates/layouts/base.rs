use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · PG Finder" }
            }
            body class="app" {
                header class="app-header" {
                    a href="/" class="brand" { "PG Finder" }
                }
                main { (content) }
            }
        }
    }
}
