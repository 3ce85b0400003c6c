// templates/pages/home.rs

use crate::domain::{FilterSpec, Listing};
use crate::search::{ResultView, ViewState};
use crate::templates::{
    base_layout,
    components::{banner_slider, card_grid, filter_panel, load_error_notice, search_bar},
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub view: &'a ResultView,
    pub filters: &'a FilterSpec,
    pub featured: &'a [Listing],
    pub nearest: &'a [Listing],
    pub load_error: Option<&'a str>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    let view = vm.view;

    base_layout(
        "Home",
        html! {
            form class="search-form" method="get" action="/" {
                (search_bar(&view.query))
                (filter_panel(vm.filters))
            }

            @if let Some(detail) = vm.load_error {
                (load_error_notice(detail))
            }

            @match view.state() {
                ViewState::Loading => {
                    p class="loading" { "Loading PGs…" }
                }
                ViewState::NoMatches(message) => {
                    section class="results" {
                        h2 { (results_heading(view)) " (0)" }
                        div class="empty-state" {
                            p { (message) }
                            @if view.is_searching {
                                p class="hint" { "Try searching with different keywords" }
                            } @else {
                                p class="hint" { "Try widening the price range or removing facilities" }
                            }
                        }
                    }
                }
                ViewState::Items if view.is_browsing() => {
                    section class="featured" {
                        h2 { "Featured PGs" }
                        (banner_slider(vm.featured))
                    }
                    section class="nearest" {
                        h2 { "Nearest PG Available" }
                        (card_grid(vm.nearest))
                    }
                }
                ViewState::Items => {
                    section class="results" {
                        h2 { (results_heading(view)) " (" (view.items.len()) ")" }
                        (card_grid(&view.items))
                    }
                }
            }
        },
    )
}

fn results_heading(view: &ResultView) -> &'static str {
    if view.is_searching {
        "Search Results"
    } else {
        "Filtered PGs"
    }
}
