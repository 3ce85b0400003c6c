use maud::{html, Markup};

pub mod banner;
pub mod card;
pub mod error;
pub mod filter_panel;
pub mod search_bar;

pub use banner::banner_slider;
pub use card::{card_grid, listing_card};
pub use error::load_error_notice;
pub use filter_panel::filter_panel;
pub use search_bar::search_bar;

/// Listing cover, or a neutral placeholder when there is no usable image.
pub fn cover_image(src: &str, alt: &str, class: &str) -> Markup {
    html! {
        @if src.trim().is_empty() {
            div class={ (class) " image-placeholder" } aria-label=(alt) {}
        } @else {
            img class=(class) src=(src) alt=(alt) loading="lazy";
        }
    }
}

pub fn facility_chips(facilities: &[String]) -> Markup {
    html! {
        ul class="chips" {
            @for facility in facilities {
                li class="chip" { (facility) }
            }
        }
    }
}

pub fn price_per_month(price: &str) -> Markup {
    html! { span class="price" { "₹" (price) "/month" } }
}
