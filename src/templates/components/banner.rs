use crate::domain::Listing;
use crate::templates::components::{cover_image, price_per_month};
use crate::templates::details_href;
use maud::{html, Markup};

/// Horizontally scrolling featured banners. Snapping is left to CSS.
pub fn banner_slider(featured: &[Listing]) -> Markup {
    html! {
        div class="banner-slider" {
            @for listing in featured {
                a class="banner" href=(details_href(&listing.id)) {
                    (cover_image(&listing.primary_image, &listing.title, "banner-image"))
                    div class="banner-overlay" {
                        h3 { (listing.title) }
                        p class="banner-subtitle" { (listing.description) }
                        p class="banner-meta" {
                            (price_per_month(&listing.price))
                            " · "
                            span { (listing.location) }
                        }
                    }
                }
            }
        }
    }
}
