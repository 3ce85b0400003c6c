// templates/pages/details.rs

use crate::domain::Listing;
use crate::templates::{
    base_layout,
    components::{cover_image, facility_chips, price_per_month},
};
use maud::{html, Markup};

pub fn details_page(listing: &Listing) -> Markup {
    base_layout(
        &listing.title,
        html! {
            article class="pg-details" {
                div class="gallery" {
                    @if listing.images.is_empty() {
                        (cover_image("", &listing.title, "gallery-image"))
                    }
                    @for src in &listing.images {
                        (cover_image(src, &listing.title, "gallery-image"))
                    }
                }

                section class="summary" {
                    h1 { (listing.title) }
                    p class="location" { (listing.location) }
                    p { (price_per_month(&listing.price)) }
                }

                section class="quick-info" {
                    span class="distance" { (listing.distance_label) }
                    @if !listing.owner.is_empty() {
                        span class="owner" { (listing.owner) }
                    }
                }

                section {
                    h2 { "Description" }
                    p { (listing.description) }
                }

                section {
                    h2 { "Facilities" }
                    @if listing.facilities.is_empty() {
                        p class="hint" { "No facilities listed" }
                    } @else {
                        (facility_chips(&listing.facilities))
                    }
                }

                div class="call-bar" {
                    @if let Some(tel) = listing.tel_uri() {
                        a class="btn btn-primary" href=(tel) { "Call Now" }
                    } @else {
                        span class="btn btn-disabled" { "Contact number not available" }
                    }
                }
            }
        },
    )
}
