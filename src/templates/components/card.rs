use crate::domain::Listing;
use crate::templates::components::{cover_image, facility_chips, price_per_month};
use crate::templates::details_href;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a class="pg-card" href=(details_href(&listing.id))
            data-category=[listing.category.map(|c| c.as_str())] {
            div class="pg-card-media" {
                (cover_image(&listing.primary_image, &listing.title, "pg-card-image"))
                span class="location-badge" { (listing.location) }
            }
            div class="pg-card-body" {
                h3 class="pg-card-title" { (listing.title) }
                (price_per_month(&listing.price))
                (facility_chips(&listing.facilities))
            }
        }
    }
}

pub fn card_grid(listings: &[Listing]) -> Markup {
    html! {
        div class="card-grid" {
            @for listing in listings {
                (listing_card(listing))
            }
        }
    }
}
