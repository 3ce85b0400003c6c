use crate::domain::filter::price_steps;
use crate::domain::{FilterSpec, AVAILABLE_FACILITIES};
use maud::{html, Markup};

/// Price range selectors and facility checkboxes. Rendered inside the same
/// GET form as the search bar so a new search keeps the applied filters.
pub fn filter_panel(filters: &FilterSpec) -> Markup {
    html! {
        details class="filter-panel" open[!filters.is_default()] {
            summary { "Filters" }

            fieldset {
                legend { "Price Range" }
                label {
                    "Minimum Price "
                    (price_select("min", filters.min_price))
                }
                label {
                    "Maximum Price "
                    (price_select("max", filters.max_price))
                }
                p class="price-summary" {
                    "₹" (filters.min_price) " - ₹" (filters.max_price) " per month"
                }
            }

            fieldset {
                legend { "Facilities" }
                @for facility in AVAILABLE_FACILITIES {
                    label class="facility-option" {
                        input type="checkbox" name="facility" value=(facility)
                            checked[filters.requires(facility)];
                        (facility)
                    }
                }
            }

            div class="filter-actions" {
                button type="submit" class="btn btn-primary" { "Apply Filters" }
                a href="/" class="btn-link" { "Reset" }
            }
        }
    }
}

fn price_select(name: &str, selected: u32) -> Markup {
    html! {
        select name=(name) {
            @for price in price_steps() {
                option value=(price) selected[price == selected] { "₹" (price) }
            }
        }
    }
}
