// src/search/engine.rs

use crate::domain::{FilterSpec, Listing};
use crate::search::view::ResultView;
use std::collections::HashSet;

/// The two home-feed collections as last fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingCollections {
    pub featured: Vec<Listing>,
    pub nearest: Vec<Listing>,
    /// False until the first fetch cycle completes.
    pub loaded: bool,
}

impl ListingCollections {
    pub fn loaded(featured: Vec<Listing>, nearest: Vec<Listing>) -> Self {
        Self {
            featured,
            nearest,
            loaded: true,
        }
    }

    /// Featured followed by nearest, duplicates removed.
    pub fn combined(&self) -> Vec<Listing> {
        let merged: Vec<Listing> = self
            .featured
            .iter()
            .chain(self.nearest.iter())
            .cloned()
            .collect();
        dedupe(&merged)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank query: show the browse view, not an empty result.
    NotSearching,
    Matches(Vec<Listing>),
}

pub fn is_active_query(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Case-insensitive substring search over the text fields, the price string
/// and every facility tag.
pub fn search(query: &str, collection: &[Listing]) -> SearchOutcome {
    if !is_active_query(query) {
        return SearchOutcome::NotSearching;
    }

    let needle = query.trim().to_lowercase();
    let matches = collection
        .iter()
        .filter(|listing| matches_query(listing, &needle))
        .cloned()
        .collect();

    SearchOutcome::Matches(matches)
}

fn matches_query(listing: &Listing, needle: &str) -> bool {
    let fields = [
        &listing.title,
        &listing.location,
        &listing.description,
        &listing.owner,
        &listing.price,
    ];

    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
        || listing
            .facilities
            .iter()
            .any(|facility| facility.to_lowercase().contains(needle))
}

/// Keeps listings priced inside `[min_price, max_price]` that carry every
/// required facility.
pub fn apply_filter(spec: &FilterSpec, collection: &[Listing]) -> Vec<Listing> {
    collection
        .iter()
        .filter(|listing| passes_filter(spec, listing))
        .cloned()
        .collect()
}

fn passes_filter(spec: &FilterSpec, listing: &Listing) -> bool {
    let price = listing.numeric_price();
    let in_range = u64::from(spec.min_price) <= price && price <= u64::from(spec.max_price);

    in_range
        && spec
            .required_facilities
            .iter()
            .all(|required| listing.has_facility(required))
}

/// Drops later listings whose `id` was already seen.
///
/// The empty id is an id like any other: records the normalizer could not
/// give an id collapse into the first of them.
pub fn dedupe(collection: &[Listing]) -> Vec<Listing> {
    let mut seen = HashSet::new();
    collection
        .iter()
        .filter(|listing| seen.insert(listing.id.as_str()))
        .cloned()
        .collect()
}

/// Recomputes the visible result set from scratch.
///
/// Always starts from the base collections so a filter applied during a
/// search never narrows an already-filtered list.
pub fn compose_result(
    query: &str,
    spec: &FilterSpec,
    collections: &ListingCollections,
) -> ResultView {
    let base = collections.combined();

    let (items, is_searching) = match search(query, &base) {
        SearchOutcome::Matches(found) => (apply_filter(spec, &found), true),
        SearchOutcome::NotSearching => (apply_filter(spec, &base), false),
    };

    ResultView {
        items,
        is_searching,
        is_filtered: !spec.is_default(),
        is_loading: !collections.loaded,
        query: if is_searching {
            query.trim().to_string()
        } else {
            String::new()
        },
    }
}
