// src/search/view.rs

use crate::domain::Listing;

pub const NO_FILTER_MATCHES: &str = "No PGs match the selected filters";

/// What the presentation layer renders after every search or filter change.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub items: Vec<Listing>,
    pub is_searching: bool,
    pub is_filtered: bool,
    pub is_loading: bool,
    /// Trimmed query text; empty when not searching.
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No data has arrived yet.
    Loading,
    /// Data is loaded but nothing survived search/filter.
    NoMatches(String),
    Items,
}

impl ResultView {
    pub fn state(&self) -> ViewState {
        if self.is_loading {
            return ViewState::Loading;
        }
        if !self.items.is_empty() {
            return ViewState::Items;
        }
        if self.is_searching {
            ViewState::NoMatches(format!("No PGs found for \"{}\"", self.query))
        } else if self.is_filtered {
            ViewState::NoMatches(NO_FILTER_MATCHES.to_string())
        } else {
            ViewState::Items
        }
    }

    /// True when the plain home feed should be shown instead of a result grid.
    pub fn is_browsing(&self) -> bool {
        !self.is_searching && !self.is_filtered
    }
}
