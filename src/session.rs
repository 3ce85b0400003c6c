// src/session.rs

use crate::domain::{FilterSpec, Listing};
use crate::repository::{FetchResult, ListingRepository};
use crate::search::{compose_result, ListingCollections, ResultView};

/// Identifies one fetch cycle. Only the most recently issued ticket may
/// replace the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// State the presentation layer owns between engine calls: the current
/// query, the applied filters and the last fetched collections.
#[derive(Debug, Default)]
pub struct BrowseSession {
    pub query: String,
    pub filters: FilterSpec,
    pub collections: ListingCollections,
    pub load_error: Option<String>,
    generation: u64,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Applies a finished fetch cycle. Returns false and discards the results
    /// when a newer load was started in the meantime.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        featured: FetchResult<Vec<Listing>>,
        nearest: FetchResult<Vec<Listing>>,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                "Dropping stale load {} (latest is {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.load_error = featured.error.or(nearest.error);
        self.collections = ListingCollections::loaded(featured.data, nearest.data);
        true
    }

    pub fn load_from(&mut self, repo: &dyn ListingRepository) -> ResultView {
        let ticket = self.begin_load();
        let featured = repo.fetch_featured();
        let nearest = repo.fetch_nearest();
        self.complete_load(ticket, featured, nearest);
        self.view()
    }

    pub fn on_search_text_changed(&mut self, text: &str) -> ResultView {
        self.query = text.to_string();
        self.view()
    }

    pub fn on_filter_applied(&mut self, spec: FilterSpec) -> ResultView {
        self.filters = spec;
        self.view()
    }

    pub fn on_filter_reset(&mut self) -> ResultView {
        self.filters = FilterSpec::default();
        self.view()
    }

    pub fn view(&self) -> ResultView {
        compose_result(&self.query, &self.filters, &self.collections)
    }
}
