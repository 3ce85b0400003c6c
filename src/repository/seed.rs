// src/repository/seed.rs
use crate::domain::{normalize, normalize_all, Listing};
use crate::repository::{FetchResult, ListingRepository, RepositoryError};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const SEED_JSON: &str = include_str!("../../data/listings.json");

/// Raw records bundled with the binary, kept unnormalized so they go through
/// the same normalizer as network data.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecords {
    pub suggestions: Vec<Value>,
    pub nearest: Vec<Value>,
}

impl SeedRecords {
    pub fn bundled() -> Result<Self, RepositoryError> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        Ok(serde_json::from_str(json)?)
    }

    fn all(&self) -> impl Iterator<Item = &Value> {
        self.suggestions.iter().chain(self.nearest.iter())
    }

    fn find(&self, id: &str) -> Option<Listing> {
        self.all().map(normalize).find(|listing| listing.id == id)
    }
}

/// Serves the bundled seed data as-is, with no latency.
pub struct StaticRepository {
    records: SeedRecords,
}

impl StaticRepository {
    pub fn new(records: SeedRecords) -> Self {
        Self { records }
    }
}

impl ListingRepository for StaticRepository {
    fn fetch_featured(&self) -> FetchResult<Vec<Listing>> {
        FetchResult::ok(normalize_all(&self.records.suggestions))
    }

    fn fetch_nearest(&self) -> FetchResult<Vec<Listing>> {
        FetchResult::ok(normalize_all(&self.records.nearest))
    }

    fn fetch_by_id(&self, id: &str) -> FetchResult<Option<Listing>> {
        FetchResult::ok(self.records.find(id))
    }
}

/// Seed data behind a simulated network delay, shaped like the backend:
/// featured is a random sample, nearest is capped.
pub struct MockRepository {
    records: SeedRecords,
    delay: Duration,
    featured_limit: usize,
    nearest_limit: usize,
}

impl MockRepository {
    pub fn new(
        records: SeedRecords,
        delay: Duration,
        featured_limit: usize,
        nearest_limit: usize,
    ) -> Self {
        Self {
            records,
            delay,
            featured_limit,
            nearest_limit,
        }
    }

    fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl ListingRepository for MockRepository {
    fn fetch_featured(&self) -> FetchResult<Vec<Listing>> {
        self.simulate_latency();

        let all: Vec<&Value> = self.records.all().collect();
        let featured = all
            .choose_multiple(&mut rand::thread_rng(), self.featured_limit)
            .map(|raw| normalize(raw))
            .collect();

        FetchResult::ok(featured)
    }

    fn fetch_nearest(&self) -> FetchResult<Vec<Listing>> {
        self.simulate_latency();

        let nearest = self
            .records
            .nearest
            .iter()
            .take(self.nearest_limit)
            .map(normalize)
            .collect();

        FetchResult::ok(nearest)
    }

    fn fetch_by_id(&self, id: &str) -> FetchResult<Option<Listing>> {
        self.simulate_latency();
        FetchResult::ok(self.records.find(id))
    }
}
