// src/repository/http.rs
use crate::domain::normalize::distance_km;
use crate::domain::{normalize, normalize_all, Listing};
use crate::repository::{FetchResult, ListingRepository, RepositoryError};
use rand::seq::SliceRandom;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("pg_finder/", env!("CARGO_PKG_VERSION"));

/// The backend never puts more than this many listings in the banner.
const MAX_FEATURED: usize = 3;

/// Path segments the backend uses for collections, never a listing id.
const RESERVED_SEGMENTS: [&str; 1] = ["all"];

/// Talks to the listings backend: `GET /all` for the feeds and `GET /{id}`
/// for a single listing.
pub struct HttpRepository {
    client: Client,
    base_url: Url,
    featured_limit: usize,
    nearest_limit: usize,
}

impl HttpRepository {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        featured_limit: usize,
        nearest_limit: usize,
    ) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            featured_limit,
            nearest_limit,
        })
    }

    fn endpoint(&self, segment: &str) -> Result<Url, RepositoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RepositoryError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    fn get_json(&self, segment: &str) -> Result<Value, RepositoryError> {
        let url = self.endpoint(segment)?;
        tracing::debug!("GET {url}");

        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RepositoryError::Status(status.as_u16()));
        }

        Ok(resp.json::<Value>()?)
    }

    fn fetch_all_raw(&self) -> Result<Vec<Value>, RepositoryError> {
        match self.get_json("all")? {
            Value::Array(items) => {
                tracing::debug!("Fetched {} raw listings", items.len());
                Ok(items)
            }
            _ => Err(RepositoryError::InvalidFormat),
        }
    }

    fn featured(&self) -> Result<Vec<Listing>, RepositoryError> {
        let mut raw = self.fetch_all_raw()?;
        raw.shuffle(&mut rand::thread_rng());
        raw.truncate(self.featured_limit.min(MAX_FEATURED));
        Ok(normalize_all(&raw))
    }

    fn nearest(&self) -> Result<Vec<Listing>, RepositoryError> {
        let raw = self.fetch_all_raw()?;
        Ok(normalize_all(&nearest_first(raw, self.nearest_limit)))
    }

    /// An unknown id (404 from the backend, or a reserved segment) is `None`.
    fn by_id(&self, id: &str) -> Result<Option<Listing>, RepositoryError> {
        let id = id.trim();
        if id.is_empty() || RESERVED_SEGMENTS.contains(&id) {
            return Ok(None);
        }

        let body = match self.get_json(id) {
            Err(RepositoryError::Status(404)) => return Ok(None),
            other => other?,
        };

        match body {
            Value::Null => Ok(None),
            record @ Value::Object(_) => Ok(Some(normalize(&record))),
            _ => Err(RepositoryError::InvalidFormat),
        }
    }
}

impl ListingRepository for HttpRepository {
    fn fetch_featured(&self) -> FetchResult<Vec<Listing>> {
        FetchResult::from_result("suggestions", self.featured())
    }

    fn fetch_nearest(&self) -> FetchResult<Vec<Listing>> {
        FetchResult::from_result("nearest PGs", self.nearest())
    }

    fn fetch_by_id(&self, id: &str) -> FetchResult<Option<Listing>> {
        FetchResult::from_result("PG by ID", self.by_id(id))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, RepositoryError> {
    let url = Url::parse(raw.trim()).map_err(|e| RepositoryError::Url(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(RepositoryError::Url(raw.to_string()));
    }
    Ok(url)
}

/// Sorts by `distance_km` ascending (missing counts as 0) and keeps `limit`.
fn nearest_first(mut raw: Vec<Value>, limit: usize) -> Vec<Value> {
    raw.sort_by(|a, b| distance_km(a).total_cmp(&distance_km(b)));
    raw.truncate(limit);
    raw
}
