mod fetch_result;
mod http;
mod repository_error;
mod seed;

pub use fetch_result::FetchResult;
pub use http::HttpRepository;
pub use repository_error::RepositoryError;
pub use seed::{MockRepository, SeedRecords, StaticRepository};

use crate::config::{Config, DataSource};
use crate::domain::Listing;

/// Supplies the two home-feed collections and single-listing lookups.
///
/// Implementations never panic or return `Err`: failures come back as an
/// unsuccessful [`FetchResult`] with empty data.
pub trait ListingRepository: Send + Sync {
    fn fetch_featured(&self) -> FetchResult<Vec<Listing>>;

    fn fetch_nearest(&self) -> FetchResult<Vec<Listing>>;

    fn fetch_by_id(&self, id: &str) -> FetchResult<Option<Listing>>;
}

pub fn from_config(cfg: &Config) -> Result<Box<dyn ListingRepository>, RepositoryError> {
    let repo: Box<dyn ListingRepository> = match cfg.data_source {
        DataSource::Static => Box::new(StaticRepository::new(SeedRecords::bundled()?)),
        DataSource::Mock => Box::new(MockRepository::new(
            SeedRecords::bundled()?,
            cfg.mock_delay,
            cfg.featured_limit,
            cfg.nearest_limit,
        )),
        DataSource::Http => Box::new(HttpRepository::new(
            &cfg.api_base_url,
            cfg.http_timeout,
            cfg.featured_limit,
            cfg.nearest_limit,
        )?),
    };

    tracing::info!("Using {:?} listing source", cfg.data_source);
    Ok(repo)
}
