pub mod filter;
pub mod listing;
pub mod normalize;

pub use filter::{FilterSpec, AVAILABLE_FACILITIES};
pub use listing::{Category, Listing};
pub use normalize::{normalize, normalize_all};
