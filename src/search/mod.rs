pub mod engine;
pub mod view;


pub use engine::{
    apply_filter, compose_result, dedupe, search, ListingCollections,
    SearchOutcome,
};
pub use view::{ResultView, ViewState};
