pub mod details;
pub mod error;
pub mod home;

pub use details::details_page;
pub use error::error_page;
pub use home::{home_page, HomeVm};
