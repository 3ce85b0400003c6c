mod router_tests;
pub(crate) mod utils;
