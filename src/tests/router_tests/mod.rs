mod details_tests;
mod home_tests;
