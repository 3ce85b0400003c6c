// src/tests/router_tests/home_tests.rs

use crate::handle;
use crate::tests::utils::{body_string, get, seed_repo, FailingRepository};

#[test]
fn home_shows_featured_and_nearest() {
    let repo = seed_repo();

    let resp = handle(get("/"), &repo).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Featured PGs"));
    assert!(body.contains("Nearest PG Available"));
    assert!(body.contains("Budget Friendly PG"));
    assert!(body.contains("/pg?id=n4"));
    assert!(!body.contains("Search Results"));
}

#[test]
fn search_lists_matching_pgs() {
    let repo = seed_repo();

    let body = body_string(handle(get("/?q=geyser"), &repo).unwrap());

    // Comfort Zone PG appears once as s2 and once as n2
    assert!(body.contains("Search Results (2)"));
    assert!(body.contains("Comfort Zone PG"));
    assert!(!body.contains("Student Friendly PG"));
    assert!(!body.contains("Featured PGs"));
}

#[test]
fn search_with_spaces_is_decoded() {
    let repo = seed_repo();

    let body = body_string(handle(get("/?q=gtb+nagar"), &repo).unwrap());
    assert!(body.contains("Search Results (2)"));
    assert!(body.contains("Luxury PG Accommodation"));
}

#[test]
fn search_without_matches_shows_empty_state() {
    let repo = seed_repo();

    let body = body_string(handle(get("/?q=rooftop%20pool"), &repo).unwrap());

    assert!(body.contains("Search Results (0)"));
    assert!(body.contains("No PGs found for"));
    assert!(body.contains("rooftop pool"));
    assert!(body.contains("Try searching with different keywords"));
}

#[test]
fn blank_search_falls_back_to_browse_view() {
    let repo = seed_repo();

    let body = body_string(handle(get("/?q=%20%20"), &repo).unwrap());
    assert!(body.contains("Featured PGs"));
    assert!(!body.contains("No PGs found"));
}

#[test]
fn filters_narrow_results() {
    let repo = seed_repo();

    let body = body_string(
        handle(get("/?min=6000&max=7000&facility=AC&facility=WiFi"), &repo).unwrap(),
    );

    // only "Premium PG for Girls" (s1 and n1) is 6000-7000 with AC and WiFi
    assert!(body.contains("Filtered PGs (2)"));
    assert!(body.contains("Premium PG for Girls"));
    assert!(!body.contains("Comfort Zone PG"));
    assert!(body.contains(r#"value="AC" checked"#));
}

#[test]
fn search_and_filter_combine() {
    let repo = seed_repo();

    let body = body_string(handle(get("/?q=delhi&max=6000"), &repo).unwrap());

    assert!(body.contains("Search Results (1)"));
    assert!(body.contains("Budget Friendly PG"));
}

#[test]
fn filters_with_no_match_explain_why() {
    let repo = seed_repo();

    let body = body_string(handle(get("/?facility=Parking"), &repo).unwrap());
    assert!(body.contains("No PGs match the selected filters"));
}

#[test]
fn failed_fetch_still_renders_page() {
    let resp = handle(get("/"), &FailingRepository).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Couldn&#39;t load PGs.") || body.contains("Couldn't load PGs."));
    assert!(body.contains("Search"));
}

#[test]
fn unknown_route_is_not_found() {
    let repo = seed_repo();
    assert!(matches!(
        handle(get("/admin"), &repo),
        Err(crate::errors::ServerError::NotFound)
    ));
}
