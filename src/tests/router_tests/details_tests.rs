// src/tests/router_tests/details_tests.rs

use crate::errors::ServerError;
use crate::handle;
use crate::responses::error_to_response;
use crate::repository::HttpRepository;
use crate::tests::utils::{body_string, get, seed_repo, stub_backend, FailingRepository};
use std::time::Duration;

#[test]
fn details_page_shows_listing_and_call_link() {
    let repo = seed_repo();

    let resp = handle(get("/pg?id=s3"), &repo).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Student Friendly PG"));
    assert!(body.contains("Indira Nagar, Lucknow"));
    assert!(body.contains("₹6800/month"));
    assert!(body.contains("Mrs. Sunita Verma"));
    assert!(body.contains("2 Meals"));
    assert!(body.contains(r#"href="tel:+919876543212""#));
}

#[test]
fn missing_id_is_bad_request() {
    let repo = seed_repo();
    assert!(matches!(
        handle(get("/pg"), &repo),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn unknown_id_is_not_found() {
    let repo = seed_repo();

    let err = handle(get("/pg?id=zzz"), &repo).err().expect("unknown id must fail");
    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Not Found"));
}

#[test]
fn backend_failure_is_bad_gateway() {
    let err = handle(get("/pg?id=s1"), &FailingRepository)
        .err()
        .expect("backend failure must surface");
    assert!(matches!(err, ServerError::Upstream(_)));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("HTTP error! status: 503"));
}

#[test]
fn unknown_id_from_http_backend_is_not_found() {
    let (base, backend) = stub_backend(vec![(404, r#"{"error": "not found"}"#)]);
    let repo = HttpRepository::new(&base, Duration::from_secs(5), 3, 10).unwrap();

    let err = handle(get("/pg?id=zzz"), &repo)
        .err()
        .expect("unknown id must fail");
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_to_response(err).status(), 404);

    assert_eq!(backend.join().unwrap(), vec!["/zzz"]);
}

#[test]
fn reserved_segment_as_id_is_not_found() {
    let (base, backend) = stub_backend(vec![]);
    let repo = HttpRepository::new(&base, Duration::from_secs(5), 3, 10).unwrap();

    let err = handle(get("/pg?id=all"), &repo)
        .err()
        .expect("reserved id must fail");
    assert!(matches!(err, ServerError::NotFound));
    assert!(backend.join().unwrap().is_empty());
}
