use crate::domain::Listing;
use crate::repository::{FetchResult, ListingRepository, SeedRecords, StaticRepository};
use astra::{Body, Request, Response};
use http::Method;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Repository over the bundled seed data
pub fn seed_repo() -> StaticRepository {
    StaticRepository::new(SeedRecords::bundled().expect("bundled seed must parse"))
}

/// A backend that is down: every call fails with an empty fallback
pub struct FailingRepository;

impl ListingRepository for FailingRepository {
    fn fetch_featured(&self) -> FetchResult<Vec<Listing>> {
        FetchResult::failed("HTTP error! status: 503", Vec::new())
    }

    fn fetch_nearest(&self) -> FetchResult<Vec<Listing>> {
        FetchResult::failed("HTTP error! status: 503", Vec::new())
    }

    fn fetch_by_id(&self, _id: &str) -> FetchResult<Option<Listing>> {
        FetchResult::failed("HTTP error! status: 503", None)
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// Local stand-in for the listings backend. Answers one connection per
/// `(status, body)` pair, in order, and returns the request paths it saw.
pub fn stub_backend(replies: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut paths = Vec::new();

        for (status, body) in replies {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                let read = reader.read_line(&mut header).unwrap();
                if read == 0 || header == "\r\n" {
                    break;
                }
            }
            paths.push(
                request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string(),
            );

            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }

        paths
    });

    (base_url, handle)
}
