use crate::domain::FilterSpec;
use crate::errors::ServerError;
use crate::repository::ListingRepository;
use crate::responses::{html_response, ResultResp};
use crate::session::BrowseSession;
use crate::templates::pages::{details_page, home_page, HomeVm};
use astra::Request;

pub fn handle(req: Request, repo: &dyn ListingRepository) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => home(&req, repo),
        ("GET", "/pg") => details(&req, repo),
        _ => Err(ServerError::NotFound),
    }
}

fn home(req: &Request, repo: &dyn ListingRepository) -> ResultResp {
    let (query, filters) = parse_home_params(&parse_query(req));

    let mut session = BrowseSession::new();
    session.load_from(repo);
    session.on_filter_applied(filters);
    let view = session.on_search_text_changed(&query);

    if view.is_searching {
        tracing::info!("Searching for: {:?} ({} results)", view.query, view.items.len());
    }

    html_response(home_page(&HomeVm {
        view: &view,
        filters: &session.filters,
        featured: &session.collections.featured,
        nearest: &session.collections.nearest,
        load_error: session.load_error.as_deref(),
    }))
}

fn details(req: &Request, repo: &dyn ListingRepository) -> ResultResp {
    let params = parse_query(req);
    let id = params
        .iter()
        .find(|(k, _)| k == "id")
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Missing PG id".into()))?;

    let result = repo.fetch_by_id(id);
    if !result.success {
        return Err(ServerError::Upstream(
            result.error.unwrap_or_else(|| "Unknown error".into()),
        ));
    }

    let listing = result.data.ok_or(ServerError::NotFound)?;
    html_response(details_page(&listing))
}

/// Decoded query pairs in order; repeated keys are kept.
fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

/// Search text plus filters from `q`, `min`, `max` and repeated `facility`.
/// Unparseable prices keep their defaults.
fn parse_home_params(pairs: &[(String, String)]) -> (String, FilterSpec) {
    let mut query = String::new();
    let mut filters = FilterSpec::default();

    for (key, value) in pairs {
        match key.as_str() {
            "q" => query = value.clone(),
            "min" => {
                if let Ok(min) = value.trim().parse() {
                    filters.min_price = min;
                }
            }
            "max" => {
                if let Ok(max) = value.trim().parse() {
                    filters.max_price = max;
                }
            }
            "facility" => {
                let facility = value.trim();
                if !facility.is_empty() && !filters.requires(facility) {
                    filters.required_facilities.push(facility.to_string());
                }
            }
            _ => {}
        }
    }

    (query, filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn home_params_default_when_absent() {
        let (query, filters) = parse_home_params(&[]);
        assert_eq!(query, "");
        assert!(filters.is_default());
    }

    #[test]
    fn home_params_collect_filters() {
        let (query, filters) = parse_home_params(&pairs(&[
            ("q", "noida"),
            ("min", "6000"),
            ("max", "7000"),
            ("facility", "AC"),
            ("facility", "WiFi"),
            ("facility", "AC"),
            ("facility", " "),
        ]));

        assert_eq!(query, "noida");
        assert_eq!(filters.min_price, 6000);
        assert_eq!(filters.max_price, 7000);
        assert_eq!(filters.required_facilities, vec!["AC", "WiFi"]);
    }

    #[test]
    fn malformed_prices_are_ignored() {
        let (_, filters) = parse_home_params(&pairs(&[("min", "cheap"), ("max", "-5")]));
        assert_eq!(filters, FilterSpec::default());
    }
}
