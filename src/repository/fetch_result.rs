// src/repository/fetch_result.rs

use crate::repository::RepositoryError;

/// Outcome of one repository call.
///
/// A failed fetch still carries usable `data` (an empty fallback) so callers
/// can keep rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult<T> {
    pub success: bool,
    pub data: T,
    pub error: Option<String>,
}

impl<T> FetchResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, fallback: T) -> Self {
        Self {
            success: false,
            data: fallback,
            error: Some(error.into()),
        }
    }
}

impl<T: Default> FetchResult<T> {
    /// Logs the error and swaps it for an empty fallback.
    pub fn from_result(context: &str, result: Result<T, RepositoryError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => {
                tracing::error!("❌ Error fetching {context}: {e}");
                Self::failed(e.to_string(), T::default())
            }
        }
    }
}
