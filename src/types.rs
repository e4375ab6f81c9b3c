use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};

/// Age prediction for a single name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prediction {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub count: u64,
    #[serde(rename = "country_id", default)]
    pub country: String,
}

/// Quota snapshot echoed by the service in response headers.
/// Values are passed through verbatim; a missing header is an empty string.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: String,
    pub remaining: String,
    pub reset: String,
}

// Body shape of every non-200 response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    pub error: String,
}

/// Outcome of one API call.
///
/// `rate_limit` is present whenever the service answered, including error
/// statuses, and `None` only when no response was received at all.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub result: Result<T, Error>,
    pub rate_limit: Option<RateLimit>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn ok(value: T, rate_limit: RateLimit) -> Self {
        Self {
            result: Ok(value),
            rate_limit: Some(rate_limit),
        }
    }

    pub(crate) fn err(error: Error, rate_limit: Option<RateLimit>) -> Self {
        Self {
            result: Err(error),
            rate_limit,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_result(self) -> Result<T, Error> {
        self.result
    }

    pub fn into_parts(self) -> (Result<T, Error>, Option<RateLimit>) {
        (self.result, self.rate_limit)
    }

    /// Applies `f` to a successful value, keeping the rate limit either way.
    pub(crate) fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, Error>) -> ApiResponse<U> {
        ApiResponse {
            result: self.result.and_then(f),
            rate_limit: self.rate_limit,
        }
    }
}

fn null_as_zero<'de, D, N>(deserializer: D) -> Result<N, D::Error>
where
    D: Deserializer<'de>,
    N: Deserialize<'de> + Default,
{
    Ok(Option::<N>::deserialize(deserializer)?.unwrap_or_default())
}
