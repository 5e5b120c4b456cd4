//! Shared HTTP response helpers.

use crate::error::FetchFailure;

/// Return the response unchanged on success, otherwise
/// [`FetchFailure::Status`] with the status code.
///
/// Redirects have already been followed by the client, so any 3xx reaching
/// this point is treated as a failure along with 4xx and 5xx.
pub(crate) fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchFailure> {
    if !resp.status().is_success() {
        return Err(FetchFailure::Status(resp.status().as_u16()));
    }
    Ok(resp)
}
