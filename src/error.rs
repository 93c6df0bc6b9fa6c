//! [`Error`] type.

use std::convert::Infallible;

use reqwest::StatusCode;

use crate::xml::ParseError;

/// An error from argument checking, from the HTTP client or from parsing the response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A caller-supplied parameter was rejected before any request was sent.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// The request failed or was answered with a non-success status.
	#[error(transparent)]
	TransportError(#[from] TransportError),
	/// The decoded response body is not well-formed XML.
	#[error("failed to parse the response: {0}")]
	MalformedResponse(#[from] ParseError),
}

impl From<reqwest::Error> for Error {
	#[inline] fn from(error: reqwest::Error) -> Self { Error::TransportError(error.into()) }
}

impl From<Infallible> for Error {
	#[inline] fn from(never: Infallible) -> Self { match never {} }
}

/// Failure of the HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	/// HTTP client error, including 4xx and 5xx statuses.
	#[error("http error: {0}")]
	Http(#[from] reqwest::Error),
	/// Any other status outside 2xx, such as a redirect that was not followed.
	#[error("http error: unexpected status {0}")]
	Status(StatusCode),
}

impl TransportError {
	/// The response status, if a response was received.
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			TransportError::Http(error) => error.status(),
			TransportError::Status(status) => Some(*status),
		}
	}
}

/// Shorthand for results with the crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
