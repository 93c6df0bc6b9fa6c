//! Requests to the dynamic range endpoint.

use chrono::NaiveDate;

use crate::{Endpoints, Error, Result};

/// [`Request`] builder.
///
/// # Examples
/// ```
/// # use chrono::NaiveDate;
/// # use cbrf::dynamic::Builder;
/// let request = Builder::new()
/// 	.start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
/// 	.end(NaiveDate::from_ymd_opt(2020, 1, 31).unwrap())
/// 	.currency("R01235")
/// 	.build()
/// 	.unwrap();
/// assert_eq!(request.currency, "R01235");
/// ```
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Builder {
	/// First day of the range (`date_req1`).
	pub start: Option<NaiveDate>,
	/// Last day of the range (`date_req2`).
	pub end: Option<NaiveDate>,
	/// The service's internal currency id, e.g. `R01235` (`VAL_NM_RQ`).
	pub currency: Option<String>,
}

impl Builder {
	/// Creates an empty [`Builder`].
	pub const fn new() -> Self {
		Self { start: None, end: None, currency: None }
	}

	/// Sets the [`start`](Builder::start).
	pub fn start(mut self, start: NaiveDate) -> Self {
		self.start = Some(start);
		self
	}

	/// Sets the [`end`](Builder::end).
	pub fn end(mut self, end: NaiveDate) -> Self {
		self.end = Some(end);
		self
	}

	/// Sets the [`currency`](Builder::currency).
	pub fn currency(mut self, currency: impl Into<String>) -> Self {
		self.currency = Some(currency.into());
		self
	}

	/// Builds the [`Request`].
	///
	/// Fails with [`Error::InvalidArgument`] naming the first missing parameter.
	pub fn build(self) -> Result<Request> {
		let missing = |name: &str| Error::InvalidArgument(format!("missing required parameter `{name}`"));
		Ok(Request {
			start: self.start.ok_or_else(|| missing("start"))?,
			end: self.end.ok_or_else(|| missing("end"))?,
			currency: self.currency.ok_or_else(|| missing("currency"))?,
		})
	}
}

impl TryFrom<Builder> for Request {
	type Error = Error;

	#[inline] fn try_from(builder: Builder) -> Result<Self> { builder.build() }
}

/// A complete dynamic range request.
///
/// The dates are not required to be in order and the currency is sent as is.
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub struct Request {
	/// First day of the range.
	pub start: NaiveDate,
	/// Last day of the range.
	pub end: NaiveDate,
	/// The service's internal currency id.
	pub currency: String,
}

impl Request {
	/// Creates a new [`Request`].
	pub fn new(start: NaiveDate, end: NaiveDate, currency: impl Into<String>) -> Self {
		Self { start, end, currency: currency.into() }
	}

	/// The request URL on the given endpoints.
	pub fn url(&self, endpoints: &Endpoints) -> String {
		endpoints.dynamic_range_url(self.start, self.end, &self.currency)
	}
}
