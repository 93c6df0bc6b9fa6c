//! Blocking [`Client`].

use chrono::NaiveDate;

use crate::{
	decode::decode_body,
	dynamic,
	url::Catalog,
	xml::{self, Element},
	Endpoints, Error, Language, Result, TransportError,
};

/// Client for the service's XML endpoints.
///
/// Every operation sends one GET request, decodes the body as windows-1251 and returns the root of the parsed
/// document. Nothing is retried or cached.
///
/// The transport is [`reqwest::blocking::Client`], so a [`Client`] must not be used from within an async runtime.
#[derive(Debug, Clone, Default)]
pub struct Client {
	http: reqwest::blocking::Client,
	endpoints: Endpoints,
}

impl Client {
	/// Creates a client for the public service with a default transport.
	pub fn new() -> Self { Self::default() }

	/// Sets the endpoint table.
	pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
		self.endpoints = endpoints;
		self
	}

	/// Sets the transport, e.g. to configure timeouts or a proxy.
	pub fn with_http(mut self, http: reqwest::blocking::Client) -> Self {
		self.http = http;
		self
	}

	/// The endpoint table in use.
	#[inline] pub fn endpoints(&self) -> &Endpoints { &self.endpoints }

	/// Fetches the currency catalog (`Valuta` root).
	pub fn currencies_info(&self) -> Result<Element> {
		self.fetch(&self.endpoints.metadata_url())
	}

	/// Fetches one of the currency catalogs (`Valuta` root).
	pub fn currencies_catalog(&self, catalog: Catalog) -> Result<Element> {
		self.fetch(&self.endpoints.catalog_url(catalog))
	}

	/// Fetches the rates of a day, or the current rates without a `date` (`ValCurs` root).
	///
	/// An unknown `language` fails with [`Error::InvalidArgument`] before anything is sent.
	pub fn daily_rate<L>(&self, date: Option<NaiveDate>, language: L) -> Result<Element>
	where L: TryInto<Language>, Error: From<L::Error> {
		self.fetch(&self.endpoints.daily_rate_url(date, language)?)
	}

	/// Fetches a currency's rates over a date range (`ValCurs` root).
	pub fn dynamic_rates(&self, start: NaiveDate, end: NaiveDate, currency_code: &str) -> Result<Element> {
		self.fetch(&self.endpoints.dynamic_range_url(start, end, currency_code))
	}

	/// Sends a built dynamic range [`Request`](dynamic::Request).
	pub fn send(&self, request: &dynamic::Request) -> Result<Element> {
		self.fetch(&request.url(&self.endpoints))
	}

	fn fetch(&self, url: &str) -> Result<Element> {
		tracing::debug!(%url, "Sending request");
		let response = self.http.get(url).send()?;
		let status = response.status();
		if !status.is_success() {
			response.error_for_status_ref()?;
			return Err(TransportError::Status(status).into());
		}
		let body = response.bytes()?;
		tracing::trace!(%url, bytes = body.len(), "Received response");
		Ok(xml::parse(&decode_body(&body))?)
	}
}
