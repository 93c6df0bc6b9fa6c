//! Endpoint table.

use std::borrow::Cow;

use crate::Language;

macro_rules! defbase {
	($host:literal, $base:literal, $($(#[$meta:meta])* $kind:ident ($id:ident) <- $endpoint:literal),* $(,)?) => {
		/// Default host of the service.
		pub const DEFAULT_HOST: &str = $host;
		$(
			#[doc = concat!("Default base URL of the `", $endpoint, "` endpoint.")]
			pub const $id: &str = concat!($host, $base, $endpoint);
		)*

		/// Symbolic endpoint name.
		#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
		pub enum EndpointKind {
			$($(#[$meta])* $kind,)*
		}

		impl EndpointKind {
			/// All endpoint kinds, in table order.
			pub const ALL: [EndpointKind; ENDPOINT_COUNT] = [$(EndpointKind::$kind),*];

			/// The endpoint's path relative to the host.
			pub const fn path(self) -> &'static str {
				match self {
					$(EndpointKind::$kind => concat!($base, $endpoint),)*
				}
			}

			const fn default_url(self) -> &'static str {
				match self {
					$(EndpointKind::$kind => $id,)*
				}
			}
		}

		const ENDPOINT_COUNT: usize = [$(stringify!($kind)),*].len();
	};
}

defbase!("https://www.cbr.ru", "/scripts/",
	/// Currency catalog.
	Metadata (METADATA) <- "XML_val.asp",
	/// Daily rates in Russian.
	DailyNative (DAILY_NATIVE) <- "XML_daily.asp",
	/// Daily rates in English.
	DailyAlternate (DAILY_ALTERNATE) <- "XML_daily_eng.asp",
	/// Single currency rates over a date range.
	DynamicRange (DYNAMIC_RANGE) <- "XML_dynamic.asp",
);

impl EndpointKind {
	/// The daily rates endpoint serving the given language.
	pub const fn daily(language: Language) -> Self {
		match language {
			Language::Native => EndpointKind::DailyNative,
			Language::Alternate => EndpointKind::DailyAlternate,
		}
	}
}

/// Mapping of [`EndpointKind`] to base URL.
///
/// The table is fixed once built; the consuming setters produce a new table.
///
/// # Examples
/// ```
/// # use cbrf::{Endpoints, EndpointKind};
/// let endpoints = Endpoints::with_host("http://localhost:8080/");
/// assert_eq!(endpoints.get(EndpointKind::DailyNative), "http://localhost:8080/scripts/XML_daily.asp");
/// ```
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub struct Endpoints {
	urls: [Cow<'static, str>; ENDPOINT_COUNT],
}

impl Endpoints {
	/// The table pointing at the service's public host.
	pub fn new() -> Self {
		Self { urls: EndpointKind::ALL.map(|kind| Cow::Borrowed(kind.default_url())) }
	}

	/// The table with every endpoint served under `host` at its usual path.
	pub fn with_host(host: &str) -> Self {
		let host = host.trim_end_matches('/');
		Self {
			urls: EndpointKind::ALL.map(|kind| Cow::Owned(format!("{host}{}", kind.path()))),
		}
	}

	/// Replaces the base URL of one endpoint.
	pub fn set(mut self, kind: EndpointKind, url: impl Into<Cow<'static, str>>) -> Self {
		self.urls[kind as usize] = url.into();
		self
	}

	/// Gets the base URL of an endpoint.
	#[inline] pub fn get(&self, kind: EndpointKind) -> &str { &self.urls[kind as usize] }

	/// Whether the endpoint still has its default base URL.
	pub fn is_default(&self, kind: EndpointKind) -> bool { self.get(kind) == kind.default_url() }
}

impl Default for Endpoints { #[inline] fn default() -> Self { Self::new() } }
