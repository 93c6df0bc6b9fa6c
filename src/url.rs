//! URL building

use std::fmt::{self, Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EndpointKind, Endpoints, Error, Language, Result};

/// A piece of a request URL.
pub trait UrlPart: Sized {
	/// Appends the part to `url`, writing `prefix` first.
	///
	/// Returns whether anything was written.
	#[inline] fn write_url_part(self, _url: &mut String, _prefix: &str) -> bool { false }
}

impl<Inner: UrlPart> UrlPart for Option<Inner> {
	#[inline] fn write_url_part(self, url: &mut String, prefix: &str) -> bool {
		if let Some(inner) = self {
			inner.write_url_part(url, prefix)
		} else { false }
	}
}

/// A `name=value` query parameter.
#[derive(Debug, Clone, Copy)]
pub struct Param<T>(pub &'static str, pub T);

impl<T: Display> UrlPart for Param<T> {
	fn write_url_part(self, url: &mut String, prefix: &str) -> bool {
		url.push_str(prefix);
		url.push_str(self.0);
		url.push('=');
		url.push_str(&self.1.to_string());
		true
	}
}

/// A date in the service's `DD.MM.YYYY` format.
///
/// The date's own calendar fields are used as they are.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct DateParam(pub NaiveDate);

impl Display for DateParam {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{:02}.{:02}.{:04}", self.0.day(), self.0.month(), self.0.year())
	}
}

/// Formats a date the way the service expects it in queries.
///
/// # Examples
/// ```
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
/// assert_eq!(cbrf::url::format_date(date), "02.01.2020");
/// ```
pub fn format_date(date: NaiveDate) -> String { DateParam(date).to_string() }

/// Incremental URL writer choosing between `?` and `&` separators.
struct UrlWriter {
	url: String,
	has_query: bool,
}

impl UrlWriter {
	fn new(base: &str) -> Self {
		Self { url: base.to_owned(), has_query: base.contains('?') }
	}

	fn part(mut self, part: impl UrlPart) -> Self {
		let prefix = if self.has_query { "&" } else { "?" };
		self.has_query |= part.write_url_part(&mut self.url, prefix);
		self
	}

	#[inline] fn finish(self) -> String { self.url }
}

/// The currency list served by the metadata endpoint.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Catalog {
	/// Currencies with rates set every day (`d=0`).
	#[default]
	Daily,
	/// Currencies with rates set monthly (`d=1`).
	Monthly,
}

impl Catalog {
	/// Value of the `d` query parameter.
	pub const fn code(self) -> u8 {
		match self {
			Catalog::Daily => 0,
			Catalog::Monthly => 1,
		}
	}
}

impl Endpoints {
	/// URL of the metadata endpoint, as is.
	pub fn metadata_url(&self) -> String { self.get(EndpointKind::Metadata).to_owned() }

	/// URL of the metadata endpoint listing the given catalog.
	pub fn catalog_url(&self, catalog: Catalog) -> String {
		UrlWriter::new(self.get(EndpointKind::Metadata))
			.part(Param("d", catalog.code()))
			.finish()
	}

	/// URL of the daily rates endpoint.
	///
	/// Without a date the service answers with the current rates and the base URL is returned unchanged.
	///
	/// Fails with [`Error::InvalidArgument`] when `language` is a string other than `rus` or `eng`.
	pub fn daily_rate_url<L>(&self, date: Option<NaiveDate>, language: L) -> Result<String>
	where L: TryInto<Language>, Error: From<L::Error> {
		let language = language.try_into()?;
		Ok(UrlWriter::new(self.get(EndpointKind::daily(language)))
			.part(date.map(|date| Param("date_req", DateParam(date))))
			.finish())
	}

	/// URL of the dynamic range endpoint.
	///
	/// Neither the currency code nor the order of the dates is checked.
	pub fn dynamic_range_url(&self, start: NaiveDate, end: NaiveDate, currency_code: &str) -> String {
		UrlWriter::new(self.get(EndpointKind::DynamicRange))
			.part(Param("date_req1", DateParam(start)))
			.part(Param("date_req2", DateParam(end)))
			.part(Param("VAL_NM_RQ", currency_code))
			.finish()
	}
}

/// [`Endpoints::metadata_url`] on the default endpoints.
pub fn build_metadata_url() -> String { Endpoints::new().metadata_url() }

/// [`Endpoints::catalog_url`] on the default endpoints.
pub fn build_metadata_catalog_url(catalog: Catalog) -> String { Endpoints::new().catalog_url(catalog) }

/// [`Endpoints::daily_rate_url`] on the default endpoints.
pub fn build_daily_rate_url<L>(date: Option<NaiveDate>, language: L) -> Result<String>
where L: TryInto<Language>, Error: From<L::Error> {
	Endpoints::new().daily_rate_url(date, language)
}

/// [`Endpoints::dynamic_range_url`] on the default endpoints.
pub fn build_dynamic_range_url(start: NaiveDate, end: NaiveDate, currency_code: &str) -> String {
	Endpoints::new().dynamic_range_url(start, end, currency_code)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::endpoint::{DAILY_ALTERNATE, DAILY_NATIVE, DYNAMIC_RANGE, METADATA};

	fn ymd(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

	#[test]
	fn test_param() {
		let mut url = String::from("base");
		assert!(Param("d", 1).write_url_part(&mut url, "?"));
		assert!(Some(Param("date_req", DateParam(ymd(2020, 3, 4)))).write_url_part(&mut url, "&"));
		assert!(!None::<Param<u8>>.write_url_part(&mut url, "&"));
		assert_eq!(url, "base?d=1&date_req=04.03.2020");
	}

	#[test]
	fn test_format_date() {
		assert_eq!(format_date(ymd(2020, 1, 1)), "01.01.2020");
		assert_eq!(format_date(ymd(1999, 12, 31)), "31.12.1999");
		assert_eq!(format_date(ymd(992, 7, 9)), "09.07.0992");
	}

	#[test]
	fn test_metadata() {
		assert_eq!(build_metadata_url(), METADATA);
		assert_eq!(build_metadata_catalog_url(Catalog::Daily), format!("{METADATA}?d=0"));
		assert_eq!(build_metadata_catalog_url(Catalog::Monthly), format!("{METADATA}?d=1"));
	}

	#[test]
	fn test_daily_without_date() {
		assert_eq!(build_daily_rate_url(None, Language::Native).unwrap(), DAILY_NATIVE);
		assert_eq!(build_daily_rate_url(None, Language::Alternate).unwrap(), DAILY_ALTERNATE);
		assert_eq!(build_daily_rate_url(None, "rus").unwrap(), DAILY_NATIVE);
		assert_eq!(build_daily_rate_url(None, "eng").unwrap(), DAILY_ALTERNATE);
	}

	#[test]
	fn test_daily_with_date() {
		for date in [ymd(2020, 1, 1), ymd(2002, 3, 2), ymd(2023, 11, 28)] {
			let url = build_daily_rate_url(Some(date), Language::Native).unwrap();
			assert!(url.starts_with(DAILY_NATIVE));
			assert!(url.ends_with(&format!("date_req={}", format_date(date))), "{url}");
		}
		assert_eq!(
			build_daily_rate_url(Some(ymd(2021, 5, 7)), "eng").unwrap(),
			format!("{DAILY_ALTERNATE}?date_req=07.05.2021"),
		);
	}

	#[test]
	fn test_daily_invalid_language() {
		for language in ["", "ru", "en", "RUS", "deu"] {
			assert!(matches!(build_daily_rate_url(None, language), Err(Error::InvalidArgument(_))));
		}
	}

	#[test]
	fn test_dynamic_range() {
		let url = build_dynamic_range_url(ymd(2020, 1, 1), ymd(2020, 1, 31), "R01235");
		assert_eq!(url, format!("{DYNAMIC_RANGE}?date_req1=01.01.2020&date_req2=31.01.2020&VAL_NM_RQ=R01235"));
	}

	#[test]
	fn test_dynamic_range_reversed() {
		let url = build_dynamic_range_url(ymd(2020, 2, 1), ymd(2019, 1, 1), "");
		let query = url.split_once('?').unwrap().1;
		assert_eq!(query.matches("date_req1=").count(), 1);
		assert_eq!(query.matches("date_req2=").count(), 1);
		assert_eq!(query.matches("VAL_NM_RQ=").count(), 1);
		let first = query.find("date_req1=").unwrap();
		let second = query.find("date_req2=").unwrap();
		let third = query.find("VAL_NM_RQ=").unwrap();
		assert!(first < second && second < third);
	}

	#[test]
	fn test_base_with_query() {
		let endpoints = Endpoints::default().set(EndpointKind::DailyNative, "http://mirror/daily?key=1");
		assert_eq!(
			endpoints.daily_rate_url(Some(ymd(2020, 1, 1)), Language::Native).unwrap(),
			"http://mirror/daily?key=1&date_req=01.01.2020",
		);
	}
}
