//! [Central Bank of Russia](https://www.cbr.ru/development/SXML/) exchange rates XML API library.
//!
//! Responses are returned as a generic [`Element`] tree.
//!
//! # Examples
//! ```no_run
//! let rates = cbrf::get_daily_rate(None, cbrf::Language::Native)?;
//! for valute in rates.find_all("Valute") {
//! 	println!("{:?} {:?}", valute.find_text("CharCode"), valute.find_text("Value"));
//! }
//! # Ok::<(), cbrf::Error>(())
//! ```

#![deny(missing_docs)]

use std::sync::OnceLock;

use chrono::NaiveDate;

mod client;
pub use client::Client;

pub mod decode;

pub mod dynamic;

mod endpoint;
pub use endpoint::*;

mod error;
pub use error::{Error, Result, TransportError};

mod language;
pub use language::Language;

pub mod url;
pub use url::{build_daily_rate_url, build_dynamic_range_url, build_metadata_catalog_url, build_metadata_url, Catalog};

pub mod xml;
pub use xml::Element;

fn default_client() -> &'static Client {
	static CLIENT: OnceLock<Client> = OnceLock::new();
	CLIENT.get_or_init(Client::new)
}

/// Fetches the currency catalog with a default [`Client`].
pub fn get_currencies_info() -> Result<Element> { default_client().currencies_info() }

/// Fetches daily rates with a default [`Client`], see [`Client::daily_rate`].
pub fn get_daily_rate<L>(date: Option<NaiveDate>, language: L) -> Result<Element>
where L: TryInto<Language>, Error: From<L::Error> {
	default_client().daily_rate(date, language)
}

/// Fetches a currency's rates over a date range with a default [`Client`].
pub fn get_dynamic_rates(start: NaiveDate, end: NaiveDate, currency_code: &str) -> Result<Element> {
	default_client().dynamic_rates(start, end, currency_code)
}
