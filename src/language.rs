//! Response [`Language`].

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Language of the daily rates response.
///
/// Each language is served by its own endpoint, see [`EndpointKind`](crate::EndpointKind).
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize)]
pub enum Language {
	/// Russian, the service's native language (`rus`).
	#[default]
	#[serde(rename = "rus")]
	Native,
	/// English (`eng`).
	#[serde(rename = "eng")]
	Alternate,
}

impl Language {
	/// The textual form of the language.
	pub const fn as_str(self) -> &'static str {
		match self {
			Language::Native => "rus",
			Language::Alternate => "eng",
		}
	}
}

impl<'a> TryFrom<&'a str> for Language {
	type Error = Error;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		match value {
			"rus" => Ok(Language::Native),
			"eng" => Ok(Language::Alternate),
			other => Err(Error::InvalidArgument(format!(
				r#"language must be "rus" or "eng", got {other:?}"#
			))),
		}
	}
}

impl FromStr for Language {
	type Err = Error;

	#[inline] fn from_str(s: &str) -> Result<Self, Self::Err> { s.try_into() }
}

impl AsRef<str> for Language {
	#[inline] fn as_ref(&self) -> &str { self.as_str() }
}

impl Display for Language {
	#[inline] fn fmt(&self, f: &mut Formatter) -> fmt::Result { self.as_str().fmt(f) }
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_parse() {
		assert_eq!("rus".parse::<Language>().unwrap(), Language::Native);
		assert_eq!("eng".parse::<Language>().unwrap(), Language::Alternate);
		assert!(matches!("RUS".parse::<Language>(), Err(Error::InvalidArgument(_))));
		assert!(matches!("".parse::<Language>(), Err(Error::InvalidArgument(_))));
		assert!(matches!(Language::try_from("de"), Err(Error::InvalidArgument(_))));
	}

	#[test]
	fn test_display() {
		assert_eq!(Language::Native.to_string(), "rus");
		assert_eq!(Language::Alternate.to_string(), "eng");
		assert_eq!(Language::default(), Language::Native);
	}

	#[test]
	fn test_serde() {
		let serialized = serde_json::to_string(&Language::Alternate).unwrap();
		assert_eq!(serialized, r#""eng""#);
		let deserialized: Language = serde_json::from_str(r#""rus""#).unwrap();
		assert_eq!(deserialized, Language::Native);
	}
}
