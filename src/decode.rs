//! Response body decoding.

use std::borrow::Cow;

use encoding_rs::{Encoding, WINDOWS_1251_INIT};

/// The encoding every response body is decoded with.
///
/// The service's `Content-Type` charset and XML prolog are not reliable, so neither is consulted.
pub static RESPONSE_ENCODING: &Encoding = &WINDOWS_1251_INIT;

/// Decodes a raw response body.
///
/// Decoding never fails: unmapped bytes become U+FFFD. A leading BOM is not treated specially.
pub fn decode_body(bytes: &[u8]) -> Cow<'_, str> {
	RESPONSE_ENCODING.decode_without_bom_handling(bytes).0
}

#[cfg(test)]
mod test {
	use encoding_rs::WINDOWS_1251;

	use super::*;

	#[test]
	fn test_encoding() {
		assert_eq!(RESPONSE_ENCODING, WINDOWS_1251);
		assert_eq!(RESPONSE_ENCODING.name(), "windows-1251");
	}

	#[test]
	fn test_cyrillic() {
		let (bytes, _, unmappable) = WINDOWS_1251.encode("Доллар США");
		assert!(!unmappable);
		assert_eq!(bytes.len(), "Доллар США".chars().count());
		assert_eq!(decode_body(&bytes), "Доллар США");
	}

	#[test]
	fn test_not_utf8() {
		let (bytes, _, _) = WINDOWS_1251.encode("Евро");
		assert!(std::str::from_utf8(&bytes).is_err());
		assert_eq!(decode_body(&bytes), "Евро");
	}

	#[test]
	fn test_ascii() {
		assert_eq!(decode_body(b"<ValCurs Date=\"02.01.2020\"/>"), r#"<ValCurs Date="02.01.2020"/>"#);
	}
}
