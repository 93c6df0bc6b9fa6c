//! Generic XML [`Element`] tree.

use std::{collections::BTreeMap, str::FromStr};

use quick_xml::{
	events::{BytesStart, Event},
	Reader,
};
use serde::{Deserialize, Serialize};

/// An XML element with everything beneath it.
///
/// Responses are handed out as their root element; no further typing is applied.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
	/// The tag name, with its prefix if it has one.
	pub tag: String,
	/// Attributes by name, unescaped.
	pub attributes: BTreeMap<String, String>,
	/// Child elements in document order.
	pub children: Vec<Element>,
	/// Direct text content (text and CDATA between the element's own tags, concatenated),
	/// or [`None`] when there is none.
	pub text: Option<String>,
}

impl Element {
	/// Creates an element with no attributes, children or text.
	pub fn new(tag: impl Into<String>) -> Self {
		Self { tag: tag.into(), ..Default::default() }
	}

	/// Gets an attribute value.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	/// Gets the text content.
	pub fn text(&self) -> Option<&str> { self.text.as_deref() }

	/// The first child with the given tag.
	pub fn find(&self, tag: &str) -> Option<&Element> {
		self.children.iter().find(|child| child.tag == tag)
	}

	/// All children with the given tag.
	pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
		self.children.iter().filter(move |child| child.tag == tag)
	}

	/// Text of the first child with the given tag.
	///
	/// # Examples
	/// ```
	/// let root: cbrf::Element = "<Valute><CharCode>USD</CharCode></Valute>".parse().unwrap();
	/// assert_eq!(root.find_text("CharCode"), Some("USD"));
	/// ```
	pub fn find_text(&self, tag: &str) -> Option<&str> {
		self.find(tag).and_then(Element::text)
	}

	/// This element and all its descendants, depth first in document order.
	pub fn descendants(&self) -> impl Iterator<Item = &Element> {
		let mut stack = vec![self];
		std::iter::from_fn(move || {
			let element = stack.pop()?;
			stack.extend(element.children.iter().rev());
			Some(element)
		})
	}

	fn push_text(&mut self, text: &str) {
		match &mut self.text {
			Some(existing) => existing.push_str(text),
			None => self.text = Some(text.to_owned()),
		}
	}
}

impl FromStr for Element {
	type Err = ParseError;

	#[inline] fn from_str(s: &str) -> Result<Self, Self::Err> { parse(s) }
}

/// An error parsing a document into an [`Element`] tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
	/// Syntax error reported by the XML reader.
	#[error("xml error at position {position}: {source}")]
	Syntax {
		/// Byte offset in the decoded text.
		position: u64,
		/// The reader's error.
		source: quick_xml::Error,
	},
	/// The document has no root element.
	#[error("no root element")]
	NoRoot,
	/// The document ended inside an element.
	#[error("unclosed element <{0}>")]
	Unclosed(String),
	/// Text or elements before or after the root element.
	#[error("unexpected content outside the root element")]
	ContentOutsideRoot,
}

/// Parses a decoded document into its root [`Element`].
///
/// The XML declaration's `encoding` is ignored: the text is already decoded.
pub fn parse(text: &str) -> Result<Element, ParseError> {
	let mut reader = Reader::from_str(text);
	reader.config_mut().trim_text(true);

	let mut stack: Vec<Element> = Vec::new();
	let mut root: Option<Element> = None;

	loop {
		let event = reader.read_event().map_err(|e| syntax(&reader, e))?;
		match event {
			Event::Start(start) => {
				if root.is_some() { return Err(ParseError::ContentOutsideRoot) }
				let element = start_element(&start).map_err(|e| syntax(&reader, e))?;
				stack.push(element);
			}
			Event::Empty(start) => {
				if root.is_some() { return Err(ParseError::ContentOutsideRoot) }
				let element = start_element(&start).map_err(|e| syntax(&reader, e))?;
				close(element, &mut stack, &mut root);
			}
			Event::End(_) => {
				// end names are checked by the reader
				let element = stack.pop().ok_or(ParseError::ContentOutsideRoot)?;
				close(element, &mut stack, &mut root);
			}
			Event::Text(text) => {
				let text = text.unescape().map_err(|e| syntax(&reader, quick_xml::Error::from(e)))?;
				match stack.last_mut() {
					Some(parent) => parent.push_text(&text),
					None if text.trim().is_empty() => {}
					None => return Err(ParseError::ContentOutsideRoot),
				}
			}
			Event::CData(cdata) => {
				let cdata = cdata.into_inner();
				match stack.last_mut() {
					Some(parent) => parent.push_text(&String::from_utf8_lossy(&cdata)),
					None => return Err(ParseError::ContentOutsideRoot),
				}
			}
			Event::Eof => break,
			// declaration, comments, processing instructions, doctype
			_ => {}
		}
	}

	if let Some(unclosed) = stack.pop() {
		return Err(ParseError::Unclosed(unclosed.tag));
	}
	root.ok_or(ParseError::NoRoot)
}

fn syntax(reader: &Reader<&[u8]>, source: quick_xml::Error) -> ParseError {
	ParseError::Syntax { position: reader.buffer_position() as u64, source }
}

fn start_element(start: &BytesStart) -> Result<Element, quick_xml::Error> {
	let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
	for attribute in start.attributes() {
		let attribute = attribute.map_err(quick_xml::Error::from)?;
		let value = attribute.unescape_value().map_err(quick_xml::Error::from)?;
		element
			.attributes
			.insert(String::from_utf8_lossy(attribute.key.as_ref()).into_owned(), value.into_owned());
	}
	Ok(element)
}

fn close(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
	match stack.last_mut() {
		Some(parent) => parent.children.push(element),
		None => *root = Some(element),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	const DAILY: &str = r#"<?xml version="1.0" encoding="windows-1251"?>
<ValCurs Date="02.01.2020" name="Foreign Currency Market">
	<Valute ID="R01235">
		<NumCode>840</NumCode>
		<CharCode>USD</CharCode>
		<Nominal>1</Nominal>
		<Name>Доллар США</Name>
		<Value>61,9057</Value>
	</Valute>
	<Valute ID="R01239">
		<NumCode>978</NumCode>
		<CharCode>EUR</CharCode>
		<Nominal>1</Nominal>
		<Name>Евро</Name>
		<Value>69,3777</Value>
	</Valute>
</ValCurs>"#;

	#[test]
	fn test_parse_daily() {
		let root = parse(DAILY).unwrap();
		assert_eq!(root.tag, "ValCurs");
		assert_eq!(root.attr("Date"), Some("02.01.2020"));
		assert_eq!(root.text(), None);
		let valutes: Vec<_> = root.find_all("Valute").collect();
		assert_eq!(valutes.len(), 2);
		assert_eq!(valutes[0].attr("ID"), Some("R01235"));
		assert_eq!(valutes[0].find_text("Name"), Some("Доллар США"));
		assert_eq!(valutes[1].find_text("CharCode"), Some("EUR"));
		assert_eq!(valutes[1].find_text("Value"), Some("69,3777"));
	}

	#[test]
	fn test_descendants() {
		let root = parse(DAILY).unwrap();
		let tags: Vec<_> = root.descendants().take(4).map(|e| e.tag.as_str()).collect();
		assert_eq!(tags, ["ValCurs", "Valute", "NumCode", "CharCode"]);
		assert_eq!(root.descendants().filter(|e| e.tag == "Name").count(), 2);
	}

	#[test]
	fn test_empty_and_escapes() {
		let root = parse(r#"<a x="1 &amp; 2"><b/><c>&lt;ok&gt;</c><d><![CDATA[<raw>]]></d></a>"#).unwrap();
		assert_eq!(root.attr("x"), Some("1 & 2"));
		assert_eq!(root.children.len(), 3);
		assert_eq!(root.find("b"), Some(&Element::new("b")));
		assert_eq!(root.find_text("c"), Some("<ok>"));
		assert_eq!(root.find_text("d"), Some("<raw>"));
	}

	#[test]
	fn test_from_str() {
		let root: Element = "<ValCurs/>".parse().unwrap();
		assert_eq!(root, Element::new("ValCurs"));
	}

	#[test]
	fn test_malformed() {
		assert!(matches!(parse(""), Err(ParseError::NoRoot)));
		assert!(matches!(parse("<?xml version=\"1.0\"?>"), Err(ParseError::NoRoot)));
		assert!(matches!(parse("<a><b></b>"), Err(ParseError::Unclosed(tag)) if tag == "a"));
		assert!(matches!(parse("<a></b>"), Err(ParseError::Syntax { .. })));
		assert!(matches!(parse("<a/><b/>"), Err(ParseError::ContentOutsideRoot)));
		assert!(matches!(parse("<a/>text"), Err(ParseError::ContentOutsideRoot)));
		assert!(parse("<html><body>Service unavailable").is_err());
	}

	#[test]
	fn test_content_before_root() {
		assert!(matches!(parse("text<a/>"), Err(ParseError::ContentOutsideRoot)));
		// a UTF-8 byte order mark read as windows-1251
		let decoded = crate::decode::decode_body(b"\xEF\xBB\xBF<ValCurs/>");
		assert!(decoded.starts_with("п»ї"));
		assert!(matches!(parse(&decoded), Err(ParseError::ContentOutsideRoot)));
	}

	#[test]
	fn test_serialize() {
		let root = parse(r#"<Valute ID="R01235"><Name>USD</Name></Valute>"#).unwrap();
		let json = serde_json::to_value(&root).unwrap();
		assert_eq!(json["tag"], "Valute");
		assert_eq!(json["attributes"]["ID"], "R01235");
		assert_eq!(json["children"][0]["text"], "USD");
	}
}
