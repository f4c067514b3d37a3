// Ringvault — XML key fragments
//
// A KeyElement is one key's XML document as the host framework hands it
// over. Parsing normalizes the fragment to a canonical compact form so
// that the stored text is byte-stable: no formatting whitespace between
// markup, no XML declaration, text and attribute content untouched.

use std::fmt;
use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use super::XmlError;

/// An XML fragment describing one cryptographic key, held in canonical
/// compact form. The element's internal schema is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyElement {
    canonical: String,
}

impl KeyElement {
    /// Parse an XML fragment and normalize it to canonical compact form.
    ///
    /// Whitespace-only text nodes between markup are dropped and any XML
    /// declaration or doctype is stripped; everything else (attributes,
    /// text content, CDATA, comments, processing instructions) is
    /// re-emitted verbatim. Parsing the canonical form again yields the
    /// same bytes.
    pub fn parse(input: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(input);
        let mut writer = Writer::new(Vec::new());
        let mut saw_element = false;

        loop {
            match reader.read_event()? {
                Event::Eof => break,
                Event::Decl(_) | Event::DocType(_) => {}
                Event::Text(ref text)
                    if text.iter().all(|b| b.is_ascii_whitespace()) => {}
                event @ (Event::Start(_) | Event::Empty(_)) => {
                    saw_element = true;
                    writer.write_event(event)?;
                }
                event => writer.write_event(event)?,
            }
        }

        if !saw_element {
            return Err(XmlError::NoElement);
        }

        Ok(Self {
            canonical: String::from_utf8(writer.into_inner())?,
        })
    }

    /// The canonical compact serialization.
    pub fn as_xml(&self) -> &str {
        &self.canonical
    }

    /// Consume the element, yielding the canonical text.
    pub fn into_xml(self) -> String {
        self.canonical
    }
}

impl FromStr for KeyElement {
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
