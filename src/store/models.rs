// Ringvault — Stored record model
//
// The on-disk schema: one document per key, a single string field named
// `xml` holding the key fragment's canonical text. No ids, timestamps, or
// versioning beyond what the database adds on its own.

use mongodb::bson::{Bson, Document};

use crate::xml::KeyElement;

use super::StoreError;

/// Name of the single field every stored record carries.
pub const XML_FIELD: &str = "xml";

/// The database-side representation of one key document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub xml: String,
}

impl StoredRecord {
    /// Encode a key element into its stored form.
    pub fn from_element(element: &KeyElement) -> Self {
        Self {
            xml: element.as_xml().to_owned(),
        }
    }

    /// Build the BSON document to insert.
    pub fn into_document(self) -> Document {
        let mut document = Document::new();
        document.insert(XML_FIELD, self.xml);
        document
    }

    /// Strict decode of a scanned row. The `xml` field must be present and
    /// string-typed; anything else is a data-integrity violation.
    pub fn from_document(document: &Document) -> Result<Self, StoreError> {
        match document.get(XML_FIELD) {
            Some(Bson::String(xml)) => Ok(Self { xml: xml.clone() }),
            Some(other) => Err(StoreError::MalformedRecord(format!(
                "field `{}` must be a string, found {:?}",
                XML_FIELD,
                other.element_type()
            ))),
            None => Err(StoreError::MalformedRecord(format!(
                "field `{}` is missing",
                XML_FIELD
            ))),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_record_encodes_canonical_text() {
        let element = KeyElement::parse("<key>\n  <descriptor/>\n</key>").unwrap();
        let record = StoredRecord::from_element(&element);
        assert_eq!(record.xml, "<key><descriptor/></key>");
    }

    #[test]
    fn test_into_document_carries_single_string_field() {
        let element = KeyElement::parse(r#"<key id="1"/>"#).unwrap();
        let document = StoredRecord::from_element(&element).into_document();

        assert_eq!(document.len(), 1, "Record schema is a single field");
        assert_eq!(document.get_str(XML_FIELD).unwrap(), r#"<key id="1"/>"#);
    }

    #[test]
    fn test_from_document_accepts_string_field() {
        let document = doc! { "xml": "<key/>" };
        let record = StoredRecord::from_document(&document).unwrap();
        assert_eq!(record.xml, "<key/>");
    }

    #[test]
    fn test_from_document_rejects_missing_field() {
        let document = doc! { "other": "value" };
        let result = StoredRecord::from_document(&document);
        assert!(matches!(result, Err(StoreError::MalformedRecord(_))));
    }

    #[test]
    fn test_from_document_rejects_non_string_field() {
        let document = doc! { "xml": 42 };
        let result = StoredRecord::from_document(&document);
        assert!(matches!(result, Err(StoreError::MalformedRecord(_))));
    }

    #[test]
    fn test_document_round_trip() {
        let record = StoredRecord {
            xml: r#"<key id="9"/>"#.to_owned(),
        };
        let decoded = StoredRecord::from_document(&record.clone().into_document()).unwrap();
        assert_eq!(decoded, record);
    }
}
