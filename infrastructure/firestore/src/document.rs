use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use business::domain::shared::record::RawRecord;

use super::value::Value;

/// A document as returned by the Firestore REST API. `name` is the full
/// resource path, e.g.
/// `projects/{pid}/databases/(default)/documents/restaurants/{id}/menus/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl Document {
    /// The last path segment: the document id.
    pub fn doc_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// The document id directly under the named ancestor collection, if this
    /// document is nested below one. For a menu document this yields the
    /// owning restaurant id.
    pub fn parent_id(&self, collection: &str) -> Option<&str> {
        let mut segments = self.name.split('/');
        while let Some(segment) = segments.next() {
            if segment == collection {
                return segments.next();
            }
        }
        None
    }

    /// Collapses the typed field map into the loosely-typed raw record the
    /// business mappers consume.
    pub fn into_record(self) -> RawRecord {
        self.fields
            .into_iter()
            .map(|(key, value)| (key, value.into_json()))
            .collect()
    }
}

/// Response shape of the collection listing endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    pub next_page_token: Option<String>,
}

/// One element of a `runQuery` response stream. Elements carrying only a
/// read time (no document) terminate empty result sets.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryRow {
    pub document: Option<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(name: &str, fields: serde_json::Value) -> Document {
        serde_json::from_value(json!({ "name": name, "fields": fields })).unwrap()
    }

    #[test]
    fn should_extract_document_id_from_resource_name() {
        let doc = document(
            "projects/p/databases/(default)/documents/restaurants/r42",
            json!({}),
        );
        assert_eq!(doc.doc_id(), "r42");
    }

    #[test]
    fn should_extract_parent_restaurant_id_for_nested_menu() {
        let doc = document(
            "projects/p/databases/(default)/documents/restaurants/r42/menus/m7",
            json!({}),
        );

        assert_eq!(doc.doc_id(), "m7");
        assert_eq!(doc.parent_id("restaurants"), Some("r42"));
        assert_eq!(doc.parent_id("kitchens"), None);
    }

    #[test]
    fn should_collapse_fields_into_raw_record() {
        let doc = document(
            "projects/p/databases/(default)/documents/restaurants/r1/menus/m1",
            json!({
                "name": { "stringValue": "Jollof Rice" },
                "price": { "integerValue": "2500" },
                "available": { "booleanValue": true },
                "rating": { "doubleValue": 4.7 },
            }),
        );

        let record = doc.into_record();

        assert_eq!(record.get("name"), Some(&json!("Jollof Rice")));
        assert_eq!(record.get("price"), Some(&json!(2500)));
        assert_eq!(record.get("available"), Some(&json!(true)));
        assert_eq!(record.get("rating"), Some(&json!(4.7)));
    }

    #[test]
    fn should_parse_document_timestamps() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/restaurants/r1",
            "fields": {},
            "createTime": "2024-03-01T10:15:30.000Z",
            "updateTime": "2024-03-02T08:00:00.000Z",
        }))
        .unwrap();

        assert!(doc.create_time.is_some());
        assert!(doc.update_time.unwrap() > doc.create_time.unwrap());
    }

    #[test]
    fn should_default_missing_document_list_to_empty() {
        let response: ListDocumentsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.documents.is_empty());
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn should_skip_read_time_only_query_rows() {
        let row: RunQueryRow =
            serde_json::from_value(json!({ "readTime": "2024-03-01T10:15:30.000Z" })).unwrap();
        assert!(row.document.is_none());
    }
}
