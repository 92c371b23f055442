use serde::Serialize;

use super::value::Value;

/// The subset of Firestore's structured query the catalog needs: collection
/// selection (optionally across all same-named nested collections), equality
/// filter, single-field order and a result limit. A replacement backend has
/// to offer exactly this much.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    from: Vec<CollectionSelector>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    filter: Option<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    order_by: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl StructuredQuery {
    /// Query one collection directly under the request's parent path.
    pub fn collection(collection_id: &str) -> Self {
        Self::new(collection_id, false)
    }

    /// Collection-group mode: one query over every collection with this id,
    /// regardless of parent.
    pub fn collection_group(collection_id: &str) -> Self {
        Self::new(collection_id, true)
    }

    fn new(collection_id: &str, all_descendants: bool) -> Self {
        Self {
            from: vec![CollectionSelector {
                collection_id: collection_id.to_string(),
                all_descendants,
            }],
            filter: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    pub fn where_eq(mut self, field: &str, value: Value) -> Self {
        self.filter = Some(Filter::FieldFilter(FieldFilter {
            field: FieldReference::new(field),
            op: Operator::Equal,
            value,
        }));
        self
    }

    pub fn order_by_asc(self, field: &str) -> Self {
        self.order_by(field, Direction::Ascending)
    }

    pub fn order_by_desc(self, field: &str) -> Self {
        self.order_by(field, Direction::Descending)
    }

    fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by.push(Order {
            field: FieldReference::new(field),
            direction,
        });
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
    all_descendants: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
enum Filter {
    FieldFilter(FieldFilter),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldFilter {
    field: FieldReference,
    op: Operator,
    value: Value,
}

#[derive(Debug, Clone, Serialize)]
enum Operator {
    #[serde(rename = "EQUAL")]
    Equal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Order {
    field: FieldReference,
    direction: Direction,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: String,
}

impl FieldReference {
    fn new(field_path: &str) -> Self {
        Self {
            field_path: field_path.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
enum Direction {
    #[serde(rename = "ASCENDING")]
    Ascending,
    #[serde(rename = "DESCENDING")]
    Descending,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryRequest {
    pub structured_query: StructuredQuery,
}
