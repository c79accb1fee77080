//! Write acknowledgements returned by the store ports.
//!
//! Field names follow the shapes the web client already consumes
//! (`insertedId`, `deletedCount`, ...), so handlers return them unchanged.

use serde::Serialize;
use uuid::Uuid;

/// Result of inserting one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertOneResult {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Result of updating at most one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Uuid>,
    pub upserted_count: u64,
}

impl UpdateResult {
    /// No document matched and none was created.
    pub fn unmatched() -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: None,
            upserted_count: 0,
        }
    }

    /// One document matched; `modified` tells whether its content changed.
    pub fn matched(modified: bool) -> Self {
        Self {
            matched_count: 1,
            modified_count: u64::from(modified),
            ..Self::unmatched()
        }
    }

    /// No document matched, so one was created under `id`.
    pub fn upserted(id: Uuid) -> Self {
        Self {
            upserted_id: Some(id),
            upserted_count: 1,
            ..Self::unmatched()
        }
    }
}

/// Result of deleting at most one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_result_uses_client_field_names() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(InsertOneResult::new(id)).unwrap();
        assert_eq!(json, json!({ "acknowledged": true, "insertedId": id.to_string() }));
    }

    #[test]
    fn update_result_constructors() {
        let result = UpdateResult::matched(false);
        assert_eq!((result.matched_count, result.modified_count), (1, 0));

        let id = Uuid::new_v4();
        let result = UpdateResult::upserted(id);
        assert_eq!(result.matched_count, 0);
        assert_eq!(result.upserted_id, Some(id));
        assert_eq!(result.upserted_count, 1);
    }

    #[test]
    fn update_result_serializes_null_upserted_id() {
        let json = serde_json::to_value(UpdateResult::unmatched()).unwrap();
        assert_eq!(json["matchedCount"], 0);
        assert!(json["upsertedId"].is_null());
    }

    #[test]
    fn delete_result_reports_count() {
        let json = serde_json::to_value(DeleteResult::new(0)).unwrap();
        assert_eq!(json, json!({ "acknowledged": true, "deletedCount": 0 }));
    }
}
